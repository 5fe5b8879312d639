use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::StatusRecord;

pub const EXPORT_SETTINGS_VERSION: &str = "1.0";
pub const EXPORTED_FROM: &str = "Python Project Organizer";

/// 导出的项目状态数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDataExport {
    pub export_date: NaiveDateTime,
    pub projects: BTreeMap<String, StatusRecord>,
}

/// 导出的设置（已保存路径）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsExport {
    pub export_date: NaiveDateTime,
    pub saved_paths: Vec<String>,
    pub settings: ExportInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportInfo {
    pub version: String,
    pub exported_from: String,
}

impl Default for ExportInfo {
    fn default() -> Self {
        Self {
            version: EXPORT_SETTINGS_VERSION.to_string(),
            exported_from: EXPORTED_FROM.to_string(),
        }
    }
}
