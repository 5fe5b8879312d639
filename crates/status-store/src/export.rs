use chrono::NaiveDateTime;
use organizer_domain::{ExportInfo, ProjectDataExport, SettingsExport};

use crate::ProjectManager;

/// 项目状态导出文件名
pub fn project_export_file_name(now: NaiveDateTime) -> String {
    format!("project_organizer_export_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// 设置导出文件名
pub fn settings_export_file_name(now: NaiveDateTime) -> String {
    format!("organizer_settings_{}.json", now.format("%Y%m%d_%H%M%S"))
}

impl ProjectManager {
    /// 没有任何状态记录时返回 None
    pub fn export_project_data(&self, now: NaiveDateTime) -> Option<ProjectDataExport> {
        if self.status.is_empty() {
            return None;
        }
        Some(ProjectDataExport {
            export_date: now,
            projects: self.status.records().clone(),
        })
    }

    pub fn export_settings(&self, now: NaiveDateTime) -> SettingsExport {
        SettingsExport {
            export_date: now,
            saved_paths: self.saved_paths.paths().to_vec(),
            settings: ExportInfo::default(),
        }
    }
}
