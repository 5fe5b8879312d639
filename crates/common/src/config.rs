use std::path::{Path, PathBuf};

use crate::OrganizerError;

/// 数据目录的环境变量覆盖
pub const DATA_DIR_ENV: &str = "PROJECT_ORGANIZER_HOME";

const DEFAULT_DIR_NAME: &str = ".project-organizer";
const STATUS_FILE: &str = "project_data.json";
const SAVED_PATHS_FILE: &str = "saved_paths.json";
const STALE_AFTER_DAYS: i64 = 180;

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub status_file: String,
    pub saved_paths_file: String,
    /// 超过该天数未修改的项目视为「陈旧」
    pub stale_after_days: i64,
}

impl AppConfig {
    /// 以指定目录作为数据目录
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            status_file: STATUS_FILE.to_string(),
            saved_paths_file: SAVED_PATHS_FILE.to_string(),
            stale_after_days: STALE_AFTER_DAYS,
        }
    }

    /// 解析数据目录：显式参数 > 环境变量 > ~/.project-organizer
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, OrganizerError> {
        if let Some(dir) = explicit {
            return Ok(Self::with_data_dir(dir));
        }
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_data_dir(PathBuf::from(dir)));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| OrganizerError::Config("cannot resolve home directory".into()))?;
        Ok(Self::with_data_dir(home.join(DEFAULT_DIR_NAME)))
    }

    pub fn status_file_path(&self) -> PathBuf {
        self.data_dir.join(&self.status_file)
    }

    pub fn saved_paths_file_path(&self) -> PathBuf {
        self.data_dir.join(&self.saved_paths_file)
    }

    /// 确保数据目录存在
    pub fn ensure_data_dir(&self) -> Result<(), OrganizerError> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir).map_err(|e| {
                OrganizerError::Config(format!(
                    "cannot create data directory {}: {}",
                    self.data_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
