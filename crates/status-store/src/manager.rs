use organizer_common::{AppConfig, OrganizerError};
use organizer_domain::{ProjectStatus, StatusRecord};

use crate::{SavedPaths, StatusStore};

/// 进程内唯一的数据管理者：持有状态记录与已保存路径，所有读写都经过它
#[derive(Debug)]
pub struct ProjectManager {
    config: AppConfig,
    pub(crate) status: StatusStore,
    pub(crate) saved_paths: SavedPaths,
    warnings: Vec<OrganizerError>,
}

impl ProjectManager {
    /// 读取两个数据文件；损坏的文件以空数据代替，错误记录在 `load_warnings`
    pub fn open(config: AppConfig) -> Self {
        let (saved_paths, paths_warning) = SavedPaths::load(config.saved_paths_file_path());
        let (status, status_warning) = StatusStore::load(config.status_file_path());
        let warnings = paths_warning.into_iter().chain(status_warning).collect();
        Self {
            config,
            status,
            saved_paths,
            warnings,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn load_warnings(&self) -> &[OrganizerError] {
        &self.warnings
    }

    pub fn status_store(&self) -> &StatusStore {
        &self.status
    }

    pub fn status_store_mut(&mut self) -> &mut StatusStore {
        &mut self.status
    }

    pub fn get_status(&self, path: &str) -> StatusRecord {
        self.status.get(path)
    }

    pub fn update_status(
        &mut self,
        path: &str,
        status: ProjectStatus,
        notes: &str,
    ) -> Result<StatusRecord, OrganizerError> {
        self.status.update(path, status, notes)
    }

    pub fn saved_paths(&self) -> &[String] {
        self.saved_paths.paths()
    }

    pub fn add_saved_path(&mut self, path: &str) -> Result<bool, OrganizerError> {
        self.saved_paths.add(path)
    }

    pub fn remove_saved_path(&mut self, path: &str) -> Result<bool, OrganizerError> {
        self.saved_paths.remove(path)
    }

    /// 删除两个数据文件并清空内存
    pub fn clear_all(&mut self) -> Result<(), OrganizerError> {
        // 第一个失败即返回，保存路径文件不再尝试删除
        self.status.clear()?;
        self.saved_paths.clear()?;
        self.warnings.clear();
        log::info!("cleared all data under {}", self.config.data_dir.display());
        Ok(())
    }
}
