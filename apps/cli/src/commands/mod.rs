pub mod scan;
pub mod dashboard;
pub mod status;
pub mod paths;
pub mod storage;

use std::io::Write;

use chrono::{Local, NaiveDate};
use organizer_common::{AppConfig, OrganizerError};
use organizer_scanner::ProjectMarkers;
use organizer_store::ProjectManager;
use serde::Serialize;

use crate::session::Session;

/// 一次命令执行期间的应用状态，显式传给各命令
pub struct App {
    pub manager: ProjectManager,
    pub session: Session,
    pub json: bool,
    pub today: NaiveDate,
}

impl App {
    pub fn open(config: AppConfig, json: bool) -> Self {
        Self {
            manager: ProjectManager::open(config),
            session: Session::new(ProjectMarkers::default()),
            json,
            today: Local::now().date_naive(),
        }
    }

    /// 使用命令行给出的根目录，否则使用第一个已保存路径
    pub fn select_root(&mut self, root: Option<String>) -> Result<(), OrganizerError> {
        let root = root
            .or_else(|| self.manager.saved_paths().first().cloned())
            .ok_or_else(|| {
                OrganizerError::Config(
                    "no project path set: pass a folder or save one with `paths add`".into(),
                )
            })?;
        self.session.set_root(&root);
        Ok(())
    }
}

pub(crate) fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<(), OrganizerError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| OrganizerError::Config(format!("cannot encode output: {}", e)))?;
    writeln!(out, "{}", text)?;
    Ok(())
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "✅"
    } else {
        "❌"
    }
}
