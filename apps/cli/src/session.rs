//! 界面会话状态：当前根目录与扫描结果缓存，显式失效而非全局可变状态。

use organizer_common::OrganizerError;
use organizer_domain::ProjectDescriptor;
use organizer_scanner::{scan_projects_with_progress, ProgressCb, ProjectMarkers};

#[derive(Debug, Default)]
pub struct Session {
    root: Option<String>,
    snapshot: Option<Vec<ProjectDescriptor>>,
    force_scan: bool,
    markers: ProjectMarkers,
}

impl Session {
    pub fn new(markers: ProjectMarkers) -> Self {
        Self {
            markers,
            ..Self::default()
        }
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// 切换根目录，下次读取时重新扫描
    pub fn set_root(&mut self, root: &str) {
        self.root = Some(root.trim().to_string());
        self.force_scan = true;
    }

    pub fn rescan(&mut self) {
        self.force_scan = true;
    }

    pub fn clear_cache(&mut self) {
        self.snapshot = None;
    }

    pub fn is_cached(&self) -> bool {
        self.snapshot.is_some() && !self.force_scan
    }

    /// 返回缓存的扫描结果；没有缓存或已标记重扫时重新扫描
    pub fn projects(&mut self) -> Result<&[ProjectDescriptor], OrganizerError> {
        let root = self
            .root
            .clone()
            .ok_or_else(|| OrganizerError::Config("no project path set".into()))?;

        if !self.is_cached() {
            let progress: ProgressCb = Box::new(|count, path| {
                log::debug!("[{}] {}", count, path);
            });
            let projects = scan_projects_with_progress(&root, &self.markers, Some(&progress))?;
            log::info!("scanned {}: {} projects", root, projects.len());
            self.snapshot = Some(projects);
            self.force_scan = false;
        }

        Ok(self.snapshot.as_deref().unwrap_or_default())
    }
}
