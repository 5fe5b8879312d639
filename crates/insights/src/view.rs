use organizer_domain::{HealthTier, ProjectDescriptor, StatusRecord};
use organizer_store::StatusStore;
use serde::Serialize;

use crate::health::health_score;

/// 扫描结果与状态记录按路径关联后的视图
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView<'a> {
    pub project: &'a ProjectDescriptor,
    pub record: StatusRecord,
    pub health: u8,
}

impl ProjectView<'_> {
    pub fn tier(&self) -> HealthTier {
        HealthTier::from_score(self.health as f64)
    }
}

pub fn join_views<'a>(projects: &'a [ProjectDescriptor], store: &StatusStore) -> Vec<ProjectView<'a>> {
    projects
        .iter()
        .map(|project| {
            let record = store.get(&project.path);
            let health = health_score(project, &record);
            ProjectView {
                project,
                record,
                health,
            }
        })
        .collect()
}
