use std::fmt::Write as _;

use organizer_domain::ProjectStatus;
use serde::Serialize;

use crate::aggregate::aggregate_by_status;
use crate::view::ProjectView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: ProjectStatus,
    pub count: usize,
    pub percentage: f64,
}

/// 状态报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub total_projects: usize,
    pub total_source_files: usize,
    pub with_manifest: usize,
    pub with_readme: usize,
    /// 仅包含出现过的状态，按展示顺序
    pub distribution: Vec<StatusShare>,
}

impl StatusReport {
    pub fn build(views: &[ProjectView<'_>]) -> Self {
        let total = views.len();
        let counts = aggregate_by_status(views.iter().map(|v| &v.record));
        let distribution = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(status, count)| StatusShare {
                status,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            })
            .collect();

        Self {
            total_projects: total,
            total_source_files: views.iter().map(|v| v.project.source_file_count).sum(),
            with_manifest: views.iter().filter(|v| v.project.has_manifest).count(),
            with_readme: views.iter().filter(|v| v.project.has_readme).count(),
            distribution,
        }
    }

    /// 可复制的纯文本版本
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Python Projects Status Report");
        let _ = writeln!(out, "Total Projects: {}", self.total_projects);
        let _ = writeln!(out, "Total Python Files: {}", self.total_source_files);
        let _ = writeln!(out, "Projects with Requirements: {}", self.with_manifest);
        let _ = writeln!(out, "Projects with README: {}", self.with_readme);
        let _ = writeln!(out, "Status Distribution:");
        for share in &self.distribution {
            let _ = writeln!(
                out,
                "  - {}: {} ({:.1}%)",
                share.status, share.count, share.percentage
            );
        }
        out
    }
}
