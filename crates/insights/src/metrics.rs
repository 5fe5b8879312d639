use chrono::NaiveDate;
use organizer_domain::{HealthTier, ProjectStatus};
use serde::Serialize;

use crate::view::ProjectView;

/// 各健康档的项目数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HealthDistribution {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

impl HealthDistribution {
    pub fn count(&self, tier: HealthTier) -> usize {
        match tier {
            HealthTier::Excellent => self.excellent,
            HealthTier::Good => self.good,
            HealthTier::Fair => self.fair,
            HealthTier::Poor => self.poor,
        }
    }

    fn record(&mut self, tier: HealthTier) {
        match tier {
            HealthTier::Excellent => self.excellent += 1,
            HealthTier::Good => self.good += 1,
            HealthTier::Fair => self.fair += 1,
            HealthTier::Poor => self.poor += 1,
        }
    }
}

/// 仪表盘汇总指标
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioMetrics {
    pub total_projects: usize,
    pub total_source_files: usize,
    pub with_manifest: usize,
    pub with_readme: usize,
    pub need_status: usize,
    pub total_size_gb: f64,
    pub average_health: f64,
    pub health: HealthDistribution,
    pub stale_projects: usize,
    /// Complete 占比（百分比）
    pub completion_rate: f64,
}

impl PortfolioMetrics {
    pub fn compute(views: &[ProjectView<'_>], today: NaiveDate, stale_after_days: i64) -> Self {
        let total = views.len();
        let mut health = HealthDistribution::default();
        let mut health_sum = 0u64;
        let mut size_mb = 0.0;
        let mut metrics = Self {
            total_projects: total,
            total_source_files: 0,
            with_manifest: 0,
            with_readme: 0,
            need_status: 0,
            total_size_gb: 0.0,
            average_health: 0.0,
            health: HealthDistribution::default(),
            stale_projects: 0,
            completion_rate: 0.0,
        };
        let mut completed = 0usize;

        for view in views {
            let project = view.project;
            metrics.total_source_files += project.source_file_count;
            metrics.with_manifest += usize::from(project.has_manifest);
            metrics.with_readme += usize::from(project.has_readme);
            match view.record.status {
                ProjectStatus::NotSet => metrics.need_status += 1,
                ProjectStatus::Complete => completed += 1,
                _ => {}
            }
            if project.days_since_modified(today) > stale_after_days {
                metrics.stale_projects += 1;
            }
            size_mb += project.size_mb;
            health_sum += u64::from(view.health);
            health.record(view.tier());
        }

        metrics.total_size_gb = size_mb / 1024.0;
        metrics.health = health;
        if total > 0 {
            metrics.average_health = health_sum as f64 / total as f64;
            metrics.completion_rate = completed as f64 / total as f64 * 100.0;
        }
        metrics
    }

    pub fn average_tier(&self) -> HealthTier {
        HealthTier::from_score(self.average_health)
    }
}
