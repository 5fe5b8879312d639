//! 健康度评分：基础分 50，按依赖清单、README、源文件数和状态加减，结果限制在 0..=100。

use organizer_domain::{HealthTier, ProjectDescriptor, ProjectStatus, StatusRecord};

pub const BASE_SCORE: i32 = 50;
const MANIFEST_BONUS: i32 = 15;
const README_BONUS: i32 = 15;
const PER_SOURCE_FILE: i32 = 2;
const SOURCE_FILES_CAP: i32 = 20;

/// 状态对应的固定加减分
pub fn status_adjustment(status: ProjectStatus) -> i32 {
    match status {
        ProjectStatus::Complete => 20,
        ProjectStatus::UnderDevelopment => 10,
        ProjectStatus::UnderUpdate => 5,
        ProjectStatus::NeedFix => -10,
        ProjectStatus::NotWorking => -20,
        ProjectStatus::Dropped => -30,
        ProjectStatus::NotSet => -5,
    }
}

pub fn health_score(project: &ProjectDescriptor, record: &StatusRecord) -> u8 {
    let mut score = BASE_SCORE;
    if project.has_manifest {
        score += MANIFEST_BONUS;
    }
    if project.has_readme {
        score += README_BONUS;
    }
    let files = i32::try_from(project.source_file_count).unwrap_or(i32::MAX);
    score += files.saturating_mul(PER_SOURCE_FILE).min(SOURCE_FILES_CAP);
    score += status_adjustment(record.status);
    score.clamp(0, 100) as u8
}

pub fn health_emoji(score: f64) -> &'static str {
    HealthTier::from_score(score).emoji()
}

pub fn health_label(score: f64) -> &'static str {
    HealthTier::from_score(score).label()
}
