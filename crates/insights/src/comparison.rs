use chrono::NaiveDate;
use organizer_domain::{HealthTier, ProjectStatus};
use serde::Serialize;

use crate::view::ProjectView;

/// 未指定项目时默认比较的数量
pub const DEFAULT_COMPARISON_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub health: u8,
    pub tier: HealthTier,
    pub status: ProjectStatus,
    pub source_file_count: usize,
    pub has_manifest: bool,
    pub has_readme: bool,
    pub size_mb: f64,
    pub days_since_modified: i64,
    pub last_modified: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub best_health: Option<String>,
    pub needs_most_attention: Option<String>,
    pub most_stale: Option<String>,
}

/// 取第一个最大值（并列时保留先出现者）
fn first_max_by_key<T, K: PartialOrd>(items: &[T], key: impl Fn(&T) -> K) -> Option<&T> {
    let mut best: Option<(&T, K)> = None;
    for item in items {
        let k = key(item);
        if best.as_ref().map_or(true, |(_, current)| k > *current) {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}

/// 按名称选取项目进行对比；名称为空时取前 DEFAULT_COMPARISON_SIZE 个
pub fn compare(views: &[ProjectView<'_>], names: &[String], today: NaiveDate) -> Comparison {
    let selected: Vec<&ProjectView<'_>> = if names.is_empty() {
        views.iter().take(DEFAULT_COMPARISON_SIZE).collect()
    } else {
        names
            .iter()
            .filter_map(|name| views.iter().find(|v| &v.project.name == name))
            .collect()
    };

    let rows: Vec<ComparisonRow> = selected
        .into_iter()
        .map(|v| ComparisonRow {
            name: v.project.name.clone(),
            health: v.health,
            tier: v.tier(),
            status: v.record.status,
            source_file_count: v.project.source_file_count,
            has_manifest: v.project.has_manifest,
            has_readme: v.project.has_readme,
            size_mb: v.project.size_mb,
            days_since_modified: v.project.days_since_modified(today),
            last_modified: v.project.last_modified,
        })
        .collect();

    let best_health = first_max_by_key(&rows, |r| r.health).map(|r| r.name.clone());
    let needs_most_attention =
        first_max_by_key(&rows, |r| std::cmp::Reverse(r.health)).map(|r| r.name.clone());
    let most_stale = first_max_by_key(&rows, |r| r.days_since_modified).map(|r| r.name.clone());

    Comparison {
        rows,
        best_health,
        needs_most_attention,
        most_stale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use organizer_domain::{ProjectDescriptor, StatusRecord};

    fn descriptor(name: &str, days_ago: i64, today: NaiveDate) -> ProjectDescriptor {
        ProjectDescriptor {
            name: name.into(),
            path: format!("/p/{}", name),
            source_file_count: 1,
            has_manifest: false,
            has_readme: false,
            last_modified: today - chrono::Duration::days(days_ago),
            size_mb: 0.5,
        }
    }

    fn view(project: &ProjectDescriptor, health: u8) -> ProjectView<'_> {
        ProjectView {
            project,
            record: StatusRecord::default(),
            health,
        }
    }

    #[test]
    fn test_compare_named_and_insights() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let projects = vec![
            descriptor("a", 10, today),
            descriptor("b", 400, today),
            descriptor("c", 400, today),
            descriptor("d", 0, today),
        ];
        let views = vec![
            view(&projects[0], 70),
            view(&projects[1], 70),
            view(&projects[2], 20),
            view(&projects[3], 20),
        ];
        let names = vec!["c".to_string(), "a".to_string(), "missing".to_string(), "b".to_string()];
        let cmp = compare(&views, &names, today);
        let order: Vec<_> = cmp.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
        assert_eq!(cmp.best_health.as_deref(), Some("a"));
        assert_eq!(cmp.needs_most_attention.as_deref(), Some("c"));
        assert_eq!(cmp.most_stale.as_deref(), Some("c"));
        assert_eq!(cmp.rows[0].days_since_modified, 400);
    }

    #[test]
    fn test_compare_defaults_to_first_five() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let projects: Vec<_> = (0..7)
            .map(|i| descriptor(&format!("p{}", i), i, today))
            .collect();
        let views: Vec<_> = projects.iter().map(|p| view(p, 50)).collect();
        let cmp = compare(&views, &[], today);
        assert_eq!(cmp.rows.len(), DEFAULT_COMPARISON_SIZE);
        assert_eq!(cmp.best_health.as_deref(), Some("p0"));
        assert_eq!(cmp.most_stale.as_deref(), Some("p4"));
    }

    #[test]
    fn test_compare_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let cmp = compare(&[], &[], today);
        assert!(cmp.rows.is_empty());
        assert!(cmp.best_health.is_none());
    }
}
