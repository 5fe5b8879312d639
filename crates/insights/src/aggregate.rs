use std::collections::BTreeMap;
use std::str::FromStr;

use organizer_common::OrganizerError;
use organizer_domain::{ProjectStatus, StatusRecord};

use crate::view::ProjectView;

/// 按状态计数，键按展示顺序排列，未出现的状态计 0
pub fn aggregate_by_status<'a, I>(records: I) -> BTreeMap<ProjectStatus, usize>
where
    I: IntoIterator<Item = &'a StatusRecord>,
{
    let mut counts: BTreeMap<ProjectStatus, usize> =
        ProjectStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    for record in records {
        *counts.entry(record.status).or_insert(0) += 1;
    }
    counts
}

/// 状态过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = OrganizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

pub fn filter_by_status<'v, 'a>(
    views: &'v [ProjectView<'a>],
    filter: StatusFilter,
) -> Vec<&'v ProjectView<'a>> {
    views
        .iter()
        .filter(|v| filter.matches(v.record.status))
        .collect()
}
