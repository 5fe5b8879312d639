use std::str::FromStr;

use organizer_common::OrganizerError;

use crate::view::ProjectView;

/// 分组方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    #[default]
    None,
    Status,
    HasManifest,
    SourceFileCount,
    Size,
}

impl FromStr for GroupBy {
    type Err = OrganizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "none" => Ok(GroupBy::None),
            "status" => Ok(GroupBy::Status),
            "hasmanifest" | "manifest" | "hasrequirements" | "requirements" => {
                Ok(GroupBy::HasManifest)
            }
            "sourcefilecount" | "files" | "pythonfilescount" => Ok(GroupBy::SourceFileCount),
            "size" => Ok(GroupBy::Size),
            _ => Err(OrganizerError::Config(format!("unknown grouping: {}", s))),
        }
    }
}

#[derive(Debug)]
pub struct ProjectGroup<'v, 'a> {
    pub name: String,
    pub members: Vec<&'v ProjectView<'a>>,
}

fn file_count_bucket(count: usize) -> usize {
    match count {
        0 => 0,
        1..=5 => 1,
        6..=20 => 2,
        _ => 3,
    }
}

fn size_bucket(size_mb: f64) -> usize {
    if size_mb < 10.0 {
        0
    } else if size_mb <= 100.0 {
        1
    } else {
        2
    }
}

/// 固定桶分组，空桶丢弃
fn bucketed<'v, 'a>(
    views: &[&'v ProjectView<'a>],
    names: &[&str],
    bucket: impl Fn(&ProjectView<'a>) -> usize,
) -> Vec<ProjectGroup<'v, 'a>> {
    let mut groups: Vec<ProjectGroup<'v, 'a>> = names
        .iter()
        .map(|name| ProjectGroup {
            name: name.to_string(),
            members: Vec::new(),
        })
        .collect();
    for &view in views {
        groups[bucket(view)].members.push(view);
    }
    groups.retain(|g| !g.members.is_empty());
    groups
}

pub fn group_projects<'v, 'a>(
    views: &[&'v ProjectView<'a>],
    group_by: GroupBy,
) -> Vec<ProjectGroup<'v, 'a>> {
    match group_by {
        GroupBy::None => vec![ProjectGroup {
            name: "All Projects".to_string(),
            members: views.to_vec(),
        }],
        GroupBy::Status => {
            // 按首次出现顺序
            let mut groups: Vec<ProjectGroup<'v, 'a>> = Vec::new();
            for &view in views {
                let label = view.record.status.label();
                match groups.iter_mut().find(|g| g.name == label) {
                    Some(group) => group.members.push(view),
                    None => groups.push(ProjectGroup {
                        name: label.to_string(),
                        members: vec![view],
                    }),
                }
            }
            groups
        }
        GroupBy::HasManifest => bucketed(
            views,
            &["With Requirements", "Without Requirements"],
            |v| usize::from(!v.project.has_manifest),
        ),
        GroupBy::SourceFileCount => bucketed(
            views,
            &["No Python Files", "1-5 Files", "6-20 Files", "20+ Files"],
            |v| file_count_bucket(v.project.source_file_count),
        ),
        GroupBy::Size => bucketed(
            views,
            &["Small (< 10 MB)", "Medium (10-100 MB)", "Large (> 100 MB)"],
            |v| size_bucket(v.project.size_mb),
        ),
    }
}
