use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use organizer_common::OrganizerError;
use serde::{Deserialize, Serialize};

/// 项目生命周期状态；任意状态之间可直接互相覆盖
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Not Set")]
    NotSet,
    #[serde(rename = "Under Development")]
    UnderDevelopment,
    #[serde(rename = "Under Update")]
    UnderUpdate,
    #[serde(rename = "Need Fix")]
    NeedFix,
    #[serde(rename = "Not Working")]
    NotWorking,
    Dropped,
    Complete,
}

impl ProjectStatus {
    /// 展示顺序
    pub const ALL: [ProjectStatus; 7] = [
        ProjectStatus::NotSet,
        ProjectStatus::UnderDevelopment,
        ProjectStatus::UnderUpdate,
        ProjectStatus::NeedFix,
        ProjectStatus::NotWorking,
        ProjectStatus::Dropped,
        ProjectStatus::Complete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::NotSet => "Not Set",
            ProjectStatus::UnderDevelopment => "Under Development",
            ProjectStatus::UnderUpdate => "Under Update",
            ProjectStatus::NeedFix => "Need Fix",
            ProjectStatus::NotWorking => "Not Working",
            ProjectStatus::Dropped => "Dropped",
            ProjectStatus::Complete => "Complete",
        }
    }

    /// 所有界面共用的状态图标
    pub fn emoji(self) -> &'static str {
        match self {
            ProjectStatus::NotSet => "⚪",
            ProjectStatus::UnderDevelopment => "🟢",
            ProjectStatus::UnderUpdate => "🟡",
            ProjectStatus::NeedFix => "🔴",
            ProjectStatus::NotWorking => "🟣",
            ProjectStatus::Dropped => "⚫",
            ProjectStatus::Complete => "✅",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for ProjectStatus {
    type Err = OrganizerError;

    /// 接受 "Need Fix"、"need-fix"、"NeedFix" 等写法
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ProjectStatus::ALL
            .into_iter()
            .find(|status| normalize(status.label()) == wanted)
            .ok_or_else(|| OrganizerError::InvalidStatus(s.trim().to_string()))
    }
}

/// 用户为某个项目路径设置的状态记录
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: ProjectStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}
