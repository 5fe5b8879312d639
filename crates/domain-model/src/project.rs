use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 单个候选项目目录的扫描结果（每次扫描重新计算，不持久化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub name: String,
    /// 规范化绝对路径，与状态记录关联的唯一键
    pub path: String,
    /// 顶层源文件数；顶层为 0 时为下一层探测结果（最多 1）
    pub source_file_count: usize,
    pub has_manifest: bool,
    pub has_readme: bool,
    /// 目录修改日期（按天）
    pub last_modified: NaiveDate,
    /// 仅统计顶层文件大小，保留两位小数
    pub size_mb: f64,
}

impl ProjectDescriptor {
    /// 距 `today` 的天数，未来日期记为 0
    ///
    /// 时钟回拨或跨机器同步会产生未来的修改时间，负天数不应计入陈旧统计与平均值
    pub fn days_since_modified(&self, today: NaiveDate) -> i64 {
        (today - self.last_modified).num_days().max(0)
    }
}
