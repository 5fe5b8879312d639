use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use organizer_common::OrganizerError;
use organizer_domain::{ProjectStatus, StatusRecord};
use serde::Deserialize;
use serde_json::Value;

use crate::json_file::{self, Loaded};

/// 文件中的单条记录，状态按字符串宽松读取
#[derive(Deserialize)]
struct StoredRecord {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    last_updated: Option<NaiveDateTime>,
}

/// 逐条解析：未知状态记为 Not Set，无法解析的条目跳过，其余记录照常保留
fn decode_record(path: &str, raw: Value) -> Option<StatusRecord> {
    let stored: StoredRecord = match serde_json::from_value(raw) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("skip malformed record for {}: {}", path, e);
            return None;
        }
    };
    let status = match stored.status.as_deref() {
        None => ProjectStatus::NotSet,
        Some(text) => text.parse().unwrap_or_else(|_| {
            log::warn!("unknown status {:?} for {}, treated as Not Set", text, path);
            ProjectStatus::NotSet
        }),
    };
    Some(StatusRecord {
        status,
        notes: stored.notes.unwrap_or_default(),
        last_updated: stored.last_updated,
    })
}

/// 以项目绝对路径为键的状态记录；没有记录等同于「Not Set」
#[derive(Debug)]
pub struct StatusStore {
    file: PathBuf,
    records: BTreeMap<String, StatusRecord>,
}

impl StatusStore {
    /// 读取状态文件；损坏时以空记录启动，并返回警告
    pub fn load(file: impl Into<PathBuf>) -> (Self, Option<OrganizerError>) {
        let file = file.into();
        let Loaded { value, warning } =
            json_file::load_or_default::<BTreeMap<String, Value>>(&file);
        let records = value
            .into_iter()
            .filter_map(|(path, raw)| decode_record(&path, raw).map(|record| (path, record)))
            .collect();
        (Self { file, records }, warning)
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn records(&self) -> &BTreeMap<String, StatusRecord> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, path: &str) -> StatusRecord {
        self.records.get(path).cloned().unwrap_or_default()
    }

    /// 整体覆盖 `path` 的记录并写盘
    pub fn update(
        &mut self,
        path: &str,
        status: ProjectStatus,
        notes: &str,
    ) -> Result<StatusRecord, OrganizerError> {
        self.update_at(path, status, notes, Local::now().naive_local())
    }

    pub fn update_at(
        &mut self,
        path: &str,
        status: ProjectStatus,
        notes: &str,
        now: NaiveDateTime,
    ) -> Result<StatusRecord, OrganizerError> {
        let record = StatusRecord {
            status,
            notes: notes.to_string(),
            last_updated: Some(now),
        };
        self.records.insert(path.to_string(), record.clone());
        log::info!("status of {} set to {}", path, status);
        self.persist()?;
        Ok(record)
    }

    /// 批量设置状态与备注，只写盘一次
    pub fn bulk_update<'a, I>(
        &mut self,
        paths: I,
        status: ProjectStatus,
        notes: &str,
    ) -> Result<usize, OrganizerError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let now = Local::now().naive_local();
        let mut updated = 0;
        for path in paths {
            self.records.insert(
                path.to_string(),
                StatusRecord {
                    status,
                    notes: notes.to_string(),
                    last_updated: Some(now),
                },
            );
            updated += 1;
        }
        if updated > 0 {
            log::info!("bulk set {} projects to {}", updated, status);
            self.persist()?;
        }
        Ok(updated)
    }

    /// 保留当前状态，清空备注（同样刷新时间戳）
    pub fn clear_notes<'a, I>(&mut self, paths: I) -> Result<usize, OrganizerError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let now = Local::now().naive_local();
        let mut cleared = 0;
        for path in paths {
            let status = self.get(path).status;
            self.records.insert(
                path.to_string(),
                StatusRecord {
                    status,
                    notes: String::new(),
                    last_updated: Some(now),
                },
            );
            cleared += 1;
        }
        if cleared > 0 {
            self.persist()?;
        }
        Ok(cleared)
    }

    pub fn persist(&self) -> Result<(), OrganizerError> {
        json_file::write_pretty(&self.file, &self.records)
    }

    /// 清空内存记录并删除文件
    pub fn clear(&mut self) -> Result<(), OrganizerError> {
        self.records.clear();
        json_file::remove_if_exists(&self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 250_000)
            .unwrap()
    }

    #[test]
    fn test_get_absent_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let (store, warning) = StatusStore::load(dir.path().join("project_data.json"));
        assert!(warning.is_none());
        assert!(store.is_empty());
        assert_eq!(store.get("/some/where"), StatusRecord::default());
    }

    #[test]
    fn test_update_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, _) = StatusStore::load(dir.path().join("project_data.json"));
        let written = store
            .update_at("/p/A", ProjectStatus::Complete, "done", fixed_time())
            .unwrap();
        let got = store.get("/p/A");
        assert_eq!(got, written);
        assert_eq!(got.status, ProjectStatus::Complete);
        assert_eq!(got.notes, "done");
        assert_eq!(got.last_updated, Some(fixed_time()));
        assert!(store.file().exists());
    }

    #[test]
    fn test_update_overwrites_notes_too() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, _) = StatusStore::load(dir.path().join("project_data.json"));
        store.update("/p/A", ProjectStatus::NeedFix, "broken import").unwrap();
        store.update("/p/A", ProjectStatus::Complete, "").unwrap();
        let got = store.get("/p/A");
        assert_eq!(got.status, ProjectStatus::Complete);
        assert!(got.notes.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_reload_reproduces_records() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("project_data.json");
        let (mut store, _) = StatusStore::load(&file);
        store
            .update_at("/p/A", ProjectStatus::Complete, "done", fixed_time())
            .unwrap();
        store
            .update_at("/p/B", ProjectStatus::Dropped, "línea ✅", fixed_time())
            .unwrap();

        let (reloaded, warning) = StatusStore::load(&file);
        assert!(warning.is_none());
        assert_eq!(reloaded.records(), store.records());
    }

    #[test]
    fn test_reads_files_written_by_older_versions() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("project_data.json");
        std::fs::write(
            &file,
            r#"{
  "/home/me/proj": {
    "status": "Under Development",
    "notes": "wip",
    "last_updated": "2024-01-15T08:00:01.123456"
  }
}"#,
        )
        .unwrap();
        let (store, warning) = StatusStore::load(&file);
        assert!(warning.is_none());
        assert_eq!(store.get("/home/me/proj").status, ProjectStatus::UnderDevelopment);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("project_data.json");
        std::fs::write(&file, "[1, 2").unwrap();
        let (mut store, warning) = StatusStore::load(&file);
        assert!(store.is_empty());
        assert!(matches!(warning, Some(OrganizerError::CorruptData { .. })));

        // 下一次写入覆盖损坏文件
        store.update("/p/A", ProjectStatus::UnderUpdate, "").unwrap();
        let (reloaded, warning) = StatusStore::load(&file);
        assert!(warning.is_none());
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_unknown_status_does_not_drop_other_records() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("project_data.json");
        std::fs::write(
            &file,
            r#"{
  "/p/A": {"status": "Complete", "notes": "keep me", "last_updated": "2024-01-15T08:00:01"},
  "/p/B": {"status": "In Review", "notes": "waiting", "last_updated": null},
  "/p/C": 42
}"#,
        )
        .unwrap();

        let (mut store, warning) = StatusStore::load(&file);
        assert!(warning.is_none());
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("/p/A").status, ProjectStatus::Complete);
        let b = store.get("/p/B");
        assert_eq!(b.status, ProjectStatus::NotSet);
        assert_eq!(b.notes, "waiting");

        store.update("/p/D", ProjectStatus::NeedFix, "").unwrap();
        let (reloaded, warning) = StatusStore::load(&file);
        assert!(warning.is_none());
        let a = reloaded.get("/p/A");
        assert_eq!(a.status, ProjectStatus::Complete);
        assert_eq!(a.notes, "keep me");
        assert_eq!(reloaded.get("/p/B").notes, "waiting");
        assert_eq!(reloaded.get("/p/D").status, ProjectStatus::NeedFix);
    }

    #[test]
    fn test_bulk_update_and_clear_notes() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, _) = StatusStore::load(dir.path().join("project_data.json"));
        store.update("/p/A", ProjectStatus::NeedFix, "fix tests").unwrap();

        let n = store
            .bulk_update(["/p/B", "/p/C"], ProjectStatus::UnderDevelopment, "Bulk updated")
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(store.get("/p/C").notes, "Bulk updated");

        let n = store.clear_notes(["/p/A", "/p/B", "/p/D"]).unwrap();
        assert_eq!(n, 3);
        assert_eq!(store.get("/p/A").status, ProjectStatus::NeedFix);
        assert!(store.get("/p/A").notes.is_empty());
        // 原本未设置的项目会得到一条显式的 Not Set 记录
        assert_eq!(store.get("/p/D").status, ProjectStatus::NotSet);
        assert!(store.get("/p/D").last_updated.is_some());
    }

    #[test]
    fn test_persist_failure_keeps_memory_ahead_of_disk() {
        let dir = tempfile::tempdir().unwrap();
        // 以目录占位，使写文件失败
        let file = dir.path().join("project_data.json");
        std::fs::create_dir_all(&file).unwrap();
        let (mut store, _) = StatusStore::load(dir.path().join("project_data.json"));
        let err = store
            .update("/p/A", ProjectStatus::Complete, "done")
            .unwrap_err();
        assert!(matches!(err, OrganizerError::Persistence(_)));
        assert_eq!(store.get("/p/A").status, ProjectStatus::Complete);
    }
}
