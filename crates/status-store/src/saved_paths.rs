use std::path::{Path, PathBuf};

use organizer_common::OrganizerError;

use crate::json_file::{self, Loaded};

/// 曾经使用过的扫描根目录，按加入顺序保存，不做路径校验
#[derive(Debug)]
pub struct SavedPaths {
    file: PathBuf,
    paths: Vec<String>,
}

impl SavedPaths {
    pub fn load(file: impl Into<PathBuf>) -> (Self, Option<OrganizerError>) {
        let file = file.into();
        let Loaded { value, warning } = json_file::load_or_default(&file);
        (Self { file, paths: value }, warning)
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// 非空且未保存过时追加并写盘，返回是否新增
    pub fn add(&mut self, path: &str) -> Result<bool, OrganizerError> {
        if path.is_empty() || self.contains(path) {
            return Ok(false);
        }
        self.paths.push(path.to_string());
        self.persist()?;
        Ok(true)
    }

    /// 存在时移除并写盘，返回是否移除
    pub fn remove(&mut self, path: &str) -> Result<bool, OrganizerError> {
        let Some(idx) = self.paths.iter().position(|p| p == path) else {
            return Ok(false);
        };
        self.paths.remove(idx);
        self.persist()?;
        Ok(true)
    }

    pub fn persist(&self) -> Result<(), OrganizerError> {
        json_file::write_pretty(&self.file, &self.paths)
    }

    pub fn clear(&mut self) -> Result<(), OrganizerError> {
        self.paths.clear();
        json_file::remove_if_exists(&self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (tempfile::TempDir, SavedPaths) {
        let dir = tempfile::tempdir().unwrap();
        let (paths, warning) = SavedPaths::load(dir.path().join("saved_paths.json"));
        assert!(warning.is_none());
        (dir, paths)
    }

    #[test]
    fn test_add_is_idempotent() {
        let (_guard, mut saved) = fresh();
        assert!(saved.add("/work/py").unwrap());
        assert!(!saved.add("/work/py").unwrap());
        assert_eq!(saved.paths(), ["/work/py".to_string()]);
    }

    #[test]
    fn test_add_empty_is_rejected() {
        let (_guard, mut saved) = fresh();
        assert!(!saved.add("").unwrap());
        assert!(saved.paths().is_empty());
        assert!(!saved.file().exists());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (_guard, mut saved) = fresh();
        saved.add("/a").unwrap();
        assert!(!saved.remove("/b").unwrap());
        assert_eq!(saved.paths().len(), 1);
        assert!(saved.remove("/a").unwrap());
        assert!(saved.paths().is_empty());
    }

    #[test]
    fn test_insertion_order_survives_reload() {
        let (_guard, mut saved) = fresh();
        for p in ["/z", "/a", "/m", "/does/not/exist"] {
            saved.add(p).unwrap();
        }
        saved.remove("/a").unwrap();
        let (reloaded, warning) = SavedPaths::load(saved.file());
        assert!(warning.is_none());
        assert_eq!(reloaded.paths(), saved.paths());
        assert_eq!(reloaded.paths(), ["/z", "/m", "/does/not/exist"]);
    }
}
