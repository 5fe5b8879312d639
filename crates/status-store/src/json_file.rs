//! 整文件读写 JSON：每次修改都完整重写，读取失败时回退为空结构。

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use organizer_common::OrganizerError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// 读取结果，附带可提示给用户的错误
pub struct Loaded<T> {
    pub value: T,
    pub warning: Option<OrganizerError>,
}

/// 读取 JSON 文件；文件不存在视为空，损坏或不可读时回退为空并给出警告
pub fn load_or_default<T>(path: &Path) -> Loaded<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Loaded {
            value: T::default(),
            warning: None,
        };
    }

    let parsed = fs::read_to_string(path)
        .map_err(|e| OrganizerError::Persistence(format!("{}: {}", path.display(), e)))
        .and_then(|content| {
            serde_json::from_str(&content).map_err(|e| OrganizerError::CorruptData {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        });

    match parsed {
        Ok(value) => Loaded {
            value,
            warning: None,
        },
        Err(err) => {
            log::warn!("falling back to empty data: {}", err);
            Loaded {
                value: T::default(),
                warning: Some(err),
            }
        }
    }
}

/// 写入 JSON 文件（缩进 2 空格），确保父目录存在并刷新到磁盘
pub fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), OrganizerError> {
    let persistence = |e: std::io::Error| {
        OrganizerError::Persistence(format!("{}: {}", path.display(), e))
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(persistence)?;
        }
    }

    let file = File::create(path).map_err(persistence)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| OrganizerError::Persistence(format!("{}: {}", path.display(), e)))?;
    writer.flush().map_err(persistence)?;
    writer.get_ref().sync_all().map_err(persistence)?;
    Ok(())
}

/// 删除文件；不存在时视为成功
pub fn remove_if_exists(path: &Path) -> Result<(), OrganizerError> {
    if path.exists() {
        fs::remove_file(path)
            .map_err(|e| OrganizerError::Persistence(format!("{}: {}", path.display(), e)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_without_warning() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Loaded<Vec<String>> = load_or_default(&dir.path().join("none.json"));
        assert!(loaded.value.is_empty());
        assert!(loaded.warning.is_none());
    }

    #[test]
    fn test_corrupt_file_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let loaded: Loaded<Vec<String>> = load_or_default(&path);
        assert!(loaded.value.is_empty());
        assert!(matches!(
            loaded.warning,
            Some(OrganizerError::CorruptData { .. })
        ));
    }

    #[test]
    fn test_write_creates_parent_and_uses_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("paths.json");
        write_pretty(&path, &vec!["a".to_string()]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n  \"a\"\n]");
        remove_if_exists(&path).unwrap();
        assert!(!path.exists());
        remove_if_exists(&path).unwrap();
    }
}
