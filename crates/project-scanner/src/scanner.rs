use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Local};
use organizer_common::OrganizerError;
use organizer_domain::ProjectDescriptor;
use rayon::prelude::*;

use crate::markers::ProjectMarkers;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub type ProgressCb = Box<dyn Fn(u64, &str) + Send + Sync>;

/// 根目录级别的错误分类
fn classify_root_error(root: &str, e: io::Error) -> OrganizerError {
    match e.kind() {
        io::ErrorKind::NotFound => OrganizerError::PathNotFound(root.to_string()),
        io::ErrorKind::PermissionDenied => OrganizerError::PermissionDenied(root.to_string()),
        _ => OrganizerError::Scan(format!("{}: {}", root, e)),
    }
}

/// 规范化路径（支持正斜杠、去除首尾空白）
pub(crate) fn normalize_path(path: &str) -> PathBuf {
    let s = path.trim();
    #[cfg(windows)]
    let s = s.replace('/', "\\");
    PathBuf::from(s)
}

fn round_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}

/// 顶层没有源文件时，向下探测一层，找到第一个即停止
fn probe_one_level_deeper(subdirs: &[PathBuf], markers: &ProjectMarkers) -> usize {
    for sub in subdirs {
        let Ok(entries) = fs::read_dir(sub) else {
            continue;
        };
        let found = entries
            .filter_map(|e| e.ok())
            .any(|e| {
                let p = e.path();
                markers.is_source_file(&p) && p.is_file()
            });
        if found {
            return 1;
        }
    }
    0
}

/// 识别单个子目录；不是项目时返回 Ok(None)
fn describe_project(
    dir: &Path,
    markers: &ProjectMarkers,
) -> io::Result<Option<ProjectDescriptor>> {
    let mut source_files = 0usize;
    let mut top_level_bytes = 0u64;
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            top_level_bytes += fs::metadata(&path)?.len();
            if markers.is_source_file(&path) {
                source_files += 1;
            }
        } else if path.is_dir() {
            subdirs.push(path);
        }
    }

    if source_files == 0 {
        subdirs.sort();
        source_files = probe_one_level_deeper(&subdirs, markers);
    }

    let has_manifest = markers.has_manifest(dir);
    if source_files == 0 && !has_manifest {
        return Ok(None);
    }

    let modified: DateTime<Local> = fs::metadata(dir)?.modified()?.into();
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Some(ProjectDescriptor {
        name,
        path: dir.display().to_string(),
        source_file_count: source_files,
        has_manifest,
        has_readme: markers.has_readme(dir),
        last_modified: modified.date_naive(),
        size_mb: round_mb(top_level_bytes),
    }))
}

/// 扫描根目录下的直接子目录，识别项目（支持进度回调）
///
/// 单个子目录的权限/IO 错误会被忽略并跳过该目录；结果按名称排序。
pub fn scan_projects_with_progress(
    root: &str,
    markers: &ProjectMarkers,
    progress: Option<&ProgressCb>,
) -> Result<Vec<ProjectDescriptor>, OrganizerError> {
    let start = Instant::now();
    let root_buf = normalize_path(root);

    if !root_buf.exists() {
        return Err(OrganizerError::PathNotFound(root.to_string()));
    }

    let root_buf = fs::canonicalize(&root_buf).map_err(|e| classify_root_error(root, e))?;

    let children: Vec<PathBuf> = fs::read_dir(&root_buf)
        .map_err(|e| classify_root_error(root, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();

    let counter = AtomicU64::new(0);
    let mut projects: Vec<ProjectDescriptor> = children
        .par_iter()
        .filter_map(|child| {
            let described = describe_project(child, markers);
            let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(cb) = progress {
                cb(done, child.display().to_string().as_str());
            }
            match described {
                Ok(project) => project,
                Err(e) => {
                    log::debug!("skip {}: {}", child.display(), e);
                    None
                }
            }
        })
        .collect();

    projects.sort_by(|a, b| a.name.cmp(&b.name));

    log::debug!(
        "scanned {} folders under {} in {} ms, {} projects",
        children.len(),
        root_buf.display(),
        start.elapsed().as_millis(),
        projects.len()
    );
    Ok(projects)
}

/// 以默认标记扫描（无进度）
pub fn scan_projects(root: &str) -> Result<Vec<ProjectDescriptor>, OrganizerError> {
    scan_projects_with_progress(root, &ProjectMarkers::default(), None)
}
