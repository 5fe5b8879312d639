//! 目录识别场景：含源文件的目录与只含依赖清单的目录被识别，空目录被排除。

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use organizer_scanner::{scan_projects, scan_projects_with_progress, ProjectMarkers};

fn touch(path: &Path, content: &[u8]) {
    File::create(path).unwrap().write_all(content).unwrap();
}

#[test]
fn scan_includes_source_and_manifest_folders_only() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();
    fs::create_dir_all(root.join("A")).unwrap();
    fs::create_dir_all(root.join("B")).unwrap();
    fs::create_dir_all(root.join("C")).unwrap();
    touch(&root.join("A").join("main.py"), b"print('hi')\n");
    touch(&root.join("B").join("requirements.txt"), b"requests\n");
    // 根目录下的普通文件不是候选项目
    touch(&root.join("loose.py"), b"");

    let projects = scan_projects(&root.to_string_lossy()).unwrap();
    let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let a = &projects[0];
    assert_eq!(a.source_file_count, 1);
    assert!(!a.has_manifest);
    assert!(!a.has_readme);

    let b = &projects[1];
    assert_eq!(b.source_file_count, 0);
    assert!(b.has_manifest);

    let canonical_root = fs::canonicalize(root).unwrap();
    assert_eq!(Path::new(&a.path), canonical_root.join("A"));
}

#[test]
fn scan_detects_readme_and_custom_markers() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("svc")).unwrap();
    touch(&root.join("svc").join("main.rs"), b"fn main() {}");
    touch(&root.join("svc").join("Cargo.toml"), b"[package]");
    touch(&root.join("svc").join("README.md"), b"# svc");

    // 默认标记下不是项目
    assert!(scan_projects(&root.to_string_lossy()).unwrap().is_empty());

    let markers = ProjectMarkers {
        source_extension: "rs".to_string(),
        manifest_file: "Cargo.toml".to_string(),
        readme_file: "README.md".to_string(),
    };
    let projects = scan_projects_with_progress(&root.to_string_lossy(), &markers, None).unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].source_file_count, 1);
    assert!(projects[0].has_manifest);
    assert!(projects[0].has_readme);
}

#[test]
fn scan_trims_surrounding_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("proj")).unwrap();
    touch(&dir.path().join("proj").join("requirements.txt"), b"");
    let padded = format!("  {}  ", dir.path().display());
    assert_eq!(scan_projects(&padded).unwrap().len(), 1);
}

#[cfg(unix)]
mod unreadable {
    use super::*;
    use organizer_common::OrganizerError;
    use std::os::unix::fs::PermissionsExt;

    fn set_mode(path: &Path, mode: u32) {
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    /// root 用户不受权限位限制，此时跳过
    fn permissions_enforced(locked: &Path) -> bool {
        fs::read_dir(locked).is_err()
    }

    #[test]
    fn scan_skips_unreadable_child_and_keeps_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for name in ["A", "B", "locked"] {
            fs::create_dir_all(root.join(name)).unwrap();
        }
        touch(&root.join("A").join("main.py"), b"");
        touch(&root.join("B").join("requirements.txt"), b"");
        touch(&root.join("locked").join("main.py"), b"");
        set_mode(&root.join("locked"), 0o000);

        if !permissions_enforced(&root.join("locked")) {
            set_mode(&root.join("locked"), 0o755);
            return;
        }
        let result = scan_projects(&root.to_string_lossy());
        set_mode(&root.join("locked"), 0o755);

        let names: Vec<_> = result.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn scan_unreadable_root_is_permission_denied() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir_all(root.join("A")).unwrap();
        touch(&root.join("A").join("main.py"), b"");
        set_mode(&root, 0o000);

        if !permissions_enforced(&root) {
            set_mode(&root, 0o755);
            return;
        }
        let result = scan_projects(&root.to_string_lossy());
        set_mode(&root, 0o755);

        assert!(matches!(result, Err(OrganizerError::PermissionDenied(_))));
    }
}
