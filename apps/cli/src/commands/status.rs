use std::io::Write;
use std::path::Path;

use organizer_common::OrganizerError;
use organizer_domain::{ProjectStatus, StatusRecord};

use super::{write_json, App};

/// 与扫描结果一致的记录键：父目录规范化后拼接目录名
pub(crate) fn project_key(path: &str) -> String {
    let trimmed = path.trim();
    let trimmed = if trimmed.len() > 1 {
        trimmed.trim_end_matches(['/', '\\'])
    } else {
        trimmed
    };
    let p = Path::new(trimmed);
    match (p.parent(), p.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            match std::fs::canonicalize(parent) {
                Ok(parent) => parent.join(name).display().to_string(),
                Err(_) => trimmed.to_string(),
            }
        }
        // "."、".." 或根目录：整体规范化
        _ => match std::fs::canonicalize(p) {
            Ok(full) => full.display().to_string(),
            Err(_) => trimmed.to_string(),
        },
    }
}

fn write_record(out: &mut dyn Write, key: &str, record: &StatusRecord) -> Result<(), OrganizerError> {
    writeln!(out, "{}", key)?;
    writeln!(out, "  status:       {} {}", record.status.emoji(), record.status)?;
    writeln!(out, "  notes:        {}", record.notes)?;
    match record.last_updated {
        Some(ts) => writeln!(out, "  last updated: {}", ts.format("%Y-%m-%d %H:%M"))?,
        None => writeln!(out, "  last updated: never")?,
    }
    Ok(())
}

pub fn get(app: &App, out: &mut dyn Write, path: &str) -> Result<(), OrganizerError> {
    let key = project_key(path);
    let record = app.manager.get_status(&key);
    if app.json {
        return write_json(out, &record);
    }
    write_record(out, &key, &record)
}

pub fn set(
    app: &mut App,
    out: &mut dyn Write,
    path: &str,
    status: ProjectStatus,
    notes: &str,
) -> Result<(), OrganizerError> {
    let key = project_key(path);
    let record = app.manager.update_status(&key, status, notes)?;
    if app.json {
        return write_json(out, &record);
    }
    writeln!(out, "✅ Status updated")?;
    write_record(out, &key, &record)
}

pub fn bulk(
    app: &mut App,
    out: &mut dyn Write,
    root: Option<String>,
    status: ProjectStatus,
    notes: &str,
    all: bool,
    names: &[String],
) -> Result<(), OrganizerError> {
    if !all && names.is_empty() {
        return Err(OrganizerError::Config(
            "select at least one project (names or --all)".into(),
        ));
    }
    app.select_root(root)?;
    let projects = app.session.projects()?;

    let mut targets: Vec<&str> = Vec::new();
    if all {
        targets.extend(projects.iter().map(|p| p.path.as_str()));
    } else {
        for name in names {
            match projects.iter().find(|p| &p.name == name) {
                Some(p) => targets.push(p.path.as_str()),
                None => log::warn!("no scanned project named {}", name),
            }
        }
    }

    let updated = app
        .manager
        .status_store_mut()
        .bulk_update(targets, status, notes)?;
    writeln!(out, "Updated status for {} projects!", updated)?;
    Ok(())
}

pub fn clear_notes(app: &mut App, out: &mut dyn Write, root: Option<String>) -> Result<(), OrganizerError> {
    app.select_root(root)?;
    let projects = app.session.projects()?;
    let cleared = app
        .manager
        .status_store_mut()
        .clear_notes(projects.iter().map(|p| p.path.as_str()))?;
    writeln!(out, "All notes cleared! ({} projects)", cleared)?;
    Ok(())
}
