use std::io::Write;

use organizer_common::OrganizerError;

use super::{write_json, App};

pub fn list(app: &App, out: &mut dyn Write) -> Result<(), OrganizerError> {
    let paths = app.manager.saved_paths();
    if app.json {
        return write_json(out, &paths);
    }
    if paths.is_empty() {
        writeln!(out, "No saved paths yet. Add one with `paths add <folder>`.")?;
        return Ok(());
    }
    for (i, path) in paths.iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, path)?;
    }
    Ok(())
}

pub fn add(app: &mut App, out: &mut dyn Write, path: &str) -> Result<(), OrganizerError> {
    let path = path.trim();
    if app.manager.add_saved_path(path)? {
        writeln!(out, "Path saved: {}", path)?;
    } else {
        writeln!(out, "Path already exists or is invalid")?;
    }
    Ok(())
}

pub fn remove(app: &mut App, out: &mut dyn Write, path: &str) -> Result<(), OrganizerError> {
    if app.manager.remove_saved_path(path.trim())? {
        writeln!(out, "Path removed!")?;
    } else {
        writeln!(out, "Path not found in saved paths")?;
    }
    Ok(())
}
