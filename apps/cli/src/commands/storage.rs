use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use organizer_common::OrganizerError;
use organizer_store::json_file;
use organizer_store::{project_export_file_name, settings_export_file_name};

use super::App;

fn export_target(out: Option<PathBuf>, default_name: String) -> PathBuf {
    out.unwrap_or_else(|| PathBuf::from(default_name))
}

pub fn export_projects(
    app: &App,
    out: &mut dyn Write,
    target: Option<PathBuf>,
) -> Result<(), OrganizerError> {
    export_projects_at(app, out, target, Local::now().naive_local())
}

pub(crate) fn export_projects_at(
    app: &App,
    out: &mut dyn Write,
    target: Option<PathBuf>,
    now: NaiveDateTime,
) -> Result<(), OrganizerError> {
    let Some(export) = app.manager.export_project_data(now) else {
        writeln!(out, "No project data to export.")?;
        return Ok(());
    };
    let file = export_target(target, project_export_file_name(now));
    json_file::write_pretty(&file, &export)?;
    writeln!(out, "📥 Project data exported to {}", file.display())?;
    Ok(())
}

pub fn export_settings(
    app: &App,
    out: &mut dyn Write,
    target: Option<PathBuf>,
) -> Result<(), OrganizerError> {
    let now = Local::now().naive_local();
    let export = app.manager.export_settings(now);
    let file = export_target(target, settings_export_file_name(now));
    json_file::write_pretty(&file, &export)?;
    writeln!(out, "📥 Settings exported to {}", file.display())?;
    Ok(())
}

fn show_file(out: &mut dyn Write, title: &str, path: &Path) -> Result<(), OrganizerError> {
    writeln!(out, "{}: {}", title, path.display())?;
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        writeln!(out, "{}", content)?;
    } else {
        writeln!(out, "  (file does not exist yet)")?;
    }
    Ok(())
}

pub fn show(app: &App, out: &mut dyn Write) -> Result<(), OrganizerError> {
    let config = app.manager.config();
    for warning in app.manager.load_warnings() {
        writeln!(out, "⚠️ {}", warning)?;
    }
    show_file(out, "Project data", &config.status_file_path())?;
    show_file(out, "Saved paths", &config.saved_paths_file_path())?;
    Ok(())
}

pub fn clear(app: &mut App, out: &mut dyn Write, confirmed: bool) -> Result<(), OrganizerError> {
    if !confirmed {
        writeln!(out, "Refusing to clear data without --yes")?;
        return Ok(());
    }
    app.manager.clear_all()?;
    app.session.clear_cache();
    writeln!(out, "All data cleared successfully!")?;
    Ok(())
}
