use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use organizer_domain::ProjectStatus;
use organizer_insights::{GroupBy, StatusFilter};

#[derive(Parser, Debug)]
#[command(
    name = "project-organizer",
    version,
    about = "Python Project Organizer - track status and health of local project folders"
)]
pub struct Cli {
    /// Directory holding project_data.json and saved_paths.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a folder and list the projects found in it.
    Scan {
        /// Folder to scan; defaults to the first saved path
        root: Option<String>,
        /// Only show projects with this status ("all" for everything)
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// none, status, has-requirements, python-files-count or size
        #[arg(long, default_value = "none")]
        group_by: GroupBy,
    },

    /// Overview metrics, status distribution and health summary.
    Dashboard { root: Option<String> },

    /// Compare projects side by side (first five when no names given).
    Compare {
        #[arg(long)]
        root: Option<String>,
        names: Vec<String>,
    },

    /// Status report with distribution percentages.
    Report { root: Option<String> },

    /// Read or change project statuses.
    Status {
        #[command(subcommand)]
        action: StatusAction,
    },

    /// Manage saved scan folders.
    Paths {
        #[command(subcommand)]
        action: PathsAction,
    },

    /// Export project data or settings as JSON.
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },

    /// Inspect or clear the data files.
    Data {
        #[command(subcommand)]
        action: DataAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum StatusAction {
    /// Show the status record of a project folder.
    Get { path: String },

    /// Set status and notes of a project folder (both are overwritten).
    Set {
        path: String,
        status: ProjectStatus,
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Set the same status on several scanned projects.
    Bulk {
        #[arg(long)]
        root: Option<String>,
        #[arg(long)]
        status: ProjectStatus,
        #[arg(long, default_value = "")]
        notes: String,
        /// Apply to every scanned project
        #[arg(long, conflicts_with = "names")]
        all: bool,
        /// Project names as shown by `scan`
        names: Vec<String>,
    },

    /// Clear notes of every scanned project, keeping their status.
    ClearNotes { root: Option<String> },
}

#[derive(Subcommand, Debug)]
pub enum PathsAction {
    List,
    Add { path: String },
    Remove { path: String },
}

#[derive(Subcommand, Debug)]
pub enum ExportTarget {
    Projects {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    Settings {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataAction {
    /// Print file locations and contents.
    Show,
    /// Delete both data files.
    Clear {
        #[arg(long)]
        yes: bool,
    },
}
