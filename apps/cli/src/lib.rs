mod cli;
mod session;
pub mod commands;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use organizer_common::{init_logging, AppConfig, OrganizerError};

pub use cli::{Cli, Command, DataAction, ExportTarget, PathsAction, StatusAction};
pub use commands::App;
pub use session::Session;

/// 解析配置并执行一个子命令，输出写入 `out`
pub fn execute(cli: Cli, out: &mut dyn Write) -> Result<(), OrganizerError> {
    let config = AppConfig::resolve(cli.data_dir.as_deref())?;
    config.ensure_data_dir()?;
    let mut app = App::open(config, cli.json);

    match cli.command {
        Command::Scan {
            root,
            status,
            group_by,
        } => commands::scan::run(&mut app, out, root, status, group_by),
        Command::Dashboard { root } => commands::dashboard::run(&mut app, out, root),
        Command::Compare { root, names } => {
            commands::dashboard::run_compare(&mut app, out, root, &names)
        }
        Command::Report { root } => commands::dashboard::run_report(&mut app, out, root),
        Command::Status { action } => match action {
            StatusAction::Get { path } => commands::status::get(&app, out, &path),
            StatusAction::Set {
                path,
                status,
                notes,
            } => commands::status::set(&mut app, out, &path, status, &notes),
            StatusAction::Bulk {
                root,
                status,
                notes,
                all,
                names,
            } => commands::status::bulk(&mut app, out, root, status, &notes, all, &names),
            StatusAction::ClearNotes { root } => commands::status::clear_notes(&mut app, out, root),
        },
        Command::Paths { action } => match action {
            PathsAction::List => commands::paths::list(&app, out),
            PathsAction::Add { path } => commands::paths::add(&mut app, out, &path),
            PathsAction::Remove { path } => commands::paths::remove(&mut app, out, &path),
        },
        Command::Export { target } => match target {
            ExportTarget::Projects { out: file } => commands::storage::export_projects(&app, out, file),
            ExportTarget::Settings { out: file } => commands::storage::export_settings(&app, out, file),
        },
        Command::Data { action } => match action {
            DataAction::Show => commands::storage::show(&app, out),
            DataAction::Clear { yes } => commands::storage::clear(&mut app, out, yes),
        },
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match execute(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
