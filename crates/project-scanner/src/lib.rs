pub mod scanner;
pub mod markers;

pub use scanner::{scan_projects, scan_projects_with_progress, ProgressCb};
pub use markers::*;
pub use organizer_domain::ProjectDescriptor;
