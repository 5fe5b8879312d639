pub mod json_file;
pub mod status_store;
pub mod saved_paths;
pub mod manager;
pub mod export;

pub use status_store::*;
pub use saved_paths::*;
pub use manager::*;
pub use export::{project_export_file_name, settings_export_file_name};
