pub mod project;
pub mod status;
pub mod health;
pub mod export;

pub use project::*;
pub use status::*;
pub use health::*;
pub use export::*;
