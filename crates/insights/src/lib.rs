pub mod health;
pub mod view;
pub mod aggregate;
pub mod grouping;
pub mod metrics;
pub mod comparison;
pub mod report;

pub use health::*;
pub use view::*;
pub use aggregate::*;
pub use grouping::*;
pub use metrics::*;
pub use comparison::*;
pub use report::*;
