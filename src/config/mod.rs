pub mod environment;
pub mod verdicts;

pub use environment::{Config, ConfigError};
pub use verdicts::VerdictTable;
