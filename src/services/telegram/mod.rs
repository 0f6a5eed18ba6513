pub mod types;
pub mod bot;
pub mod notifier;

pub use types::*;
pub use bot::*;
pub use notifier::*;
