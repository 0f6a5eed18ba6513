pub mod engine;
pub mod state;

pub use engine::*;
pub use state::*;
