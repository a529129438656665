//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs against the loaded recipe store.

pub mod config;
pub mod interactive;
pub mod keywords;
pub mod search;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use interactive::execute as interactive;
pub use keywords::execute as keywords;
pub use search::execute as search;
