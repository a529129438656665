//! Recipe data and the immutable recipe store
//!
//! The store is loaded once at startup (usually from the JSON data file
//! shipped with the application) and is only ever read afterwards. Every
//! search session borrows it.

pub mod error;
pub mod store;
pub mod types;

pub use error::RecipeError;
pub use store::RecipeStore;
pub use types::{IngredientEntry, Recipe};
