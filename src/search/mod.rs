//! Faceted recipe search
//!
//! Free-text matching combined with ingredient, appliance and utensil tags.
//!
//! # Architecture
//!
//! - `text`: substring matching over name, ingredients and description
//! - `filter`: tag intersection (OR within a category, AND across categories)
//! - `keywords`: selectable values of a category for a recipe pool
//! - `state`: search state and the pure `derive` step producing snapshots
//! - `session`: the command-driven owner of the state

pub mod category;
pub mod error;
pub mod filter;
pub mod keywords;
pub mod session;
pub mod state;
pub mod text;

pub use category::{Category, CategoryMap, TagColor};
pub use error::SearchError;
pub use filter::RecipeFilterExt;
pub use session::{Command, Outcome, SearchSession, StateObserver};
pub use state::{SearchState, Snapshot};
