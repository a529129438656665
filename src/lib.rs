//! Larder - faceted recipe search
//!
//! This library combines free-text search with ingredient, appliance and
//! utensil tags over an immutable recipe store. A [`search::SearchSession`]
//! owns the query and the selected tags and recomputes the visible recipes
//! and the selectable keywords of each category after every command.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod recipes;
pub mod search;

#[cfg(test)]
pub mod testing;

pub use recipes::{Recipe, RecipeStore};
pub use search::{Category, SearchSession, Snapshot};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum LarderError {
    /// Recipe data could not be loaded
    #[error("Recipe error: {0}")]
    RecipeError(#[from] recipes::RecipeError),
    /// Search input error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal prompt failure
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
