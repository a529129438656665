//! Recipe loading error types
//!
//! These errors only occur while building a [`RecipeStore`](super::RecipeStore).
//! Once a store exists, nothing in the search engine can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating the recipe dataset
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The recipe data file could not be read
    #[error("Failed to read recipe file: {0}")]
    IoError(#[from] std::io::Error),

    /// The recipe data file is not valid recipe JSON
    #[error("Failed to parse recipe data: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Two recipes share the same id
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),

    /// No recipe data file exists at the resolved location
    #[error("Recipe file not found: {}", .0.display())]
    NotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message() {
        let error = RecipeError::DuplicateId(7);
        assert_eq!(error.to_string(), "Duplicate recipe id: 7");
    }

    #[test]
    fn test_not_found_message_contains_path() {
        let error = RecipeError::NotFound(PathBuf::from("/tmp/recipes.json"));
        assert!(error.to_string().contains("/tmp/recipes.json"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_error = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let error: RecipeError = serde_error.into();
        assert!(matches!(error, RecipeError::ParseError(_)));
    }
}
