//! The immutable recipe store and its JSON loader

use super::error::RecipeError;
use super::types::Recipe;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Accepted top-level layouts of a recipe data file
#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeFile {
    List(Vec<Recipe>),
    Wrapped { recipes: Vec<Recipe> },
}

impl From<RecipeFile> for Vec<Recipe> {
    fn from(file: RecipeFile) -> Self {
        match file {
            RecipeFile::List(recipes) | RecipeFile::Wrapped { recipes } => recipes,
        }
    }
}

/// Read-only recipe dataset
///
/// Recipes are held in ascending id order with unique ids. The store is never
/// mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Build a store from already parsed recipes
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::DuplicateId` if two recipes share an id.
    pub fn new(mut recipes: Vec<Recipe>) -> Result<Self, RecipeError> {
        let mut ids = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !ids.insert(recipe.id) {
                return Err(RecipeError::DuplicateId(recipe.id));
            }
        }

        recipes.sort_by_key(|recipe| recipe.id);
        for recipe in &mut recipes {
            recipe.dedup_utensils();
        }

        Ok(Self { recipes })
    }

    /// Parse a store from JSON text
    ///
    /// Accepts either a bare array of recipes or an object with a `recipes` array.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::ParseError` for malformed JSON and
    /// `RecipeError::DuplicateId` for repeated ids.
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        let file: RecipeFile = serde_json::from_str(json)?;
        Self::new(file.into())
    }

    /// Load a store from a JSON data file
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::NotFound` if the file does not exist, otherwise any
    /// read or parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecipeError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RecipeError::NotFound(path.to_path_buf()));
        }

        let json = fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), recipes = store.len(), "recipe store loaded");
        Ok(store)
    }

    /// All recipes, ascending by id
    #[must_use]
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes
            .binary_search_by_key(&id, |recipe| recipe.id)
            .ok()
            .map(|index| &self.recipes[index])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{recipe, SCENARIO_JSON};
    use std::io::Write;

    #[test]
    fn test_new_sorts_by_id() {
        let store = RecipeStore::new(vec![
            recipe(3, "C", &["x"], "Four", &[]),
            recipe(1, "A", &["y"], "Four", &[]),
            recipe(2, "B", &["z"], "Four", &[]),
        ])
        .unwrap();

        let ids: Vec<u32> = store.all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = RecipeStore::new(vec![
            recipe(1, "A", &[], "Four", &[]),
            recipe(1, "B", &[], "Four", &[]),
        ]);
        assert!(matches!(result, Err(RecipeError::DuplicateId(1))));
    }

    #[test]
    fn test_new_dedups_utensils() {
        let store =
            RecipeStore::new(vec![recipe(1, "A", &[], "Four", &["Moule", "Moule"])]).unwrap();
        assert_eq!(store.all()[0].utensils, vec!["Moule".to_string()]);
    }

    #[test]
    fn test_from_json_bare_array() {
        let store = RecipeStore::from_json(SCENARIO_JSON).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2).map(|r| r.name.as_str()), Some("Poisson vapeur"));
    }

    #[test]
    fn test_from_json_wrapped_object() {
        let json = format!(r#"{{ "recipes": {SCENARIO_JSON} }}"#);
        let store = RecipeStore::from_json(&json).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = RecipeStore::from_json("[{\"id\": 1}]");
        assert!(matches!(result, Err(RecipeError::ParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCENARIO_JSON.as_bytes()).unwrap();

        let store = RecipeStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let result = RecipeStore::load(&missing);
        assert!(matches!(result, Err(RecipeError::NotFound(p)) if p == missing));
    }

    #[test]
    fn test_get_unknown_id() {
        let store = RecipeStore::from_json(SCENARIO_JSON).unwrap();
        assert!(store.get(99).is_none());
    }
}
