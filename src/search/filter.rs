//! Tag filtering of recipe pools
//!
//! A tag matches a recipe when it equals (case-insensitively, never as a
//! substring) one of the recipe's values for the tag's category. Tags combine
//! with OR inside a category and AND across categories; a category without
//! tags lets every recipe through.
//!
//! # Iterator Adapters
//!
//! [`RecipeFilterExt`] adds the same operations to any iterator of recipe
//! references so the session can chain them:
//!
//! ```ignore
//! use larder::search::filter::RecipeFilterExt;
//!
//! let visible = store
//!     .all()
//!     .iter()
//!     .matching_query("tarte")
//!     .matching_tags(&selected);
//! ```

use super::category::{Category, CategoryMap};
use super::text;
use crate::recipes::Recipe;

/// Whether `recipe` carries `tag` in `category`
#[must_use]
pub fn has_tag(recipe: &Recipe, category: Category, tag: &str) -> bool {
    let tag = tag.to_lowercase();
    category
        .values_of(recipe)
        .into_iter()
        .any(|value| value.to_lowercase() == tag)
}

/// Keep the recipes of `pool` carrying `tag` in `category`
///
/// # Examples
/// ```
/// use larder::recipes::RecipeStore;
/// use larder::search::{Category, filter::filter_by_tag};
///
/// let store = RecipeStore::from_json(r#"[
///     {"id": 1, "name": "Tarte", "ingredients": [{"ingredient": "Pommes"}],
///      "time": 40, "description": "", "appliance": "Four", "ustensils": ["Moule"]}
/// ]"#).unwrap();
///
/// assert_eq!(filter_by_tag(Category::Appliances, "four", store.all()).len(), 1);
/// assert!(filter_by_tag(Category::Appliances, "fo", store.all()).is_empty());
/// ```
pub fn filter_by_tag<'a>(
    category: Category,
    tag: &str,
    pool: impl IntoIterator<Item = &'a Recipe>,
) -> Vec<&'a Recipe> {
    pool.into_iter()
        .filter(|recipe| has_tag(recipe, category, tag))
        .collect()
}

/// Whether `recipe` satisfies every category that has at least one tag
///
/// Within a category any one tag is enough.
#[must_use]
pub fn satisfies_tags<S: AsRef<str>>(recipe: &Recipe, tags: &CategoryMap<Vec<S>>) -> bool {
    tags.iter().all(|(category, selected)| {
        selected.is_empty()
            || selected
                .iter()
                .any(|tag| has_tag(recipe, category, tag.as_ref()))
    })
}

/// Intersect `pool` with the selected tags of every category
pub fn filter_by_tags<'a, S: AsRef<str>>(
    tags: &CategoryMap<Vec<S>>,
    pool: impl IntoIterator<Item = &'a Recipe>,
) -> Vec<&'a Recipe> {
    pool.into_iter()
        .filter(|recipe| satisfies_tags(recipe, tags))
        .collect()
}

/// Extension trait adding query and tag filtering to recipe iterators
pub trait RecipeFilterExt<'a>: IntoIterator<Item = &'a Recipe> + Sized {
    /// Keep recipes matching a free-text query (see [`text::match_query`])
    fn matching_query(self, query: &str) -> Vec<&'a Recipe> {
        text::match_query(query, self)
    }

    /// Keep recipes carrying `tag` in `category`
    fn with_tag(self, category: Category, tag: &str) -> Vec<&'a Recipe> {
        filter_by_tag(category, tag, self)
    }

    /// Keep recipes satisfying every tagged category
    fn matching_tags<S: AsRef<str>>(self, tags: &CategoryMap<Vec<S>>) -> Vec<&'a Recipe> {
        filter_by_tags(tags, self)
    }
}

impl<'a, I> RecipeFilterExt<'a> for I where I: IntoIterator<Item = &'a Recipe> {}
