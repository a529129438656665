//! Search state and derived snapshots
//!
//! [`SearchState`] is the only mutable data of a search session: the current
//! query and the selected tags of each category. Everything the front end
//! shows (visible recipes, keyword lists) is a [`Snapshot`] computed from the
//! state by [`derive`], a pure function of the store and the state.

use super::category::{Category, CategoryMap};
use super::filter::RecipeFilterExt;
use super::keywords::{derive_keywords, narrow_keywords};
use crate::recipes::{Recipe, RecipeStore};

/// Query text plus selected tags per category
///
/// Tags keep their selection order and never repeat within a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    selected_tags: CategoryMap<Vec<String>>,
}

impl SearchState {
    /// Create an empty state: no query, no tags
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Tags selected in `category`, in selection order
    #[must_use]
    pub fn tags(&self, category: Category) -> &[String] {
        &self.selected_tags[category]
    }

    #[must_use]
    pub const fn selected_tags(&self) -> &CategoryMap<Vec<String>> {
        &self.selected_tags
    }

    /// Check if `value` is selected in `category`
    #[must_use]
    pub fn is_selected(&self, category: Category, value: &str) -> bool {
        self.selected_tags[category].iter().any(|t| t == value)
    }

    /// Check if no tag is selected in any category
    #[must_use]
    pub fn has_no_tags(&self) -> bool {
        self.selected_tags.iter().all(|(_, tags)| tags.is_empty())
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Add a tag, returning false if it was already selected
    pub(crate) fn select(&mut self, category: Category, value: String) -> bool {
        if self.is_selected(category, &value) {
            return false;
        }
        self.selected_tags[category].push(value);
        true
    }

    /// Remove a tag, returning false if it was not selected
    pub(crate) fn deselect(&mut self, category: Category, value: &str) -> bool {
        let tags = &mut self.selected_tags[category];
        if let Some(pos) = tags.iter().position(|t| t == value) {
            tags.remove(pos);
            true
        } else {
            false
        }
    }
}

/// Everything a front end needs to render one moment of a session
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    filtered: Vec<&'a Recipe>,
    keywords: CategoryMap<Vec<String>>,
    tags: CategoryMap<Vec<String>>,
}

impl<'a> Snapshot<'a> {
    /// Visible recipes, ascending by id
    #[must_use]
    pub fn filtered_recipes(&self) -> &[&'a Recipe] {
        &self.filtered
    }

    /// Ids of the visible recipes
    #[must_use]
    pub fn filtered_ids(&self) -> Vec<u32> {
        self.filtered.iter().map(|recipe| recipe.id).collect()
    }

    /// Selectable values of `category`, sorted ascending
    #[must_use]
    pub fn keywords(&self, category: Category) -> &[String] {
        &self.keywords[category]
    }

    /// Active tags of `category`, in selection order
    #[must_use]
    pub fn tags(&self, category: Category) -> &[String] {
        &self.tags[category]
    }

    #[must_use]
    pub const fn keywords_by_category(&self) -> &CategoryMap<Vec<String>> {
        &self.keywords
    }

    #[must_use]
    pub const fn tags_by_category(&self) -> &CategoryMap<Vec<String>> {
        &self.tags
    }

    /// Check if `value` is currently a keyword of `category`
    #[must_use]
    pub fn is_keyword(&self, category: Category, value: &str) -> bool {
        self.keywords[category].iter().any(|k| k == value)
    }

    /// Keywords of `category` containing `partial`, case-insensitive
    #[must_use]
    pub fn narrowed_keywords(&self, category: Category, partial: &str) -> Vec<String> {
        narrow_keywords(&self.keywords[category], partial)
    }

    /// Check if no recipe is visible
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Compute the snapshot for `state` over `store`
///
/// The visible pool is the text match of the query over the whole store,
/// intersected with the selected tags. Keyword lists are then derived from
/// that pool only, so a value never shows up as a keyword unless a visible
/// recipe carries it.
#[must_use]
pub fn derive<'a>(store: &'a RecipeStore, state: &SearchState) -> Snapshot<'a> {
    let filtered = store
        .all()
        .iter()
        .matching_query(state.query())
        .matching_tags(state.selected_tags());

    let keywords = CategoryMap::from_fn(|category| {
        derive_keywords(category, filtered.iter().copied(), state.tags(category))
    });

    Snapshot {
        filtered,
        keywords,
        tags: state.selected_tags().clone(),
    }
}
