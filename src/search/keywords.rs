//! Keyword derivation: the selectable values of a category

use super::category::Category;
use crate::recipes::Recipe;
use std::collections::BTreeSet;

/// Distinct values of `category` across `pool`, minus `active_tags`, sorted
///
/// Values are compared exactly (no case folding), both for de-duplication
/// and for removing active tags. An empty result is valid.
pub fn derive_keywords<'a, S: AsRef<str>>(
    category: Category,
    pool: impl IntoIterator<Item = &'a Recipe>,
    active_tags: &[S],
) -> Vec<String> {
    let values: BTreeSet<&str> = pool
        .into_iter()
        .flat_map(|recipe| category.values_of(recipe))
        .collect();

    values
        .into_iter()
        .filter(|value| !active_tags.iter().any(|tag| tag.as_ref() == *value))
        .map(str::to_string)
        .collect()
}

/// Keywords containing `partial` (case-insensitive), sorted ascending
///
/// An empty `partial` keeps every keyword.
#[must_use]
pub fn narrow_keywords<S: AsRef<str>>(keywords: &[S], partial: &str) -> Vec<String> {
    let needle = partial.to_lowercase();
    let mut narrowed: Vec<String> = keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|keyword| keyword.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect();
    narrowed.sort();
    narrowed
}
