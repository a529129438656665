//! Free-text matching over recipe name, ingredients and description

use crate::recipes::Recipe;

/// Queries shorter than this (in characters) do not constrain results
pub const MIN_QUERY_LEN: usize = 3;

/// Whether `query` is long enough to filter anything
#[must_use]
pub fn is_active_query(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Whether `recipe` contains `needle` (already lower-cased) in any searchable field
fn recipe_contains(recipe: &Recipe, needle: &str) -> bool {
    recipe.name.to_lowercase().contains(needle)
        || recipe
            .ingredient_names()
            .any(|ingredient| ingredient.to_lowercase().contains(needle))
        || recipe.description.to_lowercase().contains(needle)
}

/// Filter `pool` by a free-text query
///
/// An inactive query (see [`is_active_query`]) returns the pool unchanged.
/// Otherwise every recipe whose name, any ingredient, or description contains
/// the query (case-insensitive substring) is kept, in ascending id order with
/// no repeated ids.
///
/// # Examples
/// ```
/// use larder::recipes::RecipeStore;
/// use larder::search::text::match_query;
///
/// let store = RecipeStore::from_json(r#"[
///     {"id": 1, "name": "Tarte aux pommes", "ingredients": [{"ingredient": "Pommes"}],
///      "time": 40, "description": "dessert", "appliance": "Four", "ustensils": ["Moule"]}
/// ]"#).unwrap();
///
/// assert_eq!(match_query("POMM", store.all()).len(), 1);
/// assert_eq!(match_query("po", store.all()).len(), 1);
/// assert!(match_query("poisson", store.all()).is_empty());
/// ```
pub fn match_query<'a>(query: &str, pool: impl IntoIterator<Item = &'a Recipe>) -> Vec<&'a Recipe> {
    let pool = pool.into_iter();
    if !is_active_query(query) {
        return pool.collect();
    }

    let needle = query.to_lowercase();
    let mut matched: Vec<&Recipe> = pool.filter(|recipe| recipe_contains(recipe, &needle)).collect();
    matched.sort_by_key(|recipe| recipe.id);
    matched.dedup_by_key(|recipe| recipe.id);
    matched
}
