//! Search command - one-shot search with a query and tags

use crate::recipes::RecipeStore;
use crate::search::{Category, CategoryMap, Outcome, SearchSession};
use crate::{LarderError, output};

type Result<T> = std::result::Result<T, LarderError>;

/// Run a session for `query` and `tags`, returning the tags that were skipped
///
/// Tags are applied in category order, each one against the pool left by the
/// previous ones; a tag that is not a keyword at that point is skipped.
pub fn run(
    session: &mut SearchSession<'_>,
    query: Option<&str>,
    tags: &CategoryMap<Vec<String>>,
) -> Vec<(Category, String)> {
    session.submit_query(query);

    let mut skipped = Vec::new();
    for (category, values) in tags.iter() {
        for value in values {
            if session.add_tag(category, value) == Outcome::Ignored {
                tracing::warn!(%category, tag = %value, "tag is not an available keyword, skipped");
                skipped.push((category, value.clone()));
            }
        }
    }
    skipped
}

/// Execute the search command
///
/// # Errors
///
/// Currently infallible; the signature matches the other commands.
pub fn execute(
    store: &RecipeStore,
    query: Option<&str>,
    tags: &CategoryMap<Vec<String>>,
    quiet: bool,
) -> Result<()> {
    let mut session = SearchSession::new(store);
    run(&mut session, query, tags);
    print!("{}", output::render_snapshot(session.snapshot(), quiet));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::pantry_store;

    fn tags(category: Category, values: &[&str]) -> CategoryMap<Vec<String>> {
        let mut map = CategoryMap::default();
        map[category] = values.iter().map(|v| v.to_string()).collect();
        map
    }

    #[test]
    fn test_run_applies_query_and_tags() {
        let store = pantry_store();
        let mut session = SearchSession::new(&store);

        let skipped = run(&mut session, Some("pommes"), &tags(Category::Appliances, &["Four"]));
        assert!(skipped.is_empty());
        assert_eq!(session.snapshot().filtered_ids(), vec![1, 4]);
    }

    #[test]
    fn test_run_reports_skipped_tags() {
        let store = pantry_store();
        let mut session = SearchSession::new(&store);

        let skipped = run(&mut session, Some("compote"), &tags(Category::Appliances, &["Four"]));
        assert_eq!(skipped, vec![(Category::Appliances, "Four".to_string())]);
        assert_eq!(session.snapshot().filtered_ids(), vec![3]);
    }

    #[test]
    fn test_run_without_query() {
        let store = pantry_store();
        let mut session = SearchSession::new(&store);

        let skipped = run(&mut session, None, &CategoryMap::default());
        assert!(skipped.is_empty());
        assert_eq!(session.snapshot().filtered_ids(), vec![1, 2, 3, 4]);
    }
}
