//! Keywords command - list the selectable values of one category

use crate::recipes::RecipeStore;
use crate::search::{Category, SearchSession};
use crate::{LarderError, output};

type Result<T> = std::result::Result<T, LarderError>;

/// Keywords of `category` for the pool matching `query`, narrowed by `partial`
#[must_use]
pub fn collect(
    store: &RecipeStore,
    category: Category,
    partial: Option<&str>,
    query: Option<&str>,
) -> Vec<String> {
    let mut session = SearchSession::new(store);
    session.submit_query(query);
    session.filter_keyword_input(category, partial.unwrap_or_default())
}

/// Execute the keywords command
///
/// # Errors
///
/// Currently infallible; the signature matches the other commands.
pub fn execute(
    store: &RecipeStore,
    category: Category,
    partial: Option<&str>,
    query: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let keywords = collect(store, category, partial, query);

    if keywords.is_empty() {
        if !quiet {
            println!("{}", output::keyword_list(category, &keywords));
        }
    } else {
        for keyword in keywords {
            println!("{keyword}");
        }
    }
    Ok(())
}
