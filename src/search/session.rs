//! Search session: the single owner of search state
//!
//! A session borrows the recipe store, owns a [`SearchState`] and keeps the
//! latest [`Snapshot`]. State changes only through [`Command`]s passed to
//! [`SearchSession::dispatch`] (or the named helpers that build them). Every
//! command runs to completion, recomputes the snapshot from scratch, and then
//! notifies observers synchronously.
//!
//! # Workflow
//!
//! ```text
//! Command
//!     ↓
//! dispatch()
//!     ├─ SubmitQuery → replace query
//!     ├─ AddTag      → select, unless value is not a current keyword (ignored)
//!     └─ RemoveTag   → deselect, unless value is not selected (ignored)
//!         ↓
//! derive(store, state) → Snapshot
//!         ↓
//! observers.on_state_change(&snapshot)
//! ```
//!
//! # Examples
//! ```
//! use larder::recipes::RecipeStore;
//! use larder::search::{Category, SearchSession};
//!
//! let store = RecipeStore::from_json(r#"[
//!     {"id": 1, "name": "Tarte aux pommes", "ingredients": [{"ingredient": "Pommes"}],
//!      "time": 40, "description": "dessert", "appliance": "Four", "ustensils": ["Moule"]},
//!     {"id": 2, "name": "Poisson vapeur", "ingredients": [{"ingredient": "Poisson"}],
//!      "time": 20, "description": "plat principal", "appliance": "Cuiseur vapeur",
//!      "ustensils": ["Panier"]}
//! ]"#).unwrap();
//!
//! let mut session = SearchSession::new(&store);
//! session.submit_query(Some("poi"));
//! assert_eq!(session.snapshot().filtered_ids(), vec![2]);
//!
//! session.add_tag(Category::Ingredients, "Poisson");
//! assert!(session.snapshot().keywords(Category::Ingredients).is_empty());
//! ```

use super::category::Category;
use super::state::{SearchState, Snapshot, derive};
use crate::recipes::RecipeStore;

/// A state-changing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the free-text query
    SubmitQuery(String),
    /// Select a keyword of a category as a tag
    AddTag { category: Category, value: String },
    /// Drop a selected tag
    RemoveTag { category: Category, value: String },
}

/// Whether a dispatched command changed the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The command did not apply to the current state and was dropped
    Ignored,
}

/// Receives every snapshot emitted by a session
pub trait StateObserver {
    fn on_state_change(&mut self, snapshot: &Snapshot<'_>);
}

impl<F> StateObserver for F
where
    F: FnMut(&Snapshot<'_>),
{
    fn on_state_change(&mut self, snapshot: &Snapshot<'_>) {
        self(snapshot);
    }
}

/// Interactive search over a recipe store
pub struct SearchSession<'a> {
    store: &'a RecipeStore,
    state: SearchState,
    snapshot: Snapshot<'a>,
    observers: Vec<Box<dyn StateObserver + 'a>>,
}

impl<'a> SearchSession<'a> {
    /// Start a session with an empty query and no tags
    #[must_use]
    pub fn new(store: &'a RecipeStore) -> Self {
        let state = SearchState::new();
        let snapshot = derive(store, &state);
        Self {
            store,
            state,
            snapshot,
            observers: Vec::new(),
        }
    }

    /// Register an observer notified after every command
    pub fn subscribe(&mut self, observer: impl StateObserver + 'a) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Latest snapshot
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot<'a> {
        &self.snapshot
    }

    /// Apply a command, recompute the snapshot and notify observers
    ///
    /// Observers are notified for ignored commands too, with the unchanged
    /// snapshot.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::SubmitQuery(text) => {
                self.state.set_query(text);
                Outcome::Applied
            }
            Command::AddTag { category, value } => {
                if self.snapshot.is_keyword(category, &value) && self.state.select(category, value) {
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            Command::RemoveTag { category, value } => {
                if self.state.deselect(category, &value) {
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
        };

        if outcome == Outcome::Applied {
            self.snapshot = derive(self.store, &self.state);
        }

        tracing::debug!(
            ?outcome,
            query = self.state.query(),
            visible = self.snapshot.filtered_recipes().len(),
            "search command dispatched"
        );

        for observer in &mut self.observers {
            observer.on_state_change(&self.snapshot);
        }

        outcome
    }

    /// Replace the query; `None` clears it
    pub fn submit_query(&mut self, text: Option<&str>) -> Outcome {
        self.dispatch(Command::SubmitQuery(text.unwrap_or_default().to_string()))
    }

    /// Select `value` as a tag of `category` if it is currently a keyword
    pub fn add_tag(&mut self, category: Category, value: &str) -> Outcome {
        self.dispatch(Command::AddTag {
            category,
            value: value.to_string(),
        })
    }

    /// Drop the tag `value` from `category` if it is selected
    pub fn remove_tag(&mut self, category: Category, value: &str) -> Outcome {
        self.dispatch(Command::RemoveTag {
            category,
            value: value.to_string(),
        })
    }

    /// Current keywords of `category` containing `partial`, sorted
    ///
    /// Read-only: the state and snapshot are untouched and no observer runs.
    #[must_use]
    pub fn filter_keyword_input(&self, category: Category, partial: &str) -> Vec<String> {
        self.snapshot.narrowed_keywords(category, partial)
    }
}
