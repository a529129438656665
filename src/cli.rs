//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for larder using the `clap` crate.
//!
//! # Commands
//!
//! - **interactive**: prompt-driven search session (default)
//! - **search**: one-shot search with a query and tags
//! - **keywords**: list the selectable values of one category
//! - **config**: show or edit the configuration
//!
//! # Examples
//!
//! ```no_run
//! use larder::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::Search { query, .. } => println!("searching for {query:?}"),
//!     _ => {}
//! }
//! ```

use crate::search::{Category, CategoryMap};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,
    /// Print the location of the config file
    Path,
    /// Set the recipe data file used by default
    #[command(name = "set-recipes")]
    SetRecipes {
        /// Path to a recipe JSON file
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(about = "Faceted recipe search", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Recipe data file (overrides config)
    #[arg(long = "recipes", value_name = "PATH", global = true)]
    pub recipes: Option<PathBuf>,

    /// Suppress informational output (only print recipe names)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive search session (default)
    #[command(visible_alias = "i")]
    Interactive,

    /// Search recipes by text and tags
    #[command(visible_alias = "s")]
    Search {
        /// Free-text query (at least 3 characters to take effect)
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Ingredient tags
        #[arg(short = 'i', long = "ingredient", value_name = "INGREDIENT")]
        ingredients: Vec<String>,

        /// Appliance tags
        #[arg(short = 'a', long = "appliance", value_name = "APPLIANCE")]
        appliances: Vec<String>,

        /// Utensil tags
        #[arg(short = 'u', long = "utensil", value_name = "UTENSIL")]
        utensils: Vec<String>,
    },

    /// List the selectable keywords of a category
    #[command(visible_alias = "k")]
    Keywords {
        /// ingredients, appliances or utensils
        #[arg(value_name = "CATEGORY")]
        category: Category,

        /// Only show keywords containing this text
        #[arg(value_name = "PARTIAL")]
        partial: Option<String>,

        /// Restrict the recipe pool with a free-text query first
        #[arg(long = "query", value_name = "QUERY")]
        query: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Interactive if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}

impl Commands {
    /// Collect the tag flags of a `search` command per category
    ///
    /// Returns empty lists for every other command.
    #[must_use]
    pub fn search_tags(&self) -> CategoryMap<Vec<String>> {
        let mut tags = CategoryMap::default();
        if let Self::Search {
            ingredients,
            appliances,
            utensils,
            ..
        } = self
        {
            tags[Category::Ingredients] = ingredients.clone();
            tags[Category::Appliances] = appliances.clone();
            tags[Category::Utensils] = utensils.clone();
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_interactive() {
        let cli = Cli::parse_from(["larder"]);
        assert_eq!(cli.get_command(), Commands::Interactive);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_search_with_tags() {
        let cli = Cli::parse_from([
            "larder", "search", "tarte", "-i", "Pommes", "-i", "Sucre", "-a", "Four",
        ]);
        let command = cli.get_command();

        assert!(matches!(&command, Commands::Search { query: Some(q), .. } if q == "tarte"));
        let tags = command.search_tags();
        assert_eq!(tags[Category::Ingredients], vec!["Pommes", "Sucre"]);
        assert_eq!(tags[Category::Appliances], vec!["Four"]);
        assert!(tags[Category::Utensils].is_empty());
    }

    #[test]
    fn test_search_alias_and_globals() {
        let cli = Cli::parse_from(["larder", "s", "-q", "--recipes", "data.json", "--no-color"]);
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert_eq!(cli.recipes, Some(PathBuf::from("data.json")));
        assert!(matches!(cli.get_command(), Commands::Search { query: None, .. }));
    }

    #[test]
    fn test_keywords_parses_category() {
        let cli = Cli::parse_from(["larder", "keywords", "u", "mou", "--query", "tarte"]);
        assert_eq!(
            cli.get_command(),
            Commands::Keywords {
                category: Category::Utensils,
                partial: Some("mou".to_string()),
                query: Some("tarte".to_string()),
            }
        );
    }

    #[test]
    fn test_keywords_rejects_unknown_category() {
        let result = Cli::try_parse_from(["larder", "keywords", "spices"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_set_recipes() {
        let cli = Cli::parse_from(["larder", "config", "set-recipes", "/data/recipes.json"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::SetRecipes {
                    path: PathBuf::from("/data/recipes.json"),
                },
            }
        );
    }

    #[test]
    fn test_search_tags_empty_for_other_commands() {
        let tags = Commands::Interactive.search_tags();
        assert!(tags.iter().all(|(_, t)| t.is_empty()));
    }
}
