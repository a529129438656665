//! Larder CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Interactive search (default command)
//! larder
//! larder interactive
//!
//! # One-shot search with tags
//! larder search "tarte" -i Pommes -a Four
//!
//! # Keywords of a category, optionally narrowed
//! larder keywords utensils mou
//!
//! # Use a specific data file
//! larder --recipes ./recipes.json search coco
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/larder/config.toml` on Linux) and created on first run.

use larder::{
    LarderError,
    cli::{Cli, Commands},
    commands,
    config::LarderConfig,
    recipes::RecipeStore,
};
use std::process;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, LarderError>;

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over the configured level.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("larder={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_store(cli: &Cli, config: &LarderConfig) -> Result<RecipeStore> {
    let recipes_path = config.resolve_recipes_path(cli.recipes.as_deref());
    Ok(RecipeStore::load(&recipes_path)?)
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = LarderConfig::config_path()?;
    let mut config = LarderConfig::load_from(&config_path)?;

    init_logging(&config.log_level);

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }
    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();
    let tags = command.search_tags();

    match command {
        Commands::Config { command } => {
            commands::config(&command, &mut config, &config_path, quiet)
        }
        Commands::Interactive => commands::interactive(&load_store(cli, &config)?, quiet),
        Commands::Search { query, .. } => {
            commands::search(&load_store(cli, &config)?, query.as_deref(), &tags, quiet)
        }
        Commands::Keywords {
            category,
            partial,
            query,
        } => commands::keywords(
            &load_store(cli, &config)?,
            category,
            partial.as_deref(),
            query.as_deref(),
            quiet,
        ),
    }
}

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
