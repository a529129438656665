//! Config command - show or edit the configuration

use crate::cli::ConfigCommands;
use crate::config::LarderConfig;
use crate::LarderError;
use std::path::Path;

type Result<T> = std::result::Result<T, LarderError>;

/// Execute a config subcommand against the config file at `config_path`
///
/// # Errors
///
/// Returns `LarderError::ConfigError` if the configuration cannot be
/// serialized or saved.
pub fn execute(
    command: &ConfigCommands,
    config: &mut LarderConfig,
    config_path: &Path,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config).map_err(|e| {
                ::config::ConfigError::Message(format!("Failed to serialize config: {e}"))
            })?;
            print!("{rendered}");
        }
        ConfigCommands::Path => println!("{}", config_path.display()),
        ConfigCommands::SetRecipes { path } => {
            config.set_recipes_path(path.clone());
            config.save_to(config_path)?;
            if !quiet {
                println!("Recipe file set to {}", path.display());
            }
        }
    }
    Ok(())
}
