//! Interactive command - prompt-driven search session
//!
//! Each prompt line becomes one session command. A session observer prints
//! the snapshot after every command.
//!
//! # Prompt Grammar
//!
//! ```text
//! tarte aux pommes   free-text query (shorter than 3 characters shows everything)
//! +i Pommes          add the ingredient tag "Pommes"
//! -a Four            remove the appliance tag "Four"
//! ?u mou             list utensil keywords containing "mou"
//! :clear             clear the query
//! :tags              list active tags
//! :help              show this summary
//! :q                 quit
//! ```

use crate::recipes::RecipeStore;
use crate::search::{Category, Outcome, SearchError, SearchSession, Snapshot};
use crate::{LarderError, output};
use dialoguer::{Input, theme::ColorfulTheme};

type Result<T> = std::result::Result<T, LarderError>;

const HELP: &str = "\
  <texte>        rechercher (3 caractères minimum)
  +<cat> <tag>   ajouter un tag (cat: i, a, u)
  -<cat> <tag>   retirer un tag
  ?<cat> [texte] filtrer les mots-clés d'une catégorie
  :clear         effacer la recherche
  :tags          afficher les tags actifs
  :q             quitter";

/// One parsed prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    Query(String),
    AddTag(Category, String),
    RemoveTag(Category, String),
    Narrow(Category, String),
    Clear,
    Tags,
    Help,
    Quit,
}

/// Split `<cat> <value>` into a category and the (trimmed) rest
fn category_and_value(rest: &str) -> std::result::Result<(Category, String), SearchError> {
    let rest = rest.trim_start();
    let (category, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    Ok((category.parse()?, value.trim().to_string()))
}

/// Parse a prompt line
///
/// # Errors
///
/// Returns `SearchError::UnknownCategory` for a bad category token and
/// `SearchError::InvalidCommand` for unknown `:` commands or a tag command
/// without a value.
pub fn parse_prompt_line(line: &str) -> std::result::Result<PromptInput, SearchError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();

    if let Some(command) = trimmed.strip_prefix(':') {
        return match command {
            "q" | "quit" => Ok(PromptInput::Quit),
            "clear" => Ok(PromptInput::Clear),
            "tags" => Ok(PromptInput::Tags),
            "h" | "help" => Ok(PromptInput::Help),
            _ => Err(SearchError::InvalidCommand(trimmed.to_string())),
        };
    }

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(sigil @ ('+' | '-')) => {
            let (category, value) = category_and_value(chars.as_str())?;
            if value.is_empty() {
                return Err(SearchError::InvalidCommand(trimmed.to_string()));
            }
            if sigil == '+' {
                Ok(PromptInput::AddTag(category, value))
            } else {
                Ok(PromptInput::RemoveTag(category, value))
            }
        }
        Some('?') => {
            let (category, partial) = category_and_value(chars.as_str())?;
            Ok(PromptInput::Narrow(category, partial))
        }
        _ => Ok(PromptInput::Query(line.to_string())),
    }
}

fn print_tags(session: &SearchSession<'_>) {
    let mut any = false;
    for category in Category::ALL {
        if let Some(line) = output::tag_line(category, session.state().tags(category)) {
            println!("  {line}");
            any = true;
        }
    }
    if !any {
        println!("  Aucun tag actif");
    }
}

/// Apply one parsed prompt line to the session
///
/// Returns false when the session should end.
pub fn apply(session: &mut SearchSession<'_>, input: PromptInput, quiet: bool) -> bool {
    match input {
        PromptInput::Query(text) => {
            session.submit_query(Some(&text));
        }
        PromptInput::AddTag(category, value) => {
            if session.add_tag(category, &value) == Outcome::Ignored && !quiet {
                println!("« {value} » n'est pas un {} disponible", category.label());
            }
        }
        PromptInput::RemoveTag(category, value) => {
            if session.remove_tag(category, &value) == Outcome::Ignored && !quiet {
                println!("« {value} » n'est pas un tag actif");
            }
        }
        PromptInput::Narrow(category, partial) => {
            let keywords = session.filter_keyword_input(category, &partial);
            println!("{}", output::keyword_list(category, &keywords));
        }
        PromptInput::Clear => {
            session.submit_query(None);
        }
        PromptInput::Tags => print_tags(session),
        PromptInput::Help => println!("{HELP}"),
        PromptInput::Quit => return false,
    }
    true
}

/// Execute the interactive command
///
/// # Errors
///
/// Returns `LarderError::PromptError` if the terminal prompt fails.
pub fn execute(store: &RecipeStore, quiet: bool) -> Result<()> {
    let mut session = SearchSession::new(store);
    session.subscribe(move |snapshot: &Snapshot<'_>| {
        print!("{}", output::render_snapshot(snapshot, quiet));
    });

    if !quiet {
        println!("{} recettes chargées. Tapez :help pour l'aide.\n", store.len());
        print!("{}", output::render_snapshot(session.snapshot(), quiet));
    }

    let theme = ColorfulTheme::default();
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("Rechercher une recette")
            .allow_empty(true)
            .interact_text()?;

        match parse_prompt_line(&line) {
            Ok(input) => {
                if !apply(&mut session, input, quiet) {
                    break;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "unparsed prompt line");
                println!("{e}\n{HELP}");
            }
        }
    }

    Ok(())
}
