//! Output formatting for CLI display
//!
//! Renders recipes, keyword lists and tags from a session snapshot. Nothing
//! here touches session state; colouring is switched off globally through
//! `colored::control` when requested.

use crate::recipes::{IngredientEntry, Recipe};
use crate::search::{Category, Snapshot, TagColor};
use colored::{ColoredString, Colorize};

/// Shown when no recipe is visible
pub const NO_RECIPE_MESSAGE: &str = "Aucune recette ne correspond à votre critère... vous pouvez chercher « tarte aux pommes », « poisson », etc.";

/// Short form of a unit for display
///
/// Matching is case-insensitive; unknown units are returned unchanged.
#[must_use]
pub fn abbreviate_unit(unit: &str) -> &str {
    match unit.to_lowercase().as_str() {
        "grammes" => "g",
        "cuillère à soupe" | "cuillères à soupe" => "c. à s.",
        "cuillère à café" | "cuillères à café" => "c. à c.",
        "litre" | "litres" => "l",
        _ => unit,
    }
}

/// Format a quantity without a trailing `.0` for whole numbers
#[must_use]
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{quantity:.0}")
    } else {
        quantity.to_string()
    }
}

/// Format one ingredient line, e.g. `Farine: 250 g`
#[must_use]
pub fn ingredient_line(entry: &IngredientEntry) -> String {
    match (entry.quantity, entry.unit.as_deref()) {
        (Some(quantity), Some(unit)) => format!(
            "{}: {} {}",
            entry.ingredient,
            format_quantity(quantity),
            abbreviate_unit(unit)
        ),
        (Some(quantity), None) => format!("{}: {}", entry.ingredient, format_quantity(quantity)),
        (None, _) => entry.ingredient.clone(),
    }
}

/// Format a recipe as a multi-line card
#[must_use]
pub fn recipe_card(recipe: &Recipe) -> String {
    let mut card = format!("{}  {}\n", recipe.name.bold(), format!("{} min", recipe.time).dimmed());
    for entry in &recipe.ingredients {
        card.push_str(&format!("  • {}\n", ingredient_line(entry)));
    }
    if !recipe.description.is_empty() {
        card.push_str(&format!("  {}\n", recipe.description));
    }
    card
}

fn paint(text: &str, color: TagColor) -> ColoredString {
    match color {
        TagColor::Blue => text.blue(),
        TagColor::Green => text.green(),
        TagColor::Red => text.red(),
    }
}

/// Format the active tags of a category, or `None` if it has none
#[must_use]
pub fn tag_line(category: Category, tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let chips: Vec<String> = tags
        .iter()
        .map(|tag| paint(&format!("[{tag} ×]"), category.color()).to_string())
        .collect();
    Some(format!("{}: {}", category.plural(), chips.join(" ")))
}

/// Format the keyword list of a category
#[must_use]
pub fn keyword_list(category: Category, keywords: &[String]) -> String {
    if keywords.is_empty() {
        return format!("Aucun {} trouvé", category.label());
    }
    keywords.join(", ")
}

/// Render a full snapshot
///
/// In quiet mode only recipe names are printed, one per line.
#[must_use]
pub fn render_snapshot(snapshot: &Snapshot<'_>, quiet: bool) -> String {
    if quiet {
        return snapshot
            .filtered_recipes()
            .iter()
            .map(|recipe| format!("{}\n", recipe.name))
            .collect();
    }

    let mut out = String::new();
    let tag_lines: Vec<String> = Category::ALL
        .into_iter()
        .filter_map(|category| tag_line(category, snapshot.tags(category)))
        .collect();
    if !tag_lines.is_empty() {
        out.push_str(&format!("{}\n", "Tags".bold()));
        for line in tag_lines {
            out.push_str(&format!("  {line}\n"));
        }
        out.push('\n');
    }

    if snapshot.is_empty() {
        out.push_str(NO_RECIPE_MESSAGE);
        out.push('\n');
    } else {
        for recipe in snapshot.filtered_recipes() {
            out.push_str(&recipe_card(recipe));
            out.push('\n');
        }
    }

    for category in Category::ALL {
        out.push_str(&format!(
            "{} {}\n",
            paint(&format!("{}:", category.plural()), category.color()).bold(),
            keyword_list(category, snapshot.keywords(category))
        ));
    }
    out
}
