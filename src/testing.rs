//! Testing utilities for larder
//!
//! Small recipe builders and ready-made stores shared by unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::recipes::{IngredientEntry, Recipe, RecipeStore};

/// The two-recipe dataset used by the session scenario tests
pub const SCENARIO_JSON: &str = r#"[
    {
        "id": 1,
        "name": "Tarte aux pommes",
        "ingredients": [{ "ingredient": "Pommes" }],
        "appliance": "Four",
        "ustensils": ["Moule"],
        "description": "dessert",
        "time": 40
    },
    {
        "id": 2,
        "name": "Poisson vapeur",
        "ingredients": [{ "ingredient": "Poisson" }],
        "appliance": "Cuiseur vapeur",
        "ustensils": ["Panier"],
        "description": "plat principal",
        "time": 20
    }
]"#;

/// Build a recipe with bare ingredients and an empty description
pub fn recipe(
    id: u32,
    name: &str,
    ingredients: &[&str],
    appliance: &str,
    utensils: &[&str],
) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        servings: None,
        ingredients: ingredients.iter().map(|i| IngredientEntry::new(*i)).collect(),
        time: 30,
        description: String::new(),
        appliance: appliance.to_string(),
        utensils: utensils.iter().map(|u| (*u).to_string()).collect(),
    }
}

/// Store holding [`SCENARIO_JSON`]
///
/// # Panics
/// Panics if the fixture JSON is invalid.
pub fn scenario_store() -> RecipeStore {
    RecipeStore::from_json(SCENARIO_JSON).expect("scenario fixture is valid")
}

/// Four recipes with overlapping ingredients and appliances
///
/// | id | name             | ingredients     | appliance      | utensils         |
/// |----|------------------|-----------------|----------------|------------------|
/// | 1  | Tarte aux pommes | Pommes, Sucre   | Four           | Moule, Rouleau   |
/// | 2  | Poisson vapeur   | Poisson         | Cuiseur vapeur | Panier           |
/// | 3  | Compote          | Pommes          | Casserole      | Cuillère en bois |
/// | 4  | Crumble          | Pommes, Beurre  | Four           | Plat             |
///
/// # Panics
/// Panics if the fixture has duplicate ids.
pub fn pantry_store() -> RecipeStore {
    RecipeStore::new(vec![
        recipe(1, "Tarte aux pommes", &["Pommes", "Sucre"], "Four", &["Moule", "Rouleau"]),
        recipe(2, "Poisson vapeur", &["Poisson"], "Cuiseur vapeur", &["Panier"]),
        recipe(3, "Compote", &["Pommes"], "Casserole", &["Cuillère en bois"]),
        recipe(4, "Crumble", &["Pommes", "Beurre"], "Four", &["Plat"]),
    ])
    .expect("pantry fixture has unique ids")
}
