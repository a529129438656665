//! Recipe data structures
//!
//! Mirrors the layout of the recipe JSON dataset. The published data spells
//! the utensil list `ustensils`; both spellings are accepted.

use serde::{Deserialize, Serialize};

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Ingredient name, e.g. "Lait de coco"
    pub ingredient: String,

    /// Amount, when the recipe gives one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Unit of `quantity` ("grammes", "ml", "cuillères à soupe", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl IngredientEntry {
    /// Create an entry without quantity or unit
    #[must_use]
    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity: None,
            unit: None,
        }
    }

    /// Attach a quantity and an optional unit
    #[must_use]
    pub fn with_quantity(mut self, quantity: f64, unit: Option<&str>) -> Self {
        self.quantity = Some(quantity);
        self.unit = unit.map(str::to_string);
        self
    }
}

/// A single recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    pub ingredients: Vec<IngredientEntry>,
    /// Preparation time in minutes
    pub time: u32,
    pub description: String,
    pub appliance: String,
    #[serde(alias = "ustensils")]
    pub utensils: Vec<String>,
}

impl Recipe {
    /// Ingredient names in recipe order
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|entry| entry.ingredient.as_str())
    }

    /// Drop repeated utensils, keeping the first occurrence
    pub(crate) fn dedup_utensils(&mut self) {
        let mut seen = Vec::with_capacity(self.utensils.len());
        self.utensils.retain(|utensil| {
            if seen.contains(utensil) {
                false
            } else {
                seen.push(utensil.clone());
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_original_layout() {
        let json = r#"{
            "id": 1,
            "name": "Limonade de Coco",
            "servings": 1,
            "ingredients": [
                { "ingredient": "Lait de coco", "quantity": 400, "unit": "ml" },
                { "ingredient": "Glace" }
            ],
            "time": 10,
            "description": "Mettre les glaçons à votre goût dans le blender",
            "appliance": "Blender",
            "ustensils": ["cuillère à Soupe", "verres", "presse citron"]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.servings, Some(1));
        assert_eq!(recipe.ingredients[0].quantity, Some(400.0));
        assert_eq!(recipe.ingredients[0].unit.as_deref(), Some("ml"));
        assert_eq!(recipe.ingredients[1].quantity, None);
        assert_eq!(recipe.utensils.len(), 3);
    }

    #[test]
    fn test_deserialize_utensils_spelling() {
        let json = r#"{
            "id": 2, "name": "Soupe", "ingredients": [], "time": 5,
            "description": "", "appliance": "Casserole", "utensils": ["louche"]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.utensils, vec!["louche".to_string()]);
        assert_eq!(recipe.servings, None);
    }

    #[test]
    fn test_ingredient_names_keep_order() {
        let recipe = Recipe {
            id: 1,
            name: "Salade".into(),
            servings: None,
            ingredients: vec![IngredientEntry::new("Tomate"), IngredientEntry::new("Concombre")],
            time: 5,
            description: String::new(),
            appliance: "Saladier".into(),
            utensils: vec![],
        };

        let names: Vec<&str> = recipe.ingredient_names().collect();
        assert_eq!(names, vec!["Tomate", "Concombre"]);
    }

    #[test]
    fn test_dedup_utensils() {
        let mut recipe = Recipe {
            id: 1,
            name: "Crêpes".into(),
            servings: None,
            ingredients: vec![],
            time: 20,
            description: String::new(),
            appliance: "Poêle".into(),
            utensils: vec!["louche".into(), "fouet".into(), "louche".into()],
        };

        recipe.dedup_utensils();
        assert_eq!(recipe.utensils, vec!["louche".to_string(), "fouet".to_string()]);
    }

    #[test]
    fn test_ingredient_entry_with_quantity() {
        let entry = IngredientEntry::new("Farine").with_quantity(250.0, Some("grammes"));
        assert_eq!(entry.quantity, Some(250.0));
        assert_eq!(entry.unit.as_deref(), Some("grammes"));
    }
}
