//! Filter categories and their descriptor table
//!
//! Every per-category decision (which recipe field to read, how to label the
//! facet, which colour its tags use) goes through [`Category::descriptor`], so
//! the rest of the engine never matches on the category itself.

use super::error::SearchError;
use crate::recipes::Recipe;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the three independent filter facets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Ingredients,
    Appliances,
    Utensils,
}

/// Colour used to render a category's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColor {
    Blue,
    Green,
    Red,
}

/// Static per-category metadata
pub struct CategoryDescriptor {
    /// Values of this category's field for one recipe
    pub values: fn(&Recipe) -> Vec<&str>,
    /// Singular display label
    pub label: &'static str,
    /// Plural display label
    pub plural: &'static str,
    pub color: TagColor,
}

fn ingredient_values(recipe: &Recipe) -> Vec<&str> {
    recipe.ingredient_names().collect()
}

fn appliance_values(recipe: &Recipe) -> Vec<&str> {
    vec![recipe.appliance.as_str()]
}

fn utensil_values(recipe: &Recipe) -> Vec<&str> {
    recipe.utensils.iter().map(String::as_str).collect()
}

static INGREDIENTS: CategoryDescriptor = CategoryDescriptor {
    values: ingredient_values,
    label: "ingrédient",
    plural: "ingrédients",
    color: TagColor::Blue,
};

static APPLIANCES: CategoryDescriptor = CategoryDescriptor {
    values: appliance_values,
    label: "appareil",
    plural: "appareils",
    color: TagColor::Green,
};

static UTENSILS: CategoryDescriptor = CategoryDescriptor {
    values: utensil_values,
    label: "ustensile",
    plural: "ustensiles",
    color: TagColor::Red,
};

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 3] = [Self::Ingredients, Self::Appliances, Self::Utensils];

    #[must_use]
    pub fn descriptor(self) -> &'static CategoryDescriptor {
        match self {
            Self::Ingredients => &INGREDIENTS,
            Self::Appliances => &APPLIANCES,
            Self::Utensils => &UTENSILS,
        }
    }

    /// This category's values for `recipe`
    #[must_use]
    pub fn values_of(self, recipe: &Recipe) -> Vec<&str> {
        (self.descriptor().values)(recipe)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    #[must_use]
    pub fn plural(self) -> &'static str {
        self.descriptor().plural
    }

    #[must_use]
    pub fn color(self) -> TagColor {
        self.descriptor().color
    }

    const fn index(self) -> usize {
        match self {
            Self::Ingredients => 0,
            Self::Appliances => 1,
            Self::Utensils => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ingredients => "ingredients",
            Self::Appliances => "appliances",
            Self::Utensils => "utensils",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "i" | "ingredient" | "ingredients" => Ok(Self::Ingredients),
            "a" | "appliance" | "appliances" => Ok(Self::Appliances),
            "u" | "utensil" | "utensils" | "ustensils" => Ok(Self::Utensils),
            _ => Err(SearchError::UnknownCategory(s.to_string())),
        }
    }
}

/// A value per category, indexable by [`Category`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap<T> {
    slots: [T; 3],
}

impl<T> CategoryMap<T> {
    /// Build a map by evaluating `f` for every category
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            slots: Category::ALL.map(&mut f),
        }
    }

    /// Iterate `(category, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.slots.iter())
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        &self.slots[category.index()]
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        &mut self.slots[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recipe;

    #[test]
    fn test_values_of_each_category() {
        let r = recipe(1, "Tarte", &["Pommes", "Sucre"], "Four", &["Moule", "Rouleau"]);

        assert_eq!(Category::Ingredients.values_of(&r), vec!["Pommes", "Sucre"]);
        assert_eq!(Category::Appliances.values_of(&r), vec!["Four"]);
        assert_eq!(Category::Utensils.values_of(&r), vec!["Moule", "Rouleau"]);
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(Category::Ingredients.label(), "ingrédient");
        assert_eq!(Category::Appliances.plural(), "appareils");
        assert_eq!(Category::Utensils.color(), TagColor::Red);
        assert_eq!(Category::Appliances.color(), TagColor::Green);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("ingredients".parse::<Category>().unwrap(), Category::Ingredients);
        assert_eq!("A".parse::<Category>().unwrap(), Category::Appliances);
        assert_eq!(" utensil ".parse::<Category>().unwrap(), Category::Utensils);
        assert_eq!("ustensils".parse::<Category>().unwrap(), Category::Utensils);
    }

    #[test]
    fn test_parse_unknown_category() {
        let result = "spices".parse::<Category>();
        assert!(matches!(result, Err(SearchError::UnknownCategory(s)) if s == "spices"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_map_indexing() {
        let mut map: CategoryMap<Vec<&str>> = CategoryMap::default();
        map[Category::Utensils].push("Moule");

        assert!(map[Category::Ingredients].is_empty());
        assert_eq!(map[Category::Utensils], vec!["Moule"]);

        let categories: Vec<Category> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }
}
