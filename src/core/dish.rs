use serde::{Deserialize, Serialize};
use std::fmt;

/// Cuisine classification carried on a dish for display and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuisineType {
    Italian,
    Mexican,
    Chinese,
    Indian,
    American,
    French,
    Other,
}

impl Default for CuisineType {
    fn default() -> Self {
        CuisineType::Other
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CuisineType::Italian => "Italian",
            CuisineType::Mexican => "Mexican",
            CuisineType::Chinese => "Chinese",
            CuisineType::Indian => "Indian",
            CuisineType::American => "American",
            CuisineType::French => "French",
            CuisineType::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// One ingredient requirement of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequirement {
    /// Ingredient name, matched against stock entries by exact name
    pub name: String,
    /// Units consumed each time the dish is prepared
    pub required_quantity: u32,
}

impl RecipeRequirement {
    /// Create a new recipe requirement
    pub fn new(name: &str, required_quantity: u32) -> Self {
        Self {
            name: name.to_string(),
            required_quantity,
        }
    }
}

/// A dish: identity key, recipe requirements, and display data
///
/// Dishes are created by the caller and shared read-only with the core
/// (stations and the order queue hold `Arc<Dish>` references). The name is
/// the identity key; two dishes with the same name are treated as the same
/// dish everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    name: String,
    ingredients: Vec<RecipeRequirement>,
    prep_time_minutes: u32,
    price: f64,
    cuisine_type: CuisineType,
}

impl Dish {
    /// Create a new dish
    pub fn new(
        name: &str,
        ingredients: Vec<RecipeRequirement>,
        prep_time_minutes: u32,
        price: f64,
        cuisine_type: CuisineType,
    ) -> Self {
        Self {
            name: name.to_string(),
            ingredients,
            prep_time_minutes,
            price,
            cuisine_type,
        }
    }

    /// Get the dish name (identity key)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the recipe requirements (read-only)
    pub fn ingredients(&self) -> &[RecipeRequirement] {
        &self.ingredients
    }

    /// Get the preparation time in minutes
    pub fn prep_time_minutes(&self) -> u32 {
        self.prep_time_minutes
    }

    /// Get the menu price
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Get the cuisine type
    pub fn cuisine_type(&self) -> CuisineType {
        self.cuisine_type
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ingredient_names: Vec<&str> =
            self.ingredients.iter().map(|i| i.name.as_str()).collect();
        writeln!(f, "Dish Name: {}", self.name)?;
        writeln!(f, "Ingredients: {}", ingredient_names.join(", "))?;
        writeln!(f, "Preparation Time: {} minutes", self.prep_time_minutes)?;
        writeln!(f, "Price: ${:.2}", self.price)?;
        write!(f, "Cuisine Type: {}", self.cuisine_type)
    }
}
