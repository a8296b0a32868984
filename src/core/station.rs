use crate::core::dish::Dish;
use crate::core::inventory::{Inventory, StockEntry};
use std::collections::HashMap;
use std::sync::Arc;

/// A named kitchen station holding its own ingredient stock and the set of
/// dishes it knows how to prepare
///
/// A station only reads the dishes registered with it; recipe requirement
/// lists are never mutated. All mutation happens on the station's own
/// stock.
#[derive(Debug)]
pub struct KitchenStation {
    name: String,
    recipes: HashMap<String, Arc<Dish>>,
    stock: Inventory,
}

impl KitchenStation {
    /// Create an empty station with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            recipes: HashMap::new(),
            stock: Inventory::new(),
        }
    }

    /// Get the station name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a dish this station can prepare
    ///
    /// A dish name is registered at most once per station; a second
    /// registration attempt is a no-op reported as failure.
    pub fn register_recipe(&mut self, dish: Arc<Dish>) -> bool {
        if self.recipes.contains_key(dish.name()) {
            return false;
        }
        self.recipes.insert(dish.name().to_string(), dish);
        true
    }

    /// Check whether a dish is registered at this station
    pub fn has_recipe(&self, dish_name: &str) -> bool {
        self.recipes.contains_key(dish_name)
    }

    /// Look up a registered dish by name
    pub fn recipe(&self, dish_name: &str) -> Option<&Arc<Dish>> {
        self.recipes.get(dish_name)
    }

    /// All dishes registered at this station
    pub fn recipes(&self) -> Vec<Arc<Dish>> {
        self.recipes.values().cloned().collect()
    }

    /// Names of registered dishes, sorted for stable display
    pub fn recipe_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.recipes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Merge an ingredient delivery into this station's stock
    pub fn replenish_stock(&mut self, entry: StockEntry) {
        self.stock.deposit(entry);
    }

    /// Get the station's ingredient stock
    pub fn stock(&self) -> &Inventory {
        &self.stock
    }

    /// Check whether the station could prepare a dish right now
    ///
    /// Returns false when the dish is not registered here, or when any
    /// requirement is missing from stock or held in insufficient quantity.
    /// The check is read-only, so callers may probe speculatively.
    pub fn can_fulfill(&self, dish_name: &str) -> bool {
        let dish = match self.recipes.get(dish_name) {
            Some(dish) => dish,
            None => return false,
        };
        for requirement in dish.ingredients() {
            if !self.stock.contains(&requirement.name) {
                return false;
            }
            if self.stock.quantity(&requirement.name) < requirement.required_quantity {
                return false;
            }
        }
        true
    }

    /// Prepare a dish, consuming its ingredients from stock
    ///
    /// Re-validates with `can_fulfill` first; on failure nothing changes.
    /// On success every requirement is withdrawn from stock, and entries
    /// that reach zero disappear from the stock listing.
    pub fn prepare(&mut self, dish_name: &str) -> bool {
        if !self.can_fulfill(dish_name) {
            return false;
        }
        let dish = match self.recipes.get(dish_name) {
            Some(dish) => Arc::clone(dish),
            None => return false,
        };
        for requirement in dish.ingredients() {
            self.stock
                .withdraw(&requirement.name, requirement.required_quantity);
        }
        true
    }
}
