use crate::core::dish::Dish;
use crate::core::inventory::StockEntry;
use crate::core::manager::StationManager;
use crate::core::station::KitchenStation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Initial setup of one station: its name, starting stock, and the dish
/// names assigned to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationSetup {
    pub name: String,
    #[serde(default)]
    pub stock: Vec<StockEntry>,
    #[serde(default)]
    pub recipes: Vec<String>,
}

impl StationSetup {
    /// Create a setup for a named station with no stock or recipes
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stock: Vec::new(),
            recipes: Vec::new(),
        }
    }

    /// Add a starting stock entry
    pub fn with_stock(mut self, entry: StockEntry) -> Self {
        self.stock.push(entry);
        self
    }

    /// Assign a dish from the catalog by name
    pub fn with_recipe(mut self, dish_name: &str) -> Self {
        self.recipes.push(dish_name.to_string());
        self
    }
}

/// Complete bootstrap definition of a kitchen
///
/// Carries the dish catalog, station setups, backup reserve contents, and
/// the initial order names. `build` assembles a ready `StationManager`
/// from it, validating every name reference along the way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KitchenConfig {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub stations: Vec<StationSetup>,
    #[serde(default)]
    pub reserve: Vec<StockEntry>,
    #[serde(default)]
    pub orders: Vec<String>,
}

impl KitchenConfig {
    /// Create an empty kitchen configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dish to the catalog
    pub fn with_dish(mut self, dish: Dish) -> Self {
        self.dishes.push(dish);
        self
    }

    /// Add a station setup
    pub fn with_station(mut self, setup: StationSetup) -> Self {
        self.stations.push(setup);
        self
    }

    /// Add a backup reserve entry
    pub fn with_reserve(mut self, entry: StockEntry) -> Self {
        self.reserve.push(entry);
        self
    }

    /// Queue an initial order for a catalog dish by name
    pub fn with_order(mut self, dish_name: &str) -> Self {
        self.orders.push(dish_name.to_string());
        self
    }

    /// Assemble a station manager from this configuration
    ///
    /// Station order follows the configuration order; orders are queued in
    /// the listed order. Fails on a duplicate dish or station name, a
    /// recipe or order referencing an unknown dish, or a zero-quantity
    /// reserve entry.
    pub fn build(&self) -> Result<StationManager, String> {
        let mut catalog: HashMap<String, Arc<Dish>> = HashMap::new();
        for dish in &self.dishes {
            let name = dish.name().to_string();
            if catalog.contains_key(&name) {
                return Err(format!("Dish '{}' is defined more than once", name));
            }
            catalog.insert(name, Arc::new(dish.clone()));
        }

        let mut manager = StationManager::new();

        for setup in &self.stations {
            let mut station = KitchenStation::new(&setup.name);
            for entry in &setup.stock {
                station.replenish_stock(entry.clone());
            }
            for dish_name in &setup.recipes {
                let dish = catalog.get(dish_name).ok_or_else(|| {
                    format!(
                        "Station '{}' references unknown dish '{}'",
                        setup.name, dish_name
                    )
                })?;
                if !station.register_recipe(Arc::clone(dish)) {
                    return Err(format!(
                        "Dish '{}' is assigned twice to station '{}'",
                        dish_name, setup.name
                    ));
                }
            }
            if !manager.add_station(station) {
                return Err(format!("Station '{}' is defined more than once", setup.name));
            }
        }

        for entry in &self.reserve {
            if !manager.deposit_to_reserve(entry.clone()) {
                return Err(format!(
                    "Reserve entry '{}' has zero quantity",
                    entry.name
                ));
            }
        }

        for dish_name in &self.orders {
            let dish = catalog
                .get(dish_name)
                .ok_or_else(|| format!("Order references unknown dish '{}'", dish_name))?;
            manager.enqueue(Arc::clone(dish));
        }

        Ok(manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dish::{CuisineType, RecipeRequirement};

    fn steak() -> Dish {
        Dish::new(
            "Steak",
            vec![RecipeRequirement::new("Beef", 2)],
            25,
            32.50,
            CuisineType::American,
        )
    }

    #[test]
    fn test_build_assembles_manager() {
        let config = KitchenConfig::new()
            .with_dish(steak())
            .with_station(
                StationSetup::new("Grill")
                    .with_stock(StockEntry::new("Beef", 4))
                    .with_recipe("Steak"),
            )
            .with_reserve(StockEntry::new("Beef", 10))
            .with_order("Steak");

        let manager = config.build().expect("config should build");
        assert_eq!(manager.station_count(), 1);
        assert_eq!(manager.reserve().quantity("Beef"), 10);
        assert_eq!(manager.peek_queue(), vec!["Steak".to_string()]);
        assert!(manager.find_station("Grill").is_some());
    }

    #[test]
    fn test_build_rejects_unknown_recipe_reference() {
        let config =
            KitchenConfig::new().with_station(StationSetup::new("Grill").with_recipe("Steak"));
        let err = config.build().unwrap_err();
        assert!(err.contains("unknown dish 'Steak'"));
    }

    #[test]
    fn test_build_rejects_duplicate_station() {
        let config = KitchenConfig::new()
            .with_station(StationSetup::new("Grill"))
            .with_station(StationSetup::new("Grill"));
        let err = config.build().unwrap_err();
        assert!(err.contains("more than once"));
    }

    #[test]
    fn test_build_rejects_unknown_order() {
        let config = KitchenConfig::new().with_order("Steak");
        assert!(config.build().is_err());
    }

    #[test]
    fn test_build_rejects_zero_quantity_reserve_entry() {
        let config = KitchenConfig::new().with_reserve(StockEntry::new("Beef", 0));
        assert!(config.build().is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = KitchenConfig::new()
            .with_dish(steak())
            .with_station(
                StationSetup::new("Grill")
                    .with_stock(StockEntry::new("Beef", 1))
                    .with_recipe("Steak"),
            )
            .with_order("Steak");
        let json = serde_json::to_string(&config).expect("serialize");
        let parsed: KitchenConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.dishes.len(), 1);
        assert_eq!(parsed.stations[0].recipes, vec!["Steak".to_string()]);
        assert_eq!(parsed.orders, vec!["Steak".to_string()]);
    }
}
