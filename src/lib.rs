pub mod core;

// Re-export commonly used types
pub use crate::core::config::{KitchenConfig, StationSetup};
pub use crate::core::dish::{CuisineType, Dish, RecipeRequirement};
pub use crate::core::inventory::{Inventory, StockEntry};
pub use crate::core::manager::fulfillment::{
    AttemptRecord, FulfillmentReport, OrderOutcome, OrderTicket, StationAttempt,
};
pub use crate::core::manager::StationManager;
pub use crate::core::station::KitchenStation;
