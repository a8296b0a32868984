pub mod fulfillment;

use crate::core::dish::Dish;
use crate::core::inventory::{Inventory, StockEntry};
use crate::core::station::KitchenStation;
use self::fulfillment::OrderTicket;
use log::debug;
use std::collections::VecDeque;
use std::sync::Arc;
use uuid::Uuid;

/// Owns the ordered station collection, the FIFO order queue, and the
/// shared backup ingredient reserve
///
/// Stations are scanned in caller-controlled order: insertion order, with
/// an explicit move-to-front operation. Station names are unique within a
/// manager, so name-based lookup always resolves to one station.
#[derive(Debug)]
pub struct StationManager {
    stations: Vec<KitchenStation>,
    order_queue: VecDeque<OrderTicket>,
    backup_reserve: Inventory,
}

impl StationManager {
    /// Create an empty station manager
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
            order_queue: VecDeque::new(),
            backup_reserve: Inventory::new(),
        }
    }

    fn station_index(&self, station_name: &str) -> Option<usize> {
        self.stations
            .iter()
            .position(|station| station.name() == station_name)
    }

    /// Append a station to the scan order
    ///
    /// Rejected when a station with the same name is already registered,
    /// since a duplicate would be unreachable by name-based lookup.
    pub fn add_station(&mut self, station: KitchenStation) -> bool {
        if self.station_index(station.name()).is_some() {
            return false;
        }
        self.stations.push(station);
        true
    }

    /// Remove a station by name, dropping its recipes and stock
    pub fn remove_station(&mut self, station_name: &str) -> bool {
        match self.station_index(station_name) {
            Some(index) => {
                self.stations.remove(index);
                true
            }
            None => false,
        }
    }

    /// Find a station by name
    pub fn find_station(&self, station_name: &str) -> Option<&KitchenStation> {
        self.stations
            .iter()
            .find(|station| station.name() == station_name)
    }

    /// Relocate a station to the front of the scan order
    ///
    /// The relative order of all other stations is preserved. Succeeds
    /// without change when the station is already at the front.
    pub fn move_to_front(&mut self, station_name: &str) -> bool {
        let index = match self.station_index(station_name) {
            Some(index) => index,
            None => return false,
        };
        if index == 0 {
            return true;
        }
        let station = self.stations.remove(index);
        self.stations.insert(0, station);
        true
    }

    /// Merge the second station into the first and remove the second
    ///
    /// Stock entries accumulate by name; dishes already registered at the
    /// first station are skipped. Fails when either station is missing or
    /// both names refer to the same station.
    pub fn merge_stations(&mut self, station_name1: &str, station_name2: &str) -> bool {
        if station_name1 == station_name2 {
            return false;
        }
        let first = match self.station_index(station_name1) {
            Some(index) => index,
            None => return false,
        };
        let second = match self.station_index(station_name2) {
            Some(index) => index,
            None => return false,
        };

        let absorbed = self.stations.remove(second);
        let target = if second < first { first - 1 } else { first };
        for dish in absorbed.recipes() {
            self.stations[target].register_recipe(dish);
        }
        for entry in absorbed.stock().entries() {
            self.stations[target].replenish_stock(entry);
        }
        debug!(
            "merged station '{}' into '{}'",
            station_name2, station_name1
        );
        true
    }

    /// Number of registered stations
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Station names in scan order
    pub fn station_names(&self) -> Vec<String> {
        self.stations
            .iter()
            .map(|station| station.name().to_string())
            .collect()
    }

    /// Register a dish at a named station
    pub fn register_recipe_at(&mut self, station_name: &str, dish: Arc<Dish>) -> bool {
        match self.station_index(station_name) {
            Some(index) => self.stations[index].register_recipe(dish),
            None => false,
        }
    }

    /// Deliver an ingredient to a named station's stock
    pub fn replenish_at(&mut self, station_name: &str, entry: StockEntry) -> bool {
        match self.station_index(station_name) {
            Some(index) => {
                self.stations[index].replenish_stock(entry);
                true
            }
            None => false,
        }
    }

    /// Check whether any station, scanned in manager order, could prepare
    /// the dish right now
    pub fn can_any_station_fulfill(&self, dish_name: &str) -> bool {
        self.stations
            .iter()
            .any(|station| station.can_fulfill(dish_name))
    }

    /// Prepare a dish at a named station if its stock allows it
    pub fn prepare_at(&mut self, station_name: &str, dish_name: &str) -> bool {
        let index = match self.station_index(station_name) {
            Some(index) => index,
            None => return false,
        };
        if !self.stations[index].can_fulfill(dish_name) {
            return false;
        }
        self.stations[index].prepare(dish_name)
    }

    /// Merge an ingredient into the backup reserve
    ///
    /// An entry with quantity zero carries no information and is rejected.
    pub fn deposit_to_reserve(&mut self, entry: StockEntry) -> bool {
        if entry.quantity == 0 {
            return false;
        }
        self.backup_reserve.deposit(entry);
        true
    }

    /// Merge a batch of ingredients into the backup reserve
    ///
    /// An empty batch is rejected; entries merge one by one under the same
    /// rules as a single deposit.
    pub fn deposit_all_to_reserve(&mut self, entries: Vec<StockEntry>) -> bool {
        if entries.is_empty() {
            return false;
        }
        for entry in entries {
            self.backup_reserve.deposit(entry);
        }
        true
    }

    /// Move an exact amount of one ingredient from the reserve to a
    /// named station's stock
    ///
    /// All or nothing per call: fails without any transfer when the
    /// station is unknown, the ingredient is absent from the reserve, or
    /// the reserve holds less than the requested amount. A reserve entry
    /// depleted to exactly zero is removed.
    pub fn transfer_from_reserve(
        &mut self,
        station_name: &str,
        ingredient_name: &str,
        amount: u32,
    ) -> bool {
        let index = match self.station_index(station_name) {
            Some(index) => index,
            None => return false,
        };
        if !self.backup_reserve.contains(ingredient_name) {
            return false;
        }
        if !self.backup_reserve.withdraw(ingredient_name, amount) {
            debug!(
                "reserve holds too little '{}' to transfer {} to '{}'",
                ingredient_name, amount, station_name
            );
            return false;
        }
        self.stations[index].replenish_stock(StockEntry::new(ingredient_name, amount));
        debug!(
            "transferred {} x '{}' from reserve to '{}'",
            amount, ingredient_name, station_name
        );
        true
    }

    /// Get the backup reserve holdings
    pub fn reserve(&self) -> &Inventory {
        &self.backup_reserve
    }

    /// Empty the backup reserve
    pub fn clear_reserve(&mut self) {
        self.backup_reserve.clear();
    }

    /// Append a dish order to the back of the queue, returning its
    /// generated order id
    pub fn enqueue(&mut self, dish: Arc<Dish>) -> Uuid {
        let ticket = OrderTicket::new(dish);
        let order_id = ticket.order_id;
        self.order_queue.push_back(ticket);
        order_id
    }

    /// Number of orders waiting in the queue
    pub fn queue_len(&self) -> usize {
        self.order_queue.len()
    }

    /// Dish names currently queued, front to back
    pub fn peek_queue(&self) -> Vec<String> {
        self.order_queue
            .iter()
            .map(|ticket| ticket.dish.name().to_string())
            .collect()
    }

    /// Drop every queued order
    pub fn clear_queue(&mut self) {
        self.order_queue.clear();
    }
}

impl Default for StationManager {
    fn default() -> Self {
        Self::new()
    }
}
