use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named quantity of one ingredient held in an inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub name: String,
    pub quantity: u32,
}

impl StockEntry {
    /// Create a new stock entry
    pub fn new(name: &str, quantity: u32) -> Self {
        Self {
            name: name.to_string(),
            quantity,
        }
    }
}

/// Name-keyed ingredient holdings, used for station stock and the backup reserve
///
/// An ingredient that is not present is held at quantity zero; an entry is
/// removed the moment a withdrawal brings its quantity to exactly zero, so
/// listings never contain zero-quantity entries.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: BTreeMap<String, u32>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Check whether the inventory holds no ingredients
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct ingredients held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Quantity on hand for an ingredient, zero if absent
    pub fn quantity(&self, name: &str) -> u32 {
        self.entries.get(name).copied().unwrap_or(0)
    }

    /// Check whether an ingredient is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Merge a quantity into the holdings for an ingredient
    ///
    /// A zero amount is ignored so that no zero-quantity entry is ever
    /// created.
    pub fn deposit_amount(&mut self, name: &str, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.entries.entry(name.to_string()).or_insert(0) += amount;
    }

    /// Merge a stock entry into the holdings by name
    pub fn deposit(&mut self, entry: StockEntry) {
        self.deposit_amount(&entry.name, entry.quantity);
    }

    /// Remove an exact amount of an ingredient, all or nothing
    ///
    /// Fails without any change when the ingredient is absent or held in a
    /// smaller quantity than requested. When the withdrawal empties the
    /// entry it is removed entirely.
    pub fn withdraw(&mut self, name: &str, amount: u32) -> bool {
        let current = match self.entries.get(name) {
            Some(quantity) => *quantity,
            None => return false,
        };
        if current < amount {
            return false;
        }
        if current == amount {
            self.entries.remove(name);
        } else {
            self.entries.insert(name.to_string(), current - amount);
        }
        true
    }

    /// Snapshot of all entries in ingredient-name order
    pub fn entries(&self) -> Vec<StockEntry> {
        self.entries
            .iter()
            .map(|(name, quantity)| StockEntry::new(name, *quantity))
            .collect()
    }

    /// Remove every ingredient
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_merges_by_name() {
        let mut inventory = Inventory::new();
        inventory.deposit(StockEntry::new("Salt", 3));
        inventory.deposit(StockEntry::new("Salt", 2));
        assert_eq!(inventory.quantity("Salt"), 5);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_zero_deposit_creates_no_entry() {
        let mut inventory = Inventory::new();
        inventory.deposit(StockEntry::new("Salt", 0));
        assert!(!inventory.contains("Salt"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_withdraw_partial_leaves_remainder() {
        let mut inventory = Inventory::new();
        inventory.deposit(StockEntry::new("Beef", 5));
        assert!(inventory.withdraw("Beef", 2));
        assert_eq!(inventory.quantity("Beef"), 3);
    }

    #[test]
    fn test_withdraw_exact_removes_entry() {
        let mut inventory = Inventory::new();
        inventory.deposit(StockEntry::new("Beef", 5));
        assert!(inventory.withdraw("Beef", 5));
        assert!(!inventory.contains("Beef"));
        assert_eq!(inventory.quantity("Beef"), 0);
    }

    #[test]
    fn test_withdraw_insufficient_fails_without_change() {
        let mut inventory = Inventory::new();
        inventory.deposit(StockEntry::new("Beef", 2));
        assert!(!inventory.withdraw("Beef", 3));
        assert_eq!(inventory.quantity("Beef"), 2);
    }

    #[test]
    fn test_withdraw_absent_fails() {
        let mut inventory = Inventory::new();
        assert!(!inventory.withdraw("Beef", 1));
    }

    #[test]
    fn test_entries_sorted_by_name() {
        let mut inventory = Inventory::new();
        inventory.deposit(StockEntry::new("Salt", 1));
        inventory.deposit(StockEntry::new("Beef", 2));
        let names: Vec<String> = inventory.entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Beef".to_string(), "Salt".to_string()]);
    }
}
