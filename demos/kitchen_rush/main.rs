use brigade::{Dish, FulfillmentReport, KitchenConfig, StationManager, StockEntry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

const KITCHEN_DEFINITION: &str = include_str!("kitchen.json");

/// Number of extra walk-in orders generated on top of the configured ones
const WALK_IN_ORDERS: usize = 8;

fn main() -> Result<(), String> {
    env_logger::init();

    println!("=== Kitchen Rush ===");

    let config: KitchenConfig = serde_json::from_str(KITCHEN_DEFINITION)
        .map_err(|e| format!("Invalid kitchen definition: {}", e))?;
    let mut manager = config.build()?;

    println!(
        "Loaded {} stations ({}), {} dishes on the menu",
        manager.station_count(),
        manager.station_names().join(", "),
        config.dishes.len()
    );

    // A reproducible stream of walk-in orders on top of the configured ones
    let mut rng = StdRng::seed_from_u64(42);
    let menu: Vec<Arc<Dish>> = config
        .dishes
        .iter()
        .map(|dish| Arc::new(dish.clone()))
        .collect();
    for _ in 0..WALK_IN_ORDERS {
        let pick = rng.gen_range(0..menu.len());
        manager.enqueue(Arc::clone(&menu[pick]));
    }

    println!("\nOrder queue ({} tickets):", manager.queue_len());
    for name in manager.peek_queue() {
        println!("  {}", name);
    }

    println!("\n--- First pass ---");
    let report = manager.process_all_dishes();
    print_report(&report);

    if manager.queue_len() > 0 {
        // Restock the reserve and give the leftovers another pass
        println!("\nRestocking reserve for the deferred orders...");
        manager.deposit_all_to_reserve(vec![
            StockEntry::new("Beef", 10),
            StockEntry::new("Potato", 10),
            StockEntry::new("Butter", 5),
            StockEntry::new("Onion", 10),
            StockEntry::new("Broth", 10),
            StockEntry::new("Pasta", 5),
            StockEntry::new("Egg", 10),
            StockEntry::new("Pancetta", 5),
            StockEntry::new("Rice", 10),
            StockEntry::new("Scallion", 5),
        ]);

        println!("\n--- Second pass ---");
        let report = manager.process_all_dishes();
        print_report(&report);
    }

    print_kitchen_state(&manager);
    Ok(())
}

fn print_report(report: &FulfillmentReport) {
    for outcome in &report.outcomes {
        match &outcome.prepared_at {
            Some(station) => {
                println!("  [{}] {} -> prepared at {}", outcome.order_id, outcome.dish_name, station)
            }
            None => println!("  [{}] {} -> deferred", outcome.order_id, outcome.dish_name),
        }
        for attempt in &outcome.attempts {
            println!("      {}: {}", attempt.station, attempt.outcome);
        }
    }
    println!(
        "  {} prepared, {} deferred",
        report.prepared_count, report.deferred_count
    );
}

fn print_kitchen_state(manager: &StationManager) {
    println!("\n=== Closing state ===");
    for name in manager.station_names() {
        if let Some(station) = manager.find_station(&name) {
            println!("{}:", name);
            for entry in station.stock().entries() {
                println!("  {} x {}", entry.quantity, entry.name);
            }
        }
    }
    println!("Reserve:");
    for entry in manager.reserve().entries() {
        println!("  {} x {}", entry.quantity, entry.name);
    }
    if manager.queue_len() > 0 {
        println!("Still queued: {}", manager.peek_queue().join(", "));
    } else {
        println!("Order queue is empty");
    }
}
