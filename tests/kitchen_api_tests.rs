use brigade::{
    CuisineType, Dish, KitchenConfig, KitchenStation, RecipeRequirement, StationAttempt,
    StationManager, StationSetup, StockEntry,
};
use std::sync::Arc;

fn catalog() -> Vec<Dish> {
    vec![
        Dish::new(
            "Steak",
            vec![
                RecipeRequirement::new("Beef", 2),
                RecipeRequirement::new("Butter", 1),
            ],
            25,
            32.50,
            CuisineType::American,
        ),
        Dish::new(
            "Onion Soup",
            vec![
                RecipeRequirement::new("Onion", 3),
                RecipeRequirement::new("Broth", 2),
            ],
            20,
            11.00,
            CuisineType::French,
        ),
        Dish::new(
            "Pasta",
            vec![
                RecipeRequirement::new("Flour", 2),
                RecipeRequirement::new("Egg", 1),
            ],
            15,
            14.00,
            CuisineType::Italian,
        ),
    ]
}

fn rush_config() -> KitchenConfig {
    let mut config = KitchenConfig::new()
        .with_station(
            StationSetup::new("Grill")
                .with_stock(StockEntry::new("Beef", 2))
                .with_stock(StockEntry::new("Butter", 1))
                .with_recipe("Steak"),
        )
        .with_station(
            StationSetup::new("Stove")
                .with_stock(StockEntry::new("Onion", 1))
                .with_stock(StockEntry::new("Broth", 2))
                .with_recipe("Onion Soup"),
        )
        .with_reserve(StockEntry::new("Onion", 2))
        .with_order("Steak")
        .with_order("Onion Soup")
        .with_order("Pasta");
    for dish in catalog() {
        config = config.with_dish(dish);
    }
    config
}

#[test]
fn full_pass_prepares_restocks_and_defers() {
    let mut manager = rush_config().build().expect("config should build");

    let report = manager.process_all_dishes();

    // Steak came straight from Grill stock, Onion Soup needed the reserve,
    // Pasta is registered nowhere and stays queued.
    assert_eq!(report.prepared_count, 2);
    assert_eq!(report.deferred_count, 1);
    assert_eq!(manager.peek_queue(), vec!["Pasta".to_string()]);

    assert_eq!(report.outcomes[0].prepared_at.as_deref(), Some("Grill"));
    assert_eq!(report.outcomes[1].prepared_at.as_deref(), Some("Stove"));
    assert_eq!(
        report.outcomes[1].attempts[1].outcome,
        StationAttempt::PreparedAfterReplenish
    );

    // Grill consumed its whole stock, the soup drained both stations'
    // onions and the reserve down to nothing
    let grill = manager.find_station("Grill").expect("present");
    assert!(grill.stock().is_empty());
    assert!(manager.reserve().is_empty());
}

#[test]
fn deferred_order_completes_once_a_station_learns_the_recipe() {
    let mut manager = rush_config().build().expect("config should build");
    manager.process_all_dishes();
    assert_eq!(manager.peek_queue(), vec!["Pasta".to_string()]);

    // Teach Stove the pasta recipe and stock it up
    let pasta = Arc::new(catalog().into_iter().nth(2).expect("pasta in catalog"));
    assert!(manager.register_recipe_at("Stove", pasta));
    assert!(manager.replenish_at("Stove", StockEntry::new("Flour", 2)));
    assert!(manager.replenish_at("Stove", StockEntry::new("Egg", 1)));

    let report = manager.process_all_dishes();
    assert_eq!(report.prepared_count, 1);
    assert_eq!(manager.queue_len(), 0);
}

#[test]
fn station_reshuffle_changes_which_station_serves_first() {
    let mut manager = StationManager::new();
    let soup = Arc::new(Dish::new(
        "Soup",
        vec![RecipeRequirement::new("Broth", 1)],
        10,
        8.0,
        CuisineType::Other,
    ));

    let mut first = KitchenStation::new("Prep");
    first.register_recipe(Arc::clone(&soup));
    first.replenish_stock(StockEntry::new("Broth", 5));
    let mut second = KitchenStation::new("Stove");
    second.register_recipe(Arc::clone(&soup));
    second.replenish_stock(StockEntry::new("Broth", 5));
    manager.add_station(first);
    manager.add_station(second);

    manager.enqueue(Arc::clone(&soup));
    let report = manager.process_all_dishes();
    assert_eq!(report.outcomes[0].prepared_at.as_deref(), Some("Prep"));

    assert!(manager.move_to_front("Stove"));
    manager.enqueue(soup);
    let report = manager.process_all_dishes();
    assert_eq!(report.outcomes[0].prepared_at.as_deref(), Some("Stove"));
}

#[test]
fn kitchen_definition_loads_from_json() {
    let raw = r#"{
        "dishes": [
            {
                "name": "Steak",
                "ingredients": [{"name": "Beef", "required_quantity": 2}],
                "prep_time_minutes": 25,
                "price": 32.5,
                "cuisine_type": "American"
            }
        ],
        "stations": [
            {
                "name": "Grill",
                "stock": [{"name": "Beef", "quantity": 1}],
                "recipes": ["Steak"]
            }
        ],
        "reserve": [{"name": "Beef", "quantity": 5}],
        "orders": ["Steak"]
    }"#;

    let config: KitchenConfig = serde_json::from_str(raw).expect("valid kitchen json");
    let mut manager = config.build().expect("config should build");

    let report = manager.process_all_dishes();
    assert_eq!(report.prepared_count, 1);
    assert_eq!(manager.reserve().quantity("Beef"), 4);
    assert_eq!(manager.queue_len(), 0);
}
