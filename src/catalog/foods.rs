use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::calculator::constants::SUGGESTION_THRESHOLD;
use crate::models::FoodItem;

/// Reference emission factors (kg CO2e per kg), in display order.
pub static FOOD_TABLE: [FoodItem; 17] = [
    FoodItem::new("Beef", 27.0, "Meat"),
    FoodItem::new("Lamb", 39.2, "Meat"),
    FoodItem::new("Pork", 12.1, "Meat"),
    FoodItem::new("Chicken", 6.9, "Meat"),
    FoodItem::new("Fish (farmed)", 5.1, "Seafood"),
    FoodItem::new("Cheese", 13.5, "Dairy"),
    FoodItem::new("Milk", 1.9, "Dairy"),
    FoodItem::new("Eggs", 4.8, "Dairy"),
    FoodItem::new("Rice", 2.7, "Grains"),
    FoodItem::new("Wheat", 1.4, "Grains"),
    FoodItem::new("Potatoes", 0.3, "Vegetables"),
    FoodItem::new("Tomatoes", 1.4, "Vegetables"),
    FoodItem::new("Beans", 0.8, "Legumes"),
    FoodItem::new("Tofu", 2.0, "Legumes"),
    FoodItem::new("Nuts", 2.3, "Nuts & Seeds"),
    FoodItem::new("Apples", 0.4, "Fruits"),
    FoodItem::new("Bananas", 0.7, "Fruits"),
];

/// Exact-name index over FOOD_TABLE.
static BY_NAME: LazyLock<HashMap<&'static str, &'static FoodItem>> =
    LazyLock::new(|| FOOD_TABLE.iter().map(|f| (f.name, f)).collect());

/// Lowercase-name index over FOOD_TABLE.
static BY_KEY: LazyLock<HashMap<String, &'static FoodItem>> =
    LazyLock::new(|| FOOD_TABLE.iter().map(|f| (f.key(), f)).collect());

/// All reference foods in display order.
pub fn foods() -> &'static [FoodItem] {
    &FOOD_TABLE
}

/// Look up a food by its exact reference name.
pub fn lookup(name: &str) -> Option<&'static FoodItem> {
    BY_NAME.get(name).copied()
}

/// Look up a food by name, ignoring case and surrounding whitespace.
pub fn lookup_ignore_case(name: &str) -> Option<&'static FoodItem> {
    BY_KEY.get(&name.trim().to_lowercase()).copied()
}

/// Closest reference food to a misspelled name, if any is close enough.
pub fn suggest_food(input: &str) -> Option<&'static FoodItem> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let best = FOOD_TABLE
        .iter()
        .map(|f| (f, jaro_winkler(&f.key(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    if let Some((food, score)) = best {
        log::debug!("suggesting '{}' for '{}' (score {:.3})", food.name, input, score);
    }
    best.map(|(food, _)| food)
}

/// Distinct categories in order of first appearance.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for food in &FOOD_TABLE {
        if !seen.contains(&food.category) {
            seen.push(food.category);
        }
    }
    seen
}

/// Foods in a category (case-insensitive), in display order.
pub fn foods_in_category(category: &str) -> Vec<&'static FoodItem> {
    FOOD_TABLE
        .iter()
        .filter(|f| f.category.eq_ignore_ascii_case(category.trim()))
        .collect()
}
