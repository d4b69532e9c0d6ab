use dialoguer::{Input, Select};

use crate::calculator::{parse_quantity, DEFAULT_QUANTITY};
use crate::catalog;
use crate::error::{EcoError, Result};
use crate::models::FoodItem;

/// Resolve a user-typed food name against the reference table.
///
/// Exact match first, then case-insensitive. No fuzzy fallback: a typo is a
/// `FoodNotFound`, and the caller may offer `catalog::suggest_food`.
pub fn resolve_food(input: &str) -> Result<&'static FoodItem> {
    if let Some(food) = catalog::lookup(input) {
        return Ok(food);
    }

    if let Some(food) = catalog::lookup_ignore_case(input) {
        log::debug!("resolved '{}' to '{}' ignoring case", input, food.name);
        return Ok(food);
    }

    Err(EcoError::FoodNotFound(input.trim().to_string()))
}

/// Parse and range-check a quantity string.
///
/// Mirrors the gating the calculator form applies before calculating.
pub fn validate_quantity(input: &str) -> Result<f64> {
    let quantity = parse_quantity(input)?;
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(EcoError::InvalidQuantity(input.trim().to_string()));
    }
    Ok(quantity)
}

/// Prompt the user to pick a food from the reference table.
pub fn prompt_food() -> Result<&'static FoodItem> {
    let foods = catalog::foods();
    let labels: Vec<String> = foods.iter().map(|f| f.display_label()).collect();

    let selection = Select::new()
        .with_prompt("Select a food item")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(&foods[selection])
}

/// Prompt for a quantity in kg, re-asking until it is a positive number.
pub fn prompt_quantity() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Quantity (kg)")
        .default(DEFAULT_QUANTITY.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            validate_quantity(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    validate_quantity(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_food_exact_and_case_insensitive() {
        assert_eq!(resolve_food("Tofu").unwrap().name, "Tofu");
        assert_eq!(resolve_food("tofu").unwrap().name, "Tofu");
        assert_eq!(resolve_food(" BANANAS ").unwrap().name, "Bananas");
    }

    #[test]
    fn test_resolve_food_does_not_guess() {
        assert!(matches!(
            resolve_food("Tofuu"),
            Err(EcoError::FoodNotFound(name)) if name == "Tofuu"
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity("1.5").unwrap(), 1.5);
        for bad in ["0", "-1", "NaN", "inf", "abc", ""] {
            assert!(
                matches!(validate_quantity(bad), Err(EcoError::InvalidQuantity(_))),
                "'{}' should be rejected",
                bad
            );
        }
    }
}
