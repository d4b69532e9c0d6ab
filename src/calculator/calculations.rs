use crate::calculator::constants::DRIVING_KM_PER_KG_CO2;
use crate::catalog;
use crate::error::{EcoError, Result};
use crate::models::CalculationResult;

/// Parse a user-supplied quantity string (kg).
///
/// Only checks that the text is a number; range checks happen in `calculate`.
pub fn parse_quantity(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| EcoError::InvalidQuantity(format!("'{}' is not a number", trimmed)))
}

/// Calculate the carbon footprint of `quantity` kg of a reference food.
///
/// Formula: carbon_per_unit * quantity, unrounded.
pub fn calculate(food_name: &str, quantity: f64) -> Result<CalculationResult> {
    let food = catalog::lookup(food_name)
        .ok_or_else(|| EcoError::FoodNotFound(food_name.to_string()))?;

    if !quantity.is_finite() || quantity <= 0.0 {
        log::warn!("rejecting quantity {} for {}", quantity, food.name);
        return Err(EcoError::InvalidQuantity(quantity.to_string()));
    }

    let total_carbon = food.carbon_per_unit * quantity;
    if !total_carbon.is_finite() || !driving_equivalent_km(total_carbon).is_finite() {
        log::warn!("{} kg of {} overflows the carbon total", quantity, food.name);
        return Err(EcoError::InvalidQuantity(format!(
            "{} (total overflows)",
            quantity
        )));
    }

    log::debug!(
        "{} kg of {} at {} kg CO2e/kg = {} kg CO2e",
        quantity,
        food.name,
        food.carbon_per_unit,
        total_carbon
    );

    Ok(CalculationResult::new(
        food.name.to_string(),
        quantity,
        total_carbon,
    ))
}

/// Illustrative distance (km) driven in a car for the same emissions.
pub fn driving_equivalent_km(total_carbon: f64) -> f64 {
    total_carbon * DRIVING_KM_PER_KG_CO2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2").unwrap(), 2.0);
        assert_eq!(parse_quantity(" 0.5 ").unwrap(), 0.5);
        // Range is not checked here
        assert_eq!(parse_quantity("-1").unwrap(), -1.0);
    }

    #[test]
    fn test_parse_quantity_non_numeric() {
        assert!(matches!(
            parse_quantity("two kilos"),
            Err(EcoError::InvalidQuantity(_))
        ));
        assert!(matches!(parse_quantity(""), Err(EcoError::InvalidQuantity(_))));
    }

    #[test]
    fn test_calculate_beef() {
        let result = calculate("Beef", 2.0).unwrap();
        assert_eq!(result.food_name, "Beef");
        assert_eq!(result.total_carbon, 54.0);
    }

    #[test]
    fn test_calculate_unknown_food() {
        let err = calculate("Unobtainium", 1.0).unwrap_err();
        assert!(matches!(err, EcoError::FoodNotFound(name) if name == "Unobtainium"));
    }

    #[test]
    fn test_calculate_unknown_food_checked_before_quantity() {
        assert!(matches!(
            calculate("Unobtainium", -1.0),
            Err(EcoError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_calculate_rejects_bad_quantity() {
        for q in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(calculate("Tofu", q), Err(EcoError::InvalidQuantity(_))),
                "quantity {} should be rejected",
                q
            );
        }
    }

    #[test]
    fn test_calculate_rejects_overflowing_total() {
        // Finite quantity, infinite product
        assert!(matches!(
            calculate("Lamb", 1e308),
            Err(EcoError::InvalidQuantity(_))
        ));
        // Total fits, its driving distance does not
        assert!(matches!(
            calculate("Lamb", 4e306),
            Err(EcoError::InvalidQuantity(_))
        ));
        assert!(calculate("Lamb", 1e300).unwrap().total_carbon.is_finite());
    }

    #[test]
    fn test_calculate_accepts_tiny_quantity() {
        // The 0.1 kg input step is a UI affordance only
        let result = calculate("Lamb", 0.01).unwrap();
        assert!(result.total_carbon > 0.0);
    }

    #[test]
    fn test_driving_equivalent() {
        assert!((driving_equivalent_km(54.0) - 248.4).abs() < 1e-9);
        assert_eq!(driving_equivalent_km(0.0), 0.0);
    }
}
