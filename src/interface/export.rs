use serde_json::json;

use crate::calculator::{format_carbon, format_distance};
use crate::error::{EcoError, Result};
use crate::models::{CalculationResult, FoodItem, Meal};

/// Separator for list fields (tags, ingredients) in CSV cells.
const LIST_SEPARATOR: &str = "; ";

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| EcoError::InvalidInput(format!("CSV buffer: {}", e)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write reference foods as CSV.
pub fn foods_to_csv(foods: &[&FoodItem]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["name", "carbon_per_unit", "category"])?;
    for food in foods {
        wtr.write_record([
            food.name.to_string(),
            food.carbon_per_unit.to_string(),
            food.category.to_string(),
        ])?;
    }
    wtr.flush()?;
    finish(wtr)
}

/// Write meals as CSV, badge included.
pub fn meals_to_csv(meals: &[&Meal]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "id",
        "name",
        "description",
        "carbon_footprint",
        "badge",
        "calories",
        "health_score",
        "tags",
        "ingredients",
    ])?;
    for meal in meals {
        wtr.write_record([
            meal.id.to_string(),
            meal.name.to_string(),
            meal.description.to_string(),
            meal.carbon_footprint.to_string(),
            meal.badge()?.label().to_string(),
            meal.calories.to_string(),
            meal.health_score.to_string(),
            meal.tags.join(LIST_SEPARATOR),
            meal.ingredients.join(LIST_SEPARATOR),
        ])?;
    }
    wtr.flush()?;
    finish(wtr)
}

/// Write a calculation result as a single CSV row.
pub fn calculation_to_csv(result: &CalculationResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "food",
        "quantity_kg",
        "total_carbon_kg",
        "impact",
        "driving_equivalent_km",
    ])?;
    wtr.write_record([
        result.food_name.clone(),
        result.quantity.to_string(),
        format_carbon(result.total_carbon),
        result.impact().label().to_string(),
        format_distance(result.driving_equivalent_km()),
    ])?;
    wtr.flush()?;
    finish(wtr)
}

pub fn foods_to_json(foods: &[&FoodItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(foods)?)
}

/// Meals as JSON, each with its badge label attached.
pub fn meals_to_json(meals: &[&Meal]) -> Result<String> {
    let mut values = Vec::with_capacity(meals.len());
    for meal in meals {
        let mut value = serde_json::to_value(meal)?;
        value["badge"] = json!(meal.badge()?);
        value["badgeLabel"] = json!(meal.badge()?.label());
        values.push(value);
    }
    Ok(serde_json::to_string_pretty(&values)?)
}

/// Calculation result as JSON with the derived display values.
///
/// `totalCarbon` and `drivingEquivalentKm` are unrounded; the `display`
/// object holds the formatted strings.
pub fn calculation_to_json(result: &CalculationResult) -> Result<String> {
    let impact = result.impact();
    let value = json!({
        "food": result.food_name,
        "quantity": result.quantity,
        "totalCarbon": result.total_carbon,
        "impact": impact,
        "impactLabel": impact.label(),
        "trend": impact.trend(),
        "drivingEquivalentKm": result.driving_equivalent_km(),
        "display": {
            "totalCarbon": format_carbon(result.total_carbon),
            "drivingEquivalentKm": format_distance(result.driving_equivalent_km()),
        },
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;
    use crate::catalog;

    #[test]
    fn test_foods_to_csv() {
        let foods: Vec<&FoodItem> = catalog::foods_in_category("Seafood");
        let csv = foods_to_csv(&foods).unwrap();
        assert_eq!(
            csv,
            "name,carbon_per_unit,category\nFish (farmed),5.1,Seafood\n"
        );
    }

    #[test]
    fn test_meals_to_csv_joins_lists() {
        let meals = vec![catalog::find_meal(5).unwrap()];
        let csv = meals_to_csv(&meals).unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("id,name,description"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("5,Black Bean Tacos,"));
        assert!(row.contains(",1.1,Low,380,8,"));
        assert!(row.contains("Vegetarian; Mexican; High Fiber"));
    }

    #[test]
    fn test_calculation_to_csv() {
        let result = calculate("Beef", 2.0).unwrap();
        let csv = calculation_to_csv(&result).unwrap();
        assert!(csv.ends_with("Beef,2,54.00,High Impact,248.4\n"));
    }

    #[test]
    fn test_calculation_to_json() {
        let result = calculate("Potatoes", 1.0).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&calculation_to_json(&result).unwrap()).unwrap();
        assert_eq!(value["food"], "Potatoes");
        assert_eq!(value["totalCarbon"], 0.3);
        assert_eq!(value["impact"], "low");
        assert_eq!(value["trend"], "improving");
        assert_eq!(value["display"]["totalCarbon"], "0.30");
    }

    #[test]
    fn test_meals_to_json_has_badges() {
        let meals: Vec<&Meal> = catalog::list_meals().iter().collect();
        let value: serde_json::Value =
            serde_json::from_str(&meals_to_json(&meals).unwrap()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 6);
        assert_eq!(array[0]["badge"], "ultraLow");
        assert_eq!(array[0]["badgeLabel"], "Ultra Low");
        assert_eq!(array[0]["healthScore"], 9);
        assert_eq!(array[2]["tags"][0], "Vegetarian");
    }

    #[test]
    fn test_foods_to_json() {
        let foods = vec![catalog::lookup("Milk").unwrap()];
        let value: serde_json::Value =
            serde_json::from_str(&foods_to_json(&foods).unwrap()).unwrap();
        assert_eq!(value[0]["carbonPerUnit"], 1.9);
    }
}
