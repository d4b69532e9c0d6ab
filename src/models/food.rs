use serde::Serialize;

/// An entry in the food reference table.
///
/// `carbon_per_unit` is kg CO2e emitted per kg of food produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: &'static str,
    pub carbon_per_unit: f64,
    pub category: &'static str,
}

impl FoodItem {
    pub const fn new(name: &'static str, carbon_per_unit: f64, category: &'static str) -> Self {
        Self {
            name,
            carbon_per_unit,
            category,
        }
    }

    /// Label used in selection lists, e.g. "Beef (Meat)".
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }

    /// Canonical key for case-insensitive matching (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let food = FoodItem::new("Fish (farmed)", 5.1, "Seafood");
        assert_eq!(food.display_label(), "Fish (farmed) (Seafood)");
    }

    #[test]
    fn test_key_is_lowercase() {
        let food = FoodItem::new("Potatoes", 0.3, "Vegetables");
        assert_eq!(food.key(), "potatoes");
    }

    #[test]
    fn test_serializes_camel_case() {
        let food = FoodItem::new("Beef", 27.0, "Meat");
        let json = serde_json::to_value(food).unwrap();
        assert_eq!(json["name"], "Beef");
        assert_eq!(json["carbonPerUnit"], 27.0);
        assert_eq!(json["category"], "Meat");
    }
}
