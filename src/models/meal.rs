use serde::Serialize;

use crate::calculator::{classify_carbon_badge, CarbonBadge};
use crate::error::Result;

/// A curated meal recommendation.
///
/// `carbon_footprint` (kg CO2e per serving) is authored alongside the meal,
/// not derived from the food reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub carbon_footprint: f64,
    pub calories: u32,
    /// 0 to 10.
    pub health_score: u8,
    pub tags: &'static [&'static str],
    pub ingredients: &'static [&'static str],
}

impl Meal {
    /// Display badge for this meal's footprint.
    pub fn badge(&self) -> Result<CarbonBadge> {
        classify_carbon_badge(self.carbon_footprint)
    }

    /// Basic validation: positive footprint and calories, score within 0..=10.
    pub fn is_valid(&self) -> bool {
        self.carbon_footprint > 0.0 && self.calories > 0 && self.health_score <= 10
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        Meal {
            id: 42,
            name: "Test Bowl",
            description: "A bowl for tests",
            carbon_footprint: 1.5,
            calories: 400,
            health_score: 8,
            tags: &["Vegan", "Quick"],
            ingredients: &["Rice", "Beans"],
        }
    }

    #[test]
    fn test_badge_follows_footprint() {
        let meal = sample_meal();
        assert_eq!(meal.badge().unwrap(), CarbonBadge::Low);

        let heavy = Meal {
            carbon_footprint: 3.0,
            ..sample_meal()
        };
        assert_eq!(heavy.badge().unwrap(), CarbonBadge::Medium);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_meal().is_valid());

        let bad_score = Meal {
            health_score: 11,
            ..sample_meal()
        };
        assert!(!bad_score.is_valid());

        let zero_carbon = Meal {
            carbon_footprint: 0.0,
            ..sample_meal()
        };
        assert!(!zero_carbon.is_valid());
    }

    #[test]
    fn test_has_tag_case_insensitive() {
        let meal = sample_meal();
        assert!(meal.has_tag("vegan"));
        assert!(!meal.has_tag("Mexican"));
    }
}
