use serde::Serialize;

use crate::calculator::{classify_impact, driving_equivalent_km, ImpactTier};

/// Outcome of a single footprint calculation.
///
/// Transient: each calculation produces a fresh result, results are never
/// accumulated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Reference table name of the food.
    pub food_name: String,

    /// Quantity in kg, as supplied.
    pub quantity: f64,

    /// kg CO2e, unrounded.
    pub total_carbon: f64,
}

impl CalculationResult {
    pub fn new(food_name: String, quantity: f64, total_carbon: f64) -> Self {
        Self {
            food_name,
            quantity,
            total_carbon,
        }
    }

    /// Impact tier for this result's total.
    pub fn impact(&self) -> ImpactTier {
        classify_impact(self.total_carbon)
    }

    /// Illustrative distance driven in a car for the same emissions.
    pub fn driving_equivalent_km(&self) -> f64 {
        driving_equivalent_km(self.total_carbon)
    }
}
