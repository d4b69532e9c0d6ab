pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;

pub use calculator::{calculate, classify_carbon_badge, classify_impact, CarbonBadge, ImpactTier};
pub use catalog::{list_meals, lookup};
pub use error::{EcoError, Result};
pub use models::{CalculationResult, FoodItem, Meal};
