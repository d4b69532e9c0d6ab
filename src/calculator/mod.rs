pub mod calculations;
pub mod constants;
pub mod tiers;

pub use calculations::{calculate, driving_equivalent_km, parse_quantity};
pub use constants::*;
pub use tiers::{
    classify_carbon_badge, classify_impact, CarbonBadge, ImpactTier, ThresholdClassifier, Trend,
    CARBON_BADGE_CLASSIFIER, IMPACT_CLASSIFIER,
};
