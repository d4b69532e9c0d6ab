use serde::Serialize;

use crate::calculator::constants::*;
use crate::error::{EcoError, Result};

/// Ordered threshold bands over a real number.
///
/// A value falls into the first band whose upper bound it is strictly below;
/// values at or above every bound (and NaN) fall into `ceiling`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdClassifier<T: 'static> {
    bands: &'static [(f64, T)],
    ceiling: T,
}

impl<T: Copy + 'static> ThresholdClassifier<T> {
    /// `bands` must be sorted by ascending upper bound.
    pub const fn new(bands: &'static [(f64, T)], ceiling: T) -> Self {
        Self { bands, ceiling }
    }

    pub fn classify(&self, value: f64) -> T {
        self.bands
            .iter()
            .find(|(upper, _)| value < *upper)
            .map(|(_, tier)| *tier)
            .unwrap_or(self.ceiling)
    }
}

/// Direction shown next to an impact tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Improving,
    Worsening,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Improving => "↓",
            Trend::Worsening => "↑",
        }
    }
}

/// Impact of a calculated footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImpactTier {
    Low,
    Medium,
    High,
}

impl ImpactTier {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactTier::Low => "Low Impact",
            ImpactTier::Medium => "Medium Impact",
            ImpactTier::High => "High Impact",
        }
    }

    pub fn trend(&self) -> Trend {
        match self {
            ImpactTier::Low => Trend::Improving,
            ImpactTier::Medium | ImpactTier::High => Trend::Worsening,
        }
    }
}

/// Badge shown on a meal card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CarbonBadge {
    UltraLow,
    Low,
    Medium,
}

impl CarbonBadge {
    pub fn label(&self) -> &'static str {
        match self {
            CarbonBadge::UltraLow => "Ultra Low",
            CarbonBadge::Low => "Low",
            CarbonBadge::Medium => "Medium",
        }
    }
}

static IMPACT_BANDS: [(f64, ImpactTier); 2] = [
    (IMPACT_LOW_MAX, ImpactTier::Low),
    (IMPACT_MEDIUM_MAX, ImpactTier::Medium),
];

static CARBON_BADGE_BANDS: [(f64, CarbonBadge); 2] = [
    (BADGE_ULTRA_LOW_MAX, CarbonBadge::UltraLow),
    (BADGE_LOW_MAX, CarbonBadge::Low),
];

pub static IMPACT_CLASSIFIER: ThresholdClassifier<ImpactTier> =
    ThresholdClassifier::new(&IMPACT_BANDS, ImpactTier::High);

pub static CARBON_BADGE_CLASSIFIER: ThresholdClassifier<CarbonBadge> =
    ThresholdClassifier::new(&CARBON_BADGE_BANDS, CarbonBadge::Medium);

/// Classify a calculated total (kg CO2e) into an impact tier.
///
/// Range: Low (< 2), Medium (2 to < 10), High (>= 10).
pub fn classify_impact(total_carbon: f64) -> ImpactTier {
    IMPACT_CLASSIFIER.classify(total_carbon)
}

/// Classify a meal footprint (kg CO2e) into a badge.
///
/// Range: UltraLow (< 1), Low (1 to < 2), Medium (>= 2). Negative or NaN
/// footprints are rejected.
pub fn classify_carbon_badge(footprint: f64) -> Result<CarbonBadge> {
    if footprint.is_nan() || footprint < 0.0 {
        log::warn!("rejecting carbon footprint {}", footprint);
        return Err(EcoError::InvalidFootprint(footprint));
    }
    Ok(CARBON_BADGE_CLASSIFIER.classify(footprint))
}
