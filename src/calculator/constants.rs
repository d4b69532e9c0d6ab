// ─────────────────────────────────────────────────────────────────────────────
// Impact tiers (calculator results, kg CO2e)
// ─────────────────────────────────────────────────────────────────────────────

/// Totals strictly below this are Low impact.
pub const IMPACT_LOW_MAX: f64 = 2.0;

/// Totals strictly below this (and at least IMPACT_LOW_MAX) are Medium impact.
pub const IMPACT_MEDIUM_MAX: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Carbon badges (meal catalog, kg CO2e per serving)
// ─────────────────────────────────────────────────────────────────────────────

/// Footprints strictly below this earn the Ultra Low badge.
pub const BADGE_ULTRA_LOW_MAX: f64 = 1.0;

/// Footprints strictly below this (and at least BADGE_ULTRA_LOW_MAX) earn Low.
pub const BADGE_LOW_MAX: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Kilometres driven in an average car per kg CO2e.
pub const DRIVING_KM_PER_KG_CO2: f64 = 4.6;

/// Decimal places for carbon totals.
pub const CARBON_DISPLAY_DECIMALS: usize = 2;

/// Decimal places for the driving distance.
pub const DISTANCE_DISPLAY_DECIMALS: usize = 1;

/// Default quantity (kg) offered by the interactive calculator.
pub const DEFAULT_QUANTITY: &str = "1";

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Format a carbon total for display, e.g. "54.00".
pub fn format_carbon(total_carbon: f64) -> String {
    format!("{:.*}", CARBON_DISPLAY_DECIMALS, total_carbon)
}

/// Format a driving distance for display, e.g. "248.4".
pub fn format_distance(km: f64) -> String {
    format!("{:.*}", DISTANCE_DISPLAY_DECIMALS, km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_carbon_two_decimals() {
        assert_eq!(format_carbon(54.0), "54.00");
        assert_eq!(format_carbon(0.3), "0.30");
        assert_eq!(format_carbon(1.2345), "1.23");
    }

    #[test]
    fn test_format_distance_one_decimal() {
        assert_eq!(format_distance(54.0 * DRIVING_KM_PER_KG_CO2), "248.4");
        assert_eq!(format_distance(1.38), "1.4");
    }
}
