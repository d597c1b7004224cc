//! Engine constants.
//!
//! Fixed reference values shared by the calculators, the quick-mode
//! normalizer and the preset tables. Tunables that a deployment may want to
//! override (β, τ, pricing) have runtime counterparts in [`crate::settings`].

use crate::inputs::TierKey;

/// Default network-effect scaling factor β
pub const DEFAULT_NETWORK_BETA: f64 = 0.025;

/// Default maturity constant τ (facilities) for the realization curve
pub const DEFAULT_NETWORK_TAU: f64 = 50.0;

/// Facility count of the reference network used for `baseline_connections`
pub const BASELINE_NETWORK_FACILITIES: u32 = 10;

/// Pairwise connections in the reference network: 10·9/2
pub const BASELINE_CONNECTIONS: f64 = 45.0;

/// Upper edge of the short detention claim bucket (15-30 minutes over), in hours
pub const SHORT_CLAIM_WINDOW_HOURS: f64 = 0.5;

/// Months per year, for payback conversion
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Share of a year represented by a 90-day decision delay
pub const QUARTER_YEAR_SHARE: f64 = 0.25;

/// Projection horizon for multi-year value, in years
pub const PROJECTION_YEARS: u32 = 5;

/// Default operating days per year for quick mode
pub const DEFAULT_OPERATING_DAYS: f64 = 360.0;

/// Canonical share of facilities in each size tier.
///
/// Used when quick mode spreads an aggregate facility count over tiers.
/// Shares sum to 1.
pub const CANONICAL_TIER_MIX: [(TierKey, f64); 4] = [
    (TierKey::Xl, 0.10),
    (TierKey::L, 0.20),
    (TierKey::M, 0.40),
    (TierKey::S, 0.30),
];

/// Shipments/day of a tier relative to the network average.
///
/// Weighted by [`CANONICAL_TIER_MIX`] these average to exactly 1.0, so a
/// quick-mode network keeps its aggregate truck volume after distribution.
pub const TIER_VOLUME_SCALE: [(TierKey, f64); 4] = [
    (TierKey::Xl, 2.0),
    (TierKey::L, 1.4),
    (TierKey::M, 0.85),
    (TierKey::S, 0.6),
];

/// Look up a tier's entry in one of the per-tier constant tables.
pub fn tier_value(table: &[(TierKey, f64); 4], tier: TierKey) -> f64 {
    table
        .iter()
        .find(|(key, _)| *key == tier)
        .map(|(_, value)| *value)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_mix_sums_to_one() {
        let total: f64 = CANONICAL_TIER_MIX.iter().map(|(_, share)| share).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_volume_scale_preserves_average() {
        let weighted: f64 = TierKey::ALL
            .iter()
            .map(|t| tier_value(&CANONICAL_TIER_MIX, *t) * tier_value(&TIER_VOLUME_SCALE, *t))
            .sum();
        assert!((weighted - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_baseline_connections() {
        let n = BASELINE_NETWORK_FACILITIES as f64;
        assert_eq!(n * (n - 1.0) / 2.0, BASELINE_CONNECTIONS);
    }
}
