//! # Input Modes and Normalization
//!
//! The calculator accepts three input shapes, modelled as [`CalculatorInput`]:
//!
//! - **Quick**: facility count, trucks/day, average dwell and a few cost rates
//! - **Detailed**: the full [`RoiInputs`]
//! - **Preset**: a named network size and scenario
//!
//! [`normalize`] converts any of them into the canonical [`RoiInputs`]. The
//! calculators never branch on mode.
//!
//! ## Quick → detailed
//!
//! 1. Spread the facility count over tiers with [`CANONICAL_TIER_MIX`]
//!    (largest-remainder rounding, so counts always sum to the total).
//! 2. Give each tier `trucks/day × tier volume scale`, corrected so the
//!    network's total daily volume equals `facility count × trucks/day`.
//! 3. Take labor staffing from the tier reference profiles and every share
//!    the quick form does not expose from the selected scenario's table.
//! 4. Overlay the quick-mode rates (dwell, cost per shipment, detention
//!    rate, margin, FTE cost).
//!
//! ## JSON Example
//!
//! ```json
//! { "mode": "quick", "facility_count": 12, "trucks_per_day": 140, "avg_dwell_minutes": 95,
//!   "annual_cost_per_fte": 64000, "cost_per_shipment": 900, "detention_cost_per_hour": 70,
//!   "margin_per_truck": 55, "scenario": "conservative" }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{tier_value, CANONICAL_TIER_MIX, TIER_VOLUME_SCALE};
use crate::errors::{RoiError, RoiResult};
use crate::inputs::{FacilityTier, RoiInputs, TierKey};
use crate::numeric::safe_div;
use crate::presets::{labor_profile, preset, scenario_assumptions, ScenarioLevel};
use crate::settings::EngineSettings;

/// Simplified quick-mode input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickInputs {
    pub facility_count: u32,
    /// Average trucks per facility per day
    pub trucks_per_day: f64,
    /// Average gate-in to gate-out dwell (minutes)
    pub avg_dwell_minutes: f64,
    /// Falls back to the settings default when omitted
    pub operating_days_per_year: Option<f64>,
    pub annual_cost_per_fte: f64,
    pub cost_per_shipment: f64,
    pub detention_cost_per_hour: f64,
    pub margin_per_truck: f64,
    /// Severity table for the shares quick mode does not expose
    pub scenario: ScenarioLevel,
}

impl QuickInputs {
    /// Reject non-finite or negative values.
    pub fn validate(&self) -> RoiResult<()> {
        let mut fields = vec![
            ("trucks_per_day", self.trucks_per_day),
            ("avg_dwell_minutes", self.avg_dwell_minutes),
            ("annual_cost_per_fte", self.annual_cost_per_fte),
            ("cost_per_shipment", self.cost_per_shipment),
            ("detention_cost_per_hour", self.detention_cost_per_hour),
            ("margin_per_truck", self.margin_per_truck),
        ];
        if let Some(days) = self.operating_days_per_year {
            fields.push(("operating_days_per_year", days));
            if days > 366.0 {
                return Err(RoiError::invalid_input(
                    "operating_days_per_year",
                    days.to_string(),
                    "Operating days cannot exceed 366",
                ));
            }
        }
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(RoiError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
            if value < 0.0 {
                return Err(RoiError::invalid_input(field, value.to_string(), "Value cannot be negative"));
            }
        }
        Ok(())
    }
}

/// Any input shape the calculator accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CalculatorInput {
    Quick(QuickInputs),
    Detailed(RoiInputs),
    Preset { network: String, scenario: String },
}

impl CalculatorInput {
    pub fn mode_name(&self) -> &'static str {
        match self {
            CalculatorInput::Quick(_) => "quick",
            CalculatorInput::Detailed(_) => "detailed",
            CalculatorInput::Preset { .. } => "preset",
        }
    }
}

/// Normalize with default engine settings.
pub fn normalize(input: &CalculatorInput) -> RoiResult<RoiInputs> {
    normalize_with(input, &EngineSettings::default())
}

/// Convert any input shape into validated detailed inputs.
///
/// Quick and preset inputs take network and commercial parameters from
/// `settings`; detailed inputs keep their own.
pub fn normalize_with(input: &CalculatorInput, settings: &EngineSettings) -> RoiResult<RoiInputs> {
    let inputs = match input {
        CalculatorInput::Quick(quick) => quick_to_detailed(quick, settings)?,
        CalculatorInput::Detailed(detailed) => detailed.clone(),
        CalculatorInput::Preset { network, scenario } => {
            let mut inputs = preset(network, scenario)?;
            settings.apply(&mut inputs);
            inputs
        }
    };
    inputs.validate()?;

    tracing::debug!(
        mode = input.mode_name(),
        facilities = inputs.total_facilities(),
        "normalized calculator input"
    );
    Ok(inputs)
}

/// Spread `total` facilities over tiers by the canonical mix.
///
/// Uses largest-remainder rounding; ties go to the larger tier. The counts
/// always sum to `total`.
pub fn distribute_facilities(total: u32) -> [(TierKey, u32); 4] {
    let mut counts = [(TierKey::Xl, 0u32), (TierKey::L, 0), (TierKey::M, 0), (TierKey::S, 0)];
    let mut remainders = [0.0f64; 4];

    for (i, (tier, share)) in CANONICAL_TIER_MIX.iter().enumerate() {
        let exact = total as f64 * share;
        counts[i] = (*tier, exact.floor() as u32);
        remainders[i] = exact - exact.floor();
    }

    let assigned: u32 = counts.iter().map(|(_, c)| c).sum();
    let mut order = [0usize, 1, 2, 3];
    order.sort_by(|a, b| remainders[*b].total_cmp(&remainders[*a]).then(a.cmp(b)));

    for i in order.into_iter().take(total.saturating_sub(assigned) as usize) {
        counts[i].1 += 1;
    }
    counts
}

/// Quick-mode conversion (without validation of the result).
pub fn quick_to_detailed(quick: &QuickInputs, settings: &EngineSettings) -> RoiResult<RoiInputs> {
    quick.validate()?;

    let assumptions = scenario_assumptions(quick.scenario);
    let operating_days = quick
        .operating_days_per_year
        .unwrap_or(settings.quick.operating_days_per_year);
    let counts = distribute_facilities(quick.facility_count);

    // Keep the network's daily volume at facility_count × trucks_per_day
    // after rounding the tier counts.
    let scaled_facilities: f64 = counts
        .iter()
        .map(|(tier, count)| *count as f64 * tier_value(&TIER_VOLUME_SCALE, *tier))
        .sum();
    let volume_correction = safe_div(quick.facility_count as f64, scaled_facilities, 1.0);

    let mut tiers = BTreeMap::new();
    let mut labor = BTreeMap::new();
    for (tier, count) in counts {
        tiers.insert(
            tier,
            FacilityTier {
                count,
                shipments_per_day: quick.trucks_per_day * tier_value(&TIER_VOLUME_SCALE, tier) * volume_correction,
                operating_days_per_year: operating_days,
                annual_cost_per_fte: quick.annual_cost_per_fte,
            },
        );
        labor.insert(tier, labor_profile(tier, &assumptions));
    }

    let mut inputs = RoiInputs {
        tiers,
        labor,
        paper: assumptions.paper,
        shipper: assumptions.shipper,
        detention: assumptions.detention,
        throughput: assumptions.throughput,
        network: settings.network,
        commercial: settings.commercial,
        enterprise_add_ons: assumptions.enterprise_add_ons,
        year_one_ramp_share: assumptions.year_one_ramp_share,
    };
    inputs.throughput.avg_gate_to_gate_minutes = quick.avg_dwell_minutes;
    inputs.throughput.margin_per_truck = quick.margin_per_truck;
    inputs.shipper.cost_per_shipment = quick.cost_per_shipment;
    inputs.detention.cost_per_detention_hour = quick.detention_cost_per_hour;

    tracing::debug!(
        facilities = quick.facility_count,
        xl = counts[0].1,
        l = counts[1].1,
        m = counts[2].1,
        s = counts[3].1,
        volume_correction,
        "distributed quick-mode facilities"
    );
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;
    use crate::inputs::LaborProfile;

    fn quick(facilities: u32) -> QuickInputs {
        QuickInputs {
            facility_count: facilities,
            trucks_per_day: 120.0,
            avg_dwell_minutes: 105.0,
            operating_days_per_year: Some(360.0),
            annual_cost_per_fte: 65000.0,
            cost_per_shipment: 850.0,
            detention_cost_per_hour: 75.0,
            margin_per_truck: 60.0,
            scenario: ScenarioLevel::Expected,
        }
    }

    #[test]
    fn test_distribution_sums_to_total() {
        for total in 0..=120 {
            let counts = distribute_facilities(total);
            let sum: u32 = counts.iter().map(|(_, c)| c).sum();
            assert_eq!(sum, total, "distribution of {} lost facilities", total);
        }
    }

    #[test]
    fn test_distribution_follows_mix() {
        let counts = distribute_facilities(20);
        assert_eq!(counts, [(TierKey::Xl, 2), (TierKey::L, 4), (TierKey::M, 8), (TierKey::S, 6)]);

        // 0.7 / 1.4 / 2.8 / 2.1 -> floors 0/1/2/2, remainders go to M then XL
        let counts = distribute_facilities(7);
        assert_eq!(counts, [(TierKey::Xl, 1), (TierKey::L, 1), (TierKey::M, 3), (TierKey::S, 2)]);
    }

    #[test]
    fn test_quick_matches_detailed_shipments() {
        for facilities in 1..=100 {
            let from_quick = normalize(&CalculatorInput::Quick(quick(facilities))).unwrap();

            let mut detailed = RoiInputs::default();
            detailed.tiers.insert(
                TierKey::M,
                FacilityTier {
                    count: facilities,
                    shipments_per_day: 120.0,
                    operating_days_per_year: 360.0,
                    annual_cost_per_fte: 65000.0,
                },
            );
            detailed.labor.insert(TierKey::M, LaborProfile::default());

            let quick_shipments = calculate(&from_quick).total_shipments_per_year;
            let detailed_shipments = calculate(&detailed).total_shipments_per_year;
            let gap = (quick_shipments - detailed_shipments).abs() / detailed_shipments;
            assert!(gap < 0.10, "{} facilities: {} vs {}", facilities, quick_shipments, detailed_shipments);
            assert!(gap < 1e-9);
        }
    }

    #[test]
    fn test_quick_overlays_rates() {
        let inputs = normalize(&CalculatorInput::Quick(quick(12))).unwrap();
        assert_eq!(inputs.total_facilities(), 12);
        assert_eq!(inputs.throughput.avg_gate_to_gate_minutes, 105.0);
        assert_eq!(inputs.shipper.cost_per_shipment, 850.0);
        assert_eq!(inputs.detention.cost_per_detention_hour, 75.0);
        assert_eq!(inputs.throughput.margin_per_truck, 60.0);
        assert_eq!(inputs.labor.len(), 4);
    }

    #[test]
    fn test_operating_days_fall_back_to_settings() {
        let mut q = quick(10);
        q.operating_days_per_year = None;
        let mut settings = EngineSettings::default();
        settings.quick.operating_days_per_year = 300.0;
        let inputs = normalize_with(&CalculatorInput::Quick(q), &settings).unwrap();
        assert!(inputs.tiers.values().all(|t| t.operating_days_per_year == 300.0));
    }

    #[test]
    fn test_quick_rejects_negative_rates() {
        let mut q = quick(10);
        q.cost_per_shipment = -1.0;
        let err = normalize(&CalculatorInput::Quick(q)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_facilities_is_well_defined() {
        let inputs = normalize(&CalculatorInput::Quick(quick(0))).unwrap();
        let result = calculate(&inputs);
        assert_eq!(result.total_shipments_per_year, 0.0);
        assert_eq!(result.payback_months, None);
    }

    #[test]
    fn test_preset_mode_applies_settings() {
        let mut settings = EngineSettings::default();
        settings.network.beta = 0.01;
        let input = CalculatorInput::Preset {
            network: "regional_10".to_string(),
            scenario: "upside".to_string(),
        };
        let inputs = normalize_with(&input, &settings).unwrap();
        assert_eq!(inputs.network.beta, 0.01);

        let missing = CalculatorInput::Preset {
            network: "regional_11".to_string(),
            scenario: "upside".to_string(),
        };
        assert_eq!(normalize(&missing).unwrap_err().error_code(), "PRESET_NOT_FOUND");
    }

    #[test]
    fn test_detailed_mode_is_validated() {
        let mut inputs = RoiInputs::default();
        inputs.year_one_ramp_share = 1.5;
        assert!(normalize(&CalculatorInput::Detailed(inputs)).is_err());
    }

    #[test]
    fn test_tagged_json() {
        let json = r#"{ "mode": "quick", "facility_count": 4, "trucks_per_day": 80, "scenario": "upside" }"#;
        let input: CalculatorInput = serde_json::from_str(json).unwrap();
        match &input {
            CalculatorInput::Quick(q) => {
                assert_eq!(q.facility_count, 4);
                assert_eq!(q.scenario, ScenarioLevel::Upside);
                assert_eq!(q.operating_days_per_year, None);
            }
            other => panic!("expected quick mode, got {}", other.mode_name()),
        }
        assert!(normalize(&input).is_ok());

        let preset: CalculatorInput =
            serde_json::from_str(r#"{ "mode": "preset", "network": "enterprise_50", "scenario": "expected" }"#).unwrap();
        assert_eq!(normalize(&preset).unwrap().total_facilities(), 50);
    }
}
