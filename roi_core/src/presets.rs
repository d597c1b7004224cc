//! # Preset Library
//!
//! Read-only input tables keyed by a named network size crossed with a named
//! scenario. Scenario variants share facility counts and pricing and differ
//! only in the severity of shares and rates.
//!
//! | Network | Facilities (XL/L/M/S) |
//! |---------|-----------------------|
//! | `regional_10` | 1 / 2 / 4 / 3 |
//! | `national_25` | 2 / 5 / 10 / 8 |
//! | `enterprise_50` | 5 / 10 / 20 / 15 |
//!
//! ## Example
//!
//! ```rust
//! use roi_core::presets::preset;
//!
//! let inputs = preset("enterprise_50", "expected").unwrap();
//! assert_eq!(inputs.total_facilities(), 50);
//!
//! assert!(preset("enterprise_50", "wildly_optimistic").is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{RoiError, RoiResult};
use crate::inputs::{
    CommercialParameters, DetentionInputs, EnterpriseAddOns, FacilityTier, LaborProfile, NetworkParameters,
    PaperInputs, RoiInputs, ShipperOfChoiceInputs, ThroughputInputs, TierKey,
};

// ============================================================================
// Keys
// ============================================================================

/// Named network size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkSize {
    #[serde(rename = "regional_10")]
    Regional10,
    #[serde(rename = "national_25")]
    National25,
    #[serde(rename = "enterprise_50")]
    Enterprise50,
}

impl NetworkSize {
    pub const ALL: [NetworkSize; 3] = [NetworkSize::Regional10, NetworkSize::National25, NetworkSize::Enterprise50];

    /// Lookup key (e.g. `"regional_10"`)
    pub fn key(&self) -> &'static str {
        match self {
            NetworkSize::Regional10 => "regional_10",
            NetworkSize::National25 => "national_25",
            NetworkSize::Enterprise50 => "enterprise_50",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        NetworkSize::ALL.into_iter().find(|n| n.key() == key)
    }

    /// Facility count per tier
    pub fn tier_counts(&self) -> [(TierKey, u32); 4] {
        let (xl, l, m, s) = match self {
            NetworkSize::Regional10 => (1, 2, 4, 3),
            NetworkSize::National25 => (2, 5, 10, 8),
            NetworkSize::Enterprise50 => (5, 10, 20, 15),
        };
        [(TierKey::Xl, xl), (TierKey::L, l), (TierKey::M, m), (TierKey::S, s)]
    }
}

impl fmt::Display for NetworkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Named scenario severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioLevel {
    Conservative,
    #[default]
    Expected,
    Upside,
}

impl ScenarioLevel {
    pub const ALL: [ScenarioLevel; 3] = [ScenarioLevel::Conservative, ScenarioLevel::Expected, ScenarioLevel::Upside];

    pub fn key(&self) -> &'static str {
        match self {
            ScenarioLevel::Conservative => "conservative",
            ScenarioLevel::Expected => "expected",
            ScenarioLevel::Upside => "upside",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ScenarioLevel::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Pick the conservative, expected or upside value
    fn pick(&self, conservative: f64, expected: f64, upside: f64) -> f64 {
        match self {
            ScenarioLevel::Conservative => conservative,
            ScenarioLevel::Expected => expected,
            ScenarioLevel::Upside => upside,
        }
    }
}

impl fmt::Display for ScenarioLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ============================================================================
// Reference tables
// ============================================================================

/// Operating profile of a typical facility in a tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProfile {
    pub shipments_per_day: f64,
    pub operating_days_per_year: f64,
    pub annual_cost_per_fte: f64,
    pub shifts_per_day: f64,
    pub dock_office_fte_per_shift: f64,
    pub gate_fte_per_shift: f64,
}

pub fn tier_profile(tier: TierKey) -> TierProfile {
    match tier {
        TierKey::Xl => TierProfile {
            shipments_per_day: 300.0,
            operating_days_per_year: 360.0,
            annual_cost_per_fte: 72000.0,
            shifts_per_day: 3.0,
            dock_office_fte_per_shift: 8.0,
            gate_fte_per_shift: 3.0,
        },
        TierKey::L => TierProfile {
            shipments_per_day: 180.0,
            operating_days_per_year: 360.0,
            annual_cost_per_fte: 68000.0,
            shifts_per_day: 3.0,
            dock_office_fte_per_shift: 5.0,
            gate_fte_per_shift: 2.0,
        },
        TierKey::M => TierProfile {
            shipments_per_day: 100.0,
            operating_days_per_year: 310.0,
            annual_cost_per_fte: 62000.0,
            shifts_per_day: 2.0,
            dock_office_fte_per_shift: 3.0,
            gate_fte_per_shift: 1.5,
        },
        TierKey::S => TierProfile {
            shipments_per_day: 45.0,
            operating_days_per_year: 260.0,
            annual_cost_per_fte: 58000.0,
            shifts_per_day: 2.0,
            dock_office_fte_per_shift: 2.0,
            gate_fte_per_shift: 1.0,
        },
    }
}

/// Shares and rates that vary by scenario severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioAssumptions {
    pub driver_process_time_share: f64,
    pub time_savings_share: f64,
    pub gate_automation_share: f64,
    pub paper: PaperInputs,
    pub shipper: ShipperOfChoiceInputs,
    pub detention: DetentionInputs,
    pub throughput: ThroughputInputs,
    pub enterprise_add_ons: EnterpriseAddOns,
    pub year_one_ramp_share: f64,
}

pub fn scenario_assumptions(level: ScenarioLevel) -> ScenarioAssumptions {
    let v = |c, e, u| level.pick(c, e, u);

    ScenarioAssumptions {
        driver_process_time_share: v(0.25, 0.35, 0.45),
        time_savings_share: v(0.30, 0.45, 0.60),
        gate_automation_share: v(0.40, 0.60, 0.75),
        paper: PaperInputs {
            pages_per_bol: 3.0,
            bols_per_shipment: 1.2,
            other_pages_per_shipment: 2.0,
            outbound_share: 0.5,
            print_cost_per_page: v(0.05, 0.06, 0.08),
            storage_cost_per_page: v(0.02, 0.03, 0.04),
            phase1_saved_share: 0.0,
        },
        shipper: ShipperOfChoiceInputs {
            cost_per_shipment: 850.0,
            paid_by_customer_share: 0.6,
            non_owned_fleet_share: 0.8,
            discount_share: v(0.02, 0.03, 0.05),
            realized_share: v(0.30, 0.50, 0.70),
        },
        detention: DetentionInputs {
            detention_budget_share: v(0.03, 0.04, 0.05),
            at_facilities_share: v(0.60, 0.70, 0.80),
            avg_detention_hours: 1.5,
            cost_per_detention_hour: v(65.0, 75.0, 85.0),
            claims_share_15_30: v(0.08, 0.10, 0.12),
            claims_share_30_plus: v(0.10, 0.12, 0.15),
        },
        throughput: ThroughputInputs {
            avg_gate_to_gate_minutes: 110.0,
            check_in_minutes_reduced: v(10.0, 15.0, 20.0),
            check_out_minutes_reduced: v(5.0, 8.0, 10.0),
            realized_share: v(0.40, 0.50, 0.65),
            outbound_share: 0.5,
            margin_per_truck: v(40.0, 60.0, 80.0),
        },
        enterprise_add_ons: EnterpriseAddOns {
            reduced_lost_documents: v(0.10, 0.15, 0.20),
            dock_clerk_productivity: v(0.20, 0.30, 0.40),
            reduced_missed_deliveries: v(0.10, 0.20, 0.30),
            reduced_yard_checks: v(0.05, 0.10, 0.15),
        },
        year_one_ramp_share: v(0.40, 0.55, 0.70),
    }
}

/// List pricing used by every preset
pub fn default_commercial() -> CommercialParameters {
    CommercialParameters {
        implementation_base_cost: 25000.0,
        implementation_cost_per_facility: 7500.0,
        annual_subscription_per_facility: 12000.0,
    }
}

/// Labor profile for a tier under a scenario
pub fn labor_profile(tier: TierKey, assumptions: &ScenarioAssumptions) -> LaborProfile {
    let profile = tier_profile(tier);
    LaborProfile {
        shifts_per_day: profile.shifts_per_day,
        dock_office_fte_per_shift: profile.dock_office_fte_per_shift,
        gate_fte_per_shift: profile.gate_fte_per_shift,
        driver_process_time_share: assumptions.driver_process_time_share,
        time_savings_share: assumptions.time_savings_share,
        gate_automation_share: assumptions.gate_automation_share,
    }
}

fn build_preset(network: NetworkSize, level: ScenarioLevel) -> RoiInputs {
    let assumptions = scenario_assumptions(level);
    let mut tiers = BTreeMap::new();
    let mut labor = BTreeMap::new();

    for (tier, count) in network.tier_counts() {
        let profile = tier_profile(tier);
        tiers.insert(
            tier,
            FacilityTier {
                count,
                shipments_per_day: profile.shipments_per_day,
                operating_days_per_year: profile.operating_days_per_year,
                annual_cost_per_fte: profile.annual_cost_per_fte,
            },
        );
        labor.insert(tier, labor_profile(tier, &assumptions));
    }

    RoiInputs {
        tiers,
        labor,
        paper: assumptions.paper,
        shipper: assumptions.shipper,
        detention: assumptions.detention,
        throughput: assumptions.throughput,
        network: NetworkParameters::default(),
        commercial: default_commercial(),
        enterprise_add_ons: assumptions.enterprise_add_ons,
        year_one_ramp_share: assumptions.year_one_ramp_share,
    }
}

/// Preset tables: network size → scenario level → inputs.
///
/// Every combination of [`NetworkSize::ALL`] × [`ScenarioLevel::ALL`] is present.
static PRESETS: Lazy<BTreeMap<NetworkSize, BTreeMap<ScenarioLevel, RoiInputs>>> = Lazy::new(|| {
    NetworkSize::ALL
        .into_iter()
        .map(|network| {
            let by_scenario = ScenarioLevel::ALL
                .into_iter()
                .map(|level| (level, build_preset(network, level)))
                .collect();
            (network, by_scenario)
        })
        .collect()
});

// ============================================================================
// Lookup
// ============================================================================

/// Look up a preset by string keys.
///
/// Unknown keys are a programming error and fail with
/// [`RoiError::PresetNotFound`] rather than falling back to a default.
pub fn preset(network: &str, scenario: &str) -> RoiResult<RoiInputs> {
    let inputs = NetworkSize::from_key(network)
        .zip(ScenarioLevel::from_key(scenario))
        .map(|(network, level)| preset_for(network, level))
        .ok_or_else(|| RoiError::preset_not_found(network, scenario))?;

    tracing::debug!(network, scenario, facilities = inputs.total_facilities(), "loaded preset");
    Ok(inputs)
}

/// Typed preset lookup; every combination exists.
pub fn preset_for(network: NetworkSize, level: ScenarioLevel) -> RoiInputs {
    PRESETS[&network][&level].clone()
}

/// Every `(network, scenario)` key pair in the library
pub fn preset_keys() -> Vec<(&'static str, &'static str)> {
    PRESETS
        .iter()
        .flat_map(|(network, by_scenario)| by_scenario.keys().map(move |level| (network.key(), level.key())))
        .collect()
}
