//! # ROI Input Data Model
//!
//! The canonical ("detailed mode") input structure consumed by the engine.
//! Every calculator operates on this shape only; quick-mode inputs are
//! converted into it by [`crate::quick::normalize`].
//!
//! ## Structure
//!
//! ```text
//! RoiInputs
//! ├── tiers: TierKey → FacilityTier (count, shipments/day, days/year, FTE cost)
//! ├── labor: TierKey → LaborProfile (staffing and automation shares)
//! ├── paper / shipper / detention / throughput (cost-category inputs)
//! ├── enterprise_add_ons (flat $/shipment improvements)
//! ├── network (β, τ) and commercial (pricing)
//! └── year_one_ramp_share
//! ```
//!
//! All structs use `#[serde(default)]`, so a field omitted from JSON reads as
//! zero rather than failing deserialization.
//!
//! ## Validation vs. sanitizing
//!
//! - [`RoiInputs::validate`] rejects non-finite, negative, or out-of-range
//!   values. The normalization layer calls it before handing inputs on.
//! - [`RoiInputs::sanitized`] clamps the same conditions away. The engine
//!   always works on a sanitized copy so an interactive caller cannot crash it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NETWORK_BETA, DEFAULT_NETWORK_TAU};
use crate::errors::{RoiError, RoiResult};
use crate::numeric::{clamp_non_negative, clamp_share};

// ============================================================================
// Facility tiers
// ============================================================================

/// Facility size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierKey {
    /// Extra-large hub
    #[serde(rename = "XL")]
    Xl,
    /// Large facility
    #[serde(rename = "L")]
    L,
    /// Medium facility
    #[serde(rename = "M")]
    M,
    /// Small facility
    #[serde(rename = "S")]
    S,
}

impl TierKey {
    /// All tiers, largest first
    pub const ALL: [TierKey; 4] = [TierKey::Xl, TierKey::L, TierKey::M, TierKey::S];

    /// Short code used in JSON and reports
    pub fn code(&self) -> &'static str {
        match self {
            TierKey::Xl => "XL",
            TierKey::L => "L",
            TierKey::M => "M",
            TierKey::S => "S",
        }
    }
}

impl fmt::Display for TierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Facilities of one size class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityTier {
    /// Number of facilities in this tier
    pub count: u32,
    /// Shipments (trucks) handled per facility per day
    pub shipments_per_day: f64,
    /// Operating days per year
    pub operating_days_per_year: f64,
    /// Fully-loaded annual cost of one employee ($/year)
    pub annual_cost_per_fte: f64,
}

impl FacilityTier {
    /// Annual shipments across every facility in the tier
    pub fn annual_shipments(&self) -> f64 {
        self.count as f64 * self.shipments_per_day * self.operating_days_per_year
    }
}

/// Staffing and automation profile for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborProfile {
    /// Shifts operated per day
    pub shifts_per_day: f64,
    /// Dock and office FTEs on each shift
    pub dock_office_fte_per_shift: f64,
    /// Gate (guard) FTEs on each shift
    pub gate_fte_per_shift: f64,
    /// Share of dock/office time spent on driver-facing process
    pub driver_process_time_share: f64,
    /// Share of that driver-facing time removed by automation
    pub time_savings_share: f64,
    /// Share of gate labor that can be automated
    pub gate_automation_share: f64,
}

// ============================================================================
// Cost-category inputs
// ============================================================================

/// Paper and document handling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperInputs {
    pub pages_per_bol: f64,
    pub bols_per_shipment: f64,
    pub other_pages_per_shipment: f64,
    /// Share of shipments that are outbound (and carry paperwork)
    pub outbound_share: f64,
    /// Print cost per page ($)
    pub print_cost_per_page: f64,
    /// Storage/archival cost per page ($)
    pub storage_cost_per_page: f64,
    /// Share already saved by an earlier rollout phase
    pub phase1_saved_share: f64,
}

/// "Shipper of choice" carrier-rate effect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipperOfChoiceInputs {
    /// Freight cost per shipment ($). Also the transport-spend proxy for detention.
    pub cost_per_shipment: f64,
    /// Share of freight paid by the customer rather than the operator
    pub paid_by_customer_share: f64,
    /// Share of the fleet that is not owned
    pub non_owned_fleet_share: f64,
    /// Rate discount available to a "shipper of choice"
    pub discount_share: f64,
    /// Share of the theoretical discount actually captured
    pub realized_share: f64,
}

/// Detention (carrier wait-time charges).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetentionInputs {
    /// Detention charges as a share of transport spend
    pub detention_budget_share: f64,
    /// Share of detention incurred at facilities (vs. on-road)
    pub at_facilities_share: f64,
    /// Average billed detention per claim (hours)
    pub avg_detention_hours: f64,
    /// Cost per detention hour ($)
    pub cost_per_detention_hour: f64,
    /// Share of shipments with a claim 15-30 minutes over free time
    pub claims_share_15_30: f64,
    /// Share of shipments with a claim 30+ minutes over free time
    pub claims_share_30_plus: f64,
}

/// Gate throughput.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThroughputInputs {
    /// Average gate-in to gate-out time (minutes)
    pub avg_gate_to_gate_minutes: f64,
    /// Minutes removed from check-in
    pub check_in_minutes_reduced: f64,
    /// Minutes removed from check-out
    pub check_out_minutes_reduced: f64,
    /// Share of the theoretical reduction realized
    pub realized_share: f64,
    /// Share of shipments that are outbound
    pub outbound_share: f64,
    /// Incremental margin per additional truck processed ($)
    pub margin_per_truck: f64,
}

impl ThroughputInputs {
    /// Total minutes removed per visit before realization
    pub fn minutes_reduced(&self) -> f64 {
        self.check_in_minutes_reduced + self.check_out_minutes_reduced
    }
}

/// Flat per-shipment values of enterprise operational improvements ($/shipment).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterpriseAddOns {
    pub reduced_lost_documents: f64,
    pub dock_clerk_productivity: f64,
    pub reduced_missed_deliveries: f64,
    pub reduced_yard_checks: f64,
}

impl EnterpriseAddOns {
    /// Sum of every add-on, per shipment
    pub fn total_per_shipment(&self) -> f64 {
        self.reduced_lost_documents
            + self.dock_clerk_productivity
            + self.reduced_missed_deliveries
            + self.reduced_yard_checks
    }
}

// ============================================================================
// Network and commercial parameters
// ============================================================================

/// Network-effect parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkParameters {
    /// Scaling factor β applied to pairwise connections
    pub beta: f64,
    /// Maturity constant τ (facilities) of the realization curve
    pub tau: f64,
}

impl Default for NetworkParameters {
    fn default() -> Self {
        NetworkParameters {
            beta: DEFAULT_NETWORK_BETA,
            tau: DEFAULT_NETWORK_TAU,
        }
    }
}

/// Commercial pricing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialParameters {
    pub implementation_base_cost: f64,
    pub implementation_cost_per_facility: f64,
    pub annual_subscription_per_facility: f64,
}

// ============================================================================
// Root aggregate
// ============================================================================

/// Complete detailed-mode input for one ROI calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tiers": { "XL": { "count": 2, "shipments_per_day": 240, "operating_days_per_year": 360, "annual_cost_per_fte": 68000 } },
///   "labor": { "XL": { "shifts_per_day": 3, "dock_office_fte_per_shift": 6, "gate_fte_per_shift": 2,
///                      "driver_process_time_share": 0.35, "time_savings_share": 0.5, "gate_automation_share": 0.6 } },
///   "paper": { "pages_per_bol": 3, "bols_per_shipment": 1, "outbound_share": 0.5, "print_cost_per_page": 0.05 },
///   "year_one_ramp_share": 0.6
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInputs {
    pub tiers: BTreeMap<TierKey, FacilityTier>,
    pub labor: BTreeMap<TierKey, LaborProfile>,
    pub paper: PaperInputs,
    pub shipper: ShipperOfChoiceInputs,
    pub detention: DetentionInputs,
    pub throughput: ThroughputInputs,
    pub network: NetworkParameters,
    pub commercial: CommercialParameters,
    pub enterprise_add_ons: EnterpriseAddOns,
    /// Share of full-network annual value realized in year one
    pub year_one_ramp_share: f64,
}

impl RoiInputs {
    /// Total facility count across tiers
    pub fn total_facilities(&self) -> u32 {
        self.tiers.values().map(|t| t.count).sum()
    }

    /// Reject non-finite, negative, or out-of-range values.
    ///
    /// Field paths in errors are dotted (e.g. `tiers.XL.shipments_per_day`).
    pub fn validate(&self) -> RoiResult<()> {
        for (tier, facility) in &self.tiers {
            let path = format!("tiers.{}", tier);
            require_amount(&path, "shipments_per_day", facility.shipments_per_day)?;
            require_amount(&path, "operating_days_per_year", facility.operating_days_per_year)?;
            require_amount(&path, "annual_cost_per_fte", facility.annual_cost_per_fte)?;
            if facility.operating_days_per_year > 366.0 {
                return Err(RoiError::invalid_input(
                    format!("{}.operating_days_per_year", path),
                    facility.operating_days_per_year.to_string(),
                    "Operating days cannot exceed 366",
                ));
            }
        }

        for (tier, labor) in &self.labor {
            let path = format!("labor.{}", tier);
            require_amount(&path, "shifts_per_day", labor.shifts_per_day)?;
            require_amount(&path, "dock_office_fte_per_shift", labor.dock_office_fte_per_shift)?;
            require_amount(&path, "gate_fte_per_shift", labor.gate_fte_per_shift)?;
            require_share(&path, "driver_process_time_share", labor.driver_process_time_share)?;
            require_share(&path, "time_savings_share", labor.time_savings_share)?;
            require_share(&path, "gate_automation_share", labor.gate_automation_share)?;
        }

        let p = &self.paper;
        require_amount("paper", "pages_per_bol", p.pages_per_bol)?;
        require_amount("paper", "bols_per_shipment", p.bols_per_shipment)?;
        require_amount("paper", "other_pages_per_shipment", p.other_pages_per_shipment)?;
        require_share("paper", "outbound_share", p.outbound_share)?;
        require_amount("paper", "print_cost_per_page", p.print_cost_per_page)?;
        require_amount("paper", "storage_cost_per_page", p.storage_cost_per_page)?;
        require_share("paper", "phase1_saved_share", p.phase1_saved_share)?;

        let s = &self.shipper;
        require_amount("shipper", "cost_per_shipment", s.cost_per_shipment)?;
        require_share("shipper", "paid_by_customer_share", s.paid_by_customer_share)?;
        require_share("shipper", "non_owned_fleet_share", s.non_owned_fleet_share)?;
        require_share("shipper", "discount_share", s.discount_share)?;
        require_share("shipper", "realized_share", s.realized_share)?;

        let d = &self.detention;
        require_share("detention", "detention_budget_share", d.detention_budget_share)?;
        require_share("detention", "at_facilities_share", d.at_facilities_share)?;
        require_amount("detention", "avg_detention_hours", d.avg_detention_hours)?;
        require_amount("detention", "cost_per_detention_hour", d.cost_per_detention_hour)?;
        require_share("detention", "claims_share_15_30", d.claims_share_15_30)?;
        require_share("detention", "claims_share_30_plus", d.claims_share_30_plus)?;
        if d.claims_share_15_30 + d.claims_share_30_plus > 1.0 {
            return Err(RoiError::invalid_input(
                "detention.claims_share_15_30 + detention.claims_share_30_plus",
                (d.claims_share_15_30 + d.claims_share_30_plus).to_string(),
                "Claim shares cannot exceed 1 combined",
            ));
        }

        let t = &self.throughput;
        require_amount("throughput", "avg_gate_to_gate_minutes", t.avg_gate_to_gate_minutes)?;
        require_amount("throughput", "check_in_minutes_reduced", t.check_in_minutes_reduced)?;
        require_amount("throughput", "check_out_minutes_reduced", t.check_out_minutes_reduced)?;
        require_share("throughput", "realized_share", t.realized_share)?;
        require_share("throughput", "outbound_share", t.outbound_share)?;
        require_amount("throughput", "margin_per_truck", t.margin_per_truck)?;

        let e = &self.enterprise_add_ons;
        require_amount("enterprise_add_ons", "reduced_lost_documents", e.reduced_lost_documents)?;
        require_amount("enterprise_add_ons", "dock_clerk_productivity", e.dock_clerk_productivity)?;
        require_amount("enterprise_add_ons", "reduced_missed_deliveries", e.reduced_missed_deliveries)?;
        require_amount("enterprise_add_ons", "reduced_yard_checks", e.reduced_yard_checks)?;

        require_amount("network", "beta", self.network.beta)?;
        require_amount("network", "tau", self.network.tau)?;

        let c = &self.commercial;
        require_amount("commercial", "implementation_base_cost", c.implementation_base_cost)?;
        require_amount("commercial", "implementation_cost_per_facility", c.implementation_cost_per_facility)?;
        require_amount("commercial", "annual_subscription_per_facility", c.annual_subscription_per_facility)?;

        require_share("", "year_one_ramp_share", self.year_one_ramp_share)
    }

    /// Copy with every field clamped into its valid range.
    ///
    /// Non-finite values become zero, negative amounts become zero, and
    /// shares are clamped to `[0, 1]`. Each clamp is logged at `warn`.
    pub fn sanitized(&self) -> RoiInputs {
        let tiers = self
            .tiers
            .iter()
            .map(|(tier, f)| {
                let path = format!("tiers.{}", tier);
                let facility = FacilityTier {
                    count: f.count,
                    shipments_per_day: amount(&path, "shipments_per_day", f.shipments_per_day),
                    operating_days_per_year: amount(&path, "operating_days_per_year", f.operating_days_per_year)
                        .min(366.0),
                    annual_cost_per_fte: amount(&path, "annual_cost_per_fte", f.annual_cost_per_fte),
                };
                (*tier, facility)
            })
            .collect();

        let labor = self
            .labor
            .iter()
            .map(|(tier, l)| {
                let path = format!("labor.{}", tier);
                let profile = LaborProfile {
                    shifts_per_day: amount(&path, "shifts_per_day", l.shifts_per_day),
                    dock_office_fte_per_shift: amount(&path, "dock_office_fte_per_shift", l.dock_office_fte_per_shift),
                    gate_fte_per_shift: amount(&path, "gate_fte_per_shift", l.gate_fte_per_shift),
                    driver_process_time_share: share(&path, "driver_process_time_share", l.driver_process_time_share),
                    time_savings_share: share(&path, "time_savings_share", l.time_savings_share),
                    gate_automation_share: share(&path, "gate_automation_share", l.gate_automation_share),
                };
                (*tier, profile)
            })
            .collect();

        let p = &self.paper;
        let paper = PaperInputs {
            pages_per_bol: amount("paper", "pages_per_bol", p.pages_per_bol),
            bols_per_shipment: amount("paper", "bols_per_shipment", p.bols_per_shipment),
            other_pages_per_shipment: amount("paper", "other_pages_per_shipment", p.other_pages_per_shipment),
            outbound_share: share("paper", "outbound_share", p.outbound_share),
            print_cost_per_page: amount("paper", "print_cost_per_page", p.print_cost_per_page),
            storage_cost_per_page: amount("paper", "storage_cost_per_page", p.storage_cost_per_page),
            phase1_saved_share: share("paper", "phase1_saved_share", p.phase1_saved_share),
        };

        let s = &self.shipper;
        let shipper = ShipperOfChoiceInputs {
            cost_per_shipment: amount("shipper", "cost_per_shipment", s.cost_per_shipment),
            paid_by_customer_share: share("shipper", "paid_by_customer_share", s.paid_by_customer_share),
            non_owned_fleet_share: share("shipper", "non_owned_fleet_share", s.non_owned_fleet_share),
            discount_share: share("shipper", "discount_share", s.discount_share),
            realized_share: share("shipper", "realized_share", s.realized_share),
        };

        let d = &self.detention;
        let detention = DetentionInputs {
            detention_budget_share: share("detention", "detention_budget_share", d.detention_budget_share),
            at_facilities_share: share("detention", "at_facilities_share", d.at_facilities_share),
            avg_detention_hours: amount("detention", "avg_detention_hours", d.avg_detention_hours),
            cost_per_detention_hour: amount("detention", "cost_per_detention_hour", d.cost_per_detention_hour),
            claims_share_15_30: share("detention", "claims_share_15_30", d.claims_share_15_30),
            claims_share_30_plus: share("detention", "claims_share_30_plus", d.claims_share_30_plus),
        };

        let t = &self.throughput;
        let throughput = ThroughputInputs {
            avg_gate_to_gate_minutes: amount("throughput", "avg_gate_to_gate_minutes", t.avg_gate_to_gate_minutes),
            check_in_minutes_reduced: amount("throughput", "check_in_minutes_reduced", t.check_in_minutes_reduced),
            check_out_minutes_reduced: amount("throughput", "check_out_minutes_reduced", t.check_out_minutes_reduced),
            realized_share: share("throughput", "realized_share", t.realized_share),
            outbound_share: share("throughput", "outbound_share", t.outbound_share),
            margin_per_truck: amount("throughput", "margin_per_truck", t.margin_per_truck),
        };

        let e = &self.enterprise_add_ons;
        let enterprise_add_ons = EnterpriseAddOns {
            reduced_lost_documents: amount("enterprise_add_ons", "reduced_lost_documents", e.reduced_lost_documents),
            dock_clerk_productivity: amount("enterprise_add_ons", "dock_clerk_productivity", e.dock_clerk_productivity),
            reduced_missed_deliveries: amount("enterprise_add_ons", "reduced_missed_deliveries", e.reduced_missed_deliveries),
            reduced_yard_checks: amount("enterprise_add_ons", "reduced_yard_checks", e.reduced_yard_checks),
        };

        let network = NetworkParameters {
            beta: amount("network", "beta", self.network.beta),
            tau: amount("network", "tau", self.network.tau),
        };

        let c = &self.commercial;
        let commercial = CommercialParameters {
            implementation_base_cost: amount("commercial", "implementation_base_cost", c.implementation_base_cost),
            implementation_cost_per_facility: amount(
                "commercial",
                "implementation_cost_per_facility",
                c.implementation_cost_per_facility,
            ),
            annual_subscription_per_facility: amount(
                "commercial",
                "annual_subscription_per_facility",
                c.annual_subscription_per_facility,
            ),
        };

        RoiInputs {
            tiers,
            labor,
            paper,
            shipper,
            detention,
            throughput,
            network,
            commercial,
            enterprise_add_ons,
            year_one_ramp_share: share("", "year_one_ramp_share", self.year_one_ramp_share),
        }
    }
}

fn field_path(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", path, field)
    }
}

fn require_amount(path: &str, field: &str, value: f64) -> RoiResult<()> {
    if !value.is_finite() {
        return Err(RoiError::invalid_input(field_path(path, field), value.to_string(), "Value must be finite"));
    }
    if value < 0.0 {
        return Err(RoiError::invalid_input(field_path(path, field), value.to_string(), "Value cannot be negative"));
    }
    Ok(())
}

fn require_share(path: &str, field: &str, value: f64) -> RoiResult<()> {
    require_amount(path, field, value)?;
    if value > 1.0 {
        return Err(RoiError::invalid_input(
            field_path(path, field),
            value.to_string(),
            "Share must be between 0 and 1",
        ));
    }
    Ok(())
}

fn logged_clamp(path: &str, field: &str, value: f64, clamped: f64) -> f64 {
    if value.is_nan() || value != clamped {
        tracing::warn!(field = %field_path(path, field), value, clamped, "clamped out-of-range input");
    }
    clamped
}

fn amount(path: &str, field: &str, value: f64) -> f64 {
    logged_clamp(path, field, value, clamp_non_negative(value))
}

fn share(path: &str, field: &str, value: f64) -> f64 {
    logged_clamp(path, field, value, clamp_share(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_network() -> RoiInputs {
        let mut inputs = RoiInputs {
            year_one_ramp_share: 0.5,
            ..RoiInputs::default()
        };
        inputs.tiers.insert(
            TierKey::M,
            FacilityTier {
                count: 3,
                shipments_per_day: 80.0,
                operating_days_per_year: 300.0,
                annual_cost_per_fte: 60000.0,
            },
        );
        inputs
    }

    #[test]
    fn test_total_facilities() {
        let mut inputs = small_network();
        inputs.tiers.insert(TierKey::Xl, FacilityTier { count: 2, ..FacilityTier::default() });
        assert_eq!(inputs.total_facilities(), 5);
    }

    #[test]
    fn test_annual_shipments() {
        let inputs = small_network();
        assert_eq!(inputs.tiers[&TierKey::M].annual_shipments(), 72000.0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(RoiInputs::default().validate().is_ok());
        assert!(small_network().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_share_above_one() {
        let mut inputs = small_network();
        inputs.paper.outbound_share = 1.2;
        match inputs.validate() {
            Err(RoiError::InvalidInput { field, .. }) => assert_eq!(field, "paper.outbound_share"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut inputs = small_network();
        inputs.tiers.get_mut(&TierKey::M).unwrap().shipments_per_day = f64::NAN;
        let err = inputs.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("tiers.M.shipments_per_day"));
    }

    #[test]
    fn test_validate_rejects_combined_claim_shares() {
        let mut inputs = small_network();
        inputs.detention.claims_share_15_30 = 0.7;
        inputs.detention.claims_share_30_plus = 0.6;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_sanitized_clamps() {
        let mut inputs = small_network();
        inputs.year_one_ramp_share = 3.0;
        inputs.shipper.cost_per_shipment = -50.0;
        inputs.throughput.margin_per_truck = f64::INFINITY;
        let clean = inputs.sanitized();
        assert_eq!(clean.year_one_ramp_share, 1.0);
        assert_eq!(clean.shipper.cost_per_shipment, 0.0);
        assert_eq!(clean.throughput.margin_per_truck, 0.0);
        assert!(clean.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let json = r#"{ "tiers": { "S": { "count": 4 } }, "paper": { "pages_per_bol": 2 } }"#;
        let inputs: RoiInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.tiers[&TierKey::S].count, 4);
        assert_eq!(inputs.tiers[&TierKey::S].shipments_per_day, 0.0);
        assert_eq!(inputs.paper.print_cost_per_page, 0.0);
        assert_eq!(inputs.year_one_ramp_share, 0.0);
        assert_eq!(inputs.network, NetworkParameters::default());
    }

    #[test]
    fn test_tier_key_serialization() {
        let json = serde_json::to_string(&TierKey::Xl).unwrap();
        assert_eq!(json, "\"XL\"");
        let parsed: TierKey = serde_json::from_str("\"S\"").unwrap();
        assert_eq!(parsed, TierKey::S);
    }
}
