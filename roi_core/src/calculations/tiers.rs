//! # Tier Aggregator
//!
//! Rolls the per-tier facility and labor maps up into network-wide totals:
//! annual shipments and automation labor savings.
//!
//! ## Formulas
//!
//! ```text
//! shipments/yr  = count × shipments/day × operating days/yr
//! dock savings  = count × shifts × dock FTE/shift × driver-process share × time-savings share × FTE cost
//! gate savings  = count × shifts × gate FTE/shift × gate automation share × FTE cost
//! ```
//!
//! A tier with `count = 0` contributes zero to every total. A tier without a
//! labor profile contributes shipments but no labor savings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::inputs::{FacilityTier, LaborProfile, RoiInputs, TierKey};

/// Aggregated figures for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub tier: TierKey,
    pub facilities: u32,
    pub shipments_per_year: f64,
    /// Dock/office labor savings ($/yr)
    pub dock_office_savings: f64,
    /// Gate labor savings ($/yr)
    pub gate_savings: f64,
}

impl TierBreakdown {
    /// Combined labor savings for the tier ($/yr)
    pub fn labor_savings(&self) -> f64 {
        self.dock_office_savings + self.gate_savings
    }
}

/// Network-wide totals from the tier maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTotals {
    pub total_facilities: u32,
    pub total_shipments_per_year: f64,
    pub labor_savings: f64,
    /// One entry per tier with `count > 0`, largest tier first
    pub tiers: Vec<TierBreakdown>,
}

/// Aggregate shipments and labor savings across tiers.
pub fn aggregate_tiers(
    tiers: &BTreeMap<TierKey, FacilityTier>,
    labor: &BTreeMap<TierKey, LaborProfile>,
) -> TierTotals {
    let mut breakdown = Vec::new();

    for tier in TierKey::ALL {
        let Some(facility) = tiers.get(&tier) else {
            continue;
        };
        if facility.count == 0 {
            continue;
        }

        let count = facility.count as f64;
        let (dock_office_savings, gate_savings) = match labor.get(&tier) {
            Some(profile) => {
                let dock_fte = profile.shifts_per_day
                    * profile.dock_office_fte_per_shift
                    * profile.driver_process_time_share
                    * profile.time_savings_share;
                let gate_fte = profile.shifts_per_day * profile.gate_fte_per_shift * profile.gate_automation_share;
                (
                    count * dock_fte * facility.annual_cost_per_fte,
                    count * gate_fte * facility.annual_cost_per_fte,
                )
            }
            None => (0.0, 0.0),
        };

        breakdown.push(TierBreakdown {
            tier,
            facilities: facility.count,
            shipments_per_year: facility.annual_shipments(),
            dock_office_savings,
            gate_savings,
        });
    }

    TierTotals {
        total_facilities: breakdown.iter().map(|t| t.facilities).sum(),
        total_shipments_per_year: breakdown.iter().map(|t| t.shipments_per_year).sum(),
        labor_savings: breakdown.iter().map(|t| t.labor_savings()).sum(),
        tiers: breakdown,
    }
}

/// Shared context handed to every cost-category calculator.
///
/// Built once per calculation so that no calculator re-derives volume or
/// turn-time figures on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkContext {
    pub totals: TierTotals,
    /// Freight spend proxy: shipments/yr × cost per shipment ($/yr)
    pub transport_spend_per_year: f64,
    /// Realized gate time removed per visit (hours)
    pub hours_saved_per_shipment: f64,
}

impl NetworkContext {
    /// Build the context from (already sanitized) inputs.
    pub fn build(inputs: &RoiInputs) -> Self {
        let totals = aggregate_tiers(&inputs.tiers, &inputs.labor);
        let transport_spend_per_year = totals.total_shipments_per_year * inputs.shipper.cost_per_shipment;
        let hours_saved_per_shipment = inputs.throughput.minutes_reduced() * inputs.throughput.realized_share / 60.0;

        NetworkContext {
            totals,
            transport_spend_per_year,
            hours_saved_per_shipment,
        }
    }

    /// Shorthand for the network's annual shipment volume
    pub fn shipments_per_year(&self) -> f64 {
        self.totals.total_shipments_per_year
    }

    /// Context with only a shipment volume, for exercising single calculators.
    pub fn with_shipments(shipments_per_year: f64) -> Self {
        NetworkContext {
            totals: TierTotals {
                total_facilities: 0,
                total_shipments_per_year: shipments_per_year,
                labor_savings: 0.0,
                tiers: Vec::new(),
            },
            transport_spend_per_year: 0.0,
            hours_saved_per_shipment: 0.0,
        }
    }
}
