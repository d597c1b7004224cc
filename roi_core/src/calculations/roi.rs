//! # ROI Engine
//!
//! The single entry point every surface uses: [`calculate`] turns one
//! [`RoiInputs`] into one [`RoiOutcome`]. It is a pure function with no
//! shared state, so calling it on every slider movement is safe and two calls
//! with the same inputs return bit-identical results.
//!
//! ## Pipeline
//!
//! ```text
//! sanitize → tier aggregator → cost-category calculators → base savings
//!          → network multiplier → commercial model → year-one / payback / 5-year
//! ```
//!
//! ## Example
//!
//! ```rust
//! use roi_core::calculations::roi::calculate;
//! use roi_core::presets::{preset_for, NetworkSize, ScenarioLevel};
//!
//! let inputs = preset_for(NetworkSize::Enterprise50, ScenarioLevel::Expected);
//! let result = calculate(&inputs);
//!
//! assert!(result.network_multiplier > 1.0);
//! assert_eq!(result.total_facilities, 50);
//! println!("Annual savings: ${:.0}", result.total_annual_savings);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::scenario::{project_years, total_net_value, YearOne};
use crate::calculations::tiers::{NetworkContext, TierBreakdown};
use crate::calculations::{add_ons, commercial, detention, network, paper, shipper, throughput};
use crate::inputs::RoiInputs;

/// Annual savings by cost category ($/yr), before the network multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsBreakdown {
    pub labor: f64,
    pub detention: f64,
    pub paper: f64,
    pub shipper_of_choice: f64,
    pub throughput: f64,
    pub enterprise_add_ons: f64,
}

impl SavingsBreakdown {
    /// Sum of every category
    pub fn total(&self) -> f64 {
        self.labor + self.detention + self.paper + self.shipper_of_choice + self.throughput + self.enterprise_add_ons
    }

    /// Category label/value pairs in display order
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("Labor", self.labor),
            ("Detention", self.detention),
            ("Paper", self.paper),
            ("Shipper of choice", self.shipper_of_choice),
            ("Throughput", self.throughput),
            ("Enterprise add-ons", self.enterprise_add_ons),
        ]
    }
}

/// Derived ratios echoed back for audit and display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssumptionsUsed {
    pub year_one_ramp_share: f64,
    pub network_beta: f64,
    pub network_tau: f64,
    pub connections: f64,
    pub baseline_connections: f64,
    pub realization: f64,
    pub transport_spend_per_year: f64,
    pub hours_saved_per_shipment: f64,
    pub detention_reduction_share: f64,
}

/// Output of one engine evaluation.
///
/// Every field is finite. `payback_months` is `None` when year-one gross
/// savings are zero (serialized as `null`); consumers must check it before
/// formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiOutcome {
    pub total_annual_savings: f64,
    pub base_savings: f64,
    pub network_bonus_savings: f64,
    pub network_multiplier: f64,
    pub total_shipments_per_year: f64,
    pub total_facilities: u32,
    pub year_one_gross_savings: f64,
    pub year_one_net_gain: f64,
    pub year_one_roi_percent: f64,
    pub payback_months: Option<f64>,
    pub five_year_value: f64,
    pub annual_subscription: f64,
    pub implementation_cost: f64,
    pub breakdown: SavingsBreakdown,
    pub tiers: Vec<TierBreakdown>,
    pub assumptions_used: AssumptionsUsed,
}

/// Run the full economics model.
///
/// Inputs are sanitized first (see [`RoiInputs::sanitized`]), so this never
/// fails and never produces `NaN`.
pub fn calculate(inputs: &RoiInputs) -> RoiOutcome {
    let inputs = inputs.sanitized();
    let ctx = NetworkContext::build(&inputs);

    let detention = detention::calculate(&inputs.detention, &ctx);
    let breakdown = SavingsBreakdown {
        labor: ctx.totals.labor_savings,
        detention: detention.savings,
        paper: paper::calculate(&inputs.paper, &ctx),
        shipper_of_choice: shipper::calculate(&inputs.shipper, &ctx),
        throughput: throughput::calculate(&inputs.throughput, &ctx),
        enterprise_add_ons: add_ons::calculate(&inputs.enterprise_add_ons, &ctx),
    };
    let base_savings = breakdown.total();

    let facilities = ctx.totals.total_facilities;
    let effect = network::network_effect(facilities, &inputs.network);
    let total_annual_savings = effect.apply(base_savings);

    let costs = commercial::calculate(&inputs.commercial, facilities);
    let year_one = YearOne::compute(total_annual_savings, inputs.year_one_ramp_share, &costs);
    let years = project_years(
        total_annual_savings,
        year_one.gross_savings,
        costs.annual_subscription,
        0.0,
        0.0,
    );

    tracing::debug!(
        facilities,
        shipments = ctx.shipments_per_year(),
        base_savings,
        multiplier = effect.multiplier,
        total_annual_savings,
        "calculated roi"
    );

    RoiOutcome {
        total_annual_savings,
        base_savings,
        network_bonus_savings: effect.bonus(base_savings),
        network_multiplier: effect.multiplier,
        total_shipments_per_year: ctx.shipments_per_year(),
        total_facilities: facilities,
        year_one_gross_savings: year_one.gross_savings,
        year_one_net_gain: year_one.net_gain,
        year_one_roi_percent: year_one.roi_percent,
        payback_months: year_one.payback_months,
        five_year_value: total_net_value(&years),
        annual_subscription: costs.annual_subscription,
        implementation_cost: costs.implementation_cost,
        breakdown,
        assumptions_used: AssumptionsUsed {
            year_one_ramp_share: inputs.year_one_ramp_share,
            network_beta: inputs.network.beta,
            network_tau: inputs.network.tau,
            connections: effect.connections,
            baseline_connections: effect.baseline_connections,
            realization: effect.realization,
            transport_spend_per_year: ctx.transport_spend_per_year,
            hours_saved_per_shipment: ctx.hours_saved_per_shipment,
            detention_reduction_share: detention.reduction_share,
        },
        tiers: ctx.totals.tiers,
    }
}
