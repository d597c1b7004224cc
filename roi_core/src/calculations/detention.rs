//! # Detention Savings
//!
//! Carriers bill detention when a truck waits past its free time. Faster
//! gate processing pulls some of those visits back under the threshold.
//!
//! ## Method
//!
//! ```text
//! facility detention spend = transport spend × budget share × at-facilities share
//!
//! short bucket (15-30 min over) reduction = min(1, hours saved / 0.5 h)
//! long bucket  (30+ min over)   reduction = min(1, hours saved / avg detention hours)
//! reduction share = claim-share weighted average of the two bucket reductions
//!
//! savings = min(facility detention spend × reduction share,
//!               shipments × (claim shares) × hours saved × cost per detention hour)
//! ```
//!
//! The second term caps the top-down estimate at the dollar value of the
//! detention hours actually avoided.

use serde::{Deserialize, Serialize};

use crate::calculations::tiers::NetworkContext;
use crate::constants::SHORT_CLAIM_WINDOW_HOURS;
use crate::inputs::DetentionInputs;
use crate::numeric::safe_div;

/// Detention savings with the intermediate figures used to reach them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DetentionOutcome {
    /// Detention charges incurred at facilities ($/yr)
    pub facility_detention_spend: f64,
    /// Blended share of detention removed by faster turns
    pub reduction_share: f64,
    /// Annual savings ($/yr)
    pub savings: f64,
}

/// Blend the two claim buckets into one reduction share.
///
/// Weights are the claim shares normalized by their sum; with no claims the
/// reduction is zero.
pub fn reduction_share(inputs: &DetentionInputs, hours_saved: f64) -> f64 {
    let short_reduction = safe_div(hours_saved, SHORT_CLAIM_WINDOW_HOURS, 0.0).min(1.0);
    let long_reduction = safe_div(hours_saved, inputs.avg_detention_hours, 0.0).min(1.0);

    let total_claims = inputs.claims_share_15_30 + inputs.claims_share_30_plus;
    safe_div(
        inputs.claims_share_15_30 * short_reduction + inputs.claims_share_30_plus * long_reduction,
        total_claims,
        0.0,
    )
}

/// Compute detention savings for the network.
pub fn calculate(inputs: &DetentionInputs, ctx: &NetworkContext) -> DetentionOutcome {
    let facility_detention_spend =
        ctx.transport_spend_per_year * inputs.detention_budget_share * inputs.at_facilities_share;
    let reduction = reduction_share(inputs, ctx.hours_saved_per_shipment);

    let top_down = facility_detention_spend * reduction;
    let hours_avoided_value = ctx.shipments_per_year()
        * (inputs.claims_share_15_30 + inputs.claims_share_30_plus)
        * ctx.hours_saved_per_shipment
        * inputs.cost_per_detention_hour;

    DetentionOutcome {
        facility_detention_spend,
        reduction_share: reduction,
        savings: top_down.min(hours_avoided_value).max(0.0),
    }
}
