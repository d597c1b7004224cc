//! # Throughput Savings
//!
//! Faster gate turns free up truck-equivalent capacity; each extra truck the
//! same yard can process is monetized at the incremental margin.
//!
//! ```text
//! time share freed = (check-in + check-out minutes reduced) / avg gate-to-gate minutes
//! savings = time share freed × realized share × outbound share × shipments/yr × margin/truck
//! ```
//!
//! The freed share is capped at 1: a yard cannot remove more time than a
//! visit takes.

use crate::calculations::tiers::NetworkContext;
use crate::inputs::ThroughputInputs;
use crate::numeric::safe_div;

/// Share of each gate visit removed before realization, in `[0, 1]`
pub fn time_share_freed(inputs: &ThroughputInputs) -> f64 {
    safe_div(inputs.minutes_reduced(), inputs.avg_gate_to_gate_minutes, 0.0).min(1.0)
}

/// Annual throughput savings ($/yr)
pub fn calculate(inputs: &ThroughputInputs, ctx: &NetworkContext) -> f64 {
    time_share_freed(inputs)
        * inputs.realized_share
        * inputs.outbound_share
        * ctx.shipments_per_year()
        * inputs.margin_per_truck
}
