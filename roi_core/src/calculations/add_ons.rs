//! Enterprise add-on savings: flat per-shipment values summed over the network.

use crate::calculations::tiers::NetworkContext;
use crate::inputs::EnterpriseAddOns;

pub fn calculate(inputs: &EnterpriseAddOns, ctx: &NetworkContext) -> f64 {
    inputs.total_per_shipment() * ctx.shipments_per_year()
}
