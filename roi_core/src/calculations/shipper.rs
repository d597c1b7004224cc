//! Shipper-of-choice savings.
//!
//! Carriers discount rates for facilities that turn trucks quickly. The
//! discount applies to freight billed through the customer on non-owned
//! fleet.

use crate::calculations::tiers::NetworkContext;
use crate::inputs::ShipperOfChoiceInputs;

/// Annual shipper-of-choice savings ($/yr)
pub fn calculate(inputs: &ShipperOfChoiceInputs, ctx: &NetworkContext) -> f64 {
    inputs.cost_per_shipment
        * inputs.paid_by_customer_share
        * inputs.non_owned_fleet_share
        * inputs.discount_share
        * inputs.realized_share
        * ctx.shipments_per_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipper_of_choice_savings() {
        let inputs = ShipperOfChoiceInputs {
            cost_per_shipment: 1000.0,
            paid_by_customer_share: 0.5,
            non_owned_fleet_share: 0.8,
            discount_share: 0.05,
            realized_share: 0.5,
        };
        // 1000 × 0.5 × 0.8 × 0.05 × 0.5 = $10/shipment
        let savings = calculate(&inputs, &NetworkContext::with_shipments(20000.0));
        assert!((savings - 200000.0).abs() < 1e-6);
    }

    #[test]
    fn test_any_zero_share_zeroes_savings() {
        let inputs = ShipperOfChoiceInputs {
            cost_per_shipment: 1000.0,
            paid_by_customer_share: 0.5,
            non_owned_fleet_share: 0.0,
            discount_share: 0.05,
            realized_share: 0.5,
        };
        assert_eq!(calculate(&inputs, &NetworkContext::with_shipments(20000.0)), 0.0);
    }
}
