//! Commercial cost model: subscription and implementation pricing, both
//! linear in facility count.

use serde::{Deserialize, Serialize};

use crate::inputs::CommercialParameters;

/// Pricing for a network of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommercialCosts {
    /// Recurring subscription ($/yr)
    pub annual_subscription: f64,
    /// One-time implementation ($)
    pub implementation_cost: f64,
}

impl CommercialCosts {
    /// Year-one outlay: subscription plus implementation
    pub fn year_one_outlay(&self) -> f64 {
        self.annual_subscription + self.implementation_cost
    }
}

pub fn calculate(params: &CommercialParameters, facilities: u32) -> CommercialCosts {
    let n = facilities as f64;
    CommercialCosts {
        annual_subscription: params.annual_subscription_per_facility * n,
        implementation_cost: params.implementation_base_cost + params.implementation_cost_per_facility * n,
    }
}
