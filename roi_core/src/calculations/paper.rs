//! Paper savings: printing and storing bills of lading and other gate paperwork.
//!
//! ```text
//! pages/shipment = pages/BOL × BOLs/shipment + other pages/shipment
//! savings = pages/shipment × outbound share × shipments/yr
//!           × (print + storage cost per page) × (1 − phase-1 saved share)
//! ```

use crate::calculations::tiers::NetworkContext;
use crate::inputs::PaperInputs;

/// Pages handled per shipment
pub fn pages_per_shipment(inputs: &PaperInputs) -> f64 {
    inputs.pages_per_bol * inputs.bols_per_shipment + inputs.other_pages_per_shipment
}

/// Annual paper savings ($/yr).
///
/// `phase1_saved_share` removes whatever an earlier rollout phase already
/// captured, so the same pages are not counted twice.
pub fn calculate(inputs: &PaperInputs, ctx: &NetworkContext) -> f64 {
    pages_per_shipment(inputs)
        * inputs.outbound_share
        * ctx.shipments_per_year()
        * (inputs.print_cost_per_page + inputs.storage_cost_per_page)
        * (1.0 - inputs.phase1_saved_share)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> PaperInputs {
        PaperInputs {
            pages_per_bol: 3.0,
            bols_per_shipment: 1.5,
            other_pages_per_shipment: 2.5,
            outbound_share: 0.5,
            print_cost_per_page: 0.06,
            storage_cost_per_page: 0.04,
            phase1_saved_share: 0.0,
        }
    }

    #[test]
    fn test_pages_per_shipment() {
        assert!((pages_per_shipment(&inputs()) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_paper_savings() {
        // 7 pages × 0.5 × 10,000 × $0.10 = $3,500
        let savings = calculate(&inputs(), &NetworkContext::with_shipments(10000.0));
        assert!((savings - 3500.0).abs() < 1e-9);
    }

    #[test]
    fn test_phase1_share_removes_captured_savings() {
        let mut p = inputs();
        p.phase1_saved_share = 0.4;
        let savings = calculate(&p, &NetworkContext::with_shipments(10000.0));
        assert!((savings - 2100.0).abs() < 1e-9);

        p.phase1_saved_share = 1.0;
        assert_eq!(calculate(&p, &NetworkContext::with_shipments(10000.0)), 0.0);
    }
}
