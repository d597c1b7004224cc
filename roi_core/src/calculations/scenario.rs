//! # Scenario Composer
//!
//! Turns steady-state annual savings into the figures a buyer looks at:
//! year-one ramp, ROI, payback, multi-year value and the cost of delaying a
//! decision. The direct engine ([`crate::calculations::roi::calculate`]) uses
//! the same functions with zero growth and zero discounting, so a wrapped
//! scenario and a direct calculation never disagree on shared figures.
//!
//! ## Formulas
//!
//! ```text
//! year-one gross   = total annual savings × ramp share
//! year-one net     = year-one gross − subscription
//! year-one ROI %   = year-one net / (subscription + implementation) × 100
//! payback months   = (subscription + implementation) / (year-one gross / 12)   [None when gross = 0]
//! year y ≥ 2 gross = total annual savings × (1 + growth)^(y − 2)
//! cost of delay    = year-one gross / 4
//! ```
//!
//! ## Example
//!
//! ```rust
//! use roi_core::calculations::scenario::{compose, ProfitMethod, Scenario};
//! use roi_core::presets::{preset_for, NetworkSize, ScenarioLevel};
//!
//! let scenario = Scenario {
//!     inputs: preset_for(NetworkSize::Regional10, ScenarioLevel::Expected),
//!     profit_method: ProfitMethod::ContributionMargin { margin_share: 0.12 },
//!     discount_rate: 0.08,
//!     growth_rate: 0.03,
//! };
//! let outcome = compose(&scenario);
//! assert_eq!(outcome.finance.cost_of_delay_90_days, outcome.roi.year_one_gross_savings / 4.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::commercial::CommercialCosts;
use crate::calculations::roi::{calculate, RoiOutcome};
use crate::constants::{MONTHS_PER_YEAR, PROJECTION_YEARS, QUARTER_YEAR_SHARE};
use crate::inputs::RoiInputs;
use crate::numeric::{clamp_non_negative, finite_or_zero, safe_div, saturate};

// ============================================================================
// Year-one figures
// ============================================================================

/// Ramp-phased year-one economics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearOne {
    pub gross_savings: f64,
    pub net_gain: f64,
    pub roi_percent: f64,
    /// Months to recover subscription + implementation; `None` when year-one
    /// savings are zero and the investment never pays back.
    pub payback_months: Option<f64>,
}

impl YearOne {
    pub fn compute(total_annual_savings: f64, ramp_share: f64, costs: &CommercialCosts) -> Self {
        let gross_savings = total_annual_savings * ramp_share;
        let net_gain = gross_savings - costs.annual_subscription;
        let outlay = costs.year_one_outlay();

        YearOne {
            gross_savings,
            net_gain,
            roi_percent: saturate(safe_div(net_gain, outlay, 0.0) * 100.0),
            payback_months: payback_months(outlay, gross_savings),
        }
    }
}

/// Months until `outlay` is recovered at the year-one monthly savings rate.
///
/// Returns `None` (never) when there are no savings.
pub fn payback_months(outlay: f64, year_one_gross_savings: f64) -> Option<f64> {
    if year_one_gross_savings <= 0.0 {
        return None;
    }
    let months = outlay / (year_one_gross_savings / MONTHS_PER_YEAR);
    months.is_finite().then_some(months)
}

/// Opportunity cost of deferring the decision by 90 days
pub fn cost_of_delay_90_days(year_one_gross_savings: f64) -> f64 {
    year_one_gross_savings * QUARTER_YEAR_SHARE
}

// ============================================================================
// Multi-year projection
// ============================================================================

/// One year of the value projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// 1-based year index
    pub year: u32,
    pub gross_savings: f64,
    pub subscription: f64,
    pub net_value: f64,
    /// `net_value / (1 + discount rate)^year`
    pub discounted_net_value: f64,
}

/// Project net value over [`PROJECTION_YEARS`] years.
///
/// Year one is ramped; later years run at full steady-state savings, grown
/// by `growth_rate` per year after year two.
pub fn project_years(
    total_annual_savings: f64,
    year_one_gross_savings: f64,
    annual_subscription: f64,
    growth_rate: f64,
    discount_rate: f64,
) -> Vec<YearProjection> {
    (1..=PROJECTION_YEARS)
        .map(|year| {
            let gross_savings = if year == 1 {
                year_one_gross_savings
            } else {
                saturate(total_annual_savings * (1.0 + growth_rate).powi(year as i32 - 2))
            };
            let net_value = saturate(gross_savings - annual_subscription);
            let discount = (1.0 + discount_rate).powi(year as i32);
            YearProjection {
                year,
                gross_savings,
                subscription: annual_subscription,
                net_value,
                discounted_net_value: safe_div(net_value, discount, 0.0),
            }
        })
        .collect()
}

/// Sum of undiscounted net value over the projection
pub fn total_net_value(years: &[YearProjection]) -> f64 {
    saturate(years.iter().map(|y| y.net_value).sum())
}

// ============================================================================
// Scenario wrapper
// ============================================================================

/// How savings are translated into a business-facing equivalent figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ProfitMethod {
    /// Revenue needed at this contribution margin to earn the same profit
    ContributionMargin { margin_share: f64 },
    /// Cost of buying the same gains from an outsourced provider charging a
    /// premium over internal cost
    CostDifferential { outsourced_premium_share: f64 },
}

impl Default for ProfitMethod {
    fn default() -> Self {
        ProfitMethod::ContributionMargin { margin_share: 1.0 }
    }
}

impl ProfitMethod {
    /// Equivalent value of `savings` under this method
    pub fn equivalent_value(&self, savings: f64) -> f64 {
        match *self {
            ProfitMethod::ContributionMargin { margin_share } => {
                let margin = clamp_non_negative(margin_share);
                if margin > 0.0 {
                    saturate(savings / margin)
                } else {
                    0.0
                }
            }
            ProfitMethod::CostDifferential { outsourced_premium_share } => {
                saturate(savings * (1.0 + clamp_non_negative(outsourced_premium_share)))
            }
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProfitMethod::ContributionMargin { .. } => "Contribution margin",
            ProfitMethod::CostDifferential { .. } => "Outsourced cost differential",
        }
    }
}

/// Detailed inputs plus the finance assumptions of a scenario.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub inputs: RoiInputs,
    pub profit_method: ProfitMethod,
    /// Annual discount rate for NPV (e.g. 0.08)
    pub discount_rate: f64,
    /// Annual savings growth after year two; may be negative
    pub growth_rate: f64,
}

impl Scenario {
    /// Scenario with no growth, no discounting and margin-neutral profit conversion
    pub fn neutral(inputs: RoiInputs) -> Self {
        Scenario {
            inputs,
            ..Scenario::default()
        }
    }
}

/// Finance figures added by the scenario wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceBlock {
    pub cost_of_delay_90_days: f64,
    /// Year-one gross savings converted by the scenario's profit method
    pub equivalent_value: f64,
    /// Growth-adjusted undiscounted five-year net value
    pub five_year_value: f64,
    /// Discounted net value less one-time implementation cost
    pub net_present_value: f64,
    pub discount_rate: f64,
    pub growth_rate: f64,
    pub yearly: Vec<YearProjection>,
}

/// Result of a wrapped scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub roi: RoiOutcome,
    pub finance: FinanceBlock,
}

/// Evaluate a scenario: the direct engine result plus its finance block.
pub fn compose(scenario: &Scenario) -> ScenarioOutcome {
    let roi = calculate(&scenario.inputs);

    let discount_rate = clamp_non_negative(scenario.discount_rate);
    let growth_rate = finite_or_zero(scenario.growth_rate).max(-1.0);

    let yearly = project_years(
        roi.total_annual_savings,
        roi.year_one_gross_savings,
        roi.annual_subscription,
        growth_rate,
        discount_rate,
    );
    let five_year_value = total_net_value(&yearly);
    let discounted = saturate(yearly.iter().map(|y| y.discounted_net_value).sum());

    let finance = FinanceBlock {
        cost_of_delay_90_days: cost_of_delay_90_days(roi.year_one_gross_savings),
        equivalent_value: scenario.profit_method.equivalent_value(roi.year_one_gross_savings),
        five_year_value,
        net_present_value: saturate(discounted - roi.implementation_cost),
        discount_rate,
        growth_rate,
        yearly,
    };

    tracing::debug!(
        method = scenario.profit_method.display_name(),
        discount_rate,
        growth_rate,
        npv = finance.net_present_value,
        "composed scenario"
    );

    ScenarioOutcome { roi, finance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{preset_for, NetworkSize, ScenarioLevel};

    fn costs() -> CommercialCosts {
        CommercialCosts {
            annual_subscription: 120000.0,
            implementation_cost: 60000.0,
        }
    }

    #[test]
    fn test_year_one_figures() {
        let y1 = YearOne::compute(1_000_000.0, 0.6, &costs());
        assert_eq!(y1.gross_savings, 600000.0);
        assert_eq!(y1.net_gain, 480000.0);
        // 480k / 180k × 100
        assert!((y1.roi_percent - 266.666_666_666).abs() < 1e-6);
        // 180k / 50k per month
        assert!((y1.payback_months.unwrap() - 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_payback_sentinel_when_no_savings() {
        let y1 = YearOne::compute(0.0, 0.6, &costs());
        assert_eq!(y1.payback_months, None);
        assert_eq!(y1.gross_savings, 0.0);
        assert!(y1.roi_percent.is_finite());
    }

    #[test]
    fn test_roi_percent_with_zero_outlay() {
        let free = CommercialCosts {
            annual_subscription: 0.0,
            implementation_cost: 0.0,
        };
        let y1 = YearOne::compute(1000.0, 1.0, &free);
        assert_eq!(y1.roi_percent, 0.0);
        assert_eq!(y1.payback_months, Some(0.0));
    }

    #[test]
    fn test_projection_without_growth() {
        let years = project_years(1000.0, 400.0, 100.0, 0.0, 0.0);
        assert_eq!(years.len(), 5);
        assert_eq!(years[0].net_value, 300.0);
        assert!(years[1..].iter().all(|y| y.net_value == 900.0));
        assert_eq!(total_net_value(&years), 300.0 + 4.0 * 900.0);
    }

    #[test]
    fn test_projection_growth_and_discount() {
        let years = project_years(1000.0, 400.0, 0.0, 0.1, 0.1);
        assert_eq!(years[1].gross_savings, 1000.0);
        assert!((years[2].gross_savings - 1100.0).abs() < 1e-9);
        assert!((years[4].gross_savings - 1331.0).abs() < 1e-9);
        assert!((years[0].discounted_net_value - 400.0 / 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_profit_methods() {
        let margin = ProfitMethod::ContributionMargin { margin_share: 0.2 };
        assert!((margin.equivalent_value(100.0) - 500.0).abs() < 1e-9);
        let zero_margin = ProfitMethod::ContributionMargin { margin_share: 0.0 };
        assert_eq!(zero_margin.equivalent_value(100.0), 0.0);
        let outsourced = ProfitMethod::CostDifferential { outsourced_premium_share: 0.25 };
        assert_eq!(outsourced.equivalent_value(100.0), 125.0);
    }

    #[test]
    fn test_scenario_matches_direct_calculation() {
        for network in NetworkSize::ALL {
            for level in ScenarioLevel::ALL {
                let inputs = preset_for(network, level);
                let direct = calculate(&inputs);
                let wrapped = compose(&Scenario {
                    inputs: inputs.clone(),
                    profit_method: ProfitMethod::CostDifferential { outsourced_premium_share: 0.3 },
                    discount_rate: 0.1,
                    growth_rate: 0.05,
                });
                assert_eq!(direct.base_savings.to_bits(), wrapped.roi.base_savings.to_bits());
                assert_eq!(direct.network_multiplier.to_bits(), wrapped.roi.network_multiplier.to_bits());
                assert_eq!(direct.total_annual_savings.to_bits(), wrapped.roi.total_annual_savings.to_bits());
            }
        }
    }

    #[test]
    fn test_cost_of_delay_identity() {
        for network in NetworkSize::ALL {
            for level in ScenarioLevel::ALL {
                let outcome = compose(&Scenario::neutral(preset_for(network, level)));
                assert_eq!(outcome.finance.cost_of_delay_90_days, outcome.roi.year_one_gross_savings / 4.0);
            }
        }
    }

    #[test]
    fn test_neutral_scenario_five_year_value_matches_direct() {
        let inputs = preset_for(NetworkSize::National25, ScenarioLevel::Expected);
        let outcome = compose(&Scenario::neutral(inputs));
        assert_eq!(outcome.finance.five_year_value, outcome.roi.five_year_value);
    }

    #[test]
    fn test_scenario_json_shape() {
        let json = r#"{
            "inputs": { "year_one_ramp_share": 0.5 },
            "profit_method": { "method": "contribution_margin", "margin_share": 0.15 },
            "discount_rate": 0.08
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.profit_method, ProfitMethod::ContributionMargin { margin_share: 0.15 });
        assert_eq!(scenario.growth_rate, 0.0);
        let outcome = compose(&scenario);
        assert_eq!(outcome.roi.payback_months, None);
        assert_eq!(outcome.finance.cost_of_delay_90_days, 0.0);
    }
}
