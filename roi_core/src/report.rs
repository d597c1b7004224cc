//! # Report Payloads
//!
//! Flattened views of an engine result for the two downstream consumers:
//! the PDF renderer and the email/webhook forwarder. Both are built from an
//! existing [`RoiOutcome`] and never recompute a figure, so every surface
//! shows the same numbers.
//!
//! The formatting helpers here are the only place a sentinel (no payback,
//! non-finite value) is turned into display text; they render `"N/A"`
//! instead of `NaN` or `inf`.
//!
//! ## Example
//!
//! ```rust
//! use roi_core::calculations::calculate;
//! use roi_core::presets::{preset_for, NetworkSize, ScenarioLevel};
//! use roi_core::report::{format_payback, PdfPayload};
//!
//! let result = calculate(&preset_for(NetworkSize::Regional10, ScenarioLevel::Expected));
//! let pdf = PdfPayload::from_outcome(&result, None);
//! assert_eq!(pdf.savings_breakdown.len(), 6);
//! assert_eq!(format_payback(None), "N/A");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{FinanceBlock, RoiOutcome, ScenarioOutcome};

/// Fixed assumption lines printed on every report
pub const REPORT_ASSUMPTIONS: [&str; 4] = [
    "Savings are estimated at steady state; year one is reduced by the ramp share.",
    "Network bonus scales with pairwise facility connections, damped by a maturity curve.",
    "Implementation cost is one-time and included in payback, not in year-one net gain.",
    "Category figures use the operator-supplied rates shown in the inputs section.",
];

/// Disclaimer printed at the foot of every report
pub const REPORT_DISCLAIMER: &str = "Estimates are illustrative and depend on the inputs provided. \
Actual results vary with facility operations, carrier contracts and adoption.";

// ============================================================================
// Formatting
// ============================================================================

/// Format dollars with thousands separators and no cents (`$1,234,567`).
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a percentage with one decimal (`123.4%`).
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.1}%", value)
    } else {
        "N/A".to_string()
    }
}

/// Format payback months; `None` renders as `N/A`.
pub fn format_payback(months: Option<f64>) -> String {
    match months {
        Some(m) if m.is_finite() => format!("{:.1} months", m),
        _ => "N/A".to_string(),
    }
}

// ============================================================================
// PDF payload
// ============================================================================

/// One labelled line of the savings breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub label: String,
    pub amount: f64,
    pub formatted: String,
}

/// Flattened data handed to the PDF renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfPayload {
    pub savings_breakdown: Vec<BreakdownLine>,
    pub base_savings: String,
    pub network_bonus_savings: String,
    pub total_annual_savings: String,
    pub network_multiplier: String,
    pub year_one_gross_savings: String,
    pub year_one_roi_percent: String,
    pub payback: String,
    pub five_year_value: String,
    pub cost_of_delay_90_days: Option<String>,
    pub net_present_value: Option<String>,
    pub assumptions: Vec<String>,
    pub disclaimer: String,
}

impl PdfPayload {
    /// Flatten a result; pass the scenario finance block when there is one.
    pub fn from_outcome(outcome: &RoiOutcome, finance: Option<&FinanceBlock>) -> Self {
        let savings_breakdown = outcome
            .breakdown
            .entries()
            .into_iter()
            .map(|(label, amount)| BreakdownLine {
                label: label.to_string(),
                amount,
                formatted: format_currency(amount),
            })
            .collect();

        PdfPayload {
            savings_breakdown,
            base_savings: format_currency(outcome.base_savings),
            network_bonus_savings: format_currency(outcome.network_bonus_savings),
            total_annual_savings: format_currency(outcome.total_annual_savings),
            network_multiplier: format!("{:.2}x", outcome.network_multiplier),
            year_one_gross_savings: format_currency(outcome.year_one_gross_savings),
            year_one_roi_percent: format_percent(outcome.year_one_roi_percent),
            payback: format_payback(outcome.payback_months),
            five_year_value: format_currency(finance.map_or(outcome.five_year_value, |f| f.five_year_value)),
            cost_of_delay_90_days: finance.map(|f| format_currency(f.cost_of_delay_90_days)),
            net_present_value: finance.map(|f| format_currency(f.net_present_value)),
            assumptions: REPORT_ASSUMPTIONS.iter().map(|s| s.to_string()).collect(),
            disclaimer: REPORT_DISCLAIMER.to_string(),
        }
    }

    pub fn from_scenario(outcome: &ScenarioOutcome) -> Self {
        Self::from_outcome(&outcome.roi, Some(&outcome.finance))
    }
}

// ============================================================================
// Webhook payload
// ============================================================================

/// Who asked for the report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub company: String,
}

/// Headline figures forwarded to CRM / email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookSummary {
    pub total_facilities: u32,
    pub total_annual_savings: f64,
    pub year_one_gross_savings: f64,
    pub year_one_roi_percent: f64,
    /// `null` when there is no payback
    pub payback_months: Option<f64>,
    pub five_year_value: f64,
    pub cost_of_delay_90_days: Option<f64>,
}

/// Body posted to the lead webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub contact: ContactInfo,
    pub summary: WebhookSummary,
}

impl WebhookPayload {
    pub fn new(contact: ContactInfo, outcome: &RoiOutcome, finance: Option<&FinanceBlock>) -> Self {
        WebhookPayload {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            contact,
            summary: WebhookSummary {
                total_facilities: outcome.total_facilities,
                total_annual_savings: outcome.total_annual_savings,
                year_one_gross_savings: outcome.year_one_gross_savings,
                year_one_roi_percent: outcome.year_one_roi_percent,
                payback_months: outcome.payback_months,
                five_year_value: finance.map_or(outcome.five_year_value, |f| f.five_year_value),
                cost_of_delay_90_days: finance.map(|f| f.cost_of_delay_90_days),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{calculate, compose, ProfitMethod, Scenario};
    use crate::inputs::RoiInputs;
    use crate::presets::{preset_for, NetworkSize, ScenarioLevel};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1234567.8), "$1,234,568");
        assert_eq!(format_currency(-45000.0), "-$45,000");
        assert_eq!(format_currency(f64::NAN), "N/A");
    }

    #[test]
    fn test_format_sentinels() {
        assert_eq!(format_payback(None), "N/A");
        assert_eq!(format_payback(Some(f64::INFINITY)), "N/A");
        assert_eq!(format_payback(Some(7.26)), "7.3 months");
        assert_eq!(format_percent(f64::NAN), "N/A");
        assert_eq!(format_percent(12.345), "12.3%");
    }

    #[test]
    fn test_pdf_payload_uses_engine_figures() {
        let result = calculate(&preset_for(NetworkSize::National25, ScenarioLevel::Expected));
        let pdf = PdfPayload::from_outcome(&result, None);
        assert_eq!(pdf.total_annual_savings, format_currency(result.total_annual_savings));
        assert_eq!(pdf.savings_breakdown[0].label, "Labor");
        assert_eq!(pdf.savings_breakdown[0].amount, result.breakdown.labor);
        assert!(pdf.cost_of_delay_90_days.is_none());
        assert_eq!(pdf.assumptions.len(), REPORT_ASSUMPTIONS.len());
    }

    #[test]
    fn test_pdf_payload_never_shows_nan() {
        let result = calculate(&RoiInputs::default());
        let pdf = PdfPayload::from_outcome(&result, None);
        let json = serde_json::to_string(&pdf).unwrap();
        assert!(!json.contains("NaN"));
        assert!(!json.contains("inf"));
        assert_eq!(pdf.payback, "N/A");
    }

    #[test]
    fn test_webhook_payload_from_scenario() {
        let outcome = compose(&Scenario {
            inputs: preset_for(NetworkSize::Regional10, ScenarioLevel::Upside),
            profit_method: ProfitMethod::ContributionMargin { margin_share: 0.1 },
            discount_rate: 0.08,
            growth_rate: 0.02,
        });
        let contact = ContactInfo {
            name: "Dana Ops".to_string(),
            email: "dana@example.com".to_string(),
            company: "Example Freight".to_string(),
        };
        let payload = WebhookPayload::new(contact, &outcome.roi, Some(&outcome.finance));
        assert_eq!(payload.summary.total_annual_savings, outcome.roi.total_annual_savings);
        assert_eq!(payload.summary.cost_of_delay_90_days, Some(outcome.finance.cost_of_delay_90_days));
        assert_eq!(payload.summary.five_year_value, outcome.finance.five_year_value);

        let json = serde_json::to_string(&payload).unwrap();
        let parsed: WebhookPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.report_id, payload.report_id);
    }
}
