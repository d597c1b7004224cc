//! # Yardline ROI CLI
//!
//! Terminal front-end for the economics engine. Every figure comes from
//! `roi_core`; this binary only parses arguments and formats output.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use roi_core::calculations::{compose, Scenario, ScenarioOutcome};
use roi_core::presets::preset_keys;
use roi_core::quick::{normalize_with, CalculatorInput, QuickInputs};
use roi_core::report::{format_currency, format_payback, format_percent, PdfPayload, WebhookPayload};
use roi_core::{EngineSettings, RoiError};

mod cli;

use cli::{Cli, Commands, FinanceArgs};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Cli::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(roi_error) = e.downcast_ref::<RoiError>() {
                if let Ok(json) = serde_json::to_string_pretty(roi_error) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    let settings = match &args.config {
        Some(path) => EngineSettings::load(path)?,
        None => EngineSettings::default(),
    };

    let scenario = match &args.command {
        Commands::Presets => {
            for (network, scenario) in preset_keys() {
                println!("{:<16} {}", network, scenario);
            }
            return Ok(());
        }
        Commands::Settings => {
            print!("{}", settings.to_toml_string()?);
            return Ok(());
        }
        Commands::Preset { network, scenario } => {
            let input = CalculatorInput::Preset {
                network: network.clone(),
                scenario: scenario.clone(),
            };
            scenario_from(normalize_with(&input, &settings)?, &args.finance)
        }
        Commands::Quick(quick) => {
            let input = CalculatorInput::Quick(QuickInputs {
                facility_count: quick.facilities,
                trucks_per_day: quick.trucks_per_day,
                avg_dwell_minutes: quick.dwell_minutes,
                operating_days_per_year: quick.days,
                annual_cost_per_fte: quick.fte_cost,
                cost_per_shipment: quick.cost_per_shipment,
                detention_cost_per_hour: quick.detention_rate,
                margin_per_truck: quick.margin_per_truck,
                scenario: quick.scenario.into(),
            });
            scenario_from(normalize_with(&input, &settings)?, &args.finance)
        }
        Commands::File { path } => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            load_file(&text, &settings, &args.finance)?
        }
    };

    tracing::debug!(facilities = scenario.inputs.total_facilities(), "composing scenario");
    let outcome = compose(&scenario);
    let with_finance = args.finance.requested() || matches!(args.command, Commands::File { .. });

    if args.report.pdf_payload {
        let payload = if with_finance {
            PdfPayload::from_scenario(&outcome)
        } else {
            PdfPayload::from_outcome(&outcome.roi, None)
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if args.report.webhook_payload {
        let finance = with_finance.then_some(&outcome.finance);
        let payload = WebhookPayload::new(args.report.contact(), &outcome.roi, finance);
        tracing::debug!(report_id = %payload.report_id, "built webhook payload");
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if !args.json {
        print_summary(&outcome, with_finance);
        println!();
        println!("JSON Output:");
    }
    if with_finance {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&outcome.roi)?);
    }
    Ok(())
}

/// Accept either a full scenario or any calculator input shape.
///
/// A top-level `mode` key selects the calculator input shape; anything else
/// must be a scenario.
fn load_file(text: &str, settings: &EngineSettings, finance: &FinanceArgs) -> Result<Scenario> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(RoiError::from)?;

    if value.get("mode").is_some() {
        let input: CalculatorInput = serde_json::from_value(value).map_err(RoiError::from)?;
        return Ok(scenario_from(normalize_with(&input, settings)?, finance));
    }

    let scenario: Scenario = serde_json::from_value(value).map_err(RoiError::from)?;
    scenario.inputs.validate()?;
    Ok(scenario)
}

fn scenario_from(inputs: roi_core::RoiInputs, finance: &FinanceArgs) -> Scenario {
    Scenario {
        inputs,
        profit_method: finance.profit_method(),
        discount_rate: finance.discount_rate.unwrap_or(0.0),
        growth_rate: finance.growth_rate.unwrap_or(0.0),
    }
}

fn print_summary(outcome: &ScenarioOutcome, with_finance: bool) {
    let roi = &outcome.roi;

    println!("═══════════════════════════════════════");
    println!("  YARD NETWORK ROI");
    println!("═══════════════════════════════════════");
    println!();
    println!("Network:");
    println!("  Facilities:      {}", roi.total_facilities);
    println!("  Shipments/yr:    {:.0}", roi.total_shipments_per_year);
    for tier in &roi.tiers {
        println!(
            "    {:<3} {:>3} facilities  {:>10.0} shipments/yr",
            tier.tier.code(),
            tier.facilities,
            tier.shipments_per_year
        );
    }
    println!();
    println!("Annual Savings:");
    for (label, amount) in roi.breakdown.entries() {
        println!("  {:<20} {:>14}", label, format_currency(amount));
    }
    println!("  {:<20} {:>14}", "Base", format_currency(roi.base_savings));
    println!(
        "  {:<20} {:>14}  (x{:.3})",
        "Network bonus",
        format_currency(roi.network_bonus_savings),
        roi.network_multiplier
    );
    println!("  {:<20} {:>14}", "Total", format_currency(roi.total_annual_savings));
    println!();
    println!("Commercial:");
    println!("  Subscription/yr:   {}", format_currency(roi.annual_subscription));
    println!("  Implementation:    {}", format_currency(roi.implementation_cost));
    println!();
    println!("Year One:");
    println!("  Gross savings:     {}", format_currency(roi.year_one_gross_savings));
    println!("  Net gain:          {}", format_currency(roi.year_one_net_gain));
    println!("  ROI:               {}", format_percent(roi.year_one_roi_percent));
    println!("  Payback:           {}", format_payback(roi.payback_months));
    println!("  5-year value:      {}", format_currency(roi.five_year_value));

    if with_finance {
        let finance = &outcome.finance;
        println!();
        println!("Finance:");
        println!("  Cost of 90-day delay: {}", format_currency(finance.cost_of_delay_90_days));
        println!("  Equivalent value:     {}", format_currency(finance.equivalent_value));
        println!("  5-year value (grown): {}", format_currency(finance.five_year_value));
        println!("  NPV:                  {}", format_currency(finance.net_present_value));
    }
    println!("═══════════════════════════════════════");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_quick() {
        let args = Cli::try_parse_from([
            "roi",
            "quick",
            "--facilities",
            "12",
            "--trucks-per-day",
            "90",
            "--scenario",
            "upside",
            "--discount-rate",
            "0.08",
        ])
        .unwrap();
        match &args.command {
            Commands::Quick(q) => {
                assert_eq!(q.facilities, 12);
                assert_eq!(q.dwell_minutes, 110.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(args.finance.requested());
    }

    #[test]
    fn test_load_file_accepts_both_shapes() {
        let settings = EngineSettings::default();
        let finance = FinanceArgs::default();

        let preset = r#"{ "mode": "preset", "network": "national_25", "scenario": "conservative" }"#;
        assert_eq!(load_file(preset, &settings, &finance).unwrap().inputs.total_facilities(), 25);

        let scenario = r#"{ "inputs": { "year_one_ramp_share": 0.5 }, "growth_rate": 0.02 }"#;
        assert_eq!(load_file(scenario, &settings, &finance).unwrap().growth_rate, 0.02);

        let invalid = r#"{ "inputs": { "year_one_ramp_share": 2.0 } }"#;
        assert!(load_file(invalid, &settings, &finance).is_err());
    }

    #[test]
    fn test_load_file_rejects_malformed_input() {
        let settings = EngineSettings::default();
        let finance = FinanceArgs::default();

        let bad_count = r#"{ "mode": "quick", "facility_count": "twelve", "trucks_per_day": 90 }"#;
        let err = load_file(bad_count, &settings, &finance).unwrap_err();
        assert_eq!(err.downcast_ref::<RoiError>().unwrap().error_code(), "SERIALIZATION_ERROR");

        let bad_mode = r#"{ "mode": "presets", "network": "national_25", "scenario": "expected" }"#;
        assert!(load_file(bad_mode, &settings, &finance).is_err());

        let bare_inputs = r#"{ "tiers": { "M": { "count": 3 } } }"#;
        assert!(load_file(bare_inputs, &settings, &finance).is_err());

        assert!(load_file("[1, 2, 3]", &settings, &finance).is_err());
    }

    #[test]
    fn test_webhook_flags() {
        let args = Cli::try_parse_from([
            "roi",
            "preset",
            "regional_10",
            "expected",
            "--webhook-payload",
            "--contact-email",
            "ops@example.com",
        ])
        .unwrap();
        assert!(args.report.webhook_payload);
        let contact = args.report.contact();
        assert_eq!(contact.email, "ops@example.com");
        assert_eq!(contact.name, "");
    }
}
