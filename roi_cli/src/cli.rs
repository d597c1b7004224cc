use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use roi_core::calculations::ProfitMethod;
use roi_core::presets::ScenarioLevel;
use roi_core::report::ContactInfo;

#[derive(Parser, Debug)]
#[command(name = "roi", version, about = "Yard-logistics ROI calculator")]
pub struct Cli {
    /// Engine settings file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print only the JSON result
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub report: ReportArgs,

    #[command(flatten)]
    pub finance: FinanceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every preset key pair
    Presets,

    /// Run a named preset
    Preset {
        /// Network size key (e.g. regional_10, enterprise_50)
        network: String,
        /// Scenario key (conservative, expected, upside)
        scenario: String,
    },

    /// Run quick mode from a handful of network figures
    Quick(QuickArgs),

    /// Run a JSON file holding a calculator input or a full scenario
    File {
        path: PathBuf,
    },

    /// Print the effective engine settings as TOML
    Settings,
}

#[derive(Args, Debug, Clone)]
pub struct QuickArgs {
    /// Number of facilities in the network
    #[arg(long)]
    pub facilities: u32,

    /// Average trucks per facility per day
    #[arg(long)]
    pub trucks_per_day: f64,

    /// Average gate-in to gate-out dwell (minutes)
    #[arg(long, default_value = "110")]
    pub dwell_minutes: f64,

    /// Operating days per year (defaults to the settings value)
    #[arg(long)]
    pub days: Option<f64>,

    /// Fully-loaded annual cost per employee ($)
    #[arg(long, default_value = "65000")]
    pub fte_cost: f64,

    /// Freight cost per shipment ($)
    #[arg(long, default_value = "850")]
    pub cost_per_shipment: f64,

    /// Detention cost per hour ($)
    #[arg(long, default_value = "75")]
    pub detention_rate: f64,

    /// Incremental margin per extra truck ($)
    #[arg(long, default_value = "60")]
    pub margin_per_truck: f64,

    /// Severity table for the remaining assumptions
    #[arg(long, value_enum, default_value_t = Level::Expected)]
    pub scenario: Level,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Conservative,
    Expected,
    Upside,
}

impl From<Level> for ScenarioLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Conservative => ScenarioLevel::Conservative,
            Level::Expected => ScenarioLevel::Expected,
            Level::Upside => ScenarioLevel::Upside,
        }
    }
}

/// Scenario finance options; any of them switches on the finance block.
#[derive(Args, Debug, Clone, Default)]
pub struct FinanceArgs {
    /// Annual discount rate for NPV (e.g. 0.08)
    #[arg(long, global = true)]
    pub discount_rate: Option<f64>,

    /// Annual savings growth after year two (e.g. 0.03)
    #[arg(long, global = true)]
    pub growth_rate: Option<f64>,

    /// Contribution margin for equivalent-revenue conversion
    #[arg(long, global = true, conflicts_with = "outsourced_premium")]
    pub margin_share: Option<f64>,

    /// Outsourced provider premium over internal cost
    #[arg(long, global = true)]
    pub outsourced_premium: Option<f64>,
}

impl FinanceArgs {
    pub fn requested(&self) -> bool {
        self.discount_rate.is_some()
            || self.growth_rate.is_some()
            || self.margin_share.is_some()
            || self.outsourced_premium.is_some()
    }

    pub fn profit_method(&self) -> ProfitMethod {
        match (self.margin_share, self.outsourced_premium) {
            (_, Some(premium)) => ProfitMethod::CostDifferential {
                outsourced_premium_share: premium,
            },
            (Some(margin), None) => ProfitMethod::ContributionMargin { margin_share: margin },
            (None, None) => ProfitMethod::default(),
        }
    }
}

/// Downstream payload output.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Print the flattened PDF payload instead of the engine result
    #[arg(long, global = true, conflicts_with = "webhook_payload")]
    pub pdf_payload: bool,

    /// Print the lead webhook payload instead of the engine result
    #[arg(long, global = true)]
    pub webhook_payload: bool,

    /// Contact name for the webhook payload
    #[arg(long, global = true)]
    pub contact_name: Option<String>,

    /// Contact email for the webhook payload
    #[arg(long, global = true)]
    pub contact_email: Option<String>,

    /// Company for the webhook payload
    #[arg(long, global = true)]
    pub contact_company: Option<String>,
}

impl ReportArgs {
    pub fn contact(&self) -> ContactInfo {
        ContactInfo {
            name: self.contact_name.clone().unwrap_or_default(),
            email: self.contact_email.clone().unwrap_or_default(),
            company: self.contact_company.clone().unwrap_or_default(),
        }
    }
}
