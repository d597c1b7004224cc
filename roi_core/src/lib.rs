//! # roi_core - Yard-Logistics Economics Engine
//!
//! `roi_core` converts operator facility parameters into annual savings,
//! network-effect bonuses, payback and multi-year value. The interactive
//! calculator, the PDF export and the lead webhook all call this one crate,
//! so a given input produces the same figures everywhere.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`calculate`] is a pure function from inputs to outcome
//! - **Never NaN**: divisions are guarded; "never pays back" is `None`
//! - **JSON-First**: every input and output type implements Serialize/Deserialize
//! - **One canonical shape**: quick-mode and preset inputs are normalized
//!   into [`RoiInputs`] before any calculator sees them
//!
//! ## Quick Start
//!
//! ```rust
//! use roi_core::quick::{normalize, CalculatorInput};
//! use roi_core::calculate;
//!
//! let input: CalculatorInput = serde_json::from_str(
//!     r#"{ "mode": "preset", "network": "regional_10", "scenario": "expected" }"#,
//! ).unwrap();
//!
//! let inputs = normalize(&input).unwrap();
//! let result = calculate(&inputs);
//! assert_eq!(result.total_facilities, 10);
//! ```
//!
//! ## Modules
//!
//! - [`inputs`] - Detailed input data model and validation
//! - [`quick`] - Quick/detailed/preset input modes and normalization
//! - [`presets`] - Named network × scenario input tables
//! - [`calculations`] - Tier aggregation, cost categories, network effect, scenarios
//! - [`report`] - PDF and webhook payloads
//! - [`settings`] - TOML-configurable tunables
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod inputs;
pub mod numeric;
pub mod presets;
pub mod quick;
pub mod report;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, compose, RoiOutcome, Scenario, ScenarioOutcome};
pub use errors::{RoiError, RoiResult};
pub use inputs::{RoiInputs, TierKey};
pub use quick::{normalize, CalculatorInput, QuickInputs};
pub use settings::EngineSettings;
