//! # Economics Calculations
//!
//! Each stage of the model is its own module, leaves first:
//!
//! - [`tiers`] - Tier Aggregator (shipments, labor savings, shared context)
//! - [`detention`], [`paper`], [`shipper`], [`throughput`], [`add_ons`] -
//!   cost-category calculators, each `(inputs, &NetworkContext) -> $/yr`
//! - [`network`] - Network Effect Multiplier
//! - [`commercial`] - subscription and implementation pricing
//! - [`roi`] - the engine entry point, [`calculate`]
//! - [`scenario`] - ramp, payback, multi-year projection and the scenario wrapper
//!
//! Consumers should only call [`calculate`] or [`compose`]; the stage
//! functions are public for testing and audit, not for re-assembling the
//! model elsewhere.

pub mod add_ons;
pub mod commercial;
pub mod detention;
pub mod network;
pub mod paper;
pub mod roi;
pub mod scenario;
pub mod shipper;
pub mod throughput;
pub mod tiers;

// Re-export commonly used types
pub use roi::{calculate, AssumptionsUsed, RoiOutcome, SavingsBreakdown};
pub use scenario::{compose, FinanceBlock, ProfitMethod, Scenario, ScenarioOutcome, YearProjection};
pub use tiers::{NetworkContext, TierBreakdown};
