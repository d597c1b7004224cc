//! # Engine Settings
//!
//! Deployment tunables loaded from TOML. Anything omitted falls back to the
//! compiled-in defaults, so an empty file is a valid configuration.
//!
//! ## Example
//!
//! ```rust
//! use roi_core::settings::EngineSettings;
//!
//! let settings = EngineSettings::from_toml_str(r#"
//!     [network]
//!     beta = 0.02
//!
//!     [commercial]
//!     annual_subscription_per_facility = 15000.0
//! "#).unwrap();
//!
//! assert_eq!(settings.network.beta, 0.02);
//! assert_eq!(settings.network.tau, 50.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OPERATING_DAYS;
use crate::errors::{RoiError, RoiResult};
use crate::inputs::{CommercialParameters, NetworkParameters, RoiInputs};
use crate::presets::default_commercial;

/// Quick-mode defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickSettings {
    /// Operating days assumed when a quick-mode input does not give one
    pub operating_days_per_year: f64,
}

impl Default for QuickSettings {
    fn default() -> Self {
        QuickSettings {
            operating_days_per_year: DEFAULT_OPERATING_DAYS,
        }
    }
}

/// Engine-wide tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub network: NetworkParameters,
    pub commercial: CommercialParameters,
    pub quick: QuickSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            network: NetworkParameters::default(),
            commercial: default_commercial(),
            quick: QuickSettings::default(),
        }
    }
}

impl EngineSettings {
    /// Parse settings from a TOML string.
    pub fn from_toml_str(text: &str) -> RoiResult<Self> {
        let settings: EngineSettings = toml::from_str(text).map_err(|e| RoiError::settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> RoiResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| RoiError::settings(format!("cannot read '{}': {}", path.display(), e)))?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded engine settings");
        Ok(settings)
    }

    /// Reject negative or non-finite tunables.
    pub fn validate(&self) -> RoiResult<()> {
        let fields = [
            ("network.beta", self.network.beta),
            ("network.tau", self.network.tau),
            ("commercial.implementation_base_cost", self.commercial.implementation_base_cost),
            ("commercial.implementation_cost_per_facility", self.commercial.implementation_cost_per_facility),
            ("commercial.annual_subscription_per_facility", self.commercial.annual_subscription_per_facility),
            ("quick.operating_days_per_year", self.quick.operating_days_per_year),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RoiError::invalid_input(field, value.to_string(), "Setting must be finite and non-negative"));
            }
        }
        if self.quick.operating_days_per_year > 366.0 {
            return Err(RoiError::invalid_input(
                "quick.operating_days_per_year",
                self.quick.operating_days_per_year.to_string(),
                "Operating days cannot exceed 366",
            ));
        }
        Ok(())
    }

    /// Overwrite the network and commercial blocks of `inputs`.
    pub fn apply(&self, inputs: &mut RoiInputs) {
        inputs.network = self.network;
        inputs.commercial = self.commercial;
    }

    /// Render as TOML (for `roi settings` and documentation)
    pub fn to_toml_string(&self) -> RoiResult<String> {
        toml::to_string_pretty(self).map_err(|e| RoiError::settings(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let settings = EngineSettings::from_toml_str("").unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = EngineSettings::from_toml_str(
            r#"
            [network]
            tau = 25.0

            [quick]
            operating_days_per_year = 300.0
            "#,
        )
        .unwrap();
        assert_eq!(settings.network.tau, 25.0);
        assert_eq!(settings.network.beta, 0.025);
        assert_eq!(settings.quick.operating_days_per_year, 300.0);
        assert_eq!(settings.commercial, default_commercial());
    }

    #[test]
    fn test_invalid_toml() {
        let err = EngineSettings::from_toml_str("[network\nbeta = ").unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");
    }

    #[test]
    fn test_negative_setting_rejected() {
        let err = EngineSettings::from_toml_str("[commercial]\nimplementation_base_cost = -1.0").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_apply_overrides_pricing() {
        let mut settings = EngineSettings::default();
        settings.commercial.annual_subscription_per_facility = 99.0;
        let mut inputs = RoiInputs::default();
        settings.apply(&mut inputs);
        assert_eq!(inputs.commercial.annual_subscription_per_facility, 99.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let text = EngineSettings::default().to_toml_string().unwrap();
        assert_eq!(EngineSettings::from_toml_str(&text).unwrap(), EngineSettings::default());
    }
}
