//! # Network Effect Multiplier
//!
//! Metcalfe-style scaling of base savings by pairwise facility connections,
//! damped by a maturity curve so quadratic connection growth cannot run away.
//!
//! ## Formulas
//!
//! ```text
//! connections(n)  = n·(n − 1) / 2
//! baseline        = 10·9 / 2 = 45
//! realization(n)  = 1 − e^(−n/τ)
//! multiplier      = max(1, 1 + β · connections(n) · realization(n))
//! ```
//!
//! `n ≤ 1` yields exactly 1 (no network with a single node). A non-positive
//! τ means the network never matures, so realization is zero. An overflowing
//! multiplier saturates at `f64::MAX` so it stays non-decreasing in `n`.
//!
//! ## Example
//!
//! ```rust
//! use roi_core::calculations::network::network_effect;
//! use roi_core::inputs::NetworkParameters;
//!
//! let effect = network_effect(50, &NetworkParameters::default());
//! assert_eq!(effect.connections, 1225.0);
//! assert!(effect.multiplier > 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::BASELINE_CONNECTIONS;
use crate::inputs::NetworkParameters;
use crate::numeric::saturate;

/// Network-effect figures for a facility count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkEffect {
    pub facilities: u32,
    pub connections: f64,
    pub baseline_connections: f64,
    pub realization: f64,
    pub multiplier: f64,
}

impl NetworkEffect {
    /// Savings added on top of `base_savings` by the network effect
    pub fn bonus(&self, base_savings: f64) -> f64 {
        saturate(base_savings * (self.multiplier - 1.0))
    }

    /// `base_savings` scaled by the multiplier
    pub fn apply(&self, base_savings: f64) -> f64 {
        saturate(base_savings * self.multiplier)
    }
}

/// Pairwise connections among `n` facilities
pub fn connections(n: u32) -> f64 {
    let n = n as f64;
    n * (n - 1.0) / 2.0
}

/// Maturity curve `1 − e^(−n/τ)`, in `[0, 1)`
pub fn realization(n: u32, tau: f64) -> f64 {
    if tau <= 0.0 || !tau.is_finite() {
        return 0.0;
    }
    1.0 - (-(n as f64) / tau).exp()
}

/// Compute the network effect for `facilities` facilities.
pub fn network_effect(facilities: u32, params: &NetworkParameters) -> NetworkEffect {
    let connections = connections(facilities);
    let realization = realization(facilities, params.tau);

    let multiplier = if facilities <= 1 {
        1.0
    } else {
        saturate(1.0 + params.beta * connections * realization).max(1.0)
    };

    NetworkEffect {
        facilities,
        connections,
        baseline_connections: BASELINE_CONNECTIONS,
        realization,
        multiplier,
    }
}
