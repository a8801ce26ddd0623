//! Types for implied volatility results.

use serde::{Deserialize, Serialize};

/// How a solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Model price matched the market price within tolerance.
    Converged,
    /// Vega vanished (or was undefined) so no Newton step could be taken.
    StalledOnZeroVega,
    /// The iteration budget ran out before the tolerance was met.
    IterationsExhausted,
}

/// Implied volatility for one quote together with how it was obtained.
///
/// The volatility is always the solver's best estimate and always lies in
/// `(0, max_volatility]`, whatever the status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilitySolution {
    /// Implied volatility estimate (e.g., 0.25 = 25%).
    pub volatility: f64,
    /// Termination status.
    pub status: SolveStatus,
    /// Newton iterations attempted, never more than `max_iterations`.
    pub iterations: u32,
    /// Market price minus model price at `volatility`.
    pub residual: f64,
}

impl VolatilitySolution {
    /// Returns true if the solve met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }

    /// Returns the volatility as a percentage (e.g., 25.0 for 25%).
    #[must_use]
    pub fn volatility_percent(&self) -> f64 {
        self.volatility * 100.0
    }
}
