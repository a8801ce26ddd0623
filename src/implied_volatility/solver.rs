//! Newton-Raphson solver for implied volatility calculation.
//!
//! Each solve is local and stateless: it always starts from the configured
//! initial guess and never looks at neighbouring strikes.

use super::types::{SolveStatus, VolatilitySolution};
use crate::pricing::{BlackScholes, OptionParams, OptionQuote, PricingError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Starting volatility for every solve (default: 0.5 = 50%).
    pub initial_guess: f64,
    /// Convergence tolerance on the absolute price difference (default: 1e-5).
    pub tolerance: f64,
    /// Maximum Newton iterations before giving up (default: 100).
    pub max_iterations: u32,
    /// Value a non-positive Newton step is reset to (default: 0.01).
    pub min_volatility: f64,
    /// Upper clamp applied after every step (default: 5.0).
    pub max_volatility: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.5,
            tolerance: 1e-5,
            max_iterations: 100,
            min_volatility: 0.01,
            max_volatility: 5.0,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the initial volatility guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the clamp bounds.
    #[must_use]
    pub fn with_bounds(mut self, min_volatility: f64, max_volatility: f64) -> Self {
        self.min_volatility = min_volatility;
        self.max_volatility = max_volatility;
        self
    }

    /// Checks that the settings keep every solve inside `(0, max_volatility]`.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(PricingError::InvalidConfig {
                message: format!("tolerance must be positive, got {}", self.tolerance),
            });
        }

        if self.max_iterations == 0 {
            return Err(PricingError::InvalidConfig {
                message: "max_iterations must be at least 1".to_string(),
            });
        }

        if !(self.min_volatility.is_finite() && self.min_volatility > 0.0) {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "min_volatility must be positive, got {}",
                    self.min_volatility
                ),
            });
        }

        if !(self.max_volatility.is_finite() && self.max_volatility >= self.min_volatility) {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "max_volatility must be finite and >= min_volatility, got [{}, {}]",
                    self.min_volatility, self.max_volatility
                ),
            });
        }

        if !(self.initial_guess > 0.0 && self.initial_guess <= self.max_volatility) {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "initial_guess must lie in (0, {}], got {}",
                    self.max_volatility, self.initial_guess
                ),
            });
        }

        Ok(())
    }

    fn clamp(&self, vol: f64) -> f64 {
        if vol.is_nan() || vol <= 0.0 {
            self.min_volatility
        } else if vol > self.max_volatility {
            self.max_volatility
        } else {
            vol
        }
    }
}

/// Solves for implied volatility using Newton-Raphson.
///
/// σ_{n+1} = σ_n + (market_price - BS(σ_n)) / vega(σ_n)
///
/// After every step the estimate is reset to `min_volatility` if it went
/// non-positive and capped at `max_volatility`. Running out of iterations or
/// hitting a zero vega is not an error: the last estimate is returned with
/// the matching [`SolveStatus`].
///
/// # Errors
/// - `PricingError::InvalidQuoteDomain` if spot/strike are non-positive, any
///   input is non-finite, or the market price is negative.
/// - `PricingError::InvalidConfig` if `config` fails validation.
///
/// # Example
/// ```
/// use volscan_rs::implied_volatility::{SolverConfig, solve};
/// use volscan_rs::pricing::{BlackScholes, OptionParams};
///
/// let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);
/// let market_price = BlackScholes::price(&params, 0.3);
///
/// let solution = solve(&params, market_price, &SolverConfig::default()).unwrap();
/// assert!(solution.is_converged());
/// assert!((solution.volatility - 0.3).abs() < 1e-3);
/// ```
pub fn solve(
    params: &OptionParams,
    market_price: f64,
    config: &SolverConfig,
) -> Result<VolatilitySolution, PricingError> {
    config.validate()?;
    params.validate()?;

    if !market_price.is_finite() || market_price < 0.0 {
        return Err(PricingError::InvalidQuoteDomain {
            field: "market_price",
            value: market_price,
        });
    }

    let mut vol = config.initial_guess;

    for iteration in 0..config.max_iterations {
        let model_price = BlackScholes::price(params, vol);
        let diff = market_price - model_price;

        if diff.abs() < config.tolerance {
            debug!(
                "iv converged: strike={} vol={:.6} iterations={}",
                params.strike,
                vol,
                iteration + 1
            );
            return Ok(VolatilitySolution {
                volatility: vol,
                status: SolveStatus::Converged,
                iterations: iteration + 1,
                residual: diff,
            });
        }

        let vega = BlackScholes::vega(params, vol);

        // NaN vega appears when time_to_expiry <= 0 leaves d1 undefined
        if vega == 0.0 || !vega.is_finite() {
            debug!(
                "iv stalled on zero vega: strike={} vol={:.6} diff={:.6}",
                params.strike, vol, diff
            );
            return Ok(VolatilitySolution {
                volatility: vol,
                status: SolveStatus::StalledOnZeroVega,
                iterations: iteration + 1,
                residual: diff,
            });
        }

        vol = config.clamp(vol + diff / vega);
        trace!(
            "iv step {}: diff={:.6} vega={:.6} vol={:.6}",
            iteration, diff, vega, vol
        );
    }

    let residual = market_price - BlackScholes::price(params, vol);
    debug!(
        "iv exhausted {} iterations: strike={} vol={:.6} residual={:.6}",
        config.max_iterations, params.strike, vol, residual
    );

    Ok(VolatilitySolution {
        volatility: vol,
        status: SolveStatus::IterationsExhausted,
        iterations: config.max_iterations,
        residual,
    })
}

/// Solves the implied volatility of a quote at its own side and price.
pub fn solve_quote(
    quote: &OptionQuote,
    config: &SolverConfig,
) -> Result<VolatilitySolution, PricingError> {
    solve(&quote.params(), quote.market_price, config)
}
