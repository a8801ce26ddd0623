//! Black-Scholes pricing model and vega.
//!
//! Closed-form European pricing without dividends, plus the standard normal
//! primitives it is built on.

use super::error::PricingError;
use super::types::{OptionParams, OptionSide, PricingResult};
use std::f64::consts::PI;
use tracing::trace;

/// Square root of 2, precomputed for efficiency.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Black-Scholes pricing model implementation.
pub struct BlackScholes;

impl BlackScholes {
    /// Approximation of the error function (erf).
    ///
    /// Uses Abramowitz and Stegun approximation (formula 7.1.26)
    /// with maximum error of 1.5×10⁻⁷.
    #[must_use]
    pub fn erf(x: f64) -> f64 {
        const A1: f64 = 0.254829592;
        const A2: f64 = -0.284496736;
        const A3: f64 = 1.421413741;
        const A4: f64 = -1.453152027;
        const A5: f64 = 1.061405429;
        const P: f64 = 0.3275911;

        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        let x = x.abs();

        let t = 1.0 / (1.0 + P * x);
        let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

        sign * y
    }

    /// Standard normal cumulative distribution function.
    ///
    /// Φ(x) = 0.5·(1 + erf(x/√2)), always within `[0, 1]`.
    #[must_use]
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * (1.0 + Self::erf(x / SQRT_2))
    }

    /// Standard normal probability density function.
    ///
    /// φ(x) = e^(−x²/2) / √(2π)
    #[must_use]
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    #[must_use]
    pub fn d1(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> f64 {
        let sqrt_time = time.sqrt();
        ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * sqrt_time)
    }

    /// d2 = d1 - σ√T
    #[must_use]
    pub fn d2(d1: f64, vol: f64, time: f64) -> f64 {
        d1 - vol * time.sqrt()
    }

    /// Calculates the theoretical option price.
    ///
    /// For calls: C = S·N(d1) - K·e^(-rT)·N(d2)
    /// For puts:  P = K·e^(-rT)·N(-d2) - S·N(-d1)
    ///
    /// When `time_to_expiry <= 0` or `vol <= 0` the option carries no time
    /// value and the undiscounted intrinsic value is returned instead.
    ///
    /// Spot and strike are not validated here; a non-positive strike
    /// yields NaN. Use [`BlackScholes::checked_price`] for untrusted input.
    #[must_use]
    pub fn price(params: &OptionParams, vol: f64) -> f64 {
        if params.time_to_expiry <= 0.0 || vol <= 0.0 {
            return params.intrinsic_value();
        }

        let d1 = Self::d1(
            params.spot,
            params.strike,
            params.risk_free_rate,
            params.time_to_expiry,
            vol,
        );
        let d2 = Self::d2(d1, vol, params.time_to_expiry);
        let discount = (-params.risk_free_rate * params.time_to_expiry).exp();

        let value = match params.side {
            OptionSide::Call => {
                params.spot * Self::norm_cdf(d1) - params.strike * discount * Self::norm_cdf(d2)
            }
            OptionSide::Put => {
                params.strike * discount * Self::norm_cdf(-d2) - params.spot * Self::norm_cdf(-d1)
            }
        };
        trace!("price: d1={:.6} d2={:.6} value={:.6}", d1, d2, value);

        // erf approximation error can push far out-of-the-money values a hair below zero.
        // NaN from an invalid domain is passed through untouched.
        if value < 0.0 { 0.0 } else { value }
    }

    /// Validates the parameters, then prices them.
    pub fn checked_price(params: &OptionParams, vol: f64) -> Result<PricingResult, PricingError> {
        params.validate()?;
        if vol.is_nan() {
            return Err(PricingError::InvalidQuoteDomain {
                field: "volatility",
                value: vol,
            });
        }

        Ok(PricingResult {
            fair_value: Self::price(params, vol),
            volatility: vol,
        })
    }

    /// Calculates vega (∂price/∂σ).
    ///
    /// Vega = S · N'(d1) · √T, identical for calls and puts.
    ///
    /// Only meaningful for `time_to_expiry > 0` and `vol > 0`; outside that
    /// range the result may be zero or NaN.
    #[must_use]
    pub fn vega(params: &OptionParams, vol: f64) -> f64 {
        let d1 = Self::d1(
            params.spot,
            params.strike,
            params.risk_free_rate,
            params.time_to_expiry,
            vol,
        );
        params.spot * params.time_to_expiry.sqrt() * Self::norm_pdf(d1)
    }
}
