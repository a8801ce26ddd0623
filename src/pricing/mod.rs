//! Closed-form option pricing.
//!
//! Provides the standard normal primitives, the Black-Scholes fair value and
//! vega, and the quote types shared by the solver and the scanner.
//!
//! # Degenerate inputs
//!
//! A quote with no time left, or priced at zero volatility, has no time
//! value. [`BlackScholes::price`] returns the undiscounted intrinsic value
//! `max(0, (S - K) * sign)` in that case instead of evaluating the formula.
//!
//! # Example
//!
//! ```
//! use volscan_rs::pricing::{BlackScholes, OptionParams};
//!
//! let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);
//! let price = BlackScholes::price(&params, 0.2);
//! assert!((price - 10.45).abs() < 0.01);
//! ```

mod black_scholes;
mod error;
mod types;

pub use black_scholes::BlackScholes;
pub use error::PricingError;
pub use types::{OptionParams, OptionQuote, OptionSide, PricingResult};
