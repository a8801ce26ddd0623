//! Implied volatility calculation from quoted option prices.
//!
//! Implied Volatility (IV) is the option's price translated into different
//! units: the volatility that makes the Black-Scholes value match the
//! observed market price.
//!
//! # Black-Scholes Inversion
//!
//! There is no analytical inverse, so the solver runs Newton-Raphson from a
//! fixed initial guess, using vega (∂price/∂σ) as the derivative. Every
//! solve is independent of every other one, so a chain can be solved in any
//! order (or in parallel) with identical results.
//!
//! # Degraded results
//!
//! A solve that stalls on zero vega or exhausts its iteration budget still
//! yields a usable, bounded estimate. The [`SolveStatus`] on the returned
//! [`VolatilitySolution`] tells the caller which case occurred.

mod solver;
mod types;

pub use solver::{SolverConfig, solve, solve_quote};
pub use types::{SolveStatus, VolatilitySolution};
