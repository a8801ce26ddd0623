//! # volscan-rs
//!
//! Prices vanilla European options, recovers implied volatility from quoted
//! prices and scans quoted call chains for strike monotonicity arbitrage.
//!
//! ## Components
//!
//! - [`pricing`]: standard normal CDF/PDF, Black-Scholes fair value and vega.
//! - [`implied_volatility`]: Newton-Raphson inversion of price to volatility,
//!   returning the estimate together with a convergence status.
//! - [`arbitrage`]: detection of higher strikes priced above lower strikes
//!   within one expiry.
//! - [`chain`]: tick orchestration. Feeds produce chain snapshots, the engine
//!   turns each snapshot into a report, the streamer broadcasts reports on a
//!   fixed cadence.
//!
//! The numerical core is pure and synchronous: every call is a deterministic
//! function of its inputs and no state is shared between calls.
//!
//! ## Example
//!
//! ```
//! use volscan_rs::prelude::*;
//!
//! let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);
//! let market_price = BlackScholes::price(&params, 0.25);
//!
//! let solution = solve(&params, market_price, &SolverConfig::default()).unwrap();
//! assert_eq!(solution.status, SolveStatus::Converged);
//!
//! let anomalies = scan(&[(100.0, 10.0), (110.0, 12.0)]);
//! assert_eq!(anomalies.len(), 1);
//! assert_eq!(anomalies[0].strike, 110.0);
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - Price American or early-exercise options
//! - Model dividends
//! - Calibrate a full volatility surface (SVI, SABR, ...)
//! - Persist quotes or reports

pub mod arbitrage;
pub mod chain;
/// Crate-level error type for orchestration and transport.
pub mod error;
pub mod implied_volatility;
pub mod pricing;
mod utils;

pub use error::EngineError;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::arbitrage::{Anomaly, AnomalyKind, ChainRecord, scan, scan_by_expiry};
    pub use crate::chain::{
        ChainEngine, ChainFeed, EngineConfig, MarketSimulator, ReplayFeed, SimulatorConfig,
        StreamSummary, SurfacePayload, SurfacePoint, TickReport, TickReportPackage, TickStreamer,
    };
    pub use crate::error::EngineError;
    pub use crate::implied_volatility::{
        SolveStatus, SolverConfig, VolatilitySolution, solve, solve_quote,
    };
    pub use crate::pricing::{
        BlackScholes, OptionParams, OptionQuote, OptionSide, PricingError, PricingResult,
    };
}
