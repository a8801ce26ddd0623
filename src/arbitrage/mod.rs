//! Chain-level arbitrage detection.
//!
//! For calls at a single expiry, no-arbitrage requires the price to be
//! non-increasing in strike. The scanner flags every adjacent pair of
//! strikes that breaks this ordering. It is a single-signal heuristic: it
//! does not check butterfly convexity or calendar spreads.

mod scanner;

pub use scanner::{Anomaly, AnomalyKind, ChainRecord, scan, scan_by_expiry};
