//! Strike-monotonicity scanner for call price ladders.

use crate::pricing::{OptionQuote, OptionSide};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Anything that carries a strike and a price.
pub trait ChainRecord {
    /// Strike price.
    fn strike(&self) -> f64;
    /// Quoted or computed option price.
    fn price(&self) -> f64;
}

impl ChainRecord for OptionQuote {
    fn strike(&self) -> f64 {
        self.strike
    }

    fn price(&self) -> f64 {
        self.market_price
    }
}

/// `(strike, price)` pair.
impl ChainRecord for (f64, f64) {
    fn strike(&self) -> f64 {
        self.0
    }

    fn price(&self) -> f64 {
        self.1
    }
}

impl<R: ChainRecord + ?Sized> ChainRecord for &R {
    fn strike(&self) -> f64 {
        (**self).strike()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }
}

/// Classification of a detected anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyKind {
    /// A higher strike call priced above a lower strike call.
    #[serde(rename = "Monotonicity Violation")]
    MonotonicityViolation,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::MonotonicityViolation => write!(f, "Monotonicity Violation"),
        }
    }
}

/// A violation found between two adjacent strikes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Classification tag.
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    /// Strike of the record that broke the ordering.
    pub strike: f64,
    /// Price of the record that broke the ordering.
    pub price: f64,
    /// Human-readable description naming both strikes.
    pub details: String,
}

/// Scans a same-expiry call ladder for strike monotonicity violations.
///
/// Records are visited in ascending strike order (stable for equal strikes);
/// the caller's slice is left untouched. Every adjacent pair where the
/// higher strike is strictly more expensive yields one [`Anomaly`] for the
/// higher strike. Empty and single-record chains yield nothing.
///
/// All records are assumed to share an expiry and to be calls. Mixing
/// expiries produces spurious violations; see [`scan_by_expiry`].
#[must_use]
pub fn scan<R: ChainRecord>(chain: &[R]) -> Vec<Anomaly> {
    let mut ladder: Vec<&R> = chain.iter().collect();
    ladder.sort_by(|a, b| a.strike().total_cmp(&b.strike()));

    let anomalies: Vec<Anomaly> = ladder
        .windows(2)
        .filter_map(|pair| {
            let (prev, curr) = (pair[0], pair[1]);
            if curr.price() > prev.price() {
                trace!(
                    "monotonicity violation: {}@{} above {}@{}",
                    curr.strike(),
                    curr.price(),
                    prev.strike(),
                    prev.price()
                );
                Some(Anomaly {
                    kind: AnomalyKind::MonotonicityViolation,
                    strike: curr.strike(),
                    price: curr.price(),
                    details: format!(
                        "Strike {:?} > Strike {:?}",
                        curr.strike(),
                        prev.strike()
                    ),
                })
            } else {
                None
            }
        })
        .collect();

    debug!(
        "scanned {} records, {} anomalies",
        chain.len(),
        anomalies.len()
    );
    anomalies
}

/// Partitions a mixed chain by expiry and scans each call ladder.
///
/// Puts are ignored. Results are concatenated in ascending expiry order.
#[must_use]
pub fn scan_by_expiry(quotes: &[OptionQuote]) -> Vec<Anomaly> {
    let mut calls: Vec<&OptionQuote> = quotes
        .iter()
        .filter(|quote| quote.side == OptionSide::Call)
        .collect();
    calls.sort_by(|a, b| a.expiry_days.total_cmp(&b.expiry_days));

    calls
        .chunk_by(|a, b| a.expiry_days == b.expiry_days)
        .flat_map(|ladder| scan(ladder))
        .collect()
}
