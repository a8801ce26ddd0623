//! Turns one chain snapshot into one [`TickReport`].

use super::report::{SurfacePoint, TickReport};
use crate::arbitrage::scan_by_expiry;
use crate::error::EngineError;
use crate::implied_volatility::{SolverConfig, solve_quote};
use crate::pricing::{OptionQuote, PricingError};
use crate::utils::current_time_millis;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the chain engine and the tick streamer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Solver settings applied to every quote.
    pub solver: SolverConfig,
    /// Cadence of the streamer in milliseconds (default: 500).
    pub tick_interval_ms: u64,
    /// Stop streaming after this many ticks; `None` streams until shutdown.
    pub max_ticks: Option<u64>,
    /// Reports buffered per subscriber before slow receivers lag (default: 64).
    pub broadcast_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            tick_interval_ms: 500,
            max_ticks: None,
            broadcast_capacity: 64,
        }
    }
}

impl EngineConfig {
    /// Creates a new engine configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the streaming cadence.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Limits the number of ticks streamed.
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Sets the per-subscriber broadcast buffer.
    #[must_use]
    pub fn with_broadcast_capacity(mut self, broadcast_capacity: usize) -> Self {
        self.broadcast_capacity = broadcast_capacity;
        self
    }

    /// Streaming cadence as a [`Duration`].
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Loads a configuration from JSON; missing fields take their defaults.
    pub fn from_json(data: &str) -> Result<Self, EngineError> {
        let config: Self =
            serde_json::from_str(data).map_err(|error| EngineError::DeserializationError {
                message: error.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates solver and streaming settings.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.solver.validate()?;

        if self.tick_interval_ms == 0 {
            return Err(EngineError::InvalidConfig {
                message: "tick_interval_ms must be positive".to_string(),
            });
        }

        if self.broadcast_capacity == 0 {
            return Err(EngineError::InvalidConfig {
                message: "broadcast_capacity must be positive".to_string(),
            });
        }

        Ok(())
    }
}

/// Solves and scans whole chain snapshots.
///
/// The engine keeps no numerical state between ticks; only the sequence
/// counter advances. A tick is processed synchronously as one unit, so a
/// cancelled caller never observes a partially solved chain.
#[derive(Debug)]
pub struct ChainEngine {
    config: EngineConfig,
    sequence: u64,
}

impl ChainEngine {
    /// Creates an engine after validating its configuration.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            sequence: 0,
        })
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of ticks processed so far.
    pub fn ticks_processed(&self) -> u64 {
        self.sequence
    }

    /// Solves every quote at its own side and scans each expiry's call ladder.
    ///
    /// Quotes failing domain validation are logged, counted in
    /// `TickReport::rejected`, and excluded from both the surface and the scan.
    /// The report spot comes from the first accepted quote. A tick with no
    /// accepted quotes is [`EngineError::EmptyChain`] and does not advance
    /// the sequence.
    pub fn process_tick(&mut self, quotes: &[OptionQuote]) -> Result<TickReport, EngineError> {
        if quotes.is_empty() {
            return Err(EngineError::EmptyChain);
        }

        let mut points = Vec::with_capacity(quotes.len());
        let mut accepted = Vec::with_capacity(quotes.len());
        let mut rejected = 0;

        for quote in quotes {
            match solve_quote(quote, &self.config.solver) {
                Ok(solution) => {
                    points.push(SurfacePoint {
                        strike: quote.strike,
                        expiry_days: quote.expiry_days,
                        side: quote.side,
                        volatility: solution.volatility,
                        status: solution.status,
                    });
                    accepted.push(*quote);
                }
                Err(PricingError::InvalidQuoteDomain { field, value }) => {
                    warn!(
                        "rejecting quote strike={} expiry={}: {} = {}",
                        quote.strike, quote.expiry_days, field, value
                    );
                    rejected += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }

        let Some(spot) = accepted.first().map(|quote| quote.spot) else {
            warn!("all {} quotes rejected, dropping tick", rejected);
            return Err(EngineError::EmptyChain);
        };

        let anomalies = scan_by_expiry(&accepted);

        self.sequence += 1;
        let report = TickReport {
            sequence: self.sequence,
            timestamp: current_time_millis(),
            spot,
            points,
            anomalies,
            rejected,
        };

        debug!(
            "tick {}: {} points ({} converged), {} anomalies, {} rejected",
            report.sequence,
            report.points.len(),
            report.converged_count(),
            report.anomalies.len(),
            report.rejected
        );

        Ok(report)
    }
}
