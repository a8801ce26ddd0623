//! Sources of option chain snapshots.

use crate::error::EngineError;
use crate::pricing::OptionQuote;
use std::collections::VecDeque;
use tracing::trace;

/// Produces one option chain snapshot per call.
///
/// Implementations are polled from the streamer's task, so `next_tick`
/// should return promptly. Returning [`EngineError::FeedExhausted`] ends the
/// stream; any other error skips the tick.
pub trait ChainFeed {
    /// Returns the quotes of the next tick.
    fn next_tick(&mut self) -> Result<Vec<OptionQuote>, EngineError>;
}

/// Replays a fixed sequence of recorded ticks.
#[derive(Debug, Clone, Default)]
pub struct ReplayFeed {
    ticks: VecDeque<Vec<OptionQuote>>,
}

impl ReplayFeed {
    /// Creates a feed that yields `ticks` in order.
    pub fn new(ticks: impl IntoIterator<Item = Vec<OptionQuote>>) -> Self {
        Self {
            ticks: ticks.into_iter().collect(),
        }
    }

    /// Loads ticks from a JSON array of quote arrays.
    pub fn from_json(data: &str) -> Result<Self, EngineError> {
        let ticks: Vec<Vec<OptionQuote>> =
            serde_json::from_str(data).map_err(|error| EngineError::DeserializationError {
                message: error.to_string(),
            })?;
        Ok(Self::new(ticks))
    }

    /// Ticks left to replay.
    pub fn remaining(&self) -> usize {
        self.ticks.len()
    }
}

impl ChainFeed for ReplayFeed {
    fn next_tick(&mut self) -> Result<Vec<OptionQuote>, EngineError> {
        let tick = self.ticks.pop_front().ok_or(EngineError::FeedExhausted)?;
        trace!("replaying tick with {} quotes, {} left", tick.len(), self.ticks.len());
        Ok(tick)
    }
}
