//! Periodic tick loop that broadcasts reports to subscribers.

use super::engine::{ChainEngine, EngineConfig};
use super::feed::ChainFeed;
use super::report::TickReport;
use crate::error::EngineError;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Counters returned when a stream ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Ticks turned into reports and broadcast.
    pub ticks_published: u64,
    /// Ticks dropped because the feed or the engine failed.
    pub ticks_skipped: u64,
}

/// Drives a [`ChainFeed`] through a [`ChainEngine`] on a fixed cadence.
///
/// Every tick is pulled, solved and scanned as a single unit before being
/// broadcast, so subscribers only ever see complete reports.
pub struct TickStreamer<F> {
    engine: ChainEngine,
    feed: F,
    sender: broadcast::Sender<TickReport>,
    interval: Duration,
    max_ticks: Option<u64>,
}

impl<F> TickStreamer<F>
where
    F: ChainFeed + Send,
{
    /// Creates a streamer from a validated configuration.
    pub fn new(config: EngineConfig, feed: F) -> Result<Self, EngineError> {
        let interval = config.tick_interval();
        let max_ticks = config.max_ticks;
        let capacity = config.broadcast_capacity;
        let engine = ChainEngine::new(config)?;
        let (sender, _) = broadcast::channel(capacity);

        Ok(Self {
            engine,
            feed,
            sender,
            interval,
            max_ticks,
        })
    }

    /// Registers a new subscriber. Reports sent before subscribing are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<TickReport> {
        self.sender.subscribe()
    }

    /// Runs until shutdown is signalled, the feed is exhausted, or
    /// `max_ticks` ticks have been attempted.
    ///
    /// Shutdown is requested by sending `true` on the watch channel or by
    /// dropping its sender. Feed and engine errors skip the tick; only
    /// [`EngineError::FeedExhausted`] ends the stream early.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> StreamSummary {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut summary = StreamSummary::default();
        info!("Tick streamer started, interval {:?}", self.interval);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Tick streamer shutdown requested");
                        break;
                    }
                }
                _ = ticker.tick() => {
                    match self.step() {
                        Ok(()) => summary.ticks_published += 1,
                        Err(EngineError::FeedExhausted) => {
                            info!("Feed exhausted");
                            break;
                        }
                        Err(err) => {
                            warn!("Skipping tick: {}", err);
                            summary.ticks_skipped += 1;
                        }
                    }

                    let attempted = summary.ticks_published + summary.ticks_skipped;
                    if self.max_ticks.is_some_and(|max| attempted >= max) {
                        info!("Reached max ticks: {}", attempted);
                        break;
                    }
                }
            }
        }

        info!(
            "Tick streamer stopped: {} published, {} skipped",
            summary.ticks_published, summary.ticks_skipped
        );
        summary
    }

    fn step(&mut self) -> Result<(), EngineError> {
        let quotes = self.feed.next_tick()?;
        let report = self.engine.process_tick(&quotes)?;

        let sequence = report.sequence;
        match self.sender.send(report) {
            Ok(receivers) => debug!("Report {} sent to {} subscribers", sequence, receivers),
            Err(_) => debug!("Report {} dropped, no subscribers", sequence),
        }
        Ok(())
    }
}
