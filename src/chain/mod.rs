//! Tick orchestration around the pricing core.
//!
//! A feed produces one chain snapshot per tick; the engine solves every
//! quote and scans each expiry's call ladder; the streamer repeats this on a
//! fixed cadence and broadcasts the resulting reports.
//!
//! # Example
//!
//! ```
//! use volscan_rs::chain::{ChainEngine, EngineConfig, MarketSimulator, SimulatorConfig};
//!
//! let mut feed = MarketSimulator::new(SimulatorConfig::new().with_seed(1)).unwrap();
//! let mut engine = ChainEngine::new(EngineConfig::default()).unwrap();
//!
//! let report = engine.process_tick(&feed.generate_tick()).unwrap();
//! assert_eq!(report.points.len(), 80);
//! ```

mod engine;
mod feed;
mod report;
mod simulator;
mod streamer;

pub use engine::{ChainEngine, EngineConfig};
pub use feed::{ChainFeed, ReplayFeed};
pub use report::{
    SurfacePayload, SurfacePoint, TICK_REPORT_FORMAT_VERSION, TickReport, TickReportPackage,
};
pub use simulator::{MarketSimulator, SimulatorConfig};
pub use streamer::{StreamSummary, TickStreamer};
