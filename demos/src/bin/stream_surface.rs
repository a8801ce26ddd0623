//! Example streaming implied volatility surfaces from a simulated chain
//!
//! This example shows how to:
//! 1. Configure the engine and the simulated feed
//! 2. Run the tick streamer on a fixed cadence
//! 3. Consume reports from a broadcast subscriber
//! 4. Package a report with a checksum for transport

use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};
use volscan_rs::prelude::{
    EngineConfig, MarketSimulator, SimulatorConfig, SurfacePayload, TickReport,
    TickReportPackage, TickStreamer,
};

/// Logs a one-line summary of each report, returning the last one received.
async fn consume_reports(mut receiver: broadcast::Receiver<TickReport>) -> Option<TickReport> {
    let mut last = None;

    loop {
        match receiver.recv().await {
            Ok(report) => {
                info!(
                    "Tick {}: spot {:.2}, {} points ({} converged), {} anomalies",
                    report.sequence,
                    report.spot,
                    report.points.len(),
                    report.converged_count(),
                    report.anomalies.len()
                );

                for anomaly in &report.anomalies {
                    info!(
                        "  {} at strike {} (price {}): {}",
                        anomaly.kind, anomaly.strike, anomaly.price, anomaly.details
                    );
                }

                last = Some(report);
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!("Subscriber lagged, {} reports skipped", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    last
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting surface streaming example");

    let config = EngineConfig::new()
        .with_tick_interval_ms(500)
        .with_max_ticks(10);
    let feed = MarketSimulator::new(SimulatorConfig::new().with_seed(2024))?;

    let streamer = TickStreamer::new(config, feed)?;
    let receiver = streamer.subscribe();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let consumer = tokio::spawn(consume_reports(receiver));
    let producer = tokio::spawn(streamer.run(shutdown_rx));

    // Safety net in case the stream is left unbounded
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(30)).await;
        let _ = shutdown_tx.send(true);
    });

    let summary = producer.await?;
    info!(
        "Stream finished: {} published, {} skipped",
        summary.ticks_published, summary.ticks_skipped
    );

    if let Some(report) = consumer.await? {
        let degraded = report.degraded_points().count();
        info!(
            "Last report covers expiries {:?}, {} degraded solves",
            report.expiries(),
            degraded
        );

        let payload = SurfacePayload::from(&report);
        info!("Surface payload: {} bytes", serde_json::to_string(&payload)?.len());

        let package = TickReportPackage::new(report)?;
        let json = package.to_json()?;
        let restored = TickReportPackage::from_json(&json)?.into_report()?;
        info!(
            "Package checksum {} verified for tick {}",
            package.checksum, restored.sequence
        );
    }

    info!("Example completed successfully");
    Ok(())
}
