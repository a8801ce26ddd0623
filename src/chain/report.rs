//! Per-tick results handed to the presentation layer.

use crate::arbitrage::Anomaly;
use crate::error::EngineError;
use crate::implied_volatility::SolveStatus;
use crate::pricing::OptionSide;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::trace;

/// One solved point of the implied volatility surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    /// Strike of the quote.
    pub strike: f64,
    /// Expiry of the quote in days.
    pub expiry_days: f64,
    /// Side the quote was solved at.
    pub side: OptionSide,
    /// Implied volatility estimate.
    pub volatility: f64,
    /// How the solve terminated.
    pub status: SolveStatus,
}

/// Everything computed from one chain snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Monotonic tick counter assigned by the engine, starting at 1.
    pub sequence: u64,

    /// Timestamp when the report was produced (milliseconds since epoch)
    pub timestamp: u64,

    /// Underlying spot taken from the first quote of the tick.
    pub spot: f64,

    /// One point per accepted quote, in feed order.
    pub points: Vec<SurfacePoint>,

    /// Monotonicity violations across all expiries.
    pub anomalies: Vec<Anomaly>,

    /// Quotes skipped because they failed domain validation.
    pub rejected: usize,
}

impl TickReport {
    /// Number of points whose solve converged.
    pub fn converged_count(&self) -> usize {
        let count = self
            .points
            .iter()
            .filter(|point| point.status == SolveStatus::Converged)
            .count();
        trace!("converged_count: {:?}", count);
        count
    }

    /// Points whose volatility is a degraded, non-converged estimate.
    pub fn degraded_points(&self) -> impl Iterator<Item = &SurfacePoint> {
        self.points
            .iter()
            .filter(|point| point.status != SolveStatus::Converged)
    }

    /// Distinct expiries present in the report, ascending.
    pub fn expiries(&self) -> Vec<f64> {
        let mut expiries: Vec<f64> = self.points.iter().map(|point| point.expiry_days).collect();
        expiries.sort_by(f64::total_cmp);
        expiries.dedup();
        trace!("expiries: {:?}", expiries);
        expiries
    }
}

/// Flat strike/expiry/volatility arrays for 3D surface plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacePayload {
    /// Underlying spot.
    pub spot: f64,
    /// Strikes.
    pub x: Vec<f64>,
    /// Expiries in days.
    pub y: Vec<f64>,
    /// Implied volatilities.
    pub z: Vec<f64>,
    /// Detected anomalies.
    pub arbs: Vec<Anomaly>,
}

impl From<&TickReport> for SurfacePayload {
    fn from(report: &TickReport) -> Self {
        Self {
            spot: report.spot,
            x: report.points.iter().map(|point| point.strike).collect(),
            y: report.points.iter().map(|point| point.expiry_days).collect(),
            z: report.points.iter().map(|point| point.volatility).collect(),
            arbs: report.anomalies.clone(),
        }
    }
}

/// Format version used for checksum-enabled tick reports.
pub const TICK_REPORT_FORMAT_VERSION: u32 = 1;

/// Wrapper that provides checksum validation for `TickReport` instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickReportPackage {
    /// Version of the report schema for forward compatibility.
    pub version: u32,
    /// Report payload.
    pub report: TickReport,
    /// Hex-encoded checksum of the serialized report.
    pub checksum: String,
}

impl TickReportPackage {
    /// Creates a new package computing the checksum of the report contents.
    pub fn new(report: TickReport) -> Result<Self, EngineError> {
        let checksum = Self::compute_checksum(&report)?;

        Ok(Self {
            version: TICK_REPORT_FORMAT_VERSION,
            report,
            checksum,
        })
    }

    /// Serializes the package to JSON.
    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|error| EngineError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes the package from JSON.
    pub fn from_json(data: &str) -> Result<Self, EngineError> {
        serde_json::from_str(data).map_err(|error| EngineError::DeserializationError {
            message: error.to_string(),
        })
    }

    /// Validates the checksum and version.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.version != TICK_REPORT_FORMAT_VERSION {
            return Err(EngineError::InvalidOperation {
                message: format!(
                    "Unsupported report version: {} (expected {})",
                    self.version, TICK_REPORT_FORMAT_VERSION
                ),
            });
        }

        let computed = Self::compute_checksum(&self.report)?;
        if computed != self.checksum {
            return Err(EngineError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual: computed,
            });
        }

        Ok(())
    }

    /// Consumes the package and returns the validated report.
    pub fn into_report(self) -> Result<TickReport, EngineError> {
        self.validate()?;
        Ok(self.report)
    }

    fn compute_checksum(report: &TickReport) -> Result<String, EngineError> {
        let payload =
            serde_json::to_vec(report).map_err(|error| EngineError::SerializationError {
                message: error.to_string(),
            })?;

        let mut hasher = Sha256::new();
        hasher.update(payload);

        let checksum_bytes = hasher.finalize();
        Ok(checksum_bytes
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect())
    }
}
