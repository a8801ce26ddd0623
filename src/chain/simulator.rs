//! Synthetic option chain feed with a noisy volatility smile.

use super::feed::ChainFeed;
use crate::error::EngineError;
use crate::pricing::{BlackScholes, OptionQuote, OptionSide};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Parameters of the simulated market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Spot price at the first tick (default: 5000, an SPX-like level).
    pub initial_spot: f64,
    /// Risk-free rate quoted on every option (default: 0.05).
    pub risk_free_rate: f64,
    /// Lowest strike (default: 4500).
    pub strike_low: f64,
    /// Highest strike (default: 5500).
    pub strike_high: f64,
    /// Number of evenly spaced strikes (default: 20).
    pub strike_count: usize,
    /// Expiries in days (default: 7, 30, 60, 90).
    pub expiry_days: Vec<f64>,
    /// At-the-money volatility (default: 0.15).
    pub base_volatility: f64,
    /// Smile steepness: vol = base + curvature * (K/S - 1)² (default: 1.5).
    pub smile_curvature: f64,
    /// Standard deviation of per-quote volatility noise (default: 0.002).
    pub volatility_noise: f64,
    /// Standard deviation of the per-tick relative spot move (default: 0.0005).
    pub spot_step: f64,
    /// Seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            initial_spot: 5000.0,
            risk_free_rate: 0.05,
            strike_low: 4500.0,
            strike_high: 5500.0,
            strike_count: 20,
            expiry_days: vec![7.0, 30.0, 60.0, 90.0],
            base_volatility: 0.15,
            smile_curvature: 1.5,
            volatility_noise: 0.002,
            spot_step: 0.0005,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Creates a new simulator configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the strike grid.
    #[must_use]
    pub fn with_strikes(mut self, strike_low: f64, strike_high: f64, strike_count: usize) -> Self {
        self.strike_low = strike_low;
        self.strike_high = strike_high;
        self.strike_count = strike_count;
        self
    }

    /// Sets the expiries in days.
    #[must_use]
    pub fn with_expiry_days(mut self, expiry_days: Vec<f64>) -> Self {
        self.expiry_days = expiry_days;
        self
    }

    /// Sets the noise levels for volatility and spot.
    #[must_use]
    pub fn with_noise(mut self, volatility_noise: f64, spot_step: f64) -> Self {
        self.volatility_noise = volatility_noise;
        self.spot_step = spot_step;
        self
    }

    /// Evenly spaced strikes from `strike_low` to `strike_high` inclusive.
    #[must_use]
    pub fn strikes(&self) -> Vec<f64> {
        match self.strike_count {
            0 => Vec::new(),
            1 => vec![self.strike_low],
            n => {
                let step = (self.strike_high - self.strike_low) / (n - 1) as f64;
                (0..n)
                    .map(|i| self.strike_low + step * i as f64)
                    .collect()
            }
        }
    }
}

/// Calls-only chain simulator.
///
/// Each tick moves the spot by a small Gaussian step, then prices every
/// strike/expiry pair off a parabolic smile plus noise. Prices, strikes and
/// spot are rounded to cents and expiries to a tenth of a day, so the
/// recovered volatilities differ slightly from the generating ones.
#[derive(Debug)]
pub struct MarketSimulator {
    config: SimulatorConfig,
    spot: f64,
    strikes: Vec<f64>,
    volatility_noise: Normal<f64>,
    spot_step: Normal<f64>,
    rng: StdRng,
}

impl MarketSimulator {
    /// Creates a simulator, validating the configuration.
    pub fn new(config: SimulatorConfig) -> Result<Self, EngineError> {
        if !(config.initial_spot.is_finite() && config.initial_spot > 0.0) {
            return Err(EngineError::InvalidConfig {
                message: format!("initial_spot must be positive, got {}", config.initial_spot),
            });
        }

        if config.strike_count == 0 || config.expiry_days.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "simulator needs at least one strike and one expiry".to_string(),
            });
        }

        for (name, std_dev) in [
            ("volatility_noise", config.volatility_noise),
            ("spot_step", config.spot_step),
        ] {
            if !(std_dev.is_finite() && std_dev >= 0.0) {
                return Err(EngineError::InvalidConfig {
                    message: format!("{name} must be a non-negative finite value, got {std_dev}"),
                });
            }
        }

        let volatility_noise = Normal::new(0.0, config.volatility_noise).map_err(|error| {
            EngineError::InvalidConfig {
                message: format!("volatility_noise: {error}"),
            }
        })?;
        let spot_step =
            Normal::new(0.0, config.spot_step).map_err(|error| EngineError::InvalidConfig {
                message: format!("spot_step: {error}"),
            })?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            spot: config.initial_spot,
            strikes: config.strikes(),
            config,
            volatility_noise,
            spot_step,
            rng,
        })
    }

    /// Current unrounded spot.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Advances the market one step and returns the quoted chain.
    pub fn generate_tick(&mut self) -> Vec<OptionQuote> {
        self.spot *= 1.0 + self.spot_step.sample(&mut self.rng);

        let mut chain = Vec::with_capacity(self.strikes.len() * self.config.expiry_days.len());
        for &days in &self.config.expiry_days {
            let time_to_expiry = days / 365.0;

            for &strike in &self.strikes {
                let moneyness = strike / self.spot;
                let volatility = self.config.base_volatility
                    + self.config.smile_curvature * (moneyness - 1.0).powi(2)
                    + self.volatility_noise.sample(&mut self.rng);

                let mut quote = OptionQuote::new(
                    self.spot,
                    strike,
                    time_to_expiry,
                    self.config.risk_free_rate,
                    OptionSide::Call,
                    0.0,
                );
                let price = BlackScholes::price(&quote.params(), volatility);

                quote.strike = round_to(strike, 2);
                quote.spot = round_to(self.spot, 2);
                quote.expiry_days = round_to(days, 1);
                quote.market_price = round_to(price, 2);
                chain.push(quote);
            }
        }

        trace!("simulated tick: spot={:.2} quotes={}", self.spot, chain.len());
        chain
    }
}

impl ChainFeed for MarketSimulator {
    fn next_tick(&mut self) -> Result<Vec<OptionQuote>, EngineError> {
        Ok(self.generate_tick())
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
