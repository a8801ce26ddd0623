//! Types for option pricing.

use super::error::PricingError;
use serde::{Deserialize, Serialize};

/// Option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

impl OptionSide {
    /// Payoff sign: +1 for calls, -1 for puts.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            OptionSide::Call => 1.0,
            OptionSide::Put => -1.0,
        }
    }
}

/// Contract and market parameters needed to price an option.
///
/// Volatility is deliberately not part of the parameters: the pricer takes
/// it as a separate argument so the solver can vary it freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    /// Underlying spot price in price units.
    pub spot: f64,
    /// Option strike price in price units.
    pub strike: f64,
    /// Time to expiration in years (e.g., 30 days = 30.0 / 365.0).
    pub time_to_expiry: f64,
    /// Risk-free interest rate (annualized, e.g., 0.05 for 5%).
    pub risk_free_rate: f64,
    /// Call or Put.
    pub side: OptionSide,
}

impl OptionParams {
    /// Creates new option parameters.
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        side: OptionSide,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            side,
        }
    }

    /// Creates parameters for a call option.
    #[must_use]
    pub fn call(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(spot, strike, time_to_expiry, risk_free_rate, OptionSide::Call)
    }

    /// Creates parameters for a put option.
    #[must_use]
    pub fn put(spot: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(spot, strike, time_to_expiry, risk_free_rate, OptionSide::Put)
    }

    /// Undiscounted intrinsic value: `max(0, (spot - strike) * sign)`.
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        ((self.spot - self.strike) * self.side.sign()).max(0.0)
    }

    /// Checks that the parameters can reach the closed form without a
    /// logarithm or NaN fault.
    ///
    /// Non-positive time to expiry is accepted: the pricer treats it as an
    /// expired option and returns intrinsic value.
    pub fn validate(&self) -> Result<(), PricingError> {
        check_finite("spot", self.spot)?;
        check_finite("strike", self.strike)?;
        check_finite("time_to_expiry", self.time_to_expiry)?;
        check_finite("risk_free_rate", self.risk_free_rate)?;

        if self.spot <= 0.0 {
            return Err(PricingError::InvalidQuoteDomain {
                field: "spot",
                value: self.spot,
            });
        }

        if self.strike <= 0.0 {
            return Err(PricingError::InvalidQuoteDomain {
                field: "strike",
                value: self.strike,
            });
        }

        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidQuoteDomain { field, value })
    }
}

/// A single quoted option as delivered by a feed.
///
/// Quotes are immutable once produced; the engine only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Underlying spot price at quote time.
    pub spot: f64,
    /// Option strike price.
    pub strike: f64,
    /// Time to expiration in years.
    pub time_to_expiry: f64,
    /// Time to expiration in calendar days, used to group quotes by expiry.
    pub expiry_days: f64,
    /// Risk-free interest rate (annualized).
    pub risk_free_rate: f64,
    /// Call or Put.
    pub side: OptionSide,
    /// Observed market price (typically the bid/ask midpoint).
    pub market_price: f64,
}

impl OptionQuote {
    /// Creates a quote, deriving `expiry_days` from `time_to_expiry`.
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        side: OptionSide,
        market_price: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            expiry_days: time_to_expiry * 365.0,
            risk_free_rate,
            side,
            market_price,
        }
    }

    /// Overrides the expiry label in days.
    #[must_use]
    pub fn with_expiry_days(mut self, expiry_days: f64) -> Self {
        self.expiry_days = expiry_days;
        self
    }

    /// The pricing parameters of this quote.
    #[must_use]
    pub fn params(&self) -> OptionParams {
        OptionParams::new(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            self.side,
        )
    }

    /// Validates the pricing parameters and the market price.
    pub fn validate(&self) -> Result<(), PricingError> {
        self.params().validate()?;
        if !self.market_price.is_finite() || self.market_price < 0.0 {
            return Err(PricingError::InvalidQuoteDomain {
                field: "market_price",
                value: self.market_price,
            });
        }
        Ok(())
    }

    /// Strike over spot.
    #[must_use]
    pub fn moneyness(&self) -> f64 {
        self.strike / self.spot
    }
}

/// Fair value computed for a set of parameters at a given volatility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Theoretical option value, never negative.
    pub fair_value: f64,
    /// Volatility the value was computed at.
    pub volatility: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_side_serialization() {
        let json = serde_json::to_string(&OptionSide::Call).unwrap();
        assert_eq!(json, "\"Call\"");

        let json = serde_json::to_string(&OptionSide::Put).unwrap();
        assert_eq!(json, "\"Put\"");
    }

    #[test]
    fn test_intrinsic_value() {
        let params = OptionParams::call(110.0, 100.0, 0.25, 0.05);
        assert!((params.intrinsic_value() - 10.0).abs() < 1e-10);

        let params = OptionParams::call(90.0, 100.0, 0.25, 0.05);
        assert_eq!(params.intrinsic_value(), 0.0);

        let params = OptionParams::put(90.0, 100.0, 0.25, 0.05);
        assert!((params.intrinsic_value() - 10.0).abs() < 1e-10);

        let params = OptionParams::put(110.0, 100.0, 0.25, 0.05);
        assert_eq!(params.intrinsic_value(), 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_domain() {
        let err = OptionParams::call(100.0, 0.0, 1.0, 0.05).validate();
        assert!(matches!(
            err,
            Err(PricingError::InvalidQuoteDomain { field: "strike", .. })
        ));

        let err = OptionParams::call(-1.0, 100.0, 1.0, 0.05).validate();
        assert!(matches!(
            err,
            Err(PricingError::InvalidQuoteDomain { field: "spot", .. })
        ));

        let err = OptionParams::call(100.0, 100.0, f64::NAN, 0.05).validate();
        assert!(matches!(
            err,
            Err(PricingError::InvalidQuoteDomain {
                field: "time_to_expiry",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_accepts_expired() {
        assert!(OptionParams::call(100.0, 100.0, 0.0, 0.05).validate().is_ok());
        assert!(OptionParams::put(100.0, 100.0, -0.1, 0.05).validate().is_ok());
    }

    #[test]
    fn test_quote_rejects_negative_price() {
        let quote = OptionQuote::new(100.0, 100.0, 1.0, 0.05, OptionSide::Call, -0.5);
        assert!(matches!(
            quote.validate(),
            Err(PricingError::InvalidQuoteDomain {
                field: "market_price",
                ..
            })
        ));
    }

    #[test]
    fn test_quote_deserialization() {
        let json = r#"{
            "spot": 5000.0,
            "strike": 5100.0,
            "time_to_expiry": 0.0821917808,
            "expiry_days": 30.0,
            "risk_free_rate": 0.05,
            "side": "Call",
            "market_price": 42.5
        }"#;
        let quote: OptionQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.side, OptionSide::Call);
        assert_eq!(quote.expiry_days, 30.0);
        assert!((quote.moneyness() - 1.02).abs() < 1e-12);
    }
}
