#[cfg(test)]
mod tests {
    use volscan_rs::prelude::*;

    const SPOTS: [f64; 3] = [50.0, 100.0, 250.0];
    const STRIKES: [f64; 5] = [40.0, 90.0, 100.0, 110.0, 300.0];
    const TIMES: [f64; 4] = [1.0 / 365.0, 0.1, 1.0, 3.0];
    const RATES: [f64; 3] = [-0.01, 0.0, 0.08];
    const VOLS: [f64; 4] = [0.05, 0.3, 1.0, 4.0];

    #[test]
    fn test_prices_non_negative_across_grid() {
        for spot in SPOTS {
            for strike in STRIKES {
                for time in TIMES {
                    for rate in RATES {
                        for vol in VOLS {
                            let call = OptionParams::call(spot, strike, time, rate);
                            let put = OptionParams::put(spot, strike, time, rate);
                            assert!(BlackScholes::price(&call, vol) >= 0.0);
                            assert!(BlackScholes::price(&put, vol) >= 0.0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_vega_non_negative_across_grid() {
        for spot in SPOTS {
            for strike in STRIKES {
                for time in TIMES {
                    for vol in VOLS {
                        let params = OptionParams::call(spot, strike, time, 0.03);
                        assert!(BlackScholes::vega(&params, vol) >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_degenerate_cases_return_intrinsic() {
        for (spot, strike) in [(120.0, 100.0), (100.0, 100.0), (80.0, 100.0)] {
            let expired = OptionParams::call(spot, strike, 0.0, 0.05);
            let expected = f64::max(0.0, spot - strike);
            assert_eq!(BlackScholes::price(&expired, 0.3), expected);

            let zero_vol = OptionParams::call(spot, strike, 1.0, 0.05);
            assert_eq!(BlackScholes::price(&zero_vol, 0.0), expected);

            let put = OptionParams::put(spot, strike, 0.0, 0.05);
            assert_eq!(BlackScholes::price(&put, 0.3), f64::max(0.0, strike - spot));
        }
    }

    #[test]
    fn test_vega_peaks_near_the_money() {
        let vol = 0.25;
        let vegas: Vec<f64> = [70.0, 85.0, 100.0, 115.0, 130.0]
            .iter()
            .map(|&strike| BlackScholes::vega(&OptionParams::call(100.0, strike, 0.5, 0.0), vol))
            .collect();
        let peak = vegas
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(index, _)| index);
        assert_eq!(peak, Some(2));
    }

    #[test]
    fn test_call_price_increases_with_volatility() {
        let params = OptionParams::call(100.0, 105.0, 0.5, 0.02);
        let mut last = 0.0;
        for vol in [0.05, 0.1, 0.2, 0.4, 0.8, 1.6] {
            let price = BlackScholes::price(&params, vol);
            assert!(price > last);
            last = price;
        }
        assert!(last < 100.0);
    }

    #[test]
    fn test_checked_price_guards_log_domain() {
        for (spot, strike) in [(0.0, 100.0), (100.0, 0.0), (-5.0, 100.0), (100.0, -5.0)] {
            let params = OptionParams::call(spot, strike, 1.0, 0.05);
            assert!(matches!(
                BlackScholes::checked_price(&params, 0.2),
                Err(PricingError::InvalidQuoteDomain { .. })
            ));
        }
    }
}
