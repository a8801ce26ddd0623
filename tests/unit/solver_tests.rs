#[cfg(test)]
mod tests {
    use volscan_rs::prelude::*;

    #[test]
    fn test_round_trip_recovers_volatility() {
        let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);
        let config = SolverConfig::default();

        let mut vol = 0.06;
        while vol < 2.0 {
            let market_price = BlackScholes::price(&params, vol);
            let solution = solve(&params, market_price, &config).unwrap();
            assert!(
                (solution.volatility - vol).abs() < 1e-3,
                "target {vol}, got {solution:?}"
            );
            assert!(solution.is_converged());
            vol += 0.07;
        }
    }

    #[test]
    fn test_round_trip_puts() {
        let config = SolverConfig::default();
        for strike in [90.0, 100.0, 110.0] {
            let params = OptionParams::put(100.0, strike, 0.5, 0.03);
            let market_price = BlackScholes::price(&params, 0.35);
            let solution = solve(&params, market_price, &config).unwrap();
            assert!((solution.volatility - 0.35).abs() < 1e-3);
        }
    }

    #[test]
    fn test_output_always_bounded() {
        let config = SolverConfig::default();
        for side in [OptionSide::Call, OptionSide::Put] {
            for strike in [50.0, 100.0, 200.0] {
                for time in [0.0, 0.01, 1.0, 10.0] {
                    for market_price in [0.0, 0.01, 5.0, 50.0, 10_000.0] {
                        let params = OptionParams::new(100.0, strike, time, 0.05, side);
                        let solution = solve(&params, market_price, &config).unwrap();
                        assert!(
                            solution.volatility > 0.0 && solution.volatility <= 5.0,
                            "{params:?} @ {market_price} -> {solution:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_configurable_bounds_are_respected() {
        let config = SolverConfig::new().with_bounds(0.05, 1.0);
        let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);

        let high = solve(&params, 90.0, &config).unwrap();
        assert_eq!(high.volatility, 1.0);
        assert_eq!(high.status, SolveStatus::IterationsExhausted);

        let low = solve(&params, 0.0, &config).unwrap();
        assert_eq!(low.volatility, 0.05);
    }

    #[test]
    fn test_residual_reflects_quality() {
        let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);
        let config = SolverConfig::default();

        let good = solve(&params, 12.0, &config).unwrap();
        assert!(good.residual.abs() < config.tolerance);

        let bad = solve(&params, 500.0, &config).unwrap();
        let repriced = BlackScholes::price(&params, bad.volatility);
        assert!((bad.residual - (500.0 - repriced)).abs() < 1e-9);
    }

    #[test]
    fn test_solutions_independent_of_call_order() {
        let config = SolverConfig::default();
        let quotes: Vec<OptionQuote> = [80.0, 95.0, 100.0, 105.0, 120.0]
            .iter()
            .map(|&strike| {
                let params = OptionParams::call(100.0, strike, 0.25, 0.01);
                let price = BlackScholes::price(&params, 0.2 + (strike - 100.0).abs() / 200.0);
                OptionQuote::new(100.0, strike, 0.25, 0.01, OptionSide::Call, price)
            })
            .collect();

        let forward: Vec<VolatilitySolution> = quotes
            .iter()
            .map(|quote| solve_quote(quote, &config).unwrap())
            .collect();
        let mut backward: Vec<VolatilitySolution> = quotes
            .iter()
            .rev()
            .map(|quote| solve_quote(quote, &config).unwrap())
            .collect();
        backward.reverse();

        assert_eq!(forward, backward);
    }
}
