#[cfg(test)]
mod tests {
    use volscan_rs::prelude::*;

    #[test]
    fn test_simulated_smile_is_recovered() {
        let mut sim = MarketSimulator::new(SimulatorConfig::new().with_seed(99)).unwrap();
        let mut engine = ChainEngine::new(EngineConfig::default()).unwrap();
        let tick = sim.generate_tick();
        let report = engine.process_tick(&tick).unwrap();

        assert_eq!(report.points.len(), tick.len());
        assert_eq!(report.rejected, 0);
        assert_eq!(report.expiries(), vec![7.0, 30.0, 60.0, 90.0]);

        let mut checked = 0;
        for (quote, point) in tick.iter().zip(&report.points) {
            let moneyness = quote.moneyness() - 1.0;
            if point.expiry_days == 90.0 && moneyness.abs() < 0.05 {
                assert_eq!(point.status, SolveStatus::Converged);
                let smile = 0.15 + 1.5 * moneyness * moneyness;
                assert!(
                    (point.volatility - smile).abs() < 0.01,
                    "strike {} recovered {} vs smile {}",
                    point.strike,
                    point.volatility,
                    smile
                );
                checked += 1;
            }
        }
        assert!(checked >= 5);
    }

    #[test]
    fn test_all_volatilities_bounded_on_simulated_ticks() {
        let mut sim = MarketSimulator::new(SimulatorConfig::new().with_seed(3)).unwrap();
        let mut engine = ChainEngine::new(EngineConfig::default()).unwrap();

        for _ in 0..5 {
            let report = engine.process_tick(&sim.generate_tick()).unwrap();
            assert!(
                report
                    .points
                    .iter()
                    .all(|point| point.volatility > 0.0 && point.volatility <= 5.0)
            );
        }
        assert_eq!(engine.ticks_processed(), 5);
    }

    #[test]
    fn test_replayed_tick_with_planted_violation() {
        let spot = 100.0;
        let time = 30.0 / 365.0;
        let mut quotes: Vec<OptionQuote> = [95.0, 100.0, 105.0, 110.0]
            .iter()
            .map(|&strike| {
                let params = OptionParams::call(spot, strike, time, 0.05);
                let price = BlackScholes::price(&params, 0.2);
                OptionQuote::new(spot, strike, time, 0.05, OptionSide::Call, price)
                    .with_expiry_days(30.0)
            })
            .collect();
        quotes[3].market_price = quotes[2].market_price + 0.5;

        let mut feed = ReplayFeed::new([quotes]);
        let mut engine = ChainEngine::new(EngineConfig::default()).unwrap();
        let report = engine.process_tick(&feed.next_tick().unwrap()).unwrap();

        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].strike, 110.0);
        assert_eq!(report.anomalies[0].details, "Strike 110.0 > Strike 105.0");
        assert!(matches!(feed.next_tick(), Err(EngineError::FeedExhausted)));
    }

    #[test]
    fn test_report_package_round_trip() {
        let mut sim = MarketSimulator::new(SimulatorConfig::new().with_seed(8)).unwrap();
        let mut engine = ChainEngine::new(EngineConfig::default()).unwrap();
        let report = engine.process_tick(&sim.generate_tick()).unwrap();

        let package = TickReportPackage::new(report.clone()).unwrap();
        let json = package.to_json().unwrap();
        let restored = TickReportPackage::from_json(&json)
            .unwrap()
            .into_report()
            .unwrap();
        assert_eq!(restored.sequence, report.sequence);
        assert_eq!(restored.points.len(), report.points.len());
    }
}
