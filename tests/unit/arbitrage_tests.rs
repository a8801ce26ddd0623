#[cfg(test)]
mod tests {
    use volscan_rs::prelude::*;

    fn strikes_of(anomalies: &[Anomaly]) -> Vec<f64> {
        anomalies.iter().map(|anomaly| anomaly.strike).collect()
    }

    #[test]
    fn test_reference_chains() {
        let anomalies = scan(&[(100.0, 10.0), (110.0, 12.0)]);
        assert_eq!(strikes_of(&anomalies), vec![110.0]);
        assert_eq!(anomalies[0].price, 12.0);

        assert!(scan(&[(100.0, 10.0), (110.0, 8.0), (120.0, 5.0)]).is_empty());
    }

    #[test]
    fn test_scan_invariant_to_input_order() {
        let sorted = vec![
            (90.0, 15.0),
            (95.0, 16.0),
            (100.0, 10.0),
            (105.0, 7.5),
            (110.0, 8.0),
            (115.0, 3.0),
            (120.0, 3.5),
        ];
        let expected = strikes_of(&scan(&sorted));
        assert_eq!(expected, vec![95.0, 110.0, 120.0]);

        let mut reversed = sorted.clone();
        reversed.reverse();

        let mut rotated = sorted.clone();
        rotated.rotate_left(3);

        let interleaved: Vec<(f64, f64)> = sorted
            .iter()
            .step_by(2)
            .chain(sorted.iter().skip(1).step_by(2))
            .copied()
            .collect();

        for shuffled in [reversed, rotated, interleaved] {
            assert_eq!(strikes_of(&scan(&shuffled)), expected);
        }
    }

    #[test]
    fn test_scan_does_not_touch_caller_chain() {
        let chain = vec![(120.0, 1.0), (100.0, 5.0), (110.0, 6.0)];
        let before = chain.clone();
        let _ = scan(&chain);
        assert_eq!(chain, before);
    }

    #[test]
    fn test_simulated_noiseless_chain_is_clean() {
        let config = SimulatorConfig::new().with_seed(17).with_noise(0.0, 0.0);
        let mut sim = MarketSimulator::new(config).unwrap();
        let tick = sim.generate_tick();
        assert!(scan_by_expiry(&tick).is_empty());
    }

    #[test]
    fn test_mixed_expiry_chain_needs_partitioning() {
        let config = SimulatorConfig::new().with_seed(17).with_noise(0.0, 0.0);
        let mut sim = MarketSimulator::new(config).unwrap();
        let tick = sim.generate_tick();
        // the same strike is dearer at a longer expiry, which looks like a violation unpartitioned
        assert!(!scan(&tick).is_empty());
    }
}
