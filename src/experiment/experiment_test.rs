#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use crate::coin::coinflipper::{Bit, CoinFlipper};
    use crate::errors::Error;
    use crate::experiment::{ExperimentResult, ExperimentRunner, Trial};
    use crate::opts::SimulatorOptions;

    // always yields (0, 1), so every unbiased bit is heads
    struct Alternating {
        next: Bit,
    }

    impl CoinFlipper for Alternating {
        fn flip(&mut self) -> Bit {
            let bit = self.next;
            self.next = 1 - bit;
            bit
        }
    }

    fn opts(seed: u64) -> SimulatorOptions {
        SimulatorOptions {
            sequence_length: 1_000,
            repetitions: 5,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn single_repetition_min_max_avg_agree() {
        let mut runner = ExperimentRunner::from_options(&opts(1)).unwrap();
        let result = runner.run_experiment(1, 10_000).unwrap();

        assert_eq!(result.min_time_seconds, result.max_time_seconds);
        assert_eq!(result.min_time_seconds, result.average_time_seconds);
    }

    #[test]
    fn timing_stats_are_ordered() {
        let mut runner = ExperimentRunner::from_options(&opts(2)).unwrap();
        let result = runner.run().unwrap();

        assert!(result.min_time_seconds <= result.average_time_seconds);
        assert!(result.average_time_seconds <= result.max_time_seconds);
        assert!(result.average_heads >= 0.0 && result.average_heads <= 1_000.0);
    }

    #[test]
    fn zero_length_has_zero_heads() {
        let mut runner = ExperimentRunner::from_options(&opts(3)).unwrap();
        let result = runner.run_experiment(3, 0).unwrap();

        assert_eq!(result.average_heads, 0.0);
        assert_eq!(runner.extractor().accepted(), 0);
    }

    #[test]
    fn zero_repetitions_is_an_error() {
        let mut runner = ExperimentRunner::from_options(&opts(4)).unwrap();
        assert!(matches!(runner.run_experiment(0, 10), Err(Error::InvalidArgument(_))));

        let bad = SimulatorOptions { repetitions: 0, ..Default::default() };
        assert!(ExperimentRunner::from_options(&bad).is_err());
    }

    #[test]
    fn degenerate_probability_is_rejected() {
        let bad = SimulatorOptions { probability: 1.0, ..Default::default() };
        assert!(matches!(ExperimentRunner::from_options(&bad), Err(Error::InvalidProbability(_))));
    }

    #[test]
    fn scripted_source_counts_every_head() {
        let mut runner = ExperimentRunner::new(Alternating { next: 0 }, 4, 250);
        let trials = runner.run_trials(4, 250);

        assert_eq!(trials.len(), 4);
        assert!(trials.iter().all(|t| t.heads == 250));
        assert_eq!(runner.run().unwrap().average_heads, 250.0);
    }

    #[test]
    fn same_seed_same_heads() {
        let mut first = ExperimentRunner::from_options(&opts(77)).unwrap();
        let mut second = ExperimentRunner::from_options(&opts(77)).unwrap();

        let first_heads: Vec<u64> = first.run_trials(3, 500).iter().map(|t| t.heads).collect();
        let second_heads: Vec<u64> = second.run_trials(3, 500).iter().map(|t| t.heads).collect();
        assert_eq!(first_heads, second_heads);
    }

    #[test]
    fn aggregates_trials() {
        let trials = [
            Trial { heads: 10, elapsed: Duration::from_millis(500) },
            Trial { heads: 11, elapsed: Duration::from_millis(1500) },
            Trial { heads: 13, elapsed: Duration::from_millis(1000) },
        ];
        let result = ExperimentResult::from_trials(&trials).unwrap();

        assert!((result.average_heads - 34.0 / 3.0).abs() < 1e-9);
        assert!((result.average_time_seconds - 1.0).abs() < 1e-9);
        assert_eq!(result.min_time_seconds, 0.5);
        assert_eq!(result.max_time_seconds, 1.5);
        assert!(ExperimentResult::from_trials(&[]).is_err());
    }

    #[test]
    fn report_format() {
        let result = ExperimentResult {
            average_heads: 500_123.9,
            average_time_seconds: 0.01234,
            min_time_seconds: 0.0101,
            max_time_seconds: 0.0159,
        };

        assert_eq!(
            result.to_string(),
            "Average Heads : 500123\nExecution Time: 0.012 [s] (min: 0.010, max: 0.016)"
        );
    }

    proptest! {
        #[test]
        fn average_heads_bounded(seed in any::<u64>(), reps in 1u32..4, length in 0u64..200) {
            let mut runner = ExperimentRunner::from_options(&opts(seed)).unwrap();
            let result = runner.run_experiment(reps, length).unwrap();
            prop_assert!(result.average_heads >= 0.0);
            prop_assert!(result.average_heads <= length as f64);
        }
    }
}
