use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;

use crate::coin::coinflipper::{BiasedCoin, CoinFlipper};
use crate::coin::{generate_unbiased_sequence, VonNeumannExtractor};
use crate::errors::{Error, Result};
use crate::opts::SimulatorOptions;
use crate::util::{seeded_rng, timed};

mod experiment_test;

/// Outcome of a single repetition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub heads: u64,
    pub elapsed: Duration,
}

/// Statistics aggregated over every repetition of an experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentResult {
    pub average_heads: f64,
    pub average_time_seconds: f64,
    pub min_time_seconds: f64,
    pub max_time_seconds: f64,
}

impl ExperimentResult {
    pub fn from_trials(trials: &[Trial]) -> Result<Self> {
        if trials.is_empty() {
            return Err(Error::InvalidArgument("no trials to aggregate".to_string()));
        }

        let n = trials.len() as f64;
        let total_heads: u64 = trials.iter().map(|t| t.heads).sum();
        let times: Vec<f64> = trials.iter().map(|t| t.elapsed.as_secs_f64()).collect();

        let total_time: f64 = times.iter().sum();
        let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(ExperimentResult {
            average_heads: total_heads as f64 / n,
            average_time_seconds: total_time / n,
            min_time_seconds: min_time,
            max_time_seconds: max_time,
        })
    }
}

impl fmt::Display for ExperimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Heads : {}", self.average_heads.floor() as u64)?;
        write!(
            f,
            "Execution Time: {:.3} [s] (min: {:.3}, max: {:.3})",
            self.average_time_seconds, self.min_time_seconds, self.max_time_seconds
        )
    }
}

pub struct ExperimentRunner<C: CoinFlipper> {
    extractor: VonNeumannExtractor<C>,
    repetitions: u32,
    sequence_length: u64,
}

impl ExperimentRunner<BiasedCoin<StdRng>> {
    pub fn from_options(opts: &SimulatorOptions) -> Result<Self> {
        opts.validate()?;
        let coin = BiasedCoin::new(seeded_rng(opts.seed), opts.probability)?;

        Ok(ExperimentRunner {
            extractor: VonNeumannExtractor::new(coin),
            repetitions: opts.repetitions,
            sequence_length: opts.sequence_length,
        })
    }
}

impl<C: CoinFlipper> ExperimentRunner<C> {
    pub fn new(coin_flipper: C, repetitions: u32, sequence_length: u64) -> Self {
        ExperimentRunner {
            extractor: VonNeumannExtractor::new(coin_flipper),
            repetitions,
            sequence_length,
        }
    }

    /// Runs the configured number of repetitions.
    pub fn run(&mut self) -> Result<ExperimentResult> {
        self.run_experiment(self.repetitions, self.sequence_length)
    }

    pub fn run_experiment(
        &mut self,
        repetitions: u32,
        sequence_length: u64,
    ) -> Result<ExperimentResult> {
        if repetitions == 0 {
            return Err(Error::InvalidArgument("repetitions must be at least 1".to_string()));
        }

        let trials = self.run_trials(repetitions, sequence_length);
        ExperimentResult::from_trials(&trials)
    }

    pub fn run_trials(&mut self, repetitions: u32, sequence_length: u64) -> Vec<Trial> {
        let mut trials = Vec::new();

        for i in 0..repetitions {
            let (heads, elapsed) =
                timed(|| generate_unbiased_sequence(&mut self.extractor, sequence_length));
            log::debug!("trial {}: {} heads of {} in {:?}", i, heads, sequence_length, elapsed);
            trials.push(Trial { heads, elapsed });
        }

        trials
    }

    pub fn extractor(&self) -> &VonNeumannExtractor<C> {
        &self.extractor
    }
}
