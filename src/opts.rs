use crate::errors::{Error, Result};

pub struct SimulatorOptions {
    // probability of tails for the biased coin. must be in (0, 1)
    pub probability: f64,

    // unbiased bits generated per repetition
    pub sequence_length: u64,

    pub repetitions: u32,

    // None seeds the generator from os entropy
    pub seed: Option<u64>,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        return SimulatorOptions {
            probability: 0.4,

            // 1e6
            sequence_length: 1_000_000,

            repetitions: 10,

            seed: None,
        };
    }
}

impl SimulatorOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(Error::InvalidProbability(self.probability));
        }
        if self.repetitions == 0 {
            return Err(Error::InvalidArgument("repetitions must be at least 1".to_string()));
        }
        Ok(())
    }
}

pub struct SortOptions {
    // generated values are in [0, max_value)
    pub max_value: u32,

    pub seed: Option<u64>,
}

impl Default for SortOptions {
    fn default() -> Self {
        SortOptions {
            max_value: 1000,
            seed: None,
        }
    }
}
