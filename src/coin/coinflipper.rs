use rand::Rng;

use crate::errors::{Error, Result};

/// A single coin outcome, always 0 or 1.
pub type Bit = u8;

pub const TAILS: Bit = 0;
pub const HEADS: Bit = 1;

pub trait CoinFlipper {
    fn flip(&mut self) -> Bit;
}

/// Coin that lands on tails with probability `probability` and heads otherwise.
///
/// The generator is owned by the coin, so two coins built from the same seed
/// produce the same flips.
pub struct BiasedCoin<R: Rng> {
    rng: R,
    probability: f64,
    draws: u64,
}

impl<R: Rng> BiasedCoin<R> {
    pub fn new(rng: R, probability: f64) -> Result<Self> {
        // also rejects NaN
        if !(probability > 0.0 && probability < 1.0) {
            return Err(Error::InvalidProbability(probability));
        }

        Ok(BiasedCoin {
            rng,
            probability,
            draws: 0,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: Rng> CoinFlipper for BiasedCoin<R> {
    fn flip(&mut self) -> Bit {
        self.draws += 1;
        // gen::<f64>() is uniform over [0, 1)
        let random_value: f64 = self.rng.gen();
        return if random_value < self.probability { TAILS } else { HEADS };
    }
}
