use crate::coin::coinflipper::{Bit, CoinFlipper};

pub mod coinflipper;

/// Two consecutive flips of the biased coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub first: Bit,
    pub second: Bit,
}

impl Run {
    pub fn is_accepted(&self) -> bool {
        self.first != self.second
    }
}

/// Von Neumann debiasing on top of any [`CoinFlipper`].
///
/// Pairs of flips are drawn until they differ, and the second flip of the
/// surviving pair is the output bit. Both surviving pairs (0,1) and (1,0) occur
/// with probability p(1-p), so the output is fair whatever the bias is.
///
/// The source must be able to produce both outcomes, otherwise
/// [`next_unbiased_bit`](Self::next_unbiased_bit) never returns. [`BiasedCoin`]
/// enforces this at construction.
///
/// [`BiasedCoin`]: crate::coin::coinflipper::BiasedCoin
pub struct VonNeumannExtractor<C: CoinFlipper> {
    coin_flipper: C,
    accepted: u64,
    rejected: u64,
}

impl<C: CoinFlipper> VonNeumannExtractor<C> {
    pub fn new(coin_flipper: C) -> Self {
        VonNeumannExtractor {
            coin_flipper,
            accepted: 0,
            rejected: 0,
        }
    }

    pub fn next_accepted_run(&mut self) -> Run {
        loop {
            let run = Run {
                first: self.coin_flipper.flip(),
                second: self.coin_flipper.flip(),
            };
            if run.is_accepted() {
                self.accepted += 1;
                return run;
            }
            self.rejected += 1;
        }
    }

    pub fn next_unbiased_bit(&mut self) -> Bit {
        self.next_accepted_run().second
    }

    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn coin_flipper(&self) -> &C {
        &self.coin_flipper
    }

    pub fn into_inner(self) -> C {
        self.coin_flipper
    }
}

impl<C: CoinFlipper> Iterator for VonNeumannExtractor<C> {
    type Item = Bit;

    fn next(&mut self) -> Option<Bit> {
        Some(self.next_unbiased_bit())
    }
}

/// Expected biased flips consumed per output bit, 1 / (p(1-p)).
///
/// A pair survives with probability 2p(1-p) and costs two flips.
pub fn expected_draws_per_bit(probability: f64) -> f64 {
    1.0 / (probability * (1.0 - probability))
}

/// Draws `length` unbiased bits and returns how many were heads.
pub fn generate_unbiased_sequence<C: CoinFlipper>(
    extractor: &mut VonNeumannExtractor<C>,
    length: u64,
) -> u64 {
    let mut heads = 0;
    for _ in 0..length {
        heads += extractor.next_unbiased_bit() as u64;
    }
    heads
}
