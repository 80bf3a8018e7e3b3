//! Inputs for the comparison runs. Every generator takes the rng explicitly so a run can be
//! reproduced with `--seed`.

use std::fmt;

use clap::ValueEnum;
use rand::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Uniform in `0..len * 10`.
    RandomBounded,
    /// Uniform over all of `i32`.
    Random,
    Ascending,
    Descending,
    AllEqual,
}

impl Pattern {
    pub fn name(self) -> &'static str {
        match self {
            Pattern::RandomBounded => "random_bounded",
            Pattern::Random => "random",
            Pattern::Ascending => "ascending",
            Pattern::Descending => "descending",
            Pattern::AllEqual => "all_equal",
        }
    }

    pub fn generate(self, len: usize, rng: &mut StdRng) -> Vec<i32> {
        match self {
            Pattern::RandomBounded => random_bounded(len, rng),
            Pattern::Random => (0..len).map(|_| rng.gen::<i32>()).collect(),
            Pattern::Ascending => (0..len as i32).collect(),
            Pattern::Descending => (0..len as i32).rev().collect(),
            Pattern::AllEqual => vec![66; len],
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn random_bounded(len: usize, rng: &mut StdRng) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    if len == 0 {
        return Vec::new();
    }

    let upper = i32::try_from(len.saturating_mul(10)).unwrap_or(i32::MAX);

    (0..len).map(|_| rng.gen_range(0..upper)).collect()
}
