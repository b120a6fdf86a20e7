use std::sync::atomic::{AtomicU64, Ordering};

use rand::{Rng, distr::Distribution as _, seq::SliceRandom as _};

/// The element type of the visualized sequence
pub type Value = i64;

/// A trait for generalizing sequence creation
pub trait Data {
    /// Initialize a vector of `length` values in `[0, max_value)`
    ///
    /// Both arguments are assumed to be positive, see [`initialize`] for the checked version.
    fn initialize(length: usize, max_value: Value, rng: &mut impl Rng) -> Vec<Value>;
}

/// Values drawn uniformly from `[0, max_value)`
#[derive(Debug)]
pub struct UniformData;

/// An evenly spaced ramp over `[0, max_value)`, shuffled
#[derive(Debug)]
pub struct PermutationData;

/// An evenly spaced ramp over `[0, max_value)` in descending order
#[derive(Debug)]
pub struct ReversedData;

/// Normally distributed values around `max_value / 2`, clamped into range
#[derive(Debug)]
pub struct GaussianData;

impl Data for UniformData {
    fn initialize(length: usize, max_value: Value, rng: &mut impl Rng) -> Vec<Value> {
        std::iter::repeat_with(|| rng.random_range(0..max_value))
            .take(length)
            .collect()
    }
}

/// The `index`-th of `length` evenly spaced values in `[0, max_value)`
fn ramp(index: usize, length: usize, max_value: Value) -> Value {
    (index as i128 * max_value as i128 / length as i128) as Value
}

impl Data for PermutationData {
    fn initialize(length: usize, max_value: Value, rng: &mut impl Rng) -> Vec<Value> {
        let mut values: Vec<Value> = (0..length)
            .map(|index| ramp(index, length, max_value))
            .collect();
        values.shuffle(rng);
        values
    }
}

impl Data for ReversedData {
    fn initialize(length: usize, max_value: Value, _rng: &mut impl Rng) -> Vec<Value> {
        (0..length)
            .rev()
            .map(|index| ramp(index, length, max_value))
            .collect()
    }
}

impl Data for GaussianData {
    fn initialize(length: usize, max_value: Value, rng: &mut impl Rng) -> Vec<Value> {
        let mean = max_value as f64 / 2.0;
        let std_dev = max_value as f64 / 6.0;
        let upper = (max_value - 1) as f64;

        rand_distr::StandardNormal
            .sample_iter(rng)
            .take(length)
            .map(|z: f64| (mean + z * std_dev).floor().clamp(0.0, upper) as Value)
            .collect()
    }
}

/// Available initial distributions
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataKind {
    #[default]
    Uniform,
    Permutation,
    Reversed,
    Gaussian,
}

impl DataKind {
    /// Create a sequence of this kind, checking `length` and `max_value` are positive
    pub fn initialize(
        self,
        length: i64,
        max_value: Value,
        rng: &mut impl Rng,
    ) -> crate::error::Result<Vec<Value>> {
        let length = crate::error::positive("length", length)?;
        crate::error::positive("max-value", max_value)?;

        Ok(match self {
            DataKind::Uniform => UniformData::initialize(length, max_value, rng),
            DataKind::Permutation => PermutationData::initialize(length, max_value, rng),
            DataKind::Reversed => ReversedData::initialize(length, max_value, rng),
            DataKind::Gaussian => GaussianData::initialize(length, max_value, rng),
        })
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DataKind::Uniform => "uniform",
            DataKind::Permutation => "permutation",
            DataKind::Reversed => "reversed",
            DataKind::Gaussian => "gaussian",
        })
    }
}

/// Fill a new sequence with `length` values drawn uniformly from `[0, max_value)`
#[allow(dead_code)]
pub fn initialize(
    length: i64,
    max_value: Value,
    rng: &mut impl Rng,
) -> crate::error::Result<Vec<Value>> {
    DataKind::Uniform.initialize(length, max_value, rng)
}

/// Count the pairs `i < j` with `slice[i] > slice[j]`
///
/// Every adjacent swap of an out-of-order pair removes exactly one inversion, so this is the
/// total number of swaps the stepwise sorts perform.
pub fn count_inversions<T: Ord>(slice: &[T]) -> u64 {
    let mut inversions = 0;
    for (i, left) in slice.iter().enumerate() {
        inversions += slice[i + 1..].iter().filter(|right| left > *right).count() as u64;
    }
    inversions
}

/// A counter shared across the whole program
#[derive(Debug)]
pub struct GlobalCounter(AtomicU64);

impl GlobalCounter {
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn increase(&self, amount: u64) {
        self.0.fetch_add(amount, Ordering::Relaxed);
    }

    pub fn read(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for GlobalCounter {
    fn default() -> Self {
        Self::new()
    }
}
