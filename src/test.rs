//! Contains various helpers intended for testing purposes

use rand::{SeedableRng as _, seq::SliceRandom as _};

use crate::{
    algorithms::StepwiseSort,
    data::Value,
    render::{DrawMode, Renderer, Snapshot},
};

/// The seed shared by all tests
pub const TEST_SEED: u64 = 0xa8bf17eb656f828d;
/// The rng used by each test
pub type Rng = rand::rngs::SmallRng;

/// Generate the `Rng` for a test
pub fn test_rng() -> Rng {
    Rng::seed_from_u64(TEST_SEED)
}

/// A renderer keeping every frame it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Vec<Value>>,
    pub modes: Vec<DrawMode>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, snapshot: &Snapshot<Value>, mode: DrawMode) {
        self.frames.push(snapshot.to_vec());
        self.modes.push(mode);
    }
}

/// An element remembering its initial position, compared by key only
#[derive(Debug, Clone)]
pub struct Tagged {
    pub origin: usize,
    pub key: usize,
}

impl Tagged {
    /// Tag each key with its position
    pub fn tag_all(keys: &[usize]) -> Vec<Self> {
        keys.iter()
            .enumerate()
            .map(|(origin, &key)| Self { origin, key })
            .collect()
    }

    /// Sorted by key with equal keys in their initial order
    pub fn is_stable_sorted(slice: &[Self]) -> bool {
        slice.windows(2).all(|pair| {
            let [previous, current] = pair else {
                unreachable!()
            };
            previous.key < current.key
                || (previous.key == current.key && previous.origin < current.origin)
        })
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Step `sorter` until it completes, returning the number of steps taken
///
/// Panics if sorting takes more than `limit` steps.
pub fn run_to_completion<T: Ord, S: StepwiseSort<T> + ?Sized>(sorter: &mut S, limit: usize) -> usize {
    let mut steps = 0;
    loop {
        steps += 1;
        assert!(steps <= limit, "Not complete after {limit} steps");

        if sorter.step().complete {
            return steps;
        }
    }
}

/// An empty sequence completes on the first step
pub fn test_empty<S: StepwiseSort<Value>>(new: fn(Vec<Value>) -> S) {
    let mut sorter = new(Vec::new());
    assert!(sorter.step().complete);
    assert!(sorter.is_complete());
}

/// A single element completes on the first step without change
pub fn test_single<S: StepwiseSort<Value>>(new: fn(Vec<Value>) -> S) {
    let mut sorter = new(vec![1]);
    let result = sorter.step();
    assert!(result.complete);
    assert!(!result.changed());
    assert_eq!(sorter.sequence(), [1]);
}

/// Sort some shuffled sequences, check they end up sorted within `n^2` steps and keep their values
pub fn test_random_sorted<const RUNS: usize, const TEST_SIZE: usize, S: StepwiseSort<usize>>(
    new: fn(Vec<usize>) -> S,
) {
    let mut rng = test_rng();

    let distinct: Vec<usize> = (0..TEST_SIZE).collect();
    let repeated: Vec<usize> = std::iter::repeat_n(0..TEST_SIZE / 4, 4).flatten().collect();

    for expected in [distinct, repeated] {
        for run in 0..RUNS {
            let mut values = expected.clone();
            values.shuffle(&mut rng);

            let mut sorter = new(values);
            run_to_completion(&mut sorter, TEST_SIZE * TEST_SIZE);

            let mut sorted = expected.clone();
            sorted.sort();
            assert_eq!(sorter.sequence(), sorted, "Run {run} was not sorted");
        }
    }
}

/// Like [`test_random_sorted`] but checks equal elements keep their order
pub fn test_random_stable_sorted<const RUNS: usize, const TEST_SIZE: usize, S: StepwiseSort<Tagged>>(
    new: fn(Vec<Tagged>) -> S,
) {
    let mut rng = test_rng();
    let mut keys: Vec<usize> = std::iter::repeat_n(0..TEST_SIZE / 4, 4).flatten().collect();

    for run in 0..RUNS {
        keys.shuffle(&mut rng);

        let mut sorter = new(Tagged::tag_all(&keys));
        run_to_completion(&mut sorter, TEST_SIZE * TEST_SIZE);

        assert!(
            Tagged::is_stable_sorted(sorter.sequence()),
            "Run {run} was not stable sorted"
        );
    }
}

/// Once complete, steps report no change and leave the sequence alone
pub fn test_idempotent_after_completion<S: StepwiseSort<Value>>(new: fn(Vec<Value>) -> S) {
    let mut sorter = new(vec![4, -2, 7, 7, 0, -9, 3]);
    run_to_completion(&mut sorter, 100);
    let finished = sorter.snapshot();

    for _ in 0..10 {
        assert_eq!(sorter.step(), crate::algorithms::StepResult::COMPLETE);
        assert!(sorter.is_complete());
        assert_eq!(sorter.snapshot(), finished);
    }
}

/// Every changing step is a single swap producing a new distinct snapshot
pub fn test_snapshot_per_swap<const TEST_SIZE: usize, S: StepwiseSort<Value>>(
    new: fn(Vec<Value>) -> S,
) {
    let values = crate::data::initialize(TEST_SIZE as i64, 50, &mut test_rng()).unwrap();
    let inversions = crate::data::count_inversions(&values);

    let mut sorter = new(values);
    let mut previous = sorter.snapshot();
    let mut snapshots = 0;

    loop {
        let result = sorter.step();
        if result.changed() {
            assert_eq!(result.swaps, 1);
            let current = sorter.snapshot();
            assert_ne!(current, previous);
            previous = current;
            snapshots += 1;
        }
        if result.complete {
            break;
        }
    }

    assert_eq!(snapshots, inversions);
}
