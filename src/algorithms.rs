//! The stepwise sorting algorithms
//!
//! Each sort is a resumable state machine: [`StepwiseSort::step`] performs one observable unit of
//! work and returns, so an external driver controls the pace and can render in between.

pub mod bubblesort;
pub mod cocktailsort;
pub mod insertionsort;

use crate::render::{DrawMode, Snapshot};

#[allow(dead_code)]
pub static COMPARISON_COUNTER: crate::data::GlobalCounter = crate::data::GlobalCounter::new();

/// Compare two elements, a swap is needed iff `left > right`
#[inline]
fn out_of_order<T: Ord>(left: &T, right: &T) -> bool {
    #[cfg(feature = "counters")]
    COMPARISON_COUNTER.increase(1);

    left > right
}

/// The outcome of a single [`StepwiseSort::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// The number of swaps this step performed
    pub swaps: usize,
    /// Whether the sequence is sorted and no further work will happen
    pub complete: bool,
}

impl StepResult {
    /// The result of every step once sorting has finished
    pub const COMPLETE: Self = Self {
        swaps: 0,
        complete: true,
    };

    /// A step that swapped `swaps` times and may have more work to do
    pub const fn progressed(swaps: usize) -> Self {
        Self {
            swaps,
            complete: false,
        }
    }

    /// Whether the sequence changed during this step
    pub fn changed(&self) -> bool {
        self.swaps > 0
    }
}

/// A sorting algorithm that can be advanced one step at a time
pub trait StepwiseSort<T: Ord> {
    /// Advance the algorithm by one unit of work
    ///
    /// Once a step reported `complete`, every further call returns [`StepResult::COMPLETE`] and
    /// leaves the sequence untouched.
    fn step(&mut self) -> StepResult;

    /// The live sequence
    fn sequence(&self) -> &[T];

    /// Whether sorting has finished
    fn is_complete(&self) -> bool;

    /// An immutable copy of the current sequence for rendering
    fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        Snapshot::new(self.sequence())
    }
}

/// The different stepwise sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Bubble sort, one swap per step
    Bubble,
    /// Cocktail shaker sort, one forward and backward round per step
    CocktailShaker,
    /// Insertion sort, one shift per step
    Insertion,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Algorithm::Bubble => "Bubble sort",
            Algorithm::CocktailShaker => "Cocktail shaker sort",
            Algorithm::Insertion => "Insertion sort",
        })
    }
}

impl Algorithm {
    /// Create the stepwise sorter taking ownership of `sequence`
    pub fn sorter<T: Ord + 'static>(self, sequence: Vec<T>) -> Box<dyn StepwiseSort<T>> {
        match self {
            Algorithm::Bubble => Box::new(bubblesort::BubbleSort::new(sequence)),
            Algorithm::CocktailShaker => Box::new(cocktailsort::CocktailShakerSort::new(sequence)),
            Algorithm::Insertion => Box::new(insertionsort::InsertionSort::new(sequence)),
        }
    }

    /// Return whether the sort is stable
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Bubble => true,
            Algorithm::CocktailShaker => true,
            Algorithm::Insertion => true,
        }
    }

    /// The draw mode used when none is configured
    pub fn default_draw_mode(self) -> DrawMode {
        match self {
            Algorithm::Bubble => DrawMode::Bars,
            Algorithm::CocktailShaker => DrawMode::Bars,
            Algorithm::Insertion => DrawMode::Lines,
        }
    }
}
