//! Stepwise cocktail shaker sort, see <https://en.wikipedia.org/wiki/Cocktail_shaker_sort>

use super::{StepResult, StepwiseSort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for the next round, pairs `(i, i + 1)` with `start <= i < end` may be unsorted
    Round { start: usize, end: usize },
    Complete,
}

/// Cocktail shaker sort performing a whole round per [`StepwiseSort::step`]
///
/// A round is a forward sweep followed by a backward sweep. If the forward sweep finds nothing to
/// swap the sort completes right away, without the backward sweep. Both sweeps narrow the
/// unsorted range to their last swap.
#[derive(Debug, Clone)]
pub struct CocktailShakerSort<T> {
    sequence: Vec<T>,
    state: State,
}

impl<T: Ord> CocktailShakerSort<T> {
    pub fn new(sequence: Vec<T>) -> Self {
        let state = State::Round {
            start: 0,
            end: sequence.len().saturating_sub(1),
        };

        Self { sequence, state }
    }

    /// Sweep low to high over `start..end`, returning the swap count and the last swapped pair
    fn forward_sweep(&mut self, start: usize, end: usize) -> (usize, usize) {
        let mut swaps = 0;
        let mut last = start;

        for i in start..end {
            if super::out_of_order(&self.sequence[i], &self.sequence[i + 1]) {
                self.sequence.swap(i, i + 1);
                swaps += 1;
                last = i;
            }
        }

        (swaps, last)
    }

    /// Sweep high to low over `start..end`, returning the swap count and the last swapped pair
    fn backward_sweep(&mut self, start: usize, end: usize) -> (usize, usize) {
        let mut swaps = 0;
        let mut first = start;

        for i in (start..end).rev() {
            if super::out_of_order(&self.sequence[i], &self.sequence[i + 1]) {
                self.sequence.swap(i, i + 1);
                swaps += 1;
                first = i;
            }
        }

        (swaps, first)
    }
}

impl<T: Ord> StepwiseSort<T> for CocktailShakerSort<T> {
    fn step(&mut self) -> StepResult {
        let State::Round { start, end } = self.state else {
            return StepResult::COMPLETE;
        };

        let (forward_swaps, last) = self.forward_sweep(start, end);
        if forward_swaps == 0 {
            log::debug!("Cocktail shaker sort complete");
            self.state = State::Complete;
            return StepResult::COMPLETE;
        }

        // Everything right of `last` is in its final place now
        let end = last;
        let (backward_swaps, first) = self.backward_sweep(start, end);
        let start = if backward_swaps == 0 { start } else { first };

        log::debug!(
            "Cocktail shaker round done, {forward_swaps} + {backward_swaps} swaps, range {start}..{end}"
        );
        self.state = State::Round { start, end };

        StepResult::progressed(forward_swaps + backward_swaps)
    }

    fn sequence(&self) -> &[T] {
        &self.sequence
    }

    fn is_complete(&self) -> bool {
        self.state == State::Complete
    }
}
