//! Stepwise bubble sort, see <https://en.wikipedia.org/wiki/Bubble_sort>

use super::{StepResult, StepwiseSort};

/// Resumable position inside the bubble sort loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning {
        /// Pairs `(index - 1, index)` with `index < bound` are still unsorted
        bound: usize,
        /// Right element of the next pair to compare
        index: usize,
        /// Position of the last swap in this pass, `0` if there was none
        last_swap: usize,
    },
    Complete,
}

/// Bubble sort performing a single swap per [`StepwiseSort::step`]
///
/// A step scans forward from the current position to the next out-of-order pair and swaps it.
/// At the end of a pass the bound shrinks to the position of the last swap, a pass without
/// swaps completes the sort. A step thus does at most two passes worth of comparisons.
#[derive(Debug, Clone)]
pub struct BubbleSort<T> {
    sequence: Vec<T>,
    state: State,
}

impl<T: Ord> BubbleSort<T> {
    pub fn new(sequence: Vec<T>) -> Self {
        let state = State::Scanning {
            bound: sequence.len(),
            index: 1,
            last_swap: 0,
        };

        Self { sequence, state }
    }
}

impl<T: Ord> StepwiseSort<T> for BubbleSort<T> {
    fn step(&mut self) -> StepResult {
        loop {
            let State::Scanning {
                bound,
                index,
                last_swap,
            } = &mut self.state
            else {
                return StepResult::COMPLETE;
            };

            if *index >= *bound {
                // End of the pass
                if *last_swap == 0 {
                    log::debug!("Bubble sort complete");
                    self.state = State::Complete;
                    return StepResult::COMPLETE;
                }

                log::debug!("Bubble sort pass done, bound {bound} -> {last_swap}");
                *bound = *last_swap;
                *index = 1;
                *last_swap = 0;
                continue;
            }

            let i = *index;
            *index += 1;

            if super::out_of_order(&self.sequence[i - 1], &self.sequence[i]) {
                self.sequence.swap(i - 1, i);
                *last_swap = i;
                return StepResult::progressed(1);
            }
        }
    }

    fn sequence(&self) -> &[T] {
        &self.sequence
    }

    fn is_complete(&self) -> bool {
        self.state == State::Complete
    }
}
