//! Stepwise insertion sort, see <https://en.wikipedia.org/wiki/Insertion_sort>

use super::{StepResult, StepwiseSort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// `sequence[..outer]` is sorted except for the element being shifted, which sits at `cursor`
    Inserting { outer: usize, cursor: usize },
    Complete,
}

/// Insertion sort performing a single shift per [`StepwiseSort::step`]
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    sequence: Vec<T>,
    state: State,
}

impl<T: Ord> InsertionSort<T> {
    pub fn new(sequence: Vec<T>) -> Self {
        Self {
            sequence,
            state: State::Inserting {
                outer: 1,
                cursor: 1,
            },
        }
    }
}

impl<T: Ord> StepwiseSort<T> for InsertionSort<T> {
    fn step(&mut self) -> StepResult {
        loop {
            let State::Inserting { outer, cursor } = &mut self.state else {
                return StepResult::COMPLETE;
            };

            if *outer >= self.sequence.len() {
                log::debug!("Insertion sort complete");
                self.state = State::Complete;
                return StepResult::COMPLETE;
            }

            let j = *cursor;
            if j > 0 && super::out_of_order(&self.sequence[j - 1], &self.sequence[j]) {
                self.sequence.swap(j - 1, j);
                *cursor -= 1;
                return StepResult::progressed(1);
            }

            // The element found its place, move on to the next one
            *outer += 1;
            *cursor = *outer;
        }
    }

    fn sequence(&self) -> &[T] {
        &self.sequence
    }

    fn is_complete(&self) -> bool {
        self.state == State::Complete
    }
}
