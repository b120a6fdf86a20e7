//! The per-frame driver calling into a stepwise sort

use crate::{
    algorithms::{StepResult, StepwiseSort},
    data::Value,
    render::{DrawMode, Renderer},
};

/// What happened during a single [`FrameDriver::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The speed divisor skipped this tick
    Skipped,
    /// The sort was stepped
    Stepped(StepResult),
}

/// Counters collected while driving a sort
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub ticks: u64,
    pub steps: u64,
    pub swaps: u64,
    pub frames: u64,
}

/// Drives a [`StepwiseSort`] from an external clock
///
/// Every tick where `ticks % speed_divisor == 0` performs one step. A step that changed the
/// sequence is followed by drawing a fresh snapshot. The driver never looks at wall-clock time,
/// whoever calls [`FrameDriver::tick`] decides the pace.
pub struct FrameDriver {
    sorter: Box<dyn StepwiseSort<Value>>,
    speed_divisor: u64,
    mode: DrawMode,
    progress: Progress,
}

impl FrameDriver {
    pub fn new(sorter: Box<dyn StepwiseSort<Value>>, speed_divisor: u64, mode: DrawMode) -> Self {
        debug_assert!(speed_divisor > 0);

        Self {
            sorter,
            speed_divisor,
            mode,
            progress: Progress::default(),
        }
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.sorter.is_complete()
    }

    pub fn sequence(&self) -> &[Value] {
        self.sorter.sequence()
    }

    /// Draw the current state without stepping, e.g. for the first frame
    pub fn present(&mut self, renderer: &mut impl Renderer) {
        renderer.draw(&self.sorter.snapshot(), self.mode);
        self.progress.frames += 1;
    }

    /// Handle one frame of the external clock
    pub fn tick(&mut self, renderer: &mut impl Renderer) -> Tick {
        let tick = self.progress.ticks;
        self.progress.ticks += 1;

        if tick % self.speed_divisor != 0 {
            return Tick::Skipped;
        }

        let result = self.sorter.step();
        self.progress.steps += 1;
        log::trace!("Tick {tick}: {result:?}");

        if result.changed() {
            self.progress.swaps += result.swaps as u64;
            self.present(renderer);
        }

        Tick::Stepped(result)
    }

    /// Tick until the sort completes or `max_ticks` ticks have passed in total
    ///
    /// `on_step` sees every step result, returns whether the sort completed.
    pub fn run(
        &mut self,
        renderer: &mut impl Renderer,
        max_ticks: Option<u64>,
        mut on_step: impl FnMut(&StepResult),
    ) -> bool {
        while !self.is_complete() {
            if max_ticks.is_some_and(|max| self.progress.ticks >= max) {
                log::info!("Stopping after {} ticks", self.progress.ticks);
                return false;
            }

            if let Tick::Stepped(result) = self.tick(renderer) {
                on_step(&result);
            }
        }

        true
    }
}
