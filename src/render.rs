//! Drawing sequences onto a canvas

use crate::data::Value;

/// How each element is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DrawMode {
    /// A single box at the height of the value
    Bars,
    /// A vertical line from the baseline up to the value
    Lines,
}

impl std::fmt::Display for DrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DrawMode::Bars => "bars",
            DrawMode::Lines => "lines",
        })
    }
}

/// An immutable copy of a sequence at some point of the sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T>(Box<[T]>);

impl<T: Clone> Snapshot<T> {
    pub fn new(sequence: &[T]) -> Self {
        Self(sequence.into())
    }
}

impl<T> std::ops::Deref for Snapshot<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

/// A drawing surface for sequence snapshots
pub trait Renderer {
    /// Replace whatever was drawn before with `snapshot`
    fn draw(&mut self, snapshot: &Snapshot<Value>, mode: DrawMode);
}

/// A grid of cells standing in for a pixel canvas
///
/// Column `x` shows the element at `x * len / columns`, its value scaled from `[0, max_value)`
/// onto the rows. Rows are counted from the bottom. Only the lit height per column is stored,
/// which keeps [`Renderer::draw`] linear in the column count.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    rows: usize,
    max_value: Value,
    /// The lit row per column, `None` for columns without an element
    heights: Vec<Option<usize>>,
    mode: DrawMode,
    frames: u64,
}

impl FrameBuffer {
    /// Create a blank canvas, `columns`, `rows` and `max_value` are positive
    pub fn new(columns: usize, rows: usize, max_value: Value) -> Self {
        debug_assert!(columns > 0 && rows > 0 && max_value > 0);

        Self {
            rows,
            max_value,
            heights: vec![None; columns],
            mode: DrawMode::Lines,
            frames: 0,
        }
    }

    pub fn columns(&self) -> usize {
        self.heights.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Scale `value` onto a row, out of range values are clamped
    fn row_of(&self, value: Value) -> usize {
        let value = value.clamp(0, self.max_value - 1);
        (value as i128 * self.rows as i128 / self.max_value as i128) as usize
    }

    /// Whether the cell at column `x` and row `y` (from the bottom) is lit
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        match self.heights.get(x).copied().flatten() {
            None => false,
            Some(height) => match self.mode {
                DrawMode::Bars => y == height,
                DrawMode::Lines => y <= height,
            },
        }
    }
}

impl Renderer for FrameBuffer {
    fn draw(&mut self, snapshot: &Snapshot<Value>, mode: DrawMode) {
        let columns = self.columns();
        let len = snapshot.len();

        for x in 0..columns {
            let index = x * len / columns;
            let height = snapshot.get(index).map(|&value| self.row_of(value));
            self.heights[x] = height;
        }

        self.mode = mode;
        self.frames += 1;
    }
}

impl std::fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lit = match self.mode {
            DrawMode::Bars => '#',
            DrawMode::Lines => '|',
        };

        for y in (0..self.rows).rev() {
            let line: String = (0..self.columns())
                .map(|x| if self.is_lit(x, y) { lit } else { ' ' })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
