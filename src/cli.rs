//! Command line input handling

use crate::{algorithms::Algorithm, data::DataKind, render::DrawMode};

/// Visualize a comparison sort, one step per frame
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The sorting algorithm to visualize
    #[arg()]
    pub algorithm: Algorithm,
    /// The number of elements to sort
    #[arg(short, long, default_value_t = 1_000, allow_negative_numbers = true)]
    pub length: i64,
    /// Elements are drawn from `[0, max-value)`
    #[arg(short, long, default_value_t = 800, allow_negative_numbers = true)]
    pub max_value: i64,
    /// Only step on every `speed`-th frame, higher is slower
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub speed: i64,
    /// How to draw elements, defaults to the algorithm's own mode
    #[arg(long)]
    pub draw_mode: Option<DrawMode>,
    /// The initial distribution of the elements
    #[arg(short, long, default_value_t = DataKind::Uniform)]
    pub data: DataKind,
    /// The number of rows of the canvas
    #[arg(long, default_value_t = 800, allow_negative_numbers = true)]
    pub canvas_height: i64,
    /// Stop after this many frames even if not sorted
    #[arg(long)]
    pub max_ticks: Option<u64>,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the first and last frame as text
    #[arg(short, long)]
    pub preview: bool,
}
