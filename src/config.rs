//! Validated run configuration

use crate::{
    algorithms::Algorithm,
    cli::Args,
    data::{DataKind, Value},
    error::{Error, positive},
    render::DrawMode,
};

/// Everything needed to set up a visualization, all sizes are positive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub data: DataKind,
    pub length: usize,
    pub max_value: Value,
    pub speed_divisor: u64,
    pub draw_mode: DrawMode,
    pub canvas_height: usize,
    pub max_ticks: Option<u64>,
    pub seed: Option<u64>,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self, Error> {
        let length = positive("length", args.length)?;
        positive("max-value", args.max_value)?;
        let speed_divisor = positive("speed", args.speed)? as u64;
        let canvas_height = positive("canvas-height", args.canvas_height)?;

        Ok(Self {
            algorithm: args.algorithm,
            data: args.data,
            length,
            max_value: args.max_value,
            speed_divisor,
            draw_mode: args
                .draw_mode
                .unwrap_or_else(|| args.algorithm.default_draw_mode()),
            canvas_height,
            max_ticks: args.max_ticks,
            seed: args.seed,
            preview: args.preview,
        })
    }
}
