use clap::Parser as _;
use rand::SeedableRng as _;

use render::Renderer as _;

mod algorithms;
mod cli;
mod config;
mod data;
mod driver;
mod error;
mod render;

#[cfg(test)]
mod test;

/// Size of the text preview
const PREVIEW_COLUMNS: usize = 80;
const PREVIEW_ROWS: usize = 20;

/// Program entry point
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::Config::try_from(cli::Args::parse())?;
    log::debug!("{config:?}");

    println!(
        "Visualizing {algorithm} (stable: {stable})",
        algorithm = config.algorithm,
        stable = config.algorithm.is_stable(),
    );
    println!(
        "Length: {}, Max value: {}, Data: {}, Speed: {}, Draw mode: {}",
        config.length, config.max_value, config.data, config.speed_divisor, config.draw_mode
    );

    // Create rng
    let mut rng = match config.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => {
            println!("No seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    };

    let sequence = config
        .data
        .initialize(config.length as i64, config.max_value, &mut rng)?;
    let inversions = data::count_inversions(&sequence);

    let mut canvas =
        render::FrameBuffer::new(config.length, config.canvas_height, config.max_value);
    log::info!(
        "Sorting {} elements with {inversions} inversions on a {}x{} canvas",
        config.length,
        canvas.columns(),
        canvas.rows()
    );

    let mut driver = driver::FrameDriver::new(
        config.algorithm.sorter(sequence),
        config.speed_divisor,
        config.draw_mode,
    );
    driver.present(&mut canvas);

    let mut preview = config.preview.then(|| {
        render::FrameBuffer::new(
            PREVIEW_COLUMNS.min(config.length),
            PREVIEW_ROWS,
            config.max_value,
        )
    });
    if let Some(preview) = &mut preview {
        preview.draw(&render::Snapshot::new(driver.sequence()), config.draw_mode);
        println!("{preview}");
    }

    let mut stats: rolling_stats::Stats<f64> = rolling_stats::Stats::new();
    let bar = indicatif::ProgressBar::new(inversions);

    let now = std::time::Instant::now();
    let complete = driver.run(&mut canvas, config.max_ticks, |result| {
        if result.changed() {
            stats.update(result.swaps as f64);
            bar.inc(result.swaps as u64);
        }
    });
    let elapsed = now.elapsed();
    bar.finish();

    debug_assert!(
        !complete || driver.sequence().is_sorted(),
        "{:?} is not sorted after completion",
        driver.sequence()
    );

    if let Some(preview) = &mut preview {
        preview.draw(&render::Snapshot::new(driver.sequence()), config.draw_mode);
        println!("{preview}");
    }

    let progress = driver.progress();
    log::info!("Finished in {elapsed:?}, complete: {complete}");
    println!(
        "Complete: {complete}, Ticks: {}, Steps: {}, Swaps: {}, Frames: {}",
        progress.ticks,
        progress.steps,
        progress.swaps,
        canvas.frames()
    );
    println!("Swaps per frame: {stats:?}");

    #[cfg(feature = "counters")]
    println!(
        "Comparisons: {}",
        algorithms::COMPARISON_COUNTER.read()
    );

    Ok(())
}
