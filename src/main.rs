extern crate failure;
extern crate mandelbands;
extern crate num_cpus;

use failure::Error;

use mandelbands::grid::PixelGrid;
use mandelbands::output::{write_tga, TimingLog};
use mandelbands::timing::{compute_median, repeat_trials, sweep};
use mandelbands::viewport::Viewport;
use mandelbands::BandRenderer;

const WIDTH: usize = 640;
const HEIGHT: usize = 640;
const MAX_ITERATIONS: usize = 200;
const MAX_WORKERS: usize = 8;
const MEDIAN_TRIALS: usize = 8;
const OUTPUT_FILE: &str = "output.tga";
const TIMING_LOG: &str = "timings.csv";

fn run() -> Result<(), Error> {
    println!("Please wait...");
    println!(
        "Timing 1 through {} workers on {} logical cpus.",
        MAX_WORKERS,
        num_cpus::get()
    );

    let renderer = BandRenderer::new(Viewport::WHOLE_SET, MAX_ITERATIONS);
    let mut grid = PixelGrid::new(WIDTH, HEIGHT);

    {
        let mut log = TimingLog::append(TIMING_LOG)?;
        let samples = sweep(&renderer, &mut grid, 1..=MAX_WORKERS, &mut log)?;
        for sample in &samples {
            println!(
                "Computing the Mandelbrot set with {} workers took {} ms.",
                sample.worker_count, sample.elapsed_ms
            );
        }
    }

    let mut times = repeat_trials(&renderer, &mut grid, 1, MEDIAN_TRIALS);
    for time in &times {
        println!("Computing the Mandelbrot set took {} ms.", time);
    }
    times.sort();
    for time in &times {
        println!("{}", time);
    }
    println!("The median of all times: {}", compute_median(&times));

    write_tga(OUTPUT_FILE, &grid)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        for cause in err.iter_causes() {
            eprintln!("caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
