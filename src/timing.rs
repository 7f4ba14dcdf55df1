//! Wall-clock measurement of whole renders.  A "sample" here is one
//! complete frame: the clock starts just before the banded render is
//! kicked off and stops once every worker has been joined, so thread
//! spawn and join overhead is inside the measured window on purpose.
//! That window is the thing the worker-count sweep exists to compare.

use std::time::Instant;

use failure::Error;

use grid::PixelGrid;
use output::TimingLog;
use render::BandRenderer;

/// One timed render: how many banded workers ran it and how many
/// wall-clock milliseconds the full frame took.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimingSample {
    /// Worker threads used for this render.
    pub worker_count: usize,
    /// Milliseconds from kicking off the render to the last join.
    pub elapsed_ms: u64,
}

/// Times one full-frame render at each worker count in turn, appending
/// every sample to the log as it is produced.  Samples come back in
/// trial order, one per count.  No warm-up, no repetition: one count,
/// one render, one sample.  Summary statistics are the caller's
/// business; see [`compute_median`] for the repeated-trial side.
///
/// [`compute_median`]: fn.compute_median.html
pub fn sweep<I>(
    renderer: &BandRenderer,
    grid: &mut PixelGrid,
    counts: I,
    log: &mut TimingLog,
) -> Result<Vec<TimingSample>, Error>
where
    I: IntoIterator<Item = usize>,
{
    let mut samples = Vec::new();
    for worker_count in counts {
        let sample = TimingSample {
            worker_count,
            elapsed_ms: time_render(renderer, grid, worker_count),
        };
        log.record(sample)?;
        samples.push(sample);
    }
    Ok(samples)
}

/// Times `trials` renders of one fixed worker count, returning each
/// trial's milliseconds in the order the trials ran.  This is the
/// input [`compute_median`] wants.
///
/// [`compute_median`]: fn.compute_median.html
pub fn repeat_trials(
    renderer: &BandRenderer,
    grid: &mut PixelGrid,
    workers: usize,
    trials: usize,
) -> Vec<u64> {
    let mut times = Vec::with_capacity(trials);
    for _ in 0..trials {
        times.push(time_render(renderer, grid, workers));
    }
    times
}

/// Median of a set of trial times: sorted ascending, the middle
/// element, or for an even count the integer-truncated mean of the
/// two middle elements.
///
/// Panics when handed no trials at all.
pub fn compute_median(times: &[u64]) -> u64 {
    assert!(!times.is_empty(), "median of zero trials");
    let mut sorted = times.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2
    } else {
        sorted[mid]
    }
}

fn time_render(renderer: &BandRenderer, grid: &mut PixelGrid, workers: usize) -> u64 {
    let start = Instant::now();
    renderer.render_parallel(grid, workers);
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use viewport::Viewport;

    #[test]
    fn median_of_an_odd_count_is_the_middle_element() {
        assert_eq!(compute_median(&[30, 10, 20]), 20);
    }

    #[test]
    fn median_of_an_even_count_averages_the_middle_pair() {
        assert_eq!(compute_median(&[40, 10, 30, 20]), 25);
    }

    #[test]
    fn median_truncates_a_fractional_mean() {
        assert_eq!(compute_median(&[10, 15]), 12);
    }

    #[test]
    fn median_of_one_trial_is_that_trial() {
        assert_eq!(compute_median(&[7]), 7);
    }

    #[test]
    #[should_panic(expected = "zero trials")]
    fn median_of_no_trials_panics() {
        compute_median(&[]);
    }

    #[test]
    fn sweep_yields_one_sample_per_count_in_order() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("times.csv");
        let renderer = BandRenderer::new(Viewport::WHOLE_SET, 20);
        let mut grid = PixelGrid::new(16, 16);
        let mut log = TimingLog::append(&log_path).unwrap();

        let samples = sweep(&renderer, &mut grid, 1..=4, &mut log).unwrap();

        let counts: Vec<usize> = samples.iter().map(|s| s.worker_count).collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);

        // Each sample lands in the log as its own "<ms>," line.
        drop(log);
        let logged = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = logged.lines().collect();
        assert_eq!(lines.len(), samples.len());
        for (line, sample) in lines.iter().zip(&samples) {
            assert_eq!(*line, format!("{},", sample.elapsed_ms));
        }
    }

    #[test]
    fn repeat_trials_times_every_trial() {
        let renderer = BandRenderer::new(Viewport::WHOLE_SET, 20);
        let mut grid = PixelGrid::new(16, 16);
        assert_eq!(repeat_trials(&renderer, &mut grid, 2, 5).len(), 5);
    }
}
