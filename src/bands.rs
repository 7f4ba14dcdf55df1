//! Work partitioning.  The raster is cut into horizontal bands, one
//! band per worker, each band a contiguous half-open range of rows.
//! Together the bands of a partition tile the full height exactly:
//! no row rendered twice, no row skipped.

use std::ops::Range;

/// A half-open range of raster rows assigned to one worker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowBand {
    /// First row of the band.
    pub start_row: usize,
    /// One past the last row of the band.
    pub end_row: usize,
}

impl RowBand {
    /// The band's rows as an iterable range.
    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.end_row
    }

    /// Number of rows in the band.
    pub fn len(&self) -> usize {
        self.end_row - self.start_row
    }

    /// True when the band holds no rows.
    pub fn is_empty(&self) -> bool {
        self.start_row == self.end_row
    }
}

/// Divide `height` rows among up to `workers` bands of near-equal
/// height.  Every band gets `height / workers` rows except the last,
/// which stretches to the bottom of the raster and so absorbs the
/// division remainder.  Asking for more workers than there are rows
/// yields one single-row band per row (fewer bands than requested,
/// never more).  At least one worker must be requested.
pub fn partition_rows(height: usize, workers: usize) -> Vec<RowBand> {
    assert!(workers > 0, "at least one worker is required");
    if height == 0 {
        return Vec::new();
    }
    let workers = workers.min(height);
    let increment = height / workers;
    let mut bands = Vec::with_capacity(workers);
    for i in 0..workers {
        let start_row = i * increment;
        let end_row = if i + 1 == workers {
            height
        } else {
            start_row + increment
        };
        bands.push(RowBand { start_row, end_row });
    }
    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every partition must tile `[0, height)` exactly, in order.
    fn assert_tiles(bands: &[RowBand], height: usize) {
        let mut next_row = 0;
        for band in bands {
            assert_eq!(band.start_row, next_row);
            assert!(band.end_row > band.start_row);
            next_row = band.end_row;
        }
        assert_eq!(next_row, height);
    }

    #[test]
    fn even_division_gives_equal_bands() {
        let bands = partition_rows(640, 8);
        assert_eq!(bands.len(), 8);
        assert!(bands.iter().all(|band| band.len() == 80));
        assert_tiles(&bands, 640);
    }

    #[test]
    fn last_band_absorbs_the_remainder() {
        let bands = partition_rows(640, 7);
        assert_eq!(bands.len(), 7);
        assert_eq!(bands[6].rows(), 546..640);
        assert_tiles(&bands, 640);

        let bands = partition_rows(1024, 6);
        assert_eq!(bands[5].rows(), 850..1024);
        assert_tiles(&bands, 1024);
    }

    #[test]
    fn every_configuration_covers_every_row() {
        for &height in &[1, 2, 5, 31, 640, 1024] {
            for workers in 1..=9 {
                let bands = partition_rows(height, workers);
                assert_eq!(bands.len(), workers.min(height));
                assert_tiles(&bands, height);
            }
        }
    }

    #[test]
    fn more_workers_than_rows_degrades_to_one_row_each() {
        let bands = partition_rows(3, 8);
        assert_eq!(bands.len(), 3);
        assert!(bands.iter().all(|band| band.len() == 1));
        assert_tiles(&bands, 3);
    }

    #[test]
    fn zero_height_has_nothing_to_partition() {
        assert!(partition_rows(0, 4).is_empty());
    }
}
