//! The raster buffer.  One `PixelGrid` is allocated per render session
//! and re-rendered in place across timing trials; workers never share
//! cells because the grid hands each of them its own non-overlapping
//! stripe of rows.

use bands::RowBand;

/// A `width` x `height` raster of packed 0xRRGGBB values, stored
/// row-major starting from the top row.
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelGrid {
    /// Allocate a zeroed (all-black) grid.
    pub fn new(width: usize, height: usize) -> PixelGrid {
        PixelGrid {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Columns in the raster.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows in the raster.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the color at a pixel coordinate.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    /// Write the color at a pixel coordinate.
    pub fn set(&mut self, x: usize, y: usize, color: u32) {
        self.pixels[y * self.width + x] = color;
    }

    /// The whole raster as one row-major slice, top row first.  This
    /// is the view the image writer consumes.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Split the buffer into one mutable stripe per band, in band
    /// order.  Each stripe covers exactly the rows of its band, so
    /// handing the stripes to concurrent workers cannot produce
    /// overlapping writes no matter what the workers do.  The bands
    /// must be contiguous from row zero, which is what the partitioner
    /// produces; anything else is a caller bug and panics.
    pub fn band_rows_mut(&mut self, bands: &[RowBand]) -> Vec<&mut [u32]> {
        let width = self.width;
        let mut stripes = Vec::with_capacity(bands.len());
        let mut rest: &mut [u32] = &mut self.pixels;
        let mut next_row = 0;
        for band in bands {
            assert_eq!(
                band.start_row, next_row,
                "bands must be contiguous from row zero"
            );
            let (stripe, tail) = rest.split_at_mut(band.len() * width);
            stripes.push(stripe);
            rest = tail;
            next_row = band.end_row;
        }
        stripes
    }
}
