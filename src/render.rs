// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The banded renderer.  Every pixel of the Mandelbrot set is
//! independent of every other pixel, so the raster is cut into
//! horizontal bands and one freshly spawned OS thread renders each
//! band into its own exclusive stripe of the pixel buffer.  The
//! render call returns only once every worker has been joined, which
//! is what makes timing a single call meaningful: the wall clock
//! around it covers all of the work and nothing else keeps running.

extern crate crossbeam;

use itertools::iproduct;

use bands::{partition_rows, RowBand};
use escape::{color_for, escape_time};
use grid::PixelGrid;
use viewport::Viewport;

/// Renders a fixed viewport at a fixed iteration budget into any grid
/// it is handed, either on the calling thread or split across banded
/// workers.  Carries no mutable state, so one renderer can be shared
/// freely by concurrent workers.
pub struct BandRenderer {
    viewport: Viewport,
    limit: usize,
}

impl BandRenderer {
    /// Requires the viewport to render and the per-pixel iteration
    /// budget.
    pub fn new(viewport: Viewport, limit: usize) -> BandRenderer {
        BandRenderer { viewport, limit }
    }

    /// Render every pixel of the grid on the calling thread, top row
    /// first.  This is the plain twin of [`render_parallel`]: the two
    /// produce identical grids, and the tests hold them to that.
    ///
    /// [`render_parallel`]: #method.render_parallel
    pub fn render_sequential(&self, grid: &mut PixelGrid) {
        let (width, height) = (grid.width(), grid.height());
        for (y, x) in iproduct!(0..height, 0..width) {
            let c = self.viewport.point_at(x, y, width, height);
            grid.set(x, y, color_for(escape_time(c, self.limit), self.limit));
        }
    }

    /// Render the full grid using up to `workers` concurrent threads,
    /// one per row band.  The grid is split into disjoint per-band
    /// stripes before anything is spawned, each worker writes only its
    /// own stripe, and the scope joins every worker before this
    /// returns, so the caller observes either no new frame or a
    /// complete one.  A single worker still goes through a spawned
    /// thread rather than rendering inline; every worker count pays
    /// the same spawn and join overhead, and the timing sweep compares
    /// like with like.
    ///
    /// A worker that cannot be spawned or that panics is fatal and
    /// takes the process down; there is no partial-render recovery.
    pub fn render_parallel(&self, grid: &mut PixelGrid, workers: usize) {
        let (width, height) = (grid.width(), grid.height());
        let bands = partition_rows(height, workers);
        let stripes = grid.band_rows_mut(&bands);
        crossbeam::scope(|spawner| {
            for (band, stripe) in bands.iter().zip(stripes) {
                let band = *band;
                spawner.spawn(move |_| {
                    self.render_band(stripe, band, width, height);
                });
            }
        })
        .unwrap();
    }

    /// Fill one band's stripe.  The stripe's first element is the
    /// band's first row, so writes are offset by the band start.
    fn render_band(&self, stripe: &mut [u32], band: RowBand, width: usize, height: usize) {
        debug_assert_eq!(stripe.len(), band.len() * width);
        for (y, x) in iproduct!(band.rows(), 0..width) {
            let c = self.viewport.point_at(x, y, width, height);
            stripe[(y - band.start_row) * width + x] =
                color_for(escape_time(c, self.limit), self.limit);
        }
    }
}
