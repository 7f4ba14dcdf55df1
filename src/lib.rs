#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Banded Mandelbrot benchmark
//!
//! The Mandelbrot set is rendered by iterating z = z * z + c for the
//! complex number c under each pixel and counting how many steps it
//! takes the orbit to escape a circle of radius two; points whose
//! orbits never leave are inside the set and drawn black, and the
//! escape count of everything else becomes its color.  Every pixel's
//! count is independent of every other pixel's, which makes the
//! render an almost perfect parallel workload: cut the raster into
//! horizontal bands, hand each band to its own OS thread, and the
//! frame should in principle get faster with every worker added.
//!
//! This crate exists to measure how true that is in practice.  The
//! renderer draws the same frame at a series of worker counts while a
//! harness times each full render, logs the samples, and reports a
//! median over repeated trials, so the scaling curve of real threads
//! on real hardware can be read straight off the numbers.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
extern crate num;

#[cfg(test)]
extern crate tempfile;

pub mod bands;
pub mod escape;
pub mod grid;
pub mod output;
pub mod render;
pub mod timing;
pub mod viewport;

pub use render::BandRenderer;
