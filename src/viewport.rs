//! Contains the Viewport struct, which describes the rectangle of the
//! complex plane that gets mapped onto the raster.  The raster itself
//! is an integral plane with its origin at 0,0 in the upper-left
//! corner; the viewport supplies the real-valued bounds that each
//! pixel coordinate is interpolated into.

use num::Complex;

/// The four bounds of the region of the complex plane being rendered.
/// `left` and `right` are real-axis bounds and `left` must be less
/// than `right`.  `top` and `bottom` are imaginary-axis bounds and are
/// not required to be in any particular order: `top` is simply the
/// value that raster row zero maps to, and `bottom` the value one row
/// past the last maps to, so swapping them flips the image vertically.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Real value of the left raster edge (column zero).
    pub left: f64,
    /// Real value one column past the right raster edge.
    pub right: f64,
    /// Imaginary value of the top raster edge (row zero).
    pub top: f64,
    /// Imaginary value one row past the bottom raster edge.
    pub bottom: f64,
}

impl Viewport {
    /// The classic full view of the set: the whole heart, both bulbs,
    /// and a comfortable margin of escaped space around them.
    pub const WHOLE_SET: Viewport = Viewport {
        left: -2.0,
        right: 1.0,
        top: 1.125,
        bottom: -1.125,
    };

    /// A close-up of the seahorse valley between the cardioid and the
    /// period-two bulb, where the boundary filaments are densest and
    /// iteration counts run high.
    pub const SEAHORSE_DETAIL: Viewport = Viewport {
        left: -0.751_085,
        right: -0.734_975,
        top: 0.118_378,
        bottom: 0.134_488,
    };

    /// Constructor.  Takes the two real-axis bounds and the two
    /// imaginary-axis bounds, in that order.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Viewport {
        Viewport {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Given the column and row of a pixel on a `width` x `height`
    /// raster, return the complex number at the equivalent location in
    /// the viewport.  Plain linear interpolation: column zero lands
    /// exactly on `left`, row zero exactly on `top`, and the far
    /// bounds are approached but never reached because pixel
    /// coordinates stop one short of the raster dimensions.
    pub fn point_at(&self, x: usize, y: usize, width: usize, height: usize) -> Complex<f64> {
        Complex::new(
            self.left + (x as f64) * (self.right - self.left) / (width as f64),
            self.top + (y as f64) * (self.bottom - self.top) / (height as f64),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_on_positive_bounds() {
        let view = Viewport::new(0.0, 5.0, 0.0, 5.0);
        assert_eq!(view.point_at(0, 0, 5, 5), Complex::new(0.0, 0.0));
        assert_eq!(view.point_at(2, 2, 5, 5), Complex::new(2.0, 2.0));
        assert_eq!(view.point_at(4, 4, 5, 5), Complex::new(4.0, 4.0));
    }

    #[test]
    fn point_at_on_mixed_bounds() {
        let view = Viewport::new(-2.0, 2.0, -2.0, 2.0);
        assert_eq!(view.point_at(2, 2, 4, 4), Complex::new(0.0, 0.0));
        assert_eq!(view.point_at(0, 0, 4, 4), Complex::new(-2.0, -2.0));
        assert_eq!(view.point_at(4, 4, 4, 4), Complex::new(2.0, 2.0));
    }

    #[test]
    fn whole_set_view_centers_on_the_real_axis() {
        let view = Viewport::WHOLE_SET;
        assert_eq!(view.point_at(0, 0, 640, 640), Complex::new(-2.0, 1.125));
        assert_eq!(view.point_at(320, 320, 640, 640), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn flipped_vertical_bounds_flip_the_rows() {
        let view = Viewport::SEAHORSE_DETAIL;
        let first = view.point_at(0, 0, 640, 640);
        let last = view.point_at(0, 639, 640, 640);
        assert_eq!(first.re, view.left);
        assert_eq!(first.im, view.top);
        assert!(last.im > first.im);
    }
}
