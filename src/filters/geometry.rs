//! Affine remapping about the image center.
//!
//! Nearest-neighbour inverse mapping: each output pixel looks up the source
//! pixel its coordinates map to. Output pixels whose source falls outside
//! the image are opaque white.

use log::trace;

use super::core::round_half_up;
use crate::image::{Rgba, RgbaImage};

/// 2x3 affine matrix, applied to coordinates centered on the image middle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    pub rows: [[f64; 3]; 2],
}

impl AffineMatrix {
    pub const fn new(rows: [[f64; 3]; 2]) -> Self {
        AffineMatrix { rows }
    }

    pub const fn identity() -> Self {
        AffineMatrix::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
    }

    /// Shift the sampling position by `(dx, dy)`; content moves by `-dx, -dy`.
    pub const fn translation(dx: f64, dy: f64) -> Self {
        AffineMatrix::new([[1.0, 0.0, dx], [0.0, 1.0, dy]])
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        AffineMatrix::new([[sx, 0.0, 0.0], [0.0, sy, 0.0]])
    }

    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        AffineMatrix::new([[cos, -sin, 0.0], [sin, cos, 0.0]])
    }

    #[inline]
    fn map(&self, x: f64, y: f64) -> (f64, f64) {
        let [a, b] = self.rows;
        (
            x * a[0] + y * a[1] + a[2],
            x * b[0] + y * b[1] + b[2],
        )
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        AffineMatrix::identity()
    }
}

/// Remap `input` through `matrix`.
///
/// Coordinates are taken relative to `(width / 2, height / 2)`, mapped,
/// shifted back and rounded half-up before the lookup.
pub fn affine_transform(input: &RgbaImage, matrix: &AffineMatrix) -> RgbaImage {
    trace!("affine_transform {:?} on {}x{}", matrix.rows, input.width(), input.height());

    let (width, height) = (input.width(), input.height());
    let half_x = width as f64 / 2.0;
    let half_y = height as f64 / 2.0;

    let mut output = RgbaImage::filled(width, height, Rgba::WHITE);
    for y in 0..height {
        for x in 0..width {
            let (mx, my) = matrix.map(x as f64 - half_x, y as f64 - half_y);
            let sx = round_half_up(mx + half_x);
            let sy = round_half_up(my + half_y);

            if sx >= 0.0 && sy >= 0.0 && sx < width as f64 && sy < height as f64 {
                output.put(x, y, input.pixel(sx as usize, sy as usize));
            }
        }
    }
    output
}
