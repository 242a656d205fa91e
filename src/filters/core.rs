//! Core utilities shared by the catalog filters.
//!
//! This module provides:
//! - Channel clamping
//! - Fixed 3x3 kernels (Gaussian, Sobel)
//! - Point and whole-plane convolution

use ndarray::{Array2, ArrayView2};

use super::neighborhood::{gather, gather_clamped, interior, EdgePolicy, Window};
use crate::error::Result;

// ============================================================================
// Clamping
// ============================================================================

/// Round to the nearest integer, `x.5` towards positive infinity.
///
/// Values just below a half, like `0.49999999999999994`, round down.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Map an arbitrary channel value into `0..=255`.
///
/// In-range values are rounded half-up, so integral inputs pass through
/// untouched and `x.5` always goes to the next integer. Inputs must be
/// computed in `f64` for `150 * 0.21` to land on `31.5`.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    if value > 255.0 {
        255
    } else if value < 0.0 {
        0
    } else {
        round_half_up(value).min(255.0) as u8
    }
}

// ============================================================================
// Kernels
// ============================================================================

/// Immutable 3x3 kernel with an optional divisor.
///
/// `weights[i][j]` weighs the neighbor at `(x + i - 1, y + j - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    pub weights: [[i32; 3]; 3],
    pub divisor: Option<i32>,
}

/// Gaussian smoothing kernel, sums to 16.
pub const GAUSSIAN_3X3: Kernel = Kernel::new([[1, 2, 1], [2, 4, 2], [1, 2, 1]], Some(16));

/// Horizontal gradient kernel.
pub const SOBEL_X: Kernel = Kernel::new([[1, 0, -1], [2, 0, -2], [1, 0, -1]], None);

/// Vertical gradient kernel.
pub const SOBEL_Y: Kernel = Kernel::new([[1, 2, 1], [0, 0, 0], [-1, -2, -1]], None);

impl Kernel {
    pub const fn new(weights: [[i32; 3]; 3], divisor: Option<i32>) -> Self {
        Kernel { weights, divisor }
    }

    /// Weighted sum over a 3x3 window sampled in column-major order
    /// (see [`Window::offsets`]), so `window[k]` meets `weights[k / 3][k % 3]`.
    #[inline]
    pub fn apply(&self, window: &[u8]) -> i32 {
        debug_assert_eq!(window.len(), 9);
        window
            .iter()
            .enumerate()
            .map(|(k, &v)| v as i32 * self.weights[k / 3][k % 3])
            .sum()
    }

    /// Apply the divisor, if any, to a raw weighted sum.
    #[inline]
    pub fn normalize(&self, sum: i32) -> f64 {
        match self.divisor {
            Some(d) if d != 0 => sum as f64 / d as f64,
            _ => sum as f64,
        }
    }
}

// ============================================================================
// Convolution
// ============================================================================

/// Raw weighted sum of the 3x3 neighborhood of `(x, y)`.
///
/// `plane` is indexed `[[y, x]]`. The divisor is not applied.
pub fn convolve_at(
    plane: ArrayView2<u8>,
    kernel: &Kernel,
    x: usize,
    y: usize,
    policy: EdgePolicy,
) -> Result<i32> {
    let window = gather(plane, x, y, Window::RADIUS_1, policy)?;
    Ok(kernel.apply(&window))
}

/// Convolve every interior pixel of `plane` with `kernel`.
///
/// Border pixels keep their source value.
pub fn convolve_plane(plane: ArrayView2<u8>, kernel: &Kernel) -> Array2<u8> {
    let (height, width) = plane.dim();
    let mut output = plane.to_owned();

    for (x, y) in interior(width, height, Window::RADIUS_1) {
        // no clamping happens for interior centers
        let window = gather_clamped(plane, x, y, Window::RADIUS_1);
        output[[y, x]] = clamp_channel(kernel.normalize(kernel.apply(&window)));
    }

    output
}

/// Combine two directional responses into `floor(sqrt(gx^2 + gy^2))`, clamped.
#[inline]
pub fn gradient_magnitude(gx: i32, gy: i32) -> u8 {
    let mag = ((gx as f64).powi(2) + (gy as f64).powi(2)).sqrt().floor();
    clamp_channel(mag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_clamp_channel_bounds() {
        assert_eq!(clamp_channel(300.0), 255);
        assert_eq!(clamp_channel(-0.1), 0);
        assert_eq!(clamp_channel(255.0), 255);
        assert_eq!(clamp_channel(0.0), 0);
    }

    #[test]
    fn test_clamp_channel_rounds() {
        assert_eq!(clamp_channel(127.4), 127);
        assert_eq!(clamp_channel(127.5), 128);
        assert_eq!(clamp_channel(254.6), 255);
        assert_eq!(clamp_channel(42.0), 42);
    }

    #[test]
    fn test_round_half_up_near_half() {
        // largest double below 0.5; adding 0.5 would round it to 1.0
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(clamp_channel(0.49999999999999994), 0);
    }

    #[test]
    fn test_gaussian_sums_to_divisor() {
        let total: i32 = GAUSSIAN_3X3.weights.iter().flatten().sum();
        assert_eq!(Some(total), GAUSSIAN_3X3.divisor);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(GAUSSIAN_3X3.normalize(160), 10.0);
        assert_eq!(SOBEL_X.normalize(-40), -40.0);
    }

    #[test]
    fn test_convolve_at_uniform() {
        let plane = Array2::<u8>::from_elem((3, 3), 50);

        let g = convolve_at(plane.view(), &GAUSSIAN_3X3, 1, 1, EdgePolicy::Strict).unwrap();
        assert_eq!(g, 50 * 16);

        let gx = convolve_at(plane.view(), &SOBEL_X, 1, 1, EdgePolicy::Strict).unwrap();
        assert_eq!(gx, 0);
    }

    #[test]
    fn test_convolve_at_kernel_orientation() {
        // Left column (x = 0) bright: SOBEL_X weights it with row 0 of the
        // kernel, which sums to zero, so the response comes from SOBEL_Y.
        let plane = Array2::from_shape_fn((3, 3), |(_, x)| if x == 0 { 100u8 } else { 0 });

        let gx = convolve_at(plane.view(), &SOBEL_X, 1, 1, EdgePolicy::Strict).unwrap();
        let gy = convolve_at(plane.view(), &SOBEL_Y, 1, 1, EdgePolicy::Strict).unwrap();
        assert_eq!(gx, 0);
        assert_eq!(gy, 400);
    }

    #[test]
    fn test_convolve_at_strict_corner() {
        let plane = Array2::<u8>::zeros((3, 3));
        assert!(convolve_at(plane.view(), &SOBEL_X, 0, 0, EdgePolicy::Strict).is_err());
        assert!(convolve_at(plane.view(), &SOBEL_X, 0, 0, EdgePolicy::Clamp).is_ok());
    }

    #[test]
    fn test_convolve_plane_keeps_border() {
        let mut plane = Array2::<u8>::zeros((3, 4));
        plane[[1, 1]] = 160;
        let out = convolve_plane(plane.view(), &GAUSSIAN_3X3);

        // center weight 4/16
        assert_eq!(out[[1, 1]], 40);
        // right neighbor weight 2/16
        assert_eq!(out[[1, 2]], 20);
        // border untouched
        assert_eq!(out[[0, 0]], 0);
        assert_eq!(out[[0, 1]], 0);
    }

    #[test]
    fn test_gradient_magnitude() {
        assert_eq!(gradient_magnitude(3, 4), 5);
        // sqrt(2) floors to 1
        assert_eq!(gradient_magnitude(1, 1), 1);
        assert_eq!(gradient_magnitude(400, 400), 255);
    }
}
