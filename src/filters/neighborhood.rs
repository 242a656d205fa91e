//! Neighborhood sampling for windowed filters.
//!
//! Offsets are produced column-major: the outer loop walks `dx`, the inner
//! loop walks `dy`. The median and convolution code both consume neighbors
//! in this order.

use ndarray::ArrayView2;

use crate::error::{FilterError, Result};

/// Square sampling window of `(2r+1)^2` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    radius: usize,
}

impl Window {
    /// The 3x3 window used by every catalog filter.
    pub const RADIUS_1: Window = Window::new(1);

    pub const fn new(radius: usize) -> Self {
        Window { radius }
    }

    pub const fn radius(&self) -> usize {
        self.radius
    }

    pub const fn side(&self) -> usize {
        self.radius * 2 + 1
    }

    /// Number of pixels in the window.
    pub const fn area(&self) -> usize {
        self.side() * self.side()
    }

    /// `(dx, dy)` offsets, `dx` outer, `dy` inner.
    pub fn offsets(&self) -> impl Iterator<Item = (isize, isize)> {
        let r = self.radius as isize;
        (-r..=r).flat_map(move |dx| (-r..=r).map(move |dy| (dx, dy)))
    }
}

/// What happens when a neighbor falls outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Report `OutOfBounds`.
    Strict,
    /// Replicate the nearest edge pixel.
    Clamp,
}

/// Map a neighbor of `(x, y)` to an in-bounds coordinate.
pub fn resolve(
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
    width: usize,
    height: usize,
    policy: EdgePolicy,
) -> Result<(usize, usize)> {
    let nx = x as isize + dx;
    let ny = y as isize + dy;
    let inside = nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height;

    if inside {
        return Ok((nx as usize, ny as usize));
    }

    match policy {
        EdgePolicy::Clamp if width > 0 && height > 0 => {
            Ok(clamp_to_edge(x, y, dx, dy, width, height))
        }
        _ => Err(FilterError::OutOfBounds {
            x: nx,
            y: ny,
            width,
            height,
        }),
    }
}

/// Neighbor of `(x, y)` with coordinates clamped into the image.
///
/// # Panics
/// If `width` or `height` is zero.
#[inline]
pub fn clamp_to_edge(
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
    width: usize,
    height: usize,
) -> (usize, usize) {
    (
        (x as isize + dx).clamp(0, width as isize - 1) as usize,
        (y as isize + dy).clamp(0, height as isize - 1) as usize,
    )
}

/// Neighbor values of `(x, y)` in [`Window::offsets`] order.
///
/// `plane` is indexed `[[y, x]]`.
pub fn gather(
    plane: ArrayView2<u8>,
    x: usize,
    y: usize,
    window: Window,
    policy: EdgePolicy,
) -> Result<Vec<u8>> {
    let (height, width) = plane.dim();
    let mut values = Vec::with_capacity(window.area());

    for (dx, dy) in window.offsets() {
        let (sx, sy) = resolve(x, y, dx, dy, width, height, policy)?;
        values.push(plane[[sy, sx]]);
    }

    Ok(values)
}

/// Like [`gather`] with [`EdgePolicy::Clamp`], for a non-empty plane.
///
/// # Panics
/// If `plane` is empty.
pub fn gather_clamped(plane: ArrayView2<u8>, x: usize, y: usize, window: Window) -> Vec<u8> {
    let (height, width) = plane.dim();
    window
        .offsets()
        .map(|(dx, dy)| {
            let (sx, sy) = clamp_to_edge(x, y, dx, dy, width, height);
            plane[[sy, sx]]
        })
        .collect()
}

/// Centers whose whole window lies inside a `width x height` image.
///
/// Row-major. Empty when the image is smaller than the window.
pub fn interior(
    width: usize,
    height: usize,
    window: Window,
) -> impl Iterator<Item = (usize, usize)> {
    let r = window.radius();
    let xs = r..width.saturating_sub(r);
    let ys = r..height.saturating_sub(r);
    ys.flat_map(move |y| xs.clone().map(move |x| (x, y)))
}
