//! Median denoising.
//!
//! Removes salt-and-pepper noise while preserving edges. Uses a 3x3 window
//! and only touches interior pixels; the one-pixel border is copied from
//! the source unchanged.

use log::trace;

use super::neighborhood::{gather, gather_clamped, interior, EdgePolicy, Window};
use crate::error::Result;
use crate::image::{Channel, Rgb, RgbaImage};

/// Middle value of `values` after a stable ascending numeric sort.
fn middle(mut values: Vec<u8>) -> u8 {
    values.sort();
    values[values.len() / 2]
}

/// Per-channel median of the 3x3 window centered on `(x, y)`.
///
/// Fails with `OutOfBounds` when the window leaves the image, i.e. on the
/// border.
pub fn median_at(input: &RgbaImage, x: usize, y: usize) -> Result<Rgb> {
    let mut medians = [0u8; 3];
    for (slot, channel) in medians.iter_mut().zip(Channel::COLOR) {
        let values = gather(input.plane(channel), x, y, Window::RADIUS_1, EdgePolicy::Strict)?;
        *slot = middle(values);
    }
    let [red, green, blue] = medians;
    Ok(Rgb { red, green, blue })
}

/// Apply the 3x3 median filter.
///
/// # Returns
/// Filtered image; alpha copied from each center pixel, border pixels
/// identical to the source
pub fn median(input: &RgbaImage) -> RgbaImage {
    trace!("median on {}x{}", input.width(), input.height());

    let mut output = input.clone();
    for (x, y) in interior(input.width(), input.height(), Window::RADIUS_1) {
        let [red, green, blue] = Channel::COLOR
            .map(|channel| middle(gather_clamped(input.plane(channel), x, y, Window::RADIUS_1)));
        let alpha = input.pixel(x, y).alpha;
        output.put(x, y, Rgb { red, green, blue }.with_alpha(alpha));
    }
    output
}
