//! Sobel edge detection.
//!
//! Each color channel is filtered on its own: the horizontal and vertical
//! gradient responses of that channel are combined into a magnitude, so
//! the output keeps color (a red edge stays red). Alpha is copied.
//!
//! Every pixel is processed, borders included. Neighbors that fall outside
//! the image are replicated from the nearest edge pixel.

use log::trace;

use super::core::{gradient_magnitude, SOBEL_X, SOBEL_Y};
use super::neighborhood::{gather_clamped, Window};
use crate::image::{Channel, Rgb, RgbaImage};

/// Gradient magnitude per color channel at `(x, y)`, edge pixels replicated.
///
/// `input` must be non-empty and `(x, y)` inside it.
fn sobel_at(input: &RgbaImage, x: usize, y: usize) -> Rgb {
    let [red, green, blue] = Channel::COLOR.map(|channel| {
        let window = gather_clamped(input.plane(channel), x, y, Window::RADIUS_1);
        gradient_magnitude(SOBEL_X.apply(&window), SOBEL_Y.apply(&window))
    });
    Rgb { red, green, blue }
}

/// Apply Sobel edge detection to every pixel.
///
/// # Returns
/// Image of per-channel gradient magnitudes, alpha from the source
pub fn sobel(input: &RgbaImage) -> RgbaImage {
    trace!("sobel on {}x{}", input.width(), input.height());

    let mut output = RgbaImage::new(input.width(), input.height());
    for (x, y, color) in input.pixels() {
        output.put(x, y, sobel_at(input, x, y).with_alpha(color.alpha));
    }
    output
}
