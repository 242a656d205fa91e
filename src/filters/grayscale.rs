//! Grayscale conversion and Gaussian smoothing.
//!
//! Gray is the plain channel mean `round((R + G + B) / 3)`, not a luminance
//! weighting. Output is RGBA with R=G=B=gray and alpha preserved.

use log::trace;
use ndarray::Array2;

use super::core::{clamp_channel, convolve_plane, GAUSSIAN_3X3};
use crate::image::{Rgba, RgbaImage};

#[inline]
fn mean_gray(color: Rgba) -> u8 {
    let sum = color.red as u32 + color.green as u32 + color.blue as u32;
    clamp_channel(sum as f64 / 3.0)
}

/// Gray plane of `input`, shape `(height, width)`.
fn gray_plane(input: &RgbaImage) -> Array2<u8> {
    let mut plane = Array2::<u8>::zeros((input.height(), input.width()));
    for (x, y, color) in input.pixels() {
        plane[[y, x]] = mean_gray(color);
    }
    plane
}

fn from_gray_plane(plane: &Array2<u8>, source: &RgbaImage) -> RgbaImage {
    let mut output = RgbaImage::new(source.width(), source.height());
    for (x, y, color) in source.pixels() {
        let gray = plane[[y, x]];
        output.put(x, y, Rgba::new(gray, gray, gray, color.alpha));
    }
    output
}

/// Convert to grayscale without smoothing.
pub fn grayscale_mean(input: &RgbaImage) -> RgbaImage {
    input.map_pixels(|color| {
        let gray = mean_gray(color);
        Rgba::new(gray, gray, gray, color.alpha)
    })
}

/// Convert to grayscale, then smooth the gray plane with the 3x3 Gaussian.
///
/// Only interior pixels are smoothed. The one-pixel border keeps its
/// unsmoothed gray value.
pub fn grayscale_gauss(input: &RgbaImage) -> RgbaImage {
    trace!("grayscale_gauss on {}x{}", input.width(), input.height());

    let gray = gray_plane(input);
    let smoothed = convolve_plane(gray.view(), &GAUSSIAN_3X3);
    from_gray_plane(&smoothed, input)
}
