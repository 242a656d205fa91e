//! Color adjustment filters: Brightness, Contrast, Negative.
//!
//! These are pixel-wise operations that don't require spatial context.
//! Alpha is always preserved unchanged.

use log::trace;

use super::core::clamp_channel;
use crate::image::{Rgba, RgbaImage};

#[inline]
fn map_color<F>(color: Rgba, f: F) -> Rgba
where
    F: Fn(u8) -> u8,
{
    Rgba::new(f(color.red), f(color.green), f(color.blue), color.alpha)
}

// ============================================================================
// Brightness
// ============================================================================

/// Shift every color channel by `delta`.
///
/// # Arguments
/// * `input` - RGBA image
/// * `delta` - Added to each channel before clamping to 0-255
pub fn brightness(input: &RgbaImage, delta: f64) -> RgbaImage {
    trace!("brightness({delta}) on {}x{}", input.width(), input.height());
    input.map_pixels(|color| map_color(color, |c| clamp_channel(c as f64 + delta)))
}

// ============================================================================
// Contrast
// ============================================================================

/// Scale every color channel by `factor`.
///
/// The product is rounded before clamping, so `factor = 1.5` maps 15 to 23.
pub fn contrast(input: &RgbaImage, factor: f64) -> RgbaImage {
    trace!("contrast({factor}) on {}x{}", input.width(), input.height());
    input.map_pixels(|color| map_color(color, |c| clamp_channel(c as f64 * factor)))
}

// ============================================================================
// Negative
// ============================================================================

/// Invert every color channel (`255 - c`).
pub fn negative(input: &RgbaImage) -> RgbaImage {
    trace!("negative on {}x{}", input.width(), input.height());
    input.map_pixels(|color| map_color(color, |c| 255 - c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(color: Rgba) -> RgbaImage {
        RgbaImage::filled(1, 1, color)
    }

    #[test]
    fn test_brightness_shift() {
        let out = brightness(&single(Rgba::new(100, 0, 250, 9)), 10.0);
        assert_eq!(out.get(0, 0).unwrap(), Rgba::new(110, 10, 255, 9));
    }

    #[test]
    fn test_brightness_clamps_low() {
        let out = brightness(&single(Rgba::new(50, 50, 50, 255)), -300.0);
        assert_eq!(out.get(0, 0).unwrap(), Rgba::new(0, 0, 0, 255));
    }

    #[test]
    fn test_contrast_clamps_high() {
        let out = contrast(&single(Rgba::new(200, 10, 10, 255)), 2.0);
        assert_eq!(out.get(0, 0).unwrap(), Rgba::new(255, 20, 20, 255));
    }

    #[test]
    fn test_contrast_rounds() {
        // 15 * 1.5 = 22.5 -> 23
        let out = contrast(&single(Rgba::new(15, 100, 0, 128)), 1.5);
        assert_eq!(out.get(0, 0).unwrap(), Rgba::new(23, 150, 0, 128));
    }

    #[test]
    fn test_contrast_rounds_in_double_precision() {
        // 150 * 0.21 == 31.5 -> 32, 90 * 0.35 == 31.499999999999996 -> 31
        let out = contrast(&single(Rgba::new(150, 90, 50, 255)), 0.21);
        assert_eq!(out.get(0, 0).unwrap().red, 32);

        let out = contrast(&single(Rgba::new(150, 90, 50, 255)), 0.35);
        assert_eq!(out.get(0, 0).unwrap().green, 31);
    }

    #[test]
    fn test_contrast_negative_factor() {
        let out = contrast(&single(Rgba::new(15, 100, 0, 128)), -30.0);
        assert_eq!(out.get(0, 0).unwrap(), Rgba::new(0, 0, 0, 128));
    }

    #[test]
    fn test_negative() {
        let out = negative(&single(Rgba::new(0, 128, 255, 42)));
        assert_eq!(out.get(0, 0).unwrap(), Rgba::new(255, 127, 0, 42));
    }

    #[test]
    fn test_negative_involution() {
        let mut img = RgbaImage::new(4, 3);
        for (i, (x, y, _)) in RgbaImage::new(4, 3).pixels().enumerate() {
            let v = (i * 21) as u8;
            img.set(x, y, Rgba::new(v, 255 - v, v / 2, v)).unwrap();
        }
        assert_eq!(negative(&negative(&img)), img);
    }

    #[test]
    fn test_empty_passthrough() {
        let img = RgbaImage::new(3, 0);
        assert_eq!(brightness(&img, 5.0), img);
        assert_eq!(contrast(&img, 5.0), img);
        assert_eq!(negative(&img), img);
    }
}
