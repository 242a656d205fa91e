//! RGBA raster buffer.
//!
//! Pixels live in an `ndarray::Array3<u8>` of shape `(height, width, 4)`,
//! the same layout the Python and WASM bindings hand over. A zero width or
//! height is allowed; every filter treats such an image as a no-op.

use ndarray::{Array3, ArrayView2, ArrayView3, Axis};

use crate::error::{FilterError, Result};

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 4;

/// A single RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Rgba { red, green, blue, alpha }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

/// Per-channel color triple, alpha carried separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn with_alpha(self, alpha: u8) -> Rgba {
        Rgba::new(self.red, self.green, self.blue, alpha)
    }
}

/// Channel index into the interleaved pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

impl Channel {
    /// The three color channels, in storage order.
    pub const COLOR: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Owned RGBA image.
///
/// `Clone` is a deep copy; filters always build a new image and never touch
/// their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pixels: Array3<u8>,
}

impl RgbaImage {
    /// Fully transparent image.
    pub fn new(width: usize, height: usize) -> Self {
        RgbaImage {
            pixels: Array3::zeros((height, width, CHANNELS)),
        }
    }

    /// Image where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Self {
        let components = color.to_array();
        RgbaImage {
            pixels: Array3::from_shape_fn((height, width, CHANNELS), |(_, _, c)| components[c]),
        }
    }

    /// Wrap an existing `(height, width, 4)` array.
    pub fn from_array(pixels: Array3<u8>) -> Result<Self> {
        let (_, _, channels) = pixels.dim();
        if channels != CHANNELS {
            return Err(FilterError::InvalidShape(format!(
                "expected {CHANNELS} channels, got {channels}"
            )));
        }
        // Raw export relies on a contiguous, zero-offset buffer
        let pixels = if pixels.is_standard_layout() {
            pixels
        } else {
            pixels.as_standard_layout().into_owned()
        };
        Ok(RgbaImage { pixels })
    }

    /// Build from interleaved RGBA bytes, row-major.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(FilterError::InvalidShape(format!(
                "{width}x{height} RGBA needs {expected} bytes, got {}",
                data.len()
            )));
        }
        let pixels = Array3::from_shape_vec((height, width, CHANNELS), data)
            .map_err(|e| FilterError::InvalidShape(e.to_string()))?;
        Ok(RgbaImage { pixels })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Bounds-checked read.
    pub fn get(&self, x: usize, y: usize) -> Result<Rgba> {
        self.check_bounds(x, y)?;
        Ok(self.pixel(x, y))
    }

    /// Bounds-checked write.
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) -> Result<()> {
        self.check_bounds(x, y)?;
        self.put(x, y, color);
        Ok(())
    }

    /// Read a pixel the caller already knows is in bounds.
    #[inline]
    pub(crate) fn pixel(&self, x: usize, y: usize) -> Rgba {
        Rgba::new(
            self.pixels[[y, x, 0]],
            self.pixels[[y, x, 1]],
            self.pixels[[y, x, 2]],
            self.pixels[[y, x, 3]],
        )
    }

    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, color: Rgba) {
        for (c, v) in color.to_array().into_iter().enumerate() {
            self.pixels[[y, x, c]] = v;
        }
    }

    /// View of one channel as a `(height, width)` plane.
    pub fn plane(&self, channel: Channel) -> ArrayView2<'_, u8> {
        self.pixels.index_axis(Axis(2), channel.index())
    }

    /// Every pixel with its coordinates, in row-major scan order.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Rgba)> + '_ {
        let width = self.width();
        (0..self.height())
            .flat_map(move |y| (0..width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// New image with `f` applied to every pixel.
    pub fn map_pixels<F>(&self, f: F) -> RgbaImage
    where
        F: Fn(Rgba) -> Rgba,
    {
        let mut output = RgbaImage::new(self.width(), self.height());
        for (x, y, color) in self.pixels() {
            output.put(x, y, f(color));
        }
        output
    }

    pub fn as_array(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    pub fn into_array(self) -> Array3<u8> {
        self.pixels
    }

    /// Interleaved RGBA bytes, row-major.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_raw_vec_and_offset().0
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(FilterError::OutOfBounds {
                x: x as isize,
                y: y as isize,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }
}
