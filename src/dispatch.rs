//! Filter dispatch by name.
//!
//! This is the only entry point the decode/encode layer needs: it resolves
//! one of the six filter identifiers and runs it on a decoded image.
//!
//! | Identifier | Filter |
//! |------------|--------|
//! | `grayscale_gauss` | grayscale + Gaussian smoothing |
//! | `brilho` | brightness shift by [`FilterParams::brightness_delta`] |
//! | `deteccao_borda` | Sobel edge detection |
//! | `contraste` | contrast scale by [`FilterParams::contrast_factor`] |
//! | `mediana` | 3x3 median |
//! | `negativo` | negative |
//!
//! Any other identifier runs `grayscale_gauss`. This fallback is deliberate
//! and is never reported as an error.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rayon::prelude::*;

use crate::filters::{color_adjust, edge, grayscale, noise};
use crate::image::RgbaImage;

/// One entry of the filter catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FilterKind {
    #[default]
    GrayscaleGauss,
    Brightness,
    EdgeDetect,
    Contrast,
    Median,
    Negative,
}

impl FilterKind {
    pub const ALL: [FilterKind; 6] = [
        FilterKind::GrayscaleGauss,
        FilterKind::Brightness,
        FilterKind::EdgeDetect,
        FilterKind::Contrast,
        FilterKind::Median,
        FilterKind::Negative,
    ];

    /// Resolve an identifier, falling back to [`FilterKind::GrayscaleGauss`].
    pub fn from_name(name: &str) -> FilterKind {
        match name {
            "grayscale_gauss" => FilterKind::GrayscaleGauss,
            "brilho" => FilterKind::Brightness,
            "deteccao_borda" => FilterKind::EdgeDetect,
            "contraste" => FilterKind::Contrast,
            "mediana" => FilterKind::Median,
            "negativo" => FilterKind::Negative,
            other => {
                debug!("unknown filter {other:?}, using grayscale_gauss");
                FilterKind::GrayscaleGauss
            }
        }
    }

    /// Identifier accepted by [`FilterKind::from_name`].
    pub const fn name(self) -> &'static str {
        match self {
            FilterKind::GrayscaleGauss => "grayscale_gauss",
            FilterKind::Brightness => "brilho",
            FilterKind::EdgeDetect => "deteccao_borda",
            FilterKind::Contrast => "contraste",
            FilterKind::Median => "mediana",
            FilterKind::Negative => "negativo",
        }
    }
}

impl FromStr for FilterKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterKind::from_name(s))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar parameters for the parameterised filters.
///
/// Filters that take no parameter ignore this.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterParams {
    /// Added to every color channel by `brilho`.
    pub brightness_delta: f64,
    /// Multiplies every color channel in `contraste`.
    pub contrast_factor: f64,
}

impl FilterParams {
    pub const DEFAULT_BRIGHTNESS: f64 = -20.0;
    pub const DEFAULT_CONTRAST: f64 = 0.7;

    pub fn with_brightness(mut self, delta: f64) -> Self {
        self.brightness_delta = delta;
        self
    }

    pub fn with_contrast(mut self, factor: f64) -> Self {
        self.contrast_factor = factor;
        self
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            brightness_delta: Self::DEFAULT_BRIGHTNESS,
            contrast_factor: Self::DEFAULT_CONTRAST,
        }
    }
}

/// Run the catalog entry `kind` on `image`.
pub fn apply_kind(kind: FilterKind, image: &RgbaImage, params: &FilterParams) -> RgbaImage {
    match kind {
        FilterKind::GrayscaleGauss => grayscale::grayscale_gauss(image),
        FilterKind::Brightness => color_adjust::brightness(image, params.brightness_delta),
        FilterKind::EdgeDetect => edge::sobel(image),
        FilterKind::Contrast => color_adjust::contrast(image, params.contrast_factor),
        FilterKind::Median => noise::median(image),
        FilterKind::Negative => color_adjust::negative(image),
    }
}

/// Run the filter named `name` on `image`.
///
/// Unknown names run `grayscale_gauss`.
pub fn apply(name: &str, image: &RgbaImage, params: &FilterParams) -> RgbaImage {
    apply_kind(FilterKind::from_name(name), image, params)
}

/// Run the filter named `name` on each image, spread over the rayon pool.
///
/// Images are processed independently; output order matches input order.
pub fn apply_batch(name: &str, images: &[RgbaImage], params: &FilterParams) -> Vec<RgbaImage> {
    let kind = FilterKind::from_name(name);
    trace!("apply_batch {kind} over {} images", images.len());

    images
        .par_iter()
        .map(|image| apply_kind(kind, image, params))
        .collect()
}
