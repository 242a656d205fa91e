//! Filter catalog and the sampling machinery it shares.
//!
//! ## Image Format
//!
//! Every filter takes an [`RgbaImage`](crate::image::RgbaImage) and builds a
//! new one of the same size; the input is never modified.
//!
//! ## Filters
//!
//! | Filter | Function | Scope |
//! |--------|----------|-------|
//! | Grayscale + Gaussian | [`grayscale::grayscale_gauss`] | gray everywhere, smoothing on the interior |
//! | Brightness | [`color_adjust::brightness`] | every pixel |
//! | Contrast | [`color_adjust::contrast`] | every pixel |
//! | Negative | [`color_adjust::negative`] | every pixel |
//! | Sobel | [`edge::sobel`] | every pixel, edge pixels replicated |
//! | Median | [`noise::median`] | interior, border copied |
//! | Affine remap | [`geometry::affine_transform`] | every pixel |
//!
//! Alpha is preserved by all of them.

pub mod core;
pub mod neighborhood;

pub mod color_adjust;
pub mod edge;
pub mod geometry;
pub mod grayscale;
pub mod noise;
