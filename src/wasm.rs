//! WebAssembly exports for pixelfilters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images cross
//! the boundary as flat RGBA byte arrays (length = width * height * 4).

use wasm_bindgen::prelude::*;

use crate::dispatch::{self, FilterParams};
use crate::error::FilterError;
use crate::filters::geometry::{affine_transform, AffineMatrix};
use crate::image::RgbaImage;

impl From<FilterError> for JsValue {
    fn from(err: FilterError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Apply a filter by identifier.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `name` - Filter identifier; unknown names run `grayscale_gauss`
/// * `brightness` - Delta used by `brilho`
/// * `contrast` - Factor used by `contraste`
///
/// # Returns
/// Flat array of RGBA bytes, same dimensions
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    name: &str,
    brightness: f64,
    contrast: f64,
) -> Result<Vec<u8>, JsValue> {
    let input = RgbaImage::from_raw(width, height, data.to_vec())?;
    let params = FilterParams::default()
        .with_brightness(brightness)
        .with_contrast(contrast);

    Ok(dispatch::apply(name, &input, &params).into_raw())
}

/// Apply a filter by identifier with the default parameters.
#[wasm_bindgen]
pub fn apply_filter_default_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    name: &str,
) -> Result<Vec<u8>, JsValue> {
    let input = RgbaImage::from_raw(width, height, data.to_vec())?;
    Ok(dispatch::apply(name, &input, &FilterParams::default()).into_raw())
}

// ============================================================================
// Affine remap
// ============================================================================

/// Remap through the 2x3 matrix `[a, b, c, d, e, f]` (rows `a b c`, `d e f`).
#[wasm_bindgen]
pub fn affine_transform_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    matrix: &[f64],
) -> Result<Vec<u8>, JsValue> {
    let [a, b, c, d, e, f]: [f64; 6] = matrix
        .try_into()
        .map_err(|_| JsValue::from_str("matrix needs exactly 6 values"))?;
    let input = RgbaImage::from_raw(width, height, data.to_vec())?;
    let matrix = AffineMatrix::new([[a, b, c], [d, e, f]]);

    Ok(affine_transform(&input, &matrix).into_raw())
}
