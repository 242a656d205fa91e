//! pixelfilters
//!
//! Selectable image filters over in-memory RGBA rasters, with Python
//! bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Images are `(height, width, 4)` arrays of `u8` RGBA. Decoding and
//! encoding belong to the caller; this crate only transforms pixels.
//!
//! ## Entry Point
//! [`apply`] takes a filter identifier (`grayscale_gauss`, `brilho`,
//! `deteccao_borda`, `contraste`, `mediana`, `negativo`), an image and the
//! scalar parameters, and returns a new image. Unknown identifiers run
//! `grayscale_gauss`.
//!
//! ```
//! use pixelfilters::{apply, FilterParams, Rgba, RgbaImage};
//!
//! let img = RgbaImage::filled(4, 4, Rgba::new(10, 20, 30, 255));
//! let out = apply("negativo", &img, &FilterParams::default());
//! assert_eq!(out.get(0, 0).unwrap(), Rgba::new(245, 235, 225, 255));
//! ```

pub mod dispatch;
pub mod error;
pub mod filters;
pub mod image;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use dispatch::{apply, apply_batch, apply_kind, FilterKind, FilterParams};
pub use error::{FilterError, Result};
pub use image::{Channel, Rgb, Rgba, RgbaImage};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::dispatch::{self, FilterParams};
    use crate::error::FilterError;
    use crate::filters::geometry::AffineMatrix;
    use crate::filters::{color_adjust, edge, geometry, grayscale, noise};
    use crate::image::RgbaImage;

    fn to_py_err(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn load(image: PyReadonlyArray3<'_, u8>) -> PyResult<RgbaImage> {
        RgbaImage::from_array(image.as_array().to_owned()).map_err(to_py_err)
    }

    fn store<'py>(py: Python<'py>, image: RgbaImage) -> Bound<'py, PyArray3<u8>> {
        image.into_array().into_pyarray(py)
    }

    // ========================================================================
    // Dispatcher
    // ========================================================================

    /// Apply a filter by identifier to an RGBA u8 image.
    ///
    /// Unknown identifiers fall back to `grayscale_gauss`.
    #[pyfunction]
    #[pyo3(signature = (image, name, brightness=FilterParams::DEFAULT_BRIGHTNESS, contrast=FilterParams::DEFAULT_CONTRAST))]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        name: &str,
        brightness: f64,
        contrast: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = load(image)?;
        let params = FilterParams::default()
            .with_brightness(brightness)
            .with_contrast(contrast);
        let result = py.allow_threads(|| dispatch::apply(name, &input, &params));
        Ok(store(py, result))
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    #[pyfunction]
    pub fn grayscale_gauss<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = load(image)?;
        Ok(store(py, grayscale::grayscale_gauss(&input)))
    }

    #[pyfunction]
    pub fn brightness<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        delta: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = load(image)?;
        Ok(store(py, color_adjust::brightness(&input, delta)))
    }

    #[pyfunction]
    pub fn contrast<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        factor: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = load(image)?;
        Ok(store(py, color_adjust::contrast(&input, factor)))
    }

    #[pyfunction]
    pub fn negative<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = load(image)?;
        Ok(store(py, color_adjust::negative(&input)))
    }

    #[pyfunction]
    pub fn sobel<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = load(image)?;
        Ok(store(py, edge::sobel(&input)))
    }

    #[pyfunction]
    pub fn median<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = load(image)?;
        Ok(store(py, noise::median(&input)))
    }

    /// Remap through a 2x3 affine matrix given row by row.
    #[pyfunction]
    pub fn affine_transform<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        matrix: [[f64; 3]; 2],
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = load(image)?;
        let matrix = AffineMatrix::new(matrix);
        Ok(store(py, geometry::affine_transform(&input, &matrix)))
    }

    #[pymodule]
    pub fn pixelfilters(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;

        m.add_function(wrap_pyfunction!(grayscale_gauss, m)?)?;
        m.add_function(wrap_pyfunction!(brightness, m)?)?;
        m.add_function(wrap_pyfunction!(contrast, m)?)?;
        m.add_function(wrap_pyfunction!(negative, m)?)?;
        m.add_function(wrap_pyfunction!(sobel, m)?)?;
        m.add_function(wrap_pyfunction!(median, m)?)?;
        m.add_function(wrap_pyfunction!(affine_transform, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixelfilters;
