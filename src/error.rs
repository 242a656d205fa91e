//! Error type shared by the raster buffer, the sampler and the bindings.
//!
//! Only caller mistakes are errors. An unknown filter name resolves to the
//! default filter and an empty image is processed as a no-op, so neither
//! has a variant here.

/// Errors raised by pixel-level operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// A pixel coordinate fell outside `[0, width) x [0, height)`.
    #[error("pixel ({x}, {y}) is out of bounds for a {width}x{height} image")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    /// Input buffer does not describe an RGBA image.
    #[error("invalid image shape: {0}")]
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
