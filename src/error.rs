use alloc::string::String;

use thiserror::Error;

/// Slice lengths passed to a [`bytes`](crate::bytes) function do not describe
/// whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SizeError {
    /// Source is empty or its length is not a multiple of the pixel size.
    #[error("buffer length is not a whole number of pixels")]
    NotPixelAligned,
    /// Destination holds fewer pixels than the source.
    #[error("destination is too small for the source pixels")]
    PixelCountMismatch,
    /// Width, height and stride do not fit the buffer.
    #[error("stride or dimensions do not fit the buffer")]
    InvalidStride,
}

/// The request handed over by the host has the wrong shape.
///
/// The `Display` text is what the host sees as the thrown error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArgumentError {
    #[error("Expected exactly one argument")]
    Arity { got: usize },
    #[error("Expected an Object")]
    NotAnObject,
    #[error("Expected an ArrayBuffer")]
    NotABuffer,
    #[error("A number was expected")]
    NotANumber { field: &'static str },
    #[error("Expected rgb8 encoding, got {encoding}")]
    UnsupportedEncoding { encoding: String },
}

/// Errors from [`convert`](crate::convert()) and the host entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// Strict mode only: `data` is not exactly `width * height * 3` bytes.
    #[error("{width}x{height} RGB image needs {expected} bytes, got {actual}")]
    DimensionMismatch {
        width: i32,
        height: i32,
        expected: usize,
        actual: usize,
    },

    /// Negative dimension, or an output size that does not fit in memory.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}
