//! Error handling for the zerostr library
//!
//! The validators and parsers in this crate report failure as `false` or
//! `None`; this module covers the remaining fallible surface, the checked
//! view operations.

use thiserror::Error;

/// Main error type for the zerostr library
#[derive(Error, Debug)]
pub enum ZeroStrError {
    /// Invalid data format or encoding
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },
}

impl ZeroStrError {
    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ZeroStrError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(ZeroStrError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that a range is within bounds
#[inline]
pub fn check_range(start: usize, end: usize, size: usize) -> Result<()> {
    if start > end {
        return Err(ZeroStrError::invalid_data(format!(
            "Invalid range: start {} > end {}",
            start, end
        )));
    }
    if end > size {
        return Err(ZeroStrError::out_of_bounds(end, size));
    }
    Ok(())
}
