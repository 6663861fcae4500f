//! Error type for grid construction and transformation dispatch.

use std::fmt;

/// Error type for invalid grid input.
///
/// Out-of-range cells inside [`merge`](crate::merge) and
/// [`compress`](crate::compress) are never errors; these variants cover
/// input that a caller asked to be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from row 0 where a rectangular grid is required
    Ragged {
        /// Index of the first offending row
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
    /// A flat pixel buffer does not hold `width * height` pixels
    LengthMismatch {
        /// `width * height`
        expected: usize,
        /// Pixels actually supplied
        actual: usize,
    },
    /// `width * height` does not fit in `usize`
    DimensionsOverflow {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// A transformation that needs a second grid was given none
    MissingOperand {
        /// Name of the transformation
        transform: &'static str,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Ragged {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "grid is not rectangular: row {} has {} pixels, row 0 has {}",
                    row, actual, expected
                )
            }
            GridError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel count mismatch: expected {} pixels, got {}",
                    expected, actual
                )
            }
            GridError::DimensionsOverflow { width, height } => {
                write!(f, "grid dimensions overflow: {}x{}", width, height)
            }
            GridError::MissingOperand { transform } => {
                write!(f, "{} requires a second grid", transform)
            }
        }
    }
}

impl std::error::Error for GridError {}
