//! Grid transformations.
//!
//! Five independent operations over [`Grid`]:
//!
//! - [`mirror`], [`grayscale`], [`invert`] change a grid in place and keep
//!   its shape.
//! - [`merge`] and [`compress`] build a new grid and leave their inputs
//!   alone.
//!
//! [`Transform`] names each operation and dispatches to it through a single
//! signature.

mod compress;
mod grayscale;
mod invert;
mod merge;
mod mirror;

pub use compress::compress;
pub use grayscale::grayscale;
pub use invert::invert;
pub use merge::merge;
pub use mirror::mirror;

use std::fmt;
use std::str::FromStr;

use crate::grid::{Grid, GridError};

/// One of the five grid transformations.
///
/// # Example
///
/// ```
/// use pixel_grid::{Grid, Transform};
///
/// let grid = Grid::from(vec![vec![[1, 2, 3], [4, 5, 6]]]);
/// let mirrored = Transform::Mirror.apply(grid, None).unwrap();
/// assert_eq!(mirrored, Grid::from(vec![vec![[4, 5, 6], [1, 2, 3]]]));
///
/// let merge: Transform = "merge".parse().unwrap();
/// assert!(merge.apply(mirrored, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Reverse every row ([`mirror`]).
    Mirror,
    /// Average each pixel's channels ([`grayscale`]).
    Grayscale,
    /// Swap each pixel's max and min channels ([`invert`]).
    Invert,
    /// Combine with a second grid ([`merge`]); the grid being transformed
    /// takes priority on even rows.
    Merge,
    /// Average 2×2 blocks ([`compress`]).
    Compress,
}

impl Transform {
    /// Every transformation, in declaration order.
    pub const ALL: [Transform; 5] = [
        Transform::Mirror,
        Transform::Grayscale,
        Transform::Invert,
        Transform::Merge,
        Transform::Compress,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Transform::Mirror => "mirror",
            Transform::Grayscale => "grayscale",
            Transform::Invert => "invert",
            Transform::Merge => "merge",
            Transform::Compress => "compress",
        }
    }

    /// Whether the output always has the input's shape.
    pub fn is_in_place(self) -> bool {
        matches!(
            self,
            Transform::Mirror | Transform::Grayscale | Transform::Invert
        )
    }

    /// Run this transformation on `grid`.
    ///
    /// In-place transformations mutate and return the same grid; `Merge` and
    /// `Compress` return a newly built one. `operand` is the second grid for
    /// `Merge` and is ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MissingOperand`] for `Merge` without an operand.
    pub fn apply(self, mut grid: Grid, operand: Option<&Grid>) -> Result<Grid, GridError> {
        match self {
            Transform::Mirror => mirror(&mut grid),
            Transform::Grayscale => grayscale(&mut grid),
            Transform::Invert => invert(&mut grid),
            Transform::Merge => {
                let other = operand.ok_or(GridError::MissingOperand {
                    transform: self.name(),
                })?;
                return Ok(merge(&grid, other));
            }
            Transform::Compress => return Ok(compress(&grid)),
        }
        Ok(grid)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown transformation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTransformError(String);

impl fmt::Display for ParseTransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown transform: {}", self.0)
    }
}

impl std::error::Error for ParseTransformError {}

impl FromStr for Transform {
    type Err = ParseTransformError;

    /// Parse a name case-insensitively; `grey`/`gray` are accepted for
    /// [`Transform::Grayscale`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "mirror" => Ok(Transform::Mirror),
            "grayscale" | "greyscale" | "gray" | "grey" => Ok(Transform::Grayscale),
            "invert" => Ok(Transform::Invert),
            "merge" => Ok(Transform::Merge),
            "compress" => Ok(Transform::Compress),
            _ => Err(ParseTransformError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from(vec![
            vec![[233, 100, 115], [0, 0, 0], [255, 255, 0]],
            vec![[199, 201, 116], [1, 9, 0]],
        ])
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for t in Transform::ALL {
            assert_eq!(t.name().parse::<Transform>(), Ok(t));
            assert_eq!(t.to_string(), t.name());
        }
    }

    #[test]
    fn test_from_str_aliases_and_case() {
        assert_eq!("Grey".parse::<Transform>(), Ok(Transform::Grayscale));
        assert_eq!(" COMPRESS ".parse::<Transform>(), Ok(Transform::Compress));
        assert_eq!(
            "blur".parse::<Transform>(),
            Err(ParseTransformError("blur".to_string()))
        );
    }

    #[test]
    fn test_apply_matches_free_functions() {
        let mut expected = sample();
        invert(&mut expected);
        assert_eq!(Transform::Invert.apply(sample(), None), Ok(expected));

        assert_eq!(
            Transform::Compress.apply(sample(), None),
            Ok(compress(&sample()))
        );
    }

    #[test]
    fn test_in_place_transforms_keep_shape() {
        for t in Transform::ALL.into_iter().filter(|t| t.is_in_place()) {
            let out = t.apply(sample(), None).unwrap();
            let lens: Vec<usize> = out.rows().iter().map(Vec::len).collect();
            assert_eq!(lens, vec![3, 2], "{} changed the grid shape", t);
        }
    }

    #[test]
    fn test_merge_requires_operand() {
        assert_eq!(
            Transform::Merge.apply(sample(), None),
            Err(GridError::MissingOperand { transform: "merge" })
        );
    }

    #[test]
    fn test_merge_with_operand() {
        let other = Grid::from(vec![vec![[7, 7, 7]]; 3]);
        let out = Transform::Merge.apply(sample(), Some(&other)).unwrap();
        assert_eq!(out, merge(&sample(), &other));
    }

    #[test]
    fn test_operand_ignored_for_other_transforms() {
        let other = Grid::from(vec![vec![[7, 7, 7]]]);
        assert_eq!(
            Transform::Mirror.apply(sample(), Some(&other)),
            Transform::Mirror.apply(sample(), None)
        );
    }
}
