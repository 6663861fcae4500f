//! Row-major pixel grid.

use super::error::GridError;
use super::pixel::Pixel;

/// An image as rows of [`Pixel`]s, top row first, left pixel first.
///
/// Rows may differ in length. Use [`Grid::rectangular`] or
/// [`Grid::ensure_rectangular`] where uniform rows are required (for example
/// before handing the grid to an image encoder).
///
/// # Example
///
/// ```
/// use pixel_grid::{Grid, Pixel};
///
/// let grid = Grid::from(vec![
///     vec![[1, 2, 3], [4, 5, 6]],
///     vec![[7, 8, 9]],
/// ]);
///
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.get(1, 0), Some(&Pixel::new(7, 8, 9)));
/// assert_eq!(grid.get(1, 1), None);
/// assert!(!grid.is_rectangular());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<Pixel>>,
}

impl Grid {
    /// Create a grid from rows of any length.
    #[inline]
    pub fn new(rows: Vec<Vec<Pixel>>) -> Self {
        Self { rows }
    }

    /// Create a grid, rejecting rows whose length differs from row 0.
    pub fn rectangular(rows: Vec<Vec<Pixel>>) -> Result<Self, GridError> {
        let grid = Self { rows };
        grid.ensure_rectangular()?;
        Ok(grid)
    }

    /// Create a grid from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionsOverflow`] if `width * height` does not
    /// fit in `usize`, and [`GridError::LengthMismatch`] if
    /// `pixels.len() != width * height`.
    pub fn from_flat(pixels: Vec<Pixel>, width: usize, height: usize) -> Result<Self, GridError> {
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::DimensionsOverflow { width, height })?;
        if pixels.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        if width == 0 {
            return Ok(Self {
                rows: vec![Vec::new(); height],
            });
        }
        let rows = pixels.chunks_exact(width).map(<[Pixel]>::to_vec).collect();
        Ok(Self { rows })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of row 0, or 0 for a grid with no rows.
    ///
    /// This is the nominal width; other rows may be shorter or longer.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the grid has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The pixel at row `i`, column `j`, if that cell exists.
    ///
    /// A cell exists when `i` is below the row count and `j` is below the
    /// length of row `i` specifically.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&Pixel> {
        self.rows.get(i).and_then(|row| row.get(j))
    }

    /// Row `i`, if present.
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[Pixel]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// All rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    /// Mutable access to the rows' pixels.
    ///
    /// Row lengths cannot be changed through this slice.
    #[inline]
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
        self.rows.iter_mut().map(Vec::as_mut_slice)
    }

    /// Iterate over every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &Pixel> {
        self.rows.iter().flatten()
    }

    /// Mutable iteration over every pixel in row-major order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Pixel> {
        self.rows.iter_mut().flatten()
    }

    /// Consume the grid and return its rows.
    #[inline]
    pub fn into_rows(self) -> Vec<Vec<Pixel>> {
        self.rows
    }

    /// Whether every row has row 0's length.
    pub fn is_rectangular(&self) -> bool {
        self.ensure_rectangular().is_ok()
    }

    /// Check that every row has row 0's length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Ragged`] naming the first row that differs.
    pub fn ensure_rectangular(&self) -> Result<(), GridError> {
        let expected = self.width();
        match self.rows.iter().position(|row| row.len() != expected) {
            Some(row) => Err(GridError::Ragged {
                row,
                expected,
                actual: self.rows[row].len(),
            }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Vec<Pixel>>> for Grid {
    #[inline]
    fn from(rows: Vec<Vec<Pixel>>) -> Self {
        Self::new(rows)
    }
}

impl From<Vec<Vec<[i32; 3]>>> for Grid {
    fn from(rows: Vec<Vec<[i32; 3]>>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Pixel::from).collect())
                .collect(),
        )
    }
}
