#![allow(clippy::module_inception)]

//! pixel-grid: RGB pixel grid transformations
//!
//! This library holds an image as an explicit grid of integer RGB pixels and
//! provides five transformations over it. Nothing here decodes or encodes
//! image files; that is left to the caller.
//!
//! # Quick Start
//!
//! ```
//! use pixel_grid::{compress, grayscale, Grid, Pixel};
//!
//! let mut grid = Grid::from(vec![
//!     vec![[233, 100, 115], [0, 0, 0]],
//!     vec![[199, 201, 116], [1, 9, 0]],
//! ]);
//!
//! grayscale(&mut grid);
//! assert_eq!(grid.get(0, 0), Some(&Pixel::new(149, 149, 149)));
//!
//! let small = compress(&grid);
//! assert_eq!(small.height(), 1);
//! assert_eq!(small.width(), 1);
//! ```
//!
//! # Transformations
//!
//! | Operation | Mutates input | Output shape |
//! |-----------|---------------|--------------|
//! | [`mirror`] | yes | unchanged |
//! | [`grayscale`] | yes | unchanged |
//! | [`invert`] | yes | unchanged |
//! | [`merge`] | no | max height × max width of the two inputs |
//! | [`compress`] | no | `ceil(h/2)` × `ceil(w/2)` |
//!
//! [`Transform`] names each operation so callers can drive them from
//! configuration.
//!
//! # Ragged Grids
//!
//! Rows of one grid do not have to share a length. Every operation looks up
//! the length of the row it is working on instead of caching a grid width.
//! [`Grid::width`] reports row 0's length only, which is the nominal width
//! used by [`merge`] and by image encoders.

pub mod grid;
pub mod transform;


pub use grid::{Grid, GridError, Pixel};
pub use transform::{compress, grayscale, invert, merge, mirror, ParseTransformError, Transform};
