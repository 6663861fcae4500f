//! Pixel and grid types
//!
//! This module provides the data model every transformation works on:
//! [`Pixel`] (three integer channels), [`Grid`] (rows of pixels), and
//! [`GridError`] for invalid input.

mod error;
mod grid;
mod pixel;

pub use error::GridError;
pub use grid::Grid;
pub use pixel::{Pixel, CHANNELS};
