//! Rawpix - raw pixel grid image transformations
//!
//! Decodes PNG images into explicit RGB pixel grids, runs configured
//! transformations from the `pixel-grid` crate over them, and encodes the
//! result. This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;

pub use pixel_grid::{Grid, GridError, Pixel, Transform};
