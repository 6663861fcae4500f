pub mod config;

pub use config::{Compression, PipelineConfig};
