pub mod pipeline;

pub use pipeline::TransformPipeline;
