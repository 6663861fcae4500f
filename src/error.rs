use pixel_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported color type: {0}")]
    UnsupportedColor(String),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Image too large: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Pipeline has no steps")]
    EmptyPipeline,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Step {index} ({step}) failed: {source}")]
    Step {
        index: usize,
        step: pixel_grid::Transform,
        #[source]
        source: GridError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_unsupported_color() {
        let error = CodecError::UnsupportedColor("Indexed".to_string());
        assert_eq!(error.to_string(), "Unsupported color type: Indexed");
    }

    #[test]
    fn test_codec_error_empty_image() {
        assert_eq!(CodecError::EmptyImage.to_string(), "Image has no pixels");
    }

    #[test]
    fn test_codec_error_too_large() {
        let error = CodecError::TooLarge {
            width: 5_000_000_000,
            height: 1,
        };
        assert_eq!(error.to_string(), "Image too large: 5000000000x1");
    }

    #[test]
    fn test_codec_error_from_grid_error() {
        let error: CodecError = GridError::Ragged {
            row: 1,
            expected: 2,
            actual: 1,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Invalid grid: grid is not rectangular: row 1 has 1 pixels, row 0 has 2"
        );
    }

    #[test]
    fn test_config_error_empty_pipeline() {
        assert_eq!(ConfigError::EmptyPipeline.to_string(), "Pipeline has no steps");
    }

    #[test]
    fn test_pipeline_error_step() {
        let error = PipelineError::Step {
            index: 2,
            step: pixel_grid::Transform::Merge,
            source: GridError::MissingOperand { transform: "merge" },
        };
        assert_eq!(
            error.to_string(),
            "Step 2 (merge) failed: merge requires a second grid"
        );
    }

    #[test]
    fn test_pipeline_error_from_codec_error() {
        let pipeline_error: PipelineError = CodecError::EmptyImage.into();
        match pipeline_error {
            PipelineError::Codec(CodecError::EmptyImage) => {}
            _ => panic!("Expected Codec variant"),
        }
    }
}
