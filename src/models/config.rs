use pixel_grid::Transform;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::error::ConfigError;

/// Pipeline configuration loaded from YAML
///
/// ```yaml
/// steps: [grayscale, compress]
/// compression: fast
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Transformations to run, in order
    #[serde(default = "default_steps", deserialize_with = "deserialize_steps")]
    pub steps: Vec<Transform>,

    /// PNG compression level for the encoded output
    #[serde(default)]
    pub compression: Compression,
}

fn default_steps() -> Vec<Transform> {
    vec![Transform::Compress]
}

fn deserialize_steps<'de, D>(deserializer: D) -> Result<Vec<Transform>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    names
        .iter()
        .map(|name| name.parse().map_err(serde::de::Error::custom))
        .collect()
}

/// zlib compression level for encoded PNGs
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Fast,
    #[default]
    Default,
    Best,
}

impl PipelineConfig {
    /// Parse and validate configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        tracing::info!(
            steps = config.steps.len(),
            compression = ?config.compression,
            "Loaded pipeline configuration"
        );
        Ok(config)
    }

    /// Read, parse and validate configuration from a reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ConfigError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_yaml_str(&content)
    }

    /// Reject configurations that would do nothing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::EmptyPipeline);
        }
        Ok(())
    }

    /// Whether any step needs a second grid
    pub fn needs_operand(&self) -> bool {
        self.steps.contains(&Transform::Merge)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            compression: Compression::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();

        assert_eq!(config.steps, vec![Transform::Compress]);
        assert_eq!(config.compression, Compression::Default);
        assert!(!config.needs_operand());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_steps_in_order() {
        let config = PipelineConfig::from_yaml_str(
            "steps: [mirror, grey, invert, merge, compress]\ncompression: best\n",
        )
        .unwrap();

        assert_eq!(
            config.steps,
            vec![
                Transform::Mirror,
                Transform::Grayscale,
                Transform::Invert,
                Transform::Merge,
                Transform::Compress,
            ]
        );
        assert_eq!(config.compression, Compression::Best);
        assert!(config.needs_operand());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = PipelineConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_block_list_syntax() {
        let yaml = r#"
steps:
  - grayscale
  - compress
compression: fast
"#;
        let config = PipelineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.steps, vec![Transform::Grayscale, Transform::Compress]);
        assert_eq!(config.compression, Compression::Fast);
    }

    #[test]
    fn test_unknown_step_rejected() {
        let err = PipelineConfig::from_yaml_str("steps: [mirror, blur]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("unknown transform: blur"));
    }

    #[test]
    fn test_unknown_compression_rejected() {
        let err = PipelineConfig::from_yaml_str("compression: maximum").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_steps_rejected() {
        let err = PipelineConfig::from_yaml_str("steps: []").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPipeline));
    }

    #[test]
    fn test_from_reader() {
        let config = PipelineConfig::from_reader("steps: [invert]".as_bytes()).unwrap();
        assert_eq!(config.steps, vec![Transform::Invert]);
    }
}
