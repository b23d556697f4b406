//! Artifact storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Artifact storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory where interview JSON artifacts are written
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.trim().is_empty() {
            return Err(ValidationError::InvalidOutputDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "output_files".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.output_dir, "output_files");
    }

    #[test]
    fn test_validation_rejects_blank_output_dir() {
        let config = StorageConfig {
            output_dir: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
