//! Configuration for mzip-compress

use crate::error::EncodeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Extension given to archive files, without the leading dot.
    pub marker_extension: String,
    pub max_input_size: usize,
    /// Write the archive to a temporary file and rename it into place,
    /// so a failed run never leaves a truncated archive behind.
    pub atomic_write: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            marker_extension: "MZIP".to_string(),
            max_input_size: 100 * 1024 * 1024, // 100 MB
            atomic_write: true,
        }
    }
}

impl EncoderConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, EncodeError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&text).map_err(|e| EncodeError::Config(e.to_string()))?;
        if config.marker_extension.is_empty() {
            return Err(EncodeError::Config("marker_extension must not be empty".into()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker() {
        let config = EncoderConfig::default();
        assert_eq!(config.marker_extension, "MZIP");
        assert!(config.atomic_write);
    }

    #[test]
    fn test_from_file_rejects_empty_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"marker_extension":"","max_input_size":1024,"atomic_write":false}"#,
        )
        .unwrap();
        assert!(EncoderConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = EncoderConfig {
            marker_extension: "HUFF".to_string(),
            max_input_size: 4096,
            atomic_write: false,
        };
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        let loaded = EncoderConfig::from_file(&path).unwrap();
        assert_eq!(loaded.marker_extension, "HUFF");
        assert_eq!(loaded.max_input_size, 4096);
    }
}
