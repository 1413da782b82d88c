//! Render Configuration
//! Where the charts go: blocking viewer windows or PNG files on disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default directory for file output.
pub const DEFAULT_OUTPUT_DIR: &str = "charts";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read render config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid render config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Chart destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderTarget {
    /// One native window per chart, each blocking until closed.
    #[default]
    InteractiveDisplay,
    /// PNG files in the output directory.
    FileOutput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    pub target: RenderTarget,
    /// Used only when `target` is `file-output`.
    pub output_directory: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target: RenderTarget::InteractiveDisplay,
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl RenderConfig {
    pub fn file_output(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            target: RenderTarget::FileOutput,
            output_directory: output_directory.into(),
        }
    }

    /// Load a JSON render config, e.g.
    /// `{"target": "file-output", "output-directory": "out/charts"}`.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_is_interactive() {
        let config = RenderConfig::default();

        assert_eq!(config.target, RenderTarget::InteractiveDisplay);
        assert_eq!(config.output_directory, PathBuf::from("charts"));
    }

    #[test]
    fn parses_kebab_case_options() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"target": "file-output", "output-directory": "out/plots"}"#)
                .unwrap();

        assert_eq!(config, RenderConfig::file_output("out/plots"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"target": "file-output"}"#).unwrap();

        assert_eq!(config.target, RenderTarget::FileOutput);
        assert_eq!(config.output_directory, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn unknown_target_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"target": "printer"}"#).unwrap();

        let err = RenderConfig::from_json_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let err = RenderConfig::from_json_file(Path::new("no/such/config.json")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
