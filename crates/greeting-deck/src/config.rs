//! Viewer configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Window and asset settings. Missing fields in a config file keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory holding card pictures and tracks.
    pub asset_dir: PathBuf,
    /// Window title.
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Attempt playback as soon as the page mounts.
    pub autoplay: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            title: "Happy Birthday Cosec!".to_string(),
            width: 1280.0,
            height: 800.0,
            autoplay: true,
        }
    }
}

impl ViewerConfig {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
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

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.json");
        std::fs::write(&path, r#"{ "asset_dir": "/srv/party", "autoplay": false }"#).unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.asset_dir, PathBuf::from("/srv/party"));
        assert!(!config.autoplay);
        assert_eq!(config.title, "Happy Birthday Cosec!");
        assert_eq!(config.width, 1280.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewerConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = ViewerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
