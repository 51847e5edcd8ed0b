// Connection settings, loadable from a JSON config file.
use std::path::Path;

use serde::Deserialize;

use crate::error::{DqError, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub endpoint: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            endpoint: "http://localhost:50051".to_string(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
        }
    }
}

impl EngineSettings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| DqError::ConfigError(format!("invalid settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_points_at_local_engine() {
        let settings = EngineSettings::default();
        assert_eq!(settings.endpoint, "http://localhost:50051");
    }

    #[test]
    fn loads_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"endpoint":"http://analytics:9090","connect_timeout_ms":1000,"request_timeout_ms":5000}}"#
        )
        .unwrap();
        let settings = EngineSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.endpoint, "http://analytics:9090");
        assert_eq!(settings.request_timeout_ms, 5000);
    }

    #[test]
    fn rejects_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(EngineSettings::from_file(file.path()).is_err());
    }
}
