use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ReportError;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "report.toml";

/// Optional settings from `report.toml`. Command-line flags win over these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    /// Render a heading for severities with no findings.
    pub show_empty_sections: bool,
    pub output: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Vulnerability Report".to_string(),
            show_empty_sections: false,
            output: None,
        }
    }
}

impl ReportConfig {
    pub fn parse(contents: &str) -> Result<Self, ReportError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads `path`, or `report.toml` when it exists.
    ///
    /// A missing default file means defaults. An explicit path must exist, and
    /// any file that is present must parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ReportError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let config = Self::parse(&contents).map_err(|e| {
                    ReportError::config(format!("{}: {}", path.display(), e.message))
                })?;
                tracing::debug!(path = %path.display(), ?config, "loaded report config");
                Ok(config)
            }
            Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no report config, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ReportError::io(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ReportConfig::parse("show_empty_sections = true").unwrap();
        assert_eq!(config.title, "Vulnerability Report");
        assert!(config.show_empty_sections);
        assert_eq!(config.output, None);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ReportConfig::load(Some(&missing)).unwrap_err();
        assert_eq!(err.kind, ReportErrorKind::Io);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.toml");
        std::fs::write(&path, "title = [").unwrap();
        let err = ReportConfig::load(Some(&path)).unwrap_err();
        assert_eq!(err.kind, ReportErrorKind::Config);
        assert!(err.message.contains("report.toml"), "{err}");
    }

    #[test]
    fn loads_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "title = \"Nightly\"\noutput = \"out/report.html\"\n").unwrap();
        let config = ReportConfig::load(Some(&path)).unwrap();
        assert_eq!(config.title, "Nightly");
        assert_eq!(config.output, Some(PathBuf::from("out/report.html")));
    }
}
