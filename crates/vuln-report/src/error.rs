use std::fmt;
use std::path::Path;

/// Broad category of a [`ReportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportErrorKind {
    Io,
    Parse,
    Config,
}

impl fmt::Display for ReportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportErrorKind::Io => write!(f, "IoError"),
            ReportErrorKind::Parse => write!(f, "ParseError"),
            ReportErrorKind::Config => write!(f, "ConfigError"),
        }
    }
}

/// Anything that stops a report from being produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportError {
    pub kind: ReportErrorKind,
    pub message: String,
}

impl ReportError {
    pub fn io(path: &Path, error: std::io::Error) -> Self {
        Self {
            kind: ReportErrorKind::Io,
            message: format!("{}: {error}", path.display()),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ReportErrorKind::Parse,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: ReportErrorKind::Config,
            message: message.into(),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ReportError {}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::parse(format!("invalid scan document: {error}"))
    }
}

impl From<toml::de::Error> for ReportError {
    fn from(error: toml::de::Error) -> Self {
        ReportError::config(error.to_string())
    }
}
