use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("config path '{}' is a directory, not a file", path.display())]
    InvalidPath { path: PathBuf },
    #[error("config file is not valid JSON: {0}")]
    Parse(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("permission denied accessing '{}': {source}", path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error accessing '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine the home directory")]
    NoHomeDir,
}

impl ConfigError {
    /// Maps an I/O failure on `path`, splitting out access-denied errors.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => ConfigError::Permission { path, source },
            std::io::ErrorKind::NotFound => ConfigError::NotFound { path },
            _ => ConfigError::Io { path, source },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }
}

/// Field-set violations. Each variant lists the offending field names, sorted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("config missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("config has unexpected fields: {}", .0.join(", "))]
    UnexpectedFields(Vec<String>),
    #[error("config fields are empty or null, expected non-empty strings: {}", .0.join(", "))]
    EmptyFields(Vec<String>),
}

impl ValidationError {
    pub fn fields(&self) -> &[String] {
        match self {
            ValidationError::MissingFields(f)
            | ValidationError::UnexpectedFields(f)
            | ValidationError::EmptyFields(f) => f,
        }
    }
}
