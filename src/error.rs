use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Template path '{}' {reason}", path.display())]
    InvalidInput { path: PathBuf, reason: &'static str },

    #[error("Failed to walk template directory: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid indicator tables in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ScanError {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        ScanError::InvalidInput {
            path: path.into(),
            reason: "does not exist",
        }
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        ScanError::InvalidInput {
            path: path.into(),
            reason: "is not a directory",
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScanError::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_messages() {
        let err = ScanError::missing("/no/such/dir");
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Template path '/no/such/dir' does not exist");

        let err = ScanError::not_a_directory("notes.txt");
        assert_eq!(err.to_string(), "Template path 'notes.txt' is not a directory");
    }
}
