//! Error types for the ticket formatter.
//!
//! Every failure carries the path it concerns so the top level can print a
//! message naming the file without extra context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`FormatError`], used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    InvalidJson,
    Other,
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("The file '{}' was not found.", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not decode JSON from the file '{}': {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed, but its top-level value is not a list of tickets.
    #[error("Could not decode JSON from the file '{}': expected an array of tickets, found {found}", .path.display())]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error("An unexpected error occurred reading '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("An unexpected error occurred formatting tickets: {0}")]
    Render(#[from] serde_json::Error),

    #[error("An unexpected error occurred writing '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FormatError {
    /// Classify an I/O failure on the input file.
    pub fn from_read(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => FormatError::FileNotFound { path, source },
            _ => FormatError::Read { path, source },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::FileNotFound { .. } => ErrorKind::FileNotFound,
            FormatError::InvalidJson { .. } | FormatError::NotAnArray { .. } => ErrorKind::InvalidJson,
            FormatError::Read { .. } | FormatError::Render(_) | FormatError::Write { .. } => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_classified_as_not_found() {
        let err = FormatError::from_read(PathBuf::from("tickets.json"), io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.to_string(), "The file 'tickets.json' was not found.");
    }

    #[test]
    fn test_permission_denied_classified_as_other() {
        let err =
            FormatError::from_read(PathBuf::from("tickets.json"), io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(err.to_string().starts_with("An unexpected error occurred reading 'tickets.json'"));
    }

    #[test]
    fn test_not_an_array_is_invalid_json() {
        let err = FormatError::NotAnArray { path: PathBuf::from("t.json"), found: "an object" };
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert!(err.to_string().contains("Could not decode JSON from the file 't.json'"));
        assert!(err.to_string().contains("found an object"));
    }
}
