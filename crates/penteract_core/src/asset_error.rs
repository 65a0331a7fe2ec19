//! Asset error types
//!
//! Errors raised while locating and loading optional assets (sounds, music).
//! None of them are fatal; callers log a warning and carry on silently.

use std::fmt;
use std::io;

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// IO error (permission denied, unreadable file, etc.)
    Io(io::Error),
    /// Malformed asset contents
    Parse(String),
    /// No file at the expected location
    NotFound(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(err) => write!(f, "Asset IO error: {}", err),
            AssetError::Parse(msg) => write!(f, "Asset parse error: {}", msg),
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(err) => Some(err),
            AssetError::Parse(_) | AssetError::NotFound(_) => None,
        }
    }
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        AssetError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_found_names_path() {
        let err = AssetError::NotFound("assets/beep1.wav".to_string());
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("beep1.wav"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err: AssetError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.to_string().contains("denied"));
        match &err {
            AssetError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io variant"),
        }
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_error_display() {
        let err = AssetError::Parse("truncated RIFF header".to_string());
        assert!(err.to_string().contains("parse error"));
    }
}
