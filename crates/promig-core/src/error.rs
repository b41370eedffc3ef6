//! Error types for promig.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using promig's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for migration operations.
///
/// Every variant carries the path of the offending file so the CLI can
/// report per-file failures without extra bookkeeping.
#[derive(Error, Debug)]
pub enum Error {
    /// File content is not valid JSON.
    #[error("Parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// File or directory could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File parsed as JSON but the top level is not an object.
    #[error("Not a profile document (top level is not an object): {}", path.display())]
    NotAnObject { path: PathBuf },
}

impl Error {
    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        Error::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let source = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = Error::parse(Path::new("resources/profile-a.json"), source);
        let msg = err.to_string();
        assert!(msg.starts_with("Parse error in resources/profile-a.json:"));
    }

    #[test]
    fn test_error_display_io() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::io(Path::new("resources/profile-b.json"), source);
        let msg = err.to_string();
        assert!(msg.contains("I/O error on resources/profile-b.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_display_not_an_object() {
        let err = Error::NotAnObject {
            path: PathBuf::from("resources/profile-c.json"),
        };
        assert_eq!(
            err.to_string(),
            "Not a profile document (top level is not an object): resources/profile-c.json"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_error_debug_format() {
        let err = Error::NotAnObject {
            path: PathBuf::from("x"),
        };
        assert!(format!("{:?}", err).contains("NotAnObject"));
    }
}
