use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the movie link service.
#[derive(Debug, Error)]
pub enum MovieLinksError {
    /// The catalog file exists but could not be read.
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured bind address is not a valid socket address.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

pub type Result<T> = std::result::Result<T, MovieLinksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_mentions_path() {
        let err = MovieLinksError::Io {
            path: PathBuf::from("links.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("links.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MovieLinksError>();
    }
}
