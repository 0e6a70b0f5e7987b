//! Error type shared by the loader, the parser and the overview computation.

use std::io;
use std::path::PathBuf;

/// Failures raised while turning a log file into a report.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// The log file does not exist.
    #[error("log file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The log file exists but could not be opened or read.
    #[error("failed to read log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No `NNNMB` token was found, so there is no memory range to show.
    #[error("no memory data found in log")]
    EmptyMemorySamples,
}

impl ReportError {
    /// Classify an I/O error raised for `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            ReportError::NotFound(path)
        } else {
            ReportError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_classified() {
        let err = ReportError::from_io("missing.log", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ReportError::NotFound(_)));
        assert_eq!(err.to_string(), "log file not found: missing.log");
    }

    #[test]
    fn test_other_io_errors_keep_source() {
        let err = ReportError::from_io("locked.log", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ReportError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to read log file locked.log: "));
    }

    #[test]
    fn test_empty_memory_message() {
        assert_eq!(ReportError::EmptyMemorySamples.to_string(), "no memory data found in log");
    }
}
