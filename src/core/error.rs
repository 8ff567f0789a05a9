//! Error types for the stimulus pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating or encoding stimulus artifacts.
///
/// `SourceNotFound` is the one recoverable case: the encoders catch it and
/// degrade the artifact to a commented placeholder. Everything else aborts
/// the stage that hit it.
#[derive(Debug, Error)]
pub enum StimulusError {
    /// An output directory could not be created.
    #[error("output directory unavailable: {}: {}", .path.display(), .source)]
    ResourceUnavailable { path: PathBuf, source: io::Error },

    /// A declared encoder input does not exist.
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Any other I/O fault.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, StimulusError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn messages_name_the_offending_path() {
        let err = StimulusError::SourceNotFound(Path::new("tb/spike_input.txt").to_path_buf());
        assert_eq!(
            err.to_string(),
            "source file not found: tb/spike_input.txt"
        );
    }

    #[test]
    fn io_errors_convert_via_from() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "locked");
        let err = StimulusError::from(io_err);
        assert!(matches!(err, StimulusError::Io(_)));
    }
}
