//! Generation errors.

use thiserror::Error;

/// A configuration entity with no registered description template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedEntityError {
    #[error("unsupported platform model '{model}'")]
    Platform { model: String },

    #[error("decoration '{decoration}' is not supported on platform '{platform}'")]
    Decoration { platform: String, decoration: String },

    #[error("mount '{mount}' uses unsupported model '{model}'")]
    MountModel { mount: String, model: String },
}

/// Failures of an output sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("output document is closed")]
    Closed,

    #[error("I/O error writing output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to persist output to {path}: {message}")]
    Persist { path: String, message: String },
}

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedEntityError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}
