use crate::protocol::{Attr, ParseError};
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for autorip
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start {tool}: {source}")]
    CommandStart {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}")]
    CommandFailed { tool: String, status: ExitStatus },

    #[error("timed out waiting for {tool} to exit")]
    CommandWait { tool: String },

    #[error("operation canceled")]
    Canceled,

    #[error("parse line {line:?}: {source}")]
    LineParse {
        line: String,
        #[source]
        source: ParseError,
    },

    #[error("read process output: {0}")]
    OutputRead(#[source] std::io::Error),

    #[error("attribute {0:?} not found")]
    AttrNotFound(Attr),

    #[error("parse value {value:?}: {reason}")]
    ValueParse { value: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CoreError {
    /// Returns true for errors that abort an accumulation. Per-line parse
    /// failures are recoverable; everything else coming out of a line
    /// stream is not.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CoreError::LineParse { .. })
    }
}

/// Result type for autorip operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
