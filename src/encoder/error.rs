//! Encoder error types.
//!
//! # Error Categories
//!
//! - [`EncoderError::File`]: Opening or creating a named file failed
//! - [`EncoderError::Stream`]: Reading or writing an already open stream failed
//! - [`EncoderError::MalformedRecord`]: A mapping record has no code field
//! - [`EncoderError::InputClosed`]: Input ended while waiting for a filename

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a mapping table or encoding text.
#[derive(Debug, Error)]
pub enum EncoderError {
    /// A named file could not be opened or created.
    #[error("cannot access {}: {source}", .path.display())]
    File {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to an open stream failed.
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    /// A mapping record is missing its code field.
    #[error("malformed mapping record at line {line}: {content:?}")]
    MalformedRecord {
        /// 1-based line number within the mapping file.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// Input ended before a filename was entered.
    #[error("input closed before a filename was entered")]
    InputClosed,
}

impl EncoderError {
    /// Creates an [`EncoderError::File`] for `path`.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}
