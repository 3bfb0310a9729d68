use crate::index::IndexError;
use std::{io, path::PathBuf};

/// Error type, representing the errors which can be returned by the sdict library.
///
/// Index problems are wrapped as [`IndexError`](index/enum.IndexError.html); the remaining
/// variants concern the `.dict` data file, the output sink and configuration.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// Lookup or parsing failure in the index file.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The requested definition starts beyond the end of the data file.
    #[error("Cannot seek to offset {offset}, the data file is only {length} bytes long.")]
    SeekBeyondEnd { offset: u64, length: u64 },

    /// The data file ended before the whole definition could be read.
    #[error("Short read: definition at offset {offset} needs {size} bytes, got {read}.")]
    ShortRead { offset: u64, size: u64, read: u64 },

    /// The output sink rejected a write.
    #[error("Could not write definition to output.")]
    WriteFailed(#[source] io::Error),

    /// This reports a malicious/malformed index file, which requests a buffer which is too large.
    #[error("Requested too much memory. Definitions are never larger than 1 MB. The index file is malicious or malformed.")]
    MemoryError,

    /// The index or data file could not be opened.
    #[error("Could not open {}.", .path.display())]
    OpenFailed { path: PathBuf, #[source] source: io::Error },

    /// Rejected configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A wrapped io::Error.
    #[error("Encountered an IO error.")]
    IoError(#[from] io::Error),
}

impl DictError {
    /// True if the error only concerns the word being looked up, so a batch may continue.
    pub fn is_per_word(&self) -> bool {
        !matches!(self, DictError::WriteFailed(_) | DictError::OpenFailed { .. } | DictError::InvalidConfig(_))
    }
}
