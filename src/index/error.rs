use std::io;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Reports words which are not present in the dictionary.
    #[error("Word '{0}' not found in the dictionary.")]
    WordNotFound(String),

    /// The index ended in the middle of a headword, before its terminating NUL byte.
    #[error("Index truncated inside a headword starting at byte {0}.")]
    TruncatedHeadword(u64),

    /// The index ended before the 32-bit `offset` or `size` field of a record was complete.
    #[error("Index truncated inside the {field} field of the record starting at byte {start}.")]
    TruncatedRecord { field: &'static str, start: u64 },

    /// A wrapped io::Error.
    #[error("Encountered an IO error.")]
    IoError(#[from] io::Error),
}
