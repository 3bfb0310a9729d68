use super::{Entry, Index, IndexError};
use std::io::{Read, Seek};

/// Generic index reader trait
///
/// # Note
/// Lets `Dict` hold its index as a trait object instead of being generic over the reader.
pub trait IndexReader {
    fn find(&mut self, headword: &[u8]) -> Result<Entry, IndexError>;
}

impl<R: Read + Seek> IndexReader for Index<R> {
    fn find(&mut self, headword: &[u8]) -> Result<Entry, IndexError> {
        self.search(headword)?
            .ok_or_else(|| IndexError::WordNotFound(String::from_utf8_lossy(headword).into_owned()))
    }
}
