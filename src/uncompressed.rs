use crate::index::Location;

use super::{DictError, DictReader};
use rassert_rs::rassert;
use std::io::{self, Read, Seek, SeekFrom, Write};
use DictError::*;

/// Default upper bound for a single read/write while copying a definition.
pub const DEFAULT_CHUNK_SIZE: usize = 512;

/// Uncompressed Dict reader
///
/// This reader can read uncompressed .dict files.
pub struct Uncompressed<R: Read + Seek> {
    pub(crate) reader: R,
    pub(crate) length: u64,
    pub(crate) chunk_size: usize,
}

impl<R: Read + Seek> Uncompressed<R> {
    pub fn new(mut reader: R) -> Result<Self, DictError> {
        let length = reader.seek(SeekFrom::End(0))?;

        Ok(Self { reader, length, chunk_size: DEFAULT_CHUNK_SIZE })
    }

    /// Copy definitions in pieces of at most `chunk_size` bytes. Zero is treated as one.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Length of the data file in bytes.
    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<B: Read + Seek> DictReader for Uncompressed<B> {
    fn copy_definition(&mut self, location: Location, sink: &mut dyn Write) -> Result<u64, DictError> {
        let offset = u64::from(location.offset);
        let size = u64::from(location.size);
        rassert!(offset <= self.length, SeekBeyondEnd { offset, length: self.length });

        let pos = self.reader.seek(SeekFrom::Start(offset))?;
        rassert!(pos == offset, SeekBeyondEnd { offset, length: self.length });

        let mut buf = vec![0; self.chunk_size];
        let mut copied = 0u64;
        while copied < size {
            let n = (size - copied).min(self.chunk_size as u64) as usize;
            if let Err(e) = self.reader.read_exact(&mut buf[..n]) {
                return Err(match e.kind() {
                    io::ErrorKind::UnexpectedEof => ShortRead { offset, size, read: copied },
                    _ => IoError(e),
                });
            }
            sink.write_all(&buf[..n]).map_err(WriteFailed)?;
            copied += n as u64;
        }

        Ok(copied)
    }
}
