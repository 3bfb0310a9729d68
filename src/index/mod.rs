//! StarDict `.idx` access.
//!
//! An index is a plain sequence of records without header or record count:
//!
//! ```text
//! record := headword 0x00 offset:u32be size:u32be
//! ```
//!
//! Records carry no ordering guarantee, so lookups scan the whole stream from the start.
mod error;
pub mod parsing;
mod reader;

pub use self::error::IndexError;
pub use self::reader::IndexReader;

use log::debug;
use parsing::Context;
use std::io::{BufReader, Read, Seek, SeekFrom};

/// Byte range of a definition within the `.dict` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: u32,
    pub size: u32,
}

/// One index record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub headword: Vec<u8>,
    pub location: Location,
}

/// Linear-scan index over a seekable stream.
///
/// No records are kept in memory; each lookup rewinds the stream and reads records one by one
/// until the headword matches.
pub struct Index<R: Read + Seek> {
    reader: BufReader<R>,
}

impl<R: Read + Seek> Index<R> {
    pub fn new(reader: R) -> Self {
        Self { reader: BufReader::new(reader) }
    }

    /// Rewind and scan for `headword`. The first record in stream order wins.
    pub fn search(&mut self, headword: &[u8]) -> Result<Option<Entry>, IndexError> {
        self.reader.seek(SeekFrom::Start(0))?;
        let mut ctx = Context::default();
        let mut scanned = 0usize;

        while let Some(entry) = parsing::read_entry_at(&mut ctx, &mut self.reader)? {
            scanned += 1;
            if entry.headword == headword {
                debug!("matched {:?} after {} records", String::from_utf8_lossy(headword), scanned);
                return Ok(Some(entry));
            }
        }

        debug!("no match for {:?} in {} records", String::from_utf8_lossy(headword), scanned);
        Ok(None)
    }
}

