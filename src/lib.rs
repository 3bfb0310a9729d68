//! A StarDict (`*.idx` + `*.dict`) lookup crate.
//!
//! A dictionary is made of a binary index, mapping headwords to byte ranges, and an uncompressed
//! data file holding the definitions at those ranges. Definitions are opaque bytes and are copied
//! verbatim into any `Write` sink.
//!
//! # Examples
//!
//! ```no_run
//! fn main() {
//!     let mut dict = sdict::Dict::from_file("/lib/stardict/default.dict", "/lib/stardict/default.idx").unwrap();
//!     let mut out = std::io::stdout();
//!     dict.lookup(b"ferrugo", &mut out).unwrap();
//! }
//! ```
pub mod cli;
pub mod config;
mod error;
pub mod index;
pub mod query;
mod uncompressed;

pub use self::config::Config;
pub use self::error::DictError;
pub use self::index::IndexError;
pub use self::uncompressed::{Uncompressed, DEFAULT_CHUNK_SIZE};

use self::index::{Index, IndexReader, Location};
use log::info;
use rassert_rs::rassert;
use std::{fs::File, io::Write, path::Path};

/// Limit size of an in-memory definition buffer
///
/// Definitions are never larger than 1 MB, so prevent malicious or malformed index files from
/// requesting too much memory in `fetch_definition`. Copying into a sink is not limited.
pub const MAX_BYTES_FOR_BUFFER: u64 = 1_048_576;

/// Access to the definitions of a `.dict` file.
pub trait DictReader {
    /// Copy the definition at `location` into `sink`, returning the number of bytes written.
    fn copy_definition(&mut self, location: Location, sink: &mut dyn Write) -> Result<u64, DictError>;

    fn fetch_definition(&mut self, location: Location) -> Result<Vec<u8>, DictError> {
        rassert!(u64::from(location.size) <= MAX_BYTES_FOR_BUFFER, DictError::MemoryError);

        let mut definition = Vec::with_capacity(location.size as usize);
        self.copy_definition(location, &mut definition)?;
        Ok(definition)
    }
}

/// A dictionary wrapper.
///
/// Pairs an index with the data file it points into. Every lookup rescans the index from the
/// start; nothing is cached between lookups.
pub struct Dict {
    pub(crate) reader: Box<dyn DictReader>,
    pub(crate) index: Box<dyn IndexReader>,
}

impl Dict {
    /// Open the data and index files at the given paths.
    pub fn from_file(dict_path: impl AsRef<Path>, index_path: impl AsRef<Path>) -> Result<Self, DictError> {
        Self::with_chunk_size(dict_path, index_path, DEFAULT_CHUNK_SIZE)
    }

    /// Open both files named by `config`.
    pub fn from_config(config: &Config) -> Result<Self, DictError> {
        config.validate()?;
        Self::with_chunk_size(&config.dict_path, &config.index_path, config.chunk_size)
    }

    fn with_chunk_size(dict_path: impl AsRef<Path>, index_path: impl AsRef<Path>, chunk_size: usize) -> Result<Self, DictError> {
        let index = Index::new(open(index_path.as_ref())?);
        let reader = Uncompressed::new(open(dict_path.as_ref())?)?.with_chunk_size(chunk_size);
        info!("opened {} ({} bytes) with index {}",
            dict_path.as_ref().display(), reader.len(), index_path.as_ref().display());

        Ok(Self { reader: Box::new(reader), index: Box::new(index) })
    }

    /// Assemble a dictionary from already opened readers.
    pub fn from_existing(reader: Box<dyn DictReader>, index: Box<dyn IndexReader>) -> Self {
        Self { reader, index }
    }

    /// Look up `headword` and copy its definition into `sink`.
    ///
    /// Returns the number of bytes written. `IndexError::WordNotFound` is reported if the index
    /// has no such headword.
    pub fn lookup(&mut self, headword: &[u8], sink: &mut dyn Write) -> Result<u64, DictError> {
        let entry = self.index.find(headword)?;
        self.reader.copy_definition(entry.location, sink)
    }

    /// Look up `headword` and return its definition.
    pub fn definition(&mut self, headword: &[u8]) -> Result<Vec<u8>, DictError> {
        let entry = self.index.find(headword)?;
        self.reader.fetch_definition(entry.location)
    }
}

fn open(path: &Path) -> Result<File, DictError> {
    File::open(path).map_err(|source| DictError::OpenFailed { path: path.to_path_buf(), source })
}
