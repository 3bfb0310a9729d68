//! Explicit lookup configuration.
//!
//! The library never consults the environment; callers (the `sdm` binary) build a `Config` and
//! hand it over.
use crate::uncompressed::DEFAULT_CHUNK_SIZE;
use crate::DictError;
use rassert_rs::rassert;
use std::path::PathBuf;

pub const DEFAULT_INDEX_PATH: &str = "/lib/stardict/default.idx";
pub const DEFAULT_DICT_PATH: &str = "/lib/stardict/default.dict";

/// Longest word read from a stream before it is split.
pub const DEFAULT_MAX_WORD_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub index_path: PathBuf,
    pub dict_path: PathBuf,
    /// Words read from a stream are cut into pieces of at most this many bytes.
    pub max_word_len: usize,
    /// Upper bound for a single read/write while copying a definition.
    pub chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            dict_path: PathBuf::from(DEFAULT_DICT_PATH),
            max_word_len: DEFAULT_MAX_WORD_LEN,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), DictError> {
        rassert!(self.max_word_len > 0, DictError::InvalidConfig("maximum word length must be at least 1".into()));
        rassert!(self.chunk_size > 0, DictError::InvalidConfig("chunk size must be at least 1".into()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();

        assert_eq!(config.index_path, PathBuf::from("/lib/stardict/default.idx"));
        assert_eq!(config.dict_path, PathBuf::from("/lib/stardict/default.dict"));
        assert_eq!(config.max_word_len, 255);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let config = Config { max_word_len: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(DictError::InvalidConfig(_))));

        let config = Config { chunk_size: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(DictError::InvalidConfig(_))));
    }
}
