//! Command line arguments of the `sdm` binary.
use crate::config::{Config, DEFAULT_DICT_PATH, DEFAULT_INDEX_PATH, DEFAULT_MAX_WORD_LEN};
use crate::query::{self, Summary, Words};
use crate::{Dict, DictError, DEFAULT_CHUNK_SIZE};
use clap::Parser;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// sdm - print StarDict definitions
///
/// Looks up every WORD, or every whitespace-separated word on standard input if none are given.
/// Definitions are written to standard output; "WORD NOT FOUND" goes to standard error for each
/// word without one.
#[derive(Parser, Debug, Clone)]
#[command(name = "sdm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct SdmArgs {
    /// StarDict index file
    #[arg(short, long, value_name = "IDX", env = "sdm_index", default_value = DEFAULT_INDEX_PATH)]
    pub index: PathBuf,

    /// StarDict data file
    #[arg(short, long, value_name = "DICT", env = "sdm_dict", default_value = DEFAULT_DICT_PATH)]
    pub dict: PathBuf,

    /// Longest word read from standard input; longer words are split
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_WORD_LEN)]
    pub max_word_len: usize,

    /// Verbosity level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Words to look up, taken as raw bytes; put them after `--` if they start with '-'
    #[arg(value_name = "WORD")]
    pub words: Vec<OsString>,
}

impl SdmArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    pub fn config(&self) -> Config {
        Config {
            index_path: self.index.clone(),
            dict_path: self.dict.clone(),
            max_word_len: self.max_word_len,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[cfg(unix)]
fn word_bytes(word: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(word.as_bytes())
}

#[cfg(not(unix))]
fn word_bytes(word: &OsStr) -> Cow<'_, [u8]> {
    match word.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Open the dictionary and look up the argument words, or the words of `stdin` if there are none.
///
/// Failing to open either file is reported before any word is read.
pub fn execute<R: BufRead>(args: &SdmArgs, stdin: R, out: &mut dyn Write, err: &mut dyn Write) -> Result<Summary, DictError> {
    let config = args.config();
    let mut dict = Dict::from_config(&config)?;

    if args.words.is_empty() {
        let words = Words::new(stdin, config.max_word_len);
        query::run(&mut dict, words, out, err)
    } else {
        let words = args.words.iter().map(|w| Ok::<_, io::Error>(word_bytes(w)));
        query::run(&mut dict, words, out, err)
    }
}
