//! Query sources and the batch driver.
use crate::index::IndexError;
use crate::{Dict, DictError};
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Written to the error channel for every word that produced no definition.
pub const NOT_FOUND_MARKER: &[u8] = b"WORD NOT FOUND\n";

/// Whitespace as understood by C's `isspace` in the "C" locale.
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Splits a byte stream into whitespace-separated words.
///
/// Words longer than `max_len` bytes are cut into consecutive pieces of at most `max_len` bytes,
/// each yielded as a word of its own. A word running into the end of input is still yielded.
pub struct Words<R: BufRead> {
    reader: R,
    max_len: usize,
}

impl<R: BufRead> Words<R> {
    /// `max_len` of zero is raised to one.
    pub fn new(reader: R, max_len: usize) -> Self {
        Self { reader, max_len: max_len.max(1) }
    }

    fn skip_space(&mut self) -> io::Result<bool> {
        loop {
            let (n, more) = {
                let buf = self.reader.fill_buf()?;
                if buf.is_empty() { return Ok(false) }
                let n = buf.iter().take_while(|&&b| is_space(b)).count();
                (n, n == buf.len())
            };
            self.reader.consume(n);
            if !more { return Ok(true) }
        }
    }

    fn read_word(&mut self) -> io::Result<Vec<u8>> {
        let mut word = Vec::new();
        loop {
            let (n, hit_space) = {
                let buf = self.reader.fill_buf()?;
                if buf.is_empty() { break }
                let room = self.max_len - word.len();
                let n = buf.iter().take(room).take_while(|&&b| !is_space(b)).count();
                word.extend_from_slice(&buf[..n]);
                (n, n < buf.len() && is_space(buf[n]))
            };
            self.reader.consume(n);
            if hit_space || word.len() == self.max_len { break }
        }
        Ok(word)
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.skip_space() {
                Ok(false) => return None,
                Ok(true) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        Some(self.read_word())
    }
}

/// Outcome counts of one batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub found: usize,
    pub missing: usize,
}

/// Look up every word in order.
///
/// Definitions go to `out`, which is flushed after each one. A word that is not in the index, a
/// corrupt index, or a definition outside the data file writes [`NOT_FOUND_MARKER`] to `err` and
/// the batch continues. Failing to write to either sink aborts the batch with
/// `DictError::WriteFailed`; failing to read the next word aborts it with `DictError::IoError`.
pub fn run<I, W>(dict: &mut Dict, words: I, out: &mut dyn Write, err: &mut dyn Write) -> Result<Summary, DictError>
where
    I: IntoIterator<Item = io::Result<W>>,
    W: AsRef<[u8]>,
{
    let mut summary = Summary::default();

    for word in words {
        let word = word?;
        let word = word.as_ref();

        match dict.lookup(word, out) {
            Ok(n) => {
                out.flush().map_err(DictError::WriteFailed)?;
                debug!("wrote {} bytes for {:?}", n, String::from_utf8_lossy(word));
                summary.found += 1;
            }
            Err(e) if e.is_per_word() => {
                match e {
                    DictError::Index(IndexError::WordNotFound(ref w)) => debug!("{:?} not found", w),
                    ref e => info!("lookup of {:?} failed: {}", String::from_utf8_lossy(word), e),
                }
                err.write_all(NOT_FOUND_MARKER).map_err(DictError::WriteFailed)?;
                summary.missing += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!("{} found, {} not found", summary.found, summary.missing);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn words(input: &str, max_len: usize) -> Vec<String> {
        Words::new(Cursor::new(input), max_len)
            .map(|w| String::from_utf8(w.unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(words("  cat\t\tdog\n\x0bfox \r\n", 255), vec!["cat", "dog", "fox"]);
    }

    #[test]
    fn last_word_without_trailing_space() {
        assert_eq!(words("cat dog", 255), vec!["cat", "dog"]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(words("", 255).is_empty());
        assert!(words(" \n\t ", 255).is_empty());
    }

    #[test]
    fn long_words_are_split() {
        assert_eq!(words("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert_eq!(words("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn split_across_buffer_boundaries() {
        let reader = io::BufReader::with_capacity(2, Cursor::new("hello  world"));
        let words: Vec<_> = Words::new(reader, 255).map(|w| w.unwrap()).collect();

        assert_eq!(words, vec![b"hello".to_vec(), b"world".to_vec()]);
    }

    #[test]
    fn default_cap_splits_256_byte_word() {
        let long = "x".repeat(256);
        let split = words(&long, 255);

        assert_eq!(split.len(), 2);
        assert_eq!(split[0].len(), 255);
        assert_eq!(split[1], "x");
    }
}
