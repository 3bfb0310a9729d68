use super::{Entry, IndexError, Location};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, BufRead};
use IndexError::*;

/// Byte position within the index, used for error reporting only.
#[derive(Default)]
pub(crate) struct Context {
    pub(crate) pos: u64,
}

/// Read the next `headword \0 offset:u32be size:u32be` record.
///
/// Returns `Ok(None)` if the reader is exhausted exactly at a record boundary. Anything else that
/// ends early is reported as a truncated index.
pub fn read_entry(reader: &mut impl BufRead) -> Result<Option<Entry>, IndexError> {
    read_entry_at(&mut Context::default(), reader)
}

pub(crate) fn read_entry_at(ctx: &mut Context, reader: &mut impl BufRead) -> Result<Option<Entry>, IndexError> {
    let start = ctx.pos;
    let mut headword = Vec::new();

    let num_read = reader.read_until(0, &mut headword)?;
    if num_read == 0 { return Ok(None) }
    if headword.pop() != Some(0) {
        return Err(TruncatedHeadword(start));
    }

    let offset = read_field(reader, "offset", start)?;
    let size = read_field(reader, "size", start)?;
    ctx.pos += num_read as u64 + 8;

    Ok(Some(Entry { headword, location: Location { offset, size } }))
}

fn read_field(reader: &mut impl BufRead, field: &'static str, start: u64) -> Result<u32, IndexError> {
    reader.read_u32::<BigEndian>().map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => TruncatedRecord { field, start },
        _ => IoError(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_headword_is_a_record() {
        let mut reader = Cursor::new(b"\0\x00\x00\x00\x01\x00\x00\x00\x02".to_vec());
        let entry = read_entry(&mut reader).unwrap().unwrap();

        assert!(entry.headword.is_empty());
        assert_eq!(entry.location, Location { offset: 1, size: 2 });
        assert!(read_entry(&mut reader).unwrap().is_none());
    }

    #[test]
    fn position_is_tracked_across_records() {
        let mut reader = Cursor::new(b"ab\0\0\0\0\0\0\0\0\0cd".to_vec());
        let mut ctx = Context::default();
        read_entry_at(&mut ctx, &mut reader).unwrap().unwrap();

        assert_eq!(ctx.pos, 11);
        match read_entry_at(&mut ctx, &mut reader) {
            Err(TruncatedHeadword(11)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
