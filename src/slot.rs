//! The on-disk slot layout.
//!
//! A record is stored in a form of:
//!
//! * key - 4 bytes, little-endian `i32`
//! * name - 50 bytes (up to 49 content bytes, then zero fill)
//! * major - 50 bytes, same convention
//! * gpa - 4 bytes, little-endian `f32`
//!
//! Slots are concatenated with no header, footer or padding, so a file of
//! N records is exactly `N * SIZE` bytes long. All slot offset arithmetic
//! in the crate goes through [`offset_of`].

use crate::{field, record::Record};
use byteorder::{ByteOrder, LittleEndian};
use std::io::{self, Read};

/// Width of one text field buffer: the content capacity plus the
/// terminating zero.
const FIELD_LEN: usize = field::CAPACITY + 1;

/// Size in bytes of one slot.
pub(crate) const SIZE: usize = 4 + 2 * FIELD_LEN + 4;

const NAME_OFFSET: usize = 4;
const MAJOR_OFFSET: usize = NAME_OFFSET + FIELD_LEN;
const GPA_OFFSET: usize = MAJOR_OFFSET + FIELD_LEN;

/// Byte offset of the slot with the given ordinal index.
pub(crate) fn offset_of(index: u64) -> u64 {
    index * SIZE as u64
}

/// Encode a record into slot form. Unused field bytes are zeroed.
pub(crate) fn encode(record: &Record) -> [u8; SIZE] {
    let mut buf = [0u8; SIZE];
    LittleEndian::write_i32(&mut buf[..NAME_OFFSET], record.key());
    write_field(&mut buf[NAME_OFFSET..MAJOR_OFFSET], record.name());
    write_field(&mut buf[MAJOR_OFFSET..GPA_OFFSET], record.major());
    LittleEndian::write_f32(&mut buf[GPA_OFFSET..], record.gpa());
    buf
}

/// Decode one slot. Field bytes run to the first zero and are converted
/// lossily, so a foreign file cannot panic the reader.
pub(crate) fn decode(buf: &[u8; SIZE]) -> Record {
    let key = LittleEndian::read_i32(&buf[..NAME_OFFSET]);
    let name = read_field(&buf[NAME_OFFSET..MAJOR_OFFSET]);
    let major = read_field(&buf[MAJOR_OFFSET..GPA_OFFSET]);
    let gpa = LittleEndian::read_f32(&buf[GPA_OFFSET..]);
    Record::new(key, &name, &major, gpa)
}

fn write_field(buf: &mut [u8], value: &str) {
    buf[..value.len()].copy_from_slice(value.as_bytes());
}

fn read_field(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

/// Read up to one slot from `reader`, retrying on interruption.
///
/// Returns the number of bytes placed in `buf`: `SIZE` for a complete
/// slot, less at end-of-file. A short count covers both a clean end and a
/// trailing partial slot; callers treat anything short as the end of the
/// file.
pub(crate) fn fill<R: Read>(reader: &mut R, buf: &mut [u8; SIZE]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, GPA_OFFSET, MAJOR_OFFSET, NAME_OFFSET, SIZE};
    use crate::{record::Record, testutils::TestRecord};

    #[quickcheck]
    fn encode_decode_sanity(data: TestRecord) -> bool {
        let record = data.record();
        decode(&encode(&record)) == record
    }

    #[test]
    fn slots_are_fixed_width() {
        assert_eq!(SIZE, 108);
    }

    #[test]
    fn field_bytes_after_the_content_are_zeroed() {
        let buf = encode(&Record::new(7, "a", "b", 1.0));
        assert!(buf[NAME_OFFSET + 1..MAJOR_OFFSET].iter().all(|&b| b == 0));
        assert!(buf[MAJOR_OFFSET + 1..GPA_OFFSET].iter().all(|&b| b == 0));
    }
}
