//! EBML variable-length integer (VINT) decoding.
//!
//! Both element IDs and element lengths are VINTs: the count of leading zero
//! bits in the first byte, plus one, is the total width in bytes. IDs keep
//! the marker bit as part of their value; lengths strip it.

use crate::error::{EbmlError, Result};
use mediatree_core::Reader;
use std::io::{Read, Seek};

/// Maximum VINT width in bytes.
pub const MAX_VINT_LENGTH: u32 = 8;

fn read_raw<R: Read + Seek>(reader: &mut Reader<R>) -> Result<(u64, u32, u64)> {
    let offset = reader.position()?;
    let first = reader.read_u8()?;
    let width = first.leading_zeros() + 1;
    if width > MAX_VINT_LENGTH {
        return Err(EbmlError::VintOutOfRange { offset });
    }
    let mut value = first as u64;
    for _ in 1..width {
        value = (value << 8) | reader.read_u8()? as u64;
    }
    Ok((value, width, offset))
}

fn data_bits(value: u64, width: u32) -> u64 {
    value & !(1u64 << (7 * width))
}

fn all_ones(width: u32) -> u64 {
    (1u64 << (7 * width)) - 1
}

/// Read an element ID: the raw VINT with its marker bits retained, plus the
/// width in bytes. Reserved all-zero and all-one encodings are surfaced as
/// errors.
pub fn read_element_id<R: Read + Seek>(reader: &mut Reader<R>) -> Result<(u64, u32)> {
    let (value, width, offset) = read_raw(reader)?;
    let data = data_bits(value, width);
    if data == 0 {
        return Err(EbmlError::VintAllZeroes { offset });
    }
    if data == all_ones(width) {
        return Err(EbmlError::VintAllOnes { offset });
    }
    Ok((value, width))
}

/// Read an element length: the numeric payload with the marker stripped,
/// plus the width in bytes. The all-one "unknown size" encoding is reserved
/// and surfaced as an error.
pub fn read_vint<R: Read + Seek>(reader: &mut Reader<R>) -> Result<(u64, u32)> {
    let (value, width, offset) = read_raw(reader)?;
    let data = data_bits(value, width);
    if data == all_ones(width) {
        return Err(EbmlError::VintAllOnes { offset });
    }
    Ok((data, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(data: &[u8]) -> Reader<Cursor<Vec<u8>>> {
        Reader::new(Cursor::new(data.to_vec())).unwrap()
    }

    #[test]
    fn test_read_vint_widths() {
        let mut r = reader(&[0x81]);
        assert_eq!(read_vint(&mut r).unwrap(), (1, 1));

        let mut r = reader(&[0x40, 0x81]);
        assert_eq!(read_vint(&mut r).unwrap(), (129, 2));

        let mut r = reader(&[0x20, 0x40, 0x00]);
        assert_eq!(read_vint(&mut r).unwrap(), (16384, 3));

        let mut r = reader(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02]);
        assert_eq!(read_vint(&mut r).unwrap(), (2, 8));
    }

    #[test]
    fn test_read_element_id_keeps_marker() {
        let mut r = reader(&[0xEC]);
        assert_eq!(read_element_id(&mut r).unwrap(), (0xEC, 1));

        let mut r = reader(&[0x1A, 0x45, 0xDF, 0xA3]);
        assert_eq!(read_element_id(&mut r).unwrap(), (0x1A45DFA3, 4));
    }

    #[test]
    fn test_reserved_all_zeroes() {
        // 0x80: one-byte VINT whose seven data bits are all zero.
        let mut r = reader(&[0x80]);
        assert!(matches!(
            read_element_id(&mut r),
            Err(EbmlError::VintAllZeroes { offset: 0 })
        ));
        // As a length, zero is a legitimate empty payload.
        let mut r = reader(&[0x80]);
        assert_eq!(read_vint(&mut r).unwrap(), (0, 1));
    }

    #[test]
    fn test_reserved_all_ones() {
        let mut r = reader(&[0xFF]);
        assert!(matches!(
            read_vint(&mut r),
            Err(EbmlError::VintAllOnes { offset: 0 })
        ));
        let mut r = reader(&[0x7F, 0xFF]);
        assert!(matches!(
            read_vint(&mut r),
            Err(EbmlError::VintAllOnes { .. })
        ));
        let mut r = reader(&[0xFF]);
        assert!(matches!(
            read_element_id(&mut r),
            Err(EbmlError::VintAllOnes { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        // Leading byte 0x00 claims a nine-byte VINT.
        let mut r = reader(&[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        assert!(matches!(
            read_vint(&mut r),
            Err(EbmlError::VintOutOfRange { offset: 0 })
        ));
    }

    #[test]
    fn test_truncated_vint() {
        let mut r = reader(&[0x40]);
        assert!(read_vint(&mut r).is_err());
    }
}
