//! CRC-32 verification of EBML element ranges.
//!
//! An optional `CRC-32` element must be the first child of its parent; its
//! payload is the IEEE 802.3 checksum of every following byte within the
//! parent, stored little-endian per RFC 8794.

use crate::error::{EbmlError, Result};
use crc::{Crc, CRC_32_ISO_HDLC};
use mediatree_core::Reader;
use std::io::{Read, Seek};

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Block size for streaming the covered range.
const BLOCK_SIZE: u64 = 4096;

/// Recompute the checksum over `[start, end]` and compare it to the declared
/// value. The read position is saved on entry and restored before the
/// comparison, so a mismatch leaves the reader where it was.
pub fn verify<R: Read + Seek>(
    reader: &mut Reader<R>,
    declared: u32,
    start: u64,
    end: u64,
) -> Result<()> {
    let saved = reader.position()?;
    reader.set_position(start)?;

    let mut digest = CRC32.digest();
    let mut remaining = (end + 1).saturating_sub(start);
    while remaining > 0 {
        let chunk = reader.read_vec(remaining.min(BLOCK_SIZE))?;
        if chunk.is_empty() {
            return Err(mediatree_core::Error::FileEndedEarly { offset: end }.into());
        }
        remaining -= chunk.len() as u64;
        digest.update(&chunk);
    }

    reader.set_position(saved)?;

    let computed = digest.finalize();
    if computed != declared {
        return Err(EbmlError::InvalidCrc {
            start,
            end,
            declared,
            computed,
        });
    }
    Ok(())
}

/// Compute the checksum of a byte run, for writers of test fixtures.
pub fn checksum(data: &[u8]) -> u32 {
    CRC32.checksum(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_verify_matches() {
        let data = b"the quick brown fox jumps over the lazy dog".to_vec();
        let declared = checksum(&data[10..30]);
        let mut reader = Reader::new(Cursor::new(data)).unwrap();
        reader.set_position(5).unwrap();

        verify(&mut reader, declared, 10, 29).unwrap();
        // Position restored.
        assert_eq!(reader.position().unwrap(), 5);
    }

    #[test]
    fn test_verify_mismatch() {
        let data = vec![0xABu8; 64];
        let mut reader = Reader::new(Cursor::new(data)).unwrap();
        let err = verify(&mut reader, 0x1234_5678, 0, 63).unwrap_err();
        assert!(matches!(err, EbmlError::InvalidCrc { declared: 0x1234_5678, .. }));
    }

    #[test]
    fn test_verify_spans_blocks() {
        // Range wider than one streaming block.
        let data: Vec<u8> = (0..=255u8).cycle().take(3 * 4096 + 17).collect();
        let declared = checksum(&data[1..]);
        let end = data.len() as u64 - 1;
        let mut reader = Reader::new(Cursor::new(data)).unwrap();
        verify(&mut reader, declared, 1, end).unwrap();
    }

    #[test]
    fn test_verify_truncated_range() {
        let data = vec![0u8; 16];
        let mut reader = Reader::new(Cursor::new(data)).unwrap();
        assert!(verify(&mut reader, 0, 8, 63).is_err());
    }
}
