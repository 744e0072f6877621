//! Scalar payload decoders.
//!
//! Every decoder takes the length-scoped byte run of a single field and
//! either produces a typed value or reports why the bytes cannot carry one.
//! Container engines read the bytes, call these, and intern the result into
//! the node payload.

use crate::error::{Error, Result};
use std::fmt;

/// Seconds between 1904-01-01 (the BMFF epoch) and the Unix epoch.
pub const BMFF_EPOCH_OFFSET: i64 = 2_082_844_800;

/// Nanoseconds between the Unix epoch and 2001-01-01 (the Matroska epoch).
pub const MATROSKA_EPOCH_OFFSET_NS: i64 = 978_307_200 * 1_000_000_000;

/// Decode a big-endian unsigned integer of 0..=8 bytes. Zero bytes is zero.
pub fn read_unsigned(data: &[u8]) -> Result<u64> {
    if data.len() > 8 {
        return Err(Error::UnsignedInvalidLength {
            len: data.len() as u64,
        });
    }
    let mut value = 0u64;
    for &byte in data {
        value = (value << 8) | byte as u64;
    }
    Ok(value)
}

/// Decode a big-endian two's-complement signed integer of 0..=8 bytes,
/// sign-extending from the top bit of the first byte. Zero bytes is zero.
pub fn read_signed(data: &[u8]) -> Result<i64> {
    if data.len() > 8 {
        return Err(Error::SignedInvalidLength {
            len: data.len() as u64,
        });
    }
    if data.is_empty() {
        return Ok(0);
    }
    let mut value = if data[0] & 0x80 != 0 { -1i64 } else { 0i64 };
    for &byte in data {
        value = (value << 8) | byte as i64;
    }
    Ok(value)
}

/// Decode a big-endian IEEE 754 float of 0, 4 or 8 bytes. Zero bytes is 0.0.
pub fn read_float(data: &[u8]) -> Result<f64> {
    match data.len() {
        0 => Ok(0.0),
        4 => {
            let bits = u32::from_be_bytes(data.try_into().unwrap());
            Ok(f32::from_bits(bits) as f64)
        }
        8 => {
            let bits = u64::from_be_bytes(data.try_into().unwrap());
            Ok(f64::from_bits(bits))
        }
        len => Err(Error::FloatInvalidLength { len: len as u64 }),
    }
}

/// Decode a printable-ASCII string, truncated at the first NUL.
///
/// Bytes outside 0x20..=0x7E (NUL aside) are rejected; fields that may
/// legitimately carry them are tagged UTF-8 by their schema and decoded with
/// [`read_utf8`] instead.
pub fn read_printable(data: &[u8]) -> Result<String> {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    for &byte in &data[..end] {
        if !(0x20..=0x7E).contains(&byte) {
            return Err(Error::UnprintableString { byte });
        }
    }
    // All bytes verified ASCII above.
    Ok(String::from_utf8(data[..end].to_vec()).unwrap())
}

/// Decode a UTF-8 string, truncated at the first NUL. Invalid sequences are
/// replaced rather than rejected; codepoints are not otherwise validated.
pub fn read_utf8(data: &[u8]) -> String {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).into_owned()
}

/// Rebase a Matroska date (signed nanoseconds since 2001-01-01T00:00:00 UTC)
/// onto the Unix epoch, still in nanoseconds.
pub fn matroska_date_to_unix_ns(ns_since_2001: i64) -> i64 {
    ns_since_2001.saturating_add(MATROSKA_EPOCH_OFFSET_NS)
}

/// Rebase a BMFF date (unsigned seconds since 1904-01-01T00:00:00 UTC) onto
/// the Unix epoch.
pub fn bmff_date_to_unix(secs_since_1904: u64) -> i64 {
    (secs_since_1904 as i64).saturating_sub(BMFF_EPOCH_OFFSET)
}

/// An RFC 4122 UUID unpacked into its five fields.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Uuid {
    /// Low field of the timestamp.
    pub time_low: u32,
    /// Middle field of the timestamp.
    pub time_mid: u16,
    /// High field of the timestamp with the version.
    pub time_hi_and_version: u16,
    /// Clock sequence with the variant.
    pub clock_seq: u16,
    /// Spatially unique node identifier.
    pub node: [u8; 6],
}

impl Uuid {
    /// Unpack a UUID from exactly 16 bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        if data.len() != 16 {
            return Err(Error::UuidInvalidLength {
                len: data.len() as u64,
            });
        }
        let mut node = [0u8; 6];
        node.copy_from_slice(&data[10..16]);
        Ok(Self {
            time_low: u32::from_be_bytes(data[0..4].try_into().unwrap()),
            time_mid: u16::from_be_bytes(data[4..6].try_into().unwrap()),
            time_hi_and_version: u16::from_be_bytes(data[6..8].try_into().unwrap()),
            clock_seq: u16::from_be_bytes(data[8..10].try_into().unwrap()),
            node,
        })
    }

    /// Repack the UUID into its 16-byte wire form.
    pub fn to_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.time_low.to_be_bytes());
        out[4..6].copy_from_slice(&self.time_mid.to_be_bytes());
        out[6..8].copy_from_slice(&self.time_hi_and_version.to_be_bytes());
        out[8..10].copy_from_slice(&self.clock_seq.to_be_bytes());
        out[10..16].copy_from_slice(&self.node);
        out
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.time_low,
            self.time_mid,
            self.time_hi_and_version,
            self.clock_seq,
            self.node[0],
            self.node[1],
            self.node[2],
            self.node[3],
            self.node[4],
            self.node[5],
        )
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self)
    }
}

/// Unsigned 8.8 fixed-point, used for BMFF volume fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed8_8(pub u16);

impl Fixed8_8 {
    /// The value as a float.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 256.0
    }
}

/// Unsigned 16.16 fixed-point, used for BMFF rate and dimension fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed16_16(pub u32);

impl Fixed16_16 {
    /// The integer part.
    pub fn integer(self) -> u32 {
        self.0 >> 16
    }

    /// The value as a float.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 65536.0
    }
}

/// Unsigned 2.30 fixed-point, the w component of BMFF transform matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed2_30(pub u32);

impl Fixed2_30 {
    /// The value as a float.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u32 << 30) as f64
    }
}

/// An ISO 639-2 language code packed three-letters-in-15-bits, as carried by
/// the BMFF `mdhd` box.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IsoLanguage(pub [u8; 3]);

impl IsoLanguage {
    /// Unpack from the 16-bit wire form: three 5-bit letters biased by 0x60.
    pub fn from_u16(code: u16) -> Self {
        let letter = |k: u32| 0x60 + ((code >> (5 * (2 - k))) & 0x1F) as u8;
        Self([letter(0), letter(1), letter(2)])
    }

    /// The code as a string slice, e.g. `"und"`.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Display for IsoLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for IsoLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsoLanguage(\"{}\")", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_unsigned() {
        assert_eq!(read_unsigned(&[]).unwrap(), 0);
        assert_eq!(read_unsigned(&[0x01]).unwrap(), 1);
        assert_eq!(read_unsigned(&[0x01, 0x00]).unwrap(), 256);
        assert_eq!(
            read_unsigned(&[0xFF; 8]).unwrap(),
            u64::MAX,
        );
        assert!(matches!(
            read_unsigned(&[0u8; 9]),
            Err(Error::UnsignedInvalidLength { len: 9 })
        ));
    }

    #[test]
    fn test_read_signed() {
        assert_eq!(read_signed(&[]).unwrap(), 0);
        assert_eq!(read_signed(&[0x01]).unwrap(), 1);
        assert_eq!(read_signed(&[0xFF]).unwrap(), -1);
        assert_eq!(read_signed(&[0x00, 0x80]).unwrap(), 128);
        assert_eq!(read_signed(&[0xFF, 0x7F]).unwrap(), -129);
        assert!(read_signed(&[0u8; 9]).is_err());
    }

    #[test]
    fn test_read_float() {
        assert_eq!(read_float(&[]).unwrap(), 0.0);
        assert_eq!(read_float(&1.5f32.to_bits().to_be_bytes()).unwrap(), 1.5);
        assert_eq!(read_float(&1.5f64.to_bits().to_be_bytes()).unwrap(), 1.5);
        assert!(matches!(
            read_float(&[0u8; 3]),
            Err(Error::FloatInvalidLength { len: 3 })
        ));
    }

    #[test]
    fn test_read_printable() {
        assert_eq!(read_printable(b"S_TEXT/UTF8").unwrap(), "S_TEXT/UTF8");
        assert_eq!(read_printable(b"hun\x00garbage\x01").unwrap(), "hun");
        assert!(matches!(
            read_printable(&[0x41, 0x07]),
            Err(Error::UnprintableString { byte: 0x07 })
        ));
    }

    #[test]
    fn test_read_utf8() {
        assert_eq!(read_utf8("séance".as_bytes()), "séance");
        assert_eq!(read_utf8(b"abc\x00def"), "abc");
    }

    #[test]
    fn test_epoch_rebasing() {
        // 2001-01-01 in Matroska time is the Unix timestamp of that instant.
        assert_eq!(matroska_date_to_unix_ns(0), 978_307_200_000_000_000);
        // 1904-01-01 in BMFF time is 2,082,844,800 seconds before Unix zero.
        assert_eq!(bmff_date_to_unix(0), -2_082_844_800);
        assert_eq!(bmff_date_to_unix(2_082_844_800), 0);
    }

    #[test]
    fn test_uuid_unpack() {
        let bytes: [u8; 16] = [
            0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
            0x77, 0x88,
        ];
        let uuid = Uuid::from_slice(&bytes).unwrap();
        assert_eq!(uuid.time_low, 0x12345678);
        assert_eq!(uuid.time_mid, 0x9ABC);
        assert_eq!(uuid.time_hi_and_version, 0xDEF0);
        assert_eq!(uuid.clock_seq, 0x1122);
        assert_eq!(uuid.node, [0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
        assert_eq!(uuid.to_bytes(), bytes);
        assert_eq!(uuid.to_string(), "12345678-9abc-def0-1122-334455667788");

        assert!(matches!(
            Uuid::from_slice(&bytes[..15]),
            Err(Error::UuidInvalidLength { len: 15 })
        ));
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(Fixed8_8(0x0100).to_f64(), 1.0);
        assert_eq!(Fixed16_16(0x0001_8000).to_f64(), 1.5);
        assert_eq!(Fixed16_16(0x0780_0000).integer(), 1920);
        assert_eq!(Fixed2_30(1 << 30).to_f64(), 1.0);
    }

    #[test]
    fn test_language_unpack() {
        // "und" = (21-1+0x60=u,...)  0x55C4 packs 'u' 'n' 'd'.
        let code = ((b'u' - 0x60) as u16) << 10 | ((b'n' - 0x60) as u16) << 5
            | (b'd' - 0x60) as u16;
        assert_eq!(IsoLanguage::from_u16(code).as_str(), "und");

        let code = ((b'h' - 0x60) as u16) << 10 | ((b'u' - 0x60) as u16) << 5
            | (b'n' - 0x60) as u16;
        assert_eq!(IsoLanguage::from_u16(code).to_string(), "hun");
    }
}
