//! Four-character codes, the BMFF box type tag.

use std::fmt;

/// A four-character code stored in file byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    /// Build a FourCC from the big-endian integer form used in node IDs.
    pub fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    /// The big-endian integer form, used as a node ID.
    pub fn as_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// The raw bytes of the code.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<&[u8; 4]> for FourCc {
    fn from(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            // Box types outside printable ASCII (the copyright sign in iTunes
            // tags, for instance) render as escapes.
            if (0x20..=0x7E).contains(&b) {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCc(\"{}\")", self)
    }
}
