//! Shared error types for the mediatree parsers.
//!
//! Format-specific errors live in the format crates and wrap this type.

use thiserror::Error;

/// Errors shared by every mediatree parser: I/O failures and scalar payload
/// decoding failures.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist or could not be opened.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The input file is zero bytes long.
    #[error("file is empty")]
    FileEmpty,

    /// The file ended before a declared structure was complete.
    #[error("file ended early at offset {offset}")]
    FileEndedEarly {
        /// Byte offset at which the truncation was detected.
        offset: u64,
    },

    /// An unsigned integer field had a length outside 0..=8 bytes.
    #[error("unsigned integer field has invalid length {len}")]
    UnsignedInvalidLength {
        /// Declared field length in bytes.
        len: u64,
    },

    /// A signed integer field had a length outside 0..=8 bytes.
    #[error("signed integer field has invalid length {len}")]
    SignedInvalidLength {
        /// Declared field length in bytes.
        len: u64,
    },

    /// A float field had a length other than 0, 4 or 8 bytes.
    #[error("float field has invalid length {len}")]
    FloatInvalidLength {
        /// Declared field length in bytes.
        len: u64,
    },

    /// A printable-ASCII string contained a byte outside 0x20..=0x7E.
    #[error("unprintable byte 0x{byte:02X} in string field")]
    UnprintableString {
        /// The offending byte value.
        byte: u8,
    },

    /// A UUID field was not exactly 16 bytes long.
    #[error("UUID field has invalid length {len}, expected 16")]
    UuidInvalidLength {
        /// Declared field length in bytes.
        len: u64,
    },

    /// A fixed-point field had a length other than 2 or 4 bytes.
    #[error("fixed-point field has invalid length {len}")]
    FixedInvalidLength {
        /// Declared field length in bytes.
        len: u64,
    },

    /// An underlying I/O operation failed.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::FileEndedEarly { offset: 451417 };
        assert_eq!(err.to_string(), "file ended early at offset 451417");

        let err = Error::UnprintableString { byte: 0x07 };
        assert!(err.to_string().contains("0x07"));
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
