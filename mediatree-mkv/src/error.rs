//! EBML and Matroska-specific error types.

use thiserror::Error;

/// Errors raised while parsing EBML envelopes and Matroska bodies.
#[derive(Error, Debug)]
pub enum EbmlError {
    /// The stream does not begin with a readable `EBML` element.
    #[error("EBML header missing or corrupt at offset {offset}")]
    HeaderMissingOrCorrupt {
        /// Byte offset where the header was expected.
        offset: u64,
    },

    /// A second `EBML` element appeared inside a header being parsed.
    #[error("duplicated EBML header at offset {offset}")]
    HeaderDuplicated {
        /// Byte offset of the duplicate element.
        offset: u64,
    },

    /// A fixed-width header field carried an unexpected length.
    #[error("EBML header field 0x{id:X} has unexpected length {len}")]
    UnexpectedFieldLength {
        /// Element ID of the offending field.
        id: u64,
        /// Declared payload length.
        len: u64,
    },

    /// The EBML version or read-version is beyond what this parser reads.
    #[error("unsupported EBML version {version}")]
    UnsupportedVersion {
        /// The declared version.
        version: u64,
    },

    /// The header finished without a usable DocType.
    #[error("DocType is empty")]
    DocTypeEmpty,

    /// The DocType string exceeds the 1024-byte bound.
    #[error("DocType is too long: {len} bytes")]
    DocTypeTooLong {
        /// Declared payload length.
        len: u64,
    },

    /// DocTypeVersion must be at least 1.
    #[error("invalid DocTypeVersion {version}")]
    DocTypeVersionInvalid {
        /// The declared version.
        version: u64,
    },

    /// DocTypeReadVersion must be at least 1 and no greater than
    /// DocTypeVersion.
    #[error("invalid DocTypeReadVersion {read_version} (DocTypeVersion is {version})")]
    DocTypeReadVersionInvalid {
        /// The declared read-version.
        read_version: u64,
        /// The declared version it must not exceed.
        version: u64,
    },

    /// EBMLMaxIDLength must be within `[4, 8]`.
    #[error("invalid EBMLMaxIDLength {value}")]
    MaxIdLengthInvalid {
        /// The declared value.
        value: u64,
    },

    /// EBMLMaxSizeLength must be within `[1, 8]`.
    #[error("invalid EBMLMaxSizeLength {value}")]
    MaxSizeLengthInvalid {
        /// The declared value.
        value: u64,
    },

    /// A CRC-32 element payload was not exactly 4 bytes.
    #[error("CRC-32 element has invalid size {len}")]
    InvalidCrcSize {
        /// Declared payload length.
        len: u64,
    },

    /// A CRC-32 check failed over its covered range.
    #[error(
        "CRC mismatch over [{start}, {end}]: declared {declared:#010x}, computed {computed:#010x}"
    )]
    InvalidCrc {
        /// First covered byte.
        start: u64,
        /// Last covered byte, inclusive.
        end: u64,
        /// Checksum declared in the element.
        declared: u32,
        /// Checksum recomputed from the file.
        computed: u32,
    },

    /// A VINT with all data bits zero, reserved by RFC 8794.
    #[error("all-zero VINT at offset {offset}")]
    VintAllZeroes {
        /// Byte offset of the VINT.
        offset: u64,
    },

    /// A VINT with all data bits one, reserved by RFC 8794.
    #[error("all-one VINT at offset {offset}")]
    VintAllOnes {
        /// Byte offset of the VINT.
        offset: u64,
    },

    /// A VINT longer than 8 bytes, or longer than the document allows.
    #[error("VINT out of range at offset {offset}")]
    VintOutOfRange {
        /// Byte offset of the VINT.
        offset: u64,
    },

    /// A Matroska/WebM body did not start with a Segment element.
    #[error("Matroska body root has wrong ID 0x{id:X}")]
    BodyRootWrongId {
        /// The ID actually found.
        id: u64,
    },

    /// A SeekPosition outside a `SeekHead > Seek` nesting.
    #[error("SeekPosition at offset {offset} is not inside SeekHead.Seek")]
    BrokenSeekPosition {
        /// Byte offset of the element.
        offset: u64,
    },

    /// A segment UID family element was not exactly 16 bytes.
    #[error("segment UID has invalid length {len}, expected 16")]
    SegmentUidInvalidLength {
        /// Declared payload length.
        len: u64,
    },

    /// A TrackType element was not exactly 1 byte.
    #[error("TrackType has invalid length {len}, expected 1")]
    TrackTypeInvalidLength {
        /// Declared payload length.
        len: u64,
    },

    /// I/O or scalar decode failure from the core layer.
    #[error(transparent)]
    Core(#[from] mediatree_core::Error),
}

impl From<std::io::Error> for EbmlError {
    fn from(err: std::io::Error) -> Self {
        EbmlError::Core(err.into())
    }
}

/// Result type for EBML operations.
pub type Result<T> = std::result::Result<T, EbmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EbmlError::InvalidCrc {
            start: 100,
            end: 200,
            declared: 0xDEADBEEF,
            computed: 0x12345678,
        };
        let text = err.to_string();
        assert!(text.contains("0xdeadbeef"));
        assert!(text.contains("0x12345678"));

        let err = EbmlError::BodyRootWrongId { id: 0x1F43B675 };
        assert!(err.to_string().contains("1F43B675"));
    }

    #[test]
    fn test_core_error_passthrough() {
        let core = mediatree_core::Error::FileEmpty;
        let err: EbmlError = core.into();
        assert_eq!(err.to_string(), "file is empty");
    }
}
