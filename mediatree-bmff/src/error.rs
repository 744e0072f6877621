//! BMFF-specific error types.

use thiserror::Error;

/// Errors raised while parsing ISO BMFF box structures.
#[derive(Error, Debug)]
pub enum BmffError {
    /// A box appeared in a place the format forbids.
    #[error("wrong file format at offset {offset}")]
    WrongFileFormat {
        /// Byte offset of the offending box.
        offset: u64,
    },

    /// A box header declared a size smaller than the header itself.
    #[error("invalid box size {size} at offset {offset}")]
    InvalidBoxSize {
        /// Byte offset of the box.
        offset: u64,
        /// The declared size.
        size: u64,
    },

    /// More than one `ftyp` box, or an `ftyp` that is not the first box.
    #[error("duplicated ftyp box at offset {offset}")]
    FtypDuplicated {
        /// Byte offset of the extra box.
        offset: u64,
    },

    /// An `ftyp` payload that is too short or not brand-aligned.
    #[error("ftyp box has invalid size {size}")]
    FtypInvalidSize {
        /// The payload size.
        size: u64,
    },

    /// An `mvhd` box with a version other than 0 or 1.
    #[error("mvhd box has unknown version {version}")]
    MvhdUnknownVersion {
        /// The declared version.
        version: u8,
    },

    /// An `mvhd` payload whose size does not match its version.
    #[error("mvhd box has invalid size {size}")]
    MvhdInvalidSize {
        /// The payload size.
        size: u64,
    },

    /// A `tkhd` box with a version other than 0 or 1.
    #[error("tkhd box has unknown version {version}")]
    TkhdUnknownVersion {
        /// The declared version.
        version: u8,
    },

    /// A `tkhd` payload whose size does not match its version.
    #[error("tkhd box has invalid size {size}")]
    TkhdInvalidSize {
        /// The payload size.
        size: u64,
    },

    /// An `mdhd` box with a version other than 0 or 1.
    #[error("mdhd box has unknown version {version}")]
    MdhdUnknownVersion {
        /// The declared version.
        version: u8,
    },

    /// An `mdhd` payload whose size does not match its version.
    #[error("mdhd box has invalid size {size}")]
    MdhdInvalidSize {
        /// The payload size.
        size: u64,
    },

    /// An `elst` box with a version other than 0 or 1.
    #[error("elst box has unknown version {version}")]
    ElstUnknownVersion {
        /// The declared version.
        version: u8,
    },

    /// An `elst` payload whose size does not match its entry count.
    #[error("elst box has invalid size {size}")]
    ElstInvalidSize {
        /// The payload size.
        size: u64,
    },

    /// A `chpl` box with a version other than 0 or 1.
    #[error("chpl box has unknown version {version}")]
    ChplUnknownVersion {
        /// The declared version.
        version: u8,
    },

    /// A `chpl` payload whose entries do not fill its declared size.
    #[error("chpl box has invalid size {size}")]
    ChplInvalidSize {
        /// The payload size.
        size: u64,
    },

    /// An `hdlr` box outside `mdia` or `meta`.
    #[error("hdlr box has unexpected parent at offset {offset}")]
    HdlrUnexpectedParent {
        /// Byte offset of the box.
        offset: u64,
    },

    /// An `hdlr` payload too short for its fixed prefix.
    #[error("hdlr box has invalid size {size}")]
    HdlrInvalidSize {
        /// The payload size.
        size: u64,
    },

    /// I/O or scalar decode failure from the core layer.
    #[error(transparent)]
    Core(#[from] mediatree_core::Error),
}

impl From<std::io::Error> for BmffError {
    fn from(err: std::io::Error) -> Self {
        BmffError::Core(err.into())
    }
}

/// Result type for BMFF operations.
pub type Result<T> = std::result::Result<T, BmffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BmffError::FtypInvalidSize { size: 7 };
        assert_eq!(err.to_string(), "ftyp box has invalid size 7");

        let err = BmffError::MvhdUnknownVersion { version: 3 };
        assert!(err.to_string().contains("version 3"));
    }
}
