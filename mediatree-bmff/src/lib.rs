//! # mediatree-bmff
//!
//! ISO Base Media File Format (ISO/IEC 14496-12) structure parsing: the
//! container underlying MP4, M4A, HEIF and JPEG 2000.
//!
//! A file is decoded into a navigable parse tree built on
//! [`mediatree_core::Tree`]:
//!
//! - box headers with compact, extended (`size == 1`) and to-end-of-file
//!   (`size == 0`) sizes, plus `uuid` extended types
//! - a synthetic `ftyp` carrying the ISO defaults when a file omits its own
//! - decoded payloads for `ftyp`, `mvhd`, `tkhd`, `mdhd`, `elst`, `hdlr`,
//!   `meta` and `chpl`, with version-0/1 width switching
//! - the Apple iTunes metadata list under `moov.udta.meta.ilst`, parsed on
//!   request into tag/value pairs
//! - `mdat`, `free` and unknown boxes kept as offset-only placeholders
//!
//! ## Example
//!
//! ```no_run
//! use mediatree_bmff::{BmffFile, BmffOptions, BoxValue};
//!
//! let mut file = BmffFile::open("movie.mp4").unwrap();
//! file.parse(&BmffOptions { parse_metadata: true }).unwrap();
//!
//! println!("time scale: {}", file.summary().time_scale);
//! if let Some(BoxValue::MovieHeader(mvhd)) = file.value_at_path(&["moov", "mvhd"]) {
//!     println!("duration: {}", mvhd.duration);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boxes;
pub mod error;
mod itunes;
pub mod parser;

pub use boxes::{
    BoxValue, ChapterEntry, EditEntry, ExtendedMeta, FileType, Handler, MediaHeader, MetaValue,
    MovieHeader, TrackHeader,
};
pub use error::{BmffError, Result};
pub use parser::{is_bmff_signature, BmffFile, BmffOptions, Summary};
