//! # mediatree-mkv
//!
//! EBML (RFC 8794) and Matroska/WebM structure parsing.
//!
//! This crate turns an EBML stream into a navigable parse tree built on
//! [`mediatree_core::Tree`]:
//!
//! - VINT decoding for element IDs and lengths
//! - EBML header parsing with the RFC 8794 field validations
//! - Matroska/WebM bodies walked against an exhaustive element schema
//! - DocTypes other than `matroska`/`webm` handled generically as
//!   offset-only nodes
//! - Concatenated EBML documents collected into an ordered document list
//! - CRC-32 verification of any master whose first child is a `CRC-32`
//!   element
//!
//! Cluster contents are deliberately never interned; with
//! [`EbmlOptions::skip_clusters`] their byte ranges are recorded without
//! traversal, and [`EbmlOptions::return_after_cluster`] supports walking
//! a file cluster by cluster.
//!
//! ## Example
//!
//! ```no_run
//! use mediatree_mkv::{EbmlFile, EbmlOptions, schema};
//!
//! let mut file = EbmlFile::open("video.mkv").unwrap();
//! file.parse(&EbmlOptions::default()).unwrap();
//!
//! for doc in file.documents() {
//!     println!("doctype {:?} v{}", doc.doc_type, doc.doc_type_version);
//! }
//! for node in file.find_elements(schema::CODEC_ID) {
//!     println!("codec: {}", file.tree().node(node).payload);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod crc;
pub mod ebml;
pub mod error;
pub mod parser;
pub mod schema;
pub mod vint;

pub use ebml::{Document, ElementValue, TrackKind};
pub use error::{EbmlError, Result};
pub use parser::{is_ebml_signature, EbmlFile, EbmlOptions, ParseStatus};
