//! # mediatree-core
//!
//! Core building blocks shared by the mediatree container parsers:
//!
//! - [`reader::Reader`] — a positioned, big-endian-aware reader over any
//!   `Read + Seek` source
//! - [`tree::Tree`] — the arena-backed parse tree with
//!   parent / first-child / next-sibling links, generic over the payload
//!   union each format crate defines
//! - [`value`] — scalar payload decoders (integers, floats, strings, UUIDs,
//!   epoch-rebased dates, fixed-point, packed language codes)
//! - [`error::Error`] — the shared I/O and decode error domain

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fourcc;
pub mod reader;
pub mod tree;
pub mod value;

pub use error::{Error, Result};
pub use fourcc::FourCc;
pub use reader::Reader;
pub use tree::{NewNode, Node, NodeId, Tree};
pub use value::{Fixed16_16, Fixed2_30, Fixed8_8, IsoLanguage, Uuid};
