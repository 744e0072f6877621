//! The iTunes metadata sub-parser for `moov.udta.meta.ilst`.
//!
//! Children of `ilst` are four-character tags (`©nam`, `trkn`, `covr`, ...)
//! each holding a `data` atom, or the non-standard `----` item holding a
//! `mean`/`name`/`data` triple. The `data` payload is folded into the tag
//! node; this walk establishes parent and sibling links itself rather than
//! relying on range discovery.

use crate::boxes::{self, BoxValue, ExtendedMeta, MetaValue};
use crate::error::{BmffError, Result};
use crate::parser::RawBox;
use mediatree_core::tree::{NewNode, NodeId, Tree};
use mediatree_core::value;
use mediatree_core::{Error as CoreError, Reader};
use std::io::{Read, Seek};

/// `data` atom type code for text.
const TYPE_TEXT: u32 = 1;
/// `data` atom type code for a JPEG image.
const TYPE_JPEG: u32 = 13;
/// `data` atom type code for a PNG image.
const TYPE_PNG: u32 = 14;

/// Walk the children of an `ilst` box, folding `data` payloads into their
/// tags. Returns the tag nodes in file order.
pub(crate) fn parse_list<R: Read + Seek>(
    reader: &mut Reader<R>,
    tree: &mut Tree<BoxValue>,
    list: NodeId,
) -> Result<Vec<NodeId>> {
    let list_end = tree.node(list).end;
    let mut pos = tree.node(list).payload_offset;
    let mut prev: Option<NodeId> = None;
    let mut tags = Vec::new();

    // The loop ends when the next header's offset passes the list end.
    while pos <= list_end {
        reader.set_position(pos)?;
        let raw = RawBox::read(reader, list_end)?;
        if raw.end > list_end {
            return Err(BmffError::InvalidBoxSize {
                offset: raw.offset,
                size: raw.total_size,
            });
        }
        let node = attach_child(tree, list, prev, &raw);
        prev = Some(node);

        if u32::from_be_bytes(raw.fourcc) == boxes::EXTENDED {
            parse_extended_item(reader, tree, node, &raw)?;
        } else {
            parse_tag(reader, tree, node, &raw)?;
        }
        tags.push(node);
        pos = raw.end + 1;
    }
    Ok(tags)
}

fn attach_child(
    tree: &mut Tree<BoxValue>,
    parent: NodeId,
    prev: Option<NodeId>,
    raw: &RawBox,
) -> NodeId {
    tree.attach(
        parent,
        prev,
        NewNode {
            offset: raw.offset,
            size: raw.total_size,
            end: raw.end,
            payload_offset: raw.payload_offset,
            payload_size: raw.payload_size,
            id: raw.id(),
            payload: BoxValue::None,
        },
    )
}

/// Parse a standard tag: children are recorded, the `data` payload is folded
/// into the tag.
fn parse_tag<R: Read + Seek>(
    reader: &mut Reader<R>,
    tree: &mut Tree<BoxValue>,
    tag: NodeId,
    raw: &RawBox,
) -> Result<()> {
    let tag_type = u32::from_be_bytes(raw.fourcc);
    let mut pos = raw.payload_offset;
    let mut prev: Option<NodeId> = None;
    let mut folded: Option<MetaValue> = None;

    while pos <= raw.end {
        reader.set_position(pos)?;
        let child = RawBox::read(reader, raw.end)?;
        if child.end > raw.end {
            return Err(BmffError::InvalidBoxSize {
                offset: child.offset,
                size: child.total_size,
            });
        }
        let node = attach_child(tree, tag, prev, &child);
        prev = Some(node);

        if u32::from_be_bytes(child.fourcc) == boxes::DATA {
            folded = Some(read_data_atom(reader, tag_type, &child)?);
        }
        pos = child.end + 1;
    }

    if let Some(value) = folded {
        tree.node_mut(tag).payload = BoxValue::Metadata(value);
    }
    Ok(())
}

/// Parse a `----` item: a flat `mean`/`name`/`data` sequence.
fn parse_extended_item<R: Read + Seek>(
    reader: &mut Reader<R>,
    tree: &mut Tree<BoxValue>,
    item: NodeId,
    raw: &RawBox,
) -> Result<()> {
    let mut pos = raw.payload_offset;
    let mut prev: Option<NodeId> = None;
    let mut mean = String::new();
    let mut name = String::new();
    let mut data = None;

    while pos <= raw.end {
        reader.set_position(pos)?;
        let child = RawBox::read(reader, raw.end)?;
        if child.end > raw.end {
            return Err(BmffError::InvalidBoxSize {
                offset: child.offset,
                size: child.total_size,
            });
        }
        let node = attach_child(tree, item, prev, &child);
        prev = Some(node);

        match u32::from_be_bytes(child.fourcc) {
            // mean and name carry a version/flags word, then the string.
            boxes::MEAN => {
                mean = read_prefixed_string(reader, &child)?;
                tree.node_mut(node).payload = BoxValue::MetaString(mean.clone());
            }
            boxes::NAME => {
                name = read_prefixed_string(reader, &child)?;
                tree.node_mut(node).payload = BoxValue::MetaString(name.clone());
            }
            boxes::DATA => {
                data = Some(read_data_atom(reader, boxes::EXTENDED, &child)?);
            }
            _ => {}
        }
        pos = child.end + 1;
    }

    tree.node_mut(item).payload = BoxValue::Extended(ExtendedMeta {
        mean,
        name,
        value: data.unwrap_or(MetaValue::Binary(Vec::new())),
    });
    Ok(())
}

fn read_prefixed_string<R: Read + Seek>(reader: &mut Reader<R>, raw: &RawBox) -> Result<String> {
    if raw.payload_size < 4 {
        return Err(BmffError::InvalidBoxSize {
            offset: raw.offset,
            size: raw.total_size,
        });
    }
    reader.set_position(raw.payload_offset + 4)?;
    let data = read_exact(reader, raw.payload_size - 4, raw.end)?;
    value::read_printable(&data).map_err(BmffError::Core)
}

/// Read a `data` atom payload — `(type, locale, value)` — and fold the value
/// per the owning tag.
fn read_data_atom<R: Read + Seek>(
    reader: &mut Reader<R>,
    tag_type: u32,
    raw: &RawBox,
) -> Result<MetaValue> {
    if raw.payload_size < 8 {
        return Err(BmffError::InvalidBoxSize {
            offset: raw.offset,
            size: raw.total_size,
        });
    }
    reader.set_position(raw.payload_offset)?;
    let type_code = reader.read_u32_be()?;
    let _locale = reader.read_u32_be()?;
    let bytes = read_exact(reader, raw.payload_size - 8, raw.end)?;

    let value = match tag_type {
        boxes::TRKN if bytes.len() >= 6 => MetaValue::Track {
            current: u16::from_be_bytes([bytes[2], bytes[3]]),
            total: u16::from_be_bytes([bytes[4], bytes[5]]),
        },
        boxes::DISK if bytes.len() >= 6 => MetaValue::Disk {
            current: u16::from_be_bytes([bytes[2], bytes[3]]),
            total: u16::from_be_bytes([bytes[4], bytes[5]]),
        },
        _ => match type_code {
            TYPE_TEXT => MetaValue::Text(value::read_printable(&bytes).map_err(BmffError::Core)?),
            TYPE_JPEG => MetaValue::Jpeg(bytes),
            TYPE_PNG => MetaValue::Png(bytes),
            // Type 0 and anything unrecognised stays opaque.
            _ => MetaValue::Binary(bytes),
        },
    };
    Ok(value)
}

fn read_exact<R: Read + Seek>(reader: &mut Reader<R>, len: u64, end: u64) -> Result<Vec<u8>> {
    let data = reader.read_vec(len)?;
    if (data.len() as u64) < len {
        return Err(CoreError::FileEndedEarly { offset: end }.into());
    }
    Ok(data)
}
