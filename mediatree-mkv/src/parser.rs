//! EBML stream parsing: header engine, body engines and the Matroska walk.
//!
//! A stream is a sequence of documents, each an `EBML` header element
//! followed by a body. The header engine validates the RFC 8794 fields and
//! selects a body engine by DocType: Matroska and WebM bodies are walked
//! with the schema in [`crate::schema`], anything else gets offset-only
//! nodes.

use crate::crc;
use crate::ebml::{Document, ElementValue, TrackKind};
use crate::error::{EbmlError, Result};
use crate::schema::{self, Disposition, ElementKind};
use crate::vint;
use mediatree_core::tree::{NewNode, NodeId, Tree};
use mediatree_core::{value, Error as CoreError, Reader, Uuid};
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, trace};

/// Flags controlling an EBML parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct EbmlOptions {
    /// Treat `Cluster` elements as opaque skipped regions: offsets are
    /// retained, contents are not traversed.
    pub skip_clusters: bool,
    /// Return from `parse` as soon as the cursor is one byte past the end of
    /// a completed cluster, so a caller can walk clusters incrementally.
    pub return_after_cluster: bool,
}

/// What a `parse` call ran up against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// The whole stream has been parsed.
    Complete,
    /// Stopped just past a completed cluster; call `parse` again to resume.
    ClusterBoundary,
}

/// Synthetic ID of the tree root covering the whole stream.
pub const STREAM_ROOT_ID: u64 = 0;

struct RawHeader {
    offset: u64,
    id: u64,
    total_size: u64,
    payload_offset: u64,
    payload_size: u64,
    end: u64,
}

#[derive(Debug, Clone, Copy)]
struct WalkState {
    pos: u64,
    last: NodeId,
    doc: usize,
    cluster: Option<NodeId>,
    in_body: bool,
}

/// An EBML stream: the reader, the parse tree and the ordered document list.
#[derive(Debug)]
pub struct EbmlFile<R> {
    reader: Reader<R>,
    tree: Tree<ElementValue>,
    documents: Vec<Document>,
    walk: Option<WalkState>,
    done: bool,
}

/// Check for the `EBML` element signature at the start of a buffer.
pub fn is_ebml_signature(data: &[u8]) -> bool {
    data.len() >= 4 && data[0..4] == [0x1A, 0x45, 0xDF, 0xA3]
}

impl EbmlFile<std::fs::File> {
    /// Open a file from a path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EbmlError::Core(CoreError::FileNotFound(path.display().to_string()))
            } else {
                e.into()
            }
        })?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> EbmlFile<R> {
    /// Adopt an already-open byte source.
    pub fn from_reader(inner: R) -> Result<Self> {
        let reader = Reader::new(inner)?;
        if reader.is_empty() {
            return Err(CoreError::FileEmpty.into());
        }
        let tree = Tree::with_root(reader.len(), STREAM_ROOT_ID, ElementValue::None);
        Ok(Self {
            reader,
            tree,
            documents: Vec::new(),
            walk: None,
            done: false,
        })
    }

    /// The parse tree.
    pub fn tree(&self) -> &Tree<ElementValue> {
        &self.tree
    }

    /// The documents discovered so far, in stream order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Total stream length in bytes.
    pub fn len(&self) -> u64 {
        self.reader.len()
    }

    /// Whether the stream is zero bytes long. `from_reader` rejects this.
    pub fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }

    /// Consume the file, returning the underlying byte source.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    /// Depth-first search for every element with the given ID.
    pub fn find_elements(&self, id: u64) -> Vec<NodeId> {
        self.tree.find_by_id(id)
    }

    /// Resolve a compound path of element names (e.g.
    /// `["Segment", "Info", "Title"]`) to the terminal element's value.
    pub fn value_at_path(&self, path: &[&str]) -> Option<&ElementValue> {
        self.tree.value_at_path(self.tree.root(), path, |node| {
            schema::element_name(node.id)
                .map(str::to_owned)
                .unwrap_or_else(|| format!("0x{:X}", node.id))
        })
    }

    /// Parse the stream, or resume a parse that stopped at a cluster
    /// boundary. Calling again after completion is a no-op.
    pub fn parse(&mut self, options: &EbmlOptions) -> Result<ParseStatus> {
        if self.done {
            return Ok(ParseStatus::Complete);
        }
        let mut state = match self.walk.take() {
            Some(state) => state,
            None => WalkState {
                pos: 0,
                last: self.tree.root(),
                doc: 0,
                cluster: None,
                in_body: false,
            },
        };

        loop {
            if !state.in_body {
                if state.pos >= self.reader.len() {
                    self.done = true;
                    return Ok(ParseStatus::Complete);
                }
                self.parse_header(&mut state)?;
            }
            match self.walk_body(&mut state, options)? {
                BodyEvent::NewDocument => {
                    state.in_body = false;
                }
                BodyEvent::ClusterBoundary => {
                    self.walk = Some(state);
                    return Ok(ParseStatus::ClusterBoundary);
                }
                BodyEvent::EndOfStream => {
                    self.done = true;
                    return Ok(ParseStatus::Complete);
                }
            }
        }
    }

    fn read_element_header(&mut self, max_id: u64, max_size: u64) -> Result<RawHeader> {
        let offset = self.reader.position()?;
        let (id, id_width) = vint::read_element_id(&mut self.reader)?;
        if id_width as u64 > max_id {
            return Err(EbmlError::VintOutOfRange { offset });
        }
        let size_offset = self.reader.position()?;
        let (payload_size, size_width) = vint::read_vint(&mut self.reader)?;
        if size_width as u64 > max_size {
            return Err(EbmlError::VintOutOfRange {
                offset: size_offset,
            });
        }
        let header_len = (id_width + size_width) as u64;
        let payload_offset = offset + header_len;
        Ok(RawHeader {
            offset,
            id,
            total_size: header_len + payload_size,
            payload_offset,
            payload_size,
            end: payload_offset + payload_size - 1,
        })
    }

    fn read_payload(&mut self, header: &RawHeader) -> Result<Vec<u8>> {
        self.reader.set_position(header.payload_offset)?;
        let data = self.reader.read_vec(header.payload_size)?;
        if (data.len() as u64) < header.payload_size {
            return Err(CoreError::FileEndedEarly { offset: header.end }.into());
        }
        Ok(data)
    }

    fn attach(&mut self, last: NodeId, header: &RawHeader) -> (NodeId, NodeId) {
        let (parent, preceding) = self.tree.find_attach_point(last, header.offset);
        let node = self.tree.attach(
            parent,
            preceding,
            NewNode {
                offset: header.offset,
                size: header.total_size,
                end: header.end,
                payload_offset: header.payload_offset,
                payload_size: header.payload_size,
                id: header.id,
                payload: ElementValue::None,
            },
        );
        (node, parent)
    }

    /// Parse one `EBML` header element at `state.pos`, appending a document.
    fn parse_header(&mut self, state: &mut WalkState) -> Result<()> {
        let start = state.pos;
        self.reader.set_position(start)?;
        let header = match self.read_element_header(4, 8) {
            Ok(h) => h,
            Err(EbmlError::VintAllZeroes { .. })
            | Err(EbmlError::VintAllOnes { .. })
            | Err(EbmlError::VintOutOfRange { .. }) => {
                return Err(EbmlError::HeaderMissingOrCorrupt { offset: start });
            }
            Err(e) => return Err(e),
        };
        if header.id != schema::EBML {
            return Err(EbmlError::HeaderMissingOrCorrupt { offset: start });
        }
        if header.end >= self.reader.len() {
            return Err(CoreError::FileEndedEarly { offset: header.end }.into());
        }
        trace!(offset = start, end = header.end, "EBML header element");

        let (head_node, _) = self.attach(state.last, &header);
        let head_end = header.end;
        let mut doc = Document::new(head_node);
        let mut crc_declared: Option<(NodeId, u32)> = None;

        let mut pos = header.payload_offset;
        let mut last = head_node;
        while pos <= head_end {
            self.reader.set_position(pos)?;
            let child = self.read_element_header(doc.max_id_length, doc.max_size_length)?;
            if child.end > head_end {
                return Err(EbmlError::HeaderMissingOrCorrupt { offset: child.offset });
            }
            let (node, parent) = self.attach(last, &child);
            last = node;

            let mut descend = false;
            match child.id {
                schema::EBML => {
                    return Err(EbmlError::HeaderDuplicated {
                        offset: child.offset,
                    });
                }
                schema::EBML_VERSION => {
                    let v = self.read_fixed_uint(&child)?;
                    if v != 1 {
                        return Err(EbmlError::UnsupportedVersion { version: v });
                    }
                    doc.version = v;
                    self.intern(node, ElementValue::Unsigned(v));
                }
                schema::EBML_READ_VERSION => {
                    let v = self.read_fixed_uint(&child)?;
                    if v > 1 {
                        return Err(EbmlError::UnsupportedVersion { version: v });
                    }
                    doc.read_version = v;
                    self.intern(node, ElementValue::Unsigned(v));
                }
                schema::EBML_MAX_ID_LENGTH => {
                    let v = self.read_fixed_uint(&child)?;
                    if !(4..=8).contains(&v) {
                        return Err(EbmlError::MaxIdLengthInvalid { value: v });
                    }
                    doc.max_id_length = v;
                    self.intern(node, ElementValue::Unsigned(v));
                }
                schema::EBML_MAX_SIZE_LENGTH => {
                    let v = self.read_fixed_uint(&child)?;
                    if !(1..=8).contains(&v) {
                        return Err(EbmlError::MaxSizeLengthInvalid { value: v });
                    }
                    doc.max_size_length = v;
                    self.intern(node, ElementValue::Unsigned(v));
                }
                schema::DOC_TYPE => {
                    if child.payload_size > 1024 {
                        return Err(EbmlError::DocTypeTooLong {
                            len: child.payload_size,
                        });
                    }
                    let data = self.read_payload(&child)?;
                    let text = value::read_printable(&data).map_err(EbmlError::Core)?;
                    doc.doc_type = text.clone();
                    self.intern(node, ElementValue::String(text));
                }
                schema::DOC_TYPE_VERSION => {
                    let v = self.read_fixed_uint(&child)?;
                    if v < 1 {
                        return Err(EbmlError::DocTypeVersionInvalid { version: v });
                    }
                    doc.doc_type_version = v;
                    self.intern(node, ElementValue::Unsigned(v));
                }
                schema::DOC_TYPE_READ_VERSION => {
                    let v = self.read_fixed_uint(&child)?;
                    if v < 1 {
                        return Err(EbmlError::DocTypeReadVersionInvalid {
                            read_version: v,
                            version: doc.doc_type_version,
                        });
                    }
                    doc.doc_type_read_version = v;
                    self.intern(node, ElementValue::Unsigned(v));
                }
                schema::DOC_TYPE_EXTENSION => {
                    descend = true;
                }
                schema::DOC_TYPE_EXTENSION_NAME => {
                    let data = self.read_payload(&child)?;
                    let text = value::read_printable(&data).map_err(EbmlError::Core)?;
                    self.intern(node, ElementValue::String(text));
                }
                schema::DOC_TYPE_EXTENSION_VERSION => {
                    let data = self.read_payload(&child)?;
                    let v = value::read_unsigned(&data).map_err(EbmlError::Core)?;
                    self.intern(node, ElementValue::Unsigned(v));
                }
                schema::CRC32 => {
                    let declared = self.read_crc_value(&child)?;
                    self.intern(node, ElementValue::Unsigned(declared as u64));
                    if self.tree.node(parent).first_child() == Some(node) {
                        crc_declared = Some((node, declared));
                    }
                }
                // Void and anything unrecognised: skip the payload.
                _ => {}
            }

            pos = if descend {
                child.payload_offset
            } else {
                child.end + 1
            };
        }
        if pos != head_end + 1 {
            return Err(EbmlError::HeaderMissingOrCorrupt { offset: start });
        }

        if doc.doc_type.is_empty() {
            return Err(EbmlError::DocTypeEmpty);
        }
        if doc.doc_type_read_version > doc.doc_type_version {
            return Err(EbmlError::DocTypeReadVersionInvalid {
                read_version: doc.doc_type_read_version,
                version: doc.doc_type_version,
            });
        }

        if let Some((crc_node, declared)) = crc_declared {
            let covered_start = self.tree.node(crc_node).end + 1;
            crc::verify(&mut self.reader, declared, covered_start, head_end)?;
            debug!(start = covered_start, end = head_end, "header CRC verified");
        }

        debug!(
            doc_type = doc.doc_type.as_str(),
            version = doc.doc_type_version,
            "parsed EBML header"
        );

        state.doc = self.documents.len();
        self.documents.push(doc);
        state.pos = head_end + 1;
        state.last = head_node;
        state.in_body = true;
        Ok(())
    }

    fn read_fixed_uint(&mut self, header: &RawHeader) -> Result<u64> {
        if header.payload_size != 1 {
            return Err(EbmlError::UnexpectedFieldLength {
                id: header.id,
                len: header.payload_size,
            });
        }
        let data = self.read_payload(header)?;
        Ok(data[0] as u64)
    }

    fn read_crc_value(&mut self, header: &RawHeader) -> Result<u32> {
        if header.payload_size != 4 {
            return Err(EbmlError::InvalidCrcSize {
                len: header.payload_size,
            });
        }
        let data = self.read_payload(header)?;
        // Stored little-endian, unlike every other EBML integer.
        Ok(u32::from_le_bytes(data.try_into().unwrap()))
    }

    fn intern(&mut self, node: NodeId, value: ElementValue) {
        self.tree.node_mut(node).payload = value;
    }

    /// Walk body elements for the current document until the stream ends, a
    /// new document begins, or a cluster boundary is reached.
    fn walk_body(&mut self, state: &mut WalkState, options: &EbmlOptions) -> Result<BodyEvent> {
        let file_size = self.reader.len();
        let matroska = self.documents[state.doc].is_matroska();

        loop {
            if state.pos >= file_size {
                return Ok(BodyEvent::EndOfStream);
            }
            self.reader.set_position(state.pos)?;
            let (attach_parent, _) = self.tree.find_attach_point(state.last, state.pos);
            let top_level = attach_parent == self.tree.root();

            let header = match self.read_element_header(
                self.documents[state.doc].max_id_length,
                self.documents[state.doc].max_size_length,
            ) {
                Ok(h) => h,
                // A clean end of file between top-level elements is a normal
                // termination, not a truncation.
                Err(EbmlError::Core(CoreError::FileEndedEarly { .. })) if top_level => {
                    return Ok(BodyEvent::EndOfStream);
                }
                Err(e) => return Err(e),
            };

            // Another EBML header at stream level starts a new document.
            if top_level && header.id == schema::EBML {
                return Ok(BodyEvent::NewDocument);
            }

            if header.end >= file_size {
                return Err(CoreError::FileEndedEarly { offset: header.end }.into());
            }
            if !self.tree.node(attach_parent).synthetic
                && header.end > self.tree.node(attach_parent).end
            {
                return Err(CoreError::FileEndedEarly {
                    offset: self.tree.node(attach_parent).end,
                }
                .into());
            }

            let first_body_element =
                top_level && self.documents[state.doc].body.is_none();
            if first_body_element && matroska && header.id != schema::SEGMENT {
                return Err(EbmlError::BodyRootWrongId { id: header.id });
            }

            let (node, parent) = self.attach(state.last, &header);
            if first_body_element {
                self.documents[state.doc].body = Some(node);
            }
            state.last = node;
            trace!(
                "element 0x{:X} at offset {} payload {}",
                header.id,
                header.offset,
                header.payload_size
            );

            state.pos = if matroska {
                self.dispatch_matroska(state, options, &header, node, parent)?
            } else {
                // Generic body: offset-only nodes, with global CRC elements
                // still verified.
                if header.id == schema::CRC32 && header.payload_size == 4 {
                    let declared = self.read_crc_value(&header)?;
                    self.intern(node, ElementValue::Unsigned(declared as u64));
                    if self.tree.node(parent).first_child() == Some(node) {
                        let covered = self.tree.node(parent).end;
                        crc::verify(&mut self.reader, declared, header.end + 1, covered)?;
                    }
                }
                header.end + 1
            };

            if let Some(cluster) = state.cluster {
                if state.pos > self.tree.node(cluster).end {
                    state.cluster = None;
                    if options.return_after_cluster {
                        debug!(pos = state.pos, "cluster boundary");
                        return Ok(BodyEvent::ClusterBoundary);
                    }
                }
            }
        }
    }

    /// Apply the schema row for one Matroska element; returns the next
    /// cursor position.
    fn dispatch_matroska(
        &mut self,
        state: &mut WalkState,
        options: &EbmlOptions,
        header: &RawHeader,
        node: NodeId,
        parent: NodeId,
    ) -> Result<u64> {
        let info = match schema::element_info(header.id) {
            Some(info) => info,
            // Unknown IDs are skipped with their offsets retained.
            None => return Ok(header.end + 1),
        };
        if info.disposition == Disposition::Skip {
            return Ok(header.end + 1);
        }

        if info.kind == ElementKind::Master {
            if header.id == schema::CLUSTER {
                state.cluster = Some(node);
                if options.skip_clusters {
                    debug!(offset = header.offset, "skipping cluster");
                    return Ok(header.end + 1);
                }
            }
            // Children are discovered by the main loop.
            return Ok(header.payload_offset);
        }

        let value = match info.kind {
            ElementKind::Unsigned if header.id == schema::SEEK_POSITION => {
                self.rebase_seek_position(header, node, parent)?
            }
            ElementKind::Unsigned => {
                let data = self.read_payload(header)?;
                ElementValue::Unsigned(value::read_unsigned(&data).map_err(EbmlError::Core)?)
            }
            ElementKind::Signed => {
                let data = self.read_payload(header)?;
                ElementValue::Signed(value::read_signed(&data).map_err(EbmlError::Core)?)
            }
            ElementKind::Float => {
                let data = self.read_payload(header)?;
                ElementValue::Float(value::read_float(&data).map_err(EbmlError::Core)?)
            }
            ElementKind::String => {
                let data = self.read_payload(header)?;
                ElementValue::String(value::read_printable(&data).map_err(EbmlError::Core)?)
            }
            ElementKind::Utf8 => {
                let data = self.read_payload(header)?;
                ElementValue::Utf8(value::read_utf8(&data))
            }
            ElementKind::Date => {
                let data = self.read_payload(header)?;
                let raw = value::read_signed(&data).map_err(EbmlError::Core)?;
                ElementValue::Date(value::matroska_date_to_unix_ns(raw))
            }
            ElementKind::Uuid => {
                if header.payload_size != 16 {
                    return Err(EbmlError::SegmentUidInvalidLength {
                        len: header.payload_size,
                    });
                }
                let data = self.read_payload(header)?;
                ElementValue::Uuid(Uuid::from_slice(&data).map_err(EbmlError::Core)?)
            }
            ElementKind::TrackType => {
                if header.payload_size != 1 {
                    return Err(EbmlError::TrackTypeInvalidLength {
                        len: header.payload_size,
                    });
                }
                let data = self.read_payload(header)?;
                match TrackKind::from_u8(data[0]) {
                    Some(kind) => ElementValue::TrackType(kind),
                    None => ElementValue::Unsigned(data[0] as u64),
                }
            }
            ElementKind::Binary if header.id == schema::CRC32 => {
                let declared = self.read_crc_value(header)?;
                if self.tree.node(parent).first_child() == Some(node) {
                    let covered = self.tree.node(parent).end;
                    crc::verify(&mut self.reader, declared, header.end + 1, covered)?;
                    debug!(start = header.end + 1, end = covered, "CRC verified");
                }
                ElementValue::Unsigned(declared as u64)
            }
            ElementKind::Binary => {
                let data = self.read_payload(header)?;
                ElementValue::Binary(data)
            }
            ElementKind::Master => unreachable!("handled above"),
        };
        self.intern(node, value);
        Ok(header.end + 1)
    }

    /// SeekPosition values are byte offsets relative to the start of the
    /// enclosing SeekHead; rebase onto the file.
    fn rebase_seek_position(
        &mut self,
        header: &RawHeader,
        _node: NodeId,
        parent: NodeId,
    ) -> Result<ElementValue> {
        let seek = self.tree.node(parent);
        if seek.id != schema::SEEK {
            return Err(EbmlError::BrokenSeekPosition {
                offset: header.offset,
            });
        }
        let seek_head = self.tree.node(seek.parent());
        if seek_head.id != schema::SEEK_HEAD {
            return Err(EbmlError::BrokenSeekPosition {
                offset: header.offset,
            });
        }
        let base = seek_head.offset;
        let data = self.read_payload(header)?;
        let relative = value::read_unsigned(&data).map_err(EbmlError::Core)?;
        Ok(ElementValue::Unsigned(base + relative))
    }

    /// Resolve every `SeekHead` entry to a `(target ID, absolute offset)`
    /// pair. Offsets were already rebased during the parse.
    pub fn seek_entries(&self) -> Vec<(u64, u64)> {
        let mut entries = Vec::new();
        for head in self.tree.find_by_id(schema::SEEK_HEAD) {
            for seek in self.tree.children(head) {
                if self.tree.node(seek).id != schema::SEEK {
                    continue;
                }
                let mut target = None;
                let mut position = None;
                for child in self.tree.children(seek) {
                    let child = self.tree.node(child);
                    match (child.id, &child.payload) {
                        (schema::SEEK_ID, ElementValue::Binary(raw)) => {
                            target = value::read_unsigned(raw).ok();
                        }
                        (schema::SEEK_POSITION, ElementValue::Unsigned(pos)) => {
                            position = Some(*pos);
                        }
                        _ => {}
                    }
                }
                if let (Some(target), Some(position)) = (target, position) {
                    entries.push((target, position));
                }
            }
        }
        entries
    }
}

enum BodyEvent {
    NewDocument,
    ClusterBoundary,
    EndOfStream,
}
