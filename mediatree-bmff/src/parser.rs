//! The BMFF tree engine: box header decode, synthetic `ftyp` injection,
//! parent discovery by byte range, and per-type dispatch.

use crate::boxes::{self, BoxValue, FileType, Handler, MediaHeader, MovieHeader, TrackHeader};
use crate::error::{BmffError, Result};
use crate::itunes;
use mediatree_core::tree::{NewNode, NodeId, Tree};
use mediatree_core::{Error as CoreError, FourCc, Reader, Uuid};
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, trace};

/// Synthetic ID of the tree root covering the whole file.
pub const FILE_ROOT_ID: u64 = 0;

/// Flags controlling a BMFF parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct BmffOptions {
    /// Parse the iTunes metadata list under `moov.udta.meta.ilst` instead of
    /// skipping it.
    pub parse_metadata: bool,
}

/// File-level references captured as side effects of dispatch.
#[derive(Debug, Default)]
pub struct Summary {
    /// The `ftyp` box, real or synthesised.
    pub ftyp: Option<NodeId>,
    /// The first `moov` box.
    pub moov: Option<NodeId>,
    /// The first `mvhd` box.
    pub mvhd: Option<NodeId>,
    /// The first `mdat` box.
    pub mdat: Option<NodeId>,
    /// Movie time scale from `mvhd`.
    pub time_scale: u32,
    /// iTunes tag nodes, in file order.
    pub itunes_metadata: Vec<NodeId>,
}

pub(crate) struct RawBox {
    pub offset: u64,
    pub fourcc: [u8; 4],
    pub total_size: u64,
    pub payload_offset: u64,
    pub payload_size: u64,
    pub end: u64,
    pub uuid: Option<Uuid>,
}

impl RawBox {
    /// Decode one box header at the reader's position. `size == 1` pulls a
    /// 64-bit extended size, `size == 0` runs to `stream_end`, and a `uuid`
    /// type pulls a 16-byte extended type that precedes the payload.
    pub(crate) fn read<R: Read + Seek>(reader: &mut Reader<R>, stream_end: u64) -> Result<Self> {
        let offset = reader.position()?;
        let size32 = reader.read_u32_be()?;
        let fourcc = reader.read_four()?;

        let (total_size, mut header_len) = match size32 {
            1 => (reader.read_u64_be()?, 16u64),
            0 => (stream_end + 1 - offset, 8u64),
            n => (n as u64, 8u64),
        };

        let uuid = if &fourcc == b"uuid" {
            header_len += 16;
            Some(Uuid::from_slice(&reader.read_sixteen()?).map_err(BmffError::Core)?)
        } else {
            None
        };

        if total_size < header_len {
            return Err(BmffError::InvalidBoxSize {
                offset,
                size: total_size,
            });
        }

        Ok(Self {
            offset,
            fourcc,
            total_size,
            payload_offset: offset + header_len,
            payload_size: total_size - header_len,
            end: offset + total_size - 1,
            uuid,
        })
    }

    pub(crate) fn id(&self) -> u64 {
        u32::from_be_bytes(self.fourcc) as u64
    }
}

/// A BMFF file: the reader, the parse tree and the captured summary.
#[derive(Debug)]
pub struct BmffFile<R> {
    reader: Reader<R>,
    tree: Tree<BoxValue>,
    summary: Summary,
    parsed: bool,
}

/// Whether a buffer plausibly starts with a BMFF box header.
pub fn is_bmff_signature(data: &[u8]) -> bool {
    data.len() >= 8
        && matches!(
            &data[4..8],
            b"ftyp" | b"styp" | b"moov" | b"moof" | b"mdat" | b"free" | b"skip" | b"wide"
        )
}

impl BmffFile<std::fs::File> {
    /// Open a file from a path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BmffError::Core(CoreError::FileNotFound(path.display().to_string()))
            } else {
                e.into()
            }
        })?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> BmffFile<R> {
    /// Adopt an already-open byte source.
    pub fn from_reader(inner: R) -> Result<Self> {
        let reader = Reader::new(inner)?;
        if reader.is_empty() {
            return Err(CoreError::FileEmpty.into());
        }
        let tree = Tree::with_root(reader.len(), FILE_ROOT_ID, BoxValue::None);
        Ok(Self {
            reader,
            tree,
            summary: Summary::default(),
            parsed: false,
        })
    }

    /// The parse tree.
    pub fn tree(&self) -> &Tree<BoxValue> {
        &self.tree
    }

    /// File-level references captured during the parse.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Total file length in bytes.
    pub fn len(&self) -> u64 {
        self.reader.len()
    }

    /// Whether the file is zero bytes long. `from_reader` rejects this.
    pub fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }

    /// Consume the file, returning the underlying byte source.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    /// Depth-first search for every box of the given type.
    pub fn find_boxes(&self, fourcc: &[u8; 4]) -> Vec<NodeId> {
        self.tree.find_by_id(u32::from_be_bytes(*fourcc) as u64)
    }

    /// Resolve a compound path of box names (e.g. `["moov", "mvhd"]`) to the
    /// terminal box's value.
    pub fn value_at_path(&self, path: &[&str]) -> Option<&BoxValue> {
        self.tree.value_at_path(self.tree.root(), path, |node| {
            FourCc::from_u32(node.id as u32).to_string()
        })
    }

    /// Parse the file. Calling again after completion is a no-op.
    pub fn parse(&mut self, options: &BmffOptions) -> Result<()> {
        if self.parsed {
            return Ok(());
        }
        let file_size = self.reader.len();
        let root = self.tree.root();
        let mut last = root;
        // After a synthesised ftyp, the first real box is the root's second
        // child; range-based discovery cannot see a zero-size node.
        let mut pending_sibling: Option<NodeId> = None;

        let first_type = if file_size >= 8 {
            self.reader.set_position(4)?;
            self.reader.read_four()?
        } else {
            [0u8; 4]
        };
        if &first_type != b"ftyp" {
            let node = self.tree.attach(
                root,
                None,
                NewNode {
                    offset: 0,
                    size: 0,
                    end: 0,
                    payload_offset: 0,
                    payload_size: 0,
                    id: boxes::FTYP as u64,
                    payload: BoxValue::FileType(FileType::default_mp41()),
                },
            );
            self.tree.node_mut(node).synthetic = true;
            self.summary.ftyp = Some(node);
            pending_sibling = Some(node);
            debug!("first box is not ftyp, synthesised the mp41 default");
        }

        let mut pos = 0u64;
        while pos < file_size {
            self.reader.set_position(pos)?;
            let raw = RawBox::read(&mut self.reader, file_size - 1)?;
            if raw.end > file_size - 1 {
                return Err(CoreError::FileEndedEarly { offset: raw.end }.into());
            }

            let (parent, preceding) = match pending_sibling.take() {
                Some(prev) => (root, Some(prev)),
                None => self.tree.find_attach_point(last, pos),
            };
            if !self.tree.node(parent).synthetic && raw.end > self.tree.node(parent).end {
                return Err(BmffError::InvalidBoxSize {
                    offset: raw.offset,
                    size: raw.total_size,
                });
            }

            let node = self.tree.attach(
                parent,
                preceding,
                NewNode {
                    offset: raw.offset,
                    size: raw.total_size,
                    end: raw.end,
                    payload_offset: raw.payload_offset,
                    payload_size: raw.payload_size,
                    id: raw.id(),
                    payload: BoxValue::None,
                },
            );
            if let Some(uuid) = raw.uuid {
                self.tree.node_mut(node).uuid = Some(uuid);
            }
            last = node;
            trace!(
                "box {} at offset {} size {}",
                FourCc(raw.fourcc),
                raw.offset,
                raw.total_size
            );

            pos = self.dispatch(options, &raw, node, parent)?;
        }

        self.parsed = true;
        Ok(())
    }

    fn read_payload(&mut self, raw: &RawBox) -> Result<Vec<u8>> {
        self.reader.set_position(raw.payload_offset)?;
        let data = self.reader.read_vec(raw.payload_size)?;
        if (data.len() as u64) < raw.payload_size {
            return Err(CoreError::FileEndedEarly { offset: raw.end }.into());
        }
        Ok(data)
    }

    /// Apply the type table to one box; returns the next cursor position.
    fn dispatch(
        &mut self,
        options: &BmffOptions,
        raw: &RawBox,
        node: NodeId,
        parent: NodeId,
    ) -> Result<u64> {
        let fourcc = u32::from_be_bytes(raw.fourcc);
        let parent_id = self.tree.node(parent).id as u32;

        match fourcc {
            boxes::FTYP => {
                if self.summary.ftyp.is_some() || parent != self.tree.root() {
                    return Err(BmffError::FtypDuplicated { offset: raw.offset });
                }
                let data = self.read_payload(raw)?;
                let ftyp = FileType::parse(&data)?;
                self.tree.node_mut(node).payload = BoxValue::FileType(ftyp);
                self.summary.ftyp = Some(node);
                Ok(raw.end + 1)
            }

            _ if boxes::is_container(fourcc) => {
                if fourcc == boxes::UDTA
                    && !matches!(
                        parent_id,
                        boxes::MOOV | boxes::MOOF | boxes::TRAK | boxes::TRAF
                    )
                {
                    return Err(BmffError::WrongFileFormat { offset: raw.offset });
                }
                if fourcc == boxes::MOOV && self.summary.moov.is_none() {
                    self.summary.moov = Some(node);
                }
                // Children are discovered by the main loop.
                Ok(raw.payload_offset)
            }

            boxes::MVHD => {
                let data = self.read_payload(raw)?;
                let header = MovieHeader::parse(&data)?;
                if self.summary.mvhd.is_none() {
                    self.summary.mvhd = Some(node);
                    self.summary.time_scale = header.time_scale;
                }
                self.tree.node_mut(node).payload = BoxValue::MovieHeader(header);
                Ok(raw.end + 1)
            }

            boxes::TKHD => {
                let data = self.read_payload(raw)?;
                let header = TrackHeader::parse(&data)?;
                self.tree.node_mut(node).payload = BoxValue::TrackHeader(header);
                Ok(raw.end + 1)
            }

            boxes::MDHD => {
                let data = self.read_payload(raw)?;
                let header = MediaHeader::parse(&data)?;
                self.tree.node_mut(node).payload = BoxValue::MediaHeader(header);
                Ok(raw.end + 1)
            }

            boxes::ELST => {
                let data = self.read_payload(raw)?;
                let entries = boxes::parse_edit_list(&data)?;
                self.tree.node_mut(node).payload = BoxValue::EditList(entries);
                Ok(raw.end + 1)
            }

            boxes::HDLR => {
                if !matches!(parent_id, boxes::MDIA | boxes::META) {
                    return Err(BmffError::HdlrUnexpectedParent { offset: raw.offset });
                }
                let data = self.read_payload(raw)?;
                let handler = Handler::parse(&data)?;
                self.tree.node_mut(node).payload = BoxValue::Handler(handler);
                Ok(raw.end + 1)
            }

            boxes::META => {
                // Versioned prefix, then an ordinary container.
                if raw.payload_size < 4 {
                    return Err(BmffError::InvalidBoxSize {
                        offset: raw.offset,
                        size: raw.total_size,
                    });
                }
                self.reader.set_position(raw.payload_offset)?;
                let word = self.reader.read_u32_be()?;
                self.tree.node_mut(node).payload = BoxValue::Meta {
                    version: (word >> 24) as u8,
                    flags: word & 0x00FF_FFFF,
                };
                Ok(raw.payload_offset + 4)
            }

            boxes::ILST => {
                if options.parse_metadata {
                    let tags = itunes::parse_list(&mut self.reader, &mut self.tree, node)?;
                    debug!("parsed {} iTunes metadata tags", tags.len());
                    self.summary.itunes_metadata.extend(tags);
                }
                Ok(raw.end + 1)
            }

            boxes::CHPL => {
                let data = self.read_payload(raw)?;
                let entries = boxes::parse_chapter_list(&data)?;
                self.tree.node_mut(node).payload = BoxValue::ChapterList(entries);
                Ok(raw.end + 1)
            }

            boxes::MDAT => {
                if self.summary.mdat.is_none() {
                    self.summary.mdat = Some(node);
                }
                Ok(raw.end + 1)
            }

            // free, skip, uuid and any unknown type: offsets retained,
            // bytes skipped.
            _ => Ok(raw.end + 1),
        }
    }
}
