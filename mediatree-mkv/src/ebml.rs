//! EBML document model and element payload values.

use mediatree_core::tree::NodeId;
use mediatree_core::Uuid;
use std::fmt;

/// One EBML document: the header element, the body element that follows it,
/// and the header-derived fields. A stream may carry several documents
/// back to back.
#[derive(Debug, Clone)]
pub struct Document {
    /// Node of the `EBML` header element.
    pub header: NodeId,
    /// Node of the body root element (`Segment` for Matroska), once parsed.
    pub body: Option<NodeId>,
    /// EBML version the document was written with.
    pub version: u64,
    /// Minimum EBML version required to read the document.
    pub read_version: u64,
    /// Maximum element ID width in bytes.
    pub max_id_length: u64,
    /// Maximum element size width in bytes.
    pub max_size_length: u64,
    /// Schema name for the body ("matroska", "webm", or anything else).
    pub doc_type: String,
    /// Schema version the body was written with.
    pub doc_type_version: u64,
    /// Minimum schema version required to read the body.
    pub doc_type_read_version: u64,
}

impl Document {
    /// A document seeded with the RFC 8794 defaults, attached to the given
    /// header node.
    pub fn new(header: NodeId) -> Self {
        Self {
            header,
            body: None,
            version: 1,
            read_version: 1,
            max_id_length: 4,
            max_size_length: 8,
            doc_type: String::new(),
            doc_type_version: 1,
            doc_type_read_version: 1,
        }
    }

    /// Whether the body is parsed with the Matroska schema.
    pub fn is_matroska(&self) -> bool {
        self.doc_type == "matroska" || self.doc_type == "webm"
    }
}

/// The Matroska track class carried by a `TrackType` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Picture content.
    Video = 1,
    /// Sound content.
    Audio = 2,
    /// Interleaved picture and sound.
    Complex = 3,
    /// Station logo overlay.
    Logo = 16,
    /// Timed text.
    Subtitle = 17,
    /// DVD-style button overlays.
    Buttons = 18,
    /// Control stream.
    Control = 32,
    /// Timed metadata.
    Metadata = 33,
}

impl TrackKind {
    /// Map the wire value onto the enumeration.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Video),
            2 => Some(Self::Audio),
            3 => Some(Self::Complex),
            16 => Some(Self::Logo),
            17 => Some(Self::Subtitle),
            18 => Some(Self::Buttons),
            32 => Some(Self::Control),
            33 => Some(Self::Metadata),
            _ => None,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Complex => "complex",
            Self::Logo => "logo",
            Self::Subtitle => "subtitle",
            Self::Buttons => "buttons",
            Self::Control => "control",
            Self::Metadata => "metadata",
        };
        f.write_str(name)
    }
}

/// The payload union interned into EBML tree nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    /// Masters, skipped payloads and unknown IDs carry no value.
    None,
    /// Unsigned integer payload.
    Unsigned(u64),
    /// Signed integer payload.
    Signed(i64),
    /// Float payload.
    Float(f64),
    /// Printable ASCII string.
    String(String),
    /// UTF-8 text.
    Utf8(String),
    /// Opaque bytes.
    Binary(Vec<u8>),
    /// RFC 4122 UUID.
    Uuid(Uuid),
    /// Nanoseconds since the Unix epoch, rebased from the Matroska epoch.
    Date(i64),
    /// Track class.
    TrackType(TrackKind),
}

impl ElementValue {
    /// Whether a value was interned at all.
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The string content, for ASCII and UTF-8 values alike.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Utf8(s) => Some(s),
            _ => None,
        }
    }

    /// The unsigned content, if this is an unsigned value.
    pub fn as_unsigned(&self) -> Option<u64> {
        match self {
            Self::Unsigned(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Unsigned(v) => write!(f, "{}", v),
            Self::Signed(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(s) | Self::Utf8(s) => write!(f, "{:?}", s),
            Self::Binary(b) => write!(f, "<{} bytes>", b.len()),
            Self::Uuid(u) => write!(f, "{}", u),
            Self::Date(ns) => write!(f, "{}ns since epoch", ns),
            Self::TrackType(t) => write!(f, "{}", t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_defaults() {
        let header = mediatree_core::Tree::with_root(1, 0, ()).root();
        let doc = Document::new(header);
        assert_eq!(doc.version, 1);
        assert_eq!(doc.read_version, 1);
        assert_eq!(doc.max_id_length, 4);
        assert_eq!(doc.max_size_length, 8);
        assert!(doc.doc_type.is_empty());
        assert!(!doc.is_matroska());
    }

    #[test]
    fn test_track_kind_mapping() {
        assert_eq!(TrackKind::from_u8(1), Some(TrackKind::Video));
        assert_eq!(TrackKind::from_u8(17), Some(TrackKind::Subtitle));
        assert_eq!(TrackKind::from_u8(33), Some(TrackKind::Metadata));
        assert_eq!(TrackKind::from_u8(4), None);
        assert_eq!(TrackKind::from_u8(0), None);
    }

    #[test]
    fn test_value_accessors() {
        assert!(ElementValue::Unsigned(5).is_some());
        assert!(!ElementValue::None.is_some());
        assert_eq!(
            ElementValue::String("S_TEXT/UTF8".into()).as_str(),
            Some("S_TEXT/UTF8")
        );
        assert_eq!(ElementValue::Unsigned(42).as_unsigned(), Some(42));
        assert_eq!(ElementValue::Signed(-1).as_unsigned(), None);
    }
}
