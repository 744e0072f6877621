//! ISO 14496-12 box types and their decoded payloads.

use crate::error::{BmffError, Result};
use mediatree_core::value::{self, Fixed16_16, Fixed8_8, IsoLanguage};
use mediatree_core::FourCc;
use std::fmt;

/// `ftyp` — file type and compatibility.
pub const FTYP: u32 = u32::from_be_bytes(*b"ftyp");
/// `moov` — movie container.
pub const MOOV: u32 = u32::from_be_bytes(*b"moov");
/// `trak` — track container.
pub const TRAK: u32 = u32::from_be_bytes(*b"trak");
/// `edts` — edit container.
pub const EDTS: u32 = u32::from_be_bytes(*b"edts");
/// `mdia` — media container.
pub const MDIA: u32 = u32::from_be_bytes(*b"mdia");
/// `minf` — media information container.
pub const MINF: u32 = u32::from_be_bytes(*b"minf");
/// `udta` — user data container.
pub const UDTA: u32 = u32::from_be_bytes(*b"udta");
/// `moof` — movie fragment container.
pub const MOOF: u32 = u32::from_be_bytes(*b"moof");
/// `traf` — track fragment container.
pub const TRAF: u32 = u32::from_be_bytes(*b"traf");
/// `meco` — additional metadata container.
pub const MECO: u32 = u32::from_be_bytes(*b"meco");
/// `mvhd` — movie header.
pub const MVHD: u32 = u32::from_be_bytes(*b"mvhd");
/// `tkhd` — track header.
pub const TKHD: u32 = u32::from_be_bytes(*b"tkhd");
/// `mdhd` — media header.
pub const MDHD: u32 = u32::from_be_bytes(*b"mdhd");
/// `elst` — edit list.
pub const ELST: u32 = u32::from_be_bytes(*b"elst");
/// `hdlr` — handler reference.
pub const HDLR: u32 = u32::from_be_bytes(*b"hdlr");
/// `meta` — metadata container with a versioned prefix.
pub const META: u32 = u32::from_be_bytes(*b"meta");
/// `ilst` — Apple iTunes metadata list.
pub const ILST: u32 = u32::from_be_bytes(*b"ilst");
/// `chpl` — Nero chapter list.
pub const CHPL: u32 = u32::from_be_bytes(*b"chpl");
/// `mdat` — media data.
pub const MDAT: u32 = u32::from_be_bytes(*b"mdat");
/// `free` — free space.
pub const FREE: u32 = u32::from_be_bytes(*b"free");
/// `skip` — free space.
pub const SKIP: u32 = u32::from_be_bytes(*b"skip");
/// `uuid` — box with a 16-byte extended type.
pub const UUID: u32 = u32::from_be_bytes(*b"uuid");
/// `data` — iTunes metadata value atom.
pub const DATA: u32 = u32::from_be_bytes(*b"data");
/// `mean` — iTunes extended metadata meaning atom.
pub const MEAN: u32 = u32::from_be_bytes(*b"mean");
/// `name` — iTunes extended metadata name atom.
pub const NAME: u32 = u32::from_be_bytes(*b"name");
/// `----` — iTunes extended metadata item.
pub const EXTENDED: u32 = u32::from_be_bytes(*b"----");
/// `trkn` — iTunes track number tag.
pub const TRKN: u32 = u32::from_be_bytes(*b"trkn");
/// `disk` — iTunes disk number tag.
pub const DISK: u32 = u32::from_be_bytes(*b"disk");
/// `covr` — iTunes cover art tag.
pub const COVR: u32 = u32::from_be_bytes(*b"covr");

fn be_u16(data: &[u8], at: usize) -> u16 {
    u16::from_be_bytes(data[at..at + 2].try_into().unwrap())
}

fn be_u32(data: &[u8], at: usize) -> u32 {
    u32::from_be_bytes(data[at..at + 4].try_into().unwrap())
}

fn be_u64(data: &[u8], at: usize) -> u64 {
    u64::from_be_bytes(data[at..at + 8].try_into().unwrap())
}

/// `ftyp` payload: brand and compatibility list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileType {
    /// Best-use brand.
    pub major_brand: FourCc,
    /// Minor version, four binary-coded decimal digit pairs.
    pub minor_version: u32,
    /// Brands the file is compatible with.
    pub compatible_brands: Vec<FourCc>,
}

impl FileType {
    /// The ISO 14496-12 §4.3 default assumed when a file has no `ftyp`.
    pub fn default_mp41() -> Self {
        Self {
            major_brand: FourCc(*b"mp41"),
            minor_version: 0,
            compatible_brands: vec![FourCc(*b"mp41")],
        }
    }

    /// Decode an `ftyp` payload. The payload must hold the 8-byte prefix and
    /// whole brands.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 8 || data.len() % 4 != 0 {
            return Err(BmffError::FtypInvalidSize {
                size: data.len() as u64,
            });
        }
        let major_brand = FourCc(data[0..4].try_into().unwrap());
        let minor_version = be_u32(data, 4);
        let compatible_brands = data[8..]
            .chunks_exact(4)
            .map(|c| FourCc(c.try_into().unwrap()))
            .collect();
        Ok(Self {
            major_brand,
            minor_version,
            compatible_brands,
        })
    }
}

/// `mvhd` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieHeader {
    /// Box version, 0 or 1.
    pub version: u8,
    /// Creation time, seconds since the Unix epoch.
    pub creation_time: i64,
    /// Modification time, seconds since the Unix epoch.
    pub modification_time: i64,
    /// Time units per second for the whole presentation.
    pub time_scale: u32,
    /// Presentation duration in time-scale units.
    pub duration: u64,
    /// Preferred playback rate.
    pub rate: Fixed16_16,
    /// Preferred playback volume.
    pub volume: Fixed8_8,
    /// One above the largest track ID in use.
    pub next_track_id: u32,
}

impl MovieHeader {
    /// Decode an `mvhd` payload: 100 bytes at version 0, 112 at version 1.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(BmffError::MvhdInvalidSize { size: 0 });
        }
        let version = data[0];
        let (expected, wide) = match version {
            0 => (100, false),
            1 => (112, true),
            v => return Err(BmffError::MvhdUnknownVersion { version: v }),
        };
        if data.len() != expected {
            return Err(BmffError::MvhdInvalidSize {
                size: data.len() as u64,
            });
        }
        let (creation, modification, time_scale, duration, at) = if wide {
            (
                be_u64(data, 4),
                be_u64(data, 12),
                be_u32(data, 20),
                be_u64(data, 24),
                32,
            )
        } else {
            (
                be_u32(data, 4) as u64,
                be_u32(data, 8) as u64,
                be_u32(data, 12),
                be_u32(data, 16) as u64,
                20,
            )
        };
        Ok(Self {
            version,
            creation_time: value::bmff_date_to_unix(creation),
            modification_time: value::bmff_date_to_unix(modification),
            time_scale,
            duration,
            rate: Fixed16_16(be_u32(data, at)),
            volume: Fixed8_8(be_u16(data, at + 4)),
            next_track_id: be_u32(data, expected - 4),
        })
    }
}

/// `tkhd` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackHeader {
    /// Box version, 0 or 1.
    pub version: u8,
    /// Flags; bit 0 is track-enabled.
    pub flags: u32,
    /// Creation time, seconds since the Unix epoch.
    pub creation_time: i64,
    /// Modification time, seconds since the Unix epoch.
    pub modification_time: i64,
    /// Track identifier, never zero.
    pub track_id: u32,
    /// Track duration in movie time-scale units.
    pub duration: u64,
    /// Front-to-back ordering.
    pub layer: i16,
    /// Grouping of alternate tracks.
    pub alternate_group: i16,
    /// Playback volume.
    pub volume: Fixed8_8,
    /// Visual width.
    pub width: Fixed16_16,
    /// Visual height.
    pub height: Fixed16_16,
}

impl TrackHeader {
    /// Decode a `tkhd` payload: 84 bytes at version 0, 96 at version 1.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(BmffError::TkhdInvalidSize { size: 0 });
        }
        let version = data[0];
        let (expected, wide) = match version {
            0 => (84, false),
            1 => (96, true),
            v => return Err(BmffError::TkhdUnknownVersion { version: v }),
        };
        if data.len() != expected {
            return Err(BmffError::TkhdInvalidSize {
                size: data.len() as u64,
            });
        }
        let flags = be_u32(data, 0) & 0x00FF_FFFF;
        let (creation, modification, track_id, duration, at) = if wide {
            (
                be_u64(data, 4),
                be_u64(data, 12),
                be_u32(data, 20),
                be_u64(data, 28),
                44,
            )
        } else {
            (
                be_u32(data, 4) as u64,
                be_u32(data, 8) as u64,
                be_u32(data, 12),
                be_u32(data, 20) as u64,
                32,
            )
        };
        Ok(Self {
            version,
            flags,
            creation_time: value::bmff_date_to_unix(creation),
            modification_time: value::bmff_date_to_unix(modification),
            track_id,
            duration,
            layer: be_u16(data, at) as i16,
            alternate_group: be_u16(data, at + 2) as i16,
            volume: Fixed8_8(be_u16(data, at + 4)),
            width: Fixed16_16(be_u32(data, expected - 8)),
            height: Fixed16_16(be_u32(data, expected - 4)),
        })
    }

    /// Whether the enabled flag is set.
    pub fn is_enabled(&self) -> bool {
        self.flags & 0x1 != 0
    }
}

/// `mdhd` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaHeader {
    /// Box version, 0 or 1.
    pub version: u8,
    /// Creation time, seconds since the Unix epoch.
    pub creation_time: i64,
    /// Modification time, seconds since the Unix epoch.
    pub modification_time: i64,
    /// Time units per second for this media.
    pub time_scale: u32,
    /// Media duration in media time-scale units.
    pub duration: u64,
    /// ISO 639-2 language of the media.
    pub language: IsoLanguage,
}

impl MediaHeader {
    /// Decode an `mdhd` payload: 24 bytes at version 0, 36 at version 1.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(BmffError::MdhdInvalidSize { size: 0 });
        }
        let version = data[0];
        let (expected, wide) = match version {
            0 => (24, false),
            1 => (36, true),
            v => return Err(BmffError::MdhdUnknownVersion { version: v }),
        };
        if data.len() != expected {
            return Err(BmffError::MdhdInvalidSize {
                size: data.len() as u64,
            });
        }
        let (creation, modification, time_scale, duration, at) = if wide {
            (
                be_u64(data, 4),
                be_u64(data, 12),
                be_u32(data, 20),
                be_u64(data, 24),
                32,
            )
        } else {
            (
                be_u32(data, 4) as u64,
                be_u32(data, 8) as u64,
                be_u32(data, 12),
                be_u32(data, 16) as u64,
                20,
            )
        };
        // Top bit of the packed field is padding.
        let language = IsoLanguage::from_u16(be_u16(data, at) & 0x7FFF);
        Ok(Self {
            version,
            creation_time: value::bmff_date_to_unix(creation),
            modification_time: value::bmff_date_to_unix(modification),
            time_scale,
            duration,
            language,
        })
    }
}

/// One entry of an `elst` edit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEntry {
    /// Edit duration in movie time-scale units.
    pub segment_duration: u64,
    /// Start of the edit within the media; -1 marks an empty edit.
    pub media_time: i64,
    /// Integer part of the playback rate.
    pub media_rate_integer: i16,
    /// Fraction part of the playback rate.
    pub media_rate_fraction: i16,
}

/// Decode an `elst` payload into its entries. The declared entry count must
/// fill the payload exactly.
pub fn parse_edit_list(data: &[u8]) -> Result<Vec<EditEntry>> {
    if data.len() < 8 {
        return Err(BmffError::ElstInvalidSize {
            size: data.len() as u64,
        });
    }
    let version = data[0];
    let entry_width = match version {
        0 => 12,
        1 => 20,
        v => return Err(BmffError::ElstUnknownVersion { version: v }),
    };
    let count = be_u32(data, 4) as usize;
    if data.len() != 8 + count * entry_width {
        return Err(BmffError::ElstInvalidSize {
            size: data.len() as u64,
        });
    }
    let mut entries = Vec::with_capacity(count);
    let mut at = 8;
    for _ in 0..count {
        let entry = if version == 1 {
            EditEntry {
                segment_duration: be_u64(data, at),
                media_time: be_u64(data, at + 8) as i64,
                media_rate_integer: be_u16(data, at + 16) as i16,
                media_rate_fraction: be_u16(data, at + 18) as i16,
            }
        } else {
            EditEntry {
                segment_duration: be_u32(data, at) as u64,
                media_time: be_u32(data, at + 4) as i32 as i64,
                media_rate_integer: be_u16(data, at + 8) as i16,
                media_rate_fraction: be_u16(data, at + 10) as i16,
            }
        };
        entries.push(entry);
        at += entry_width;
    }
    Ok(entries)
}

/// `hdlr` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    /// Handler type, e.g. `vide`, `soun`, `text`.
    pub handler_type: FourCc,
    /// Human-readable component name.
    pub name: String,
}

impl Handler {
    /// Decode an `hdlr` payload: the 24-byte fixed prefix plus a
    /// NUL-terminated name.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 24 {
            return Err(BmffError::HdlrInvalidSize {
                size: data.len() as u64,
            });
        }
        let handler_type = FourCc(data[8..12].try_into().unwrap());
        let name = value::read_printable(&data[24..]).map_err(BmffError::Core)?;
        Ok(Self { handler_type, name })
    }
}

/// One `chpl` chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    /// Chapter start in 100-nanosecond units.
    pub timestamp: i64,
    /// Title shown for the chapter.
    pub title: String,
}

/// Decode a `chpl` payload. The entries must land exactly on the payload
/// end.
pub fn parse_chapter_list(data: &[u8]) -> Result<Vec<ChapterEntry>> {
    if data.is_empty() {
        return Err(BmffError::ChplInvalidSize { size: 0 });
    }
    let version = data[0];
    let (count, mut at) = match version {
        0 => {
            if data.len() < 5 {
                return Err(BmffError::ChplInvalidSize {
                    size: data.len() as u64,
                });
            }
            (data[4] as usize, 5)
        }
        1 => {
            if data.len() < 9 {
                return Err(BmffError::ChplInvalidSize {
                    size: data.len() as u64,
                });
            }
            (be_u32(data, 5) as usize, 9)
        }
        v => return Err(BmffError::ChplUnknownVersion { version: v }),
    };

    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        if data.len() < at + 9 {
            return Err(BmffError::ChplInvalidSize {
                size: data.len() as u64,
            });
        }
        let timestamp = be_u64(data, at) as i64;
        let title_size = data[at + 8] as usize;
        at += 9;
        if data.len() < at + title_size {
            return Err(BmffError::ChplInvalidSize {
                size: data.len() as u64,
            });
        }
        let title = value::read_utf8(&data[at..at + title_size]);
        at += title_size;
        entries.push(ChapterEntry { timestamp, title });
    }
    // The read cursor must come out one past the declared end.
    if at != data.len() {
        return Err(BmffError::ChplInvalidSize {
            size: data.len() as u64,
        });
    }
    Ok(entries)
}

/// An iTunes metadata value, folded from a `data` atom into its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    /// Printable text (type code 1).
    Text(String),
    /// JPEG image bytes (type code 13).
    Jpeg(Vec<u8>),
    /// PNG image bytes (type code 14).
    Png(Vec<u8>),
    /// Anything else, kept verbatim.
    Binary(Vec<u8>),
    /// Track number, decoded from the `trkn` fixed struct.
    Track {
        /// Track position within the album.
        current: u16,
        /// Total tracks on the album.
        total: u16,
    },
    /// Disk number, decoded from the `disk` fixed struct.
    Disk {
        /// Disk position within the set.
        current: u16,
        /// Total disks in the set.
        total: u16,
    },
}

/// An iTunes `----` extended metadata item: a Mean/Name/Data triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedMeta {
    /// Reverse-DNS meaning, e.g. `com.apple.iTunes`.
    pub mean: String,
    /// Item name within the meaning namespace.
    pub name: String,
    /// The carried value.
    pub value: MetaValue,
}

/// The payload union interned into BMFF tree nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxValue {
    /// Containers, placeholders and skipped boxes carry no value.
    None,
    /// `ftyp` contents.
    FileType(FileType),
    /// `mvhd` contents.
    MovieHeader(MovieHeader),
    /// `tkhd` contents.
    TrackHeader(TrackHeader),
    /// `mdhd` contents.
    MediaHeader(MediaHeader),
    /// `elst` entries.
    EditList(Vec<EditEntry>),
    /// `hdlr` contents.
    Handler(Handler),
    /// `meta` version and flags; children follow the prefix.
    Meta {
        /// Box version.
        version: u8,
        /// Box flags.
        flags: u32,
    },
    /// `chpl` entries.
    ChapterList(Vec<ChapterEntry>),
    /// An iTunes tag with its folded `data` value.
    Metadata(MetaValue),
    /// An iTunes `----` item.
    Extended(ExtendedMeta),
    /// A `mean`/`name` atom's string inside a `----` item.
    MetaString(String),
}

impl fmt::Display for BoxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::FileType(ft) => {
                write!(f, "major {} minor {}", ft.major_brand, ft.minor_version)
            }
            Self::MovieHeader(mh) => {
                write!(f, "timescale {} duration {}", mh.time_scale, mh.duration)
            }
            Self::TrackHeader(th) => write!(
                f,
                "track {} {}x{}",
                th.track_id,
                th.width.integer(),
                th.height.integer()
            ),
            Self::MediaHeader(mh) => write!(
                f,
                "timescale {} duration {} lang {}",
                mh.time_scale, mh.duration, mh.language
            ),
            Self::EditList(entries) => write!(f, "{} edits", entries.len()),
            Self::Handler(h) => write!(f, "{} {:?}", h.handler_type, h.name),
            Self::Meta { version, .. } => write!(f, "version {}", version),
            Self::ChapterList(entries) => write!(f, "{} chapters", entries.len()),
            Self::Metadata(value) => write!(f, "{}", value),
            Self::Extended(ext) => {
                write!(f, "{}.{} = {}", ext.mean, ext.name, ext.value)
            }
            Self::MetaString(s) => write!(f, "{:?}", s),
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{:?}", s),
            Self::Jpeg(b) => write!(f, "<JPEG, {} bytes>", b.len()),
            Self::Png(b) => write!(f, "<PNG, {} bytes>", b.len()),
            Self::Binary(b) => write!(f, "<{} bytes>", b.len()),
            Self::Track { current, total } => write!(f, "track {}/{}", current, total),
            Self::Disk { current, total } => write!(f, "disk {}/{}", current, total),
        }
    }
}

/// Whether a box type is a pure container whose children follow immediately.
pub fn is_container(fourcc: u32) -> bool {
    matches!(
        fourcc,
        MOOV | TRAK | EDTS | MDIA | MINF | UDTA | MOOF | TRAF | MECO
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mvhd_v0() -> Vec<u8> {
        let mut data = vec![0u8; 100];
        data[0] = 0; // version
        data[12..16].copy_from_slice(&600u32.to_be_bytes()); // timescale
        data[16..20].copy_from_slice(&1200u32.to_be_bytes()); // duration
        data[20..24].copy_from_slice(&0x0001_0000u32.to_be_bytes()); // rate 1.0
        data[24..26].copy_from_slice(&0x0100u16.to_be_bytes()); // volume 1.0
        data[96..100].copy_from_slice(&2u32.to_be_bytes()); // next track
        data
    }

    #[test]
    fn test_ftyp_parse() {
        let mut data = Vec::new();
        data.extend_from_slice(b"isom");
        data.extend_from_slice(&512u32.to_be_bytes());
        data.extend_from_slice(b"isommp42");
        let ftyp = FileType::parse(&data).unwrap();
        assert_eq!(ftyp.major_brand, FourCc(*b"isom"));
        assert_eq!(ftyp.minor_version, 512);
        assert_eq!(
            ftyp.compatible_brands,
            vec![FourCc(*b"isom"), FourCc(*b"mp42")]
        );

        assert!(matches!(
            FileType::parse(&data[..7]),
            Err(BmffError::FtypInvalidSize { size: 7 })
        ));
        assert!(matches!(
            FileType::parse(&data[..10]),
            Err(BmffError::FtypInvalidSize { .. })
        ));
    }

    #[test]
    fn test_mvhd_parse() {
        let header = MovieHeader::parse(&mvhd_v0()).unwrap();
        assert_eq!(header.version, 0);
        assert_eq!(header.time_scale, 600);
        assert_eq!(header.duration, 1200);
        assert_eq!(header.rate.to_f64(), 1.0);
        assert_eq!(header.volume.to_f64(), 1.0);
        assert_eq!(header.next_track_id, 2);
        // Zero wire time is the 1904 epoch.
        assert_eq!(header.creation_time, -2_082_844_800);
    }

    #[test]
    fn test_mvhd_rejects_bad_version_and_size() {
        let mut data = mvhd_v0();
        data[0] = 2;
        assert!(matches!(
            MovieHeader::parse(&data),
            Err(BmffError::MvhdUnknownVersion { version: 2 })
        ));

        let data = mvhd_v0();
        assert!(matches!(
            MovieHeader::parse(&data[..99]),
            Err(BmffError::MvhdInvalidSize { size: 99 })
        ));

        // Version 1 needs the wide layout.
        let mut data = mvhd_v0();
        data[0] = 1;
        assert!(matches!(
            MovieHeader::parse(&data),
            Err(BmffError::MvhdInvalidSize { size: 100 })
        ));
    }

    #[test]
    fn test_tkhd_parse() {
        let mut data = vec![0u8; 84];
        data[0] = 0;
        data[3] = 0x01; // enabled
        data[12..16].copy_from_slice(&7u32.to_be_bytes()); // track id
        data[76..80].copy_from_slice(&(1920u32 << 16).to_be_bytes());
        data[80..84].copy_from_slice(&(1080u32 << 16).to_be_bytes());
        let header = TrackHeader::parse(&data).unwrap();
        assert_eq!(header.track_id, 7);
        assert!(header.is_enabled());
        assert_eq!(header.width.integer(), 1920);
        assert_eq!(header.height.integer(), 1080);
    }

    #[test]
    fn test_mdhd_parse() {
        let mut data = vec![0u8; 24];
        data[12..16].copy_from_slice(&48000u32.to_be_bytes());
        data[16..20].copy_from_slice(&96000u32.to_be_bytes());
        let und = ((b'u' - 0x60) as u16) << 10 | ((b'n' - 0x60) as u16) << 5
            | (b'd' - 0x60) as u16;
        data[20..22].copy_from_slice(&und.to_be_bytes());
        let header = MediaHeader::parse(&data).unwrap();
        assert_eq!(header.time_scale, 48000);
        assert_eq!(header.duration, 96000);
        assert_eq!(header.language.as_str(), "und");
    }

    #[test]
    fn test_edit_list_exact_size() {
        let mut data = vec![0u8; 8 + 12];
        data[4..8].copy_from_slice(&1u32.to_be_bytes());
        data[8..12].copy_from_slice(&300u32.to_be_bytes());
        data[12..16].copy_from_slice(&(-1i32).to_be_bytes());
        data[16..18].copy_from_slice(&1u16.to_be_bytes());
        let entries = parse_edit_list(&data).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].segment_duration, 300);
        assert_eq!(entries[0].media_time, -1);
        assert_eq!(entries[0].media_rate_integer, 1);

        data.push(0);
        assert!(matches!(
            parse_edit_list(&data),
            Err(BmffError::ElstInvalidSize { .. })
        ));
    }

    #[test]
    fn test_hdlr_parse() {
        let mut data = vec![0u8; 24];
        data[8..12].copy_from_slice(b"vide");
        data.extend_from_slice(b"VideoHandler\0");
        let handler = Handler::parse(&data).unwrap();
        assert_eq!(handler.handler_type, FourCc(*b"vide"));
        assert_eq!(handler.name, "VideoHandler");

        assert!(matches!(
            Handler::parse(&data[..20]),
            Err(BmffError::HdlrInvalidSize { size: 20 })
        ));
    }

    #[test]
    fn test_chapter_list_versions() {
        // v0: count is one byte.
        let mut data = vec![0u8, 0, 0, 0, 1];
        data.extend_from_slice(&1_000_000u64.to_be_bytes());
        data.push(5);
        data.extend_from_slice(b"Intro");
        let entries = parse_chapter_list(&data).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, 1_000_000);
        assert_eq!(entries[0].title, "Intro");

        // Trailing garbage leaves the cursor short of the end.
        data.push(0xAA);
        assert!(matches!(
            parse_chapter_list(&data),
            Err(BmffError::ChplInvalidSize { .. })
        ));

        // v1: one reserved byte, then a u32 count.
        let mut data = vec![1u8, 0, 0, 0, 0];
        data.extend_from_slice(&1u32.to_be_bytes());
        data.extend_from_slice(&42u64.to_be_bytes());
        data.push(2);
        data.extend_from_slice(b"Ch");
        let entries = parse_chapter_list(&data).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, 42);
        assert_eq!(entries[0].title, "Ch");
    }

    #[test]
    fn test_container_classification() {
        assert!(is_container(MOOV));
        assert!(is_container(UDTA));
        assert!(!is_container(MVHD));
        assert!(!is_container(MDAT));
    }
}
