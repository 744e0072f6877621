//! Matroska element schema: IDs, data types and parser dispositions.
//!
//! One row per known element ID. The disposition tells the body walker what
//! to do with the payload: decode and intern it with the row's type decoder,
//! hand it to parser-specific logic, or record the byte range and move on.
//! Unknown IDs are never an error; they become offset-only nodes.

// =============================================================================
// EBML header
// =============================================================================

/// Root element of every EBML document header.
pub const EBML: u64 = 0x1A45DFA3;
/// EBML version the document was written against.
pub const EBML_VERSION: u64 = 0x4286;
/// Minimum EBML version a reader needs for this document.
pub const EBML_READ_VERSION: u64 = 0x42F7;
/// Widest element ID the body may use, in bytes.
pub const EBML_MAX_ID_LENGTH: u64 = 0x42F2;
/// Widest element length the body may use, in bytes.
pub const EBML_MAX_SIZE_LENGTH: u64 = 0x42F3;
/// Name of the schema that governs the body.
pub const DOC_TYPE: u64 = 0x4282;
/// Schema version the body was written against.
pub const DOC_TYPE_VERSION: u64 = 0x4287;
/// Minimum schema version a reader needs for the body.
pub const DOC_TYPE_READ_VERSION: u64 = 0x4285;
/// Declares an extension to the body schema.
pub const DOC_TYPE_EXTENSION: u64 = 0x4281;
/// Name of a declared schema extension.
pub const DOC_TYPE_EXTENSION_NAME: u64 = 0x4283;
/// Version of a declared schema extension.
pub const DOC_TYPE_EXTENSION_VERSION: u64 = 0x4284;

// =============================================================================
// Global elements
// =============================================================================

/// Dead space a muxer left for later overwriting.
pub const VOID: u64 = 0xEC;
/// Checksum covering the rest of the enclosing master.
pub const CRC32: u64 = 0xBF;

// =============================================================================
// Segment
// =============================================================================

/// Top-level body container; everything else in a Matroska file nests
/// inside one.
pub const SEGMENT: u64 = 0x18538067;

// =============================================================================
// Seek index
// =============================================================================

/// Table of byte positions for the segment's other top-level elements.
pub const SEEK_HEAD: u64 = 0x114D9B74;
/// One row of the seek table.
pub const SEEK: u64 = 0x4DBB;
/// Which element ID the row points at.
pub const SEEK_ID: u64 = 0x53AB;
/// Byte position of the target, relative to the enclosing SeekHead.
pub const SEEK_POSITION: u64 = 0x53AC;

// =============================================================================
// Segment info
// =============================================================================

/// Global properties of the segment.
pub const INFO: u64 = 0x1549A966;
/// 128-bit identity of this segment.
pub const SEGMENT_UID: u64 = 0x73A4;
/// Filename the segment was stored under.
pub const SEGMENT_FILENAME: u64 = 0x7384;
/// Identity of the segment that logically precedes this one.
pub const PREV_UID: u64 = 0x3CB923;
/// Filename of the logically preceding segment.
pub const PREV_FILENAME: u64 = 0x3C83AB;
/// Identity of the segment that logically follows this one.
pub const NEXT_UID: u64 = 0x3EB923;
/// Filename of the logically following segment.
pub const NEXT_FILENAME: u64 = 0x3E83BB;
/// Identity shared by a family of related segments.
pub const SEGMENT_FAMILY: u64 = 0x4444;
/// Maps chapter-codec identifiers onto this segment.
pub const CHAPTER_TRANSLATE: u64 = 0x6924;
/// Chapter codec a translation applies to.
pub const CHAPTER_TRANSLATE_CODEC: u64 = 0x69BF;
/// Edition a translation applies to.
pub const CHAPTER_TRANSLATE_EDITION_UID: u64 = 0x69FC;
/// The translated identifier bytes.
pub const CHAPTER_TRANSLATE_ID: u64 = 0x69A5;
/// How many nanoseconds one timestamp tick represents.
pub const TIMESTAMP_SCALE: u64 = 0x2AD7B1;
/// Segment length, counted in timestamp ticks.
pub const DURATION: u64 = 0x4489;
/// When the segment was created, counted from 2001-01-01T00:00:00 UTC.
pub const DATE_UTC: u64 = 0x4461;
/// Human-readable segment title.
pub const TITLE: u64 = 0x7BA9;
/// Library that produced the segment.
pub const MUXING_APP: u64 = 0x4D80;
/// Application that produced the segment.
pub const WRITING_APP: u64 = 0x5741;

// =============================================================================
// Clusters and blocks
// =============================================================================

/// Holds a run of time-correlated media blocks.
pub const CLUSTER: u64 = 0x1F43B675;
/// Base timestamp shared by every block in the cluster.
pub const TIMESTAMP: u64 = 0xE7;
/// Tracks that stay silent for this cluster.
pub const SILENT_TRACKS: u64 = 0x5854;
/// Number of one silent track.
pub const SILENT_TRACK_NUMBER: u64 = 0x58D7;
/// The cluster's own byte position within the segment.
pub const POSITION: u64 = 0xA7;
/// Byte distance back to the previous cluster.
pub const PREV_SIZE: u64 = 0xAB;
/// Frame data with its track and timing framed inline.
pub const SIMPLE_BLOCK: u64 = 0xA3;
/// Frame data bundled with reference and duration metadata.
pub const BLOCK_GROUP: u64 = 0xA0;
/// Frame data inside a block group.
pub const BLOCK: u64 = 0xA1;
/// Placeholder block carrying no real frame.
pub const BLOCK_VIRTUAL: u64 = 0xA2;
/// Side data attached to the group's block.
pub const BLOCK_ADDITIONS: u64 = 0x75A1;
/// One piece of block side data.
pub const BLOCK_MORE: u64 = 0xA6;
/// Which mapping a piece of side data belongs to.
pub const BLOCK_ADD_ID: u64 = 0xEE;
/// The side data bytes themselves.
pub const BLOCK_ADDITIONAL: u64 = 0xA5;
/// How long the block's frames last, in timestamp ticks.
pub const BLOCK_DURATION: u64 = 0x9B;
/// Cache priority of the referenced block.
pub const REFERENCE_PRIORITY: u64 = 0xFA;
/// Timestamp delta to a block this one depends on.
pub const REFERENCE_BLOCK: u64 = 0xFB;
/// Delta to a virtual reference.
pub const REFERENCE_VIRTUAL: u64 = 0xFD;
/// Codec state to restore before decoding from here.
pub const CODEC_STATE: u64 = 0xA4;
/// Trailing samples a decoder should throw away, in nanoseconds.
pub const DISCARD_PADDING: u64 = 0x75A2;
/// Legacy per-lace slice descriptions.
pub const SLICES: u64 = 0x8E;
/// One legacy lace slice.
pub const TIME_SLICE: u64 = 0xE8;
/// Position of a slice within its lace.
pub const LACE_NUMBER: u64 = 0xCC;
/// Frame the slice belongs to.
pub const FRAME_NUMBER: u64 = 0xCD;
/// Side-data stream the slice belongs to.
pub const BLOCK_ADDITION_ID: u64 = 0xCB;
/// Slice delay, in timestamp ticks.
pub const DELAY: u64 = 0xCE;
/// Slice length, in timestamp ticks.
pub const SLICE_DURATION: u64 = 0xCF;
/// Legacy trick-play reference description.
pub const REFERENCE_FRAME: u64 = 0xC8;
/// Byte distance to the trick-play reference.
pub const REFERENCE_OFFSET: u64 = 0xC9;
/// Timestamp of the trick-play reference.
pub const REFERENCE_TIMESTAMP: u64 = 0xCA;
/// Legacy encrypted frame data.
pub const ENCRYPTED_BLOCK: u64 = 0xAF;

// =============================================================================
// Tracks
// =============================================================================

/// Holds every track definition.
pub const TRACKS: u64 = 0x1654AE6B;
/// Definition of a single track.
pub const TRACK_ENTRY: u64 = 0xAE;
/// Number blocks use to address this track.
pub const TRACK_NUMBER: u64 = 0xD7;
/// Identity of the track, stable across remuxes.
pub const TRACK_UID: u64 = 0x73C5;
/// Track class: video, audio, subtitles and so on.
pub const TRACK_TYPE: u64 = 0x83;
/// Whether the track is usable at all.
pub const FLAG_ENABLED: u64 = 0xB9;
/// Whether players should pick this track absent a preference.
pub const FLAG_DEFAULT: u64 = 0x88;
/// Whether the track must play regardless of user preference.
pub const FLAG_FORCED: u64 = 0x55AA;
/// Suitability for hearing-impaired audiences.
pub const FLAG_HEARING_IMPAIRED: u64 = 0x55AB;
/// Suitability for visually-impaired audiences.
pub const FLAG_VISUAL_IMPAIRED: u64 = 0x55AC;
/// Marks spoken descriptions of the video content.
pub const FLAG_TEXT_DESCRIPTIONS: u64 = 0x55AD;
/// Whether this is the content's original language.
pub const FLAG_ORIGINAL: u64 = 0x55AE;
/// Marks commentary content.
pub const FLAG_COMMENTARY: u64 = 0x55AF;
/// Whether blocks on this track may lace several frames together.
pub const FLAG_LACING: u64 = 0x9C;
/// Frames a decoder must keep cached at minimum.
pub const MIN_CACHE: u64 = 0x6DE7;
/// Frames a decoder needs cached at most.
pub const MAX_CACHE: u64 = 0x6DF8;
/// Nominal frame duration, in nanoseconds.
pub const DEFAULT_DURATION: u64 = 0x23E383;
/// Nominal field duration for interlaced video.
pub const DEFAULT_DECODED_FIELD_DURATION: u64 = 0x234E7A;
/// Per-track timestamp multiplier; long superseded.
pub const TRACK_TIMESTAMP_SCALE: u64 = 0x23314F;
/// Legacy fixed timestamp offset for the track.
pub const TRACK_OFFSET: u64 = 0x537F;
/// Highest side-data ID in use on this track.
pub const MAX_BLOCK_ADDITION_ID: u64 = 0x55EE;
/// Declares what one side-data ID means.
pub const BLOCK_ADDITION_MAPPING: u64 = 0x41E4;
/// The side-data ID being declared.
pub const BLOCK_ADD_ID_VALUE: u64 = 0x41F0;
/// Human-readable label for the side-data stream.
pub const BLOCK_ADD_ID_NAME: u64 = 0x41A4;
/// Registered type of the side-data stream.
pub const BLOCK_ADD_ID_TYPE: u64 = 0x41E7;
/// Extra bytes needed to interpret the side-data stream.
pub const BLOCK_ADD_ID_EXTRA_DATA: u64 = 0x41ED;
/// Human-readable track label.
pub const NAME: u64 = 0x536E;
/// Track language as an ISO 639-2 code.
pub const LANGUAGE: u64 = 0x22B59C;
/// Track language as a BCP 47 tag; wins over the ISO code.
pub const LANGUAGE_BCP47: u64 = 0x22B59D;
/// Registered identifier of the track's codec.
pub const CODEC_ID: u64 = 0x86;
/// Opaque initialisation bytes handed to the codec.
pub const CODEC_PRIVATE: u64 = 0x63A2;
/// Human-readable codec label.
pub const CODEC_NAME: u64 = 0x258688;
/// Legacy pointer from a track to an attachment.
pub const ATTACHMENT_LINK: u64 = 0x7446;
/// Legacy textual codec settings.
pub const CODEC_SETTINGS: u64 = 0x3A9697;
/// Legacy URL describing the codec.
pub const CODEC_INFO_URL: u64 = 0x3B4040;
/// Legacy URL for obtaining the codec.
pub const CODEC_DOWNLOAD_URL: u64 = 0x26B240;
/// Legacy flag: the codec tolerates damaged input.
pub const CODEC_DECODE_ALL: u64 = 0xAA;
/// Track to fall back to where this one has gaps.
pub const TRACK_OVERLAY: u64 = 0x6FAB;
/// Startup samples the codec emits that must be dropped, in nanoseconds.
pub const CODEC_DELAY: u64 = 0x56AA;
/// Extra lead-in a seek must feed the decoder, in nanoseconds.
pub const SEEK_PRE_ROLL: u64 = 0x56BB;
/// Maps this track onto chapter-codec track identifiers.
pub const TRACK_TRANSLATE: u64 = 0x6624;
/// The translated track identifier bytes.
pub const TRACK_TRANSLATE_TRACK_ID: u64 = 0x66A5;
/// Chapter codec the track translation applies to.
pub const TRACK_TRANSLATE_CODEC: u64 = 0x66BF;
/// Edition the track translation applies to.
pub const TRACK_TRANSLATE_EDITION_UID: u64 = 0x66FC;
/// Builds this track out of several source tracks.
pub const TRACK_OPERATION: u64 = 0xE2;
/// Source planes combined into 3D video.
pub const TRACK_COMBINE_PLANES: u64 = 0xE3;
/// One source plane of a combined track.
pub const TRACK_PLANE: u64 = 0xE4;
/// Which track supplies the plane.
pub const TRACK_PLANE_UID: u64 = 0xE5;
/// Role the plane plays (left eye, right eye, background).
pub const TRACK_PLANE_TYPE: u64 = 0xE6;
/// Source tracks whose blocks are interleaved into this one.
pub const TRACK_JOIN_BLOCKS: u64 = 0xE9;
/// One track feeding the join.
pub const TRACK_JOIN_UID: u64 = 0xED;
/// Legacy trick-play track identity.
pub const TRICK_TRACK_UID: u64 = 0xC0;
/// Legacy trick-play segment identity.
pub const TRICK_TRACK_SEGMENT_UID: u64 = 0xC1;
/// Legacy marker for trick-play tracks.
pub const TRICK_TRACK_FLAG: u64 = 0xC6;
/// Legacy identity of the mastered track.
pub const TRICK_MASTER_TRACK_UID: u64 = 0xC7;
/// Legacy identity of the mastered track's segment.
pub const TRICK_MASTER_TRACK_SEGMENT_UID: u64 = 0xC4;

// =============================================================================
// Video settings
// =============================================================================

/// Video-specific track settings.
pub const VIDEO: u64 = 0xE0;
/// Whether the picture is interlaced.
pub const FLAG_INTERLACED: u64 = 0x9A;
/// Which interlaced field comes first.
pub const FIELD_ORDER: u64 = 0x9D;
/// 3D layout of the picture.
pub const STEREO_MODE: u64 = 0x53B8;
/// Superseded 3D layout field.
pub const OLD_STEREO_MODE: u64 = 0x53B9;
/// How an alpha channel is carried, if at all.
pub const ALPHA_MODE: u64 = 0x53C0;
/// Stored frame width, in pixels.
pub const PIXEL_WIDTH: u64 = 0xB0;
/// Stored frame height, in pixels.
pub const PIXEL_HEIGHT: u64 = 0xBA;
/// Pixels to crop off the bottom edge.
pub const PIXEL_CROP_BOTTOM: u64 = 0x54AA;
/// Pixels to crop off the top edge.
pub const PIXEL_CROP_TOP: u64 = 0x54BB;
/// Pixels to crop off the left edge.
pub const PIXEL_CROP_LEFT: u64 = 0x54CC;
/// Pixels to crop off the right edge.
pub const PIXEL_CROP_RIGHT: u64 = 0x54DD;
/// Width the cropped picture should be shown at.
pub const DISPLAY_WIDTH: u64 = 0x54B0;
/// Height the cropped picture should be shown at.
pub const DISPLAY_HEIGHT: u64 = 0x54BA;
/// Unit the display dimensions are expressed in.
pub const DISPLAY_UNIT: u64 = 0x54B2;
/// Legacy aspect-ratio resize hint.
pub const ASPECT_RATIO_TYPE: u64 = 0x54B3;
/// Pixel layout code for uncompressed video.
pub const UNCOMPRESSED_FOUR_CC: u64 = 0x2EB524;
/// Legacy gamma correction value.
pub const GAMMA_VALUE: u64 = 0x2FB523;
/// Legacy nominal frame rate.
pub const FRAME_RATE: u64 = 0x2383E3;
/// Colour description of the picture.
pub const COLOUR: u64 = 0x55B0;
/// Matrix used to derive luma and chroma.
pub const MATRIX_COEFFICIENTS: u64 = 0x55B1;
/// Bits stored per colour channel.
pub const BITS_PER_CHANNEL: u64 = 0x55B2;
/// Horizontal chroma subsampling factor.
pub const CHROMA_SUBSAMPLING_HORZ: u64 = 0x55B3;
/// Vertical chroma subsampling factor.
pub const CHROMA_SUBSAMPLING_VERT: u64 = 0x55B4;
/// Additional horizontal subsampling of the Cb channel.
pub const CB_SUBSAMPLING_HORZ: u64 = 0x55B5;
/// Additional vertical subsampling of the Cb channel.
pub const CB_SUBSAMPLING_VERT: u64 = 0x55B6;
/// Horizontal placement of chroma samples.
pub const CHROMA_SITING_HORZ: u64 = 0x55B7;
/// Vertical placement of chroma samples.
pub const CHROMA_SITING_VERT: u64 = 0x55B8;
/// Whether sample values span the full or a limited range.
pub const RANGE: u64 = 0x55B9;
/// Opto-electronic transfer function of the picture.
pub const TRANSFER_CHARACTERISTICS: u64 = 0x55BA;
/// Colour primaries of the picture.
pub const PRIMARIES: u64 = 0x55BB;
/// Brightest pixel anywhere in the stream, in nits.
pub const MAX_CLL: u64 = 0x55BC;
/// Brightest frame average anywhere in the stream, in nits.
pub const MAX_FALL: u64 = 0x55BD;
/// Description of the HDR mastering display.
pub const MASTERING_METADATA: u64 = 0x55D0;
/// Red primary chromaticity, x coordinate.
pub const PRIMARY_R_CHROMATICITY_X: u64 = 0x55D1;
/// Red primary chromaticity, y coordinate.
pub const PRIMARY_R_CHROMATICITY_Y: u64 = 0x55D2;
/// Green primary chromaticity, x coordinate.
pub const PRIMARY_G_CHROMATICITY_X: u64 = 0x55D3;
/// Green primary chromaticity, y coordinate.
pub const PRIMARY_G_CHROMATICITY_Y: u64 = 0x55D4;
/// Blue primary chromaticity, x coordinate.
pub const PRIMARY_B_CHROMATICITY_X: u64 = 0x55D5;
/// Blue primary chromaticity, y coordinate.
pub const PRIMARY_B_CHROMATICITY_Y: u64 = 0x55D6;
/// White point chromaticity, x coordinate.
pub const WHITE_POINT_CHROMATICITY_X: u64 = 0x55D7;
/// White point chromaticity, y coordinate.
pub const WHITE_POINT_CHROMATICITY_Y: u64 = 0x55D8;
/// Peak luminance of the mastering display.
pub const LUMINANCE_MAX: u64 = 0x55D9;
/// Minimum luminance of the mastering display.
pub const LUMINANCE_MIN: u64 = 0x55DA;
/// Spherical projection of the picture.
pub const PROJECTION: u64 = 0x7670;
/// Which projection is in use.
pub const PROJECTION_TYPE: u64 = 0x7671;
/// Projection-specific parameter bytes.
pub const PROJECTION_PRIVATE: u64 = 0x7672;
/// Yaw rotation to apply, in degrees.
pub const PROJECTION_POSE_YAW: u64 = 0x7673;
/// Pitch rotation to apply, in degrees.
pub const PROJECTION_POSE_PITCH: u64 = 0x7674;
/// Roll rotation to apply, in degrees.
pub const PROJECTION_POSE_ROLL: u64 = 0x7675;

// =============================================================================
// Audio settings
// =============================================================================

/// Audio-specific track settings.
pub const AUDIO: u64 = 0xE1;
/// Sample rate, in Hz.
pub const SAMPLING_FREQUENCY: u64 = 0xB5;
/// Playback sample rate where it differs from the stored one.
pub const OUTPUT_SAMPLING_FREQUENCY: u64 = 0x78B5;
/// How many channels the track carries.
pub const CHANNELS: u64 = 0x9F;
/// Legacy channel position table.
pub const CHANNEL_POSITIONS: u64 = 0x7D7B;
/// Sample precision, in bits.
pub const BIT_DEPTH: u64 = 0x6264;
/// Emphasis applied when the audio was recorded.
pub const EMPHASIS: u64 = 0x52F1;

// =============================================================================
// Content encodings
// =============================================================================

/// Transformations applied to the track's data.
pub const CONTENT_ENCODINGS: u64 = 0x6D80;
/// One compression or encryption step.
pub const CONTENT_ENCODING: u64 = 0x6240;
/// Position of the step within the chain.
pub const CONTENT_ENCODING_ORDER: u64 = 0x5031;
/// Which parts of the track the step covers.
pub const CONTENT_ENCODING_SCOPE: u64 = 0x5032;
/// Whether the step compresses or encrypts.
pub const CONTENT_ENCODING_TYPE: u64 = 0x5033;
/// Compression parameters of the step.
pub const CONTENT_COMPRESSION: u64 = 0x5034;
/// Compression algorithm in use.
pub const CONTENT_COMP_ALGO: u64 = 0x4254;
/// Algorithm parameters, such as stripped header bytes.
pub const CONTENT_COMP_SETTINGS: u64 = 0x4255;
/// Encryption parameters of the step.
pub const CONTENT_ENCRYPTION: u64 = 0x5035;
/// Encryption algorithm in use.
pub const CONTENT_ENC_ALGO: u64 = 0x47E1;
/// Which key decrypts the data.
pub const CONTENT_ENC_KEY_ID: u64 = 0x47E2;
/// AES-specific encryption parameters.
pub const CONTENT_ENC_AES_SETTINGS: u64 = 0x47E7;
/// AES cipher mode in use.
pub const AES_SETTINGS_CIPHER_MODE: u64 = 0x47E8;
/// Legacy cryptographic signature of the data.
pub const CONTENT_SIGNATURE: u64 = 0x47E3;
/// Legacy identifier of the signing key.
pub const CONTENT_SIG_KEY_ID: u64 = 0x47E4;
/// Legacy signature algorithm.
pub const CONTENT_SIG_ALGO: u64 = 0x47E5;
/// Legacy signature hash algorithm.
pub const CONTENT_SIG_HASH_ALGO: u64 = 0x47E6;

// =============================================================================
// Cues
// =============================================================================

/// Seeking index over the segment's clusters.
pub const CUES: u64 = 0x1C53BB6B;
/// Index entry for one timestamp.
pub const CUE_POINT: u64 = 0xBB;
/// The timestamp being indexed.
pub const CUE_TIME: u64 = 0xB3;
/// Where to find that timestamp on one track.
pub const CUE_TRACK_POSITIONS: u64 = 0xB7;
/// Track the positions apply to.
pub const CUE_TRACK: u64 = 0xF7;
/// Byte position of the cluster holding the data.
pub const CUE_CLUSTER_POSITION: u64 = 0xF1;
/// Byte position of the block within its cluster.
pub const CUE_RELATIVE_POSITION: u64 = 0xF0;
/// How long the indexed block lasts.
pub const CUE_DURATION: u64 = 0xB2;
/// Ordinal of the block within its cluster.
pub const CUE_BLOCK_NUMBER: u64 = 0x5378;
/// Codec state the entry depends on.
pub const CUE_CODEC_STATE: u64 = 0xEA;
/// A block that must be decoded before this entry.
pub const CUE_REFERENCE: u64 = 0xDB;
/// Timestamp of the required block.
pub const CUE_REF_TIME: u64 = 0x96;
/// Legacy position of the required block's cluster.
pub const CUE_REF_CLUSTER: u64 = 0x97;
/// Legacy ordinal of the required block.
pub const CUE_REF_NUMBER: u64 = 0x535F;
/// Legacy codec state for the required block.
pub const CUE_REF_CODEC_STATE: u64 = 0xEB;

// =============================================================================
// Attachments
// =============================================================================

/// Files embedded alongside the media.
pub const ATTACHMENTS: u64 = 0x1941A469;
/// One embedded file.
pub const ATTACHED_FILE: u64 = 0x61A7;
/// What the embedded file is for.
pub const FILE_DESCRIPTION: u64 = 0x467E;
/// Filename of the embedded file.
pub const FILE_NAME: u64 = 0x466E;
/// Media type of the embedded file.
pub const FILE_MEDIA_TYPE: u64 = 0x4660;
/// The embedded file's bytes.
pub const FILE_DATA: u64 = 0x465C;
/// Identity of the embedded file.
pub const FILE_UID: u64 = 0x46AE;
/// Legacy external location of the file.
pub const FILE_REFERRAL: u64 = 0x4675;
/// Legacy start of the file's validity window.
pub const FILE_USED_START_TIME: u64 = 0x4661;
/// Legacy end of the file's validity window.
pub const FILE_USED_END_TIME: u64 = 0x4662;

// =============================================================================
// Chapters
// =============================================================================

/// Chapter definitions for the segment.
pub const CHAPTERS: u64 = 0x1043A770;
/// One self-contained set of chapters.
pub const EDITION_ENTRY: u64 = 0x45B9;
/// Identity of the edition.
pub const EDITION_UID: u64 = 0x45BC;
/// Whether the edition is hidden from users.
pub const EDITION_FLAG_HIDDEN: u64 = 0x45BD;
/// Whether the edition is the one to pick by default.
pub const EDITION_FLAG_DEFAULT: u64 = 0x45DB;
/// Whether the chapters dictate playback order.
pub const EDITION_FLAG_ORDERED: u64 = 0x45DD;
/// Localised title of the edition.
pub const EDITION_DISPLAY: u64 = 0x4520;
/// The edition title text.
pub const EDITION_STRING: u64 = 0x4521;
/// Language of the edition title.
pub const EDITION_LANGUAGE_IETF: u64 = 0x45E4;
/// One chapter; may nest further chapters.
pub const CHAPTER_ATOM: u64 = 0xB6;
/// Identity of the chapter.
pub const CHAPTER_UID: u64 = 0x73C4;
/// Textual chapter identity in WebVTT style.
pub const CHAPTER_STRING_UID: u64 = 0x5654;
/// Where the chapter begins, in nanoseconds.
pub const CHAPTER_TIME_START: u64 = 0x91;
/// Where the chapter ends, in nanoseconds.
pub const CHAPTER_TIME_END: u64 = 0x92;
/// Whether the chapter is hidden from users.
pub const CHAPTER_FLAG_HIDDEN: u64 = 0x98;
/// Whether the chapter takes part in playback.
pub const CHAPTER_FLAG_ENABLED: u64 = 0x4598;
/// Segment to jump to for this chapter.
pub const CHAPTER_SEGMENT_UID: u64 = 0x6E67;
/// Edition to use within the linked segment.
pub const CHAPTER_SEGMENT_EDITION_UID: u64 = 0x6EBC;
/// Physical medium level the chapter corresponds to.
pub const CHAPTER_PHYSICAL_EQUIV: u64 = 0x63C3;
/// Kind of content the chapter marks as skippable.
pub const CHAPTER_SKIP_TYPE: u64 = 0x4588;
/// Tracks the chapter applies to.
pub const CHAPTER_TRACK: u64 = 0x8F;
/// One track the chapter applies to.
pub const CHAPTER_TRACK_UID: u64 = 0x89;
/// Localised title of the chapter.
pub const CHAPTER_DISPLAY: u64 = 0x80;
/// The chapter title text.
pub const CHAP_STRING: u64 = 0x85;
/// Language of the chapter title, as ISO 639-2.
pub const CHAP_LANGUAGE: u64 = 0x437C;
/// Language of the chapter title, as BCP 47.
pub const CHAP_LANGUAGE_BCP47: u64 = 0x437D;
/// Country the chapter title is meant for.
pub const CHAP_COUNTRY: u64 = 0x437E;
/// Commands run around the chapter, for menu systems.
pub const CHAP_PROCESS: u64 = 0x6944;
/// Command codec in use.
pub const CHAP_PROCESS_CODEC_ID: u64 = 0x6955;
/// Initialisation bytes for the command codec.
pub const CHAP_PROCESS_PRIVATE: u64 = 0x450D;
/// One command with its trigger.
pub const CHAP_PROCESS_COMMAND: u64 = 0x6911;
/// When the command fires.
pub const CHAP_PROCESS_TIME: u64 = 0x6922;
/// The command bytes.
pub const CHAP_PROCESS_DATA: u64 = 0x6933;

// =============================================================================
// Tags
// =============================================================================

/// Metadata describing the segment and its parts.
pub const TAGS: u64 = 0x1254C367;
/// One tag together with what it describes.
pub const TAG: u64 = 0x7373;
/// What the tag's values apply to.
pub const TARGETS: u64 = 0x63C0;
/// Numeric level the tag applies at.
pub const TARGET_TYPE_VALUE: u64 = 0x68CA;
/// Textual label of that level.
pub const TARGET_TYPE: u64 = 0x63CA;
/// Track the tag describes.
pub const TAG_TRACK_UID: u64 = 0x63C5;
/// Edition the tag describes.
pub const TAG_EDITION_UID: u64 = 0x63C9;
/// Chapter the tag describes.
pub const TAG_CHAPTER_UID: u64 = 0x63C4;
/// Attachment the tag describes.
pub const TAG_ATTACHMENT_UID: u64 = 0x63C6;
/// One name/value pair; may nest refinements.
pub const SIMPLE_TAG: u64 = 0x67C8;
/// Name of the pair.
pub const TAG_NAME: u64 = 0x45A3;
/// Language of the value, as ISO 639-2.
pub const TAG_LANGUAGE: u64 = 0x447A;
/// Language of the value, as BCP 47.
pub const TAG_LANGUAGE_BCP47: u64 = 0x447B;
/// Whether this is the default variant of the pair.
pub const TAG_DEFAULT: u64 = 0x4484;
/// Misnumbered TagDefault that some muxers wrote.
pub const TAG_DEFAULT_BOGUS: u64 = 0x44B4;
/// Text form of the value.
pub const TAG_STRING: u64 = 0x4487;
/// Binary form of the value.
pub const TAG_BINARY: u64 = 0x4485;

/// The internal data type of a Matroska element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Contains nested elements.
    Master,
    /// Big-endian unsigned integer, 0..=8 bytes.
    Unsigned,
    /// Big-endian two's-complement signed integer, 0..=8 bytes.
    Signed,
    /// IEEE 754 float, 0, 4 or 8 bytes.
    Float,
    /// Printable ASCII string.
    String,
    /// UTF-8 text.
    Utf8,
    /// Opaque bytes.
    Binary,
    /// Signed nanoseconds since the Matroska epoch.
    Date,
    /// A 16-byte RFC 4122 UUID.
    Uuid,
    /// The one-byte track class enumeration.
    TrackType,
}

/// What the body walker does with an element of a known ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Decode the payload with the kind's decoder and intern the value.
    Intern,
    /// Parser-specific handling (SeekPosition rebasing, UID width checks,
    /// track-type decoding, date rebasing, CRC verification, cluster
    /// skipping).
    Special,
    /// Record the byte range only; never read the payload.
    Skip,
}

/// One row of the schema table.
#[derive(Debug, Clone, Copy)]
pub struct ElementInfo {
    /// Element name as spelled by the Matroska specification.
    pub name: &'static str,
    /// Internal data type.
    pub kind: ElementKind,
    /// Parser disposition.
    pub disposition: Disposition,
}

/// Look up the schema row for an element ID. Unknown IDs return `None` and
/// are skipped by the walker with their offsets retained.
pub fn element_info(id: u64) -> Option<ElementInfo> {
    use Disposition::{Intern, Skip, Special};
    use ElementKind::*;

    let row = |name, kind, disposition| {
        Some(ElementInfo {
            name,
            kind,
            disposition,
        })
    };

    match id {
        // Header fields
        EBML => row("EBML", Master, Intern),
        EBML_VERSION => row("EBMLVersion", Unsigned, Intern),
        EBML_READ_VERSION => row("EBMLReadVersion", Unsigned, Intern),
        EBML_MAX_ID_LENGTH => row("EBMLMaxIDLength", Unsigned, Intern),
        EBML_MAX_SIZE_LENGTH => row("EBMLMaxSizeLength", Unsigned, Intern),
        DOC_TYPE => row("DocType", String, Intern),
        DOC_TYPE_VERSION => row("DocTypeVersion", Unsigned, Intern),
        DOC_TYPE_READ_VERSION => row("DocTypeReadVersion", Unsigned, Intern),
        DOC_TYPE_EXTENSION => row("DocTypeExtension", Master, Intern),
        DOC_TYPE_EXTENSION_NAME => row("DocTypeExtensionName", String, Intern),
        DOC_TYPE_EXTENSION_VERSION => row("DocTypeExtensionVersion", Unsigned, Intern),

        // Global
        VOID => row("Void", Binary, Skip),
        CRC32 => row("CRC-32", Binary, Special),

        // Segment
        SEGMENT => row("Segment", Master, Intern),

        // Seek index
        SEEK_HEAD => row("SeekHead", Master, Intern),
        SEEK => row("Seek", Master, Intern),
        SEEK_ID => row("SeekID", Binary, Intern),
        SEEK_POSITION => row("SeekPosition", Unsigned, Special),

        // Segment info
        INFO => row("Info", Master, Intern),
        SEGMENT_UID => row("SegmentUID", Uuid, Special),
        SEGMENT_FILENAME => row("SegmentFilename", Utf8, Intern),
        PREV_UID => row("PrevUID", Uuid, Special),
        PREV_FILENAME => row("PrevFilename", Utf8, Intern),
        NEXT_UID => row("NextUID", Uuid, Special),
        NEXT_FILENAME => row("NextFilename", Utf8, Intern),
        SEGMENT_FAMILY => row("SegmentFamily", Uuid, Special),
        CHAPTER_TRANSLATE => row("ChapterTranslate", Master, Intern),
        CHAPTER_TRANSLATE_CODEC => row("ChapterTranslateCodec", Unsigned, Intern),
        CHAPTER_TRANSLATE_EDITION_UID => row("ChapterTranslateEditionUID", Unsigned, Intern),
        CHAPTER_TRANSLATE_ID => row("ChapterTranslateID", Binary, Intern),
        TIMESTAMP_SCALE => row("TimestampScale", Unsigned, Intern),
        DURATION => row("Duration", Float, Intern),
        DATE_UTC => row("DateUTC", Date, Special),
        TITLE => row("Title", Utf8, Intern),
        MUXING_APP => row("MuxingApp", Utf8, Intern),
        WRITING_APP => row("WritingApp", Utf8, Intern),

        // Clusters and blocks
        CLUSTER => row("Cluster", Master, Special),
        TIMESTAMP => row("Timestamp", Unsigned, Intern),
        SILENT_TRACKS => row("SilentTracks", Master, Intern),
        SILENT_TRACK_NUMBER => row("SilentTrackNumber", Unsigned, Intern),
        POSITION => row("Position", Unsigned, Intern),
        PREV_SIZE => row("PrevSize", Unsigned, Intern),
        SIMPLE_BLOCK => row("SimpleBlock", Binary, Skip),
        BLOCK_GROUP => row("BlockGroup", Master, Intern),
        BLOCK => row("Block", Binary, Skip),
        BLOCK_VIRTUAL => row("BlockVirtual", Binary, Skip),
        BLOCK_ADDITIONS => row("BlockAdditions", Master, Intern),
        BLOCK_MORE => row("BlockMore", Master, Intern),
        BLOCK_ADD_ID => row("BlockAddID", Unsigned, Intern),
        BLOCK_ADDITIONAL => row("BlockAdditional", Binary, Skip),
        BLOCK_DURATION => row("BlockDuration", Unsigned, Intern),
        REFERENCE_PRIORITY => row("ReferencePriority", Unsigned, Intern),
        REFERENCE_BLOCK => row("ReferenceBlock", Signed, Intern),
        REFERENCE_VIRTUAL => row("ReferenceVirtual", Signed, Intern),
        CODEC_STATE => row("CodecState", Binary, Skip),
        DISCARD_PADDING => row("DiscardPadding", Signed, Intern),
        SLICES => row("Slices", Master, Intern),
        TIME_SLICE => row("TimeSlice", Master, Intern),
        LACE_NUMBER => row("LaceNumber", Unsigned, Intern),
        FRAME_NUMBER => row("FrameNumber", Unsigned, Intern),
        BLOCK_ADDITION_ID => row("BlockAdditionID", Unsigned, Intern),
        DELAY => row("Delay", Unsigned, Intern),
        SLICE_DURATION => row("SliceDuration", Unsigned, Intern),
        REFERENCE_FRAME => row("ReferenceFrame", Master, Intern),
        REFERENCE_OFFSET => row("ReferenceOffset", Unsigned, Intern),
        REFERENCE_TIMESTAMP => row("ReferenceTimestamp", Unsigned, Intern),
        ENCRYPTED_BLOCK => row("EncryptedBlock", Binary, Skip),

        // Tracks
        TRACKS => row("Tracks", Master, Intern),
        TRACK_ENTRY => row("TrackEntry", Master, Intern),
        TRACK_NUMBER => row("TrackNumber", Unsigned, Intern),
        TRACK_UID => row("TrackUID", Unsigned, Intern),
        TRACK_TYPE => row("TrackType", TrackType, Special),
        FLAG_ENABLED => row("FlagEnabled", Unsigned, Intern),
        FLAG_DEFAULT => row("FlagDefault", Unsigned, Intern),
        FLAG_FORCED => row("FlagForced", Unsigned, Intern),
        FLAG_HEARING_IMPAIRED => row("FlagHearingImpaired", Unsigned, Intern),
        FLAG_VISUAL_IMPAIRED => row("FlagVisualImpaired", Unsigned, Intern),
        FLAG_TEXT_DESCRIPTIONS => row("FlagTextDescriptions", Unsigned, Intern),
        FLAG_ORIGINAL => row("FlagOriginal", Unsigned, Intern),
        FLAG_COMMENTARY => row("FlagCommentary", Unsigned, Intern),
        FLAG_LACING => row("FlagLacing", Unsigned, Intern),
        MIN_CACHE => row("MinCache", Unsigned, Intern),
        MAX_CACHE => row("MaxCache", Unsigned, Intern),
        DEFAULT_DURATION => row("DefaultDuration", Unsigned, Intern),
        DEFAULT_DECODED_FIELD_DURATION => row("DefaultDecodedFieldDuration", Unsigned, Intern),
        TRACK_TIMESTAMP_SCALE => row("TrackTimestampScale", Float, Intern),
        TRACK_OFFSET => row("TrackOffset", Signed, Intern),
        MAX_BLOCK_ADDITION_ID => row("MaxBlockAdditionID", Unsigned, Intern),
        BLOCK_ADDITION_MAPPING => row("BlockAdditionMapping", Master, Intern),
        BLOCK_ADD_ID_VALUE => row("BlockAddIDValue", Unsigned, Intern),
        BLOCK_ADD_ID_NAME => row("BlockAddIDName", String, Intern),
        BLOCK_ADD_ID_TYPE => row("BlockAddIDType", Unsigned, Intern),
        BLOCK_ADD_ID_EXTRA_DATA => row("BlockAddIDExtraData", Binary, Intern),
        NAME => row("Name", Utf8, Intern),
        LANGUAGE => row("Language", String, Intern),
        LANGUAGE_BCP47 => row("LanguageBCP47", String, Intern),
        CODEC_ID => row("CodecID", String, Intern),
        CODEC_PRIVATE => row("CodecPrivate", Binary, Skip),
        CODEC_NAME => row("CodecName", Utf8, Intern),
        ATTACHMENT_LINK => row("AttachmentLink", Unsigned, Intern),
        CODEC_SETTINGS => row("CodecSettings", Utf8, Intern),
        CODEC_INFO_URL => row("CodecInfoURL", String, Intern),
        CODEC_DOWNLOAD_URL => row("CodecDownloadURL", String, Intern),
        CODEC_DECODE_ALL => row("CodecDecodeAll", Unsigned, Intern),
        TRACK_OVERLAY => row("TrackOverlay", Unsigned, Intern),
        CODEC_DELAY => row("CodecDelay", Unsigned, Intern),
        SEEK_PRE_ROLL => row("SeekPreRoll", Unsigned, Intern),
        TRACK_TRANSLATE => row("TrackTranslate", Master, Intern),
        TRACK_TRANSLATE_TRACK_ID => row("TrackTranslateTrackID", Binary, Intern),
        TRACK_TRANSLATE_CODEC => row("TrackTranslateCodec", Unsigned, Intern),
        TRACK_TRANSLATE_EDITION_UID => row("TrackTranslateEditionUID", Unsigned, Intern),
        TRACK_OPERATION => row("TrackOperation", Master, Intern),
        TRACK_COMBINE_PLANES => row("TrackCombinePlanes", Master, Intern),
        TRACK_PLANE => row("TrackPlane", Master, Intern),
        TRACK_PLANE_UID => row("TrackPlaneUID", Unsigned, Intern),
        TRACK_PLANE_TYPE => row("TrackPlaneType", Unsigned, Intern),
        TRACK_JOIN_BLOCKS => row("TrackJoinBlocks", Master, Intern),
        TRACK_JOIN_UID => row("TrackJoinUID", Unsigned, Intern),
        TRICK_TRACK_UID => row("TrickTrackUID", Unsigned, Intern),
        TRICK_TRACK_SEGMENT_UID => row("TrickTrackSegmentUID", Binary, Intern),
        TRICK_TRACK_FLAG => row("TrickTrackFlag", Unsigned, Intern),
        TRICK_MASTER_TRACK_UID => row("TrickMasterTrackUID", Unsigned, Intern),
        TRICK_MASTER_TRACK_SEGMENT_UID => row("TrickMasterTrackSegmentUID", Binary, Intern),

        // Video settings
        VIDEO => row("Video", Master, Intern),
        FLAG_INTERLACED => row("FlagInterlaced", Unsigned, Intern),
        FIELD_ORDER => row("FieldOrder", Unsigned, Intern),
        STEREO_MODE => row("StereoMode", Unsigned, Intern),
        OLD_STEREO_MODE => row("OldStereoMode", Unsigned, Intern),
        ALPHA_MODE => row("AlphaMode", Unsigned, Intern),
        PIXEL_WIDTH => row("PixelWidth", Unsigned, Intern),
        PIXEL_HEIGHT => row("PixelHeight", Unsigned, Intern),
        PIXEL_CROP_BOTTOM => row("PixelCropBottom", Unsigned, Intern),
        PIXEL_CROP_TOP => row("PixelCropTop", Unsigned, Intern),
        PIXEL_CROP_LEFT => row("PixelCropLeft", Unsigned, Intern),
        PIXEL_CROP_RIGHT => row("PixelCropRight", Unsigned, Intern),
        DISPLAY_WIDTH => row("DisplayWidth", Unsigned, Intern),
        DISPLAY_HEIGHT => row("DisplayHeight", Unsigned, Intern),
        DISPLAY_UNIT => row("DisplayUnit", Unsigned, Intern),
        ASPECT_RATIO_TYPE => row("AspectRatioType", Unsigned, Intern),
        UNCOMPRESSED_FOUR_CC => row("UncompressedFourCC", Binary, Intern),
        GAMMA_VALUE => row("GammaValue", Float, Intern),
        FRAME_RATE => row("FrameRate", Float, Intern),
        COLOUR => row("Colour", Master, Intern),
        MATRIX_COEFFICIENTS => row("MatrixCoefficients", Unsigned, Intern),
        BITS_PER_CHANNEL => row("BitsPerChannel", Unsigned, Intern),
        CHROMA_SUBSAMPLING_HORZ => row("ChromaSubsamplingHorz", Unsigned, Intern),
        CHROMA_SUBSAMPLING_VERT => row("ChromaSubsamplingVert", Unsigned, Intern),
        CB_SUBSAMPLING_HORZ => row("CbSubsamplingHorz", Unsigned, Intern),
        CB_SUBSAMPLING_VERT => row("CbSubsamplingVert", Unsigned, Intern),
        CHROMA_SITING_HORZ => row("ChromaSitingHorz", Unsigned, Intern),
        CHROMA_SITING_VERT => row("ChromaSitingVert", Unsigned, Intern),
        RANGE => row("Range", Unsigned, Intern),
        TRANSFER_CHARACTERISTICS => row("TransferCharacteristics", Unsigned, Intern),
        PRIMARIES => row("Primaries", Unsigned, Intern),
        MAX_CLL => row("MaxCLL", Unsigned, Intern),
        MAX_FALL => row("MaxFALL", Unsigned, Intern),
        MASTERING_METADATA => row("MasteringMetadata", Master, Intern),
        PRIMARY_R_CHROMATICITY_X => row("PrimaryRChromaticityX", Float, Intern),
        PRIMARY_R_CHROMATICITY_Y => row("PrimaryRChromaticityY", Float, Intern),
        PRIMARY_G_CHROMATICITY_X => row("PrimaryGChromaticityX", Float, Intern),
        PRIMARY_G_CHROMATICITY_Y => row("PrimaryGChromaticityY", Float, Intern),
        PRIMARY_B_CHROMATICITY_X => row("PrimaryBChromaticityX", Float, Intern),
        PRIMARY_B_CHROMATICITY_Y => row("PrimaryBChromaticityY", Float, Intern),
        WHITE_POINT_CHROMATICITY_X => row("WhitePointChromaticityX", Float, Intern),
        WHITE_POINT_CHROMATICITY_Y => row("WhitePointChromaticityY", Float, Intern),
        LUMINANCE_MAX => row("LuminanceMax", Float, Intern),
        LUMINANCE_MIN => row("LuminanceMin", Float, Intern),
        PROJECTION => row("Projection", Master, Intern),
        PROJECTION_TYPE => row("ProjectionType", Unsigned, Intern),
        PROJECTION_PRIVATE => row("ProjectionPrivate", Binary, Skip),
        PROJECTION_POSE_YAW => row("ProjectionPoseYaw", Float, Intern),
        PROJECTION_POSE_PITCH => row("ProjectionPosePitch", Float, Intern),
        PROJECTION_POSE_ROLL => row("ProjectionPoseRoll", Float, Intern),

        // Audio settings
        AUDIO => row("Audio", Master, Intern),
        SAMPLING_FREQUENCY => row("SamplingFrequency", Float, Intern),
        OUTPUT_SAMPLING_FREQUENCY => row("OutputSamplingFrequency", Float, Intern),
        CHANNELS => row("Channels", Unsigned, Intern),
        CHANNEL_POSITIONS => row("ChannelPositions", Binary, Intern),
        BIT_DEPTH => row("BitDepth", Unsigned, Intern),
        EMPHASIS => row("Emphasis", Unsigned, Intern),

        // Content encodings
        CONTENT_ENCODINGS => row("ContentEncodings", Master, Intern),
        CONTENT_ENCODING => row("ContentEncoding", Master, Intern),
        CONTENT_ENCODING_ORDER => row("ContentEncodingOrder", Unsigned, Intern),
        CONTENT_ENCODING_SCOPE => row("ContentEncodingScope", Unsigned, Intern),
        CONTENT_ENCODING_TYPE => row("ContentEncodingType", Unsigned, Intern),
        CONTENT_COMPRESSION => row("ContentCompression", Master, Intern),
        CONTENT_COMP_ALGO => row("ContentCompAlgo", Unsigned, Intern),
        CONTENT_COMP_SETTINGS => row("ContentCompSettings", Binary, Skip),
        CONTENT_ENCRYPTION => row("ContentEncryption", Master, Intern),
        CONTENT_ENC_ALGO => row("ContentEncAlgo", Unsigned, Intern),
        CONTENT_ENC_KEY_ID => row("ContentEncKeyID", Binary, Skip),
        CONTENT_ENC_AES_SETTINGS => row("ContentEncAESSettings", Master, Intern),
        AES_SETTINGS_CIPHER_MODE => row("AESSettingsCipherMode", Unsigned, Intern),
        CONTENT_SIGNATURE => row("ContentSignature", Binary, Intern),
        CONTENT_SIG_KEY_ID => row("ContentSigKeyID", Binary, Intern),
        CONTENT_SIG_ALGO => row("ContentSigAlgo", Unsigned, Intern),
        CONTENT_SIG_HASH_ALGO => row("ContentSigHashAlgo", Unsigned, Intern),

        // Cues
        CUES => row("Cues", Master, Intern),
        CUE_POINT => row("CuePoint", Master, Intern),
        CUE_TIME => row("CueTime", Unsigned, Intern),
        CUE_TRACK_POSITIONS => row("CueTrackPositions", Master, Intern),
        CUE_TRACK => row("CueTrack", Unsigned, Intern),
        CUE_CLUSTER_POSITION => row("CueClusterPosition", Unsigned, Intern),
        CUE_RELATIVE_POSITION => row("CueRelativePosition", Unsigned, Intern),
        CUE_DURATION => row("CueDuration", Unsigned, Intern),
        CUE_BLOCK_NUMBER => row("CueBlockNumber", Unsigned, Intern),
        CUE_CODEC_STATE => row("CueCodecState", Unsigned, Intern),
        CUE_REFERENCE => row("CueReference", Master, Intern),
        CUE_REF_TIME => row("CueRefTime", Unsigned, Intern),
        CUE_REF_CLUSTER => row("CueRefCluster", Unsigned, Intern),
        CUE_REF_NUMBER => row("CueRefNumber", Unsigned, Intern),
        CUE_REF_CODEC_STATE => row("CueRefCodecState", Unsigned, Intern),

        // Attachments
        ATTACHMENTS => row("Attachments", Master, Intern),
        ATTACHED_FILE => row("AttachedFile", Master, Intern),
        FILE_DESCRIPTION => row("FileDescription", Utf8, Intern),
        FILE_NAME => row("FileName", Utf8, Intern),
        FILE_MEDIA_TYPE => row("FileMediaType", String, Intern),
        FILE_DATA => row("FileData", Binary, Skip),
        FILE_UID => row("FileUID", Unsigned, Intern),
        FILE_REFERRAL => row("FileReferral", Binary, Intern),
        FILE_USED_START_TIME => row("FileUsedStartTime", Unsigned, Intern),
        FILE_USED_END_TIME => row("FileUsedEndTime", Unsigned, Intern),

        // Chapters
        CHAPTERS => row("Chapters", Master, Intern),
        EDITION_ENTRY => row("EditionEntry", Master, Intern),
        EDITION_UID => row("EditionUID", Unsigned, Intern),
        EDITION_FLAG_HIDDEN => row("EditionFlagHidden", Unsigned, Intern),
        EDITION_FLAG_DEFAULT => row("EditionFlagDefault", Unsigned, Intern),
        EDITION_FLAG_ORDERED => row("EditionFlagOrdered", Unsigned, Intern),
        EDITION_DISPLAY => row("EditionDisplay", Master, Intern),
        EDITION_STRING => row("EditionString", Utf8, Intern),
        EDITION_LANGUAGE_IETF => row("EditionLanguageIETF", String, Intern),
        CHAPTER_ATOM => row("ChapterAtom", Master, Intern),
        CHAPTER_UID => row("ChapterUID", Unsigned, Intern),
        CHAPTER_STRING_UID => row("ChapterStringUID", Utf8, Intern),
        CHAPTER_TIME_START => row("ChapterTimeStart", Unsigned, Intern),
        CHAPTER_TIME_END => row("ChapterTimeEnd", Unsigned, Intern),
        CHAPTER_FLAG_HIDDEN => row("ChapterFlagHidden", Unsigned, Intern),
        CHAPTER_FLAG_ENABLED => row("ChapterFlagEnabled", Unsigned, Intern),
        CHAPTER_SEGMENT_UID => row("ChapterSegmentUID", Binary, Intern),
        CHAPTER_SEGMENT_EDITION_UID => row("ChapterSegmentEditionUID", Unsigned, Intern),
        CHAPTER_PHYSICAL_EQUIV => row("ChapterPhysicalEquiv", Unsigned, Intern),
        CHAPTER_SKIP_TYPE => row("ChapterSkipType", Unsigned, Intern),
        CHAPTER_TRACK => row("ChapterTrack", Master, Intern),
        CHAPTER_TRACK_UID => row("ChapterTrackUID", Unsigned, Intern),
        CHAPTER_DISPLAY => row("ChapterDisplay", Master, Intern),
        CHAP_STRING => row("ChapString", Utf8, Intern),
        CHAP_LANGUAGE => row("ChapLanguage", String, Intern),
        CHAP_LANGUAGE_BCP47 => row("ChapLanguageBCP47", String, Intern),
        CHAP_COUNTRY => row("ChapCountry", String, Intern),
        CHAP_PROCESS => row("ChapProcess", Master, Intern),
        CHAP_PROCESS_CODEC_ID => row("ChapProcessCodecID", Unsigned, Intern),
        CHAP_PROCESS_PRIVATE => row("ChapProcessPrivate", Binary, Intern),
        CHAP_PROCESS_COMMAND => row("ChapProcessCommand", Master, Intern),
        CHAP_PROCESS_TIME => row("ChapProcessTime", Unsigned, Intern),
        CHAP_PROCESS_DATA => row("ChapProcessData", Binary, Intern),

        // Tags
        TAGS => row("Tags", Master, Intern),
        TAG => row("Tag", Master, Intern),
        TARGETS => row("Targets", Master, Intern),
        TARGET_TYPE_VALUE => row("TargetTypeValue", Unsigned, Intern),
        TARGET_TYPE => row("TargetType", String, Intern),
        TAG_TRACK_UID => row("TagTrackUID", Unsigned, Intern),
        TAG_EDITION_UID => row("TagEditionUID", Unsigned, Intern),
        TAG_CHAPTER_UID => row("TagChapterUID", Unsigned, Intern),
        TAG_ATTACHMENT_UID => row("TagAttachmentUID", Unsigned, Intern),
        SIMPLE_TAG => row("SimpleTag", Master, Intern),
        TAG_NAME => row("TagName", Utf8, Intern),
        TAG_LANGUAGE => row("TagLanguage", String, Intern),
        TAG_LANGUAGE_BCP47 => row("TagLanguageBCP47", String, Intern),
        TAG_DEFAULT => row("TagDefault", Unsigned, Intern),
        TAG_DEFAULT_BOGUS => row("TagDefaultBogus", Unsigned, Intern),
        TAG_STRING => row("TagString", Utf8, Intern),
        TAG_BINARY => row("TagBinary", Binary, Intern),

        _ => None,
    }
}

/// The element's specification name, if the ID is known.
pub fn element_name(id: u64) -> Option<&'static str> {
    element_info(id).map(|info| info.name)
}

/// Whether the ID names a master element.
pub fn is_master(id: u64) -> bool {
    matches!(
        element_info(id),
        Some(ElementInfo {
            kind: ElementKind::Master,
            ..
        })
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_ids() {
        assert_eq!(EBML, 0x1A45DFA3);
        assert_eq!(SEGMENT, 0x18538067);
        assert_eq!(CLUSTER, 0x1F43B675);
        assert_eq!(TRACKS, 0x1654AE6B);
        assert_eq!(CUES, 0x1C53BB6B);
    }

    #[test]
    fn test_kinds_and_dispositions() {
        let info = element_info(SEGMENT).unwrap();
        assert_eq!(info.kind, ElementKind::Master);
        assert_eq!(info.disposition, Disposition::Intern);

        let info = element_info(SIMPLE_BLOCK).unwrap();
        assert_eq!(info.kind, ElementKind::Binary);
        assert_eq!(info.disposition, Disposition::Skip);

        let info = element_info(SEEK_POSITION).unwrap();
        assert_eq!(info.disposition, Disposition::Special);

        let info = element_info(TRACK_TYPE).unwrap();
        assert_eq!(info.kind, ElementKind::TrackType);

        let info = element_info(DATE_UTC).unwrap();
        assert_eq!(info.kind, ElementKind::Date);

        // Interned as float, not skipped, across all code paths.
        let info = element_info(OUTPUT_SAMPLING_FREQUENCY).unwrap();
        assert_eq!(info.kind, ElementKind::Float);
        assert_eq!(info.disposition, Disposition::Intern);
    }

    #[test]
    fn test_uid_family_is_uuid() {
        for id in [SEGMENT_UID, PREV_UID, NEXT_UID, SEGMENT_FAMILY] {
            let info = element_info(id).unwrap();
            assert_eq!(info.kind, ElementKind::Uuid);
            assert_eq!(info.disposition, Disposition::Special);
        }
    }

    #[test]
    fn test_never_interned_payloads() {
        for id in [
            BLOCK,
            SIMPLE_BLOCK,
            FILE_DATA,
            CODEC_PRIVATE,
            CONTENT_COMP_SETTINGS,
            CONTENT_ENC_KEY_ID,
            PROJECTION_PRIVATE,
        ] {
            assert_eq!(
                element_info(id).unwrap().disposition,
                Disposition::Skip,
                "id {:#X}",
                id
            );
        }
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(element_info(0x7FFF_0001).is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(element_name(CODEC_ID), Some("CodecID"));
        assert_eq!(element_name(LANGUAGE), Some("Language"));
        assert_eq!(element_name(0xDEADBEEF), None);
    }

    #[test]
    fn test_is_master() {
        assert!(is_master(EBML));
        assert!(is_master(TRACK_ENTRY));
        assert!(!is_master(TRACK_NUMBER));
        assert!(!is_master(0x123456));
    }
}
