//! Integration tests driving the BMFF parser over synthetic files built in
//! memory.

use mediatree_bmff::{BmffError, BmffFile, BmffOptions, BoxValue, MetaValue};
use mediatree_core::FourCc;
use std::io::Cursor;

// ===== fixture builders =====

fn boxed(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + payload.len());
    out.extend_from_slice(&(8 + payload.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(payload);
    out
}

fn container(kind: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
    let payload: Vec<u8> = children.iter().flatten().copied().collect();
    boxed(kind, &payload)
}

fn ftyp() -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(b"isom");
    payload.extend_from_slice(&0u32.to_be_bytes());
    payload.extend_from_slice(b"isommp42");
    boxed(b"ftyp", &payload)
}

fn mvhd(time_scale: u32, duration: u32) -> Vec<u8> {
    let mut payload = vec![0u8; 100];
    payload[12..16].copy_from_slice(&time_scale.to_be_bytes());
    payload[16..20].copy_from_slice(&duration.to_be_bytes());
    payload[20..24].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    payload[24..26].copy_from_slice(&0x0100u16.to_be_bytes());
    payload[96..100].copy_from_slice(&2u32.to_be_bytes());
    boxed(b"mvhd", &payload)
}

fn tkhd(track_id: u32) -> Vec<u8> {
    let mut payload = vec![0u8; 84];
    payload[3] = 0x01;
    payload[12..16].copy_from_slice(&track_id.to_be_bytes());
    boxed(b"tkhd", &payload)
}

fn mdhd(time_scale: u32) -> Vec<u8> {
    let mut payload = vec![0u8; 24];
    payload[12..16].copy_from_slice(&time_scale.to_be_bytes());
    payload[16..20].copy_from_slice(&1000u32.to_be_bytes());
    boxed(b"mdhd", &payload)
}

fn hdlr(handler: &[u8; 4], name: &str) -> Vec<u8> {
    let mut payload = vec![0u8; 24];
    payload[8..12].copy_from_slice(handler);
    payload.extend_from_slice(name.as_bytes());
    payload.push(0);
    boxed(b"hdlr", &payload)
}

fn data_atom(type_code: u32, value: &[u8]) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&type_code.to_be_bytes());
    payload.extend_from_slice(&0u32.to_be_bytes());
    payload.extend_from_slice(value);
    boxed(b"data", &payload)
}

fn meta_with_ilst(ilst_children: &[Vec<u8>]) -> Vec<u8> {
    let ilst = container(b"ilst", ilst_children);
    let mut payload = vec![0u8; 4]; // version/flags prefix
    payload.extend_from_slice(&ilst);
    boxed(b"meta", &payload)
}

fn parse(data: Vec<u8>, options: &BmffOptions) -> mediatree_bmff::Result<BmffFile<Cursor<Vec<u8>>>> {
    let mut file = BmffFile::from_reader(Cursor::new(data))?;
    file.parse(options)?;
    Ok(file)
}

// ===== tests =====

#[test]
fn parses_metadata_file() {
    let data: Vec<u8> = [
        ftyp(),
        container(
            b"moov",
            &[
                mvhd(600, 1200),
                container(
                    b"trak",
                    &[
                        tkhd(1),
                        container(b"mdia", &[mdhd(48000), hdlr(b"soun", "SoundHandler")]),
                    ],
                ),
            ],
        ),
        boxed(b"mdat", &[0xAA; 32]),
    ]
    .into_iter()
    .flatten()
    .collect();
    let size = data.len() as u64;

    let file = parse(data, &BmffOptions::default()).unwrap();
    let summary = file.summary();
    assert!(summary.ftyp.is_some());
    assert!(summary.moov.is_some());
    assert!(summary.mvhd.is_some());
    assert!(summary.mdat.is_some());
    assert_eq!(summary.time_scale, 600);

    file.tree().verify_shape(size).unwrap();

    match file.value_at_path(&["moov", "mvhd"]).unwrap() {
        BoxValue::MovieHeader(header) => {
            assert_eq!(header.time_scale, 600);
            assert_eq!(header.duration, 1200);
        }
        other => panic!("expected movie header, got {:?}", other),
    }
    match file
        .value_at_path(&["moov", "trak", "mdia", "hdlr"])
        .unwrap()
    {
        BoxValue::Handler(handler) => assert_eq!(handler.name, "SoundHandler"),
        other => panic!("expected handler, got {:?}", other),
    }
}

#[test]
fn missing_ftyp_is_synthesised() {
    // Exactly the eight bytes of an empty moov box.
    let data = vec![0, 0, 0, 8, b'm', b'o', b'o', b'v'];
    let file = parse(data, &BmffOptions::default()).unwrap();

    let root = file.tree().root();
    let first = file.tree().node(root).first_child().unwrap();
    let node = file.tree().node(first);
    assert_eq!(node.id, u32::from_be_bytes(*b"ftyp") as u64);
    assert!(node.synthetic);
    assert_eq!(node.size, 0);
    match &node.payload {
        BoxValue::FileType(ftyp) => {
            assert_eq!(ftyp.major_brand, FourCc(*b"mp41"));
            assert_eq!(ftyp.minor_version, 0);
            assert_eq!(ftyp.compatible_brands, vec![FourCc(*b"mp41")]);
        }
        other => panic!("expected file type, got {:?}", other),
    }

    // The real moov is the synthetic node's sibling, not its child.
    let moov = node.next_sibling().unwrap();
    assert_eq!(file.tree().node(moov).id, u32::from_be_bytes(*b"moov") as u64);
    assert_eq!(file.summary().ftyp, Some(first));
}

#[test]
fn duplicate_ftyp_is_rejected() {
    let data: Vec<u8> = [ftyp(), ftyp()].into_iter().flatten().collect();
    let err = parse(data, &BmffOptions::default()).unwrap_err();
    assert!(matches!(err, BmffError::FtypDuplicated { offset: 24 }));
}

#[test]
fn misplaced_boxes_are_rejected() {
    // udta directly at top level.
    let data: Vec<u8> = [ftyp(), container(b"udta", &[])]
        .into_iter()
        .flatten()
        .collect();
    let err = parse(data, &BmffOptions::default()).unwrap_err();
    assert!(matches!(err, BmffError::WrongFileFormat { .. }));

    // hdlr outside mdia/meta.
    let data: Vec<u8> = [
        ftyp(),
        container(b"moov", &[hdlr(b"vide", "VideoHandler")]),
    ]
    .into_iter()
    .flatten()
    .collect();
    let err = parse(data, &BmffOptions::default()).unwrap_err();
    assert!(matches!(err, BmffError::HdlrUnexpectedParent { .. }));
}

#[test]
fn unknown_version_is_fatal() {
    let mut bad = mvhd(600, 1200);
    bad[8] = 3; // version byte inside the payload
    let data: Vec<u8> = [ftyp(), container(b"moov", &[bad])]
        .into_iter()
        .flatten()
        .collect();
    let err = parse(data, &BmffOptions::default()).unwrap_err();
    assert!(matches!(err, BmffError::MvhdUnknownVersion { version: 3 }));
}

#[test]
fn edit_list_is_interned() {
    let mut elst_payload = vec![0u8; 8];
    elst_payload[4..8].copy_from_slice(&2u32.to_be_bytes());
    for (duration, time) in [(300u32, -1i32), (900, 0)] {
        elst_payload.extend_from_slice(&duration.to_be_bytes());
        elst_payload.extend_from_slice(&time.to_be_bytes());
        elst_payload.extend_from_slice(&1u16.to_be_bytes());
        elst_payload.extend_from_slice(&0u16.to_be_bytes());
    }
    let data: Vec<u8> = [
        ftyp(),
        container(
            b"moov",
            &[container(
                b"trak",
                &[container(b"edts", &[boxed(b"elst", &elst_payload)])],
            )],
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    let file = parse(data, &BmffOptions::default()).unwrap();
    let elst = file.find_boxes(b"elst")[0];
    match &file.tree().node(elst).payload {
        BoxValue::EditList(entries) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].media_time, -1);
            assert_eq!(entries[1].segment_duration, 900);
        }
        other => panic!("expected edit list, got {:?}", other),
    }
}

#[test]
fn itunes_metadata_is_folded_into_tags() {
    let name_tag = container(&[0xA9, b'n', b'a', b'm'], &[data_atom(1, b"A Song")]);
    let mut trkn_value = vec![0u8; 8];
    trkn_value[2..4].copy_from_slice(&3u16.to_be_bytes());
    trkn_value[4..6].copy_from_slice(&12u16.to_be_bytes());
    let trkn_tag = container(b"trkn", &[data_atom(0, &trkn_value)]);
    let covr_tag = container(b"covr", &[data_atom(13, &[0xFF, 0xD8, 0xFF, 0xE0])]);

    let mean = {
        let mut payload = vec![0u8; 4];
        payload.extend_from_slice(b"com.apple.iTunes");
        boxed(b"mean", &payload)
    };
    let name = {
        let mut payload = vec![0u8; 4];
        payload.extend_from_slice(b"iTunNORM");
        boxed(b"name", &payload)
    };
    let extended = container(b"----", &[mean, name, data_atom(1, b"0.5")]);

    let udta = container(
        b"udta",
        &[meta_with_ilst(&[name_tag, trkn_tag, covr_tag, extended])],
    );
    let data: Vec<u8> = [ftyp(), container(b"moov", &[mvhd(600, 0), udta])]
        .into_iter()
        .flatten()
        .collect();
    let size = data.len() as u64;

    // Without the flag the list is skipped outright.
    let skipped = parse(data.clone(), &BmffOptions::default()).unwrap();
    let ilst = skipped.find_boxes(b"ilst")[0];
    assert!(skipped.tree().node(ilst).first_child().is_none());
    assert!(skipped.summary().itunes_metadata.is_empty());

    // With it, every tag carries its folded data payload.
    let file = parse(
        data,
        &BmffOptions {
            parse_metadata: true,
        },
    )
    .unwrap();
    file.tree().verify_shape(size).unwrap();
    let tags = &file.summary().itunes_metadata;
    assert_eq!(tags.len(), 4);

    match &file.tree().node(tags[0]).payload {
        BoxValue::Metadata(MetaValue::Text(text)) => assert_eq!(text, "A Song"),
        other => panic!("expected text, got {:?}", other),
    }
    match &file.tree().node(tags[1]).payload {
        BoxValue::Metadata(MetaValue::Track { current, total }) => {
            assert_eq!((*current, *total), (3, 12));
        }
        other => panic!("expected track numbers, got {:?}", other),
    }
    match &file.tree().node(tags[2]).payload {
        BoxValue::Metadata(MetaValue::Jpeg(bytes)) => assert_eq!(bytes.len(), 4),
        other => panic!("expected JPEG, got {:?}", other),
    }
    match &file.tree().node(tags[3]).payload {
        BoxValue::Extended(ext) => {
            assert_eq!(ext.mean, "com.apple.iTunes");
            assert_eq!(ext.name, "iTunNORM");
            assert_eq!(ext.value, MetaValue::Text("0.5".into()));
        }
        other => panic!("expected extended item, got {:?}", other),
    }
}

#[test]
fn uuid_box_captures_extended_type() {
    let mut uuid_box = Vec::new();
    uuid_box.extend_from_slice(&(8 + 16 + 4u32).to_be_bytes());
    uuid_box.extend_from_slice(b"uuid");
    uuid_box.extend_from_slice(&[
        0xBE, 0x7A, 0xCF, 0xCB, 0x97, 0xA9, 0x42, 0xE8, 0x9C, 0x71, 0x99, 0x94, 0x91, 0xE3,
        0xAF, 0xAC,
    ]);
    uuid_box.extend_from_slice(&[1, 2, 3, 4]);

    let data: Vec<u8> = [ftyp(), uuid_box].into_iter().flatten().collect();
    let file = parse(data, &BmffOptions::default()).unwrap();
    let node = file.find_boxes(b"uuid")[0];
    let uuid = file.tree().node(node).uuid.expect("uuid captured");
    assert_eq!(uuid.time_low, 0xBE7ACFCB);
    assert_eq!(file.tree().node(node).payload_size, 4);
}

#[test]
fn zero_size_box_runs_to_end_of_file() {
    let mut mdat = Vec::new();
    mdat.extend_from_slice(&0u32.to_be_bytes());
    mdat.extend_from_slice(b"mdat");
    mdat.extend_from_slice(&[0x55; 100]);

    let data: Vec<u8> = [ftyp(), mdat].into_iter().flatten().collect();
    let size = data.len() as u64;
    let file = parse(data, &BmffOptions::default()).unwrap();
    let node = file.find_boxes(b"mdat")[0];
    assert_eq!(file.tree().node(node).end, size - 1);
    assert_eq!(file.tree().node(node).payload_size, 100);
}

#[test]
fn extended_size_box_is_decoded() {
    let mut big = Vec::new();
    big.extend_from_slice(&1u32.to_be_bytes());
    big.extend_from_slice(b"mdat");
    big.extend_from_slice(&(16u64 + 24).to_be_bytes());
    big.extend_from_slice(&[0x77; 24]);

    let data: Vec<u8> = [ftyp(), big].into_iter().flatten().collect();
    let file = parse(data, &BmffOptions::default()).unwrap();
    let node = file.find_boxes(b"mdat")[0];
    assert_eq!(file.tree().node(node).size, 40);
    assert_eq!(file.tree().node(node).payload_size, 24);
}

#[test]
fn truncated_box_fails() {
    // moov claims 64 bytes but the file ends after 16.
    let mut data = ftyp();
    data.extend_from_slice(&64u32.to_be_bytes());
    data.extend_from_slice(b"moov");
    data.extend_from_slice(&[0; 8]);
    let err = parse(data, &BmffOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        BmffError::Core(mediatree_core::Error::FileEndedEarly { .. })
    ));
}

#[test]
fn header_bytes_redecode_to_captured_type() {
    let data: Vec<u8> = [ftyp(), container(b"moov", &[mvhd(600, 0)])]
        .into_iter()
        .flatten()
        .collect();
    let raw = data.clone();

    let file = parse(data, &BmffOptions::default()).unwrap();
    for node_id in file.tree().descendants(file.tree().root()) {
        let node = file.tree().node(node_id);
        if node.synthetic {
            continue;
        }
        let type_bytes = &raw[node.offset as usize + 4..node.offset as usize + 8];
        assert_eq!(u32::from_be_bytes(type_bytes.try_into().unwrap()) as u64, node.id);
    }
}

#[test]
fn empty_file_is_rejected() {
    let err = BmffFile::from_reader(Cursor::new(Vec::new())).unwrap_err();
    assert!(matches!(
        err,
        BmffError::Core(mediatree_core::Error::FileEmpty)
    ));
}
