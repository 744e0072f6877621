//! Property tests for the VINT codec and the scalar payload decoders:
//! encoding a decoded value must reproduce the original bytes, and decoding
//! an encoded value must reproduce the original number.

use mediatree_core::{value, Reader};
use mediatree_mkv::vint;
use proptest::prelude::*;
use std::io::Cursor;

/// Minimal-width VINT encoder, the inverse of `vint::read_vint`.
fn encode_vint(value: u64) -> Vec<u8> {
    let mut width = 1usize;
    while width < 8 && value >= (1u64 << (7 * width)) - 1 {
        width += 1;
    }
    let mut out = vec![0u8; width];
    let mut v = value;
    for slot in out.iter_mut().rev() {
        *slot = (v & 0xFF) as u8;
        v >>= 8;
    }
    out[0] |= 0x80 >> (width - 1);
    out
}

/// Minimal big-endian encoding of an unsigned integer.
fn encode_unsigned(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(7);
    bytes[start..].to_vec()
}

/// Minimal big-endian two's-complement encoding of a signed integer.
fn encode_signed(value: i64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let mut start = 0;
    while start < 7 {
        let cut = bytes[start];
        let next_top = bytes[start + 1] & 0x80;
        let redundant = (cut == 0x00 && next_top == 0) || (cut == 0xFF && next_top != 0);
        if !redundant {
            break;
        }
        start += 1;
    }
    bytes[start..].to_vec()
}

proptest! {
    #[test]
    fn vint_roundtrip(value in 0u64..(1u64 << 56) - 1) {
        let encoded = encode_vint(value);
        let mut reader = Reader::new(Cursor::new(encoded.clone())).unwrap();
        let (decoded, width) = vint::read_vint(&mut reader).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(width as usize, encoded.len());
    }

    #[test]
    fn unsigned_roundtrip(value: u64) {
        let encoded = encode_unsigned(value);
        prop_assert!(encoded.len() <= 8);
        prop_assert_eq!(value::read_unsigned(&encoded).unwrap(), value);
    }

    #[test]
    fn signed_roundtrip(value: i64) {
        let encoded = encode_signed(value);
        prop_assert!(encoded.len() <= 8);
        prop_assert_eq!(value::read_signed(&encoded).unwrap(), value);
    }

    #[test]
    fn float_roundtrip(value: f64) {
        let bytes = value.to_bits().to_be_bytes();
        let decoded = value::read_float(&bytes).unwrap();
        prop_assert_eq!(decoded.to_bits(), value.to_bits());
    }

    #[test]
    fn float32_roundtrip(value: f32) {
        let bytes = value.to_bits().to_be_bytes();
        let decoded = value::read_float(&bytes).unwrap();
        if value.is_nan() {
            prop_assert!(decoded.is_nan());
        } else {
            prop_assert_eq!(decoded as f32, value);
        }
    }

    #[test]
    fn printable_roundtrip(text in "[ -~]{0,64}") {
        let decoded = value::read_printable(text.as_bytes()).unwrap();
        prop_assert_eq!(decoded.as_bytes(), text.as_bytes());
    }

    #[test]
    fn utf8_roundtrip(text in "\\PC{0,32}") {
        let text = text.replace('\u{0}', "");
        let decoded = value::read_utf8(text.as_bytes());
        prop_assert_eq!(decoded.as_bytes(), text.as_bytes());
    }

    #[test]
    fn uuid_roundtrip(bytes in proptest::array::uniform16(any::<u8>())) {
        let uuid = value::Uuid::from_slice(&bytes).unwrap();
        prop_assert_eq!(uuid.to_bytes(), bytes);
    }
}
