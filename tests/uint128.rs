use uint128::{FormatError, Uint128};

use std::cmp::Ordering;

const HEX_TABLE: [(&str, u64, u64); 4] = [
    ("456", 0x0, 0x456),
    ("10000000000000456", 0x1, 0x456),
    ("e0000000000000009", 0xe, 0x9),
    ("10000000000000000", 0x1, 0x0),
];

const MAX_BYTES: [u8; 16] = [0xff; 16];

const ASCENDING_BYTES: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15,
];

const DESCENDING_BYTES: [u8; 16] = [
    0xff, 0xfe, 0xfd, 0xfc, 0xfb, 0xfa, 0xf0, 0xf9, 0xf8, 0xf7, 0xf6, 0xf5, 0xf4, 0xf3, 0xf2, 0xf1,
];

fn hex(s: &str) -> Uint128 {
    Uint128::from_hex_str(s).unwrap()
}

#[test]
fn uint128_consts() {
    assert_eq!(Uint128::ZERO, Uint128::from_u64(0));
    assert_eq!(Uint128::ONE, Uint128::from_u64(1));
    assert_eq!(Uint128::MAX, Uint128::from_parts(u64::MAX, u64::MAX));
    assert_eq!(Uint128::default(), Uint128::ZERO);
}

#[test]
fn uint128_from_u64() {
    for value in [u64::MAX, 0x0809_1011_1213_1415, 0xf8f7_f6f5_f4f3_f2f1] {
        let u = Uint128::from_u64(value);
        assert_eq!(u.high(), 0);
        assert_eq!(u.low(), value);
        assert_eq!(Uint128::from(value), u);
    }
}

#[test]
fn uint128_try_into_u64() {
    assert_eq!(u64::try_from(Uint128::from_u64(42)), Ok(42));
    assert!(u64::try_from(Uint128::from_parts(1, 0)).is_err());
}

#[test]
fn uint128_native_u128_roundtrip() {
    let native = 0x0001_0203_0405_0607_0809_1011_1213_1415u128;
    let value = Uint128::from(native);

    assert_eq!(value, Uint128::from_parts(0x0001_0203_0405_0607, 0x0809_1011_1213_1415));
    assert_eq!(u128::from(value), native);
}

#[test]
fn uint128_from_hex_table() {
    for (s, high, low) in HEX_TABLE {
        assert_eq!(hex(s), Uint128::from_parts(high, low), "parsing {s}");
    }
}

#[test]
fn uint128_hex_compact_table() {
    for (s, high, low) in HEX_TABLE {
        assert_eq!(Uint128::from_parts(high, low).to_hex_compact(), s);
    }
}

#[test]
fn uint128_hex_compact_edges() {
    assert_eq!(Uint128::ZERO.to_hex_compact(), "0");
    assert_eq!(Uint128::MAX.to_hex_compact(), "f".repeat(32));
    assert_eq!(
        Uint128::from_parts(1, 0x456).to_hex_compact(),
        format!("1{}", "0000000000000456")
    );
}

#[test]
fn uint128_hex_canonical() {
    let value = Uint128::from_parts(1, 0x456);

    assert_eq!(value.to_hex_canonical(), "0x00000000000000010000000000000456");
    assert_eq!(value.to_string(), value.to_hex_canonical());
    assert_eq!(Uint128::ZERO.to_string(), format!("0x{}", "0".repeat(32)));
    assert_eq!(Uint128::MAX.to_string(), format!("0x{}", "f".repeat(32)));
    assert_eq!(value.to_string().parse::<Uint128>().unwrap(), value);
}

#[test]
fn uint128_from_hex_full_width() {
    let s = "0123456789abcdefFEDCBA9876543210";
    let value = hex(s);

    assert_eq!(value, Uint128::from_parts(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210));
    assert_eq!(hex(""), Uint128::ZERO);
}

#[test]
fn uint128_from_hex_too_long() {
    let s = "1".repeat(33);

    assert_eq!(
        Uint128::from_hex_str(&s),
        Err(FormatError::HexTooLong { len: 33 })
    );
}

#[test]
fn uint128_from_hex_invalid_character() {
    assert!(matches!(
        Uint128::from_hex_str("xyz"),
        Err(FormatError::InvalidHexCharacter { c: 'x', index: 0 })
    ));
    assert!(Uint128::from_hex_str("0x1").is_err());
    assert!(Uint128::from_hex_str(" 1").is_err());
}

#[test]
fn uint128_to_be_bytes() {
    assert_eq!(Uint128::MAX.to_be_bytes(), MAX_BYTES);

    let ascending = Uint128::from_parts(0x0001_0203_0405_0607, 0x0809_1011_1213_1415);
    assert_eq!(ascending.to_be_bytes(), ASCENDING_BYTES);

    let descending = Uint128::from_parts(0xfffe_fdfc_fbfa_f0f9, 0xf8f7_f6f5_f4f3_f2f1);
    assert_eq!(<[u8; 16]>::from(descending), DESCENDING_BYTES);
}

#[test]
fn uint128_from_be_slice() {
    assert_eq!(Uint128::from_be_slice(&MAX_BYTES), Ok(Uint128::MAX));
    assert_eq!(
        Uint128::from_be_slice(&ASCENDING_BYTES),
        Ok(Uint128::from_parts(0x0001_0203_0405_0607, 0x0809_1011_1213_1415))
    );
    assert_eq!(
        Uint128::try_from(&DESCENDING_BYTES[..]),
        Ok(Uint128::from_parts(0xfffe_fdfc_fbfa_f0f9, 0xf8f7_f6f5_f4f3_f2f1))
    );
    assert_eq!(Uint128::from_be_slice(&[0x04, 0x56]), Ok(hex("456")));
}

#[test]
fn uint128_from_be_slice_too_long() {
    assert_eq!(
        Uint128::from_be_slice(&[0u8; 17]),
        Err(FormatError::BytesTooLong { len: 17 })
    );
}

#[test]
fn uint128_compare() {
    let small = Uint128::from_parts(0, u64::MAX);
    let big = Uint128::from_parts(1, 0);

    assert_eq!(small.compare(&big), Ordering::Less);
    assert_eq!(big.compare(&small), Ordering::Greater);
    assert_eq!(big.compare(&big), Ordering::Equal);
    assert!(Uint128::from_parts(1, 2) < Uint128::from_parts(1, 3));
    assert_eq!(Uint128::MAX.max(Uint128::ZERO), Uint128::MAX);
}

#[test]
fn uint128_xor_table() {
    let table = [
        ("1", "1", "0"),
        ("2", "1", "3"),
        ("e0000000000000009", "f0000000000000000", "10000000000000009"),
    ];

    for (s, x, expected) in table {
        assert_eq!(hex(s).xor(hex(x)), hex(expected));
        assert_eq!(hex(s) ^ hex(x), hex(expected));
    }
}

#[test]
fn uint128_and_or() {
    let a = Uint128::from_parts(0xff00, 0x0ff0);
    let b = Uint128::from_parts(0x0ff0, 0x00ff);

    assert_eq!(a & b, Uint128::from_parts(0x0f00, 0x00f0));
    assert_eq!(a | b, Uint128::from_parts(0xfff0, 0x0fff));
    assert_eq!(hex("2").or(hex("1")), hex("3"));
}

#[test]
fn uint128_add() {
    let sum = Uint128::from_u64(u64::MAX) + Uint128::from_u64(1);
    assert_eq!(sum, Uint128::from_parts(1, 0));

    let sum = Uint128::MAX + Uint128::from_u64(1);
    assert_eq!(sum, Uint128::ZERO);

    let sum = Uint128::MAX.wrapping_add(Uint128::MAX);
    assert_eq!(sum, Uint128::from_parts(u64::MAX, u64::MAX - 1));
}

#[test]
fn uint128_sub() {
    let diff = Uint128::MAX - Uint128::from_u64(1);
    assert_eq!(diff, Uint128::from_parts(u64::MAX, u64::MAX - 1));

    let diff = Uint128::ZERO.wrapping_sub(Uint128::from_u64(1));
    assert_eq!(diff, Uint128::MAX);
}

#[test]
fn uint128_ops_leave_operands_untouched() {
    let a = Uint128::from_parts(7, 9);
    let b = a;

    let _ = a + Uint128::ONE;
    let _ = a ^ a;

    assert_eq!(a, b);
    assert_eq!(a, Uint128::from_parts(7, 9));
}

#[test]
fn uint128_leading_zeros() {
    assert_eq!(Uint128::ZERO.leading_zeros(), 128);
    assert_eq!(Uint128::ONE.leading_zeros(), 127);
    assert_eq!(Uint128::from_parts(1, 0).leading_zeros(), 63);
    assert_eq!(Uint128::MAX.leading_zeros(), 0);
    assert!(Uint128::ZERO.is_zero());
    assert!(!Uint128::ONE.is_zero());
}

#[test]
fn uint128_binary_string() {
    assert_eq!(Uint128::from_u64(5).to_binary_string(), "101");
    assert_eq!(Uint128::MAX.to_binary_string(), "1".repeat(128));
}

#[test]
fn format_error_display() {
    assert_eq!(
        FormatError::HexTooLong { len: 33 }.to_string(),
        "hex string of length 33 is greater than 32"
    );
    assert_eq!(
        FormatError::BytesTooLong { len: 17 }.to_string(),
        "byte length 17 is greater than 16"
    );
    assert_eq!(
        FormatError::InvalidHexCharacter { c: 'g', index: 3 }.to_string(),
        "invalid hex character 'g' at index 3"
    );
}
