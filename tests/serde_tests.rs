//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use gf2m173::{FieldElement, Ring};

#[test]
fn element_roundtrip() {
    let a = FieldElement::from_hex_str("0AE91DB7FBD1EBAC661F6488CC27F208C2B136493261").unwrap();
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "\"AE91DB7FBD1EBAC661F6488CC27F208C2B136493261\"");
    let b: FieldElement = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_roundtrip() {
    let json = serde_json::to_string(&FieldElement::ZERO).unwrap();
    assert_eq!(json, "\"0\"");
    let z: FieldElement = serde_json::from_str(&json).unwrap();
    assert_eq!(z, FieldElement::ZERO);
}

#[test]
fn vec_roundtrip() {
    let elements = vec![FieldElement::ONE, FieldElement::from(0xabc), FieldElement::new([u64::MAX; 3])];
    let json = serde_json::to_string(&elements).unwrap();
    assert!(json.starts_with("[\"1\",\"ABC\",\"1FFF"));
    let back: Vec<FieldElement> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, elements);
}

#[test]
fn too_wide_fails() {
    let json = format!("\"{}\"", "F".repeat(44));
    let result: Result<FieldElement, _> = serde_json::from_str(&json);
    assert!(result.is_err());
}

#[test]
fn error_message_names_the_problem() {
    let err = serde_json::from_str::<FieldElement>("\"12q\"").unwrap_err();
    assert!(err.to_string().contains("invalid hex digit"));
}
