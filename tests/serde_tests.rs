#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! The data-carrying types serialize structurally: `Product` and `Writer` as
//! objects with named components, `Either` as an externally tagged enum and
//! the monoid wrappers as their inner value.

use funkit::control::{Either, Product};
use funkit::effect::Writer;
use funkit::typeclass::{Identity, Max, Sum};
use rstest::rstest;
use serde_json::json;

// =============================================================================
// Product
// =============================================================================

#[rstest]
fn product_json_shape() {
    let pair = Product::new(3, "three".to_string());
    let value = serde_json::to_value(&pair).unwrap();
    assert_eq!(value, json!({ "first": 3, "second": "three" }));
}

#[rstest]
fn product_json_roundtrip() {
    let pair = Product::new(Sum(10_u64), Max(-4_i32));
    let encoded = serde_json::to_string(&pair).unwrap();
    let decoded: Product<Sum<u64>, Max<i32>> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, pair);
}

#[rstest]
fn product_rejects_missing_component() {
    let decoded = serde_json::from_str::<Product<i32, i32>>(r#"{"first": 1}"#);
    assert!(decoded.is_err());
}

// =============================================================================
// Either
// =============================================================================

#[rstest]
#[case(Either::Left("error".to_string()), json!({ "Left": "error" }))]
#[case(Either::Right(42), json!({ "Right": 42 }))]
fn either_json_shape(#[case] either: Either<String, i32>, #[case] expected: serde_json::Value) {
    assert_eq!(serde_json::to_value(&either).unwrap(), expected);
}

#[rstest]
fn either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let restored_left: Either<String, i32> =
        serde_json::from_str(&serde_json::to_string(&left).unwrap()).unwrap();
    let restored_right: Either<String, i32> =
        serde_json::from_str(&serde_json::to_string(&right).unwrap()).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

// =============================================================================
// Writer and wrappers
// =============================================================================

#[rstest]
fn writer_json_shape() {
    let writer = Writer::new(vec!["parsed".to_string()], 7);
    let value = serde_json::to_value(&writer).unwrap();
    assert_eq!(value, json!({ "log": ["parsed"], "value": 7 }));
}

#[rstest]
fn writer_json_roundtrip_keeps_the_log() {
    let writer = Writer::new(Sum(2_i64), "payload".to_string()).tell(Sum(5));
    let encoded = serde_json::to_string(&writer).unwrap();
    let decoded: Writer<Sum<i64>, String> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.log(), &Sum(7));
    assert_eq!(decoded, writer);
}

#[rstest]
fn writer_with_product_log() {
    let writer = Writer::new(Product::new(Sum(1_u32), "a".to_string()), Identity(true));
    let encoded = serde_json::to_string(&writer).unwrap();
    let decoded: Writer<Product<Sum<u32>, String>, Identity<bool>> =
        serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, writer);
}

#[rstest]
fn wrappers_are_transparent_newtypes() {
    assert_eq!(serde_json::to_string(&Sum(5)).unwrap(), "5");
    assert_eq!(serde_json::to_string(&Max("z")).unwrap(), "\"z\"");
}
