#![cfg(feature = "control")]
//! Scenario tests for `Product`, `Either` and the capabilities around them.

use std::collections::HashSet;
use std::rc::Rc;

use funkit::control::{Coproduct, Either, Exponential, Product, ProductType};
use funkit::typeclass::{Any, Monoid, Semigroup, Sum};
use rstest::rstest;

// =============================================================================
// Construction and projection
// =============================================================================

#[rstest]
#[case(Product::new(1, "one"), 1, "one")]
#[case(Product::new(0, ""), 0, "")]
fn projections(#[case] pair: Product<i32, &str>, #[case] first: i32, #[case] second: &str) {
    assert_eq!(pair.first(), first);
    assert_eq!(pair.second(), second);
}

#[rstest]
fn tuple_conversions() {
    let pair: Product<u8, char> = (3, 'z').into();
    let back: (u8, char) = pair.into();
    assert_eq!(back, (3, 'z'));
    assert_eq!(pair.swap(), Product::new('z', 3));
}

#[rstest]
fn equality_ordering_and_hashing_are_componentwise() {
    assert_ne!(Product::new(1, 2), Product::new(1, 3));
    assert!(Product::new(1, 9) < Product::new(2, 0));
    assert!(Product::new(1, 2) < Product::new(1, 3));

    let set: HashSet<_> = [Product::new(1, 'a'), Product::new(1, 'a'), Product::new(2, 'a')]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[rstest]
fn formatting() {
    let pair = Product::new(4, "four");
    assert_eq!(format!("{pair:?}"), "Product(4, \"four\")");
    assert_eq!(pair.to_string(), "Product(4, four)");
}

// =============================================================================
// Derived vocabulary
// =============================================================================

#[rstest]
fn map_first_and_map_second() {
    let pair = Product::new(10, "ten".to_string());
    assert_eq!(pair.clone().map_first(|n| n + 1), Product::new(11, "ten".to_string()));
    assert_eq!(pair.map_second(|text| text.len()), Product::new(10, 3));
}

#[rstest]
fn eval_with_boxed_and_shared_functions() {
    let boxed: Box<dyn Fn(String) -> usize> = Box::new(|text| text.len());
    assert_eq!(Product::new(boxed, "hello".to_string()).eval_first(), 5);

    let shared: Rc<dyn Fn(i32) -> i32> = Rc::new(|n| n - 1);
    assert_eq!(Product::new(8, shared).eval_second(), 7);
}

#[rstest]
fn exponential_call_for_fn_pointers() {
    let negate: fn(i32) -> i32 = |n| -n;
    assert_eq!(Exponential::call(negate, 5), -5);
}

#[rstest]
#[case(Either::Left(2), Either::Left(Product::new(2, 'c')))]
#[case(Either::Right("r"), Either::Right(Product::new("r", 'c')))]
fn inside_out_first_on_either(
    #[case] sum: Either<i32, &'static str>,
    #[case] expected: Either<Product<i32, char>, Product<&'static str, char>>,
) {
    assert_eq!(Product::new(sum, 'c').inside_out_first(), expected);
}

#[rstest]
fn inside_out_second_on_result() {
    let failed: Product<&str, Result<u8, String>> = Product::new("job", Err("timeout".to_string()));
    assert_eq!(
        failed.inside_out_second(),
        Either::Left(Product::new("job", "timeout".to_string()))
    );
}

#[rstest]
fn outside_in_restores_the_sum_type() {
    let restored: Product<Result<u8, String>, bool> =
        Product::outside_in_first(Either::Right(Product::new(7, true)));
    assert_eq!(restored, Product::new(Ok(7), true));
}

#[rstest]
fn coproduct_bimap_on_either() {
    let value: Either<i32, String> = Either::Right("abc".to_string());
    assert_eq!(value.bimap_coproduct(|n| n * 2, |s| s.len()), Either::Right(3));
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
fn monoid_combines_each_side() {
    let combined = Product::new(Sum(1), Any(false)).combine(Product::new(Sum(2), Any(true)));
    assert_eq!(combined, Product::new(Sum(3), Any(true)));
}

#[rstest]
fn combine_all_over_an_iterator() {
    let totals = Product::combine_all(
        ["a", "bb", "ccc"]
            .into_iter()
            .map(|word| Product::new(Sum(word.len()), word.to_string())),
    );
    assert_eq!(totals, Product::new(Sum(6), "abbccc".to_string()));
}

#[rstest]
fn empty_is_the_pair_of_empties() {
    assert_eq!(
        Product::<Sum<u8>, Vec<i32>>::empty(),
        Product::new(Sum(0), Vec::new())
    );
}
