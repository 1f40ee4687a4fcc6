#![cfg(feature = "control")]
//! Property-based tests for Bifunctor laws.
//!
//! - **Identity**: `bf.bimap(|x| x, |y| y) == bf`
//! - **Composition**: `bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)`
//! - **Consistency**: `bf.bimap(f, g) == bf.first(f).second(g)`, and
//!   `bimap_ref` agrees with `bimap` on a clone

use funkit::control::{Coproduct, Either};
use funkit::typeclass::Bifunctor;
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        "[a-z]{0,6}".prop_map(Either::Right),
    ]
}

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{0,6}")
}

// =============================================================================
// Either
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().bimap(|x| x, |y| y), value);
    }

    #[test]
    fn prop_either_composition(value in either_strategy()) {
        let f1 = |x: i32| x.wrapping_add(1);
        let f2 = |x: i32| i64::from(x) * 2;
        let g1 = |s: String| s.len();
        let g2 = |n: usize| n + 10;

        let fused = value.clone().bimap(|x| f2(f1(x)), |s| g2(g1(s)));
        let staged = value.bimap(f1, g1).bimap(f2, g2);
        prop_assert_eq!(fused, staged);
    }

    #[test]
    fn prop_either_first_second_consistency(value in either_strategy()) {
        let f = |x: i32| x.wrapping_mul(2);
        let g = |s: String| s.len();

        let by_bimap = value.clone().bimap(f, g);
        prop_assert_eq!(&by_bimap, &value.clone().first(f).second(g));
        prop_assert_eq!(by_bimap, value.second(g).first(f));
    }

    #[test]
    fn prop_either_bimap_ref_agrees(value in either_strategy()) {
        let borrowed = value.bimap_ref(|x| x.wrapping_sub(1), String::len);
        prop_assert_eq!(borrowed, value.bimap(|x| x.wrapping_sub(1), |s| s.len()));
    }

    #[test]
    fn prop_bimap_coproduct_matches_bimap(value in either_strategy()) {
        let through_coproduct: Either<i64, usize> =
            value.clone().bimap_coproduct(i64::from, |s: String| s.len());
        prop_assert_eq!(through_coproduct, value.bimap(i64::from, |s| s.len()));
    }
}

// =============================================================================
// Result (error on the first side)
// =============================================================================

proptest! {
    #[test]
    fn prop_result_identity(value in result_strategy()) {
        prop_assert_eq!(value.clone().bimap(|e| e, |x| x), value);
    }

    #[test]
    fn prop_result_composition(value in result_strategy()) {
        let f1 = |e: String| e.len();
        let f2 = |n: usize| n + 100;
        let g1 = |x: i32| x.wrapping_add(1);
        let g2 = |x: i32| x.wrapping_mul(2);

        let fused = value.clone().bimap(|e| f2(f1(e)), |x| g2(g1(x)));
        let staged = value.bimap(f1, g1).bimap(f2, g2);
        prop_assert_eq!(fused, staged);
    }

    #[test]
    fn prop_result_into_either_is_natural(value in result_strategy()) {
        let mapped_then_converted = value.clone().bimap(|e| e.len(), |x| x / 2).into_either();
        let converted_then_mapped = value.into_either().bimap(|e| e.len(), |x| x / 2);
        prop_assert_eq!(mapped_then_converted, converted_then_mapped);
    }
}

// =============================================================================
// Tuples
// =============================================================================

proptest! {
    #[test]
    fn prop_tuple_identity(value in (any::<i32>(), "[a-z]{0,6}")) {
        prop_assert_eq!(value.clone().bimap(|x| x, |y| y), value);
    }

    #[test]
    fn prop_tuple_first_second_consistency(value in (any::<i32>(), "[a-z]{0,6}")) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |s: String| s.to_uppercase();

        let by_bimap = value.clone().bimap(f, g);
        prop_assert_eq!(&by_bimap, &value.clone().first(f).second(g));
        prop_assert_eq!(by_bimap, value.second(g).first(f));
    }
}
