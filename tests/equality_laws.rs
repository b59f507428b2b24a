#![cfg(all(
    feature = "maybe",
    feature = "either",
    feature = "fallible",
    feature = "validation"
))]
//! Property-based tests for equality, hashing and rendering of the sum types.
//!
//! - **Reflexivity**: `a == a`
//! - **Hash Consistency**: `a == b` implies `hash(a) == hash(b)`
//! - **Variant Separation**: values of different variants are never equal

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use functional_extras::data::{Either, Fault, Maybe, Try, Validation};
use proptest::prelude::*;
use rstest::rstest;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn maybe_strategy() -> impl Strategy<Value = Maybe<i8>> {
    any::<Option<i8>>().prop_map(Maybe::from)
}

fn validation_strategy() -> impl Strategy<Value = Validation<u8, u8>> {
    prop_oneof![
        prop::collection::vec(0..3_u8, 0..3).prop_map(Validation::Invalid),
        (0..3_u8).prop_map(Validation::Valid),
    ]
}

proptest! {
    #[test]
    fn prop_maybe_hash_consistency(a in maybe_strategy(), b in maybe_strategy()) {
        prop_assert_eq!(&a, &a);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn prop_validation_hash_is_content_based(a in validation_strategy(), b in validation_strategy()) {
        prop_assert_eq!(&a, &a.clone());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn prop_either_variants_never_equal(value in any::<i32>()) {
        prop_assert_ne!(Either::<i32, i32>::Left(value), Either::Right(value));
    }

    #[test]
    fn prop_maybe_variants_never_equal(value in any::<i8>()) {
        prop_assert_ne!(Maybe::Just(value), Maybe::Nothing);
        prop_assert_ne!(Maybe::<i8>::Nothing, Maybe::Just(value));
    }

    #[test]
    fn prop_try_variants_never_equal(value in "[a-z]{0,6}") {
        let failed: Try<String> = Try::Failure(Fault::new(value.clone()));
        prop_assert_ne!(failed, Try::Success(value));
    }

    #[test]
    fn prop_validation_variants_never_equal(value in any::<u8>(), failures in prop::collection::vec(any::<u8>(), 0..3)) {
        prop_assert_ne!(Validation::<u8, u8>::Invalid(failures), Validation::Valid(value));
        prop_assert_ne!(Validation::<u8, u8>::Invalid(Vec::new()), Validation::Valid(value));
    }

    #[test]
    fn prop_try_equal_faults_hash_equal(message in "[a-z]{0,6}") {
        let a: Try<()> = Try::Failure(Fault::new(message.clone()));
        let b: Try<()> = Try::Failure(Fault::new(message));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }
}

#[rstest]
fn test_equal_invalids_built_separately_hash_equal() {
    let a: Validation<&str, i32> = Validation::Invalid(vec!["x", "y"]);
    let b: Validation<&str, i32> = Validation::Invalid(["x", "y"].to_vec());
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[rstest]
#[case(Maybe::Just(5).to_string(), "Just<i32> 5")]
#[case(Maybe::<i32>::Nothing.to_string(), "Nothing<i32>")]
#[case(Either::<i32, String>::Left(5).to_string(), "Left<i32> 5")]
#[case(Either::<i32, String>::Right("hi".into()).to_string(), "Right<String> hi")]
#[case(Try::<i32>::Failure(Fault::new("boom")).to_string(), "Failure<Fault> boom")]
#[case(Try::Success(42).to_string(), "Success<i32> 42")]
#[case(Validation::<&str, u8>::Invalid(vec!["a", "b"]).to_string(), "Invalid<Vec<&str>> [a,b]")]
#[case(Validation::<&str, u8>::Valid(7).to_string(), "Valid<u8> 7")]
fn test_display(#[case] rendered: String, #[case] expected: &str) {
    assert_eq!(rendered, expected);
}
