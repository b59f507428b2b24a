#![cfg(feature = "maybe")]
//! Integration tests for the Maybe boundary API.

use functional_extras::Error;
use functional_extras::data::maybe::{self, Maybe};
use proptest::prelude::*;
use rstest::rstest;

fn positive(value: i32) -> Maybe<i32> {
    if value > 0 { Maybe::Just(value) } else { Maybe::Nothing }
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_just_of_null_is_invalid_argument() {
    let result = maybe::just(None::<i32>);
    assert_eq!(result, Err(Error::invalid_argument("value must not be null")));
}

#[rstest]
#[case(Some(1), Maybe::Just(1))]
#[case(None, Maybe::Nothing)]
fn test_of_is_lenient(#[case] value: Option<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(maybe::of(value), expected);
}

#[rstest]
fn test_nothing_is_nothing() {
    let value: Maybe<String> = maybe::nothing();
    assert!(maybe::is_nothing(&value));
    assert!(!maybe::is_just(&value));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
#[case(Some(Maybe::Just(3)), 3)]
#[case(Some(Maybe::Nothing), -1)]
#[case(None, -1)]
fn test_from_maybe(#[case] value: Option<Maybe<i32>>, #[case] expected: i32) {
    assert_eq!(maybe::from_maybe(-1, value), expected);
}

#[rstest]
fn test_from_just_of_nothing_is_illegal_state() {
    let error = maybe::from_just(Maybe::<u8>::Nothing).unwrap_err();
    assert_eq!(error, Error::illegal_state("maybe must not be null or Nothing"));
    assert_eq!(maybe::from_just(Maybe::Just('a')), Ok('a'));
}

#[rstest]
fn test_maybe_to_list() {
    assert_eq!(maybe::maybe_to_list(Maybe::Just(4)), vec![4]);
    assert_eq!(maybe::maybe_to_list(Maybe::<i32>::Nothing), Vec::<i32>::new());
    assert_eq!(maybe::maybe_to_list(None::<Maybe<i32>>), Vec::<i32>::new());
}

// =============================================================================
// Catamorphism
// =============================================================================

#[rstest]
fn test_maybe_map_dispatch() {
    let length = Some(|text: &str| text.len());
    assert_eq!(maybe::maybe_map(0, length, Maybe::Just("four")), Ok(4));
    assert_eq!(maybe::maybe_map(0, length, Maybe::Nothing), Ok(0));
    assert_eq!(maybe::maybe_map(0, length, None::<Maybe<&str>>), Ok(0));
}

#[rstest]
fn test_maybe_map_null_morphism_fails_for_both_variants() {
    let missing = None::<fn(i32) -> i32>;
    assert!(maybe::maybe_map(0, missing, Maybe::Just(1)).is_err());
    assert!(maybe::maybe_map(0, missing, Maybe::Nothing).is_err());
}

#[rstest]
fn test_maybe_map_curried_fails_only_at_last_step() {
    let curried = maybe::maybe_map_curried::<i32, i32, fn(i32) -> i32>(0);
    let awaiting_instance = curried(None);
    assert!(awaiting_instance(Maybe::Just(1)).unwrap_err().is_invalid_argument());
}

// =============================================================================
// Lists
// =============================================================================

#[rstest]
fn test_cat_maybes_skips_nothing_and_null() {
    let list = vec![Some(Maybe::Just(1)), Some(Maybe::Nothing), None, Some(Maybe::Just(2))];
    assert_eq!(maybe::cat_maybes(Some(list)), vec![1, 2]);
    assert_eq!(maybe::cat_maybes(None::<Vec<Maybe<i32>>>), Vec::<i32>::new());
}

#[rstest]
fn test_map_maybe_keeps_positive() {
    let result = maybe::map_maybe(Some(positive), Some(vec![1, -1, 2, -2]));
    assert_eq!(result, Ok(vec![1, 2]));
    assert_eq!(maybe::map_maybe(Some(positive), None::<Vec<i32>>), Ok(vec![]));
}

#[rstest]
fn test_map_maybe_null_morphism() {
    let result = maybe::map_maybe(None::<fn(i32) -> Maybe<i32>>, Some(vec![1]));
    assert_eq!(result, Err(Error::invalid_argument("morphism must not be null")));
}

#[rstest]
#[case(Some(vec![None, Some(3), Some(4)]), Maybe::Just(3))]
#[case(Some(vec![None, None]), Maybe::Nothing)]
#[case(Some(vec![]), Maybe::Nothing)]
#[case(None, Maybe::Nothing)]
fn test_list_to_maybe(#[case] list: Option<Vec<Option<i32>>>, #[case] expected: Maybe<i32>) {
    assert_eq!(maybe::list_to_maybe(list), expected);
}

#[rstest]
fn test_list_to_maybe_with_optional_payloads() {
    let list: Vec<Option<Option<i32>>> = vec![None, Some(None), Some(Some(3))];
    assert_eq!(maybe::list_to_maybe(Some(list)), Maybe::Just(None));

    let skipping_null: Vec<Option<Option<i32>>> = vec![None, Some(Some(3))];
    assert_eq!(maybe::list_to_maybe(Some(skipping_null)), Maybe::Just(Some(3)));
}

// =============================================================================
// Curry Equivalence
// =============================================================================

proptest! {
    #[test]
    fn prop_from_maybe_curried_equivalence(default in any::<i32>(), value in any::<Option<i32>>()) {
        let instance = Maybe::from(value);
        prop_assert_eq!(
            maybe::from_maybe_curried(default)(instance),
            maybe::from_maybe(default, instance)
        );
    }

    #[test]
    fn prop_maybe_map_forms_agree(default in any::<i64>(), value in any::<Option<i32>>()) {
        let widen = Some(|n: i32| i64::from(n) * 2);
        let instance = Maybe::from(value);

        let direct = maybe::maybe_map(default, widen, instance);
        prop_assert_eq!(&maybe::maybe_map_partial(default, widen)(instance), &direct);
        let curried = maybe::maybe_map_curried(default);
        prop_assert_eq!(&curried(widen)(instance), &direct);
    }

    #[test]
    fn prop_map_maybe_curried_equivalence(list in prop::collection::vec(any::<i32>(), 0..16)) {
        let direct = maybe::map_maybe(Some(positive), Some(list.clone()));
        prop_assert_eq!(maybe::map_maybe_curried(Some(positive))(list), direct);
    }

    #[test]
    fn prop_extraction_roundtrip(value in any::<u32>()) {
        let wrapped = maybe::just(Some(value));
        prop_assert_eq!(wrapped.and_then(maybe::from_just), Ok(value));
    }
}
