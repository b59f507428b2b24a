#![cfg(feature = "validation")]
//! Integration tests and Semigroup laws for Validation.

use functional_extras::Error;
use functional_extras::data::validation::{self, Validation};
use functional_extras::typeclass::Semigroup;
use proptest::prelude::*;
use rstest::rstest;

type Checked = Validation<String, u16>;

fn validation_strategy() -> impl Strategy<Value = Checked> {
    prop_oneof![
        prop::collection::vec("[a-z]{1,4}", 0..4).prop_map(Validation::Invalid),
        any::<u16>().prop_map(Validation::Valid),
    ]
}

// =============================================================================
// Concat
// =============================================================================

#[rstest]
fn test_concat_accumulates_in_order() {
    let first: Validation<&str, i32> = validation::invalid_all(Some(vec!["a", "b"]));
    let second = validation::invalid_all(Some(vec!["c"]));
    assert_eq!(
        validation::concat(second, first),
        Ok(Validation::Invalid(vec!["a", "b", "c"]))
    );
}

#[rstest]
fn test_concat_curried_takes_second_first() {
    let append_missing = validation::concat_curried(validation::invalid::<&str, i32>("missing"));
    assert_eq!(append_missing(validation::valid(1)), Ok(validation::invalid("missing")));
    assert_eq!(
        append_missing(validation::invalid("bad")),
        Ok(Validation::Invalid(vec!["bad", "missing"]))
    );
}

#[rstest]
fn test_concat_all() {
    let all: Vec<Validation<&str, i32>> = vec![
        validation::valid(1),
        validation::invalid("x"),
        validation::valid(2),
        validation::invalid("y"),
    ];
    assert_eq!(validation::concat_all(all), Some(Validation::Invalid(vec!["x", "y"])));
    assert_eq!(validation::concat_all(Vec::<Validation<&str, i32>>::new()), None);
}

// =============================================================================
// Validate
// =============================================================================

#[rstest]
#[case(25, Validation::Valid(25))]
#[case(7, Validation::Invalid(vec!["too young"]))]
fn test_validate(#[case] age: u8, #[case] expected: Validation<&'static str, u8>) {
    let adult = Some(|age: &u8| *age >= 18);
    assert_eq!(validation::validate(adult, "too young", age), Ok(expected.clone()));
    assert_eq!(validation::validate_partial(adult, "too young")(age), Ok(expected.clone()));
    let curried = validation::validate_curried(adult);
    assert_eq!(curried("too young")(age), Ok(expected));
}

#[rstest]
fn test_validate_null_predicate() {
    let result = validation::validate(None::<fn(&u8) -> bool>, "x", 1);
    assert_eq!(result, Err(Error::invalid_argument("predicate must not be null")));
}

// =============================================================================
// Catamorphism and Lists
// =============================================================================

#[rstest]
fn test_validation_map_null_rules() {
    let count = Some(|failures: Vec<&str>| failures.len());
    let missing_valid = None::<fn(i32) -> usize>;

    assert_eq!(
        validation::validation_map(count, missing_valid, validation::invalid_all(Some(vec!["a", "b"]))),
        Ok(2)
    );
    assert_eq!(
        validation::validation_map(count, missing_valid, validation::valid(1)),
        Err(Error::invalid_argument("valid morphism must not be null"))
    );
    assert_eq!(
        validation::validation_map(count, missing_valid, None::<Validation<&str, i32>>),
        Err(Error::invalid_argument("validation must not be null"))
    );
}

#[rstest]
fn test_invalids_flatten_and_valids_keep_order() {
    let list: Vec<Option<Validation<char, i32>>> = vec![
        Some(validation::invalid_all(Some(vec!['a', 'b']))),
        Some(validation::valid(1)),
        None,
        Some(validation::invalid('c')),
        Some(validation::valid(2)),
    ];
    assert_eq!(validation::invalids(Some(list.clone())), vec!['a', 'b', 'c']);
    assert_eq!(validation::valids(Some(list)), vec![1, 2]);
}

#[rstest]
fn test_from_invalid_and_from_valid() {
    let failed: Validation<&str, i32> = validation::invalid("e");
    assert_eq!(validation::from_invalid(vec![], failed.clone()), vec!["e"]);
    assert_eq!(validation::from_valid(0, failed), 0);
    assert_eq!(validation::from_valid(0, None::<Validation<&str, i32>>), 0);
    assert_eq!(validation::from_invalid_curried::<&str, i32>(vec!["d"])(validation::valid(3)), vec!["d"]);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_concat_associativity(
        a in validation_strategy(),
        b in validation_strategy(),
        c in validation_strategy(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_concat_never_drops_failures(list in prop::collection::vec(validation_strategy(), 1..6)) {
        let expected = validation::invalids(Some(list.clone()));
        let combined = validation::concat_all(list);
        let failures = combined.and_then(Validation::invalid).unwrap_or_default();
        prop_assert_eq!(failures, expected);
    }

    #[test]
    fn prop_boundary_concat_matches_semigroup(a in validation_strategy(), b in validation_strategy()) {
        prop_assert_eq!(validation::concat(b.clone(), a.clone()), Ok(a.combine(b)));
    }

    #[test]
    fn prop_validation_map_forms_agree(value in validation_strategy()) {
        let on_invalid = Some(|failures: Vec<String>| failures.concat());
        let on_valid = Some(|n: u16| n.to_string());

        let direct = validation::validation_map(on_invalid, on_valid, value.clone());
        prop_assert_eq!(
            &validation::validation_map_partial(on_invalid, on_valid)(value.clone()),
            &direct
        );
        let curried = validation::validation_map_curried(on_invalid);
        prop_assert_eq!(&curried(on_valid)(value), &direct);
    }

    #[test]
    fn prop_from_valid_curried_equivalence(value in validation_strategy()) {
        prop_assert_eq!(
            validation::from_valid_curried(9)(value.clone()),
            validation::from_valid(9, value)
        );
    }
}
