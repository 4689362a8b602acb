use validation_rail::rules::is_greater_than;
use validation_rail::{OptionalValidating, Validator};

#[test]
fn required_rejects_absence_with_default_message() {
    let mut binding = OptionalValidating::required(Some(11), is_greater_than(10));
    assert!(binding.is_required());
    assert!(binding.is_valid());

    binding.set(None);
    assert_eq!(binding.errors().unwrap(), ["is required"]);
}

#[test]
fn allowing_none_accepts_absence() {
    let mut binding = OptionalValidating::allowing_none(None, is_greater_than(10));
    assert!(!binding.is_required());
    assert!(binding.is_valid());

    binding.set(Some(10));
    assert_eq!(binding.errors().unwrap(), ["must be greater than 10"]);
}

#[test]
fn with_policy_matches_named_constructors() {
    let required = OptionalValidating::with_policy(None, is_greater_than(1), true);
    let lenient = OptionalValidating::with_policy(None, is_greater_than(1), false);

    assert!(required.is_invalid());
    assert!(lenient.is_valid());
}

#[test]
fn custom_error_on_none() {
    let rule = Validator::from_predicate(|n: &i32| *n >= 0, "negative");
    let mut binding = OptionalValidating::new(Some(1), rule, Some("missing"));
    assert!(binding.is_required());

    assert_eq!(binding.take(), Some(1));
    assert_eq!(binding.errors().unwrap(), ["missing"]);

    binding.set(Some(-1));
    assert_eq!(binding.errors().unwrap(), ["negative"]);
}

#[test]
fn no_error_on_none_means_not_required() {
    let rule = Validator::from_predicate(|n: &i32| *n >= 0, "negative");
    let binding = OptionalValidating::new(None, rule, None);
    assert!(!binding.is_required());
    assert!(binding.is_valid());
}

#[test]
fn clear_replace_and_update_reevaluate() {
    let mut binding = OptionalValidating::required(Some(20), is_greater_than(10));

    binding.clear();
    assert!(binding.is_invalid());
    assert_eq!(binding.get(), None);

    assert_eq!(binding.replace(Some(15)), None);
    assert!(binding.is_valid());

    binding.update(|value| {
        if let Some(v) = value {
            *v -= 10;
        }
    });
    assert_eq!(binding.get(), Some(&5));
    assert_eq!(binding.errors().unwrap(), ["must be greater than 10"]);
}

#[test]
fn result_carries_the_optional_value() {
    let binding = OptionalValidating::allowing_none(Some(42), is_greater_than(10));
    assert_eq!(binding.result().into_value(), Some(Some(&42)));
    assert_eq!(binding.into_inner(), Some(42));
}
