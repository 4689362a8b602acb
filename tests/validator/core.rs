use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use validation_rail::validation::Validation;
use validation_rail::Validator;

fn positive() -> Validator<i32, &'static str> {
    Validator::from_predicate(|n: &i32| *n > 0, "must be positive")
}

#[test]
fn validate_echoes_the_input_on_success() {
    assert_eq!(positive().validate(5).into_value(), Some(5));
}

#[test]
fn validate_reports_the_check_errors_on_failure() {
    assert_eq!(positive().validate(-5).into_errors().unwrap(), ["must be positive"]);
}

#[test]
fn check_and_is_valid_borrow_the_input() {
    let rule = positive();
    let value = 3;
    assert!(rule.check(&value).is_valid());
    assert!(rule.is_valid(&value));
    assert!(!rule.is_valid(&0));
}

#[test]
fn construction_does_not_run_the_check() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let rule = Validator::<i32, &str>::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Validation::valid(())
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let _ = rule.validate(1);
    let _ = rule.validate(1);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn clones_share_the_same_check() {
    let rule = positive();
    let copy = rule.clone();
    assert_eq!(rule.validate(-1), copy.validate(-1));
}

#[test]
fn unsized_inputs_are_supported() {
    let not_blank = Validator::<str, &str>::from_predicate(|s| !s.trim().is_empty(), "is blank");
    assert!(not_blank.check("x").is_valid());
    assert_eq!(not_blank.check("   ").into_errors().unwrap(), ["is blank"]);
}

#[test]
fn always_valid_and_always_invalid() {
    assert!(Validator::<i32, &str>::always_valid().is_valid(&i32::MIN));
    assert!(Validator::<i32, &str>::default().is_valid(&0));
    assert_eq!(
        Validator::<i32, &str>::always_invalid("nope").validate(0).into_errors().unwrap(),
        ["nope"]
    );
}

#[test]
fn validators_can_cross_threads() {
    let rule = positive();
    let handle = std::thread::spawn(move || rule.is_valid(&1));
    assert!(handle.join().unwrap());
}
