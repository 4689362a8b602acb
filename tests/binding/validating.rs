use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use validation_rail::rules::{is_at_most, is_even, is_greater_than};
use validation_rail::validation::Validation;
use validation_rail::{validating, Validating, Validator};

fn counting_validator(calls: Arc<AtomicUsize>) -> Validator<i32> {
    Validator::new(move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Validation::valid(())
    })
}

#[test]
fn evaluates_at_construction() {
    let binding = Validating::new(3, is_even());
    assert!(binding.is_invalid());
    assert_eq!(binding.errors().unwrap(), ["must be even"]);
}

#[test]
fn every_mutation_reevaluates_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut binding = Validating::new(0, counting_validator(Arc::clone(&calls)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    binding.set(1);
    let _ = binding.replace(2);
    binding.update(|v| *v += 1);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn reads_never_evaluate() {
    let calls = Arc::new(AtomicUsize::new(0));
    let binding = Validating::new(0, counting_validator(Arc::clone(&calls)));

    for _ in 0..3 {
        let _ = binding.is_valid();
        let _ = binding.errors();
        let _ = binding.result();
        let _ = binding.get();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn replace_returns_the_previous_value() {
    let mut binding = Validating::new(2, is_even());
    assert_eq!(binding.replace(5), 2);
    assert_eq!(*binding.get(), 5);
    assert!(binding.is_invalid());
}

#[test]
fn update_reevaluates_in_place_mutations() {
    let mut binding = Validating::new(String::from("ab"), is_at_most(3usize).pullback(|s: &String| s.len()));
    binding.update(|s| s.push_str("cd"));
    assert_eq!(binding.errors().unwrap(), ["must be at most 3"]);

    binding.update(String::clear);
    assert!(binding.is_valid());
}

#[test]
fn result_pairs_value_and_outcome() {
    let mut binding = Validating::new(4, is_even());
    assert_eq!(binding.result(), Validation::Valid(&4));

    binding.set(5);
    let result = binding.result();
    assert_eq!(result.into_errors().unwrap()[0], "must be even");
}

#[test]
fn with_validators_combines_in_order() {
    let mut binding = Validating::with_validators(7, [is_greater_than(10), is_even()]);
    assert_eq!(
        binding.errors().unwrap(),
        ["must be greater than 10", "must be even"]
    );

    binding.set(12);
    assert!(binding.is_valid());
}

#[test]
fn macro_builds_a_combined_binding() {
    let binding = validating!(1, is_greater_than(0), is_even());
    assert_eq!(binding.errors().unwrap(), ["must be even"]);
}

#[test]
fn into_parts_hands_back_value_and_outcome() {
    let binding = Validating::new(3, is_even());
    let (value, outcome) = binding.into_parts();
    assert_eq!(value, 3);
    assert!(outcome.is_invalid());

    assert_eq!(Validating::new(8, is_even()).into_inner(), 8);
}

#[test]
fn bindings_are_built_in_owning_constructors() {
    struct Form {
        quantity: Validating<u32>,
    }

    impl Form {
        fn new(quantity: u32) -> Self {
            Self {
                quantity: Validating::new(quantity, is_greater_than(0)),
            }
        }
    }

    let mut form = Form::new(0);
    assert!(form.quantity.is_invalid());
    form.quantity.set(2);
    assert!(form.quantity.is_valid());
}
