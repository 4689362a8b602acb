use validation_rail::validation::Validation;

#[test]
fn iterators_over_errors_and_values_work() {
    let mut valid = Validation::<&str, i32>::valid(3);
    if let Some(value) = valid.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(valid.into_value(), Some(4));

    let validation: Validation<&str, i32> = Validation::invalid_many("x", ["y"]);
    let collected: Vec<_> = validation.iter_errors().cloned().collect();
    assert_eq!(collected, vec!["x", "y"]);
}

#[test]
fn test_validation_iter_invalid() {
    let v: Validation<&str, i32> = Validation::invalid("error");
    assert_eq!(v.iter().next(), None);

    let mut v_mut = v.clone();
    assert_eq!(v_mut.iter_mut().next(), None);
}

#[test]
fn test_validation_iter_errors_valid() {
    let v: Validation<&str, i32> = Validation::valid(42);
    assert_eq!(v.iter_errors().next(), None);

    let mut v_mut = v.clone();
    assert_eq!(v_mut.iter_errors_mut().next(), None);
}

#[test]
fn iter_valid_yields_single_value_and_len_updates() {
    let v: Validation<&str, i32> = Validation::valid(7);
    let mut iter = v.iter();

    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&7));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_errors_mut_rewrites_in_place() {
    let mut v: Validation<String, ()> = Validation::invalid_many("a".to_string(), ["b".to_string()]);
    for error in v.iter_errors_mut() {
        error.make_ascii_uppercase();
    }
    assert_eq!(v.into_errors().unwrap(), ["A", "B"]);
}

#[test]
fn owning_iteration_and_for_loops() {
    let v: Validation<&str, i32> = Validation::valid(5);
    let mut seen = Vec::new();
    for value in &v {
        seen.push(*value);
    }
    assert_eq!(seen, vec![5]);
    assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![5]);
}
