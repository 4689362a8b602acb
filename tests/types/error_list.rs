use validation_rail::types::{EmptyErrorList, ErrorList};

#[test]
fn new_list_holds_exactly_one_error() {
    let errors = ErrorList::new("only");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first(), &"only");
    assert_eq!(errors.last(), &"only");
}

#[test]
fn with_rest_keeps_insertion_order() {
    let mut errors = ErrorList::with_rest(1, [2, 3]);
    errors.push(4);
    errors.append(ErrorList::with_rest(5, [6]));

    assert_eq!(errors, [1, 2, 3, 4, 5, 6]);
    assert_eq!(errors.last(), &6);
}

#[test]
fn empty_input_is_rejected() {
    assert!(ErrorList::<u8>::try_from_iter(Vec::new()).is_none());
    assert_eq!(ErrorList::<u8>::try_from(Vec::new()), Err(EmptyErrorList));
    assert_eq!(
        EmptyErrorList.to_string(),
        "an error list must contain at least one error"
    );
}

#[test]
fn non_empty_input_is_accepted() {
    let errors = ErrorList::try_from(vec!["a", "b"]).unwrap();
    assert_eq!(errors.into_vec(), vec!["a", "b"]);
}

#[test]
fn map_and_fold_visit_every_error_in_order() {
    let errors = ErrorList::with_rest("a", ["bb", "ccc"]);
    assert_eq!(errors.clone().map(str::len), [1, 2, 3]);
    assert_eq!(errors.fold(String::new(), |acc, e| acc + e), "abbccc");
}

#[test]
fn iteration_by_reference_and_by_value() {
    let errors = ErrorList::with_rest('x', ['y']);
    let borrowed: String = (&errors).into_iter().collect();
    assert_eq!(borrowed, "xy");

    let owned: Vec<char> = errors.into_iter().collect();
    assert_eq!(owned, vec!['x', 'y']);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_and_empty_rejection() {
    let errors = ErrorList::with_rest("a".to_string(), ["b".to_string()]);
    let json = serde_json::to_string(&errors).unwrap();
    assert_eq!(json, r#"["a","b"]"#);

    let back: ErrorList<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, errors);

    assert!(serde_json::from_str::<ErrorList<String>>("[]").is_err());
}
