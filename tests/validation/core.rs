use validation_rail::validation::Validation;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[test]
fn valid_and_invalid_helpers_behave_as_expected() {
    let valid = Validation::<&str, i32>::valid(5);
    assert!(valid.is_valid());
    assert_eq!(valid.into_value(), Some(5));

    let invalid = Validation::<&str, i32>::invalid("missing");
    assert!(invalid.is_invalid());
    let errors = invalid.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], "missing");
}

#[test]
fn map_and_and_then_chain_success_values() {
    let result = Validation::<&str, i32>::valid(4)
        .map(|x| x * 2)
        .and_then(|x| {
            if x == 8 {
                Validation::valid(x + 1)
            } else {
                Validation::invalid("unexpected")
            }
        });

    assert_eq!(result.into_value(), Some(9));
}

#[test]
fn test_validation_map_invalid() {
    let v: Validation<&str, i32> = Validation::invalid("error");
    let mapped = v.map(|x| x * 2);
    assert_eq!(mapped.into_errors().unwrap(), ["error"]);
}

#[test]
fn test_validation_and_then_invalid() {
    let v: Validation<&str, i32> = Validation::invalid("error");
    let chained = v.and_then(|x| Validation::valid(x * 2));
    assert!(chained.is_invalid());
}

#[test]
fn test_validation_or_else() {
    let valid: Validation<&str, i32> = Validation::valid(42);
    assert_eq!(valid.or_else(|_| Validation::valid(0)).into_value(), Some(42));

    let invalid: Validation<&str, i32> = Validation::invalid("error");
    assert_eq!(invalid.or_else(|_| Validation::valid(0)).into_value(), Some(0));
}

#[test]
fn zip_keeps_errors_of_either_side() {
    let v1: Validation<&str, i32> = Validation::invalid("error1");
    let v2: Validation<&str, String> = Validation::valid("hello".to_string());
    assert_eq!(v1.zip(v2).into_errors().unwrap(), ["error1"]);

    let v1: Validation<&str, i32> = Validation::valid(42);
    let v2: Validation<&str, String> = Validation::invalid("error2");
    assert_eq!(v1.zip(v2).into_errors().unwrap(), ["error2"]);
}

#[test]
fn zip_concatenates_in_encounter_order() {
    let left: Validation<&str, ()> = Validation::invalid_many("a", ["b"]);
    let right: Validation<&str, ()> = Validation::invalid_many("c", ["d"]);

    assert_eq!(left.zip(right).into_errors().unwrap(), ["a", "b", "c", "d"]);
}

#[test]
fn map_err_transforms_all_errors() {
    let validation: Validation<&str, i32> = Validation::invalid_many("a", ["b"]);
    let mapped = validation.map_err(|e| format!("ERR:{e}"));

    assert_eq!(mapped.into_errors().unwrap(), ["ERR:a", "ERR:b"]);
}

#[test]
fn fold_errors_yields_exactly_one_error() {
    let validation: Validation<&str, ()> = Validation::invalid_many("a", ["b", "c"]);
    let folded = validation.fold_errors(Vec::new(), |mut acc, e| {
        acc.push(e);
        acc
    });

    let errors = folded.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], vec!["a", "b", "c"]);
}

#[test]
fn fold_errors_passes_valid_through() {
    let validation: Validation<&str, i32> = Validation::valid(1);
    let folded = validation.fold_errors(0usize, |acc, _| acc + 1);
    assert_eq!(folded.into_value(), Some(1));
}

#[test]
fn to_result_preserves_all_errors() {
    let validation: Validation<&str, i32> = Validation::invalid_many("first", ["second"]);
    assert_eq!(validation.to_result().unwrap_err().len(), 2);
}

#[test]
fn from_result_converts_single_error() {
    let ok = Validation::from_result(Ok::<_, &str>(42));
    assert!(ok.is_valid());

    let err: Validation<&str, i32> = Err("boom").into();
    assert_eq!(err.into_errors().unwrap()[0], "boom");
}

#[test]
fn borrowing_accessors() {
    let valid: Validation<&str, i32> = Validation::valid(3);
    assert_eq!(valid.value(), Some(&3));
    assert!(valid.errors().is_none());

    let invalid: Validation<&str, i32> = Validation::invalid("bad");
    assert!(invalid.value().is_none());
    assert_eq!(invalid.errors().unwrap(), ["bad"]);
    assert_eq!(invalid.as_ref().into_errors().unwrap(), [&"bad"]);
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct TestData {
    id: i32,
}

#[test]
#[cfg(feature = "serde")]
fn test_validation_serde() {
    let valid = Validation::<String, TestData>::valid(TestData { id: 1 });
    let serialized = serde_json::to_string(&valid).unwrap();
    let deserialized: Validation<String, TestData> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(valid, deserialized);

    let invalid = Validation::<String, TestData>::invalid("error".to_string());
    let serialized_err = serde_json::to_string(&invalid).unwrap();
    let deserialized_err: Validation<String, TestData> =
        serde_json::from_str(&serialized_err).unwrap();
    assert_eq!(invalid, deserialized_err);
}

#[test]
#[cfg(feature = "serde")]
fn test_validation_serde_rejects_empty_errors() {
    let result = serde_json::from_str::<Validation<String, TestData>>(r#"{"Invalid":[]}"#);
    assert!(result.is_err());
}
