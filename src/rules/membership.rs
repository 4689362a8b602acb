//! Membership rules against a fixed list or set of allowed (or forbidden) values.
//!
//! Candidate values are rendered with `Debug` in the error message, in
//! iteration order for lists and in sorted order for sets, so messages are
//! deterministic: `"must be one of [1, 2, 3]"`.

use core::fmt::Debug;

use crate::types::alloc_type::{BTreeSet, String, Vec};
use crate::validator::Validator;

/// A collection that can answer membership queries and describe itself.
pub trait Membership: Send + Sync + 'static {
    type Item: 'static;

    fn includes(&self, item: &Self::Item) -> bool;

    /// Renders the members for error messages, e.g. `[1, 2, 3]`.
    fn describe(&self) -> String;
}

impl<T> Membership for Vec<T>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl<T, const N: usize> Membership for [T; N]
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl<T> Membership for BTreeSet<T>
where
    T: Ord + Debug + Send + Sync + 'static,
{
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn describe(&self) -> String {
        format!("{:?}", self.iter().collect::<Vec<_>>())
    }
}

#[cfg(feature = "std")]
impl<T, S> Membership for std::collections::HashSet<T, S>
where
    T: Eq + core::hash::Hash + Ord + Debug + Send + Sync + 'static,
    S: core::hash::BuildHasher + Send + Sync + 'static,
{
    type Item = T;

    fn includes(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn describe(&self) -> String {
        let mut members: Vec<&T> = self.iter().collect();
        members.sort();
        format!("{members:?}")
    }
}

/// Accepts values found in `allowed`. Fails with `"must be one of {allowed}"`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::is_included;
///
/// let rule = is_included(vec!["red", "green"]);
/// assert!(rule.is_valid(&"red"));
/// assert_eq!(
///     rule.validate("blue").into_errors().unwrap(),
///     [r#"must be one of ["red", "green"]"#]
/// );
/// ```
pub fn is_included<C: Membership>(allowed: C) -> Validator<C::Item> {
    let error = format!("must be one of {}", allowed.describe());
    Validator::from_predicate(move |value: &C::Item| allowed.includes(value), error)
}

/// Accepts values not found in `forbidden`. Fails with `"must not be one of {forbidden}"`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use validation_rail::rules::is_excluded;
///
/// let rule = is_excluded(BTreeSet::from([3, 1, 2]));
/// assert!(rule.is_valid(&4));
/// assert_eq!(rule.validate(2).into_errors().unwrap(), ["must not be one of [1, 2, 3]"]);
/// ```
pub fn is_excluded<C: Membership>(forbidden: C) -> Validator<C::Item> {
    let error = format!("must not be one of {}", forbidden.describe());
    Validator::from_predicate(move |value: &C::Item| !forbidden.includes(value), error)
}
