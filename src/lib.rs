//! Composable validators with error accumulation.
//!
//! A [`Validator`] wraps a pure check function and is combined algebraically
//! instead of through inheritance or ad-hoc branching:
//!
//! - [`Validator::pullback`] reuses a validator for another type through a projection
//! - [`Validator::combine`] runs several validators and keeps every failure, in order
//! - [`Validator::negated`], [`Validator::map_errors`], [`Validator::reduce_errors`]
//! - [`Validator::optional`] lifts a validator into the `Option` domain
//!
//! Outcomes are [`Validation`] values whose invalid branch always carries at
//! least one error. [`binding::Validating`] keeps a value and its latest
//! outcome in sync as the value changes.
//!
//! # Examples
//!
//! ## Accumulating every failure
//!
//! ```
//! use validation_rail::rules::{is_even, is_greater_than, is_less_than};
//! use validation_rail::Validator;
//!
//! let rule = Validator::combine([is_greater_than(2), is_less_than(10), is_even()]);
//!
//! assert!(rule.validate(4).is_valid());
//! assert_eq!(
//!     rule.validate(1).into_errors().unwrap(),
//!     ["must be greater than 2", "must be even"]
//! );
//! ```
//!
//! ## Reusing a validator through a projection
//!
//! ```
//! use validation_rail::rules::is_at_most;
//! use validation_rail::Validator;
//!
//! let short: Validator<String> = is_at_most(5usize).pullback(|s: &String| s.len());
//! assert_eq!(short.validate("rail".to_string()).into_value().as_deref(), Some("rail"));
//! ```
//!
//! ## Reactive binding
//!
//! ```
//! use validation_rail::binding::Validating;
//! use validation_rail::rules::is_even;
//!
//! let mut value = Validating::new(0, is_even());
//! value.set(1);
//! assert_eq!(value.errors().unwrap(), ["must be even"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Reactive value bindings
pub mod binding;
/// Variadic construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Catalog of leaf validators
pub mod rules;
/// Non-empty error collections
pub mod types;
/// Validation result type and error accumulation
pub mod validation;
/// The validator abstraction and its combinators
pub mod validator;

pub use binding::{OptionalValidating, Validating};
pub use types::{EmptyErrorList, ErrorList, ErrorVec};
pub use validation::{IntoIter, Iter, IterMut, Validation};
pub use validator::{Validator, REQUIRED_MESSAGE};
