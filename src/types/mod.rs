//! Error collection types shared by [`Validation`](crate::validation::Validation)
//! and the validator algebra.
//!
//! # Examples
//!
//! ```
//! use validation_rail::types::ErrorList;
//!
//! let mut errors = ErrorList::new("must be even");
//! errors.extend(["must be greater than 2"]);
//!
//! assert_eq!(errors, ["must be even", "must be greater than 2"]);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_list;

pub use error_list::*;

/// SmallVec-backed storage behind [`ErrorList`].
///
/// Uses inline storage for a single element, which covers the common case of a
/// leaf rule reporting exactly one failure.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
