//! Validation result type and utilities for accumulating errors.
//!
//! This module provides the [`Validation`] type, which either holds an accepted
//! value or a non-empty list of errors. Unlike `Result`, validations can be
//! merged with [`Validation::zip`] so that every failure survives into the
//! combined outcome.
//!
//! # Key Components
//!
//! - [`Validation`] - Core type that represents either a valid value or accumulated errors
//! - Iterator adapters for traversing the value and the errors
//! - `FromIterator` implementations for collecting many validations at once
//!
//! # Examples
//!
//! ```
//! use validation_rail::validation::Validation;
//!
//! let valid: Validation<String, i32> = Validation::Valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Validation<&str, i32> = Validation::invalid_many("err1", ["err2"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
