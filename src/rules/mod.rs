//! Catalog of ready-made leaf validators.
//!
//! Every rule captures its parameters at construction and reports at most one
//! `String` error naming the violated rule, for example
//! `"must be greater than 4"`, `"must be in range 1...5"` or
//! `"length must be exactly 3"`. Rules are ordinary [`Validator`]s and compose
//! with the rest of the algebra.
//!
//! [`Validator`]: crate::Validator
//!
//! # Examples
//!
//! ```
//! use validation_rail::rules::{ends_with, its_length, is_at_least};
//! use validation_rail::Validator;
//!
//! let file_name = Validator::<str>::combine([
//!     its_length(is_at_least(4)),
//!     ends_with(".rs"),
//! ]);
//!
//! assert!(file_name.is_valid("main.rs"));
//! assert_eq!(
//!     file_name.check(".py").into_errors().unwrap(),
//!     ["length must be at least 4", "must end with \".rs\""]
//! );
//! ```
pub mod boolean;
pub mod collection;
pub mod comparable;
pub mod equality;
pub mod membership;
pub mod numeric;
pub mod string;

pub use boolean::*;
pub use collection::*;
pub use comparable::*;
pub use equality::*;
pub use membership::*;
pub use numeric::*;
pub use string::*;
