//! The [`Validator`] abstraction and its composition algebra.
//!
//! - [`core`] - the validator type itself
//! - [`combinators`] - `pullback`, `combine`, `negated`, `map_errors`, `reduce_errors`
//! - [`optional`] - lifting into the `Option` domain
//!
//! # Examples
//!
//! ```
//! use validation_rail::rules::{has_length_of, is_greater_than};
//! use validation_rail::Validator;
//!
//! struct Order {
//!     quantity: u32,
//!     sku: String,
//! }
//!
//! let order = Validator::combine([
//!     is_greater_than(0u32).pullback(|o: &Order| o.quantity),
//!     has_length_of::<String>(8).pullback_ref(|o: &Order| &o.sku),
//! ]);
//!
//! let bad = Order { quantity: 0, sku: "ABC".into() };
//! assert_eq!(
//!     order.check(&bad).into_errors().unwrap(),
//!     ["must be greater than 0", "length must be exactly 8"]
//! );
//! ```
pub mod combinators;
pub mod core;
pub mod optional;

pub use self::core::*;
pub use self::optional::REQUIRED_MESSAGE;
