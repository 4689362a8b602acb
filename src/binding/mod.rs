//! Reactive bindings that keep a value and its latest validation outcome in sync.
//!
//! - [`Validating`] - a value plus its validator
//! - [`OptionalValidating`] - an optional value with a fixed required policy
//!
//! Bindings are built explicitly, typically inside the constructor of the type
//! that owns the field:
//!
//! ```
//! use validation_rail::binding::{OptionalValidating, Validating};
//! use validation_rail::rules::{begins_with, is_at_least};
//!
//! struct Signup {
//!     handle: Validating<String>,
//!     age: OptionalValidating<u8>,
//! }
//!
//! impl Signup {
//!     fn new(handle: &str, age: Option<u8>) -> Self {
//!         Self {
//!             handle: Validating::new(handle.to_string(), begins_with("@")),
//!             age: OptionalValidating::allowing_none(age, is_at_least(18)),
//!         }
//!     }
//!
//!     fn is_valid(&self) -> bool {
//!         self.handle.is_valid() && self.age.is_valid()
//!     }
//! }
//!
//! let mut signup = Signup::new("@rail", None);
//! assert!(signup.is_valid());
//!
//! signup.age.set(Some(12));
//! assert!(!signup.is_valid());
//! ```
use crate::validation::Validation;

mod optional;
mod validating;

pub use optional::OptionalValidating;
pub use validating::Validating;

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
#[inline]
pub(crate) fn record_outcome<E>(outcome: &Validation<E, ()>) {
    #[cfg(feature = "tracing")]
    match outcome {
        Validation::Valid(()) => tracing::trace!("binding revalidated: valid"),
        Validation::Invalid(errors) => {
            tracing::debug!(errors = errors.len(), "binding revalidated: invalid")
        }
    }
}
