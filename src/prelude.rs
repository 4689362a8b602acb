//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use validation_rail::prelude::*;
//!
//! let rule = combine![is_greater_than(0), is_even()];
//! let mut field = Validating::new(2, rule);
//! field.set(-1);
//! assert_eq!(field.errors().unwrap(), ["must be greater than 0", "must be even"]);
//! ```

// Macros
pub use crate::{combine, validating};

// Core types
pub use crate::binding::{OptionalValidating, Validating};
pub use crate::types::ErrorList;
pub use crate::validation::Validation;
pub use crate::validator::{Validator, REQUIRED_MESSAGE};

// Leaf rules
pub use crate::rules::*;
