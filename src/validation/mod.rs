//! The [`Validation`] result type.
//!
//! `Validation` is how a finished run is presented to callers that only care
//! whether the record is usable: either `Valid(record)` or `Invalid` with the
//! complete, ordered error list.
//!
//! # Examples
//!
//! ```
//! use field_rail::validation::Validation;
//!
//! let invalid: Validation<&str, i32> = Validation::invalid_many(["err1", "err2"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;

pub use self::core::*;
