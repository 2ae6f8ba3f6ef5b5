//! Error and effect types shared by every layer of the engine.
//!
//! # Examples
//!
//! ```
//! use field_rail::{EffectError, FieldErrors};
//!
//! let errors: FieldErrors<&str, &str> =
//!     [("name", "required"), ("age", "too young")].into_iter().collect();
//! assert_eq!(errors.len(), 2);
//!
//! let err = EffectError::new("db unavailable").with_context("checking field `email`");
//! assert!(err.error_chain().starts_with("checking field"));
//! ```
use futures_core::future::BoxFuture;
use smallvec::SmallVec;

pub mod alloc_type;
pub mod effect_error;
pub mod field_error;
pub mod field_errors;

pub use effect_error::*;
pub use field_error::*;
pub use field_errors::*;

/// SmallVec-backed collection used for accumulating errors and contexts.
///
/// Uses inline storage for 1 element, the common case for a single field.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// A deferred computation that either produces `T` or fails with an
/// [`EffectError`].
///
/// Pure checkers produce an already-ready effect; effectful checkers produce
/// whatever future their I/O needs. The engine only ever awaits these, so it
/// is indifferent to the runtime driving them.
pub type Effect<'a, T> = BoxFuture<'a, Result<T, EffectError>>;

/// Result of one validator invocation: the checked value or a keyed error.
pub type Verdict<B, K, V> = Result<B, FieldError<K, V>>;
