//! Composable, effect-aware validation for multi-field records.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `field_rail::*` or pick focused pieces as needed.
//!
//! The engine is built from four pieces:
//!
//! - a [`Lens`](lens::Lens) focuses on one field of a record;
//! - a checker (any `Fn(A) -> Result<B, V>`, see [`checks`]) accepts or
//!   rejects a single value, possibly converting it;
//! - a [`Validator`] pairs a checker with a field key and composes with other
//!   validators by **short-circuiting**: one error per field at most;
//! - a [`ValidationStep`] stores a validator's output through a lens and
//!   composes with other steps by **accumulating**: every field is checked
//!   and every error is kept.
//!
//! Checks may be asynchronous. Everything returns an [`Effect`], a boxed
//! future, so the same code drives pure and I/O-bound validation.
//!
//! # Examples
//!
//! ## Accumulating field errors
//!
//! ```
//! use field_rail::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Account { name: String, number: String }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let step = steps![
//!     validation(lens!(Account, name), "".to_string(), attach(checks::not_empty("name required"), "name")),
//!     validation(
//!         lens!(Account, number),
//!         "123".to_string(),
//!         attach(checks::length_eq(10, "account number not correct length"), "accountNumber"),
//!     ),
//! ];
//!
//! let report = run(&step, Account::default()).await.unwrap();
//! assert_eq!(
//!     report.errors.into_pairs(),
//!     vec![("name", "name required"), ("accountNumber", "account number not correct length")],
//! );
//! # });
//! ```
//!
//! ## Effectful checks
//!
//! ```
//! use field_rail::prelude::*;
//!
//! async fn is_taken(name: &str) -> bool {
//!     name == "root"
//! }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let username = attach(checks::not_empty("required"), "username").and_then(attach_m(
//!     |name: String| async move {
//!         if is_taken(&name).await { Err("already taken") } else { Ok(name) }
//!     },
//!     "username",
//! ));
//!
//! let verdict = username.validate("root".to_string()).await.unwrap();
//! assert_eq!(verdict, Err(FieldError::new("username", "already taken")));
//! # });
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Reusable pure checkers
pub mod checks;
/// Runtime- and ecosystem-specific extensions
pub mod ext;
/// Adapter for form libraries
pub mod form;
/// Field accessors
pub mod lens;
/// Macros for lenses and composition
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Running composed steps
pub mod runner;
/// Validation steps and accumulating composition
pub mod step;
/// Field errors, effect errors and the effect type
pub mod types;
/// Validation result type
pub mod validation;
/// Validators and short-circuiting composition
pub mod validator;

pub use form::{validate_form, validate_form_default, Form, FormView};
pub use runner::{run, ValidationReport};
pub use step::{validation, StepOutput, ValidationStep};
pub use types::{
    Effect, EffectError, EffectErrorKind, ErrorVec, FieldError, FieldErrors, Verdict,
};
pub use validation::Validation;
pub use validator::{attach, attach_m, try_attach_m, Validator};
