//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use field_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`lens!`], [`chain!`], [`steps!`]
//! - **Builders**: [`attach`], [`attach_m`], [`try_attach_m`], [`validation`]
//! - **Types**: [`Validator`], [`ValidationStep`], [`ValidationReport`], [`FieldError`],
//!   [`FieldErrors`], [`EffectError`], [`Validation`], [`Form`]
//! - **Traits**: [`Lens`], [`FormView`]

// Macros
pub use crate::{chain, lens, steps};

// Builders and runner
pub use crate::runner::run;
pub use crate::step::validation;
pub use crate::validator::{attach, attach_m, try_attach_m};
pub use crate::form::{validate_form, validate_form_default};

// Core types
pub use crate::form::Form;
pub use crate::runner::ValidationReport;
pub use crate::step::ValidationStep;
pub use crate::types::{EffectError, FieldError, FieldErrors};
pub use crate::validation::Validation;
pub use crate::validator::Validator;

// Traits
pub use crate::form::FormView;
pub use crate::lens::Lens;

pub use crate::checks;
