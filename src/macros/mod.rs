//! Shorthand macros for building lenses and composing validators and steps.
//!
//! - [`macro@crate::lens`] - builds a [`FieldLens`](crate::lens::FieldLens) for a struct field.
//! - [`macro@crate::chain`] - composes validators left to right, short-circuiting.
//! - [`macro@crate::steps`] - composes validation steps left to right, accumulating.
//!
//! # Examples
//!
//! ```
//! use field_rail::{attach, chain, checks, lens, steps, validation};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Transfer { to: String, amount: u64 }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let amount = chain![
//!     attach(checks::not_empty("amount required"), "amount"),
//!     attach(checks::parse::<u64, _>("amount must be a number"), "amount"),
//! ];
//!
//! let step = steps![
//!     validation(lens!(Transfer, to), "".to_string(), attach(checks::not_empty("recipient required"), "to")),
//!     validation(lens!(Transfer, amount), "abc".to_string(), amount),
//! ];
//!
//! let report = step.run(Transfer::default()).await.unwrap();
//! assert_eq!(report.errors.keys().copied().collect::<Vec<_>>(), vec!["to", "amount"]);
//! # });
//! ```

/// Builds a [`FieldLens`](crate::lens::FieldLens) focusing on `field` of a
/// struct type.
///
/// ```
/// use field_rail::lens;
/// use field_rail::lens::Lens;
///
/// #[derive(Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let x = lens!(Point, x);
/// assert_eq!(x.set(Point { x: 1, y: 2 }, 5), Point { x: 5, y: 2 });
/// ```
#[macro_export]
macro_rules! lens {
    ($source:ty, $field:ident) => {
        $crate::lens::FieldLens::new(
            |source: &$source| &source.$field,
            |mut source: $source, value| {
                source.$field = value;
                source
            },
        )
    };
}

/// Composes validators left to right with short-circuiting
/// [`compose`](crate::validator::compose). `chain![]` is the identity.
#[macro_export]
macro_rules! chain {
    () => {
        $crate::Validator::identity()
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let validator = $first;
        $(let validator = validator.and_then($rest);)*
        validator
    }};
}

/// Composes validation steps left to right with accumulating
/// [`compose`](crate::step::compose). `steps![]` is the identity.
#[macro_export]
macro_rules! steps {
    () => {
        $crate::ValidationStep::identity()
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let step = $first;
        $(let step = step.then($rest);)*
        step
    }};
}
