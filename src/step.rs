//! Whole-record validation steps and their error-accumulating composition.
//!
//! A [`ValidationStep<S, K, V>`] takes a record `S` and produces an
//! [`Effect`] resolving to the (possibly updated) record plus every
//! [`FieldError`] it found. Unlike validators, steps never short-circuit:
//! [`compose`] always runs the second step, so one pass reports every
//! independent field failure.
//!
//! A step built by [`validation`] only touches the slice its lens focuses on,
//! and leaves the record untouched when its validator rejects the input.
//!
//! # Examples
//!
//! ```
//! use field_rail::{attach, checks, lens, validation, FieldError};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Signup { name: String, age: u32 }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let name = attach(checks::not_empty("required"), "name");
//! let age = attach(checks::parse("not a number"), "age");
//!
//! let step = validation(lens!(Signup, name), String::new(), name)
//!     .then(validation(lens!(Signup, age), "42".to_string(), age));
//!
//! let (record, errors) = step.apply(Signup::default()).await.unwrap();
//! assert_eq!(record, Signup { name: String::new(), age: 42 });
//! assert_eq!(errors.first(), Some(&FieldError::new("name", "required")));
//! # });
//! ```

use core::fmt;

use crate::lens::Lens;
use crate::runner::ValidationReport;
use crate::types::alloc_type::{Arc, Box};
use crate::types::{Effect, EffectError, FieldError, FieldErrors};
use crate::validator::Validator;

/// Record and errors produced by one step.
pub type StepOutput<S, K, V> = (S, FieldErrors<K, V>);

type StepFn<S, K, V> = dyn Fn(S) -> Effect<'static, StepOutput<S, K, V>> + Send + Sync;

/// A state-to-state transformer over a whole record that also reports
/// field errors.
#[must_use]
pub struct ValidationStep<S, K, V> {
    run: Arc<StepFn<S, K, V>>,
}

impl<S, K, V> ValidationStep<S, K, V> {
    /// Wraps a raw step function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(S) -> Effect<'static, StepOutput<S, K, V>> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Starts the step against `state`.
    #[inline]
    pub fn apply(&self, state: S) -> Effect<'static, StepOutput<S, K, V>> {
        (self.run)(state)
    }
}

impl<S, K, V> ValidationStep<S, K, V>
where
    S: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    /// The step that returns its record unchanged with no errors.
    pub fn identity() -> Self {
        Self::new(|state: S| -> Effect<'static, StepOutput<S, K, V>> {
            let output: StepOutput<S, K, V> = (state, FieldErrors::new());
            Box::pin(core::future::ready(Ok::<_, EffectError>(output)))
        })
    }

    /// Runs `next` after this step, regardless of errors. See [`compose`].
    #[inline]
    pub fn then(self, next: ValidationStep<S, K, V>) -> Self {
        compose(self, next)
    }

    /// Runs the step once against `initial`. See [`run`](crate::run).
    pub async fn run(&self, initial: S) -> Result<ValidationReport<S, K, V>, EffectError> {
        crate::runner::run(self, initial).await
    }
}

impl<S, K, V> Clone for ValidationStep<S, K, V> {
    fn clone(&self) -> Self {
        Self { run: Arc::clone(&self.run) }
    }
}

impl<S, K, V> fmt::Debug for ValidationStep<S, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationStep").finish_non_exhaustive()
    }
}

impl<S, K, V> Default for ValidationStep<S, K, V>
where
    S: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    fn default() -> Self {
        Self::identity()
    }
}

/// Folds steps left to right with [`compose`]; an empty iterator yields
/// [`ValidationStep::identity`].
impl<S, K, V> FromIterator<ValidationStep<S, K, V>> for ValidationStep<S, K, V>
where
    S: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    fn from_iter<I: IntoIterator<Item = ValidationStep<S, K, V>>>(iter: I) -> Self {
        let mut steps = iter.into_iter();
        match steps.next() {
            Some(first) => steps.fold(first, ValidationStep::then),
            None => Self::identity(),
        }
    }
}

/// Builds the step that validates `input` and stores the result through
/// `lens`.
///
/// On success the record comes back with the focused field set and no
/// errors. On rejection it comes back unchanged with exactly one error.
pub fn validation<S, A, R, K, V, L>(
    lens: L,
    input: R,
    validator: Validator<R, A, K, V>,
) -> ValidationStep<S, K, V>
where
    L: Lens<S, A> + Send + Sync + 'static,
    S: Send + 'static,
    A: Send + 'static,
    R: Clone + Send + Sync + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    let lens = Arc::new(lens);
    ValidationStep::new(move |state: S| -> Effect<'static, StepOutput<S, K, V>> {
        let verdict = validator.validate(input.clone());
        let lens = Arc::clone(&lens);
        Box::pin(async move {
            let output = match verdict.await? {
                Ok(value) => (lens.set(state, value), FieldErrors::new()),
                Err(error) => (state, FieldErrors::from(error)),
            };
            Ok::<_, EffectError>(output)
        })
    })
}

/// Runs `first`, then `second` on whatever record `first` produced, and
/// concatenates their errors in that order.
///
/// `second` runs even when `first` reported errors. An effect failure in
/// either step aborts the composed step and discards the record.
pub fn compose<S, K, V>(
    first: ValidationStep<S, K, V>,
    second: ValidationStep<S, K, V>,
) -> ValidationStep<S, K, V>
where
    S: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    ValidationStep::new(move |state: S| -> Effect<'static, StepOutput<S, K, V>> {
        let head = first.apply(state);
        let second = second.clone();
        Box::pin(async move {
            let (state, mut errors) = head.await?;
            let (state, rest) = second.apply(state).await?;
            errors.append(rest);
            Ok::<_, EffectError>((state, errors))
        })
    })
}

/// A step that records `error` without touching the record.
///
/// Useful for rules that do not map to a single field slice, such as a
/// failure the caller detected before validation started.
pub fn reject<S, K, V>(error: FieldError<K, V>) -> ValidationStep<S, K, V>
where
    S: Send + 'static,
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    ValidationStep::new(move |state: S| -> Effect<'static, StepOutput<S, K, V>> {
        let output = (state, FieldErrors::from(error.clone()));
        Box::pin(core::future::ready(Ok::<_, EffectError>(output)))
    })
}
