//! Executes a composed [`ValidationStep`] and packages its outcome.

use crate::step::ValidationStep;
use crate::types::{EffectError, FieldError, FieldErrors};
use crate::validation::Validation;

#[cfg(feature = "tracing")]
use crate::ext::tracing_ext::EffectSpanExt;

/// Final record and every error collected by one run.
///
/// `record` carries the updates of every step that succeeded, so a report
/// with errors holds a partially validated record. Callers that must never
/// see such a record should go through [`into_record`](Self::into_record) or
/// [`into_validation`](Self::into_validation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport<S, K, V> {
    pub record: S,
    pub errors: FieldErrors<K, V>,
}

impl<S, K, V> ValidationReport<S, K, V> {
    #[inline]
    pub fn new(record: S, errors: FieldErrors<K, V>) -> Self {
        Self { record, errors }
    }

    /// `true` when no step reported an error.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn into_parts(self) -> (S, FieldErrors<K, V>) {
        (self.record, self.errors)
    }

    /// The record, only if it is fully valid.
    #[inline]
    pub fn into_record(self) -> Option<S> {
        if self.is_valid() {
            Some(self.record)
        } else {
            None
        }
    }

    /// `Valid(record)` when error-free, otherwise `Invalid` with every error.
    ///
    /// ```
    /// use field_rail::{FieldError, FieldErrors, ValidationReport};
    ///
    /// let errors = FieldErrors::from(FieldError::new("age", "too young"));
    /// let report = ValidationReport::new(0, errors);
    /// let validation = report.into_validation();
    ///
    /// assert!(validation.is_invalid());
    /// assert_eq!(validation.iter_errors().count(), 1);
    /// ```
    pub fn into_validation(self) -> Validation<FieldError<K, V>, S> {
        if self.errors.is_empty() {
            Validation::Valid(self.record)
        } else {
            Validation::Invalid(self.errors.into_inner())
        }
    }
}

/// Invokes `step` once against `initial`.
///
/// Each validator and checker in the composed step runs exactly once, in
/// composition order. An effect failure anywhere aborts the run; the record
/// is discarded and the error is returned as is.
///
/// # Examples
///
/// ```
/// use field_rail::{attach, checks, lens, run, validation};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Login { user: String }
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # rt.block_on(async {
/// let user = attach(checks::not_empty("required"), "user");
/// let step = validation(lens!(Login, user), "kim".to_string(), user);
/// let report = run(&step, Login::default()).await.unwrap();
///
/// assert!(report.is_valid());
/// assert_eq!(report.record, Login { user: "kim".into() });
/// # });
/// ```
pub async fn run<S, K, V>(
    step: &ValidationStep<S, K, V>,
    initial: S,
) -> Result<ValidationReport<S, K, V>, EffectError>
where
    S: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    #[cfg(feature = "tracing")]
    let outcome = {
        let span = tracing::debug_span!("field_rail::run");
        step.apply(initial).with_span(span).await
    };
    #[cfg(not(feature = "tracing"))]
    let outcome = step.apply(initial).await;

    match outcome {
        Ok((record, errors)) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(errors = errors.len(), "validation run finished");
            Ok(ValidationReport::new(record, errors))
        },
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %error, "validation run aborted by effect failure");
            Err(error)
        },
    }
}
