//! Tokio-specific helpers: deadlines and task-backed effects.
//!
//! The engine itself has no notion of time or tasks. These helpers wrap
//! validators and runs so that an expired deadline or a cancelled task
//! surfaces as an [`EffectError`] instead of hanging or panicking.
//!
//! # Feature Flag
//!
//! Requires the `tokio` feature:
//!
//! ```toml
//! [dependencies]
//! field-rail = { version = "0.1", features = ["tokio"] }
//! ```

use core::future::Future;
use core::time::Duration;

use tokio::task::JoinError;

use crate::runner::{run, ValidationReport};
use crate::step::ValidationStep;
use crate::types::alloc_type::Box;
use crate::types::{Effect, EffectError, FieldError, Verdict};
use crate::validator::Validator;

impl From<JoinError> for EffectError {
    fn from(error: JoinError) -> Self {
        if error.is_cancelled() {
            EffectError::cancelled()
        } else {
            EffectError::new("effect task panicked")
        }
    }
}

/// Fails any invocation of `validator` that takes longer than `limit`.
///
/// The expiry is an effect failure of kind
/// [`TimedOut`](crate::EffectErrorKind::TimedOut), not a field error.
///
/// ```rust
/// use std::time::Duration;
/// use field_rail::ext::tokio_ext::with_timeout;
/// use field_rail::{attach_m, Validator};
///
/// # let rt = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
/// # rt.block_on(async {
/// let slow: Validator<String, String, &str, &str> = attach_m(
///     |name: String| async move {
///         tokio::time::sleep(Duration::from_secs(5)).await;
///         Ok(name)
///     },
///     "name",
/// );
///
/// let err = with_timeout(slow, Duration::from_millis(10))
///     .validate("kim".to_string())
///     .await
///     .unwrap_err();
/// assert!(err.is_timeout());
/// # });
/// ```
pub fn with_timeout<A, B, K, V>(
    validator: Validator<A, B, K, V>,
    limit: Duration,
) -> Validator<A, B, K, V>
where
    A: 'static,
    B: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    Validator::new(move |input: A| -> Effect<'static, Verdict<B, K, V>> {
        let pending = validator.validate(input);
        Box::pin(async move {
            match tokio::time::timeout(limit, pending).await {
                Ok(verdict) => verdict,
                Err(_elapsed) => Err(EffectError::timed_out(limit)),
            }
        })
    })
}

/// Like [`attach_m`](crate::attach_m), but drives each check on its own
/// Tokio task.
///
/// If the task is cancelled (for example because the runtime shuts down) or
/// panics, the invocation fails with an [`EffectError`] rather than a field
/// error.
pub fn attach_spawned<A, B, K, V, C, Fut>(checker: C, key: K) -> Validator<A, B, K, V>
where
    A: 'static,
    C: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<B, V>> + Send + 'static,
    B: Send + 'static,
    K: Clone + Send + Sync + 'static,
    V: Send + 'static,
{
    Validator::new(move |input: A| -> Effect<'static, Verdict<B, K, V>> {
        let pending = checker(input);
        let key = key.clone();
        Box::pin(async move {
            let checked = tokio::spawn(pending).await?;
            Ok::<_, EffectError>(checked.map_err(|message| FieldError::new(key, message)))
        })
    })
}

/// Runs `step` against `initial`, failing with a
/// [`TimedOut`](crate::EffectErrorKind::TimedOut) error if the whole run
/// takes longer than `limit`.
pub async fn run_with_timeout<S, K, V>(
    step: &ValidationStep<S, K, V>,
    initial: S,
    limit: Duration,
) -> Result<ValidationReport<S, K, V>, EffectError>
where
    S: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    match tokio::time::timeout(limit, run(step, initial)).await {
        Ok(outcome) => outcome,
        Err(_elapsed) => Err(EffectError::timed_out(limit).with_context("running validation")),
    }
}
