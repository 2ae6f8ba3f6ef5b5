//! Keyed, effectful validators and their short-circuiting composition.
//!
//! A [`Validator<A, B, K, V>`] turns an `A` into an [`Effect`] that resolves to
//! either a checked `B` or a [`FieldError<K, V>`]. Validators for one field
//! compose with [`compose`] (or [`Validator::and_then`]): the first rejection
//! stops the chain, so one malformed value yields exactly one error.
//!
//! Together with [`Validator::identity`] this forms a category: composition is
//! associative and identity is a unit on both sides.
//!
//! # Examples
//!
//! ```
//! use field_rail::{attach, checks, FieldError};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let name = attach(checks::not_empty("required"), "name")
//!     .and_then(attach(checks::starts_with("A", "must start with A"), "name"));
//!
//! assert_eq!(name.validate("Alice".to_string()).await.unwrap(), Ok("Alice".to_string()));
//! assert_eq!(
//!     name.validate(String::new()).await.unwrap(),
//!     Err(FieldError::new("name", "required")),
//! );
//! # });
//! ```

use core::fmt::{self, Display};
use core::future::Future;

use crate::types::alloc_type::{Arc, Box};
use crate::types::{Effect, EffectError, FieldError, Verdict};

type ValidateFn<A, B, K, V> = dyn Fn(A) -> Effect<'static, Verdict<B, K, V>> + Send + Sync;

/// A keyed, effectful, fallible transformation from `A` to `B`.
///
/// The wrapper is open: [`Validator::new`] accepts any function producing an
/// [`Effect`], and [`attach`], [`attach_m`] and [`try_attach_m`] are only
/// conveniences on top of it.
#[must_use]
pub struct Validator<A, B, K, V> {
    run: Arc<ValidateFn<A, B, K, V>>,
}

impl<A, B, K, V> Validator<A, B, K, V> {
    /// Wraps a raw validation function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> Effect<'static, Verdict<B, K, V>> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Starts validating `input`.
    ///
    /// Pure checkers run right away and return a ready effect; effectful ones
    /// do their work when the effect is awaited.
    #[inline]
    pub fn validate(&self, input: A) -> Effect<'static, Verdict<B, K, V>> {
        (self.run)(input)
    }
}

impl<A, K, V> Validator<A, A, K, V>
where
    A: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    /// The validator that accepts every input unchanged.
    pub fn identity() -> Self {
        Self::new(|input: A| -> Effect<'static, Verdict<A, K, V>> {
            Box::pin(core::future::ready(Ok::<Verdict<A, K, V>, EffectError>(Ok(input))))
        })
    }
}

impl<A, B, K, V> Validator<A, B, K, V>
where
    A: 'static,
    B: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    /// Runs `next` on this validator's output. See [`compose`].
    #[inline]
    pub fn and_then<C>(self, next: Validator<B, C, K, V>) -> Validator<A, C, K, V>
    where
        C: Send + 'static,
    {
        compose(self, next)
    }

    /// Transforms the checked value without adding a failure path.
    pub fn map<C, F>(self, f: F) -> Validator<A, C, K, V>
    where
        C: Send + 'static,
        F: Fn(B) -> C + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Validator::new(move |input: A| -> Effect<'static, Verdict<C, K, V>> {
            let verdict = self.validate(input);
            let f = Arc::clone(&f);
            Box::pin(async move { Ok::<_, EffectError>(verdict.await?.map(|value| f(value))) })
        })
    }

    /// Rewrites the failure message, keeping the key.
    pub fn map_message<W, F>(self, f: F) -> Validator<A, B, K, W>
    where
        W: Send + 'static,
        F: Fn(V) -> W + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Validator::new(move |input: A| -> Effect<'static, Verdict<B, K, W>> {
            let verdict = self.validate(input);
            let f = Arc::clone(&f);
            Box::pin(async move {
                let verdict = verdict.await?;
                let verdict = verdict.map_err(|error| error.map_message(|message| f(message)));
                Ok::<_, EffectError>(verdict)
            })
        })
    }
}

impl<A, B, K, V> Clone for Validator<A, B, K, V> {
    fn clone(&self) -> Self {
        Self { run: Arc::clone(&self.run) }
    }
}

impl<A, B, K, V> fmt::Debug for Validator<A, B, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

/// Wraps a pure checker, pairing any rejection with `key`.
pub fn attach<A, B, K, V, C>(checker: C, key: K) -> Validator<A, B, K, V>
where
    A: 'static,
    C: Fn(A) -> Result<B, V> + Send + Sync + 'static,
    B: Send + 'static,
    K: Clone + Send + Sync + 'static,
    V: Send + 'static,
{
    Validator::new(move |input: A| -> Effect<'static, Verdict<B, K, V>> {
        let verdict = checker(input).map_err(|message| FieldError::new(key.clone(), message));
        Box::pin(core::future::ready(Ok::<_, EffectError>(verdict)))
    })
}

/// Wraps an effectful checker whose effect cannot fail on its own.
///
/// The checker is called once per validation, when the validator is invoked;
/// its future is awaited exactly once.
pub fn attach_m<A, B, K, V, C, Fut>(checker: C, key: K) -> Validator<A, B, K, V>
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
            Ok::<_, EffectError>(pending.await.map_err(|message| FieldError::new(key, message)))
        })
    })
}

/// Wraps an effectful checker whose effect may itself fail.
///
/// An `Err` from the effect is an infrastructure failure, not a validation
/// result: it becomes an [`EffectError`] tagged with the field key and aborts
/// the run instead of landing in the error list.
///
/// ```
/// use field_rail::{try_attach_m, EffectError};
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # rt.block_on(async {
/// let email = try_attach_m(
///     |address: String| async move {
///         if address.ends_with("@down.example") {
///             return Err(EffectError::new("directory unavailable"));
///         }
///         Ok(if address.contains('@') { Ok(address) } else { Err("invalid email") })
///     },
///     "email",
/// );
///
/// let err = email.validate("bob@down.example".to_string()).await.unwrap_err();
/// assert_eq!(err.error_chain(), "checking field `email` -> directory unavailable");
/// # });
/// ```
pub fn try_attach_m<A, B, K, V, X, C, Fut>(checker: C, key: K) -> Validator<A, B, K, V>
where
    A: 'static,
    C: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Result<B, V>, X>> + Send + 'static,
    X: Into<EffectError>,
    B: Send + 'static,
    K: Display + Clone + Send + Sync + 'static,
    V: Send + 'static,
{
    Validator::new(move |input: A| -> Effect<'static, Verdict<B, K, V>> {
        let pending = checker(input);
        let key = key.clone();
        Box::pin(async move {
            match pending.await {
                Ok(verdict) => Ok(verdict.map_err(|message| FieldError::new(key, message))),
                Err(error) => {
                    let error: EffectError = error.into();
                    Err(error.with_context(alloc::format!("checking field `{key}`")))
                },
            }
        })
    })
}

/// Runs `first`, then feeds its output to `second`.
///
/// If `first` rejects its input the composed validator fails with that error
/// and `second` is never invoked, so none of its effects happen. Effect
/// failures from either side propagate unchanged.
pub fn compose<A, B, C, K, V>(
    first: Validator<A, B, K, V>,
    second: Validator<B, C, K, V>,
) -> Validator<A, C, K, V>
where
    A: 'static,
    B: Send + 'static,
    C: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    Validator::new(move |input: A| -> Effect<'static, Verdict<C, K, V>> {
        let head = first.validate(input);
        let second = second.clone();
        Box::pin(async move {
            match head.await? {
                Ok(value) => second.validate(value).await,
                Err(error) => Ok(Err(error)),
            }
        })
    })
}
