//! Infrastructure failures raised while an effect is running.
//!
//! An [`EffectError`] is never a validation result. It means the effect behind
//! an effectful checker could not produce a verdict at all (a lookup failed,
//! the task was cancelled, a deadline passed). It travels through the `Err`
//! side of every [`Effect`](crate::Effect) and aborts the run that produced it.

use core::fmt::{self, Display};
use core::time::Duration;

use crate::types::alloc_type::{Box, Cow, String};
use crate::types::ErrorVec;

type DynError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Broad classification of an [`EffectError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectErrorKind {
    /// The effect ran and failed.
    Failed,
    /// The effect was cancelled before producing a verdict.
    Cancelled,
    /// The effect did not finish within its deadline.
    TimedOut,
}

impl Display for EffectErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Failed => "effect failed",
            Self::Cancelled => "effect cancelled",
            Self::TimedOut => "effect timed out",
        };
        f.write_str(label)
    }
}

/// Error wrapper for effect failures: a kind, an optional source error, and a
/// stack of context messages.
///
/// Contexts are pushed as the error travels outward (field, step, span) and
/// are reported most recent first.
///
/// # Examples
///
/// ```
/// use field_rail::{EffectError, EffectErrorKind};
///
/// let err = EffectError::new("connection refused").with_context("checking field `email`");
///
/// assert_eq!(err.kind(), EffectErrorKind::Failed);
/// assert_eq!(err.error_chain(), "checking field `email` -> connection refused");
/// ```
#[must_use]
#[derive(Debug)]
pub struct EffectError {
    kind: EffectErrorKind,
    source: Option<DynError>,
    context: ErrorVec<Cow<'static, str>>,
}

impl EffectError {
    /// Wraps an arbitrary error as a failed effect.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Into<DynError>,
    {
        Self { kind: EffectErrorKind::Failed, source: Some(error.into()), context: ErrorVec::new() }
    }

    /// An effect that was cancelled before it produced a verdict.
    #[inline]
    pub fn cancelled() -> Self {
        Self { kind: EffectErrorKind::Cancelled, source: None, context: ErrorVec::new() }
    }

    /// An effect that exceeded `limit`.
    pub fn timed_out(limit: Duration) -> Self {
        Self {
            kind: EffectErrorKind::TimedOut,
            source: None,
            context: ErrorVec::new(),
        }
        .with_context(alloc::format!("deadline of {}ms exceeded", limit.as_millis()))
    }

    /// Pushes a context message.
    #[inline]
    pub fn with_context<C>(mut self, context: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        self.context.push(context.into());
        self
    }

    #[inline]
    pub fn kind(&self) -> EffectErrorKind {
        self.kind
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.kind == EffectErrorKind::Cancelled
    }

    #[inline]
    pub fn is_timeout(&self) -> bool {
        self.kind == EffectErrorKind::TimedOut
    }

    /// The wrapped error, if the failure came from one.
    #[inline]
    pub fn source_error(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Context messages in LIFO order (most recent first).
    #[inline]
    pub fn context_iter(&self) -> impl Iterator<Item = &str> {
        self.context.iter().rev().map(|ctx| &**ctx)
    }

    /// Renders `ctx -> ctx -> cause`, most recent context first.
    #[must_use]
    pub fn error_chain(&self) -> String {
        alloc::format!("{self}")
    }
}

impl Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in self.context_iter() {
            write!(f, "{ctx} -> ")?;
        }
        match &self.source {
            Some(source) => write!(f, "{source}"),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl core::error::Error for EffectError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn core::error::Error + 'static))
    }
}

impl From<&'static str> for EffectError {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for EffectError {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<DynError> for EffectError {
    #[inline]
    fn from(error: DynError) -> Self {
        Self::new(error)
    }
}

impl From<core::convert::Infallible> for EffectError {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}
