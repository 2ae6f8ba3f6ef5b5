//! Tracing integration for validation runs.
//!
//! Effects run inside the span they are attached to, and an [`EffectError`]
//! escaping that span gains an `in span '<name>'` context entry, so a failed
//! lookup can be traced back to the run that triggered it.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! field-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::types::EffectError;

/// Extension trait for effect futures that ties them to a tracing span.
///
/// # Example
///
/// ```rust
/// use field_rail::ext::tracing_ext::EffectSpanExt;
/// use field_rail::EffectError;
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # rt.block_on(async {
/// let span = tracing::info_span!("lookup");
/// let err = async { Err::<(), _>(EffectError::new("db down")) }
///     .with_span(span)
///     .await
///     .unwrap_err();
///
/// assert!(err.error_chain().ends_with("db down"));
/// # });
/// ```
pub trait EffectSpanExt<T>: Future<Output = Result<T, EffectError>> + Sized {
    /// Polls the future inside the current span.
    fn with_span_context(self) -> SpanContextFuture<Self> {
        SpanContextFuture { inner: self, span: Span::current() }
    }

    /// Polls the future inside `span`.
    fn with_span(self, span: Span) -> SpanContextFuture<Self> {
        SpanContextFuture { inner: self, span }
    }
}

impl<F, T> EffectSpanExt<T> for F where F: Future<Output = Result<T, EffectError>> {}

pin_project! {
    /// Future wrapper that enters a span while polling and records it on
    /// failure.
    ///
    /// Created by [`EffectSpanExt::with_span_context`] or [`EffectSpanExt::with_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanContextFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T> Future for SpanContextFuture<F>
where
    F: Future<Output = Result<T, EffectError>>,
{
    type Output = Result<T, EffectError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(value)) => Poll::Ready(Ok(value)),
            Poll::Ready(Err(error)) => Poll::Ready(Err(attach_span(error, this.span))),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Records the current span on `error`.
pub fn instrument_effect_error(error: EffectError) -> EffectError {
    attach_span(error, &Span::current())
}

fn attach_span(error: EffectError, span: &Span) -> EffectError {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    error.with_context(alloc::format!("in span '{}'", name))
}
