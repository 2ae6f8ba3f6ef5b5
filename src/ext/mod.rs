//! Runtime- and ecosystem-specific extensions.
//!
//! The core engine only awaits futures and never depends on a particular
//! runtime. The modules here opt into one:
//!
//! - `tokio_ext` (feature `tokio`): deadlines and task-backed checkers.
//! - `tracing_ext` (feature `tracing`): span context for effect failures.

#[cfg(feature = "tokio")]
pub mod tokio_ext;

#[cfg(feature = "tracing")]
pub mod tracing_ext;
