use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single validation failure: the key of the offending field paired with a
/// human-readable message.
///
/// The key is whatever the caller used when attaching the checker (usually the
/// form field name), so an error sink can route the message back to the
/// place it belongs.
///
/// # Examples
///
/// ```
/// use field_rail::FieldError;
///
/// let err = FieldError::new("email", "must contain @");
/// assert_eq!(err.key(), &"email");
/// assert_eq!(err.to_string(), "email: must contain @");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct FieldError<K, V> {
    pub key: K,
    pub message: V,
}

impl<K, V> FieldError<K, V> {
    #[inline]
    pub fn new(key: K, message: V) -> Self {
        Self { key, message }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn message(&self) -> &V {
        &self.message
    }

    /// Splits the error into its `(key, message)` pair.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.message)
    }

    /// Rewrites the message, keeping the key.
    #[inline]
    pub fn map_message<W, F>(self, f: F) -> FieldError<K, W>
    where
        F: FnOnce(V) -> W,
    {
        FieldError { key: self.key, message: f(self.message) }
    }
}

impl<K, V> From<(K, V)> for FieldError<K, V> {
    #[inline]
    fn from((key, message): (K, V)) -> Self {
        Self::new(key, message)
    }
}

impl<K, V> From<FieldError<K, V>> for (K, V) {
    #[inline]
    fn from(error: FieldError<K, V>) -> Self {
        error.into_pair()
    }
}

impl<K: Display, V: Display> Display for FieldError<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}
