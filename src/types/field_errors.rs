use crate::types::alloc_type::Vec;
use crate::types::{ErrorVec, FieldError};
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered list of [`FieldError`]s produced by a validation run.
///
/// Entries keep insertion order (left to right across composed steps) and
/// duplicates are allowed. Backed by [`ErrorVec`], so the common single-error
/// case stays inline.
///
/// # Examples
///
/// ```
/// use field_rail::{FieldError, FieldErrors};
///
/// let mut errors = FieldErrors::new();
/// errors.push(FieldError::new("name", "required"));
/// errors.push(FieldError::new("age", "not a number"));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.messages_for(&"age").collect::<Vec<_>>(), vec![&"not a number"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors<K, V> {
    items: ErrorVec<FieldError<K, V>>,
}

impl<K, V> FieldErrors<K, V> {
    /// Creates an empty error list.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    /// Appends one error.
    #[inline]
    pub fn push(&mut self, error: FieldError<K, V>) {
        self.items.push(error);
    }

    /// Appends every error of `other`, preserving its order.
    #[inline]
    pub fn append(&mut self, other: FieldErrors<K, V>) {
        self.items.extend(other.items);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn first(&self) -> Option<&FieldError<K, V>> {
        self.items.first()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FieldError<K, V>> {
        self.items.iter()
    }

    /// Keys of all errors, in order. A key appears once per error.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.iter().map(FieldError::key)
    }

    /// Messages reported for `key`, in order.
    pub fn messages_for<'a, Q>(&'a self, key: &'a Q) -> impl Iterator<Item = &'a V> + 'a
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.items.iter().filter(move |error| error.key == *key).map(FieldError::message)
    }

    /// Returns `true` if at least one error was reported for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.items.iter().any(|error| error.key == *key)
    }

    /// Consumes the list, returning the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<FieldError<K, V>> {
        self.items
    }

    /// Consumes the list, returning plain `(key, message)` pairs.
    pub fn into_pairs(self) -> Vec<(K, V)> {
        self.items.into_iter().map(FieldError::into_pair).collect()
    }
}

impl<K, V> Default for FieldErrors<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash, V: Hash> Hash for FieldErrors<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<K, V> From<FieldError<K, V>> for FieldErrors<K, V> {
    fn from(error: FieldError<K, V>) -> Self {
        let mut errors = Self::new();
        errors.push(error);
        errors
    }
}

impl<K, V> From<ErrorVec<FieldError<K, V>>> for FieldErrors<K, V> {
    fn from(items: ErrorVec<FieldError<K, V>>) -> Self {
        Self { items }
    }
}

impl<K, V> Extend<FieldError<K, V>> for FieldErrors<K, V> {
    fn extend<I: IntoIterator<Item = FieldError<K, V>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<K, V> FromIterator<FieldError<K, V>> for FieldErrors<K, V> {
    fn from_iter<I: IntoIterator<Item = FieldError<K, V>>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<K, V> FromIterator<(K, V)> for FieldErrors<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { items: iter.into_iter().map(FieldError::from).collect() }
    }
}

impl<K, V> IntoIterator for FieldErrors<K, V> {
    type Item = FieldError<K, V>;
    type IntoIter = smallvec::IntoIter<[FieldError<K, V>; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a FieldErrors<K, V> {
    type Item = &'a FieldError<K, V>;
    type IntoIter = core::slice::Iter<'a, FieldError<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
