use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// The user-facing outcome of a validation: a fully valid value or every
/// error that was found.
///
/// A [`ValidationReport`](crate::ValidationReport) converts into this type so
/// callers can never mistake a partially updated record for a valid one.
///
/// # Variants
///
/// * `Valid(A)` - the validated value
/// * `Invalid(ErrorVec<E>)` - one or more errors, in the order they were found
///
/// # Examples
///
/// ```
/// use field_rail::{FieldError, Validation};
///
/// let ok = Validation::<FieldError<&str, &str>, u32>::valid(30);
/// assert!(ok.is_valid());
///
/// let bad = Validation::<_, u32>::invalid(FieldError::new("age", "not a number"));
/// assert_eq!(bad.iter_errors().next().map(|e| e.key), Some("age"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid value from an iterator of errors.
    ///
    /// ```
    /// use field_rail::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many(["name required", "age required"]);
    /// assert_eq!(v.into_errors().map(|errors| errors.len()), Some(2));
    /// ```
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Maps the valid value, leaving errors untouched.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Maps every error, leaving a valid value untouched.
    ///
    /// ```
    /// use field_rail::{FieldError, Validation};
    ///
    /// let v = Validation::<_, ()>::invalid(FieldError::new("age", "too young"));
    /// let keys = v.map_err(|e| e.key);
    /// assert_eq!(keys.into_errors().unwrap().to_vec(), vec!["age"]);
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Validation<G, A>
    where
        F: Fn(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.into_iter().map(f).collect()),
        }
    }

    /// Converts into a `Result` carrying every error on the `Err` side.
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Wraps a `Result`, turning its error into a single-entry error list.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Iterates over the errors; empty when valid.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        match self {
            Self::Valid(_) => [].iter(),
            Self::Invalid(errors) => errors.iter(),
        }
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}
