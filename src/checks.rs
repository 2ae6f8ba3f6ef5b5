//! Reusable pure checkers.
//!
//! A checker is any `Fn(A) -> Result<B, V>`: it either rejects its input with
//! a message or passes it on, possibly converted (`parse` turns text into a
//! number). Each constructor here returns such a closure, ready for
//! [`attach`](crate::attach).
//!
//! Checkers for one field chain with [`and_then`]; the first rejection wins
//! and later checkers never run.
//!
//! ```
//! use field_rail::checks;
//!
//! let account = checks::and_then(
//!     checks::not_empty("account number required"),
//!     checks::length_eq(10, "account number not correct length"),
//! );
//!
//! assert_eq!(account("1234567890".to_string()), Ok("1234567890".to_string()));
//! assert_eq!(account(String::new()), Err("account number required"));
//! assert_eq!(account("123".to_string()), Err("account number not correct length"));
//! ```

use core::str::FromStr;

use crate::types::alloc_type::String;

/// Chains two checkers: `second` only sees values `first` accepted.
pub fn and_then<A, B, C, V, F, G>(first: F, second: G) -> impl Fn(A) -> Result<C, V> + Clone
where
    F: Fn(A) -> Result<B, V> + Clone,
    G: Fn(B) -> Result<C, V> + Clone,
{
    move |input: A| first(input).and_then(&second)
}

/// Rejects values for which `accept` returns `false`.
pub fn predicate<A, V, P>(accept: P, message: V) -> impl Fn(A) -> Result<A, V> + Clone
where
    P: Fn(&A) -> bool + Clone,
    V: Clone,
{
    move |input: A| if accept(&input) { Ok(input) } else { Err(message.clone()) }
}

/// Rejects empty text.
pub fn not_empty<V: Clone>(message: V) -> impl Fn(String) -> Result<String, V> + Clone {
    predicate(|text: &String| !text.is_empty(), message)
}

/// Rejects text shorter than `min` characters.
pub fn min_length<V: Clone>(
    min: usize,
    message: V,
) -> impl Fn(String) -> Result<String, V> + Clone {
    predicate(move |text: &String| text.chars().count() >= min, message)
}

/// Rejects text longer than `max` characters.
pub fn max_length<V: Clone>(
    max: usize,
    message: V,
) -> impl Fn(String) -> Result<String, V> + Clone {
    predicate(move |text: &String| text.chars().count() <= max, message)
}

/// Rejects text that is not exactly `len` characters long.
pub fn length_eq<V: Clone>(len: usize, message: V) -> impl Fn(String) -> Result<String, V> + Clone {
    predicate(move |text: &String| text.chars().count() == len, message)
}

/// Rejects text that does not begin with `prefix`.
pub fn starts_with<V: Clone>(
    prefix: impl Into<String>,
    message: V,
) -> impl Fn(String) -> Result<String, V> + Clone {
    let prefix = prefix.into();
    predicate(move |text: &String| text.starts_with(prefix.as_str()), message)
}

/// Accepts a `(value, confirmation)` pair only when both sides are equal,
/// passing the value on.
///
/// ```
/// use field_rail::checks;
///
/// let confirm = checks::matching("fields do not match.");
/// assert_eq!(confirm(("hi".to_string(), "hi".to_string())), Ok("hi".to_string()));
/// assert_eq!(confirm(("hi".to_string(), "bye".to_string())), Err("fields do not match."));
/// ```
pub fn matching<A, V>(message: V) -> impl Fn((A, A)) -> Result<A, V> + Clone
where
    A: PartialEq,
    V: Clone,
{
    move |(value, confirmation): (A, A)| {
        if value == confirmation {
            Ok(value)
        } else {
            Err(message.clone())
        }
    }
}

/// Parses text into `T`, rejecting anything `T::from_str` refuses.
pub fn parse<T, V>(message: V) -> impl Fn(String) -> Result<T, V> + Clone
where
    T: FromStr,
    V: Clone,
{
    move |text: String| text.trim().parse::<T>().map_err(|_| message.clone())
}
