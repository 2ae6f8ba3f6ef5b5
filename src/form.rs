//! Adapter between the engine and a form library.
//!
//! A form library hands over raw text per field and wants field-keyed
//! messages back. [`Form`] is a minimal stand-in for such a library: it keeps
//! raw values by key and receives the errors of a run. Any other view type
//! can take part by implementing [`FormView`].
//!
//! [`validate_form`] ties the pieces together: it builds the composed step
//! from the parsed raw values, runs it, and returns the record only when it
//! is fully valid.
//!
//! # Examples
//!
//! ```
//! use field_rail::{attach, checks, lens, validate_form_default, validation, Form};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Profile { nick: String }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let form: Form<&str, &str> = [("nick", "")].into_iter().collect();
//! let parsed = form.values(["nick"]);
//!
//! let (form, profile) = validate_form_default(
//!     |[nick]: [String; 1]| {
//!         validation(lens!(Profile, nick), nick, attach(checks::not_empty("nick required"), "nick"))
//!     },
//!     form,
//!     parsed,
//! )
//! .await
//! .unwrap();
//!
//! assert_eq!(profile, None);
//! assert_eq!(form.errors_for(&"nick").collect::<Vec<_>>(), vec![&"nick required"]);
//! # });
//! ```

use crate::runner::run;
use crate::step::ValidationStep;
use crate::types::alloc_type::{BTreeMap, String, Vec};
use crate::types::{EffectError, FieldErrors};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Something that can display field-keyed errors.
pub trait FormView<K, V> {
    /// Returns the view with `errors` attached.
    fn with_errors(self, errors: FieldErrors<K, V>) -> Self;
}

/// Raw text values and reported errors for one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: Ord + Serialize, V: Serialize",
        deserialize = "K: Ord + Deserialize<'de>, V: Deserialize<'de>"
    ))
)]
pub struct Form<K, V> {
    values: BTreeMap<K, String>,
    errors: FieldErrors<K, V>,
}

impl<K: Ord, V> Form<K, V> {
    pub fn new() -> Self {
        Self { values: BTreeMap::new(), errors: FieldErrors::new() }
    }

    /// Sets the raw value of `key`.
    pub fn with_value(mut self, key: K, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    pub fn value(&self, key: &K) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Raw values for `keys`, in the order given, or `None` if any is missing.
    ///
    /// This is the "already parsed" input for [`validate_form`]: `None` means
    /// the submission was incomplete and no validation should run.
    pub fn values<const N: usize>(&self, keys: [K; N]) -> Option<[String; N]> {
        let values: Vec<String> =
            keys.iter().map(|key| self.values.get(key).cloned()).collect::<Option<_>>()?;
        values.try_into().ok()
    }

    pub fn errors(&self) -> &FieldErrors<K, V> {
        &self.errors
    }

    /// Messages routed to `key`, in the order they were reported.
    pub fn errors_for<'a>(&'a self, key: &'a K) -> impl Iterator<Item = &'a V> + 'a
    where
        K: PartialEq,
    {
        self.errors.messages_for(key)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<K: Ord, V> Default for Form<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, T: Into<String>> FromIterator<(K, T)> for Form<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |form, (key, value)| form.with_value(key, value))
    }
}

impl<K, V> FormView<K, V> for Form<K, V> {
    fn with_errors(mut self, errors: FieldErrors<K, V>) -> Self {
        self.errors = errors;
        self
    }
}

/// Builds a step from `parsed`, runs it against `empty`, and reports back.
///
/// * `parsed == None`: the form library could not produce raw values; nothing
///   runs and the view is returned unchanged with no record.
/// * No errors: the view is returned unchanged with `Some(record)`.
/// * Errors: the view carries them and the record is `None`.
///
/// Effect failures abort and are returned as `Err`.
pub async fn validate_form<S, I, K, V, W, B>(
    build: B,
    empty: S,
    view: W,
    parsed: Option<I>,
) -> Result<(W, Option<S>), EffectError>
where
    B: FnOnce(I) -> ValidationStep<S, K, V>,
    W: FormView<K, V>,
    S: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    let Some(inputs) = parsed else {
        return Ok((view, None));
    };

    let step = build(inputs);
    let (record, errors) = run(&step, empty).await?.into_parts();

    if errors.is_empty() {
        Ok((view, Some(record)))
    } else {
        Ok((view.with_errors(errors), None))
    }
}

/// [`validate_form`] starting from `S::default()`.
pub async fn validate_form_default<S, I, K, V, W, B>(
    build: B,
    view: W,
    parsed: Option<I>,
) -> Result<(W, Option<S>), EffectError>
where
    B: FnOnce(I) -> ValidationStep<S, K, V>,
    W: FormView<K, V>,
    S: Default + Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
{
    validate_form(build, S::default(), view, parsed).await
}
