//! Field accessors: a getter/setter pair that isolates one slice of a record.
//!
//! A validation step only ever touches the slice its lens focuses on, which
//! is what makes it safe to keep running later steps after an earlier one
//! failed.
//!
//! # Laws
//!
//! Every lens is expected to satisfy:
//!
//! 1. **SetGet**: `lens.get(&lens.set(source, value)) == &value`
//! 2. **GetSet**: `lens.set(source, lens.get(&source).clone()) == source`
//!
//! Neither is enforced at runtime; a lens that breaks them is a programming
//! error.
//!
//! # Examples
//!
//! ```
//! use field_rail::lens;
//! use field_rail::lens::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { name: String, number: String }
//!
//! let name = lens!(Account, name);
//! let account = Account { name: String::new(), number: "1".into() };
//!
//! let updated = name.set(account, "alice".to_string());
//! assert_eq!(name.get(&updated), "alice");
//! assert_eq!(updated.number, "1");
//! ```

use core::fmt;
use core::marker::PhantomData;

/// Get/set access to a field of type `A` inside a record of type `S`.
pub trait Lens<S, A> {
    /// Borrows the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns a new record with the focused field replaced by `value`.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused field with `function` applied to its current value.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let value = function(self.get(&source));
        self.set(source, value)
    }

    /// Focuses through this lens and then through `inner`.
    ///
    /// ```
    /// use field_rail::lens;
    /// use field_rail::lens::Lens;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Address { city: String }
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Customer { address: Address }
    ///
    /// let city = lens!(Customer, address).compose(lens!(Address, city));
    /// let customer = Customer { address: Address { city: "Seoul".into() } };
    ///
    /// let moved = city.set(customer, "Busan".to_string());
    /// assert_eq!(moved.address.city, "Busan");
    /// ```
    fn compose<B, L>(self, inner: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens { outer: self, inner, _marker: PhantomData }
    }
}

/// A lens built from a getter closure and a setter closure.
///
/// The [`lens!`](crate::lens!) macro is the usual way to build one for a
/// plain struct field.
pub struct FieldLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S, A) -> S>,
}

impl<S, A, G, St> FieldLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// ```
    /// use field_rail::lens::{FieldLens, Lens};
    ///
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x = FieldLens::new(|p: &Point| &p.x, |p: Point, x: i32| Point { x, ..p });
    /// assert_eq!(*x.get(&Point { x: 3, y: 4 }), 3);
    /// ```
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self { getter, setter, _marker: PhantomData }
    }
}

impl<S, A, G, St> Lens<S, A> for FieldLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    #[inline]
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    #[inline]
    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FieldLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> fmt::Debug for FieldLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldLens").finish_non_exhaustive()
    }
}

/// Two lenses chained outer-to-inner. Built by [`Lens::compose`].
///
/// The intermediate type must be owned (`'static`) and `Clone`, since `set`
/// rebuilds it from a copy.
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.outer.get(&source).clone();
        let intermediate = self.inner.set(intermediate, value);
        self.outer.set(source, intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self { outer: self.outer.clone(), inner: self.inner.clone(), _marker: PhantomData }
    }
}

impl<L1, L2, A> fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedLens").finish_non_exhaustive()
    }
}
