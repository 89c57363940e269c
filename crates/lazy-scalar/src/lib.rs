// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deferred scalar values and lazy reducers over them.
//!
//! A [`Scalar`] is a value that is only computed when [`Scalar::value`] is
//! called. Computing it may fail; the failure type is the scalar's own
//! [`Scalar::Error`] and is returned to the caller unchanged.
//!
//! On top of that abstraction the crate provides:
//!
//! - [`ScalarSeq`]: a sequence of scalars that can be walked again on every
//!   evaluation (collections, `map` chains, [`Replay`]).
//! - [`Reduced`]: a left fold of a sequence of scalars with a caller-supplied
//!   combinator, evaluated on every call.
//! - [`LowestOf`] / [`HighestOf`]: the smallest / greatest element of a
//!   sequence, built on [`Reduced`].
//! - [`Constant`], [`FromFn`] and [`Sticky`]: a fixed value, a closure adapter
//!   and an opt-in memoizing decorator.
//!
//! ```
//! use lazy_scalar::{EmptySequence, LowestOf, Scalar};
//!
//! let lowest = LowestOf::of_items(["Banana", "Apple", "Orange"]);
//! assert_eq!(lowest.value(), Ok("Apple"));
//!
//! let nothing = LowestOf::of_items(Vec::<char>::new());
//! assert_eq!(nothing.value(), Err(EmptySequence));
//! ```
//!
//! # Evaluation Contract
//!
//! Nothing is built or evaluated at construction. Each call to `value()` walks
//! the sequence left to right, building (for lazy sequences) and evaluating
//! every element exactly once, and stops at the first failure. Results are never cached unless an element is wrapped in
//! [`Sticky`]. No type in this crate is thread-safe beyond what its contents
//! provide.
#![forbid(unsafe_code)]

mod constant;
mod error;
mod extrema;
mod reduced;
mod seq;
mod sticky;

pub use constant::Constant;
pub use error::{EmptySequence, ScalarError};
pub use extrema::{HighestOf, LowestOf};
pub use reduced::Reduced;
pub use seq::{replay, Replay, ScalarSeq};
pub use sticky::Sticky;

use std::rc::Rc;
use std::sync::Arc;

/// A value computed on demand.
///
/// Implementations hold whatever they need to produce [`Item`](Scalar::Item)
/// and do the work inside [`value`](Scalar::value). Calling `value` twice does
/// the work twice.
pub trait Scalar {
    /// Type of the produced value.
    type Item;
    /// Failure raised while producing the value.
    type Error;

    /// Compute the value.
    fn value(&self) -> Result<Self::Item, Self::Error>;

    /// Erase the concrete type so scalars of different kinds can share a list.
    fn boxed<'a>(self) -> BoxedScalar<'a, Self::Item, Self::Error>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// Type-erased [`Scalar`].
pub type BoxedScalar<'a, T, E> = Box<dyn Scalar<Item = T, Error = E> + 'a>;

impl<S: Scalar + ?Sized> Scalar for &S {
    type Item = S::Item;
    type Error = S::Error;

    fn value(&self) -> Result<S::Item, S::Error> {
        (**self).value()
    }
}

impl<S: Scalar + ?Sized> Scalar for Box<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn value(&self) -> Result<S::Item, S::Error> {
        (**self).value()
    }
}

impl<S: Scalar + ?Sized> Scalar for Rc<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn value(&self) -> Result<S::Item, S::Error> {
        (**self).value()
    }
}

impl<S: Scalar + ?Sized> Scalar for Arc<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn value(&self) -> Result<S::Item, S::Error> {
        (**self).value()
    }
}

/// Plain function pointers are scalars.
///
/// Non-capturing closures coerce to `fn() -> Result<T, E>`, which makes a
/// literal array of them a valid homogeneous list.
impl<T, E> Scalar for fn() -> Result<T, E> {
    type Item = T;
    type Error = E;

    fn value(&self) -> Result<T, E> {
        self()
    }
}

/// [`Scalar`] backed by a closure. Built by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Wrap a closure as a [`Scalar`]. The closure runs on every `value()` call.
pub fn from_fn<F, T, E>(f: F) -> FromFn<F>
where
    F: Fn() -> Result<T, E>,
{
    FromFn(f)
}

impl<F, T, E> Scalar for FromFn<F>
where
    F: Fn() -> Result<T, E>,
{
    type Item = T;
    type Error = E;

    fn value(&self) -> Result<T, E> {
        (self.0)()
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // ── 1. closures run on every call ───────────────────────────────────

    #[test]
    fn from_fn_evaluates_each_time() {
        let calls = Cell::new(0);
        let scalar = from_fn(|| {
            calls.set(calls.get() + 1);
            Ok::<_, ScalarError>(calls.get())
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(scalar.value().unwrap(), 1);
        assert_eq!(scalar.value().unwrap(), 2);
    }

    // ── 2. wrappers forward to the inner scalar ─────────────────────────

    fn eval<S: Scalar>(scalar: S) -> Result<S::Item, S::Error> {
        scalar.value()
    }

    #[test]
    fn smart_pointers_forward() {
        let inner = Constant::<_, ScalarError>::new(7_u8);
        assert_eq!(eval(&inner).unwrap(), 7);
        assert_eq!(eval(Box::new(inner.clone())).unwrap(), 7);
        assert_eq!(eval(Rc::new(inner.clone())).unwrap(), 7);
        assert_eq!(eval(Arc::new(inner)).unwrap(), 7);
    }

    // ── 3. boxed scalars of different kinds share a list ────────────────

    #[test]
    fn boxed_scalars_mix_kinds() {
        let list: Vec<BoxedScalar<'_, i32, ScalarError>> = vec![
            Constant::new(1).boxed(),
            from_fn(|| Ok::<_, ScalarError>(2)).boxed(),
            from_fn(|| Err::<i32, _>(ScalarError::failed("nope"))).boxed(),
        ];
        assert_eq!(list[0].value().unwrap(), 1);
        assert_eq!(list[1].value().unwrap(), 2);
        assert_eq!(list[2].value(), Err(ScalarError::failed("nope")));
    }

    // ── 4. function pointers ────────────────────────────────────────────

    #[test]
    fn function_pointer_is_scalar() {
        let scalar: fn() -> Result<&'static str, ScalarError> = || Ok("Kiwi");
        assert_eq!(scalar.value().unwrap(), "Kiwi");
    }
}
