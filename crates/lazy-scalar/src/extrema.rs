// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lowest and highest element of a sequence of scalars.
//!
//! Both reducers are thin [`Reduced`] folds. They accept three input shapes,
//! which all end up as the same re-walkable [`ScalarSeq`] form:
//!
//! | constructor  | input                                                   |
//! |--------------|---------------------------------------------------------|
//! | `of_items`   | plain values, each wrapped in a [`Constant`]            |
//! | `of_scalars` | a fixed array of scalars                                |
//! | `new`        | any [`ScalarSeq`]: collections, `map` chains, `Replay`  |
//!
//! # Tie-break
//!
//! The fold keeps the accumulator only when it is strictly better than the
//! next candidate. On a tie the later element wins, so
//! `LowestOf::of_items([a, b])` with `a == b` yields `b`. Incomparable pairs
//! (e.g. `NaN`) also resolve to the later element.

use std::fmt;

use crate::{Constant, EmptySequence, Reduced, Scalar, ScalarSeq};

type Pick<T> = fn(T, T) -> T;

fn lower<T: PartialOrd>(first: T, second: T) -> T {
    if first < second {
        first
    } else {
        second
    }
}

fn higher<T: PartialOrd>(first: T, second: T) -> T {
    if first > second {
        first
    } else {
        second
    }
}

/// Smallest element of a sequence of scalars.
///
/// ```
/// use lazy_scalar::{from_fn, LowestOf, Scalar, ScalarError};
///
/// let lowest = LowestOf::of_scalars([
///     from_fn(|| Ok::<_, ScalarError>(5)).boxed(),
///     from_fn(|| Ok::<_, ScalarError>(3)).boxed(),
///     from_fn(|| Ok::<_, ScalarError>(9)).boxed(),
/// ]);
/// assert_eq!(lowest.value(), Ok(3));
/// ```
///
/// Mapped iterators are rebuilt on every `value()` call, so scalars are
/// created lazily too:
///
/// ```
/// use lazy_scalar::{from_fn, LowestOf, Scalar, ScalarError};
///
/// let lowest = LowestOf::new((1..=3).map(|n| from_fn(move || Ok::<_, ScalarError>(n * 10))));
/// assert_eq!(lowest.value(), Ok(10));
/// ```
pub struct LowestOf<Q: ScalarSeq> {
    result: Reduced<Q, Pick<Q::Item>>,
}

impl<Q> LowestOf<Q>
where
    Q: ScalarSeq,
    Q::Item: PartialOrd,
{
    /// Lowest of any re-walkable sequence of scalars.
    pub fn new(scalars: Q) -> Self {
        let pick: Pick<Q::Item> = lower;
        Self {
            result: Reduced::new(pick, scalars),
        }
    }
}

impl<S, const N: usize> LowestOf<[S; N]>
where
    S: Scalar,
    S::Item: PartialOrd,
{
    /// Lowest of a fixed list of scalars.
    pub fn of_scalars(scalars: [S; N]) -> Self {
        Self::new(scalars)
    }
}

impl<T> LowestOf<Vec<Constant<T>>>
where
    T: PartialOrd + Clone,
{
    /// Lowest of plain values.
    ///
    /// The only possible failure is [`EmptySequence`].
    pub fn of_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(items.into_iter().map(Constant::new).collect())
    }
}

impl<Q> Scalar for LowestOf<Q>
where
    Q: ScalarSeq,
    Q::Error: From<EmptySequence>,
{
    type Item = Q::Item;
    type Error = Q::Error;

    fn value(&self) -> Result<Q::Item, Q::Error> {
        self.result.value()
    }
}

impl<Q: ScalarSeq + fmt::Debug> fmt::Debug for LowestOf<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LowestOf").field(&self.result).finish()
    }
}

/// Greatest element of a sequence of scalars.
///
/// Same construction forms, laziness and failure rules as [`LowestOf`].
pub struct HighestOf<Q: ScalarSeq> {
    result: Reduced<Q, Pick<Q::Item>>,
}

impl<Q> HighestOf<Q>
where
    Q: ScalarSeq,
    Q::Item: PartialOrd,
{
    /// Highest of any re-walkable sequence of scalars.
    pub fn new(scalars: Q) -> Self {
        let pick: Pick<Q::Item> = higher;
        Self {
            result: Reduced::new(pick, scalars),
        }
    }
}

impl<S, const N: usize> HighestOf<[S; N]>
where
    S: Scalar,
    S::Item: PartialOrd,
{
    /// Highest of a fixed list of scalars.
    pub fn of_scalars(scalars: [S; N]) -> Self {
        Self::new(scalars)
    }
}

impl<T> HighestOf<Vec<Constant<T>>>
where
    T: PartialOrd + Clone,
{
    /// Highest of plain values.
    pub fn of_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(items.into_iter().map(Constant::new).collect())
    }
}

impl<Q> Scalar for HighestOf<Q>
where
    Q: ScalarSeq,
    Q::Error: From<EmptySequence>,
{
    type Item = Q::Item;
    type Error = Q::Error;

    fn value(&self) -> Result<Q::Item, Q::Error> {
        self.result.value()
    }
}

impl<Q: ScalarSeq + fmt::Debug> fmt::Debug for HighestOf<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HighestOf").field(&self.result).finish()
    }
}
