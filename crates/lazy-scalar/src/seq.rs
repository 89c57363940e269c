// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sequences of scalars that can be walked more than once.
//!
//! Reducers walk their sequence from the start on every `value()` call. Stored
//! collections (`Vec`, arrays, slices) hand out references to the scalars they
//! already hold. Lazy sources (`Iterator::map` chains, or anything wrapped in
//! [`Replay`]) are cloned and re-run, so each pass builds its scalars one at a
//! time and a pass that stops early never builds the rest.

use std::fmt;
use std::iter::Map;
use std::slice;

use crate::Scalar;

/// A re-walkable sequence of scalars sharing one item and error type.
pub trait ScalarSeq {
    /// Item produced by every scalar in the sequence.
    type Item;
    /// Error raised by every scalar in the sequence.
    type Error;
    /// Element handed out by a walk.
    type Scalar<'a>: Scalar<Item = Self::Item, Error = Self::Error>
    where
        Self: 'a;
    /// Iterator over one walk.
    type Iter<'a>: Iterator<Item = Self::Scalar<'a>>
    where
        Self: 'a;

    /// Start a fresh walk from the first element.
    fn scalars(&self) -> Self::Iter<'_>;
}

impl<S: Scalar> ScalarSeq for Vec<S> {
    type Item = S::Item;
    type Error = S::Error;
    type Scalar<'a>
        = &'a S
    where
        Self: 'a;
    type Iter<'a>
        = slice::Iter<'a, S>
    where
        Self: 'a;

    fn scalars(&self) -> slice::Iter<'_, S> {
        self.iter()
    }
}

impl<S: Scalar, const N: usize> ScalarSeq for [S; N] {
    type Item = S::Item;
    type Error = S::Error;
    type Scalar<'a>
        = &'a S
    where
        Self: 'a;
    type Iter<'a>
        = slice::Iter<'a, S>
    where
        Self: 'a;

    fn scalars(&self) -> slice::Iter<'_, S> {
        self.iter()
    }
}

impl<S: Scalar> ScalarSeq for &[S] {
    type Item = S::Item;
    type Error = S::Error;
    type Scalar<'a>
        = &'a S
    where
        Self: 'a;
    type Iter<'a>
        = slice::Iter<'a, S>
    where
        Self: 'a;

    fn scalars(&self) -> slice::Iter<'_, S> {
        self.iter()
    }
}

/// `iter.map(|x| build_scalar(x))` is replayed: every walk clones the adapter
/// and builds its scalars as it goes.
impl<I, F, S> ScalarSeq for Map<I, F>
where
    Map<I, F>: Iterator<Item = S> + Clone,
    S: Scalar,
{
    type Item = S::Item;
    type Error = S::Error;
    type Scalar<'a>
        = S
    where
        Self: 'a;
    type Iter<'a>
        = Self
    where
        Self: 'a;

    fn scalars(&self) -> Self {
        self.clone()
    }
}

/// Any cloneable iterable of scalars, re-run from scratch on every walk.
#[derive(Clone)]
pub struct Replay<I>(I);

/// Wrap `source` so each walk clones it and iterates the clone.
pub fn replay<I>(source: I) -> Replay<I>
where
    I: IntoIterator + Clone,
    I::Item: Scalar,
{
    Replay(source)
}

impl<I> ScalarSeq for Replay<I>
where
    I: IntoIterator + Clone,
    I::Item: Scalar,
{
    type Item = <I::Item as Scalar>::Item;
    type Error = <I::Item as Scalar>::Error;
    type Scalar<'a>
        = I::Item
    where
        Self: 'a;
    type Iter<'a>
        = I::IntoIter
    where
        Self: 'a;

    fn scalars(&self) -> I::IntoIter {
        self.0.clone().into_iter()
    }
}

impl<I> fmt::Debug for Replay<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replay").finish_non_exhaustive()
    }
}
