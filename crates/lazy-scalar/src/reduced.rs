// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Left fold over a sequence of scalars.

use std::fmt;

use tracing::{debug, trace};

use crate::{EmptySequence, Scalar, ScalarSeq};

/// Scalar whose value is the left fold of a sequence of scalars.
///
/// The sequence is stored as given; nothing is built or evaluated until
/// [`value`](Scalar::value) is called. Every call then walks the sequence from
/// the start, seeds the fold with the first result and applies `combine(acc,
/// next)` for each following one.
///
/// # Failure Semantics
///
/// - The first element error ends the walk and is returned unchanged. Elements
///   after it are neither built (for lazy sequences) nor evaluated.
/// - An empty sequence fails with [`EmptySequence`], converted into the
///   elements' error type. There is no identity element and no default.
pub struct Reduced<Q, F> {
    scalars: Q,
    combine: F,
}

impl<Q: ScalarSeq, F> Reduced<Q, F> {
    /// Fold `scalars` with `combine`.
    pub fn new(combine: F, scalars: Q) -> Self {
        Self { scalars, combine }
    }
}

impl<Q, F> Scalar for Reduced<Q, F>
where
    Q: ScalarSeq,
    Q::Error: From<EmptySequence>,
    F: Fn(Q::Item, Q::Item) -> Q::Item,
{
    type Item = Q::Item;
    type Error = Q::Error;

    fn value(&self) -> Result<Q::Item, Q::Error> {
        let mut scalars = self.scalars.scalars();
        let Some(first) = scalars.next() else {
            debug!("refusing to reduce an empty scalar sequence");
            return Err(EmptySequence.into());
        };
        let mut folded = first.value()?;
        let mut len = 1_usize;
        for next in scalars {
            folded = (self.combine)(folded, next.value()?);
            len += 1;
        }
        trace!(len, "reduced scalar sequence");
        Ok(folded)
    }
}

impl<Q: fmt::Debug, F> fmt::Debug for Reduced<Q, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reduced")
            .field("scalars", &self.scalars)
            .finish_non_exhaustive()
    }
}
