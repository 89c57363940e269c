// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Memoizing decorator.

use std::cell::OnceCell;
use std::fmt;

use tracing::trace;

use crate::Scalar;

/// Caches the first successful value of the wrapped scalar.
///
/// Failures are returned as-is and leave the cache empty, so the next call
/// evaluates the origin again. Single-threaded: `Sticky` is not `Sync`.
pub struct Sticky<S: Scalar> {
    origin: S,
    cache: OnceCell<S::Item>,
}

impl<S: Scalar> Sticky<S> {
    /// Wrap `origin`. Nothing is evaluated yet.
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            cache: OnceCell::new(),
        }
    }

    /// Returns `true` once a value has been cached.
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }
}

impl<S> Scalar for Sticky<S>
where
    S: Scalar,
    S::Item: Clone,
{
    type Item = S::Item;
    type Error = S::Error;

    fn value(&self) -> Result<S::Item, S::Error> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached.clone());
        }
        let fresh = self.origin.value()?;
        trace!("sticky scalar cached its first value");
        Ok(self.cache.get_or_init(|| fresh).clone())
    }
}

impl<S> fmt::Debug for Sticky<S>
where
    S: Scalar + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sticky")
            .field("origin", &self.origin)
            .field("cache", &self.cache.get())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{from_fn, ScalarError};
    use std::cell::Cell;

    #[test]
    fn evaluates_origin_once() {
        let calls = Cell::new(0_u32);
        let sticky = Sticky::new(from_fn(|| {
            calls.set(calls.get() + 1);
            Ok::<_, ScalarError>(calls.get())
        }));
        assert!(!sticky.is_cached());
        assert_eq!(sticky.value().unwrap(), 1);
        assert_eq!(sticky.value().unwrap(), 1);
        assert!(sticky.is_cached());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn failures_are_not_cached() {
        let calls = Cell::new(0_u32);
        let sticky = Sticky::new(from_fn(|| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Err(ScalarError::failed("warming up"))
            } else {
                Ok(calls.get())
            }
        }));
        assert_eq!(sticky.value(), Err(ScalarError::failed("warming up")));
        assert!(!sticky.is_cached());
        assert_eq!(sticky.value().unwrap(), 2);
        assert_eq!(sticky.value().unwrap(), 2);
        assert_eq!(calls.get(), 2);
    }
}
