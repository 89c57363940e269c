// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! A scalar that always yields the same value.

use std::fmt;
use std::marker::PhantomData;

use crate::{EmptySequence, Scalar};

/// Scalar holding a ready value.
///
/// Never fails. `E` only names the error type of the computation it takes part
/// in, so constants can sit in the same list as fallible scalars.
pub struct Constant<T, E = EmptySequence> {
    value: T,
    _error: PhantomData<fn() -> E>,
}

impl<T, E> Constant<T, E> {
    /// Wrap `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            _error: PhantomData,
        }
    }

    /// Unwrap the held value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone, E> Scalar for Constant<T, E> {
    type Item = T;
    type Error = E;

    fn value(&self) -> Result<T, E> {
        Ok(self.value.clone())
    }
}

impl<T: Clone, E> Clone for Constant<T, E> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Constant<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constant").field(&self.value).finish()
    }
}

impl<T, E> From<T> for Constant<T, E> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn yields_the_same_value_every_time() {
        let constant: Constant<_> = Constant::new(String::from("Apple"));
        assert_eq!(constant.value().unwrap(), "Apple");
        assert_eq!(constant.value().unwrap(), "Apple");
        assert_eq!(constant.into_inner(), "Apple");
    }

    #[test]
    fn debug_shows_value() {
        let constant: Constant<_> = Constant::from('B');
        assert_eq!(format!("{constant:?}"), "Constant('B')");
    }
}
