// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised by the reducers themselves.
//!
//! Failures of the reduced scalars are not represented here: they pass through
//! as the scalar's own error type. The only failure a reducer introduces is
//! [`EmptySequence`], which generic reducers convert into the caller's error
//! type through `From`.

use std::io;

/// A reducer was asked for the value of an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("[SCALAR_EMPTY_SEQUENCE] cannot reduce an empty sequence of scalars")]
pub struct EmptySequence;

/// General-purpose error for scalars whose callers have no error type of their
/// own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalarError {
    /// A reducer received no scalars.
    #[error(transparent)]
    EmptySequence(#[from] EmptySequence),
    /// A scalar could not produce its value.
    #[error("[SCALAR_FAILED] {reason}")]
    Failed {
        /// Human-readable cause.
        reason: String,
    },
}

impl ScalarError {
    /// Build a [`ScalarError::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

impl From<EmptySequence> for io::Error {
    fn from(err: EmptySequence) -> Self {
        Self::new(io::ErrorKind::InvalidInput, err)
    }
}
