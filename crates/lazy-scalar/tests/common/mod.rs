// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for extrema tests.

use std::cmp::Ordering;

/// Value ordered by `key` alone; `label` tells equal keys apart.
#[derive(Debug, Clone)]
pub struct Tagged {
    pub key: i32,
    pub label: &'static str,
}

impl Tagged {
    pub fn new(key: i32, label: &'static str) -> Self {
        Self { key, label }
    }
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}
