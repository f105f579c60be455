//! Stable element identifiers.
//!
//! Trees are rebuilt every frame, so arena keys are not stable between
//! frames. Pointer queries and element lookups therefore go through
//! [`ElementId`], a hash of a caller-chosen name (plus an optional index) that
//! stays the same as long as the caller declares the same name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a declared element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Id of the implicit root element.
    pub const ROOT: ElementId = ElementId(0);

    /// Hash a name into an id.
    pub fn new(name: &str) -> Self {
        Self(finish(mix_bytes(0, name.as_bytes())))
    }

    /// Hash a name and an index, for elements declared in loops.
    pub fn indexed(name: &str, index: u32) -> Self {
        let base = mix_bytes(0, name.as_bytes());
        Self(finish(mix(base, index)))
    }

    /// Id for an anonymous element, derived from its parent and its position.
    pub fn child_of(parent: ElementId, child_index: u32) -> Self {
        Self(finish(mix(parent.0, child_index.wrapping_add(48))))
    }

    #[inline]
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({:#010x})", self.0)
    }
}

#[inline]
fn mix(mut hash: u32, value: u32) -> u32 {
    hash = hash.wrapping_add(value);
    hash = hash.wrapping_add(hash << 10);
    hash ^ (hash >> 6)
}

fn mix_bytes(seed: u32, bytes: &[u8]) -> u32 {
    bytes.iter().fold(seed, |hash, &b| mix(hash, b as u32))
}

#[inline]
fn finish(mut hash: u32) -> u32 {
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash = hash.wrapping_add(hash << 15);
    // Zero is reserved for the root.
    hash.wrapping_add(1).max(1)
}
