//! Deterministic hashing for tests that assert on bucket layout.

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

/// Builds [`IdentityHasher`]s: integer keys hash to themselves.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct IdentityBuildHasher;

#[derive(Default)]
pub(crate) struct IdentityHasher(u64);

impl Hasher for IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = self.0.wrapping_mul(31).wrapping_add(b as u64);
        }
    }

    fn write_u64(&mut self, n: u64) {
        self.0 = n;
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;
    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher::default()
    }
}

/// A displayable key with a caller-chosen hash code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Named {
    name: &'static str,
    code: u64,
}

impl Named {
    pub(crate) fn new(name: &'static str, code: u64) -> Self {
        Self { name, code }
    }
}

impl Hash for Named {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.code);
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
