#![cfg(test)]

use std::hash::{BuildHasher, Hash, Hasher};

/// A member with a hash fixed up front, so a test decides exactly which members share a bucket.
/// Only `value` takes part in equality.
#[derive(Debug, Clone)]
pub struct Pinned<T> {
    pub hash: u64,
    pub value: T,
}

pub const fn pinned<T>(hash: u64, value: T) -> Pinned<T> {
    Pinned { hash, value }
}

impl<T> Hash for Pinned<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: PartialEq> PartialEq for Pinned<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Pinned<T> {}

/// Finishes with the last `u64` written to it, untouched. Paired with [`Pinned`], two members
/// with the same pin always land on the same hash.
#[derive(Debug, Default)]
pub struct PassThrough(u64);

impl Hasher for PassThrough {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(*byte);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughState;

impl BuildHasher for PassThroughState {
    type Hasher = PassThrough;

    fn build_hasher(&self) -> PassThrough {
        PassThrough::default()
    }
}
