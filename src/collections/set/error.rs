use std::collections::TryReserveError;

use derive_more::{Display, Error};

/// The error returned when a set can't reserve the storage it was asked for, either because the
/// requested capacity overflows `usize` or because the allocator refused it.
///
/// Only the `try_*` methods of [`Set`](super::Set) produce this. Their infallible counterparts
/// abort on allocation failure like the rest of the standard collections.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow while reserving space for {extra} more elements!")]
pub struct CapacityOverflow {
    /// The number of additional elements that was requested.
    pub extra: usize,
}

impl CapacityOverflow {
    pub(crate) const fn from_reserve(extra: usize, _: TryReserveError) -> CapacityOverflow {
        CapacityOverflow { extra }
    }
}
