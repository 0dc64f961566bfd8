//! A module containing [`Set`] and associated types.
//!
//! Alongside the set itself, this module provides owned and borrowed iteration over a set's
//! members, the free functions [`union`] and [`intersection`] which combine any number of sets
//! into a new one, and the error returned by the fallible reservation methods.
//!
//! Members are only ever handed out by shared reference. Changing one through a `&mut` would move
//! it away from the hash it was filed under, so to change a member, [`take`](Set::take) it out and
//! [`add`](Set::add) the new value.
//!
//! [`Set`] is also re-exported at the crate root.

mod combine;
mod error;
mod iter;
mod set;

pub use combine::*;
pub use error::*;
pub use iter::*;
pub use set::*;
