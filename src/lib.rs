//! A mutable set in the mathematical sense: unique members of a single type, membership queries,
//! bulk mutation and the usual set algebra.
//!
//! # Purpose
//! The standard library already ships [`HashSet`](std::collections::HashSet), but its API is built
//! around iterators and leaves a lot of the bookkeeping to the caller. [`Set`] sits on top of it and
//! answers the questions you usually end up writing by hand: how many elements did that bulk add
//! actually insert, how many did a retain throw away, does this set contain any of these?
//!
//! # Method
//! Every operation is total. Adding something that is already present, removing something that
//! isn't there or passing an empty list are all ordinary outcomes reported through return values,
//! never errors. The only [`Result`]s in this crate come from the `try_*` reservation methods, which
//! report a [`CapacityOverflow`](collections::set::CapacityOverflow) instead of aborting.
//!
//! Two-operand operations take their argument by shared reference, so the argument can't be
//! changed by them. Passing a set's own members back into one of its mutators goes through an owned
//! snapshot ([`Set::get_all`] or [`Clone`]), which the borrow checker forces anyway.
//!
//! # Threading
//! [`Set`] does no locking of its own. It is as [`Send`] and [`Sync`] as its contents, but shared
//! mutation has to go through a lock owned by the caller.
//!
//! # Example
//! ```
//! use mathset::collections::set::{self, Set};
//!
//! let a = Set::of(["a", "b", "c"]);
//! let b = Set::of(["c", "d", "e"]);
//!
//! let mut diff = a.clone();
//! diff.subtract(&b);
//! assert_eq!(diff, Set::of(["a", "b"]));
//!
//! assert_eq!(set::union([&a, &b]), Set::of(["a", "b", "c", "d", "e"]));
//! assert_eq!(set::intersection([&a, &b]), Set::of(["c"]));
//! ```
//!
//! # Features
//! - `tracing`: emits `trace`-level events from bulk mutations, reporting how many members changed.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

#[doc(inline)]
pub use collections::set::Set;

pub(crate) mod util;
