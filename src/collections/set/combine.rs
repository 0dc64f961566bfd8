use std::hash::{BuildHasher, Hash};

use super::Set;
use crate::util::trace::trace;

/// Returns a new set holding every member of any of `sets`. (`s₁ ∪ s₂ ∪ … ∪ sₙ`)
///
/// None of the arguments are modified: the result starts as a clone of the first set and the rest
/// are folded into it with [`Set::union`]. With no sets at all the result is empty, and with a
/// single set it is a clone of that set.
///
/// ```
/// use mathset::collections::set::{self, Set};
///
/// let a = Set::of(["a", "b", "c"]);
/// let b = Set::of(["c", "d", "e"]);
///
/// assert_eq!(set::union([&a, &b]), Set::of(["a", "b", "c", "d", "e"]));
/// assert_eq!(a, Set::of(["a", "b", "c"]));
/// ```
pub fn union<'a, T, B, I>(sets: I) -> Set<T, B>
where
    T: Hash + Eq + Clone + 'a,
    B: BuildHasher + Clone + Default + 'a,
    I: IntoIterator<Item = &'a Set<T, B>>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return Set::default();
    };

    let mut result = first.clone();
    for set in sets {
        result.union(set);
    }

    trace!(len = result.len(), "computed union of sets");
    result
}

/// Returns a new set holding the members common to all of `sets`. (`s₁ ∩ s₂ ∩ … ∩ sₙ`)
///
/// Like [`union`], this clones the first set and folds the rest into it, here with
/// [`Set::intersect`], leaving the arguments untouched.
///
/// The intersection of no sets at all is defined to be the empty set. That is a convention of this
/// function, not an attempt to approximate the "universal" set the mathematical definition would
/// call for.
pub fn intersection<'a, T, B, I>(sets: I) -> Set<T, B>
where
    T: Hash + Eq + Clone + 'a,
    B: BuildHasher + Clone + Default + 'a,
    I: IntoIterator<Item = &'a Set<T, B>>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return Set::default();
    };

    let mut result = first.clone();
    for set in sets {
        if result.is_empty() {
            break;
        }
        result.intersect(set);
    }

    trace!(len = result.len(), "computed intersection of sets");
    result
}
