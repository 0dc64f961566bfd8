use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{CapacityOverflow, Drain, Iter};
use crate::util::trace::trace;

/// A mutable, unordered set of unique members of type `T`.
///
/// Membership is decided by [`Eq`] and looked up through [`Hash`], so adding, removing and testing a
/// single member are all O(1) amortized. Bulk operations report how many members they actually
/// changed rather than how many arguments they were given.
///
/// The order in which members are visited by [`iter`](Set::iter), [`get_all`](Set::get_all) or the
/// formatting impls is unspecified and must not be relied upon.
///
/// # Threading
/// `Set` is not thread-safe in the sense of providing its own synchronization: there is no internal
/// locking. It is [`Send`] and [`Sync`] whenever `T` and `B` are, which lets it be shared read-only
/// or moved between threads, but concurrent mutation needs a lock held by the caller.
///
/// # Examples
/// ```
/// use mathset::Set;
///
/// let mut set = Set::of(["a", "b", "c"]);
/// assert!(!set.add("a"));
/// assert_eq!(set.add_all(["b", "d", "a", "e"]), 2);
/// assert_eq!(set, Set::of(["a", "b", "c", "d", "e"]));
/// ```
pub struct Set<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) inner: HashSet<T, B>,
}

/// The outcome of [`Set::retain_all`], counted over the members the set held before the call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetainCount {
    /// Members that weren't listed and have been removed.
    pub removed: usize,
    /// Members that were listed and are still present.
    pub retained: usize,
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new, empty set. Doesn't allocate until the first member is added.
    pub fn new() -> Set<T> {
        Set {
            inner: HashSet::new(),
        }
    }

    /// Creates a new, empty set with room for at least `cap` members before reallocating.
    ///
    /// The capacity is only a hint. A set never refuses to grow past it.
    pub fn with_cap(cap: usize) -> Set<T> {
        Set {
            inner: HashSet::with_capacity(cap),
        }
    }

    /// Creates a set holding every element of `elements`. Duplicates collapse into a single member.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Set<T> {
        elements.into_iter().collect()
    }

    /// Like [`Set::of`], but sized for at least `cap` members up front.
    pub fn with_cap_of<I: IntoIterator<Item = T>>(cap: usize, elements: I) -> Set<T> {
        let mut set = Set::with_cap(cap);
        set.add_all(elements);
        set
    }

    /// A fallible version of [`Set::with_cap`], returning an error rather than aborting if the
    /// storage can't be allocated.
    pub fn try_with_cap(cap: usize) -> Result<Set<T>, CapacityOverflow> {
        let mut set = Set::new();
        set.try_reserve(cap)?;
        Ok(set)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    /// Creates a new, empty set which will hash its members with `hasher`. Usable in `const`
    /// contexts.
    pub const fn with_hasher(hasher: B) -> Set<T, B> {
        Set {
            inner: HashSet::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Set<T, B> {
        Set {
            inner: HashSet::with_capacity_and_hasher(cap, hasher),
        }
    }

    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Returns the number of members in the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of members the set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns an iterator over all members of the set, as references, in no particular order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an owned snapshot of every member, in no particular order.
    ///
    /// Because the result doesn't borrow the set, it can be fed straight back into one of the set's
    /// own mutators:
    /// ```
    /// use mathset::Set;
    ///
    /// let mut set = Set::of([1, 2, 3]);
    /// assert_eq!(set.remove_all(set.get_all()), 3);
    /// assert!(set.is_empty());
    /// ```
    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Adds `item` to the set, returning true if it wasn't already a member. If an equal member is
    /// already present, the set is left untouched and `item` is dropped.
    pub fn add(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    /// Adds every element of `elements`, returning how many of them were new.
    ///
    /// Elements already in the set, as well as repeats within `elements` after their first
    /// occurrence, don't count.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> usize {
        let mut added = 0;
        for item in elements {
            if self.inner.insert(item) {
                added += 1;
            }
        }
        trace!(added, len = self.len(), "added elements to set");
        added
    }

    /// Returns a reference to the member equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(item)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Returns true if every element of `elements` is a member. Stops at the first miss and is
    /// vacuously true when `elements` is empty.
    ///
    /// Each element has to borrow as `T` itself, so a `Set<String>` takes `String`s or `&String`s
    /// here but not `&str`s. That is narrower than [`contains`](Set::contains), which accepts any
    /// borrowed form of `T`; a generic borrowed form would leave it ambiguous for `&str` members.
    pub fn contains_all<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        elements
            .into_iter()
            .all(|item| self.inner.contains(Borrow::<T>::borrow(&item)))
    }

    /// Returns true if at least one element of `elements` is a member. Stops at the first hit and is
    /// vacuously false when `elements` is empty.
    ///
    /// Each element has to borrow as `T` itself, so a `Set<String>` takes `String`s or `&String`s
    /// here but not `&str`s. That is narrower than [`contains`](Set::contains), which accepts any
    /// borrowed form of `T`; a generic borrowed form would leave it ambiguous for `&str` members.
    pub fn contains_any<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        elements
            .into_iter()
            .any(|item| self.inner.contains(Borrow::<T>::borrow(&item)))
    }

    /// Removes every member, keeping the allocated capacity.
    pub fn clear(&mut self) {
        trace!(removed = self.len(), "cleared set");
        self.inner.clear()
    }

    /// Removes `item` from the set, returning true if it was a member.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item)
    }

    /// Removes and returns the member equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.take(item)
    }

    /// Removes every element of `elements` from the set, returning how many were actually members
    /// at the moment of their own removal.
    ///
    /// Like [`contains_all`](Set::contains_all), elements have to borrow as `T` itself, so use
    /// [`remove`](Set::remove) in a loop to remove by a different borrowed form:
    /// ```
    /// use mathset::Set;
    ///
    /// let mut set = Set::of([String::from("a"), String::from("b")]);
    /// assert_eq!(set.remove_all(["a"].map(String::from)), 1);
    /// assert!(set.remove("b"));
    /// ```
    pub fn remove_all<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut removed = 0;
        for item in elements {
            if self.inner.remove(Borrow::<T>::borrow(&item)) {
                removed += 1;
            }
        }
        trace!(removed, len = self.len(), "removed elements from set");
        removed
    }

    /// Keeps only the members that are also listed in `elements`, so that afterwards the set is the
    /// intersection of its previous members and `elements`.
    ///
    /// The returned counts cover the members held before the call, not the arguments:
    /// `removed + retained` is always the previous length.
    ///
    /// ```
    /// use mathset::Set;
    ///
    /// let mut set = Set::of(["a", "b", "c", "d"]);
    /// let count = set.retain_all(["b", "d", "a", "e"]);
    ///
    /// assert_eq!(set, Set::of(["a", "b", "d"]));
    /// assert_eq!((count.removed, count.retained), (1, 3));
    /// ```
    pub fn retain_all<I>(&mut self, elements: I) -> RetainCount
    where
        I: IntoIterator,
        I::Item: Borrow<T> + Hash + Eq,
    {
        let keep: Set<I::Item> = elements.into_iter().collect();
        let mut count = RetainCount::default();

        self.inner.retain(|item| {
            if keep.contains(item) {
                count.retained += 1;
                true
            } else {
                count.removed += 1;
                false
            }
        });

        trace!(removed = count.removed, retained = count.retained, "retained elements in set");
        count
    }

    /// Keeps only the members for which `predicate` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, predicate: F) {
        self.inner.retain(predicate)
    }

    /// Removes every member, returning them through an iterator. The set is empty afterwards, even
    /// if the iterator is dropped early.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain(self.inner.drain())
    }

    /// Reserves room for at least `extra` more members.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Reserves room for at least `extra` more members, returning an error instead of aborting if
    /// the new capacity overflows or can't be allocated.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        self.inner
            .try_reserve(extra)
            .map_err(|error| CapacityOverflow::from_reserve(extra, error))
    }

    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit()
    }

    /// Returns true if `other` contains all members of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &Set<T, B>) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all members of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &Set<T, B>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` share no members. (`self ∩ other = ∅`)
    pub fn is_disjoint(&self, other: &Set<T, B>) -> bool {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        !small.iter().any(|item| large.contains(item))
    }

    /// Returns true if both sets have exactly the same members. The same as `self == other`.
    ///
    /// Sizes are compared first, so sets of different lengths are rejected without any lookups.
    pub fn equals(&self, other: &Set<T, B>) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Removes every member of `other` from `self`. (`self = self \ other`)
    ///
    /// Returns how many members were removed. Subtracting a copy of a set from itself leaves it
    /// empty.
    pub fn subtract(&mut self, other: &Set<T, B>) -> usize {
        let before = self.len();

        // Walk whichever side is smaller.
        if other.len() < self.len() {
            for item in other {
                self.inner.remove(item);
            }
        } else {
            self.inner.retain(|item| !other.contains(item));
        }

        let removed = before - self.len();
        trace!(removed, len = self.len(), "subtracted set");
        removed
    }

    /// Adds every member of `other` to `self`, returning how many were new. (`self = self ∪ other`)
    pub fn union(&mut self, other: &Set<T, B>) -> usize
    where
        T: Clone,
    {
        self.reserve(other.len().saturating_sub(self.len()));
        self.add_all(other.iter().cloned())
    }

    /// Removes every member of `self` that isn't also in `other`. (`self = self ∩ other`)
    ///
    /// This has the semantics of [`retain_all`](Set::retain_all) with the members of `other`, but
    /// looks them up in `other` directly instead of collecting them first.
    pub fn intersect(&mut self, other: &Set<T, B>) -> RetainCount {
        let before = self.len();
        self.inner.retain(|item| other.contains(item));

        let count = RetainCount {
            removed: before - self.len(),
            retained: self.len(),
        };
        trace!(removed = count.removed, retained = count.retained, "intersected set");
        count
    }

    /// Keeps the members that are in exactly one of `self` and `other`. (`self = self △ other`)
    pub fn symmetric_difference(&mut self, other: &Set<T, B>)
    where
        T: Clone,
    {
        for item in other {
            if !self.inner.remove(item) {
                self.inner.insert(item.clone());
            }
        }
    }

    /// Clones the set with room for at least `cap` members. The capacity used is the larger of
    /// `cap` and the current length, so the hint can't shrink the clone below its contents.
    ///
    /// Like [`Clone`], this is shallow as far as `T` is concerned: each member is cloned with its
    /// own [`Clone`] impl.
    pub fn clone_with_cap(&self, cap: usize) -> Set<T, B>
    where
        T: Clone,
        B: Clone,
    {
        let mut clone = Set::with_cap_and_hasher(cap.max(self.len()), self.hasher().clone());
        clone.inner.extend(self.iter().cloned());
        clone
    }

    /// A fallible version of [`Set::clone_with_cap`].
    pub fn try_clone_with_cap(&self, cap: usize) -> Result<Set<T, B>, CapacityOverflow>
    where
        T: Clone,
        B: Clone,
    {
        let mut clone = Set::with_hasher(self.hasher().clone());
        clone.try_reserve(cap.max(self.len()))?;
        clone.inner.extend(self.iter().cloned());
        Ok(clone)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for Set<T, B> {
    fn default() -> Self {
        Set::with_hasher(B::default())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for Set<T, B> {
    fn clone(&self) -> Self {
        Set {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Set<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for Set<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = Set::with_cap_and_hasher(iter.size_hint().0, B::default());
        set.inner.extend(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(value: [T; N]) -> Self {
        Set::of(value)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().copied());
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitOr for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone_with_cap(self.len().max(rhs.len()));
        result.union(rhs);
        result
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher> BitOrAssign<&Set<T, B>> for Set<T, B> {
    fn bitor_assign(&mut self, rhs: &Set<T, B>) {
        self.union(rhs);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitAnd for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        let mut result = Set::with_hasher(self.hasher().clone());
        result
            .inner
            .extend(self.iter().filter(|item| rhs.contains(*item)).cloned());
        result
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign<&Set<T, B>> for Set<T, B> {
    fn bitand_assign(&mut self, rhs: &Set<T, B>) {
        self.intersect(rhs);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitXor for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.symmetric_difference(rhs);
        result
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher> BitXorAssign<&Set<T, B>> for Set<T, B> {
    fn bitxor_assign(&mut self, rhs: &Set<T, B>) {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Sub for &Set<T, B> {
    type Output = Set<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = Set::with_hasher(self.hasher().clone());
        result
            .inner
            .extend(self.iter().filter(|item| !rhs.contains(*item)).cloned());
        result
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign<&Set<T, B>> for Set<T, B> {
    fn sub_assign(&mut self, rhs: &Set<T, B>) {
        self.subtract(rhs);
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Set ")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
