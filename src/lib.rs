//! An arena-backed skip list holding a set of unique, ordered elements.
//!
//! Nodes live in a `Vec` arena and link to each other by index, so the
//! multi-level structure needs no raw pointers and no `unsafe`. Search,
//! insertion and removal run in O(log n) expected time, and four boundary
//! search primitives (`last_lt`, `last_le`, `first_gt`, `first_ge`) support
//! inclusive range iteration over any sub-interval of the set.
//!
//! ```
//! use skipset::SkipList;
//!
//! let mut sk = SkipList::new();
//! for i in &[5u32, 1, 9, 3, 7] {
//!     sk.insert(*i);
//! }
//! assert_eq!(sk.search(&3), Some(&3));
//! assert_eq!(sk.first_gt(&5), Some(&7));
//! let mid: Vec<_> = sk.range(Some(&3), Some(&7)).cloned().collect();
//! assert_eq!(mid, vec![3, 5, 7]);
//! ```
//!
//! Elements need exactly one capability: `Ord` against their own type. The
//! random generator used for level assignment is held by the list and can be
//! injected (see [`SkipList::with_rng`] and [`SkipList::with_seed`]) for
//! reproducible behaviour in tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

mod iter;
#[cfg(feature = "serde_support")]
mod serde;

pub use crate::iter::Range;

/// Hard cap on node levels. A node drawn at this level skips over roughly
/// 2^31 elements per step, far beyond any in-memory list.
const MAX_LEVEL: usize = 31;

/// Arena index of the head sentinel. The sentinel holds no element, carries
/// forward links at every level, and is never unlinked.
const HEAD: usize = 0;

/// A single node in the arena.
///
/// `forward[l]` is the arena index of the next node at level `l`, so a node
/// drawn at level k carries exactly k + 1 links. Level 0 is the dense list
/// containing every node in sorted order.
pub(crate) struct Node<T> {
    pub(crate) element: Option<T>,
    pub(crate) forward: Vec<Option<usize>>,
}

/// A skip list: a probabilistic ordered set with O(log n) expected search,
/// insert and removal, plus boundary searches and inclusive range iteration.
///
/// Nodes are stored in an arena indexed by `usize`; removal returns slots to
/// a free list for reuse. The list grows its level count monotonically —
/// levels emptied by removals are kept, costing only a few wasted descent
/// steps on later searches, never correctness.
pub struct SkipList<T, R = SmallRng> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    level: usize,
    lens: [usize; MAX_LEVEL + 1],
    rng: R,
}

impl<T: Ord> SkipList<T> {
    /// Make a new, empty skip list seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Make a new, empty skip list with a deterministic generator.
    ///
    /// Two lists built from the same seed and the same insertion sequence
    /// have identical level structure. Intended for tests and benchmarks.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<T: Ord, R: Rng> SkipList<T, R> {
    /// Make a new, empty skip list using `rng` for level assignment.
    pub fn with_rng(rng: R) -> Self {
        let head = Node {
            element: None,
            forward: vec![None; MAX_LEVEL + 1],
        };
        SkipList {
            nodes: vec![head],
            free: Vec::new(),
            level: 0,
            lens: [0; MAX_LEVEL + 1],
            rng,
        }
    }

    /// Insert `element` into the skip list; O(log n) expected.
    ///
    /// Elements are unique: inserting an element already present leaves the
    /// list untouched and returns `false`.
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut sk = SkipList::new();
    /// assert!(sk.insert(3));
    /// assert!(!sk.insert(3));
    /// assert_eq!(sk.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let level = self.choose_level();
        if level > self.level {
            self.level = level;
        }

        // Record, per level, the rightmost node strictly less than
        // `element`. Levels raised above the old top have no links yet, so
        // their update position stays HEAD.
        let mut updates = [HEAD; MAX_LEVEL + 1];
        let mut p = HEAD;
        for lvl in (0..=self.level).rev() {
            while let Some(next) = self.nodes[p].forward[lvl] {
                match self.value(next).cmp(&element) {
                    Ordering::Less => p = next,
                    Ordering::Equal => return false,
                    Ordering::Greater => break,
                }
            }
            updates[lvl] = p;
        }

        let idx = self.alloc(element, level);
        for lvl in 0..=level {
            let succ = self.nodes[updates[lvl]].forward[lvl];
            self.nodes[idx].forward[lvl] = succ;
            self.nodes[updates[lvl]].forward[lvl] = Some(idx);
            self.lens[lvl] += 1;
        }
        true
    }

    /// Remove the element equal to `target`, returning it; O(log n)
    /// expected. Returns `None` if no such element is present.
    pub fn remove(&mut self, target: &T) -> Option<T> {
        let mut removed = None;
        let mut p = HEAD;
        for lvl in (0..=self.level).rev() {
            while let Some(next) = self.nodes[p].forward[lvl] {
                match self.value(next).cmp(target) {
                    Ordering::Less => p = next,
                    Ordering::Equal => {
                        // Unlink at this level, then keep descending from
                        // p; the node occupies every level below this one.
                        let succ = self.nodes[next].forward[lvl];
                        self.nodes[p].forward[lvl] = succ;
                        self.lens[lvl] -= 1;
                        removed = Some(next);
                        break;
                    }
                    Ordering::Greater => break,
                }
            }
        }
        let idx = removed?;
        let element = self.nodes[idx].element.take();
        self.nodes[idx].forward = Vec::new();
        self.free.push(idx);
        element
    }

    /// Draw a level with P(level >= k) = 2^-k: count consecutive heads
    /// from the list's generator, capped at MAX_LEVEL.
    fn choose_level(&mut self) -> usize {
        let mut level = 0;
        while self.rng.gen::<bool>() && level < MAX_LEVEL {
            level += 1;
        }
        level
    }

    /// Place a node in the arena, reusing a freed slot when one exists.
    fn alloc(&mut self, element: T, level: usize) -> usize {
        let node = Node {
            element: Some(element),
            forward: vec![None; level + 1],
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }
}

impl<T: Ord, R> SkipList<T, R> {
    /// Number of elements in the skip list; O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.lens[0]
    }

    /// `true` if the skip list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lens[0] == 0
    }

    /// Find the element equal to `target`; O(log n) expected.
    ///
    /// The descent checks its forward neighbour for equality at every level
    /// before dropping down, so a match high in the lattice returns early.
    pub fn search(&self, target: &T) -> Option<&T> {
        let mut p = HEAD;
        for lvl in (0..=self.level).rev() {
            while let Some(next) = self.nodes[p].forward[lvl] {
                match self.value(next).cmp(target) {
                    Ordering::Less => p = next,
                    Ordering::Equal => return Some(self.value(next)),
                    Ordering::Greater => break,
                }
            }
        }
        None
    }

    /// `true` if an element equal to `target` is present.
    #[inline]
    pub fn contains(&self, target: &T) -> bool {
        self.search(target).is_some()
    }

    /// The last element strictly less than `key`, or `None` if `key` is
    /// less than or equal to every element.
    pub fn last_lt(&self, key: &T) -> Option<&T> {
        self.seek_last_lt(key).map(|idx| self.value(idx))
    }

    /// The last element less than or equal to `key`, or `None`.
    pub fn last_le(&self, key: &T) -> Option<&T> {
        self.seek_last_le(key).map(|idx| self.value(idx))
    }

    /// The first element strictly greater than `key`, or `None` if `key` is
    /// greater than or equal to every element.
    pub fn first_gt(&self, key: &T) -> Option<&T> {
        self.seek_first_gt(key).map(|idx| self.value(idx))
    }

    /// The first element greater than or equal to `key`, or `None`.
    pub fn first_ge(&self, key: &T) -> Option<&T> {
        self.seek_first_ge(key).map(|idx| self.value(idx))
    }

    /// Iterate over elements between `start` and `boundary`, both
    /// inclusive.
    ///
    /// `None` for `start` means "from the first element"; `None` for
    /// `boundary` means "to the last". The bounds themselves need not be
    /// present in the list. The iterator borrows the list, so the list
    /// cannot be mutated while one is live.
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let sk: SkipList<u32> = (0..10).collect();
    /// let r: Vec<_> = sk.range(Some(&3), Some(&6)).cloned().collect();
    /// assert_eq!(r, vec![3, 4, 5, 6]);
    /// ```
    pub fn range<'a>(&'a self, start: Option<&T>, boundary: Option<&'a T>) -> Range<'a, T> {
        let first = match start {
            Some(key) => self.seek_first_ge(key),
            None => self.nodes[HEAD].forward[0],
        };
        Range::new(&self.nodes, first, boundary)
    }

    /// Iterate over every element in ascending order.
    #[inline]
    pub fn iter_all(&self) -> Range<'_, T> {
        self.range(None, None)
    }

    // The four seeks below share one level-descending traversal: at each
    // level, advance while the forward neighbour compares strictly less
    // than the key. They differ only in the decision made around equality
    // and at level 0, which is what distinguishes the boundary variants.

    fn seek_last_lt(&self, key: &T) -> Option<usize> {
        let mut p = HEAD;
        for lvl in (0..=self.level).rev() {
            while let Some(next) = self.nodes[p].forward[lvl] {
                if *self.value(next) < *key {
                    p = next;
                } else {
                    break;
                }
            }
        }
        if p == HEAD {
            None
        } else {
            Some(p)
        }
    }

    fn seek_last_le(&self, key: &T) -> Option<usize> {
        let mut p = HEAD;
        for lvl in (0..=self.level).rev() {
            while let Some(next) = self.nodes[p].forward[lvl] {
                match self.value(next).cmp(key) {
                    Ordering::Less => p = next,
                    Ordering::Equal => return Some(next),
                    Ordering::Greater => break,
                }
            }
        }
        if p == HEAD {
            None
        } else {
            Some(p)
        }
    }

    fn seek_first_gt(&self, key: &T) -> Option<usize> {
        let mut p = HEAD;
        for lvl in (0..=self.level).rev() {
            while let Some(next) = self.nodes[p].forward[lvl] {
                match self.value(next).cmp(key) {
                    Ordering::Less => p = next,
                    // An exact match occupies level 0 as well; the node
                    // after it there is the first strictly greater one.
                    Ordering::Equal => return self.nodes[next].forward[0],
                    Ordering::Greater => break,
                }
            }
        }
        self.nodes[p].forward[0]
    }

    fn seek_first_ge(&self, key: &T) -> Option<usize> {
        let mut p = HEAD;
        for lvl in (0..=self.level).rev() {
            while let Some(next) = self.nodes[p].forward[lvl] {
                match self.value(next).cmp(key) {
                    Ordering::Less => p = next,
                    Ordering::Equal => return Some(next),
                    Ordering::Greater => break,
                }
            }
        }
        self.nodes[p].forward[0]
    }

    /// Element of a non-sentinel node. Only HEAD lacks an element, and
    /// HEAD is never the target of a forward link.
    #[inline]
    fn value(&self, idx: usize) -> &T {
        self.nodes[idx]
            .element
            .as_ref()
            .expect("sentinel holds no element")
    }

    /// Walk every level and assert the structural invariants: strict
    /// ordering, per-level counts matching `lens`, and every linked node
    /// carrying a slot for the level it is linked at.
    #[cfg(test)]
    fn check_invariants(&self) {
        for lvl in 0..=self.level {
            let mut count = 0;
            let mut prev: Option<&T> = None;
            let mut p = self.nodes[HEAD].forward[lvl];
            while let Some(idx) = p {
                let v = self.value(idx);
                if let Some(prev) = prev {
                    assert!(prev < v, "level {} out of order", lvl);
                }
                assert!(self.nodes[idx].forward.len() > lvl);
                prev = Some(v);
                count += 1;
                p = self.nodes[idx].forward[lvl];
            }
            assert_eq!(count, self.lens[lvl], "lens[{}] out of sync", lvl);
        }
        for lvl in self.level + 1..=MAX_LEVEL {
            assert_eq!(self.lens[lvl], 0);
        }
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, R: Rng> Extend<T> for SkipList<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sk = SkipList::new();
        sk.extend(iter);
        sk
    }
}

impl<T: Ord> From<Vec<T>> for SkipList<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Ord, R> PartialEq for SkipList<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_all().eq(other.iter_all())
    }
}

impl<T: fmt::Debug, R> fmt::Debug for SkipList<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SkipList(len: {}, level: {})", self.lens[0], self.level)?;
        for lvl in (0..=self.level).rev() {
            write!(f, "  level {}: head", lvl)?;
            let mut p = self.nodes[HEAD].forward[lvl];
            while let Some(idx) = p {
                let node = &self.nodes[idx];
                match node.element {
                    Some(ref v) => write!(f, " -> {:?}", v)?,
                    None => write!(f, " -> <sentinel>")?,
                }
                p = node.forward[lvl];
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
