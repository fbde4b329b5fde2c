use crate::Node;

/// Lazy cursor over a contiguous run of the level-0 chain.
///
/// Produced by [`SkipList::range`](crate::SkipList::range) and
/// [`SkipList::iter_all`](crate::SkipList::iter_all). The start bound is
/// resolved to a concrete node up front; each call to `next` then follows
/// one level-0 link and stops once the current element passes the boundary.
/// Reaching the end is terminal — build a fresh iterator to scan again.
pub struct Range<'a, T> {
    nodes: &'a [Node<T>],
    curr: Option<usize>,
    boundary: Option<&'a T>,
}

impl<'a, T> Range<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], curr: Option<usize>, boundary: Option<&'a T>) -> Self {
        Self {
            nodes,
            curr,
            boundary,
        }
    }
}

impl<'a, T: Ord> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr.take()?;
        let node = &self.nodes[idx];
        let element = node.element.as_ref()?;
        if let Some(boundary) = self.boundary {
            if element > boundary {
                return None;
            }
        }
        self.curr = node.forward[0];
        Some(element)
    }
}
