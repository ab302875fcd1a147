use std::mem;
use super::{Link, Node};

/// An in-order walk over a subtree, yielding entries in ascending key order.
#[derive(Clone)]
pub struct Iter<'a, K: 'a, V: 'a> {
    stack: Vec<&'a Node<K, V>>,
    size: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(link: &'a Link<K, V>, size: usize) -> Self {
        let mut it = Iter { stack: vec![], size };
        it.descend(link);
        it
    }

    fn descend(&mut self, mut link: &'a Link<K, V>) {
        while let Some(node) = link.as_deref() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let node = self.stack.pop()?;
        self.descend(&node.right);
        self.size -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the levels of a map's tree, from the root down.
///
/// Each level holds one slot per child position of the level above, so level `i` has `2^i`
/// slots; a slot is `None` where the tree has no node. Iteration stops after the deepest level
/// that contains a node.
///
/// Acquire through [`Map::levels`](crate::Map::levels).
#[derive(Clone)]
pub struct Levels<'a, K: 'a, V: 'a> {
    level: Vec<Option<&'a Node<K, V>>>,
}

impl<'a, K, V> Levels<'a, K, V> {
    pub(crate) fn new(link: &'a Link<K, V>) -> Self {
        Levels { level: link.as_deref().into_iter().map(Some).collect() }
    }
}

impl<'a, K, V> Iterator for Levels<'a, K, V> {
    type Item = Vec<Option<&'a Node<K, V>>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.level.iter().all(Option::is_none) { return None; }

        let next = self.level.iter()
            .flat_map(|slot| match *slot {
                None => [None, None],
                Some(node) => [node.left(), node.right()],
            })
            .collect();

        Some(mem::replace(&mut self.level, next))
    }
}
