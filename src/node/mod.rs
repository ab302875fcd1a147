mod balance;
mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::*;
use std::fmt::{self, Display};
use std::mem::replace;

pub use self::balance::height;
pub use self::iter::{Iter, Levels};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// A node in a [`Map`](crate::Map)'s tree.
///
/// Nodes are exposed read-only so that callers can walk the tree's shape, e.g. to render it.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    height: usize,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, height: 1, key, value }
    }

    /// Returns a reference to the node's key.
    pub fn key(&self) -> &K { &self.key }

    /// Returns a reference to the node's value.
    pub fn value(&self) -> &V { &self.value }

    /// Returns a reference to the node's left child, if any.
    pub fn left(&self) -> Option<&Self> { self.left.as_deref() }

    /// Returns a reference to the node's right child, if any.
    pub fn right(&self) -> Option<&Self> { self.right.as_deref() }

    /// Returns the height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize { self.height }

    /// Returns the height of the left subtree minus the height of the right subtree.
    ///
    /// This is always in `-1..=1` for a node reachable from a map.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn into_key_value(self) -> (K, V) { (self.key, self.value) }
}

impl<K, V> Display for Node<K, V> where K: Display, V: Display {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

pub fn insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    match *link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            None
        }
        Some(ref mut node) => {
            let old_value = match cmp.compare(&key, &node.key) {
                Equal => return Some(replace(&mut node.value, value)),
                Less => insert(&mut node.left, cmp, key, value),
                Greater => insert(&mut node.right, cmp, key, value),
            };

            // an overwrite leaves the shape untouched
            if old_value.is_none() { Node::rebalance(node); }
            old_value
        }
    }
}

pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let node = link.as_mut()?;

    let key_value = match cmp.compare(key, &node.key) {
        Less => remove(&mut node.left, cmp, key)?,
        Greater => remove(&mut node.right, cmp, key)?,
        Equal if node.left.is_some() && node.right.is_some() => {
            // splice in the predecessor
            let (key, value) = Right::remove_extremum(&mut node.left)?;
            (replace(&mut node.key, key), replace(&mut node.value, value))
        }
        Equal => return unlink(link),
    };

    Node::rebalance(node);
    Some(key_value)
}

/// Replaces the node in `link`, which has at most one child, with that child.
fn unlink<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    link.take().map(|node| {
        let Node { left, right, key, value, .. } = *node;
        *link = left.or(right);
        (key, value)
    })
}

pub fn get<'a, K, V, C, Q: ?Sized>(link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

    let mut link = link;

    loop {
        match *link {
            None => return None,
            Some(ref node) => match cmp.compare(key, &node.key) {
                Equal => return Some(&**node),
                Less => link = &node.left,
                Greater => link = &node.right,
            },
        }
    }
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut V> where C: Compare<Q, K> {

    link.as_mut().and_then(|node| match cmp.compare(key, &node.key) {
        Equal => Some(&mut node.value),
        Less => get_mut(&mut node.left, cmp, key),
        Greater => get_mut(&mut node.right, cmp, key),
    })
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite = Self>;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V>;

    fn extremum<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
        let mut node = link.as_deref()?;
        while let Some(child) = Self::forward(node).as_deref() { node = child; }
        Some(node)
    }

    fn extremum_mut<K, V>(link: &mut Link<K, V>) -> Option<(&K, &mut V)> {
        let node = link.as_mut()?;

        if Self::forward(node).is_some() {
            Self::extremum_mut(Self::forward_mut(node))
        } else {
            Some((&node.key, &mut node.value))
        }
    }

    fn remove_extremum<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
        match *link {
            Some(ref mut node) if Self::forward(node).is_some() => {
                let key_value = Self::remove_extremum(Self::forward_mut(node));
                Node::rebalance(node);
                key_value
            }
            _ => link.take().map(|node| {
                let mut node = *node;
                *link = Self::Opposite::forward_mut(&mut node).take();
                node.into_key_value()
            }),
        }
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.right }
}
