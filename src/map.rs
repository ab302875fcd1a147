//! An ordered map based on an AVL-balanced binary search tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug, Display};
use std::hash::{self, Hash};
use std::iter;
use std::ops;
use super::node::{self, Dir, Iter, Left, Right};

pub use super::node::{Levels, Node};

/// An ordered map based on an AVL-balanced binary search tree.
///
/// The heights of every node's two subtrees differ by at most one, so the tree's height stays
/// logarithmic in the number of entries and lookups, insertions and removals take `O(log n)`
/// time in the worst case.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.min(), Some((&1, &"a")));
    /// assert_eq!(map.max(), Some((&3, &"c")));
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = avl::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.min(), Some((&3, &"c")));
    /// assert_eq!(map.max(), Some((&1, &"a")));
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { root: None, len: 0, cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns the height of the map's tree: 0 when empty, 1 for a single entry.
    ///
    /// The height is cached at every node, so this takes constant time.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.height(), 0);
    ///
    /// for i in 0..7 { map.insert(i, ()); }
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize { node::height(&self.root) }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let map: avl::Map<i32, &str> = avl::Map::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: avl::Map<i32, &str, _> = avl::Map::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 2);
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts an entry into the map, returning the previous value, if any, associated
    /// with the key.
    ///
    /// Replacing the value of an existing key leaves the tree's shape unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old_value = node::insert(&mut self.root, &self.cmp, key, value);
        if old_value.is_none() { self.len += 1; }
        old_value
    }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the map does not contain the key.
    ///
    /// A node with two children takes the key and value of its in-order predecessor, which is
    /// then removed from the left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), None);
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let key_value = node::remove(&mut self.root, &self.cmp, key);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).map(Node::value)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) { *value = "b"; }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key)
    }

    /// Returns a reference to the map's maximum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.max(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.max(), Some((&3, &"c")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        Right::extremum(&self.root).map(|node| (node.key(), node.value()))
    }

    /// Returns a reference to the map's maximum key and a mutable reference to its
    /// associated value, or `None` if the map is empty.
    pub fn max_mut(&mut self) -> Option<(&K, &mut V)> { Right::extremum_mut(&mut self.root) }

    /// Removes the map's maximum key and returns it and its associated value, or `None` if the
    /// map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.remove_max(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove_max(), Some((3, "c")));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn remove_max(&mut self) -> Option<(K, V)> {
        let key_value = Right::remove_extremum(&mut self.root);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Returns a reference to the map's minimum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.min(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.min(), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        Left::extremum(&self.root).map(|node| (node.key(), node.value()))
    }

    /// Returns a reference to the map's minimum key and a mutable reference to its
    /// associated value, or `None` if the map is empty.
    pub fn min_mut(&mut self) -> Option<(&K, &mut V)> { Left::extremum_mut(&mut self.root) }

    /// Removes the map's minimum key and returns it and its associated value, or `None` if the
    /// map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.remove_min(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove_min(), Some((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        let key_value = Left::remove_extremum(&mut self.root);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Returns the root of the map's tree, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// map.insert(3, "c");
    ///
    /// let root = map.root().unwrap();
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.left().map(|node| *node.key()), Some(1));
    /// assert_eq!(root.right().map(|node| *node.key()), Some(3));
    /// ```
    pub fn root(&self) -> Option<&Node<K, V>> { self.root.as_deref() }

    /// Returns an iterator over the levels of the map's tree, from the root down.
    ///
    /// See [`Levels`](struct.Levels.html) for the layout of each level.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// map.insert(3, "c");
    /// map.insert(4, "d");
    ///
    /// let keys: Vec<Vec<Option<i32>>> = map.levels()
    ///     .map(|level| level.into_iter().map(|slot| slot.map(|node| *node.key())).collect())
    ///     .collect();
    ///
    /// assert_eq!(keys, [vec![Some(2)],
    ///                   vec![Some(1), Some(3)],
    ///                   vec![None, None, None, Some(4)]]);
    /// ```
    pub fn levels(&self) -> Levels<K, V> { Levels::new(&self.root) }

    /// Renders every slot of every level of the map's tree, for drawing the tree's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::map::Label;
    ///
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// assert_eq!(map.level_labels(Label::Entry),
    ///            [vec![Some("1: a".to_string())], vec![None, Some("2: b".to_string())]]);
    /// assert_eq!(map.level_labels(Label::Value),
    ///            [vec![Some("a".to_string())], vec![None, Some("b".to_string())]]);
    /// ```
    pub fn level_labels(&self, label: Label) -> Vec<Vec<Option<String>>>
        where K: Display, V: Display {

        self.levels()
            .map(|level| level.into_iter().map(|slot| slot.map(|node| label.render(node))).collect())
            .collect()
    }

    pub(crate) fn iter(&self) -> Iter<K, V> { Iter::new(&self.root, self.len) }
}

/// What [`Map::level_labels`](struct.Map.html#method.level_labels) renders for each node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    /// The key and value, as `"key: value"`.
    Entry,
    /// The key alone.
    Key,
    /// The value alone.
    Value,
}

impl Label {
    fn render<K, V>(self, node: &Node<K, V>) -> String where K: Display, V: Display {
        match self {
            Label::Entry => node.to_string(),
            Label::Key => node.key().to_string(),
            Label::Value => node.value().to_string(),
        }
    }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Writes one `key: value` line per entry, in ascending order.
impl<K, V, C> Display for Map<K, V, C> where K: Display, V: Display, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (k, v) in self.iter() { writeln!(f, "{}: {}", k, v)?; }
        Ok(())
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &'a Q) -> &V { self.get(key).expect("key not found") }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}
