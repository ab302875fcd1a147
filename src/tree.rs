//! An AVL tree whose operations accept absent keys and values.
//!
//! [`Tree`] keeps the contract of a map in which "no value" is itself a value: adding an absent
//! value removes the key, absent keys are rejected with [`Error::InvalidArgument`], and extremal
//! queries on an empty tree fail with [`Error::EmptyCollection`]. Code that has no use for that
//! contract should use [`Map`] directly.

use compare::{Compare, Natural};
use std::fmt::{self, Debug, Display};
use tracing::debug;
use super::{Error, Map, Result};

/// An ordered map based on an AVL tree, with a sentinel-style interface.
///
/// # Examples
///
/// ```
/// use avl::{Error, Tree};
///
/// let mut tree: Tree<i32, &str> = Tree::new();
///
/// tree.add(2, "b")?;
/// tree.add(1, "a")?;
/// assert_eq!(tree.size(), 2);
/// assert_eq!(tree.min()?, &1);
///
/// // adding an absent value removes the key
/// tree.add(1, None::<&str>)?;
/// assert_eq!(tree.get(&1)?, None);
///
/// assert_eq!(tree.add(None::<i32>, "c"), Err(Error::InvalidArgument));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone)]
pub struct Tree<K, V, C = Natural<K>> where C: Compare<K> {
    map: Map<K, V, C>,
}

impl<K, V> Tree<K, V> where K: Ord {
    /// Creates an empty tree ordered according to the natural order of its keys.
    pub fn new() -> Self { Tree { map: Map::new() } }
}

impl<K, V, C> Tree<K, V, C> where C: Compare<K> {
    /// Creates an empty tree ordered according to the given comparator.
    pub fn with_cmp(cmp: C) -> Self { Tree { map: Map::with_cmp(cmp) } }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Returns the number of entries in the tree.
    pub fn size(&self) -> usize { self.map.len() }

    /// Returns the height of the tree: 0 when empty, 1 for a single entry.
    pub fn height(&self) -> usize { self.map.height() }

    /// Returns the value associated with the given key, or `Ok(None)` if the tree does not
    /// contain the key.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the key is absent.
    pub fn get<'a, Q>(&self, key: Q) -> Result<Option<&V>> where Q: Into<Option<&'a K>>, K: 'a {
        Ok(self.map.get(required(key.into())?))
    }

    /// Checks if the tree contains the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the key is absent.
    pub fn contains<'a, Q>(&self, key: Q) -> Result<bool> where Q: Into<Option<&'a K>>, K: 'a {
        Ok(self.map.contains_key(required(key.into())?))
    }

    /// Associates the value with the key, replacing any previous value. An absent value
    /// removes the key instead.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the key is absent. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: avl::Tree<i32, &str> = avl::Tree::new();
    ///
    /// tree.add(1, "a")?;
    /// tree.add(1, "b")?;
    /// assert_eq!(tree.size(), 1);
    /// assert_eq!(tree.get(&1)?, Some(&"b"));
    ///
    /// tree.add(1, None::<&str>)?;
    /// assert!(tree.is_empty());
    /// # Ok::<(), avl::Error>(())
    /// ```
    pub fn add<Q, T>(&mut self, key: Q, value: T) -> Result<()>
        where Q: Into<Option<K>>, T: Into<Option<V>> {

        let key = required(key.into())?;

        match value.into() {
            Some(value) => { self.map.insert(key, value); }
            None => {
                debug!("absent value, removing key");
                self.map.remove(&key);
            }
        }

        Ok(())
    }

    /// Removes the key and its value from the tree. Removing a key that is not present does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the key is absent.
    pub fn remove<'a, Q>(&mut self, key: Q) -> Result<()> where Q: Into<Option<&'a K>>, K: 'a {
        self.map.remove(required(key.into())?);
        Ok(())
    }

    /// Removes the smallest key and its value from the tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyCollection` if the tree is empty.
    pub fn remove_min(&mut self) -> Result<()> {
        self.map.remove_min().map(drop).ok_or_else(empty)
    }

    /// Removes the largest key and its value from the tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyCollection` if the tree is empty.
    pub fn remove_max(&mut self) -> Result<()> {
        self.map.remove_max().map(drop).ok_or_else(empty)
    }

    /// Returns the smallest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyCollection` if the tree is empty.
    pub fn min(&self) -> Result<&K> { self.map.min().map(|e| e.0).ok_or_else(empty) }

    /// Returns the largest key in the tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyCollection` if the tree is empty.
    pub fn max(&self) -> Result<&K> { self.map.max().map(|e| e.0).ok_or_else(empty) }

    /// Removes every entry from the tree.
    pub fn clear(&mut self) { self.map.clear(); }

    /// Returns the map backing the tree, e.g. to walk the tree's shape.
    pub fn as_map(&self) -> &Map<K, V, C> { &self.map }

    /// Converts the tree into the map backing it.
    pub fn into_map(self) -> Map<K, V, C> { self.map }
}

fn required<T>(key: Option<T>) -> Result<T> {
    key.ok_or_else(|| {
        debug!("rejecting absent key");
        Error::InvalidArgument
    })
}

fn empty() -> Error {
    debug!("rejecting extremal operation on empty tree");
    Error::EmptyCollection
}

impl<K, V, C> From<Map<K, V, C>> for Tree<K, V, C> where C: Compare<K> {
    fn from(map: Map<K, V, C>) -> Self { Tree { map } }
}

impl<K, V, C> Default for Tree<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Tree { map: Map::default() } }
}

impl<K, V, C> PartialEq for Tree<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool { self.map == other.map }
}

impl<K, V, C> Eq for Tree<K, V, C> where V: Eq, C: Compare<K> {}

impl<K, V, C> Debug for Tree<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { Debug::fmt(&self.map, f) }
}

impl<K, V, C> Display for Tree<K, V, C> where K: Display, V: Display, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { Display::fmt(&self.map, f) }
}

#[cfg(test)]
mod test {
    use super::Tree;
    use super::super::Error;

    #[test]
    fn absent_key_is_rejected_without_change() {
        let mut tree: Tree<i32, i32> = Tree::new();
        tree.add(1, 10).unwrap();

        assert_eq!(tree.add(None::<i32>, 20), Err(Error::InvalidArgument));
        assert_eq!(tree.add(None::<i32>, None::<i32>), Err(Error::InvalidArgument));
        assert_eq!(tree.get(None::<&i32>), Err(Error::InvalidArgument));
        assert_eq!(tree.contains(None::<&i32>), Err(Error::InvalidArgument));
        assert_eq!(tree.remove(None::<&i32>), Err(Error::InvalidArgument));

        assert_eq!(tree.size(), 1);
        assert_eq!(tree.get(&1), Ok(Some(&10)));
    }

    #[test]
    fn empty_tree_extrema_fail() {
        let mut tree: Tree<u32, u32> = Tree::new();

        assert_eq!(tree.min(), Err(Error::EmptyCollection));
        assert_eq!(tree.max(), Err(Error::EmptyCollection));
        assert_eq!(tree.remove_min(), Err(Error::EmptyCollection));
        assert_eq!(tree.remove_max(), Err(Error::EmptyCollection));
        assert_eq!(Error::EmptyCollection.to_string(), "tree is empty");
    }

    #[test]
    fn absent_value_on_missing_key_is_a_no_op() {
        let mut tree: Tree<i32, &str> = Tree::new();
        tree.add(1, "a").unwrap();
        tree.add(2, None::<&str>).unwrap();

        assert_eq!(tree.size(), 1);
        assert_eq!(tree.contains(&2), Ok(false));
    }

    #[test]
    fn display_matches_map() {
        let mut tree: Tree<i32, &str> = Tree::new();
        tree.add(2, "b").unwrap();
        tree.add(1, "a").unwrap();

        assert_eq!(tree.to_string(), "1: a\n2: b\n");
        assert_eq!(tree.to_string(), tree.as_map().to_string());
    }
}
