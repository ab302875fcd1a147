use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};
use std::cmp::max;
use super::Node;
use crate::Map;

/// An operation on a `Map`.
#[derive(Clone, Debug)]
enum Op<K> where K: Clone + Ord {
    /// Insert a key into the map.
    Insert(K),
    /// Remove the key at index `n % map.len()` from the map.
    Remove(usize),
    /// Remove the map's minimum or maximum.
    RemoveExtremum(bool),
}

impl<K> Arbitrary for Op<K> where K: Arbitrary + Ord {
    fn arbitrary(gen: &mut Gen) -> Op<K> {
        match gen.choose(&[0, 1, 2]).copied() {
            Some(0) => Op::Insert(K::arbitrary(gen)),
            Some(1) => Op::Remove(usize::arbitrary(gen)),
            _ => Op::RemoveExtremum(bool::arbitrary(gen)),
        }
    }
}

impl<K> Op<K> where K: Clone + Ord {
    /// Perform the operation on the given map.
    fn exec(self, map: &mut Map<K, ()>) {
        match self {
            Op::Insert(key) => { map.insert(key, ()); }
            Op::Remove(index) => if !map.is_empty() {
                let key = map.iter().nth(index % map.len()).map(|e| e.0.clone());
                if let Some(key) = key { map.remove(&key); }
            },
            Op::RemoveExtremum(true) => { map.remove_min(); }
            Op::RemoveExtremum(false) => { map.remove_max(); }
        }
    }
}

/// Checks ordering, balance and cached heights, returning the subtree's height and size.
fn check<K, V>(node: Option<&Node<K, V>>, lo: Option<&K>, hi: Option<&K>) -> (usize, usize)
    where K: Ord {

    match node {
        None => (0, 0),
        Some(node) => {
            assert!(lo.map_or(true, |lo| *lo < node.key));
            assert!(hi.map_or(true, |hi| node.key < *hi));

            let (left_height, left_size) = check(node.left(), lo, Some(&node.key));
            let (right_height, right_size) = check(node.right(), Some(&node.key), hi);

            assert!((left_height as isize - right_height as isize).abs() <= 1);
            assert_eq!(node.height, 1 + max(left_height, right_height));

            (node.height, 1 + left_size + right_size)
        }
    }
}

pub fn assert_avl_tree<K, V>(map: &Map<K, V>) where K: Ord {
    let (height, size) = check(map.root(), None, None);
    assert_eq!(height, map.height());
    assert_eq!(size, map.len());
    assert_eq!(map.is_empty(), size == 0);
}

#[test]
fn test_avl() {
    fn prop(ops: Vec<Op<u32>>) -> TestResult {
        let mut map = Map::new();
        for op in ops {
            op.exec(&mut map);
            assert_avl_tree(&map);
        }
        TestResult::passed()
    }

    quickcheck(prop as fn(_) -> _);
}

#[test]
fn test_small_keys() {
    // a narrow key space makes overwrites and two-child removals common
    fn prop(ops: Vec<Op<u8>>) -> TestResult {
        let mut map = Map::new();
        for op in ops { op.exec(&mut map); }
        assert_avl_tree(&map);
        TestResult::passed()
    }

    quickcheck(prop as fn(_) -> _);
}

#[test]
fn removal_with_two_children_takes_predecessor() {
    let mut map: Map<_, _> = (1..8).map(|i| (i, i * 10)).collect();
    assert_eq!(map.root().map(|node| node.key), Some(4));

    assert_eq!(map.remove(&4), Some((4, 40)));
    assert_avl_tree(&map);

    let root: &Node<_, _> = map.root().unwrap();
    assert_eq!((root.key, root.value), (3, 30));
    assert_eq!(root.left().map(|node| node.key), Some(2));
    assert!(root.left().and_then(Node::right).is_none());
}

#[test]
fn overwrite_keeps_heights() {
    let mut map: Map<_, _> = (0..100).map(|i| (i, 0)).collect();
    let before: Vec<usize> = map.levels().flatten().map(|slot| slot.map_or(0, Node::height)).collect();

    for i in 0..100 { assert_eq!(map.insert(i, 1), Some(0)); }

    let after: Vec<usize> = map.levels().flatten().map(|slot| slot.map_or(0, Node::height)).collect();
    assert_eq!(before, after);
    assert_avl_tree(&map);
}
