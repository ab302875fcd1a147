use std::cmp::max;
use std::mem::swap;
use tracing::trace;
use super::{Link, Node};

/// Returns the height of the subtree in `link`, or 0 if it is empty.
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_factor<K, V>(link: &Link<K, V>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

/// The imbalance found at a node whose subtrees differ in height by more than one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    LeftLeft,
    RightRight,
    LeftRight,
    RightLeft,
}

impl Case {
    /// Classifies the node's imbalance, or returns `None` if the node is balanced.
    ///
    /// The node's height must be current. A child that is itself level picks the single
    /// rotation.
    pub fn of<K, V>(node: &Node<K, V>) -> Option<Case> {
        let factor = node.balance_factor();

        if factor > 1 && balance_factor(&node.left) >= 0 {
            Some(Case::LeftLeft)
        } else if factor < -1 && balance_factor(&node.right) <= 0 {
            Some(Case::RightRight)
        } else if factor > 1 {
            Some(Case::LeftRight)
        } else if factor < -1 {
            Some(Case::RightLeft)
        } else {
            None
        }
    }
}

impl<K, V> Node<K, V> {
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }

    // Lift the left child into this position:
    //
    //       a            b
    //      / \          / \
    //     b   z   =>   x   a
    //    / \              / \
    //   x   c            c   z
    fn rotate_right(node: &mut Box<Self>) {
        if let Some(mut save) = node.left.take() {
            swap(&mut node.left, &mut save.right);
            node.update_height();
            swap(node, &mut save);
            node.right = Some(save);
            node.update_height();
        }
    }

    // Mirror image of `rotate_right`
    fn rotate_left(node: &mut Box<Self>) {
        if let Some(mut save) = node.right.take() {
            swap(&mut node.right, &mut save.left);
            node.update_height();
            swap(node, &mut save);
            node.left = Some(save);
            node.update_height();
        }
    }

    /// Refreshes the node's height after a change below it and restores the AVL invariant
    /// with at most two rotations.
    pub(crate) fn rebalance(node: &mut Box<Self>) {
        node.update_height();

        let case = match Case::of(node) {
            None => return,
            Some(case) => case,
        };

        trace!(?case, height = node.height, "rebalancing subtree");

        match case {
            Case::LeftLeft => Node::rotate_right(node),
            Case::RightRight => Node::rotate_left(node),
            Case::LeftRight => {
                if let Some(ref mut left) = node.left { Node::rotate_left(left); }
                Node::rotate_right(node);
            }
            Case::RightLeft => {
                if let Some(ref mut right) = node.right { Node::rotate_right(right); }
                Node::rotate_left(node);
            }
        }
    }
}
