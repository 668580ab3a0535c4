use std::cmp::Ordering::*;

use crate::{AvlTree, InOrder, LinkExt, Node, PreOrder};

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> AvlTree<K> {
    pub const fn new() -> Self {
        AvlTree { root: None, len: 0 }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the root; 0 when the tree is empty.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    pub fn first(&self) -> Option<&K> {
        self.root().map(|root| root.min_value_node().key())
    }

    pub fn last(&self) -> Option<&K> {
        self.root().map(|root| root.max_value_node().key())
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root(), self.len)
    }

    /// Keys node first, then left subtree, then right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root(), self.len)
    }
}

impl<K: Ord> AvlTree<K> {
    pub fn contains(&self, key: &K) -> bool {
        let mut node = self.root();
        while let Some(candidate) = node {
            match key.cmp(candidate.key()) {
                Equal => return true,
                Greater => node = candidate.right(),
                Less => node = candidate.left(),
            }
        }
        false
    }
}

impl<K: Ord + Clone> AvlTree<K> {
    /// Inserts `key`, rebalancing on the way back up.
    ///
    /// Returns `false`, and leaves the tree untouched, if `key` was already
    /// present.
    pub fn insert(&mut self, key: K) -> bool {
        let before = self.len;
        self.root = Some(Node::insert(self.root.take(), &key, &mut self.len));
        self.len != before
    }

    /// Deletes `key`, rebalancing on the way back up.
    ///
    /// Returns `false`, and leaves the tree untouched, if `key` was absent.
    pub fn delete(&mut self, key: &K) -> bool {
        let before = self.len;
        self.root = Node::delete(self.root.take(), key, &mut self.len);
        self.len != before
    }
}
