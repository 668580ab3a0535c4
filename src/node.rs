use std::cmp::Ordering::*;

use log::{debug, trace};

use super::{Link, LinkExt, Node};

// Public API.
impl<K> Node<K> {
    pub fn new(key: K) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    #[inline(always)]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Right height minus left height: positive when right-heavy.
    #[inline(always)]
    pub fn balance_factor(&self) -> isize {
        self.right.height() as isize - self.left.height() as isize
    }

    /// The leftmost node of this subtree, i.e. its smallest key.
    #[inline(always)]
    pub fn min_value_node(&self) -> &Node<K> {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    /// The rightmost node of this subtree, i.e. its largest key.
    #[inline(always)]
    pub fn max_value_node(&self) -> &Node<K> {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }
}

// Balancing primitives.
impl<K> Node<K> {
    #[inline(always)]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + self.left.height().max(self.right.height());
    }

    /// ```text
    ///       y            x
    ///      / \          / \
    ///     x   C  ==>   A   y
    ///    / \              / \
    ///   A   B            B   C
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `y` has no left child.
    pub(crate) fn rotate_right(mut y: Box<Self>) -> Box<Self> {
        let mut x = y.left.take().expect("rotate_right needs a left child");
        trace!("rotate right at height {}", y.height);
        y.left = x.right.take();
        // y is x's child now: fix it before x.
        y.update_height();
        x.right = Some(y);
        x.update_height();
        x
    }

    /// ```text
    ///     x                y
    ///    / \              / \
    ///   A   y    ==>     x   C
    ///      / \          / \
    ///     B   C        A   B
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `x` has no right child.
    pub(crate) fn rotate_left(mut x: Box<Self>) -> Box<Self> {
        let mut y = x.right.take().expect("rotate_left needs a right child");
        trace!("rotate left at height {}", x.height);
        x.right = y.left.take();
        x.update_height();
        y.left = Some(x);
        y.update_height();
        y
    }
}

impl<K: Ord + Clone> Node<K> {
    /// Inserts `key` below `link` and returns the rebalanced subtree root.
    ///
    /// `len` is bumped only when a node is actually created.
    pub(crate) fn insert(link: Link<K>, key: &K, len: &mut usize) -> Box<Self> {
        let Some(mut node) = link else {
            *len += 1;
            return Box::new(Node::new(key.clone()));
        };

        match key.cmp(&node.key) {
            Less => node.left = Some(Self::insert(node.left.take(), key, len)),
            Greater => node.right = Some(Self::insert(node.right.take(), key, len)),
            Equal => {
                debug!("insert: key already present, ignoring");
                return node;
            }
        }

        node.update_height();
        let balance = node.balance_factor();

        // The inserted key tells the straight cases from the zig-zag ones.
        if balance < -1 && node.left.key().is_some_and(|left| key < left) {
            return Self::rotate_right(node);
        }
        if balance > 1 && node.right.key().is_some_and(|right| key > right) {
            return Self::rotate_left(node);
        }
        if balance < -1 && node.left.key().is_some_and(|left| key > left) {
            node.left = node.left.take().map(Self::rotate_left);
            return Self::rotate_right(node);
        }
        if balance > 1 && node.right.key().is_some_and(|right| key < right) {
            node.right = node.right.take().map(Self::rotate_right);
            return Self::rotate_left(node);
        }

        node
    }

    /// Deletes `key` from below `link` and returns the rebalanced subtree
    /// root, or `None` if the subtree became empty.
    ///
    /// `len` is dropped only when a node is actually destroyed.
    pub(crate) fn delete(link: Link<K>, key: &K, len: &mut usize) -> Link<K> {
        let Some(mut node) = link else {
            debug!("delete: key not present, ignoring");
            return None;
        };

        let mut node = match key.cmp(&node.key) {
            Less => {
                node.left = Self::delete(node.left.take(), key, len);
                node
            }
            Greater => {
                node.right = Self::delete(node.right.take(), key, len);
                node
            }
            Equal => match (node.left.take(), node.right.take()) {
                (Some(left), Some(right)) => {
                    // Copy the in-order successor up, then remove it below.
                    let successor = right.min_value_node().key.clone();
                    node.left = Some(left);
                    node.right = Self::delete(Some(right), &successor, len);
                    node.key = successor;
                    node
                }
                (child, None) | (None, child) => {
                    *len -= 1;
                    child?
                }
            },
        };

        node.update_height();
        let balance = node.balance_factor();

        // The deleted key is gone, so the child's own balance picks the case.
        if balance < -1 && node.left.balance_factor() <= 0 {
            return Some(Self::rotate_right(node));
        }
        if balance > 1 && node.right.balance_factor() >= 0 {
            return Some(Self::rotate_left(node));
        }
        if balance < -1 && node.left.balance_factor() > 0 {
            node.left = node.left.take().map(Self::rotate_left);
            return Some(Self::rotate_right(node));
        }
        if balance > 1 && node.right.balance_factor() < 0 {
            node.right = node.right.take().map(Self::rotate_right);
            return Some(Self::rotate_left(node));
        }

        Some(node)
    }
}

#[cfg(test)]
impl<K: Ord> Node<K> {
    /// Asserts ordering, height and balance over the whole subtree, with every
    /// key strictly between `lower` and `upper`. Returns the node count.
    pub(crate) fn assert_invariants(link: &Link<K>, lower: Option<&K>, upper: Option<&K>) -> usize
    where
        K: std::fmt::Debug,
    {
        let Some(node) = link else {
            return 0;
        };
        if let Some(lower) = lower {
            assert!(lower < &node.key, "{:?} is not above {:?}", node.key, lower);
        }
        if let Some(upper) = upper {
            assert!(&node.key < upper, "{:?} is not below {:?}", node.key, upper);
        }
        assert_eq!(
            node.height,
            1 + node.left.height().max(node.right.height()),
            "stale height at {:?}",
            node.key
        );
        assert!(
            node.balance_factor().abs() <= 1,
            "unbalanced at {:?}: {}",
            node.key,
            node.balance_factor()
        );
        1 + Self::assert_invariants(&node.left, lower, Some(&node.key))
            + Self::assert_invariants(&node.right, Some(&node.key), upper)
    }
}
