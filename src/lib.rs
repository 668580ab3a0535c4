//! An AVL tree whose nodes own their subtrees.
//!
//! There are no parent pointers: every structural operation consumes the
//! subtree it is given and hands back the (possibly new) subtree root, which
//! the caller stores back into its own child slot.
mod iter;
mod node;
mod print;
mod tree;

pub use iter::{InOrder, PreOrder};

/// An owned, possibly absent, subtree.
pub type Link<K> = Option<Box<Node<K>>>;

pub(crate) trait LinkExt {
    type Key;

    fn balance_factor(&self) -> isize;
    fn height(&self) -> usize;
    fn key(&self) -> Option<&Self::Key>;
}

impl<K> LinkExt for Link<K> {
    type Key = K;

    /// Absent subtrees are perfectly balanced.
    #[inline(always)]
    fn balance_factor(&self) -> isize {
        self.as_ref().map_or(0, |node| node.balance_factor())
    }

    /// Absent subtrees have height 0; present ones report their stored field.
    #[inline(always)]
    fn height(&self) -> usize {
        self.as_ref().map_or(0, |node| node.height)
    }

    #[inline(always)]
    fn key(&self) -> Option<&K> {
        self.as_ref().map(|node| &node.key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node<K> {
    pub(crate) key: K,
    // 1 for a leaf; never recomputed by walking the subtree.
    pub(crate) height: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

/// A set of distinct keys kept in an AVL tree.
///
/// Keys default to `i32`. Inserting a key twice, or deleting a key that is not
/// there, leaves the tree untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct AvlTree<K = i32> {
    root: Link<K>,
    len: usize,
}
