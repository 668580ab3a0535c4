use std::iter::FusedIterator;

use crate::Node;

/// Keys in node, left, right order. The sequence reflects the tree's current
/// shape, so it depends on the rotation history and not only on the key set.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        PreOrder {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so left comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for PreOrder<'_, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

#[cfg(test)]
mod test {
    use crate::AvlTree;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_tree_yields_nothing() {
        let tree = AvlTree::<i32>::new();
        assert_eq!(None, tree.pre_order().next());
    }

    #[test]
    fn follows_shape_not_insertion_order() {
        let mut ascending = AvlTree::new();
        let mut descending = AvlTree::new();
        for key in 1..=7 {
            ascending.insert(key);
            descending.insert(8 - key);
        }
        let expected = vec![4, 2, 1, 3, 6, 5, 7];
        assert_eq!(expected, ascending.pre_order().copied().collect::<Vec<_>>());
        assert_eq!(expected, descending.pre_order().copied().collect::<Vec<_>>());
    }

    #[test]
    fn seeded_tree_shape() {
        let mut tree = AvlTree::new();
        for key in [10, 5, 15, 3, 8, 12, 20, 2, 4, 17, 25] {
            tree.insert(key);
        }
        let keys: Vec<i32> = tree.pre_order().copied().collect();
        assert_eq!(vec![10, 5, 3, 2, 4, 8, 15, 12, 20, 17, 25], keys);
        assert_eq!(11, tree.pre_order().len());
    }
}
