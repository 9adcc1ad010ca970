//! Definition of the object-style interface for tree iteration.
//!
//! [TreeIterable] is the same abstraction as the free functions in
//! [crate::traversal], bundled as a capability set: a tree that can name its
//! root, the children of a node and the value of a node gets all traversals
//! for free. Any representation can be adapted by implementing the three
//! required methods, either on the tree type itself or on a wrapper.

use crate::{traversal, Order, TreewalkError};
use itertools::Itertools;
use std::{fmt, io};

/// A datastructure holding a tree hierarchy of values.
pub trait TreeIterable {
    /// Handle to a position in the tree. Usually a reference or a `Copy` handle.
    type Node<'a>: 'a
    where
        Self: 'a;
    type Value: fmt::Display + ?Sized;

    fn root(&self) -> Self::Node<'_>;
    fn children<'a>(&'a self, node: &Self::Node<'a>) -> Vec<Self::Node<'a>>;
    fn value<'a>(&'a self, node: &Self::Node<'a>) -> &'a Self::Value;

    fn preorder<'a>(&'a self) -> impl Iterator<Item = Self::Node<'a>> + 'a {
        traversal::preorder(self.root(), move |node| self.children(node))
    }

    fn postorder<'a>(&'a self) -> impl Iterator<Item = Self::Node<'a>> + 'a {
        traversal::postorder(self.root(), move |node| self.children(node))
    }

    fn levelorder<'a>(&'a self) -> impl Iterator<Item = Self::Node<'a>> + 'a {
        traversal::levelorder(self.root(), move |node| self.children(node))
    }

    /// Iterate in an order chosen at runtime
    fn iter<'a>(&'a self, order: Order) -> Box<dyn Iterator<Item = Self::Node<'a>> + 'a> {
        traversal::traverse(order, self.root(), move |node: &Self::Node<'a>| self.children(node))
    }

    /// Writes the values in traversal order on a single line
    fn write_values<W>(&self, order: Order, mut writer: W) -> Result<(), TreewalkError>
    where
        W: io::Write,
    {
        let line = self.iter(order).map(|node| self.value(&node)).join(" ");
        writeln!(writer, "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;
    use test_log;

    /// Tree stored as a parent list, children are found by scanning it
    struct ParentList {
        labels: Vec<char>,
        parents: Vec<Option<usize>>,
    }

    impl TreeIterable for ParentList {
        type Node<'a> = usize;
        type Value = char;

        fn root(&self) -> usize {
            0
        }

        fn children(&self, node: &usize) -> Vec<usize> {
            self.parents
                .iter()
                .positions(|parent| *parent == Some(*node))
                .collect_vec()
        }

        fn value(&self, node: &usize) -> &char {
            &self.labels[*node]
        }
    }

    fn tree() -> ParentList {
        // a -> [b, c], b -> [d]
        ParentList {
            labels: vec!['a', 'b', 'c', 'd'],
            parents: vec![None, Some(0), Some(0), Some(1)],
        }
    }

    #[test_log::test]
    fn test_default_traversals() {
        let tree = tree();
        assert_eq!(tree.preorder().collect_vec(), &[0, 1, 3, 2]);
        assert_eq!(tree.postorder().collect_vec(), &[3, 1, 2, 0]);
        assert_eq!(tree.levelorder().collect_vec(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_iter_matches_methods() {
        let tree = tree();
        assert_eq!(tree.iter(Order::PreOrder).collect_vec(), tree.preorder().collect_vec());
        assert_eq!(tree.iter(Order::PostOrder).collect_vec(), tree.postorder().collect_vec());
        assert_eq!(tree.iter(Order::LevelOrder).collect_vec(), tree.levelorder().collect_vec());
    }

    #[test]
    fn test_write_values() {
        let tree = tree();
        let mut buffer = Vec::new();
        for order in Order::ALL {
            tree.write_values(order, &mut buffer).unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "a b d c\nd b c a\na b c d\n");
    }
}
