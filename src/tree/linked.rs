/*! Trees that do not hold their children directly but link to the first child,
which in turn links to its next sibling. */

use crate::TreeIterable;
use core::fmt;
use std::iter::FusedIterator;

/// A node in a first-child/next-sibling tree.
///
/// The root of a tree has no sibling; the node itself is the tree, hence the
/// [TreeIterable] implementation returns `self` as root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedNode<T> {
    value: T,
    first_child: Option<Box<LinkedNode<T>>>,
    next_sibling: Option<Box<LinkedNode<T>>>,
}

impl<T> LinkedNode<T> {
    pub fn new(value: T, first_child: Option<LinkedNode<T>>, next_sibling: Option<LinkedNode<T>>) -> Self {
        LinkedNode {
            value,
            first_child: first_child.map(Box::new),
            next_sibling: next_sibling.map(Box::new),
        }
    }

    /// Node with neither children nor siblings
    pub fn leaf(value: T) -> Self {
        Self::new(value, None, None)
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn first_child(&self) -> Option<&LinkedNode<T>> {
        self.first_child.as_deref()
    }

    pub fn next_sibling(&self) -> Option<&LinkedNode<T>> {
        self.next_sibling.as_deref()
    }

    /// Follows the sibling chain starting at the first child
    pub fn iter_children(&self) -> Siblings<'_, T> {
        Siblings {
            next: self.first_child(),
        }
    }
}

// Unlinks the descendants onto a worklist; the derived drop would recurse once per sibling.
impl<T> Drop for LinkedNode<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<LinkedNode<T>>> = Vec::new();
        pending.extend(self.first_child.take());
        pending.extend(self.next_sibling.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.first_child.take());
            pending.extend(node.next_sibling.take());
        }
    }
}

/// Iterator over a chain of sibling nodes
#[derive(Debug, Clone)]
pub struct Siblings<'a, T> {
    next: Option<&'a LinkedNode<T>>,
}

impl<'a, T> Iterator for Siblings<'a, T> {
    type Item = &'a LinkedNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next_sibling();
        Some(node)
    }
}

impl<T> FusedIterator for Siblings<'_, T> {}

/// Value accessor
pub fn value<'a, T>(node: &&'a LinkedNode<T>) -> &'a T {
    node.get()
}

/// Children accessor
pub fn children<'a, T>(node: &&'a LinkedNode<T>) -> Siblings<'a, T> {
    node.iter_children()
}

impl<T> TreeIterable for LinkedNode<T>
where
    T: fmt::Display,
{
    type Node<'a> = &'a LinkedNode<T> where Self: 'a;
    type Value = T;

    fn root(&self) -> Self::Node<'_> {
        self
    }

    fn children<'a>(&'a self, node: &Self::Node<'a>) -> Vec<Self::Node<'a>> {
        node.iter_children().collect()
    }

    fn value<'a>(&'a self, node: &Self::Node<'a>) -> &'a Self::Value {
        node.get()
    }
}
