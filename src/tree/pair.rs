/*! Trees stored as nested `(value, children)` pairs */

use crate::TreeIterable;
use core::fmt;

/// A node holding its value and the ordered list of its child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<T>(pub T, pub Vec<Pair<T>>);

impl<T> Pair<T> {
    /// Node without children
    pub fn leaf(value: T) -> Self {
        Pair(value, vec![])
    }
}

// Drains the descendants into a worklist; the derived drop would recurse once per level.
impl<T> Drop for Pair<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.1);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.1);
        }
    }
}

/// Value accessor
pub fn value<'a, T>(node: &&'a Pair<T>) -> &'a T {
    &node.0
}

/// Children accessor
pub fn children<'a, T>(node: &&'a Pair<T>) -> std::slice::Iter<'a, Pair<T>> {
    node.1.iter()
}

/// Wraps an existing [Pair] tree so that it can be used as a [TreeIterable].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTree<T> {
    pair: Pair<T>,
}

impl<T> From<Pair<T>> for PairTree<T> {
    fn from(pair: Pair<T>) -> Self {
        PairTree { pair }
    }
}

impl<T> TreeIterable for PairTree<T>
where
    T: fmt::Display,
{
    type Node<'a> = &'a Pair<T> where Self: 'a;
    type Value = T;

    fn root(&self) -> Self::Node<'_> {
        &self.pair
    }

    fn children<'a>(&'a self, node: &Self::Node<'a>) -> Vec<Self::Node<'a>> {
        node.1.iter().collect()
    }

    fn value<'a>(&'a self, node: &Self::Node<'a>) -> &'a Self::Value {
        &node.0
    }
}
