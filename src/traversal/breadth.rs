//! Breadth-first traversal

use std::{collections::VecDeque, iter::FusedIterator};
use tracing::trace;

/// Iterator for a breadth-first iteration. Siblings are visited in the order
/// their parents were visited, and within a parent in accessor order.
pub struct LevelOrderIterator<N, F> {
    queue: VecDeque<N>,
    children: F,
}

impl<N, F, I> LevelOrderIterator<N, F>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    pub fn new(root: N, children: F) -> Self {
        trace!("Creating new level-order iterator");
        LevelOrderIterator {
            queue: VecDeque::from([root]),
            children,
        }
    }
}

impl<N, F, I> Iterator for LevelOrderIterator<N, F>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend((self.children)(&node));
        Some(node)
    }
}

impl<N, F, I> FusedIterator for LevelOrderIterator<N, F>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
}
