//! Depth-first traversals

use std::iter::FusedIterator;
use tracing::trace;

/// Iterator for a depth-first iteration that yields a node before its subtrees.
pub struct PreOrderIterator<N, F> {
    stack: Vec<N>,
    children: F,
}

impl<N, F, I> PreOrderIterator<N, F>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    pub fn new(root: N, children: F) -> Self {
        trace!("Creating new preorder iterator");
        PreOrderIterator {
            stack: vec![root],
            children,
        }
    }
}

impl<N, F, I> Iterator for PreOrderIterator<N, F>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children go on reversed so that the leftmost one is popped next
        let top = self.stack.len();
        self.stack.extend((self.children)(&node));
        self.stack[top..].reverse();
        Some(node)
    }
}

impl<N, F, I> FusedIterator for PreOrderIterator<N, F>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
}

/// Iterator for a depth-first iteration that yields a node after its subtrees.
///
/// Each stack entry pairs a node with the iterator over its children that have
/// not been descended into yet. A node is yielded once that iterator is
/// exhausted, so the call depth stays constant regardless of the tree depth.
pub struct PostOrderIterator<N, F, It> {
    stack: Vec<(N, It)>,
    children: F,
}

impl<N, F, I, It> PostOrderIterator<N, F, It>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N, IntoIter = It>,
    It: Iterator<Item = N>,
{
    pub fn new(root: N, children: F) -> Self {
        trace!("Creating new postorder iterator");
        let pending = children(&root).into_iter();
        PostOrderIterator {
            stack: vec![(root, pending)],
            children,
        }
    }
}

impl<N, F, I, It> Iterator for PostOrderIterator<N, F, It>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N, IntoIter = It>,
    It: Iterator<Item = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (_, pending) = self.stack.last_mut()?;
            match pending.next() {
                Some(child) => {
                    let grandchildren = (self.children)(&child).into_iter();
                    self.stack.push((child, grandchildren));
                }
                None => return self.stack.pop().map(|(node, _)| node),
            }
        }
    }
}

impl<N, F, I, It> FusedIterator for PostOrderIterator<N, F, It>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N, IntoIter = It>,
    It: Iterator<Item = N>,
{
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_deep_chain() {
        // A recursive postorder would overflow the call stack on this one
        let depth = 200_000;
        let children = |node: &usize| if *node < depth { vec![node + 1] } else { vec![] };

        let result = PostOrderIterator::new(0, children).take(3).collect_vec();
        assert_eq!(result, &[depth, depth - 1, depth - 2]);
        assert_eq!(PreOrderIterator::new(0, children).count(), depth + 1);
    }

    #[test]
    fn test_fused() {
        let mut iter = PreOrderIterator::new(7, |_: &i32| Vec::new());
        assert_eq!(iter.next(), Some(7));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        let mut iter = PostOrderIterator::new(7, |_: &i32| Vec::new());
        assert_eq!(iter.next(), Some(7));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
