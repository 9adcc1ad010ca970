//! Generic tree traversals.
//!
//! A traversal only needs a root node and a *children accessor*: any
//! `Fn(&N) -> I` where `I: IntoIterator<Item = N>` that returns the direct
//! children of a node in order. The node type `N` is opaque to the traversal; it
//! may be a reference into a nested structure, an index into an arena, or a
//! handle into a parsed document.
//!
//! All traversals are iterative and lazy. Each iterator owns its stack/queue
//! and is exhausted after one pass; call the function again to restart.
//! The children relation must be finite and acyclic, otherwise the iteration
//! does not terminate.

pub mod breadth;
pub mod depth;

use core::fmt;

pub use breadth::LevelOrderIterator;
pub use depth::{PostOrderIterator, PreOrderIterator};
use tracing_attributes::instrument;

/// Order of iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node first, then each child's subtree from left to right
    PreOrder,
    /// Each child's subtree from left to right, then the node
    PostOrder,
    /// Breadth-first, by increasing depth
    LevelOrder,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::PreOrder, Order::PostOrder, Order::LevelOrder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::PreOrder => "preorder",
            Order::PostOrder => "postorder",
            Order::LevelOrder => "levelorder",
        };
        f.write_str(name)
    }
}

/// Depth-first traversal visiting a node before its subtrees.
pub fn preorder<N, F, I>(root: N, children: F) -> PreOrderIterator<N, F>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    PreOrderIterator::new(root, children)
}

/// Depth-first traversal visiting a node after its subtrees.
pub fn postorder<N, F, I>(root: N, children: F) -> PostOrderIterator<N, F, I::IntoIter>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    PostOrderIterator::new(root, children)
}

/// Breadth-first traversal visiting nodes by increasing distance from `root`.
pub fn levelorder<N, F, I>(root: N, children: F) -> LevelOrderIterator<N, F>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    LevelOrderIterator::new(root, children)
}

/// Traverse in the given [Order]. Boxed so that the order can be chosen at runtime.
#[instrument(level = "debug", skip(root, children))]
pub fn traverse<'a, N, F, I>(order: Order, root: N, children: F) -> Box<dyn Iterator<Item = N> + 'a>
where
    N: 'a,
    F: Fn(&N) -> I + 'a,
    I: IntoIterator<Item = N>,
    I::IntoIter: 'a,
{
    match order {
        Order::PreOrder => Box::new(preorder(root, children)),
        Order::PostOrder => Box::new(postorder(root, children)),
        Order::LevelOrder => Box::new(levelorder(root, children)),
    }
}
