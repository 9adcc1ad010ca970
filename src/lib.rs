//! ## About
//!
//! Most tree algorithms can be written as higher-order functions. A top-down
//! traversal only needs a way to get from a node to its children, no matter
//! whether the tree is a nested structure, a parsed document or a linked list of
//! siblings. This crate provides preorder, postorder and level-order traversals
//! in that form (see [traversal]) together with a few tree representations
//! ([tree]) and printing helpers ([printing]).
//!
//! The same algorithms are also offered as default methods of the [TreeIterable]
//! trait for those who prefer an object-style interface.
//!
//! ```
//! use itertools::Itertools;
//! use treewalk::{levelorder, tree::pair::{self, Pair}};
//!
//! let tree = Pair(1, vec![Pair(2, vec![Pair::leaf(4), Pair::leaf(5)]), Pair::leaf(3)]);
//! let values = levelorder(&tree, pair::children).map(|node| node.0).collect_vec();
//! assert_eq!(values, &[1, 2, 3, 4, 5]);
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms, except for getters and accessors, which use substantives
//!   (i.e., omit a `get_` prefix) much like the standard library.

pub mod dummy;
pub mod errors;
pub mod iterable_tree;
pub mod printing;
pub mod traversal;
pub mod tree;

pub use errors::TreewalkError;
pub use iterable_tree::TreeIterable;
pub use printing::{
    print_iterable, print_tree, print_tree_ordered, write_iterable, write_tree, write_tree_ordered,
};
pub use traversal::{
    levelorder, postorder, preorder, traverse, LevelOrderIterator, Order, PostOrderIterator, PreOrderIterator,
};
