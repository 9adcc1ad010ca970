//! Concrete tree representations and their children accessors.
//!
//! None of these share a base type. Each module provides a `children` and a
//! `value` function with the signatures expected by [crate::traversal] and
//! [crate::printing], and an implementation of [crate::TreeIterable].

#[cfg(feature = "document")]
pub mod document;
pub mod linked;
pub mod pair;
