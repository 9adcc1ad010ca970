//! Helpers that print the values of a tree in traversal order.
//!
//! The traversal is passed in like the children accessor, as a function.
//! Values are separated by a single space and the line is terminated with a
//! newline. The free-function and the [TreeIterable] flavors produce the same
//! bytes for the same tree and order.

use crate::{levelorder, postorder, preorder, Order, TreeIterable, TreewalkError};
use core::fmt;
use itertools::Itertools;
use std::io;
use tracing_attributes::instrument;

/// Writes the value of every node, as extracted by `value`, in the order produced
/// by `traversal`. Any of [preorder], [postorder] or [levelorder] can be passed
/// as is, as can any other function taking a root and a children accessor.
#[instrument(level = "debug", skip_all)]
pub fn write_tree<W, N, V, D, F, T, It>(
    mut writer: W,
    root: N,
    value: V,
    children: F,
    traversal: T,
) -> Result<(), TreewalkError>
where
    W: io::Write,
    V: Fn(&N) -> D,
    D: fmt::Display,
    T: FnOnce(N, F) -> It,
    It: Iterator<Item = N>,
{
    let line = traversal(root, children).map(|node| value(&node)).join(" ");
    writeln!(writer, "{line}")?;
    Ok(())
}

/// [write_tree] to standard output
pub fn print_tree<N, V, D, F, T, It>(root: N, value: V, children: F, traversal: T) -> Result<(), TreewalkError>
where
    V: Fn(&N) -> D,
    D: fmt::Display,
    T: FnOnce(N, F) -> It,
    It: Iterator<Item = N>,
{
    write_tree(io::stdout().lock(), root, value, children, traversal)
}

/// [write_tree] with the traversal chosen by an [Order] at runtime.
#[instrument(level = "debug", skip(writer, root, value, children))]
pub fn write_tree_ordered<W, N, V, D, F, I>(
    writer: W,
    root: N,
    value: V,
    children: F,
    order: Order,
) -> Result<(), TreewalkError>
where
    W: io::Write,
    V: Fn(&N) -> D,
    D: fmt::Display,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    match order {
        Order::PreOrder => write_tree(writer, root, value, children, preorder),
        Order::PostOrder => write_tree(writer, root, value, children, postorder),
        Order::LevelOrder => write_tree(writer, root, value, children, levelorder),
    }
}

/// [write_tree_ordered] to standard output
pub fn print_tree_ordered<N, V, D, F, I>(root: N, value: V, children: F, order: Order) -> Result<(), TreewalkError>
where
    V: Fn(&N) -> D,
    D: fmt::Display,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    write_tree_ordered(io::stdout().lock(), root, value, children, order)
}

/// Writes the values of a [TreeIterable] in the given order.
#[instrument(level = "debug", skip(writer, tree))]
pub fn write_iterable<W, T>(writer: W, tree: &T, order: Order) -> Result<(), TreewalkError>
where
    W: io::Write,
    T: TreeIterable + ?Sized,
{
    tree.write_values(order, writer)
}

/// [write_iterable] to standard output
pub fn print_iterable<T>(tree: &T, order: Order) -> Result<(), TreewalkError>
where
    T: TreeIterable + ?Sized,
{
    write_iterable(io::stdout().lock(), tree, order)
}
