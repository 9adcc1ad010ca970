use std::collections::HashSet;

use itertools::Itertools;
use proptest::prelude::*;
use treewalk::{
    levelorder, postorder, preorder,
    tree::pair::{self, Pair},
};

fn arb_tree() -> impl Strategy<Value = Pair<u8>> {
    let leaf = any::<u8>().prop_map(Pair::leaf);
    leaf.prop_recursive(6, 128, 6, |inner| {
        (any::<u8>(), prop::collection::vec(inner, 0..6)).prop_map(|(value, children)| Pair(value, children))
    })
}

fn size(tree: &Pair<u8>) -> usize {
    1 + tree.1.iter().map(size).sum::<usize>()
}

fn depth_of(tree: &Pair<u8>, target: &Pair<u8>) -> Option<usize> {
    if std::ptr::eq(tree, target) {
        return Some(0);
    }
    tree.1.iter().find_map(|child| depth_of(child, target)).map(|depth| depth + 1)
}

/// Same tree with the children of every node in reverse order
fn mirrored(tree: &Pair<u8>) -> Pair<u8> {
    Pair(tree.0, tree.1.iter().rev().map(mirrored).collect())
}

fn assert_visits_once<'a>(nodes: impl Iterator<Item = &'a Pair<u8>>, expected: usize) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for node in nodes {
        prop_assert!(seen.insert(node as *const Pair<u8>), "node visited twice");
    }
    prop_assert_eq!(seen.len(), expected);
    Ok(())
}

proptest! {
    #[test]
    fn every_node_visited_once(tree in arb_tree()) {
        let n = size(&tree);
        assert_visits_once(preorder(&tree, pair::children), n)?;
        assert_visits_once(postorder(&tree, pair::children), n)?;
        assert_visits_once(levelorder(&tree, pair::children), n)?;
    }

    #[test]
    fn root_position(tree in arb_tree()) {
        let root: *const Pair<u8> = &tree;
        prop_assert!(std::ptr::eq(preorder(&tree, pair::children).next().unwrap(), root));
        prop_assert!(std::ptr::eq(levelorder(&tree, pair::children).next().unwrap(), root));
        prop_assert!(std::ptr::eq(postorder(&tree, pair::children).last().unwrap(), root));
    }

    #[test]
    fn level_order_depths_non_decreasing(tree in arb_tree()) {
        let depths = levelorder(&tree, pair::children)
            .map(|node| depth_of(&tree, node).unwrap())
            .collect_vec();
        prop_assert_eq!(depths[0], 0);
        prop_assert!(depths.iter().tuple_windows().all(|(a, b)| a <= b));
    }

    #[test]
    fn postorder_reverses_mirrored_preorder(tree in arb_tree()) {
        let mirror = mirrored(&tree);
        let mut expected = preorder(&mirror, pair::children).map(|n| n.0).collect_vec();
        expected.reverse();
        prop_assert_eq!(postorder(&tree, pair::children).map(|n| n.0).collect_vec(), expected);
    }
}
