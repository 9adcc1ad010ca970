/*! Sample trees used by the demo binary and for testing.

All of them encode the same shape:

```text
    1
   / \
  2   3
 / \
4   5
```
*/

use crate::tree::{linked::LinkedNode, pair::Pair};

/// The sample tree as markup
pub const MARKUP: &str = r#"
<node value="1">
    <node value="2">
        <node value="4"/>
        <node value="5"/>
    </node>
    <node value="3"/>
</node>
"#;

/// The sample tree as nested pairs
pub fn pair_tree() -> Pair<i32> {
    Pair(1, vec![Pair(2, vec![Pair::leaf(4), Pair::leaf(5)]), Pair::leaf(3)])
}

/// The sample tree as first-child/next-sibling links
pub fn linked_tree() -> LinkedNode<i32> {
    let node3 = LinkedNode::leaf(3);
    let node5 = LinkedNode::leaf(5);
    let node4 = LinkedNode::new(4, None, Some(node5));
    let node2 = LinkedNode::new(2, Some(node4), Some(node3));
    LinkedNode::new(1, Some(node2), None)
}
