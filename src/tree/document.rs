/*! Trees parsed from markup. Every element is a node, its `value` attribute is
the node's value and its child elements are the node's children. */

use crate::{TreeIterable, TreewalkError};
use roxmltree::Node;
use tracing::debug;
use tracing_attributes::instrument;

/// Attribute holding a node's value
pub const VALUE_ATTRIBUTE: &str = "value";

/// A parsed markup document. Borrows the markup it was parsed from.
#[derive(Debug)]
pub struct Document<'input>(roxmltree::Document<'input>);

impl<'input> Document<'input> {
    /// Parses `markup` and checks that every element carries a value attribute
    #[instrument(level = "debug", skip_all)]
    pub fn parse(markup: &'input str) -> Result<Self, TreewalkError> {
        let document = roxmltree::Document::parse(markup)?;

        let mut count = 0;
        for node in document.descendants().filter(Node::is_element) {
            if !node.has_attribute(VALUE_ATTRIBUTE) {
                let position = document.text_pos_at(node.range().start);
                return Err(TreewalkError::MissingAttribute {
                    attribute: VALUE_ATTRIBUTE,
                    element: node.tag_name().name().to_string(),
                    position: format!("{}:{}", position.row, position.col),
                });
            }
            count += 1;
        }
        debug!(elements = count, "Parsed markup document");

        Ok(Document(document))
    }

    /// The document's root element
    pub fn root(&self) -> Node<'_, 'input> {
        self.0.root_element()
    }
}

/// Value accessor.
///
/// Assumes a node of a [Document], whose elements all carry the value
/// attribute. Nodes of a document parsed by other means yield an empty value
/// when the attribute is missing.
pub fn value<'a>(node: &Node<'a, '_>) -> &'a str {
    node.attribute(VALUE_ATTRIBUTE).unwrap_or_default()
}

/// Children accessor. Text and comment nodes in between are skipped.
pub fn children<'a, 'input>(node: &Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

impl<'input> TreeIterable for Document<'input> {
    type Node<'a> = roxmltree::Node<'a, 'input> where Self: 'a;
    type Value = str;

    fn root(&self) -> Self::Node<'_> {
        self.0.root_element()
    }

    fn children<'a>(&'a self, node: &Self::Node<'a>) -> Vec<Self::Node<'a>> {
        children(node).collect()
    }

    fn value<'a>(&'a self, node: &Self::Node<'a>) -> &'a Self::Value {
        value(node)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{dummy, preorder};
    use itertools::Itertools;
    use test_log;

    #[test_log::test]
    fn test_parse() {
        let document = Document::parse(dummy::MARKUP).unwrap();
        let root = document.root();
        assert_eq!(value(&root), "1");
        assert_eq!(children(&root).map(|n| value(&n)).collect_vec(), &["2", "3"]);

        let values = preorder(root, children).map(|n| value(&n)).collect_vec();
        assert_eq!(values, &["1", "2", "4", "5", "3"]);
    }

    #[test]
    fn test_malformed_markup() {
        let result = Document::parse("<node value=\"1\"><node value=\"2\"></node>");
        assert!(matches!(result, Err(TreewalkError::Markup(_))));
    }

    #[test]
    fn test_missing_value() {
        let result = Document::parse("<node value=\"1\">\n  <leaf/>\n</node>");
        match result {
            Err(TreewalkError::MissingAttribute {
                attribute,
                element,
                position,
            }) => {
                assert_eq!(attribute, VALUE_ATTRIBUTE);
                assert_eq!(element, "leaf");
                assert_eq!(position, "2:3");
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_value_without_validation() {
        let unchecked = roxmltree::Document::parse("<node value=\"1\"><leaf/></node>").unwrap();
        let root = unchecked.root_element();
        assert_eq!(value(&root), "1");
        assert_eq!(children(&root).map(|n| value(&n)).collect_vec(), &[""]);
        assert!(Document::parse("<node value=\"1\"><leaf/></node>").is_err());
    }

    #[test]
    fn test_facade() {
        let document = Document::parse(dummy::MARKUP).unwrap();
        let values = document.postorder().map(|n| document.value(&n).to_string()).collect_vec();
        assert_eq!(values, &["4", "5", "2", "3", "1"]);
    }
}
