//! Lookups on the metadata element tree that fail with a precise error.

use roxmltree::Node;

use crate::movie::common::error::{MovieError, Result};

/// First direct child element named `name`.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.has_tag_name(name))
}

pub(crate) fn required_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Result<Node<'a, 'input>> {
    child(node, name).ok_or_else(|| MovieError::MissingElement(name.to_string()))
}

/// All direct child elements named `name`, in document order.
pub(crate) fn children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// Trimmed text content, empty when the element has none.
pub(crate) fn text<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().map(str::trim).unwrap_or("")
}

/// Text of the required child `name`.
pub(crate) fn required_text<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    required_child(node, name).map(text)
}

/// Untrimmed text of the required child `name`, for enumerated values
/// that must match exactly.
pub(crate) fn required_literal<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    required_child(node, name).map(|n| n.text().unwrap_or(""))
}

/// Text of the optional child `name`, `None` when absent or empty.
pub(crate) fn optional_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name)
        .map(text)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Attribute `attribute` of `node`; `element` names the node in the error.
pub(crate) fn required_attribute<'a>(node: Node<'a, '_>, attribute: &str, element: &str) -> Result<&'a str> {
    node.attribute(attribute)
        .ok_or_else(|| MovieError::MissingAttribute {
            attribute: attribute.to_string(),
            element: element.to_string(),
        })
}
