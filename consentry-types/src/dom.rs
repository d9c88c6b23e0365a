//! Typed DOM tree.
//!
//! The renderer builds banner markup as a tree of [`Node`]s instead of
//! interpolated HTML strings; the host embedding materializes the tree
//! into real elements. Attribute order is preserved so output is
//! deterministic.

use serde::{Deserialize, Serialize};

/// One node of a rendered subtree: an element or a text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    /// Creates an empty element with the given tag.
    #[must_use]
    pub fn elem(tag: &str) -> Self {
        Node::Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a text node.
    #[must_use]
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Sets an attribute, replacing any existing value. No-op on text nodes.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            if let Some(slot) = attrs.iter_mut().find(|(n, _)| n == name) {
                slot.1 = value.to_string();
            } else {
                attrs.push((name.to_string(), value.to_string()));
            }
        }
        self
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Appends to the `class` attribute (space-separated).
    #[must_use]
    pub fn class(self, class: &str) -> Self {
        let joined = match self.get_attr("class") {
            Some(existing) => format!("{existing} {class}"),
            None => class.to_string(),
        };
        self.attr("class", &joined)
    }

    /// Sets a boolean attribute (`checked`, `disabled`, ...).
    #[must_use]
    pub fn flag(self, name: &str) -> Self {
        self.attr(name, "")
    }

    /// Appends a child node. No-op on text nodes.
    #[must_use]
    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Appends a child only when `condition` holds.
    #[must_use]
    pub fn child_if(self, condition: bool, node: Node) -> Self {
        if condition { self.child(node) } else { self }
    }

    /// Appends an optional child.
    #[must_use]
    pub fn maybe_child(self, node: Option<Node>) -> Self {
        match node {
            Some(n) => self.child(n),
            None => self,
        }
    }

    /// Returns an attribute value, if this is an element carrying it.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            Node::Text(_) => None,
        }
    }

    /// The element tag, if this is an element.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag.as_str()),
            Node::Text(_) => None,
        }
    }

    /// Depth-first search for the element with the given id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.find(&mut |n| n.get_attr("id") == Some(id))
    }

    /// Depth-first search for the first node matching the predicate.
    pub fn find(&self, pred: &mut impl FnMut(&Node) -> bool) -> Option<&Node> {
        if pred(self) {
            return Some(self);
        }
        if let Node::Element { children, .. } = self {
            for child in children {
                if let Some(found) = child.find(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Counts nodes in the subtree matching the predicate.
    pub fn count(&self, pred: &mut impl FnMut(&Node) -> bool) -> usize {
        let mut total = usize::from(pred(self));
        if let Node::Element { children, .. } = self {
            for child in children {
                total += child.count(pred);
            }
        }
        total
    }

    /// Concatenated text content of the subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element { children, .. } => {
                children.iter().map(Node::text_content).collect()
            }
        }
    }
}
