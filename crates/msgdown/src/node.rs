//! Owned DOM node model for message HTML fragments.
//!
//! Every conversion parses into its own tree, so the one mutation the
//! renderer performs ([`Element::remove_first`]) never touches shared state.

use indexmap::IndexMap;

/// One unit of the parsed HTML tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element: tag name, attributes, ordered children.
    Element(Element),
    /// A text run.
    Text(String),
}

/// An element node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Lowercase tag name (as produced by the parser).
    pub tag: String,
    /// Attributes in document order.
    pub attrs: IndexMap<String, String>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Check if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get all text content from this node and descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.text_content(),
        }
    }
}

impl Element {
    /// Create a new element with no attributes or children.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Iterate the whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    /// Check if the class token set contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add a child node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Get all text content from this element's subtree, concatenated in
    /// document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Find the first descendant element matching `pred`, preorder, any depth.
    pub fn find_first<F>(&self, pred: &F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        for child in &self.children {
            if let Node::Element(el) = child {
                if pred(el) {
                    return Some(el);
                }
                if let Some(found) = el.find_first(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Detach the first descendant element matching `pred`, preorder, any
    /// depth. Returns whether a node was removed.
    pub fn remove_first<F>(&mut self, pred: &F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        for i in 0..self.children.len() {
            if let Node::Element(el) = &self.children[i] {
                if pred(el) {
                    self.children.remove(i);
                    return true;
                }
            }
            if let Node::Element(el) = &mut self.children[i] {
                if el.remove_first(pred) {
                    return true;
                }
            }
        }
        false
    }
}
