//! HTML parsing support.
//!
//! Parses HTML strings with `scraper` (html5ever) and converts the result to
//! the owned [`Node`] tree the renderer works on.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{Element, Node};

/// Parse an HTML fragment into an owned forest of top-level nodes.
///
/// html5ever is error-recovering, so malformed input is normalized rather
/// than rejected; this function does not fail.
pub fn parse_fragment(html: &str) -> Vec<Node> {
    let document = Html::parse_fragment(html);
    collect_children(document.root_element())
}

/// Convert the children of a scraper element to owned nodes.
fn collect_children(element: ElementRef) -> Vec<Node> {
    let mut nodes = Vec::new();

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                nodes.push(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    nodes.push(Node::Element(convert_element(child_element)));
                }
            }
            _ => {}
        }
    }

    nodes
}

fn convert_element(element: ElementRef) -> Element {
    let mut el = Element::new(element.value().name());
    for (name, value) in element.value().attrs() {
        el.set_attr(name, value);
    }
    el.children = collect_children(element);
    el
}
