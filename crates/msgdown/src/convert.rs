//! Top-level orchestration: message HTML string in, Markdown string out.

use log::debug;

use crate::node::Node;
use crate::render::render_node;
use crate::{html, substitute};

/// Convert the inner HTML of a message content container to Markdown.
///
/// Applies the literal tag substitutions, parses the result into an owned
/// node forest, renders each top-level node, and joins the fragments with
/// newlines in document order.
///
/// The conversion is purely functional over its input and never fails:
/// the fragment parser normalizes malformed input, unknown tags render as
/// transparent containers, and language detection falls back to a default.
///
/// # Example
///
/// ```rust
/// let markdown = msgdown::convert_message_html("<h2>Title</h2>");
/// assert_eq!(markdown, "## Title");
/// ```
pub fn convert_message_html(content: &str) -> String {
    let substituted = substitute::apply_substitutions(content);
    let mut roots = html::parse_fragment(&substituted);

    debug!(
        "converting message fragment: {} bytes, {} top-level nodes",
        content.len(),
        roots.len()
    );

    let fragments: Vec<String> = roots
        .iter_mut()
        .map(|node| match node {
            // Top-level text trims like every element rule does, so a
            // plain-text message renders as its trimmed content.
            Node::Text(text) => text.trim().to_string(),
            element => render_node(element),
        })
        .collect();

    fragments.join("\n")
}
