//! Recursive node-to-Markdown renderer.
//!
//! Elements are dispatched through a fixed precedence: heading, inline code,
//! fenced code sample, generic container. The rule set is closed, so this is
//! a plain conditional chain rather than a rule registry.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{Element, Node};

/// Class token marking an element as a fenced code block.
const CODE_SAMPLE_CLASS: &str = "code-sample";

/// Language tag used when detection fails.
const DEFAULT_LANGUAGE: &str = "html";

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^h(\d+)$").unwrap());

/// Render one node of the parse tree to a Markdown fragment.
///
/// Text nodes pass through as their literal content, with no escaping of
/// Markdown-significant characters (a known limitation, preserved for
/// output fidelity with existing content).
pub fn render_node(node: &mut Node) -> String {
    match node {
        Node::Text(text) => text.clone(),
        Node::Element(el) => render_element(el),
    }
}

fn render_element(el: &mut Element) -> String {
    if let Some(level) = heading_level(&el.tag) {
        let content = render_children(el);
        return format!("{} {}", "#".repeat(level), content.trim());
    }

    if el.tag == "code" {
        let content = render_children(el);
        return format!("``{}``", content.trim());
    }

    if el.has_class(CODE_SAMPLE_CLASS) {
        return render_code_sample(el);
    }

    // Generic container: unwrapped, children only.
    let content = render_children(el);
    content.trim().to_string()
}

fn render_children(el: &mut Element) -> String {
    el.children.iter_mut().map(render_node).collect()
}

/// Render a `code-sample` element as a fenced code block.
///
/// The first descendant `code` element carrying no `class` attribute holds
/// line numbers or other decoration and is detached before the text is
/// extracted. The remaining subtree text is emitted verbatim, never
/// recursively formatted.
fn render_code_sample(el: &mut Element) -> String {
    el.remove_first(&|child: &Element| child.tag == "code" && child.attr("class").is_none());
    let language = detect_language(el);
    format!("```{}\n{}\n```", language, el.text_content().trim())
}

/// Determine the language tag for a code sample.
///
/// Reads the first class token of the first descendant `code` element and
/// takes the substring after the last `-`, so `language-python` yields
/// `python` (and `lang-foo-bar` yields `bar`). Detection is total: any
/// missing piece resolves to the default.
fn detect_language(el: &Element) -> String {
    let detected = el
        .find_first(&|child: &Element| child.tag == "code")
        .and_then(|code| code.attr("class"))
        .and_then(|class| class.split_whitespace().next())
        .and_then(|token| token.rsplit('-').next());

    match detected {
        Some(language) => language.to_string(),
        None => {
            trace!("no language class on code sample, defaulting to {DEFAULT_LANGUAGE}");
            DEFAULT_LANGUAGE.to_string()
        }
    }
}

fn heading_level(tag: &str) -> Option<usize> {
    HEADING_RE
        .captures(tag)
        .and_then(|caps| caps[1].parse().ok())
}
