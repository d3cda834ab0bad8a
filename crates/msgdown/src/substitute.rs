//! Literal tag substitutions applied before parsing.
//!
//! Bold, italic, and list items have Markdown equivalents that are pure
//! lexical replacements, so they are handled on the raw string and never
//! reach the tree renderer.

/// Replacement table, applied in order. Matches are literal substrings: a
/// tag spelled with attributes (e.g. `<strong class="x">`) does not match
/// and passes through to the parser unconverted. That is intentional; a
/// tag-aware substitution would change output for attributed tags.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("<strong>", "**"),
    ("</strong>", "**"),
    ("<em>", "*"),
    ("</em>", "*"),
    ("<li>", "- "),
    ("</li>", "\n"),
];

/// Replace simple HTML tags with their Markdown equivalents.
pub fn apply_substitutions(content: &str) -> String {
    let mut content = content.to_string();
    for (tag, markdown) in SUBSTITUTIONS {
        content = content.replace(tag, markdown);
    }
    content
}
