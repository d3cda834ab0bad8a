//! # msgdown
//!
//! Convert chat message HTML fragments to Markdown.
//!
//! The input is the inner HTML of a message content container as a chat or
//! forum web UI renders it. The output is the equivalent Markdown, suitable
//! for archiving, re-rendering, or feeding into a text-based pipeline.
//!
//! ## Design
//!
//! Conversion runs in two layers:
//!
//! - A literal substitution pass over the raw string for tags whose Markdown
//!   equivalent needs no tree context (bold, italic, list items).
//! - A recursive tree renderer over the parsed fragment for everything that
//!   does: headings, inline code, fenced code samples with language
//!   detection, and generic containers.
//!
//! The covered construct set is deliberately narrow. Tables, images, links,
//! blockquotes, and nested list indentation are out of scope; elements with
//! no rule render transparently as their children.
//!
//! ## Example
//!
//! ```rust
//! let markdown = msgdown::convert_message_html(
//!     "<h2>Usage</h2><p>call <code>run()</code></p>",
//! );
//! assert_eq!(markdown, "## Usage\ncall ``run()``");
//! ```
//!
//! ## Transcripts
//!
//! The capture side ships whole conversations as JSON arrays of
//! `{role, content}` records; [`Thread`] models those and renders them to
//! a single Markdown document.
//!
//! ```rust
//! use msgdown::Thread;
//!
//! let thread = Thread::from_json(
//!     r#"[{"role": "User", "content": "<p>hi</p>"}]"#,
//! ).unwrap();
//! assert_eq!(thread.to_markdown(), "## User\n\nhi");
//! ```

#[cfg(feature = "html")]
mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod render;
mod substitute;
pub mod thread;

#[cfg(feature = "html")]
pub use convert::convert_message_html;
#[cfg(feature = "html")]
pub use html::parse_fragment;
pub use node::{Element, Node};
pub use render::render_node;
pub use substitute::apply_substitutions;
pub use thread::{Message, Role, Thread};

/// Error type for msgdown operations
#[derive(Debug, thiserror::Error)]
pub enum MsgdownError {
    #[error("invalid transcript: {0}")]
    Transcript(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MsgdownError>;
