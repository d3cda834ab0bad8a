//! Conversation transcript model.
//!
//! Mirrors the JSON the capture side produces: an ordered array of
//! `{role, content}` records where `content` is the inner HTML of the
//! message container. Role names on the wire are `system`, `User`, and
//! `Assistant`; lowercase spellings are accepted on input.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "system", alias = "System")]
    System,
    #[serde(rename = "User", alias = "user")]
    User,
    #[serde(rename = "Assistant", alias = "assistant")]
    Assistant,
}

impl Role {
    /// Display label for Markdown output.
    pub fn label(&self) -> &'static str {
        match self {
            Role::System => "System",
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One captured message: its role and its raw inner HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }

    /// Convert this message's HTML content to Markdown.
    #[cfg(feature = "html")]
    pub fn to_markdown(&self) -> String {
        crate::convert_message_html(&self.content)
    }
}

/// An ordered conversation transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thread {
    pub messages: Vec<Message>,
}

impl Thread {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Parse a transcript from the capture side's JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the transcript back to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the whole transcript as Markdown, each message under a
    /// role heading, in capture order.
    #[cfg(feature = "html")]
    pub fn to_markdown(&self) -> String {
        self.messages
            .iter()
            .map(|message| format!("## {}\n\n{}", message.role.label(), message.to_markdown()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"role": "system", "content": "You are helpful."},
            {"role": "User", "content": "<p>hi</p>"},
            {"role": "Assistant", "content": "<h2>Answer</h2>"}
        ]"#;
        let thread = Thread::from_json(json).unwrap();
        assert_eq!(thread.messages.len(), 3);
        assert_eq!(thread.messages[0].role, Role::System);
        assert_eq!(thread.messages[1].role, Role::User);
        assert_eq!(thread.messages[2].content, "<h2>Answer</h2>");
    }

    #[test]
    fn test_from_json_accepts_lowercase_roles() {
        let json = r#"[{"role": "assistant", "content": "x"}]"#;
        let thread = Thread::from_json(json).unwrap();
        assert_eq!(thread.messages[0].role, Role::Assistant);
    }

    #[test]
    fn test_from_json_rejects_unknown_role() {
        let json = r#"[{"role": "moderator", "content": "x"}]"#;
        assert!(Thread::from_json(json).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let thread = Thread::new(vec![Message::new(Role::User, "<p>hi</p>")]);
        let json = thread.to_json().unwrap();
        assert_eq!(Thread::from_json(&json).unwrap(), thread);
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_message_to_markdown() {
        let message = Message::new(Role::Assistant, "<h2>Answer</h2>");
        assert_eq!(message.to_markdown(), "## Answer");
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_thread_to_markdown() {
        let thread = Thread::new(vec![
            Message::new(Role::User, "<p>what is <code>fmt</code>?</p>"),
            Message::new(Role::Assistant, "<strong>a module</strong>"),
        ]);
        assert_eq!(
            thread.to_markdown(),
            "## User\n\nwhat is ``fmt``?\n\n## Assistant\n\n**a module**"
        );
    }
}
