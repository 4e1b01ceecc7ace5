use super::content::ContentPart;
use super::role::Role;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// The body of a turn: either plain text or an ordered list of parts, never both
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Parts(Vec::new())
    }
}

impl MessageContent {
    /// Render the content as text, serializing structured content to JSON
    pub fn to_text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => serde_json::to_string(parts).unwrap_or_default(),
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<Vec<ContentPart>> for MessageContent {
    fn from(parts: Vec<ContentPart>) -> Self {
        MessageContent::Parts(parts)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One logical turn of a conversation, as stored by the application
pub struct ConversationMessage {
    pub role: Role,
    #[serde(default)]
    pub content: MessageContent,
    /// Assigned when the turn was created locally; only used for recency matching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// Provider-defined call descriptors, echoed back verbatim when supported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Value>,
}

impl ConversationMessage {
    pub fn new<C: Into<MessageContent>>(role: Role, content: C) -> Self {
        ConversationMessage {
            role,
            content: content.into(),
            local_id: None,
            tool_call_id: None,
            tool_calls: None,
        }
    }

    /// Create a new user message with no content
    pub fn user() -> Self {
        Self::new(Role::User, MessageContent::default())
    }

    /// Create a new assistant message with no content
    pub fn assistant() -> Self {
        Self::new(Role::Assistant, MessageContent::default())
    }

    pub fn system() -> Self {
        Self::new(Role::System, MessageContent::default())
    }

    pub fn developer() -> Self {
        Self::new(Role::Developer, MessageContent::default())
    }

    /// Create a tool result message answering the given call
    pub fn tool<S: Into<String>>(tool_call_id: S) -> Self {
        Self::new(Role::Tool, MessageContent::default()).with_tool_call_id(tool_call_id)
    }

    /// Replace the content with plain text
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.content = MessageContent::Text(text.into());
        self
    }

    /// Append a content part; plain text content is first turned into a text part
    pub fn with_part(mut self, part: ContentPart) -> Self {
        match &mut self.content {
            MessageContent::Parts(parts) => parts.push(part),
            MessageContent::Text(text) => {
                let text = std::mem::take(text);
                self.content = MessageContent::Parts(vec![ContentPart::text(text), part]);
            }
        }
        self
    }

    pub fn with_text_part<S: Into<String>>(self, text: S) -> Self {
        self.with_part(ContentPart::text(text))
    }

    pub fn with_image<S: Into<String>>(self, uri: S) -> Self {
        self.with_part(ContentPart::image(uri))
    }

    pub fn with_file<S: Into<String>>(self, file_id: S) -> Self {
        self.with_part(ContentPart::file(file_id))
    }

    pub fn with_generated_image(self) -> Self {
        self.with_part(ContentPart::generated_image())
    }

    pub fn with_local_id<S: Into<String>>(mut self, local_id: S) -> Self {
        self.local_id = Some(local_id.into());
        self
    }

    pub fn with_tool_call_id<S: Into<String>>(mut self, tool_call_id: S) -> Self {
        self.tool_call_id = Some(tool_call_id.into());
        self
    }

    pub fn with_tool_calls(mut self, tool_calls: Value) -> Self {
        self.tool_calls = Some(tool_calls);
        self
    }

    /// The content rendered as text, see [`MessageContent::to_text`]
    pub fn content_as_text(&self) -> String {
        self.content.to_text()
    }

    /// True when this turn carries the given local id
    pub fn has_local_id(&self, id: &str) -> bool {
        self.local_id.as_deref() == Some(id)
    }
}
