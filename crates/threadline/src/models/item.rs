//! Request items are the compiled output of a conversation log
//!
//! Parts are split by direction. Content flowing to the model uses the `input_*` kinds,
//! content the model produced earlier uses the `output_*` kinds, and the two vocabularies
//! never mix on one item. [`MessageItem`] can only be built through [`MessageItem::inbound`]
//! and [`MessageItem::outbound`], which also guarantee at least one part.
use super::role::{Direction, Role};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundPart {
    InputText { text: String },
    InputImage { image_url: String },
    InputFile { file_id: String },
}

impl InboundPart {
    pub fn text<S: Into<String>>(text: S) -> Self {
        InboundPart::InputText { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InboundPart::InputText { text } => Some(text.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundPart {
    OutputText { text: String },
}

impl OutboundPart {
    pub fn text<S: Into<String>>(text: S) -> Self {
        OutboundPart::OutputText { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            OutboundPart::OutputText { text } => text,
        }
    }
}

/// A mapped part, tagged with the direction it was mapped for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WirePart {
    Inbound(InboundPart),
    Outbound(OutboundPart),
}

impl WirePart {
    pub fn text<S: Into<String>>(direction: Direction, text: S) -> Self {
        match direction {
            Direction::Inbound => WirePart::Inbound(InboundPart::text(text)),
            Direction::Outbound => WirePart::Outbound(OutboundPart::text(text)),
        }
    }

    pub fn into_inbound(self) -> Option<InboundPart> {
        match self {
            WirePart::Inbound(part) => Some(part),
            WirePart::Outbound(_) => None,
        }
    }

    pub fn into_outbound(self) -> Option<OutboundPart> {
        match self {
            WirePart::Outbound(part) => Some(part),
            WirePart::Inbound(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageParts {
    Inbound(Vec<InboundPart>),
    Outbound(Vec<OutboundPart>),
}

impl MessageParts {
    pub fn len(&self) -> usize {
        match self {
            MessageParts::Inbound(parts) => parts.len(),
            MessageParts::Outbound(parts) => parts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_inbound(&self) -> Option<&[InboundPart]> {
        match self {
            MessageParts::Inbound(parts) => Some(parts.as_slice()),
            MessageParts::Outbound(_) => None,
        }
    }

    pub fn as_outbound(&self) -> Option<&[OutboundPart]> {
        match self {
            MessageParts::Outbound(parts) => Some(parts.as_slice()),
            MessageParts::Inbound(_) => None,
        }
    }
}

/// Roles whose messages carry inbound parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundRole {
    User,
    Developer,
    System,
}

impl From<InboundRole> for Role {
    fn from(role: InboundRole) -> Self {
        match role {
            InboundRole::User => Role::User,
            InboundRole::Developer => Role::Developer,
            InboundRole::System => Role::System,
        }
    }
}

impl TryFrom<Role> for InboundRole {
    type Error = Role;

    fn try_from(role: Role) -> Result<Self, Self::Error> {
        match role {
            Role::User => Ok(InboundRole::User),
            Role::Developer => Ok(InboundRole::Developer),
            Role::System => Ok(InboundRole::System),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageItem {
    role: Role,
    content: MessageParts,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Value>,
}

impl MessageItem {
    /// A user, developer or system message; an empty part list becomes one empty text part
    pub fn inbound(role: InboundRole, mut parts: Vec<InboundPart>) -> Self {
        if parts.is_empty() {
            parts.push(InboundPart::text(""));
        }
        MessageItem {
            role: role.into(),
            content: MessageParts::Inbound(parts),
            tool_calls: None,
        }
    }

    /// An assistant message; an empty part list becomes one empty text part
    pub fn outbound(mut parts: Vec<OutboundPart>, tool_calls: Option<Value>) -> Self {
        if parts.is_empty() {
            parts.push(OutboundPart::text(""));
        }
        MessageItem {
            role: Role::Assistant,
            content: MessageParts::Outbound(parts),
            tool_calls,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &MessageParts {
        &self.content
    }

    pub fn tool_calls(&self) -> Option<&Value> {
        self.tool_calls.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutput {
    pub call_id: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One entry of the compiled request
pub enum RequestItem {
    Message(MessageItem),
    #[serde(rename = "function_call_output")]
    ToolOutput(ToolOutput),
}

impl RequestItem {
    pub fn as_message(&self) -> Option<&MessageItem> {
        match self {
            RequestItem::Message(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_tool_output(&self) -> Option<&ToolOutput> {
        match self {
            RequestItem::ToolOutput(output) => Some(output),
            _ => None,
        }
    }
}

impl From<MessageItem> for RequestItem {
    fn from(message: MessageItem) -> Self {
        RequestItem::Message(message)
    }
}

impl From<ToolOutput> for RequestItem {
    fn from(output: ToolOutput) -> Self {
        RequestItem::ToolOutput(output)
    }
}
