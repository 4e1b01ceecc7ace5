use serde::{Deserialize, Serialize};

/// The author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Developer,
    Tool,
}

/// Which side of the wire vocabulary a role's content parts are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Content sent to the model (`input_*` parts)
    Inbound,
    /// Content previously produced by the model (`output_*` parts)
    Outbound,
}

impl Role {
    /// Tool turns are not messages on the wire, so they have no direction.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Role::User | Role::Developer | Role::System => Some(Direction::Inbound),
            Role::Assistant => Some(Direction::Outbound),
            Role::Tool => None,
        }
    }
}
