use tracing::{debug, warn};

use super::ids::CallIdGenerator;
use crate::models::content::ContentPart;
use crate::models::item::{
    InboundPart, InboundRole, MessageItem, OutboundPart, RequestItem, ToolOutput, WirePart,
};
use crate::models::message::{ConversationMessage, MessageContent};
use crate::models::role::{Direction, Role};

pub const USER_IMAGE_PLACEHOLDER: &str = "[User previously sent an image]";
pub const GENERATED_IMAGE_PLACEHOLDER: &str = "[Assistant previously generated an image]";

/// Convert a chronological window into request items, at most one item per turn
pub fn map_items(
    window: &[&ConversationMessage],
    latest_user_id: Option<&str>,
    supports_tool_echo: bool,
    call_ids: &dyn CallIdGenerator,
) -> Vec<RequestItem> {
    window
        .iter()
        .map(|message| map_message(message, latest_user_id, supports_tool_echo, call_ids))
        .collect()
}

fn map_message(
    message: &ConversationMessage,
    latest_user_id: Option<&str>,
    supports_tool_echo: bool,
    call_ids: &dyn CallIdGenerator,
) -> RequestItem {
    let Some(direction) = message.role.direction() else {
        return map_tool_message(message, call_ids);
    };

    let is_latest_user = latest_user_id.is_some_and(|id| message.has_local_id(id));
    let parts: Vec<WirePart> = match &message.content {
        _ if message.role == Role::System => {
            vec![WirePart::text(direction, message.content_as_text())]
        }
        MessageContent::Text(text) => vec![WirePart::text(direction, text.as_str())],
        MessageContent::Parts(parts) => parts
            .iter()
            .filter_map(|part| map_part(part, direction, is_latest_user))
            .collect(),
    };

    match InboundRole::try_from(message.role) {
        Ok(role) => MessageItem::inbound(
            role,
            parts.into_iter().filter_map(WirePart::into_inbound).collect(),
        ),
        Err(_) => {
            let tool_calls = message
                .tool_calls
                .as_ref()
                .filter(|_| supports_tool_echo)
                .cloned();
            MessageItem::outbound(
                parts.into_iter().filter_map(WirePart::into_outbound).collect(),
                tool_calls,
            )
        }
    }
    .into()
}

fn map_tool_message(message: &ConversationMessage, call_ids: &dyn CallIdGenerator) -> RequestItem {
    let call_id = match message.tool_call_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let id = call_ids.next_id();
            warn!(call_id = %id, "tool result without a call id, synthesized one");
            id
        }
    };
    ToolOutput {
        call_id,
        output: message.content_as_text(),
    }
    .into()
}

/// Map one content part into the vocabulary of `direction`, or drop it
///
/// Only the newest user turn resends its images; older ones leave a placeholder behind.
/// Assistant turns keep text and mark generated images, everything else they carried is dropped.
pub fn map_part(
    part: &ContentPart,
    direction: Direction,
    is_latest_user: bool,
) -> Option<WirePart> {
    match (part, direction) {
        (ContentPart::Text(_), _) => part.as_text().map(|text| WirePart::text(direction, text)),
        (ContentPart::Image(_), Direction::Inbound) => match part.image_uri() {
            Some(uri) if is_latest_user => Some(WirePart::Inbound(InboundPart::InputImage {
                image_url: uri.to_string(),
            })),
            Some(_) => Some(WirePart::text(direction, USER_IMAGE_PLACEHOLDER)),
            None => {
                debug!("dropping image part without a uri");
                None
            }
        },
        (ContentPart::File(_), Direction::Inbound) => match part.file_id() {
            Some(file_id) => Some(WirePart::Inbound(InboundPart::InputFile {
                file_id: file_id.to_string(),
            })),
            None => {
                debug!("dropping file part without a file id");
                None
            }
        },
        (ContentPart::GeneratedImage, Direction::Outbound) => {
            Some(WirePart::Outbound(OutboundPart::text(GENERATED_IMAGE_PLACEHOLDER)))
        }
        (ContentPart::GeneratedImage, Direction::Inbound) => None,
        (ContentPart::Image(_) | ContentPart::File(_), Direction::Outbound) => None,
        (ContentPart::Unknown, _) => {
            debug!("dropping unrecognized content part");
            None
        }
    }
}
