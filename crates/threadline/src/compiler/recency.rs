use crate::models::message::ConversationMessage;
use crate::models::role::Role;

/// Local id of the newest user turn in the full, unwindowed log
///
/// Only that turn may carry real images. If the newest user turn has no local id, no turn
/// qualifies; older user turns are never promoted.
pub fn find_latest_user_id(log: &[ConversationMessage]) -> Option<&str> {
    log.iter()
        .find(|message| message.role == Role::User)
        .and_then(|message| message.local_id.as_deref())
}
