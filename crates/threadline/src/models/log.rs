use super::message::ConversationMessage;
use serde::{Deserialize, Serialize};

/// Append-only record of a conversation
///
/// Turns are kept in the order they were appended, so pushing is cheap. Readers get
/// the most-recent-first view through [`ConversationLog::snapshot`], which copies the
/// entries out: a compile working on a snapshot never observes later appends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationLog {
    entries: Vec<ConversationMessage>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ConversationMessage) {
        self.entries.push(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate from the newest turn to the oldest
    pub fn iter_most_recent_first(&self) -> impl Iterator<Item = &ConversationMessage> {
        self.entries.iter().rev()
    }

    /// Owned most-recent-first copy of the log
    pub fn snapshot(&self) -> Vec<ConversationMessage> {
        self.iter_most_recent_first().cloned().collect()
    }
}

impl FromIterator<ConversationMessage> for ConversationLog {
    fn from_iter<T: IntoIterator<Item = ConversationMessage>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_most_recent_first() {
        let mut log = ConversationLog::new();
        log.push(ConversationMessage::user().with_text("1"));
        log.push(ConversationMessage::assistant().with_text("2"));

        let snapshot = log.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].content_as_text(), "2");
        assert_eq!(snapshot[1].content_as_text(), "1");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut log: ConversationLog = vec![ConversationMessage::user().with_text("1")]
            .into_iter()
            .collect();
        let snapshot = log.snapshot();
        log.push(ConversationMessage::assistant().with_text("2"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_iter_most_recent_first() {
        let mut log = ConversationLog::new();
        assert!(log.is_empty());
        log.push(ConversationMessage::user().with_text("1"));
        log.push(ConversationMessage::assistant().with_text("2"));

        let texts: Vec<String> = log
            .iter_most_recent_first()
            .map(|m| m.content_as_text())
            .collect();
        assert_eq!(texts, vec!["2", "1"]);
        assert!(!log.is_empty());
    }
}
