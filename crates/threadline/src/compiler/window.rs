use super::budget::Budget;
use crate::models::message::ConversationMessage;

/// Select the `budget` most recent turns of a most-recent-first log, oldest first
///
/// Only the bounded slice is reversed; the rest of the log is never touched.
pub fn select_window(log: &[ConversationMessage], budget: Budget) -> Vec<&ConversationMessage> {
    let end = budget.get().min(log.len());
    log[..end].iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> Vec<ConversationMessage> {
        vec![
            ConversationMessage::assistant().with_text("3"),
            ConversationMessage::user().with_text("2"),
            ConversationMessage::assistant().with_text("1"),
        ]
    }

    fn texts(window: &[&ConversationMessage]) -> Vec<String> {
        window.iter().map(|m| m.content_as_text()).collect()
    }

    #[test]
    fn test_window_restores_chronological_order() {
        let log = log();
        assert_eq!(texts(&select_window(&log, Budget::new(3))), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_window_keeps_most_recent() {
        let log = log();
        assert_eq!(texts(&select_window(&log, Budget::new(2))), vec!["2", "3"]);
    }

    #[test]
    fn test_window_larger_than_log() {
        let log = log();
        assert_eq!(select_window(&log, Budget::new(50)).len(), 3);
    }

    #[test]
    fn test_zero_budget_and_empty_log() {
        let log = log();
        assert!(select_window(&log, Budget::new(0)).is_empty());
        assert!(select_window(&[], Budget::new(10)).is_empty());
    }
}
