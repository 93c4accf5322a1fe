//! Submission decisions for hugs and messages.
//!
//! These only decide; writing the accepted record to the store is the
//! caller's job.

use crate::session::SessionContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HugDecision {
    /// Empty name, nothing happens.
    Ignored,
    /// The name already sent a hug in this session.
    Duplicate,
    /// The name was recorded in the session and should be appended.
    Accepted { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageDecision {
    Ignored,
    Accepted { text: String },
}

/// Surrounding whitespace is not part of the name. An accepted name is added
/// to the session's dedup set before the caller writes it.
pub fn decide_hug(session: &mut SessionContext, raw_name: &str) -> HugDecision {
    let name = raw_name.trim();
    if name.is_empty() {
        return HugDecision::Ignored;
    }
    if !session.dedup.insert(name) {
        return HugDecision::Duplicate;
    }
    HugDecision::Accepted {
        name: name.to_string(),
    }
}

/// Messages are never deduplicated.
pub fn decide_message(raw_text: &str) -> MessageDecision {
    let text = raw_text.trim();
    if text.is_empty() {
        MessageDecision::Ignored
    } else {
        MessageDecision::Accepted {
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_hug_with_same_name_is_duplicate() {
        let mut session = SessionContext::new();
        assert_eq!(
            decide_hug(&mut session, "Jin"),
            HugDecision::Accepted { name: "Jin".to_string() }
        );
        assert_eq!(decide_hug(&mut session, "Jin"), HugDecision::Duplicate);
        assert_eq!(decide_hug(&mut session, "  Jin "), HugDecision::Duplicate);
    }

    #[test]
    fn test_empty_name_is_ignored_and_not_remembered() {
        let mut session = SessionContext::new();
        assert_eq!(decide_hug(&mut session, ""), HugDecision::Ignored);
        assert_eq!(decide_hug(&mut session, "   "), HugDecision::Ignored);
        assert_eq!(decide_hug(&mut session, ""), HugDecision::Ignored);
        assert!(session.dedup.is_empty());
    }

    #[test]
    fn test_different_names_are_all_accepted() {
        let mut session = SessionContext::new();
        for name in ["RM", "Jin", "SUGA", "j-hope", "Jimin", "V", "Jung Kook"] {
            assert!(matches!(
                decide_hug(&mut session, name),
                HugDecision::Accepted { .. }
            ));
        }
        assert_eq!(session.dedup.len(), 7);
    }

    #[test]
    fn test_same_name_in_new_session_is_accepted() {
        let mut first = SessionContext::new();
        let mut second = SessionContext::new();
        decide_hug(&mut first, "ARMY");
        assert!(matches!(
            decide_hug(&mut second, "ARMY"),
            HugDecision::Accepted { .. }
        ));
    }

    #[test]
    fn test_repeated_messages_are_always_accepted() {
        for _ in 0..3 {
            assert_eq!(
                decide_message("welcome back!"),
                MessageDecision::Accepted { text: "welcome back!".to_string() }
            );
        }
    }

    #[test]
    fn test_empty_message_is_ignored() {
        assert_eq!(decide_message(""), MessageDecision::Ignored);
        assert_eq!(decide_message("\n\t "), MessageDecision::Ignored);
    }
}
