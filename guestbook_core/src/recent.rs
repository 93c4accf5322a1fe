use crate::api::GuestbookBoard;
use crate::record::{HugRecord, MessageRecord, Record};

pub const RECENT_HUGS: usize = 5;
pub const RECENT_MESSAGES: usize = 3;

/// The last `count` items, most recent first.
pub fn recent<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    let start = items.len().saturating_sub(count);
    items[start..].iter().rev().cloned().collect()
}

/// Board for the two full logs, both oldest first.
pub fn build_board(hugs: &[Record], messages: &[Record]) -> GuestbookBoard {
    GuestbookBoard {
        total_hugs: hugs.len(),
        recent_hugs: recent(hugs, RECENT_HUGS)
            .into_iter()
            .map(HugRecord::from)
            .collect(),
        recent_messages: recent(messages, RECENT_MESSAGES)
            .into_iter()
            .map(MessageRecord::from)
            .collect(),
        degraded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(prefix: &str, count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| Record::new(format!("2025-06-21 09:{:02}", i), format!("{}{}", prefix, i)))
            .collect()
    }

    #[test]
    fn test_recent_takes_suffix_in_reverse() {
        assert_eq!(recent(&[1, 2, 3, 4], 2), vec![4, 3]);
        assert_eq!(recent(&[1, 2], 5), vec![2, 1]);
        assert!(recent::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn test_eighth_hug_leads_the_recent_view() {
        let mut hugs = rows("hug", 7);
        hugs.push(Record::new("2025-06-21 10:00", "hug8"));
        let board = build_board(&hugs, &[]);

        assert_eq!(board.total_hugs, 8);
        let names: Vec<_> = board.recent_hugs.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["hug8", "hug7", "hug6", "hug5", "hug4"]);
    }

    #[test]
    fn test_only_three_messages_are_shown() {
        let board = build_board(&[], &rows("msg", 4));
        let texts: Vec<_> = board.recent_messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["msg4", "msg3", "msg2"]);
        assert_eq!(board.total_hugs, 0);
        assert!(!board.degraded);
    }
}
