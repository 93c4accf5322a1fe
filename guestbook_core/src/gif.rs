use std::sync::OnceLock;

use regex::Regex;

/// Position in the ordered gif sequence. Wraps to 0 after the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GifCursor {
    index: usize,
}

impl GifCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Frame to show out of `total`. An index left over from a longer listing
    /// wraps back into range.
    pub fn current(&self, total: usize) -> Option<usize> {
        if total == 0 {
            None
        } else {
            Some(self.index % total)
        }
    }

    pub fn advance(&mut self, total: usize) -> Option<usize> {
        if total == 0 {
            return None;
        }
        self.index = (self.index % total + 1) % total;
        Some(self.index)
    }
}

fn digits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+").expect("static pattern"))
}

/// First run of digits in `file_name` without leading zeros. "0" when there
/// is none.
fn sequence_digits(file_name: &str) -> &str {
    digits_pattern()
        .find(file_name)
        .map(|m| m.as_str().trim_start_matches('0'))
        .filter(|digits| !digits.is_empty())
        .unwrap_or("0")
}

/// First run of digits in a file name, 0 when there is none. Saturates at
/// `u64::MAX` for longer runs.
pub fn sequence_number(file_name: &str) -> u64 {
    sequence_digits(file_name).parse().unwrap_or(u64::MAX)
}

/// Orders `gif2.gif` before `gif10.gif`. Ties fall back to the name.
pub fn sort_by_sequence(files: &mut [String]) {
    // Compare digit runs by length then text so any number of digits orders exactly.
    files.sort_by(|a, b| {
        let (da, db) = (sequence_digits(a), sequence_digits(b));
        da.len()
            .cmp(&db.len())
            .then_with(|| da.cmp(db))
            .then_with(|| a.cmp(b))
    });
}
