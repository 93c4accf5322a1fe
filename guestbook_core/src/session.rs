use std::collections::HashSet;

use crate::gif::GifCursor;

/// Names that already sent a hug during one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDedupSet {
    names: HashSet<String>,
}

impl SessionDedupSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns false when the name was already recorded.
    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Everything one visitor's session owns. Passed explicitly into the
/// operations that need it; never shared between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub dedup: SessionDedupSet,
    pub gif: GifCursor,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }
}
