use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
    time::{Duration, Instant},
};

use guestbook_core::SessionContext;
use tracing::debug;
use uuid::Uuid;

use super::ServiceError;

struct SessionEntry {
    context: SessionContext,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(now: Instant) -> Self {
        Self {
            context: SessionContext::new(),
            last_seen: now,
        }
    }
}

/// Per-visitor session contexts, keyed by the id handed to the browser.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
    idle: Duration,
}

pub fn parse_session_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ServiceError::InvalidInput(format!("invalid session id '{}'", raw)))
}

impl SessionRegistry {
    pub fn new(idle: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle,
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {} idle sessions", evicted);
        }
    }

    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let now = Instant::now();
        let mut sessions = self.sessions();
        self.evict_idle(&mut sessions, now);
        sessions.insert(id, SessionEntry::new(now));
        debug!("Started session {}", id);
        id
    }

    /// Run `f` against the session's context. An unknown or expired id starts
    /// over with a fresh context.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut SessionContext) -> R) -> R {
        let now = Instant::now();
        let mut sessions = self.sessions();
        self.evict_idle(&mut sessions, now);
        let entry = sessions.entry(id).or_insert_with(|| SessionEntry::new(now));
        entry.last_seen = now;
        f(&mut entry.context)
    }

    /// Drop the session's dedup set and gif position. Returns false when the
    /// session was not known.
    pub fn end(&self, id: Uuid) -> bool {
        let ended = self.sessions().remove(&id).is_some();
        if ended {
            debug!("Ended session {}", id);
        }
        ended
    }

    /// Sessions currently held, idle ones included until the next eviction.
    pub fn active_count(&self) -> usize {
        self.sessions().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_survives_between_calls() {
        let registry = SessionRegistry::new(Duration::from_secs(3600));
        let id = registry.create();
        registry.with_session(id, |ctx| ctx.dedup.insert("Jin"));
        assert!(registry.with_session(id, |ctx| ctx.dedup.contains("Jin")));
        assert_eq!(registry.active_count(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let registry = SessionRegistry::new(Duration::from_secs(3600));
        let first = registry.create();
        let second = registry.create();
        registry.with_session(first, |ctx| ctx.gif.advance(4));
        assert_eq!(registry.with_session(second, |ctx| ctx.gif.index()), 0);
        assert_eq!(registry.with_session(first, |ctx| ctx.gif.index()), 1);
    }

    #[test]
    fn test_unknown_id_gets_fresh_context() {
        let registry = SessionRegistry::new(Duration::from_secs(3600));
        let id = Uuid::new_v4();
        assert!(registry.with_session(id, |ctx| ctx.dedup.is_empty()));
        assert_eq!(registry.active_count(), 1);
    }

    #[test]
    fn test_end_resets_the_session() {
        let registry = SessionRegistry::new(Duration::from_secs(3600));
        let id = registry.create();
        registry.with_session(id, |ctx| ctx.dedup.insert("RM"));
        assert!(registry.end(id));
        assert!(!registry.end(id));
        assert_eq!(registry.active_count(), 0);
        assert!(!registry.with_session(id, |ctx| ctx.dedup.contains("RM")));
    }

    #[test]
    fn test_idle_sessions_are_evicted() {
        let registry = SessionRegistry::new(Duration::ZERO);
        let id = registry.create();
        registry.with_session(id, |ctx| ctx.dedup.insert("V"));
        assert!(!registry.with_session(id, |ctx| ctx.dedup.contains("V")));
    }

    #[test]
    fn test_parse_session_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_session_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_session_id("not-a-session"),
            Err(ServiceError::InvalidInput(_))
        ));
    }
}
