use std::sync::Arc;

use chrono::FixedOffset;
use guestbook_core::{
    build_board, decide_hug, decide_message, timestamp_now, GuestbookBoard, HugDecision,
    HugRecord, Locale, LogName, MessageDecision, MessageRecord, Notice, Record,
    SubmissionResponse,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{
    session_service::SessionRegistry,
    store::{GuestbookStore, StoreError},
};

/// Hug and message submissions on top of a Guestbook Store.
pub struct GuestbookService {
    store: Arc<dyn GuestbookStore>,
    offset: FixedOffset,
}

impl GuestbookService {
    pub fn new(store: Arc<dyn GuestbookStore>, offset: FixedOffset) -> Self {
        Self { store, offset }
    }

    async fn store_record(&self, log: LogName, record: Record) -> Result<(), StoreError> {
        match self.store.append(log, record).await {
            Ok(()) => {
                info!("Stored new {} record", log);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to store {} record: {}", log, e);
                Err(e)
            }
        }
    }

    pub async fn submit_hug(
        &self,
        sessions: &SessionRegistry,
        session_id: Uuid,
        name: &str,
        locale: Locale,
    ) -> SubmissionResponse {
        let decision = sessions.with_session(session_id, |ctx| decide_hug(ctx, name));
        let mut notices = Vec::new();

        match &decision {
            HugDecision::Accepted { name } => {
                let record = HugRecord {
                    timestamp: timestamp_now(self.offset),
                    name: name.clone(),
                };
                match self.store_record(LogName::Hugs, record.into()).await {
                    Ok(()) => notices.extend(Notice::for_hug(&decision, locale)),
                    Err(_) => notices.push(Notice::store_unavailable(locale)),
                }
            }
            HugDecision::Duplicate => {
                info!("Duplicate hug in session {}", session_id);
                notices.extend(Notice::for_hug(&decision, locale));
            }
            HugDecision::Ignored => {}
        }

        self.respond(notices).await
    }

    pub async fn submit_message(&self, text: &str, locale: Locale) -> SubmissionResponse {
        let decision = decide_message(text);
        let mut notices = Vec::new();

        if let MessageDecision::Accepted { text } = &decision {
            let record = MessageRecord {
                timestamp: timestamp_now(self.offset),
                text: text.clone(),
            };
            match self.store_record(LogName::Messages, record.into()).await {
                Ok(()) => notices.extend(Notice::for_message(&decision, locale)),
                Err(_) => notices.push(Notice::store_unavailable(locale)),
            }
        }

        self.respond(notices).await
    }

    /// The submission's own notices plus the re-read board. A failed read
    /// only marks the board degraded.
    async fn respond(&self, notices: Vec<Notice>) -> SubmissionResponse {
        let (board, _) = self.read_board().await;
        SubmissionResponse { notices, board }
    }

    /// Board from both logs, and whether a read failed on a configured store.
    async fn read_board(&self) -> (GuestbookBoard, bool) {
        let (hugs, messages) = tokio::join!(
            self.store.read_all(LogName::Hugs),
            self.store.read_all(LogName::Messages)
        );

        let mut degraded = false;
        let mut unreachable = false;
        for result in [&hugs, &messages] {
            if let Err(e) = result {
                degraded = true;
                if !matches!(e, StoreError::Configuration(_)) {
                    error!("Failed to read guestbook: {}", e);
                    unreachable = true;
                }
            }
        }

        let mut board = build_board(
            &hugs.unwrap_or_default(),
            &messages.unwrap_or_default(),
        );
        board.degraded = degraded;
        (board, unreachable)
    }

    /// Re-read both logs in full for a page load. A failed read leaves that
    /// list empty and adds a board warning; a store that was never
    /// configured is reported by the page instead of here.
    pub async fn refresh(&self, locale: Locale) -> (GuestbookBoard, Option<Notice>) {
        let (board, unreachable) = self.read_board().await;
        let notice = unreachable.then(|| Notice::board_unavailable(locale));
        (board, notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        store::{LogStatus, UnconfiguredStore},
        MemoryStore,
    };
    use async_trait::async_trait;
    use guestbook_core::NoticeLevel;
    use std::time::Duration;

    /// Accepts every write but cannot read anything back.
    struct WriteOnlyStore;

    #[async_trait]
    impl GuestbookStore for WriteOnlyStore {
        async fn ensure_log(&self, _log: LogName) -> Result<LogStatus, StoreError> {
            Ok(LogStatus::Existing)
        }

        async fn append(&self, _log: LogName, _record: Record) -> Result<(), StoreError> {
            Ok(())
        }

        async fn read_all(&self, _log: LogName) -> Result<Vec<Record>, StoreError> {
            Err(StoreError::Unavailable("read timed out".to_string()))
        }
    }

    fn kst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    fn setup() -> (Arc<MemoryStore>, GuestbookService, SessionRegistry) {
        let store = Arc::new(MemoryStore::new());
        let service = GuestbookService::new(store.clone(), kst());
        let sessions = SessionRegistry::new(Duration::from_secs(3600));
        (store, service, sessions)
    }

    #[tokio::test]
    async fn test_same_name_twice_stores_one_hug() {
        let (store, service, sessions) = setup();
        let id = sessions.create();

        let first = service.submit_hug(&sessions, id, "Jimin", Locale::En).await;
        assert_eq!(first.notices.len(), 1);
        assert_eq!(first.notices[0].level, NoticeLevel::Success);

        let second = service.submit_hug(&sessions, id, "Jimin", Locale::En).await;
        assert_eq!(second.notices, vec![Notice::warning(Locale::En.strings().duplicate)]);

        let hugs = store.read_all(LogName::Hugs).await.unwrap();
        assert_eq!(hugs.len(), 1);
        assert_eq!(hugs[0].value, "Jimin");
        assert_eq!(second.board.total_hugs, 1);
    }

    #[tokio::test]
    async fn test_same_name_from_another_session_is_stored_again() {
        let (store, service, sessions) = setup();
        let first = sessions.create();
        let second = sessions.create();

        service.submit_hug(&sessions, first, "ARMY", Locale::En).await;
        service.submit_hug(&sessions, second, "ARMY", Locale::En).await;

        assert_eq!(store.read_all(LogName::Hugs).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_messages_are_never_deduplicated() {
        let (store, service, _sessions) = setup();
        for _ in 0..4 {
            let response = service.submit_message("welcome home", Locale::Ko).await;
            assert_eq!(response.notices, vec![Notice::success(Locale::Ko.strings().msg_sent)]);
        }
        assert_eq!(store.read_all(LogName::Messages).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_empty_input_writes_nothing_and_says_nothing() {
        let (store, service, sessions) = setup();
        let id = sessions.create();

        let hug = service.submit_hug(&sessions, id, "", Locale::En).await;
        let message = service.submit_message("   ", Locale::En).await;

        assert!(hug.notices.is_empty());
        assert!(message.notices.is_empty());
        assert!(store.read_all(LogName::Hugs).await.unwrap().is_empty());
        assert!(store.read_all(LogName::Messages).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_eighth_hug_tops_the_recent_list() {
        let (store, service, sessions) = setup();
        for i in 1..=7 {
            store
                .append(LogName::Hugs, Record::new("2025-06-21 09:00", format!("hug{}", i)))
                .await
                .unwrap();
        }

        let id = sessions.create();
        let response = service.submit_hug(&sessions, id, "hug8", Locale::En).await;

        assert_eq!(response.board.total_hugs, 8);
        let names: Vec<_> = response.board.recent_hugs.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["hug8", "hug7", "hug6", "hug5", "hug4"]);
    }

    #[tokio::test]
    async fn test_unreachable_store_gives_one_warning() {
        let (store, service, _sessions) = setup();
        store.set_offline(true);

        let response = service.submit_message("are you there?", Locale::En).await;

        assert_eq!(response.notices, vec![Notice::store_unavailable(Locale::En)]);
        assert!(response.board.degraded);
        assert!(response.board.recent_messages.is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_with_store_down_says_nothing() {
        let (store, service, sessions) = setup();
        store.set_offline(true);
        let id = sessions.create();

        let message = service.submit_message("", Locale::En).await;
        let hug = service.submit_hug(&sessions, id, "  ", Locale::Ko).await;

        assert!(message.notices.is_empty());
        assert!(hug.notices.is_empty());
        assert!(message.board.degraded);
    }

    #[tokio::test]
    async fn test_saved_message_is_not_reported_lost_when_reread_fails() {
        let service = GuestbookService::new(Arc::new(WriteOnlyStore), kst());

        let response = service.submit_message("welcome back", Locale::En).await;

        assert_eq!(response.notices, vec![Notice::success(Locale::En.strings().msg_sent)]);
        assert!(response.board.degraded);
    }

    #[tokio::test]
    async fn test_unreachable_store_refresh_warns_about_the_board() {
        let (store, service, _sessions) = setup();
        store.set_offline(true);

        let (board, notice) = service.refresh(Locale::Ko).await;

        assert!(board.degraded);
        assert_eq!(notice, Some(Notice::board_unavailable(Locale::Ko)));
    }

    #[tokio::test]
    async fn test_failed_hug_keeps_name_in_session() {
        let (store, service, sessions) = setup();
        let id = sessions.create();
        store.set_offline(true);
        service.submit_hug(&sessions, id, "Suga", Locale::En).await;
        store.set_offline(false);

        let retry = service.submit_hug(&sessions, id, "Suga", Locale::En).await;
        assert_eq!(retry.notices[0].level, NoticeLevel::Warning);
        assert!(store.read_all(LogName::Hugs).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_store_refresh_is_quiet_but_degraded() {
        let service = GuestbookService::new(Arc::new(UnconfiguredStore::new("no token")), kst());
        let (board, notice) = service.refresh(Locale::En).await;
        assert!(board.degraded);
        assert!(notice.is_none());
    }
}
