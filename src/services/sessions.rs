use moka::future::Cache;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;
use crate::core::pipeline::SharedSession;
use crate::core::session::{SessionMode, StyleSession};

/// Transient in-memory session store
///
/// Sessions expire after `ttl_secs` without access. Nothing is persisted.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<Uuid, SharedSession>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, ttl_secs: u64) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions }
    }

    /// Open a new session and return its id
    pub async fn create(&self, mode: SessionMode) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(StyleSession::new(mode)));
        self.sessions.insert(id, Arc::clone(&session)).await;

        tracing::debug!("Opened session {} ({:?})", id, mode);
        (id, session)
    }

    pub async fn get(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions.get(id).await
    }

    /// Drop a session; returns whether it existed
    pub async fn remove(&self, id: &Uuid) -> bool {
        let existed = self.sessions.remove(id).await.is_some();
        if existed {
            tracing::debug!("Closed session {}", id);
        }
        existed
    }

    /// Approximate number of live sessions
    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
