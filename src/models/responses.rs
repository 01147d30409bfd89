use serde::{Deserialize, Serialize};
use crate::core::discover::StoreListing;
use crate::core::session::SessionView;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub active_sessions: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// A session id together with its current state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: uuid::Uuid,
    pub session: SessionView,
}

/// Terminal state of an agent-backed action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    /// One of `success`, `failed`, `unrecoverable`, `skipped`
    pub outcome: String,
    pub message: Option<String>,
    pub session: SessionView,
}

/// Store listing for the discover screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreListResponse {
    pub filter: String,
    pub categories: Vec<String>,
    pub match_summary: String,
    pub stores: Vec<StoreListing>,
}
