// Model exports
pub mod agent;
pub mod domain;
pub mod requests;
pub mod responses;

pub use agent::{AgentEnvelope, AgentOutcome};
pub use domain::{StyleOption, Collection, Store, StyleProfile, StoreMatch, MatchResult, MatchTier, DEFAULT_VIBE_NAME};
pub use requests::{CreateSessionRequest, ToggleStyleRequest, ToggleFavoriteRequest, SampleDataRequest, StoreListQuery};
pub use responses::{HealthResponse, ErrorResponse, SessionResponse, ActionResponse, StoreListResponse};
