//! StyleMatch - style discovery and boutique matching service
//!
//! A shopper picks the looks they like from a fixed set of style cards.
//! An external AI agent turns that selection into a style profile, and a
//! second agent ranks the local boutique catalog against the profile.
//! Agent replies are free-form, so every reply goes through a lenient
//! normalizer before it touches session state.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{extract_object, ActionOutcome, DiscoverFilter, SessionMode, StyleAdvisor, StyleSession};
pub use models::{AgentOutcome, MatchResult, Store, StoreMatch, StyleOption, StyleProfile};
pub use services::{AgentInvoker, Catalog, HttpAgentClient, SessionStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let raw = serde_json::Value::String("noise {\"vibe_name\":\"Quiet\"} noise".to_string());
        let parsed = extract_object(&raw).expect("should salvage the object");
        assert_eq!(parsed["vibe_name"], "Quiet");

        let catalog = Catalog::builtin();
        assert_eq!(catalog.styles().len(), 12);
        assert_eq!(catalog.stores().len(), 8);
    }
}
