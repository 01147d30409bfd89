// Core exports
pub mod discover;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod selection;
pub mod session;
pub mod shape;

pub use discover::{DiscoverFilter, StoreListing, filter_labels, list_stores, listing_for, favorite_stores};
pub use normalize::{extract_object, normalize_outcome, ParsedObject};
pub use pipeline::{lock_session, ActionOutcome, SharedSession, StyleAdvisor};
pub use selection::{StyleSelection, ToggleEffect, MIN_SELECTED_STYLES, MAX_SELECTED_STYLES};
pub use session::{AgentAction, SessionError, SessionMode, SessionView, StyleSession};
pub use shape::{shape_match_result, shape_store_match, shape_style_profile};
