use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::selection::{StyleSelection, ToggleEffect, MIN_SELECTED_STYLES};
use crate::models::{MatchResult, StyleProfile};
use crate::services::catalog::{sample_matches, sample_profile, Catalog};

/// Errors raised by session operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown style option: {0}")]
    UnknownStyle(String),

    #[error("Unknown store: {0}")]
    UnknownStore(String),

    #[error("Select at least {min} styles before analysis ({selected} selected)")]
    NotEnoughStyles { selected: usize, min: usize },

    #[error("No style profile yet; complete the style quiz first")]
    NoProfile,

    #[error("A {0} request is already in flight")]
    AlreadyInFlight(AgentAction),
}

/// The two agent-backed actions a session can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentAction {
    AnalyzeStyle,
    MatchStores,
}

impl std::fmt::Display for AgentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentAction::AnalyzeStyle => write!(f, "style analysis"),
            AgentAction::MatchStores => write!(f, "store matching"),
        }
    }
}

/// How a session starts out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Live,
    /// Pre-populated with the canned sample profile and matches
    Sample,
}

/// Per-user quiz and discovery state
///
/// Transient: nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct StyleSession {
    selection: StyleSelection,
    profile: Option<StyleProfile>,
    matches: MatchResult,
    favorites: Vec<String>,
    /// Agent id of the running call, per action
    analyzing: Option<String>,
    matching: Option<String>,
    /// Most recently started action still in flight
    latest: Option<AgentAction>,
    error_message: Option<String>,
    sample_data: bool,
    generation: u64,
}

impl StyleSession {
    pub fn new(mode: SessionMode) -> Self {
        let mut session = Self {
            selection: StyleSelection::new(),
            profile: None,
            matches: MatchResult::default(),
            favorites: Vec::new(),
            analyzing: None,
            matching: None,
            latest: None,
            error_message: None,
            sample_data: false,
            generation: 0,
        };
        if mode == SessionMode::Sample {
            session.set_sample_data(true);
        }
        session
    }

    pub fn selection(&self) -> &StyleSelection {
        &self.selection
    }

    pub fn profile(&self) -> Option<&StyleProfile> {
        self.profile.as_ref()
    }

    pub fn matches(&self) -> &MatchResult {
        &self.matches
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing.is_some()
    }

    pub fn is_matching(&self) -> bool {
        self.matching.is_some()
    }

    /// Agent of the most recently started call still in flight
    pub fn active_agent_id(&self) -> Option<&str> {
        self.latest.and_then(|action| self.in_flight_agent(action))
    }

    fn in_flight_agent(&self, action: AgentAction) -> Option<&str> {
        match action {
            AgentAction::AnalyzeStyle => self.analyzing.as_deref(),
            AgentAction::MatchStores => self.matching.as_deref(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn sample_data(&self) -> bool {
        self.sample_data
    }

    /// Bumped on every quiz retake
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self, action: AgentAction) -> bool {
        match action {
            AgentAction::AnalyzeStyle => self.analyzing.is_some(),
            AgentAction::MatchStores => self.matching.is_some(),
        }
    }

    /// Toggle a quiz card. Picking past the maximum is a silent no-op.
    pub fn toggle_style(&mut self, catalog: &Catalog, style_id: &str) -> Result<ToggleEffect, SessionError> {
        if catalog.style(style_id).is_none() {
            return Err(SessionError::UnknownStyle(style_id.to_string()));
        }
        Ok(self.selection.toggle(style_id))
    }

    /// Add or remove a store from favorites; returns whether it is now a favorite
    pub fn toggle_favorite(&mut self, catalog: &Catalog, store_id: &str) -> Result<bool, SessionError> {
        if catalog.store(store_id).is_none() {
            return Err(SessionError::UnknownStore(store_id.to_string()));
        }

        if let Some(pos) = self.favorites.iter().position(|f| f == store_id) {
            self.favorites.remove(pos);
            Ok(false)
        } else {
            self.favorites.push(store_id.to_string());
            Ok(true)
        }
    }

    /// Swap live state for the canned fixture, or back out of it
    ///
    /// Turning sample mode off only clears state that still is the sample
    /// profile; a live profile obtained meanwhile is kept.
    pub fn set_sample_data(&mut self, enabled: bool) {
        self.sample_data = enabled;
        if enabled {
            self.profile = Some(sample_profile());
            self.matches = sample_matches();
            self.selection.clear();
        } else if self.profile.as_ref() == Some(&sample_profile()) {
            self.profile = None;
            self.matches = MatchResult::default();
            self.selection.clear();
        }
    }

    /// Start over: drop profile, matches and picks. Favorites survive.
    pub fn retake_quiz(&mut self) {
        self.profile = None;
        self.matches = MatchResult::default();
        self.selection.clear();
        self.sample_data = false;
        self.generation += 1;
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    /// Mark an agent action as started
    ///
    /// Rejects a second trigger of the same action while one is running.
    pub(crate) fn begin(&mut self, action: AgentAction, agent_id: &str) -> Result<u64, SessionError> {
        if self.is_in_flight(action) {
            return Err(SessionError::AlreadyInFlight(action));
        }

        match action {
            AgentAction::AnalyzeStyle => {
                if !self.selection.is_ready() {
                    return Err(SessionError::NotEnoughStyles {
                        selected: self.selection.len(),
                        min: MIN_SELECTED_STYLES,
                    });
                }
                self.analyzing = Some(agent_id.to_string());
            }
            AgentAction::MatchStores => {
                if self.profile.is_none() {
                    return Err(SessionError::NoProfile);
                }
                self.matching = Some(agent_id.to_string());
            }
        }

        self.error_message = None;
        self.latest = Some(action);
        Ok(self.generation)
    }

    /// Clear the in-flight marker for an action
    ///
    /// If the other action is still running, it becomes the active one.
    pub(crate) fn settle(&mut self, action: AgentAction) {
        let other = match action {
            AgentAction::AnalyzeStyle => {
                self.analyzing = None;
                AgentAction::MatchStores
            }
            AgentAction::MatchStores => {
                self.matching = None;
                AgentAction::AnalyzeStyle
            }
        };

        if self.latest == Some(action) {
            self.latest = self.is_in_flight(other).then_some(other);
        }
    }

    pub(crate) fn apply_profile(&mut self, profile: StyleProfile) {
        self.profile = Some(profile);
        // matches were computed against the previous profile
        self.matches = MatchResult::default();
    }

    pub(crate) fn apply_matches(&mut self, matches: MatchResult) {
        self.matches = matches;
    }

    pub(crate) fn record_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Serializable snapshot for the presentation layer
    pub fn view(&self) -> SessionView {
        SessionView {
            selected_styles: self.selection.ids().to_vec(),
            can_analyze: self.selection.is_ready() && !self.is_analyzing(),
            profile: self.profile.clone(),
            matches: self.matches.clone(),
            favorites: self.favorites.clone(),
            is_analyzing: self.is_analyzing(),
            is_matching: self.is_matching(),
            active_agent_id: self.active_agent_id().map(str::to_string),
            error_message: self.error_message.clone(),
            sample_data: self.sample_data,
        }
    }
}

impl Default for StyleSession {
    fn default() -> Self {
        Self::new(SessionMode::Live)
    }
}

/// Snapshot of a session as the front-end sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub selected_styles: Vec<String>,
    pub can_analyze: bool,
    pub profile: Option<StyleProfile>,
    pub matches: MatchResult,
    pub favorites: Vec<String>,
    pub is_analyzing: bool,
    pub is_matching: bool,
    pub active_agent_id: Option<String>,
    pub error_message: Option<String>,
    pub sample_data: bool,
}
