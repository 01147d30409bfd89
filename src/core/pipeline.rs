use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, info, warn};
use crate::core::normalize::{normalize_outcome, ParsedObject};
use crate::core::prompts::{store_match_prompt, style_analysis_prompt};
use crate::core::session::{AgentAction, SessionError, StyleSession};
use crate::core::shape::{shape_match_result, shape_style_profile};
use crate::models::{AgentOutcome, MatchResult, StyleProfile};
use crate::services::agent::{AgentError, AgentIds, AgentInvoker};
use crate::services::catalog::Catalog;

/// A session shared between request handlers
///
/// The lock is never held across an agent call.
pub type SharedSession = Arc<Mutex<StyleSession>>;

/// Lock a session, recovering the state if a previous holder panicked
pub fn lock_session(session: &SharedSession) -> MutexGuard<'_, StyleSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Terminal state of an agent-backed action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T> {
    /// Parsed and shaped; already applied to the session.
    Success(T),
    /// Transport failure or invoker error, with the user-facing message.
    Failed(String),
    /// The agent answered but no structure could be recovered.
    Unrecoverable(String),
}

impl<T> ActionOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success(_))
    }

    /// User-facing message for non-success states
    pub fn message(&self) -> Option<&str> {
        match self {
            ActionOutcome::Success(_) => None,
            ActionOutcome::Failed(m) | ActionOutcome::Unrecoverable(m) => Some(m),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionOutcome::Success(_) => "success",
            ActionOutcome::Failed(_) => "failed",
            ActionOutcome::Unrecoverable(_) => "unrecoverable",
        }
    }
}

struct ActionMessages {
    failed: &'static str,
    unparseable: &'static str,
    errored: &'static str,
}

fn messages(action: AgentAction) -> ActionMessages {
    match action {
        AgentAction::AnalyzeStyle => ActionMessages {
            failed: "Failed to analyze style. Please try again.",
            unparseable: "Could not parse style profile. Please try again.",
            errored: "An error occurred while analyzing your style.",
        },
        AgentAction::MatchStores => ActionMessages {
            failed: "Failed to match stores. Please try again.",
            unparseable: "Could not parse store matches. Please try again.",
            errored: "An error occurred while matching stores.",
        },
    }
}

/// Clears the in-flight flag and active agent id when dropped, so the
/// markers reset however the call ends (including cancellation).
struct InFlightGuard {
    session: SharedSession,
    action: AgentAction,
}

impl InFlightGuard {
    fn new(session: &SharedSession, action: AgentAction) -> Self {
        Self {
            session: Arc::clone(session),
            action,
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        lock_session(&self.session).settle(self.action);
    }
}

/// Turn an invoker result into a terminal state, never failing
pub fn resolve_outcome<T>(
    action: AgentAction,
    result: Result<AgentOutcome, AgentError>,
    shape: fn(&ParsedObject) -> T,
) -> ActionOutcome<T> {
    let msgs = messages(action);

    match result {
        Err(e) => {
            error!("Agent call for {} errored: {}", action, e);
            ActionOutcome::Failed(msgs.errored.to_string())
        }
        Ok(AgentOutcome::Failure { message }) => {
            warn!("Agent reported failure for {}: {:?}", action, message);
            ActionOutcome::Failed(message.unwrap_or_else(|| msgs.failed.to_string()))
        }
        Ok(outcome) => match normalize_outcome(&outcome) {
            Some(parsed) => ActionOutcome::Success(shape(&parsed)),
            None => {
                warn!("Could not recover structured data from {} response", action);
                ActionOutcome::Unrecoverable(msgs.unparseable.to_string())
            }
        },
    }
}

/// Runs the two agent-backed actions against a session
///
/// UI event -> prompt -> agent -> normalize -> shape -> session update.
#[derive(Clone)]
pub struct StyleAdvisor {
    invoker: Arc<dyn AgentInvoker>,
    catalog: Arc<Catalog>,
    agent_ids: AgentIds,
}

impl StyleAdvisor {
    pub fn new(invoker: Arc<dyn AgentInvoker>, catalog: Arc<Catalog>, agent_ids: AgentIds) -> Self {
        Self {
            invoker,
            catalog,
            agent_ids,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn agent_ids(&self) -> &AgentIds {
        &self.agent_ids
    }

    /// Ask the style agent for a profile of the selected styles
    ///
    /// Needs at least five selected styles. On success the new profile
    /// replaces the old one and any matches against it are dropped.
    pub async fn analyze_style(
        &self,
        session: &SharedSession,
    ) -> Result<ActionOutcome<StyleProfile>, SessionError> {
        let catalog = Arc::clone(&self.catalog);
        self.run(
            session,
            AgentAction::AnalyzeStyle,
            &self.agent_ids.style_profile,
            move |state| style_analysis_prompt(&catalog.selected_styles(state.selection().ids())),
            shape_style_profile,
            StyleSession::apply_profile,
        )
        .await
    }

    /// Ask the match agent to rank every catalog store against the profile
    pub async fn match_stores(
        &self,
        session: &SharedSession,
    ) -> Result<ActionOutcome<MatchResult>, SessionError> {
        let catalog = Arc::clone(&self.catalog);
        self.run(
            session,
            AgentAction::MatchStores,
            &self.agent_ids.store_match,
            move |state| match state.profile() {
                Some(profile) => store_match_prompt(profile, catalog.stores()),
                None => String::new(),
            },
            shape_match_result,
            StyleSession::apply_matches,
        )
        .await
    }

    /// Entering the discover screen: match only when a profile exists and
    /// there are no matches yet. `None` means nothing was triggered.
    pub async fn explore_stores(
        &self,
        session: &SharedSession,
    ) -> Result<Option<ActionOutcome<MatchResult>>, SessionError> {
        let needs_matching = {
            let state = lock_session(session);
            state.profile().is_some() && state.matches().is_empty() && !state.is_matching()
        };

        if !needs_matching {
            return Ok(None);
        }

        self.match_stores(session).await.map(Some)
    }

    async fn run<T, P>(
        &self,
        session: &SharedSession,
        action: AgentAction,
        agent_id: &str,
        build_prompt: P,
        shape: fn(&ParsedObject) -> T,
        apply: fn(&mut StyleSession, T),
    ) -> Result<ActionOutcome<T>, SessionError>
    where
        T: Clone,
        P: FnOnce(&StyleSession) -> String,
    {
        // declared before the lock so it drops after the lock is released
        let _in_flight: InFlightGuard;
        let (prompt, generation) = {
            let mut state = lock_session(session);
            let generation = state.begin(action, agent_id)?;
            _in_flight = InFlightGuard::new(session, action);
            (build_prompt(&*state), generation)
        };

        info!("Starting {} with agent {}", action, agent_id);
        let result = self.invoker.invoke(&prompt, agent_id).await;
        let outcome = resolve_outcome(action, result, shape);

        {
            let mut state = lock_session(session);
            if state.generation() != generation {
                // quiz was retaken while the call was running; applied anyway
                warn!("Applying late {} result after quiz retake", action);
            }

            match &outcome {
                ActionOutcome::Success(value) => apply(&mut *state, value.clone()),
                ActionOutcome::Failed(message) | ActionOutcome::Unrecoverable(message) => {
                    state.record_error(message.clone())
                }
            }
        }

        info!("Finished {} with outcome {}", action, outcome.label());
        Ok(outcome)
    }
}
