use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use crate::models::{AgentEnvelope, AgentOutcome};

/// Errors that can occur when talking to the agent transport
///
/// These are the "thrown" failures: the transport could not even produce
/// an outcome envelope.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Agent transport returned status {0}")]
    ApiError(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// The external text-generation agent, as a capability
///
/// One round trip per call; no retries, no streaming. Implementations
/// report transport-level failure as `AgentOutcome::Failure` when the
/// transport says so, and as `Err` when no envelope could be obtained.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    async fn invoke(&self, prompt: &str, agent_id: &str) -> Result<AgentOutcome, AgentError>;
}

/// Routing keys for the two agents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIds {
    pub style_profile: String,
    pub store_match: String,
}

pub const DEFAULT_STYLE_PROFILE_AGENT_ID: &str = "69996315730bbd74d53e8ac3";
pub const DEFAULT_STORE_MATCH_AGENT_ID: &str = "69996316730bbd74d53e8ac5";

impl Default for AgentIds {
    fn default() -> Self {
        Self {
            style_profile: DEFAULT_STYLE_PROFILE_AGENT_ID.to_string(),
            store_match: DEFAULT_STORE_MATCH_AGENT_ID.to_string(),
        }
    }
}

/// Agent transport over HTTP
///
/// POSTs `{"message", "agent_id"}` to `{endpoint}/agents/invoke` and decodes
/// the `{success, response, error}` envelope.
pub struct HttpAgentClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpAgentClient {
    /// Create a new agent client
    pub fn new(base_url: String, api_key: Option<String>, timeout_secs: u64) -> Result<Self, AgentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()),
            client,
        })
    }

    fn invoke_url(&self) -> String {
        format!("{}/agents/invoke", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AgentInvoker for HttpAgentClient {
    async fn invoke(&self, prompt: &str, agent_id: &str) -> Result<AgentOutcome, AgentError> {
        let url = self.invoke_url();

        tracing::debug!("Invoking agent {} ({} prompt chars)", agent_id, prompt.len());

        let mut request = self
            .client
            .post(&url)
            .json(&json!({ "message": prompt, "agent_id": agent_id }));

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Agent {} returned {}: {}", agent_id, status, body);
            return Err(AgentError::ApiError(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: AgentEnvelope = serde_json::from_str(&body)
            .map_err(|e| AgentError::InvalidResponse(format!("Failed to decode envelope: {}", e)))?;

        Ok(envelope.into_outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_client_creation() {
        let client = HttpAgentClient::new(
            "https://agents.test/v1/".to_string(),
            Some(String::new()),
            30,
        )
        .unwrap();

        assert_eq!(client.invoke_url(), "https://agents.test/v1/agents/invoke");
        assert!(client.api_key.is_none());
    }

    #[test]
    fn test_default_agent_ids() {
        let ids = AgentIds::default();
        assert_eq!(ids.style_profile, "69996315730bbd74d53e8ac3");
        assert_eq!(ids.store_match, "69996316730bbd74d53e8ac5");
    }

    #[tokio::test]
    async fn test_invoke_decodes_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/agents/invoke")
            .match_header("authorization", "Bearer secret")
            .match_body(mockito::Matcher::PartialJson(json!({ "agent_id": "style" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"response":{"result":"{\"vibe_name\":\"Test Vibe\"}"}}"#)
            .create_async()
            .await;

        let client = HttpAgentClient::new(server.url(), Some("secret".to_string()), 5).unwrap();
        let outcome = client.invoke("prompt", "style").await.unwrap();

        mock.assert_async().await;
        assert_eq!(outcome.result(), Some(&json!("{\"vibe_name\":\"Test Vibe\"}")));
    }

    #[tokio::test]
    async fn test_invoke_reports_transport_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/agents/invoke")
            .with_status(200)
            .with_body(r#"{"success":false,"error":"Agent busy"}"#)
            .create_async()
            .await;

        let client = HttpAgentClient::new(server.url(), None, 5).unwrap();
        let outcome = client.invoke("prompt", "match").await.unwrap();
        assert_eq!(outcome, AgentOutcome::failure("Agent busy"));
    }

    #[tokio::test]
    async fn test_invoke_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/agents/invoke")
            .with_status(502)
            .create_async()
            .await;

        let client = HttpAgentClient::new(server.url(), None, 5).unwrap();
        let err = client.invoke("prompt", "match").await.unwrap_err();
        assert!(matches!(err, AgentError::ApiError(502)));
    }

    #[tokio::test]
    async fn test_invoke_garbage_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/agents/invoke")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let client = HttpAgentClient::new(server.url(), None, 5).unwrap();
        let err = client.invoke("prompt", "match").await.unwrap_err();
        assert!(matches!(err, AgentError::InvalidResponse(_)));
    }
}
