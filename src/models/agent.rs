use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire envelope returned by the agent transport
///
/// ```json
/// { "success": true, "response": { "result": "..." }, "error": null }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AgentEnvelope {
    pub fn into_outcome(self) -> AgentOutcome {
        if self.success {
            AgentOutcome::Success {
                payload: self.response.unwrap_or(Value::Null),
            }
        } else {
            AgentOutcome::Failure {
                message: self.error,
            }
        }
    }
}

/// Result of a single agent round trip
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOutcome {
    /// The transport answered. `payload` is the opaque `response` object.
    Success { payload: Value },
    /// The transport reported failure, optionally with a message.
    Failure { message: Option<String> },
}

impl AgentOutcome {
    /// Convenience for stubs: a success whose `response.result` is `result`
    pub fn with_result(result: impl Into<Value>) -> Self {
        AgentOutcome::Success {
            payload: serde_json::json!({ "result": result.into() }),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        AgentOutcome::Failure {
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AgentOutcome::Success { .. })
    }

    /// The nested `result` field of a successful payload
    pub fn result(&self) -> Option<&Value> {
        match self {
            AgentOutcome::Success { payload } => payload.get("result"),
            AgentOutcome::Failure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success() {
        let envelope: AgentEnvelope = serde_json::from_value(json!({
            "success": true,
            "response": { "result": "{}" }
        }))
        .unwrap();

        let outcome = envelope.into_outcome();
        assert!(outcome.is_success());
        assert_eq!(outcome.result(), Some(&json!("{}")));
    }

    #[test]
    fn test_envelope_failure_keeps_message() {
        let envelope: AgentEnvelope = serde_json::from_value(json!({
            "success": false,
            "error": "rate limited"
        }))
        .unwrap();

        assert_eq!(envelope.into_outcome(), AgentOutcome::failure("rate limited"));
    }

    #[test]
    fn test_success_without_response_has_no_result() {
        let envelope: AgentEnvelope = serde_json::from_value(json!({ "success": true })).unwrap();
        let outcome = envelope.into_outcome();
        assert!(outcome.is_success());
        assert!(outcome.result().is_none());
    }
}
