use serde_json::Value;
use url::Url;

use crate::ai::{AiError, Completer};
use crate::routes::completions::CompletionRequest;

/// Blocking client for the relay's `POST /completions`, used by front-ends that sit behind it.
#[derive(Debug, Clone)]
pub struct RelayClient {
    endpoint: Url,
}

impl RelayClient {
    /// `base` is the relay origin, e.g. `http://localhost:3001/`.
    pub fn new(base: &str) -> Result<Self, AiError> {
        let base = Url::parse(base).map_err(|e| AiError(format!("Invalid relay URL '{}': {}", base, e)))?;
        let endpoint = base
            .join("completions")
            .map_err(|e| AiError(format!("Invalid relay URL: {}", e)))?;
        Ok(RelayClient { endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Completer for RelayClient {
    fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| AiError(format!("HTTP client error: {}", e)))?;

        let resp = client
            .post(self.endpoint.clone())
            .json(&CompletionRequest {
                message: prompt.to_string(),
            })
            .send()
            .map_err(|e| AiError(format!("Relay request failed: {}", e)))?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .map_err(|e| AiError(format!("Relay returned {} with unreadable body: {}", status, e)))?;

        read_body(status.is_success(), status.as_u16(), &body)
    }
}

/// Interpret a relay response body. A success needs a `text` field; anything else is an error.
fn read_body(success: bool, status: u16, body: &Value) -> Result<String, AiError> {
    if let Some(err) = body.get("error").and_then(|e| e.as_str()) {
        return Err(AiError(format!("Relay returned {}: {}", status, err)));
    }
    if !success {
        return Err(AiError(format!("Relay returned {}", status)));
    }
    body.get("text")
        .and_then(|t| t.as_str())
        .map(String::from)
        .ok_or_else(|| AiError("Relay response has no text field".into()))
}
