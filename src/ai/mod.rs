pub mod gemini;
pub mod openai;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Generation settings used when none are configured.
pub const DEFAULT_TEMPERATURE: f32 = 0.9;
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

// ── Types ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiRequest {
    /// Sent to the provider verbatim.
    pub prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AiError(pub String);

impl std::fmt::Display for AiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that turns a prompt into generated text: the provider itself, or the relay in front of it.
pub trait Completer: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

// ── Provider Enum ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Provider {
    Gemini,
    OpenAi,
}

impl Provider {
    fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "gemini" => Some(Self::Gemini),
            "openai" => Some(Self::OpenAi),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
        }
    }

    fn key_setting(&self) -> &'static str {
        match self {
            Self::Gemini => "ai_gemini_api_key",
            Self::OpenAi => "ai_openai_api_key",
        }
    }

    fn key_variable(&self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }
}

// ── Provider Client ───────────────────────────────────

/// The configured generative-text provider. Stateless: every call is an independent request.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    provider: Provider,
    settings: Settings,
}

impl ProviderClient {
    /// Resolve the provider from settings and make sure its credential is present.
    pub fn from_settings(settings: Settings) -> Result<Self, AiError> {
        let name = settings.get_or("ai_provider", "gemini");
        let provider = Provider::from_str(&name)
            .ok_or_else(|| AiError(format!("Unknown AI provider '{}'", name)))?;

        if settings.get(provider.key_setting()).is_none() {
            return Err(AiError(format!(
                "{} is not set in the environment",
                provider.key_variable()
            )));
        }

        Ok(ProviderClient { provider, settings })
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn model(&self) -> String {
        match self.provider {
            Provider::Gemini => gemini::model(self.settings.as_map()),
            Provider::OpenAi => openai::model(self.settings.as_map()),
        }
    }

    /// One request to the provider, no retry.
    pub fn call(&self, req: &AiRequest) -> Result<AiResponse, AiError> {
        let settings = self.settings.as_map();
        let result = match self.provider {
            Provider::Gemini => gemini::call(settings, req),
            Provider::OpenAi => openai::call(settings, req),
        };
        match result {
            Ok(ref resp) => log::info!(
                "AI provider {} ({}) returned {} chars",
                resp.provider,
                resp.model,
                resp.text.len()
            ),
            Err(ref e) => log::warn!("AI provider {} failed: {}", self.provider.name(), e.0),
        }
        result
    }

    fn request(&self, prompt: &str) -> AiRequest {
        AiRequest {
            prompt: prompt.to_string(),
            max_tokens: Some(
                self.settings
                    .get_u32("ai_max_tokens")
                    .unwrap_or(DEFAULT_MAX_TOKENS),
            ),
            temperature: Some(
                self.settings
                    .get_f32("ai_temperature")
                    .unwrap_or(DEFAULT_TEMPERATURE),
            ),
        }
    }
}

impl Completer for ProviderClient {
    fn complete(&self, prompt: &str) -> Result<String, AiError> {
        self.call(&self.request(prompt)).map(|resp| resp.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_rejected() {
        let err = ProviderClient::from_settings(Settings::default()).unwrap_err();
        assert!(err.0.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn openai_requires_its_own_key() {
        let settings = Settings::from_vars([("AI_PROVIDER", "openai"), ("GEMINI_API_KEY", "k")]);
        let err = ProviderClient::from_settings(settings).unwrap_err();
        assert!(err.0.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let settings = Settings::from_vars([("AI_PROVIDER", "llama"), ("GEMINI_API_KEY", "k")]);
        assert!(ProviderClient::from_settings(settings).is_err());
    }

    #[test]
    fn request_uses_configured_generation_settings() {
        let settings = Settings::from_vars([
            ("GEMINI_API_KEY", "k"),
            ("AI_TEMPERATURE", "0.2"),
            ("AI_MAX_TOKENS", "512"),
        ]);
        let client = ProviderClient::from_settings(settings).unwrap();
        let req = client.request("hello");
        assert_eq!(req.prompt, "hello");
        assert_eq!(req.max_tokens, Some(512));
        assert_eq!(req.temperature, Some(0.2));
        assert_eq!(client.model(), "gemini-pro");
    }
}
