use serde_json::{json, Value};
use std::collections::HashMap;

use super::{AiError, AiRequest, AiResponse, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

pub fn model(settings: &HashMap<String, String>) -> String {
    settings
        .get("ai_openai_model")
        .cloned()
        .unwrap_or_else(|| "gpt-4o-mini".to_string())
}

pub fn call(settings: &HashMap<String, String>, req: &AiRequest) -> Result<AiResponse, AiError> {
    let api_key = settings
        .get("ai_openai_api_key")
        .cloned()
        .unwrap_or_default();
    if api_key.is_empty() {
        return Err(AiError("OpenAI API key not configured".into()));
    }

    let model = model(settings);

    let base_url = settings
        .get("ai_openai_base_url")
        .cloned()
        .unwrap_or_default();
    let base_url = if base_url.is_empty() {
        "https://api.openai.com/v1".to_string()
    } else {
        base_url.trim_end_matches('/').to_string()
    };

    let url = format!("{}/chat/completions", base_url);

    let body = json!({
        "model": model,
        "messages": [{"role": "user", "content": req.prompt}],
        "max_tokens": req.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        "temperature": req.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    });

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .map_err(|e| AiError(format!("HTTP client error: {}", e)))?;

    let resp = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .map_err(|e| AiError(format!("OpenAI request failed: {}", e)))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().unwrap_or_default();
        return Err(AiError(format!("OpenAI returned {}: {}", status, text)));
    }

    let json: Value = resp
        .json()
        .map_err(|e| AiError(format!("OpenAI JSON parse error: {}", e)))?;

    let text = extract_text(&json)?;

    Ok(AiResponse {
        text,
        provider: "openai".into(),
        model,
    })
}

/// Message content of the first choice. Missing or empty content is an error.
fn extract_text(json: &Value) -> Result<String, AiError> {
    let text = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AiError("OpenAI response contained no message content".into()));
    }
    Ok(text.to_string())
}
