use serde_json::{json, Value};
use std::collections::HashMap;

use super::{AiError, AiRequest, AiResponse, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub fn model(settings: &HashMap<String, String>) -> String {
    settings
        .get("ai_gemini_model")
        .cloned()
        .unwrap_or_else(|| "gemini-pro".to_string())
}

pub fn call(settings: &HashMap<String, String>, req: &AiRequest) -> Result<AiResponse, AiError> {
    let api_key = settings
        .get("ai_gemini_api_key")
        .cloned()
        .unwrap_or_default();
    if api_key.is_empty() {
        return Err(AiError("Gemini API key not configured".into()));
    }

    let model = model(settings);
    let base_url = settings
        .get("ai_gemini_base_url")
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let url = format!("{}/models/{}:generateContent", base_url, model);

    let body = json!({
        "contents": [{"parts": [{"text": req.prompt}]}],
        "generationConfig": {
            "maxOutputTokens": req.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            "temperature": req.temperature.unwrap_or(DEFAULT_TEMPERATURE)
        }
    });

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .map_err(|e| AiError(format!("HTTP client error: {}", e)))?;

    // Key travels in a header, never in the URL
    let resp = client
        .post(&url)
        .header("Content-Type", "application/json")
        .header("x-goog-api-key", &api_key)
        .json(&body)
        .send()
        .map_err(|e| AiError(format!("Gemini request failed: {}", e)))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().unwrap_or_default();
        return Err(AiError(format!("Gemini returned {}: {}", status, text)));
    }

    let json: Value = resp
        .json()
        .map_err(|e| AiError(format!("Gemini JSON parse error: {}", e)))?;

    let text = extract_text(&json)?;

    Ok(AiResponse {
        text,
        provider: "gemini".into(),
        model,
    })
}

/// Concatenate the text parts of the first candidate.
fn extract_text(json: &Value) -> Result<String, AiError> {
    if let Some(reason) = json
        .get("promptFeedback")
        .and_then(|f| f.get("blockReason"))
        .and_then(|r| r.as_str())
    {
        return Err(AiError(format!("Gemini blocked the prompt: {}", reason)));
    }

    let text: String = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AiError("Gemini response contained no text".into()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_joins_parts() {
        let v = json!({"candidates": [{"content": {"parts": [{"text": "* a\n"}, {"text": "* b"}]}}]});
        assert_eq!(extract_text(&v).unwrap(), "* a\n* b");
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let v = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        assert!(extract_text(&v).unwrap_err().0.contains("SAFETY"));
    }

    #[test]
    fn missing_candidates_is_an_error() {
        assert!(extract_text(&json!({"candidates": []})).is_err());
        assert!(extract_text(&json!({"unexpected": true})).is_err());
    }
}
