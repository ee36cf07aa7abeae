use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::ai::{AiError, Completer};

use super::{error_response, ApiResult, ErrorBody};

/// Message returned to callers when the provider fails. Details stay in the server log.
pub const RELAY_FAILURE: &str = "Failed to fetch data from the AI provider";

// ── Wire Types ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionText {
    pub text: String,
}

// ── Relay ─────────────────────────────────────────────

/// Forward `message` verbatim to the provider and return its raw text.
#[post("/completions", format = "json", data = "<body>")]
pub async fn completions(
    completer: &State<Arc<dyn Completer>>,
    body: Json<CompletionRequest>,
) -> ApiResult<CompletionText> {
    let text = relay(completer.inner(), body.into_inner().message).await?;
    Ok(Json(CompletionText { text }))
}

/// Run one provider call off the async workers. Every failure maps to a 500 with a generic message.
pub(crate) async fn relay(
    completer: &Arc<dyn Completer>,
    prompt: String,
) -> Result<String, Custom<Json<ErrorBody>>> {
    let request_id = Uuid::new_v4();
    log::info!(
        "[relay {}] forwarding prompt ({} chars)",
        request_id,
        prompt.chars().count()
    );

    let completer = Arc::clone(completer);
    let result = rocket::tokio::task::spawn_blocking(move || completer.complete(&prompt))
        .await
        .map_err(|e| AiError(format!("completion task failed: {}", e)))
        .and_then(|r| r);

    match result {
        Ok(text) => {
            log::info!("[relay {}] provider returned {} chars", request_id, text.chars().count());
            Ok(text)
        }
        Err(e) => {
            log::error!("[relay {}] {}", request_id, e);
            Err(error_response(Status::InternalServerError, RELAY_FAILURE))
        }
    }
}
