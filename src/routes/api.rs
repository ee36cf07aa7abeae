use rocket::serde::json::Json;
use rocket::State;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::ai::{prompts, Completer};
use crate::fields::FormFields;
use crate::keywords::EditableList;
use crate::parse::{self, Block};

use super::completions::relay;
use super::ApiResult;

// ── Request Types ─────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FieldsRequest {
    #[serde(default)]
    pub fields: FormFields,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    #[serde(default)]
    pub fields: FormFields,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub audience: Vec<String>,
}

// ── Response Types ────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AudienceResponse {
    pub audience: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub text: String,
    pub blocks: Vec<Block>,
}

/// Which provider and model the relay is talking to. The credential is never included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub provider: String,
    pub model: String,
}

// ── Suggest Keywords ──────────────────────────────────

#[post("/api/keywords", format = "json", data = "<body>")]
pub async fn keywords(
    completer: &State<Arc<dyn Completer>>,
    body: Json<FieldsRequest>,
) -> ApiResult<KeywordsResponse> {
    let fields = body.into_inner().fields.clamped();
    let text = relay(completer.inner(), prompts::generate_keywords(&fields)).await?;
    Ok(Json(KeywordsResponse {
        keywords: parse::parse_editable_list(&text),
    }))
}

// ── Suggest Target Audience ───────────────────────────

#[post("/api/audience", format = "json", data = "<body>")]
pub async fn audience(
    completer: &State<Arc<dyn Completer>>,
    body: Json<FieldsRequest>,
) -> ApiResult<AudienceResponse> {
    let fields = body.into_inner().fields.clamped();
    let text = relay(completer.inner(), prompts::suggest_audience(&fields)).await?;
    Ok(Json(AudienceResponse {
        audience: parse::parse_list(&text),
    }))
}

// ── Optimize Description ──────────────────────────────

#[post("/api/description", format = "json", data = "<body>")]
pub async fn description(
    completer: &State<Arc<dyn Completer>>,
    body: Json<DescriptionRequest>,
) -> ApiResult<DescriptionResponse> {
    let body = body.into_inner();
    let fields = body.fields.clamped();
    let keywords = EditableList::from_items(body.keywords);
    let audience = EditableList::from_items(body.audience);
    let prompt = prompts::optimize_description(&fields, &keywords, &audience);
    let text = relay(completer.inner(), prompt).await?;
    let blocks = parse::parse_description(&text);
    Ok(Json(DescriptionResponse { text, blocks }))
}

// ── Status ────────────────────────────────────────────

#[get("/api/status")]
pub fn status(info: &State<ProviderInfo>) -> Json<ProviderInfo> {
    Json(info.inner().clone())
}
