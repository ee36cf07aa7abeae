pub mod api;
pub mod completions;
pub mod shell;

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::Request;
use serde::{Deserialize, Serialize};

// ── Shared Types ──────────────────────────────────────

/// Failure body. Never sent together with a result field.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiResult<T> = Result<Json<T>, Custom<Json<ErrorBody>>>;

pub fn error_response(status: Status, message: &str) -> Custom<Json<ErrorBody>> {
    Custom(
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

// ── Catchers ──────────────────────────────────────────

/// JSON errors for the API paths (bad bodies, wrong content type, unknown endpoints).
#[catch(default)]
pub fn api_error(status: Status, _req: &Request) -> Custom<Json<ErrorBody>> {
    let reason = status.reason().unwrap_or("Request failed");
    error_response(status, reason)
}

// ── Route Registration ────────────────────────────────

pub fn routes() -> Vec<rocket::Route> {
    routes![
        completions::completions,
        api::keywords,
        api::audience,
        api::description,
        api::status,
        shell::app_shell,
        shell::preflight,
    ]
}
