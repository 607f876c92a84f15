// HTTP API
// Route handlers for the humanize pipeline and the auxiliary tools

use actix_web::error::JsonPayloadError;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::models::{
    ErrorResponse, HumanizeRequest, ScoreRequest, SummarizeRequest, TransformCitationsRequest,
};
use crate::services::humanizer::Humanizer;
use crate::services::providers::ProviderClient;
use crate::services::tools;

/// Minimum input length accepted by the humanize endpoint.
pub const MIN_TEXT_LENGTH: usize = 10;

/// Shared application state for handlers.
pub struct AppState {
    /// Rewrite orchestrator (provider + detection panel).
    pub humanizer: Humanizer,
    /// Completion client for the thin prompt-forwarding tools.
    pub provider: ProviderClient,
}

/// Serialize malformed JSON bodies into the same error shape as the handlers.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse { message }),
    )
    .into()
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        message: message.to_string(),
    })
}

fn provider_failure(operation: &str, err: impl std::fmt::Display) -> HttpResponse {
    error!(operation, error = %err, "provider call failed");
    HttpResponse::InternalServerError().json(ErrorResponse {
        message: err.to_string(),
    })
}

#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[post("/api/humanize")]
pub async fn humanize(
    state: web::Data<AppState>,
    body: web::Json<HumanizeRequest>,
) -> impl Responder {
    if body.text.trim().chars().count() < MIN_TEXT_LENGTH {
        return bad_request("Text must be at least 10 characters long");
    }

    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        style = body.style.as_str(),
        model = body.model.as_str(),
        chars = body.text.len(),
        "humanize.request"
    );

    let response = state.humanizer.humanize(&body).await;
    HttpResponse::Ok().json(response)
}

#[post("/api/summarize")]
pub async fn summarize(
    state: web::Data<AppState>,
    body: web::Json<SummarizeRequest>,
) -> impl Responder {
    match tools::summarize(&state.provider, &body).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => provider_failure("summarize", err),
    }
}

#[post("/api/score")]
pub async fn score(state: web::Data<AppState>, body: web::Json<ScoreRequest>) -> impl Responder {
    match tools::score(&state.provider, &body).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => provider_failure("score", err),
    }
}

#[post("/api/transform-citations")]
pub async fn transform_citations(
    state: web::Data<AppState>,
    body: web::Json<TransformCitationsRequest>,
) -> impl Responder {
    match tools::transform_citations(&state.provider, &body).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => provider_failure("transform_citations", err),
    }
}
