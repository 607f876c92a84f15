// Auxiliary Tools
// Thin prompt-forwarding operations: summarize, score, citation conversion

use crate::models::{
    ScoreRequest, ScoreResponse, SummarizeRequest, TextResponse, TransformCitationsRequest,
};
use crate::services::prompts::{
    citations_system_prompt, score_system_prompt, summarize_system_prompt,
};
use crate::services::providers::{ProviderClient, ProviderError};
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

const TOOLS_MODEL: &str = "deepseek-chat";
const TOOLS_TEMPERATURE: f64 = 0.3;

pub async fn summarize(
    provider: &ProviderClient,
    request: &SummarizeRequest,
) -> Result<TextResponse, ProviderError> {
    let system = summarize_system_prompt(request.format, request.length);
    let result = provider
        .chat(TOOLS_MODEL, &system, &request.text, TOOLS_TEMPERATURE)
        .await?;
    info!(latency_ms = result.latency_ms, "tools.summarize");
    Ok(TextResponse {
        text: result.content,
    })
}

pub async fn score(
    provider: &ProviderClient,
    request: &ScoreRequest,
) -> Result<ScoreResponse, ProviderError> {
    let system = score_system_prompt(request.criteria);
    let result = provider
        .chat(TOOLS_MODEL, &system, &request.text, TOOLS_TEMPERATURE)
        .await?;
    info!(latency_ms = result.latency_ms, "tools.score");
    parse_score(&result.content)
}

pub async fn transform_citations(
    provider: &ProviderClient,
    request: &TransformCitationsRequest,
) -> Result<TextResponse, ProviderError> {
    let system = citations_system_prompt(request.from_style, request.to_style);
    let result = provider
        .chat(TOOLS_MODEL, &system, &request.text, TOOLS_TEMPERATURE)
        .await?;
    info!(latency_ms = result.latency_ms, "tools.transform_citations");
    Ok(TextResponse {
        text: result.content,
    })
}

fn json_object_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("json object regex"))
}

/// Lenient parse: models sometimes wrap the JSON object in prose or fences.
fn parse_score(content: &str) -> Result<ScoreResponse, ProviderError> {
    let candidate = json_object_re()
        .find(content)
        .map(|m| m.as_str())
        .unwrap_or(content);
    let parsed: ScoreResponse = serde_json::from_str(candidate)
        .map_err(|e| ProviderError::JsonError(e.to_string()))?;
    Ok(ScoreResponse {
        score: parsed.score.clamp(0, 100),
        feedback: parsed.feedback,
    })
}
