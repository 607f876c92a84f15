// External Detection APIs
// Real detection-service clients layered over the panel. A detector with no
// configured credential is answered by the simulator; a configured call that
// errors is recorded as one status=error result and excluded from the report.

use crate::models::{DetectionReport, DetectionResult, DetectionStatus};
use crate::services::providers::get_api_key;
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;
use tracing::{info, warn};

use super::panel::{summarize, DetectionPanel};

const GPTZERO_DEFAULT_URL: &str = "https://api.gptzero.me/v2/predict/text";
const ORIGINALITY_DEFAULT_URL: &str = "https://api.originality.ai/api/v1/scan/ai";
const DETECTION_TIMEOUT_SECS: u64 = 30;

/// Detection roster runner that prefers real detection APIs where a
/// credential is configured and simulates the rest.
pub struct DetectionService {
    client: Client,
    panel: DetectionPanel,
    gptzero_url: String,
    originality_url: String,
}

impl DetectionService {
    pub fn new(panel: DetectionPanel) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DETECTION_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        let gptzero_url =
            env::var("GPTZERO_API_URL").unwrap_or_else(|_| GPTZERO_DEFAULT_URL.to_string());
        let originality_url =
            env::var("ORIGINALITY_API_URL").unwrap_or_else(|_| ORIGINALITY_DEFAULT_URL.to_string());
        Self {
            client,
            panel,
            gptzero_url,
            originality_url,
        }
    }

    pub fn with_default_roster(seed: u64) -> Self {
        Self::new(DetectionPanel::with_default_roster(seed))
    }

    /// Evaluate `text` against the full roster in order. Never fails; every
    /// roster entry yields exactly one result.
    pub async fn run_detection(&self, text: &str) -> (Vec<DetectionResult>, DetectionReport) {
        let roster: Vec<String> = self.panel.roster().to_vec();
        let mut results = Vec::with_capacity(roster.len());
        for name in &roster {
            results.push(self.run_one(text, name).await);
        }
        let report = summarize(&results);
        (results, report)
    }

    async fn run_one(&self, text: &str, name: &str) -> DetectionResult {
        let outcome = match name {
            "GPTZero" => get_api_key("gptzero")
                .map(|key| (key, ExternalApi::GptZero)),
            "Originality.ai" => get_api_key("originality")
                .map(|key| (key, ExternalApi::Originality)),
            _ => None,
        };

        let Some((key, api)) = outcome else {
            return self.panel.evaluate(text, name);
        };

        let call = match api {
            ExternalApi::GptZero => self.call_gptzero(text, &key).await,
            ExternalApi::Originality => self.call_originality(text, &key).await,
        };
        match call {
            Ok(result) => {
                info!(detector = name, human_score = result.human_score, "detection.external");
                result
            }
            Err(err) => {
                warn!(detector = name, error = %err, "detection.external_failed");
                error_result(name, &err)
            }
        }
    }

    async fn call_gptzero(&self, text: &str, api_key: &str) -> Result<DetectionResult, String> {
        let response = self
            .client
            .post(&self.gptzero_url)
            .header("x-api-key", api_key)
            .json(&json!({ "document": text }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("status {}", status.as_u16()));
        }
        let data: Value = response.json().await.map_err(|e| e.to_string())?;

        let generated_prob = data["documents"][0]["average_generated_prob"]
            .as_f64()
            .unwrap_or(0.5);
        Ok(DetectionResult {
            detector_name: "GPTZero".to_string(),
            human_score: ((1.0 - generated_prob) * 100.0).round() as i32,
            ai_score: (generated_prob * 100.0).round() as i32,
            status: threshold_status(generated_prob),
            confidence: data["documents"][0]["class"]
                .as_str()
                .unwrap_or("Unknown")
                .to_string(),
        })
    }

    async fn call_originality(&self, text: &str, api_key: &str) -> Result<DetectionResult, String> {
        let response = self
            .client
            .post(&self.originality_url)
            .header("X-OAI-API-KEY", api_key)
            .json(&json!({ "content": text }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("status {}", status.as_u16()));
        }
        let data: Value = response.json().await.map_err(|e| e.to_string())?;

        let ai_prob = data["score"]["ai"].as_f64().unwrap_or(0.5);
        let flagged = data["score"]["fake"].as_bool().unwrap_or(false);
        Ok(DetectionResult {
            detector_name: "Originality.ai".to_string(),
            human_score: ((1.0 - ai_prob) * 100.0).round() as i32,
            ai_score: (ai_prob * 100.0).round() as i32,
            status: threshold_status(ai_prob),
            confidence: if flagged {
                "High AI Detection".to_string()
            } else {
                "Likely Human".to_string()
            },
        })
    }
}

enum ExternalApi {
    GptZero,
    Originality,
}

fn threshold_status(generated_prob: f64) -> DetectionStatus {
    if generated_prob < 0.3 {
        DetectionStatus::Passed
    } else {
        DetectionStatus::Failed
    }
}

fn error_result(name: &str, message: &str) -> DetectionResult {
    let mut short = message.to_string();
    if short.len() > 50 {
        short.truncate(50);
        short.push_str("...");
    }
    DetectionResult {
        detector_name: name.to_string(),
        human_score: 0,
        ai_score: 0,
        status: DetectionStatus::Error,
        confidence: format!("Error: {}", short),
    }
}
