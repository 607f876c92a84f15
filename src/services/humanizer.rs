// Humanize Orchestrator
// Builds the instruction prompt, calls the completion provider, and scores
// the outcome with the detection roster. A failed provider call substitutes a
// deterministic local rewrite so callers always get a scored response.

use crate::models::{
    EmotionalTone, HumanizeRequest, HumanizeResponse, TextStats, WritingStyle,
};
use crate::services::detection::external::DetectionService;
use crate::services::detection::panel::risk_band;
use crate::services::prompts::humanize_system_prompt;
use crate::services::providers::ProviderClient;
use crate::services::text_stats::{count_words, reading_time_minutes};
use tracing::{info, warn};

const HUMANIZE_TEMPERATURE: f64 = 0.7;

pub struct Humanizer {
    provider: ProviderClient,
    detection: DetectionService,
}

impl Humanizer {
    pub fn new(provider: ProviderClient, detection: DetectionService) -> Self {
        Self { provider, detection }
    }

    /// Rewrite `request.text` per the option bundle. Single attempt against
    /// the provider, then the local fallback; both paths run the roster.
    pub async fn humanize(&self, request: &HumanizeRequest) -> HumanizeResponse {
        let system = humanize_system_prompt(request);

        let text = match self
            .provider
            .chat(request.model.as_str(), &system, &request.text, HUMANIZE_TEMPERATURE)
            .await
        {
            Ok(result) => {
                info!(
                    model = request.model.as_str(),
                    latency_ms = result.latency_ms,
                    "humanize.completion"
                );
                result.content
            }
            Err(err) => {
                warn!(error = %err, "humanize.provider_failed, using local fallback");
                fallback_text(request)
            }
        };

        let (results, report) = self.detection.run_detection(&text).await;
        let risk = risk_band(&report);
        info!(
            passed = report.passed_count,
            total = report.total_count,
            average_human_score = report.average_human_score,
            "humanize.detection"
        );

        HumanizeResponse {
            stats: TextStats {
                word_count: count_words(&text),
                reading_time: reading_time_minutes(&text),
                ai_detection_risk: risk,
            },
            detection_tests: Some(results),
            text,
        }
    }
}

/// Deterministic local rewrite used when the completion call fails.
pub fn fallback_text(request: &HumanizeRequest) -> String {
    let mut out = String::from(style_intro(request.style));
    out.push_str(&simple_transformation(&request.text));
    out.push(' ');
    out.push_str(emotion_conclusion(request.emotion));
    if request.bypass_ai_detection {
        out.push_str(
            " I'm not entirely sure about all of this, but it's what makes sense to me \
based on what I've learned and experienced.",
        );
    }
    out
}

fn style_intro(style: WritingStyle) -> &'static str {
    match style {
        WritingStyle::Casual => "So here's what I think... ",
        WritingStyle::Formal => "Upon consideration, the following can be stated: ",
        WritingStyle::Academic => "Research and analysis suggest the following interpretation: ",
        WritingStyle::Creative => "Imagine, if you will, a perspective where: ",
        WritingStyle::Technical => "Technical assessment yields the following observations: ",
        WritingStyle::Conversational => "Let's chat about this for a sec. ",
    }
}

fn emotion_conclusion(emotion: EmotionalTone) -> &'static str {
    match emotion {
        EmotionalTone::Neutral => "That's my objective assessment of the matter.",
        EmotionalTone::Positive => "Overall, I'm quite optimistic about these points!",
        EmotionalTone::Critical => {
            "We should, however, carefully examine these claims before proceeding."
        }
    }
}

fn simple_transformation(input: &str) -> String {
    if input.len() < 50 {
        return format!(
            "The key point seems to be about {}, which I find to be a fascinating topic \
worth exploring further. There are several angles to consider when thinking about this.",
            input.to_lowercase()
        );
    }

    let sentences: Vec<&str> = input
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.len() > 1 {
        let mut result = String::new();
        for sentence in sentences.iter().take(5) {
            result.push_str(&format!("I believe that {}. ", sentence.to_lowercase()));
        }
        result.push_str("This is a complex topic with various perspectives to consider. ");
        return result;
    }

    format!(
        "After analyzing this information, I'd summarize it as follows: {} This presents \
several interesting implications for further consideration.",
        input
    )
}
