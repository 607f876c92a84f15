// Textmorph Data Models
// Wire types for the humanize pipeline and the detection panel

use serde::{Deserialize, Serialize};

// ============ Humanize Options ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WritingStyle {
    #[default]
    Casual,
    Formal,
    Academic,
    Creative,
    Technical,
    Conversational,
}

impl WritingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Academic => "academic",
            Self::Creative => "creative",
            Self::Technical => "technical",
            Self::Conversational => "conversational",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTone {
    #[default]
    Neutral,
    Positive,
    Critical,
}

impl EmotionalTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParaphrasingLevel {
    Minimal,
    #[default]
    Moderate,
    Extensive,
}

impl ParaphrasingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Moderate => "moderate",
            Self::Extensive => "extensive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SentenceStructure {
    Simple,
    #[default]
    Varied,
    Complex,
}

impl SentenceStructure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Varied => "varied",
            Self::Complex => "complex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyLevel {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl VocabularyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnglishVariant {
    #[default]
    American,
    British,
}

impl EnglishVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::American => "American",
            Self::British => "British",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionModel {
    #[default]
    DeepseekChat,
    DeepseekCoder,
    DeepseekInstruct,
    DeepseekV3,
}

impl CompletionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeepseekChat => "deepseek-chat",
            Self::DeepseekCoder => "deepseek-coder",
            Self::DeepseekInstruct => "deepseek-instruct",
            Self::DeepseekV3 => "deepseek-v3",
        }
    }
}

// ============ Humanize Request / Response ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeRequest {
    pub text: String,
    #[serde(default)]
    pub style: WritingStyle,
    #[serde(default)]
    pub emotion: EmotionalTone,
    #[serde(default)]
    pub paraphrasing_level: ParaphrasingLevel,
    #[serde(default)]
    pub sentence_structure: SentenceStructure,
    #[serde(default)]
    pub vocabulary_level: VocabularyLevel,
    #[serde(default)]
    pub english_variant: EnglishVariant,
    #[serde(default)]
    pub model: CompletionModel,
    #[serde(default = "default_true")]
    pub bypass_ai_detection: bool,
    #[serde(default = "default_true")]
    pub improve_grammar: bool,
    #[serde(default = "default_true")]
    pub preserve_key_points: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub word_count: usize,
    pub reading_time: u32,
    pub ai_detection_risk: AiDetectionRisk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeResponse {
    pub text: String,
    pub stats: TextStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_tests: Option<Vec<DetectionResult>>,
}

// ============ Detection ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionStatus {
    Passed,
    Failed,
    Error,
}

/// Outcome of one (text, detector) evaluation. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub detector_name: String,
    /// 0-100, higher = more human-like. Zero when status is `error`.
    pub human_score: i32,
    /// Complement of `human_score` for non-error results.
    pub ai_score: i32,
    pub status: DetectionStatus,
    /// Banded confidence label, or the error description for `error` results.
    pub confidence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Passed,
    Mixed,
    Failed,
}

/// Aggregate over one text's detection results, error results excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub overall_status: OverallStatus,
    pub passed_count: usize,
    pub total_count: usize,
    pub average_human_score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiDetectionRisk {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
}

// ============ Auxiliary Tools ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryFormat {
    #[default]
    Paragraph,
    BulletPoints,
    KeyInsights,
}

impl SummaryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "a single flowing paragraph",
            Self::BulletPoints => "concise bullet points",
            Self::KeyInsights => "a list of key insights",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub format: SummaryFormat,
    #[serde(default)]
    pub length: SummaryLength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCriteria {
    #[default]
    Grammar,
    Coherence,
    Clarity,
    Academic,
    Formal,
}

impl ScoreCriteria {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Coherence => "coherence",
            Self::Clarity => "clarity",
            Self::Academic => "academic",
            Self::Formal => "formal",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub text: String,
    #[serde(default)]
    pub criteria: ScoreCriteria,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub score: i32,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CitationStyle {
    #[serde(rename = "APA")]
    Apa,
    #[serde(rename = "MLA")]
    Mla,
    Chicago,
    Harvard,
}

impl CitationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apa => "APA",
            Self::Mla => "MLA",
            Self::Chicago => "Chicago",
            Self::Harvard => "Harvard",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformCitationsRequest {
    pub text: String,
    pub from_style: CitationStyle,
    pub to_style: CitationStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

// ============ Default Value Functions ============

fn default_true() -> bool { true }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: HumanizeRequest =
            serde_json::from_str(r#"{"text":"some input text here"}"#).unwrap();
        assert_eq!(req.style, WritingStyle::Casual);
        assert_eq!(req.paraphrasing_level, ParaphrasingLevel::Moderate);
        assert_eq!(req.model, CompletionModel::DeepseekChat);
        assert!(req.bypass_ai_detection);
        assert!(req.improve_grammar);
        assert!(req.preserve_key_points);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&CompletionModel::DeepseekV3).unwrap(),
            "\"deepseek-v3\""
        );
        assert_eq!(
            serde_json::to_string(&AiDetectionRisk::VeryLow).unwrap(),
            "\"Very Low\""
        );
        assert_eq!(
            serde_json::to_string(&SummaryFormat::BulletPoints).unwrap(),
            "\"bullet-points\""
        );
        assert_eq!(serde_json::to_string(&CitationStyle::Apa).unwrap(), "\"APA\"");
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let result: Result<HumanizeRequest, _> =
            serde_json::from_str(r#"{"text":"some input text here","style":"sarcastic"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_detection_result_roundtrip() {
        let result = DetectionResult {
            detector_name: "GPTZero".to_string(),
            human_score: 72,
            ai_score: 28,
            status: DetectionStatus::Passed,
            confidence: "High Confidence (72% Human)".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"detectorName\":\"GPTZero\""));
        assert!(json.contains("\"status\":\"passed\""));
    }
}
