// Heuristic Detection Simulator
// Rule-based human-likeness scorer standing in for external detection services.
// Pattern battery + tiered weights + bounded per-detector jitter.

use crate::models::{DetectionResult, DetectionStatus};
use regex::Regex;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Tuned by trial, not derived. Treat as configuration, not law.
pub const BASE_SCORE: i32 = 25;
pub const MIN_HUMAN_SCORE: i32 = 15;
pub const MAX_HUMAN_SCORE: i32 = 98;
pub const PASS_THRESHOLD: i32 = 65;

/// One category of humanness signal. Weights are tiered: chaos patterns
/// (interruptions, stream-of-consciousness, self-correction, personal
/// stories) are the strongest discriminators against template-like phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCategory {
    PersonalPronouns,
    FillerWords,
    Contractions,
    EmotionalLanguage,
    ChaosMarkers,
    Interruptions,
    StreamOfConsciousness,
    PersonalStories,
    SelfCorrection,
    Typos,
    InconsistentCaps,
    VagueReferences,
}

pub const ALL_CATEGORIES: [PatternCategory; 12] = [
    PatternCategory::PersonalPronouns,
    PatternCategory::FillerWords,
    PatternCategory::Contractions,
    PatternCategory::EmotionalLanguage,
    PatternCategory::ChaosMarkers,
    PatternCategory::Interruptions,
    PatternCategory::StreamOfConsciousness,
    PatternCategory::PersonalStories,
    PatternCategory::SelfCorrection,
    PatternCategory::Typos,
    PatternCategory::InconsistentCaps,
    PatternCategory::VagueReferences,
];

impl PatternCategory {
    /// Score contribution when the category's pattern matches.
    pub fn weight(&self) -> i32 {
        match self {
            Self::PersonalPronouns => 15,
            Self::FillerWords => 20,
            Self::Contractions => 12,
            Self::EmotionalLanguage => 18,
            Self::ChaosMarkers => 25,
            Self::Interruptions => 30,
            Self::StreamOfConsciousness => 22,
            Self::PersonalStories => 20,
            Self::SelfCorrection => 18,
            Self::Typos => 15,
            Self::InconsistentCaps => 12,
            Self::VagueReferences => 10,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    fn regex(&self) -> &'static Regex {
        match self {
            Self::PersonalPronouns => pronouns_re(),
            Self::FillerWords => fillers_re(),
            Self::Contractions => contractions_re(),
            Self::EmotionalLanguage => emotional_re(),
            Self::ChaosMarkers => chaos_re(),
            Self::Interruptions => interruptions_re(),
            Self::StreamOfConsciousness => stream_re(),
            Self::PersonalStories => stories_re(),
            Self::SelfCorrection => self_correction_re(),
            Self::Typos => typos_re(),
            Self::InconsistentCaps => caps_re(),
            Self::VagueReferences => vague_re(),
        }
    }
}

fn pronouns_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(i|me|my|mine|myself|we|us|our)\b").expect("pronouns regex")
    })
}

fn fillers_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(um|uh|like|you know|i mean|i think|actually|basically|literally|honestly|omg|lol|tbh|ngl|fr)\b",
        )
        .expect("fillers regex")
    })
}

fn contractions_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(don't|won't|can't|i'm|we're|it's|that's|gonna|wanna|coulda|shoulda)\b",
        )
        .expect("contractions regex")
    })
}

fn emotional_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(love|hate|excited|frustrated|amazing|terrible|annoying|awesome|great|dude|this is|i love|so much)\b",
        )
        .expect("emotional regex")
    })
}

fn chaos_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(wait|so like|idk|maybe im wrong|could be totally|ugh|btw|periodt|whatever)\b",
        )
        .expect("chaos regex")
    })
}

fn interruptions_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\([^)]*cat[^)]*keyboard[^)]*\)|\.\.\.and oh wait|wait what was i saying")
            .expect("interruptions regex")
    })
}

fn stream_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\.\.\.|--|\band then\b|\boh wait\b|\bactually no\b")
            .expect("stream regex")
    })
}

fn stories_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(my mom|my friend|happened to me|last week|this reminds me|netflix show)\b")
            .expect("stories regex")
    })
}

fn self_correction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(i mean|what i'm trying to say|well actually|on second thought)\b")
            .expect("self correction regex")
    })
}

fn typos_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(thier|recieve|seperate|occured|definately|wierd|ducking)\b")
            .expect("typos regex")
    })
}

fn caps_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Deliberately case-sensitive: detects aBc-style casing runs.
    RE.get_or_init(|| Regex::new(r"[a-z][A-Z][a-z]|[A-Z][a-z][A-Z]").expect("caps regex"))
}

fn vague_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(that thing|you know what i mean|some guy|this one time)\b")
            .expect("vague regex")
    })
}

/// Per-detector jitter bounds simulating inter-vendor variance.
/// Turnitin is lenient on casual writing; Originality.ai is strict.
fn jitter_range(detector_name: &str) -> (f64, f64) {
    match detector_name {
        "GPTZero" => (-4.0, 4.0),
        "Originality.ai" => (-3.0, 3.0),
        "Turnitin" => (-2.0, 8.0),
        "Copyleaks" => (-3.0, 4.0),
        "Writer.com" => (-1.0, 8.0),
        _ => (-3.0, 3.0),
    }
}

/// Confidence tier for a clamped human score.
pub fn confidence_tier(human_score: i32) -> &'static str {
    if human_score >= 90 {
        "Very High"
    } else if human_score >= 75 {
        "High"
    } else if human_score >= 60 {
        "Medium"
    } else if human_score >= 40 {
        "Low"
    } else {
        "Very Low"
    }
}

/// Heuristic detector with an injected noise seed. All draws are hash-based,
/// so the same seed, text and detector name always score identically.
#[derive(Debug, Clone, Copy)]
pub struct DetectorSim {
    seed: u64,
}

impl DetectorSim {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Uniform draw in [0, 1) keyed on seed, detector and text.
    fn noise(&self, detector_name: &str, text: &str) -> f64 {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        detector_name.hash(&mut hasher);
        text.hash(&mut hasher);
        (hasher.finish() % 10_000) as f64 / 10_000.0
    }

    /// Score `text` as one named detector would. Never fails; empty or
    /// whitespace-only input just matches no categories.
    pub fn evaluate(&self, text: &str, detector_name: &str) -> DetectionResult {
        let mut human_score = BASE_SCORE;
        for category in ALL_CATEGORIES {
            if category.matches(text) {
                human_score += category.weight();
            }
        }

        let (lo, hi) = jitter_range(detector_name);
        let jitter = lo + self.noise(detector_name, text) * (hi - lo);
        let human_score = ((human_score as f64 + jitter).round() as i32)
            .clamp(MIN_HUMAN_SCORE, MAX_HUMAN_SCORE);
        let ai_score = 100 - human_score;

        let status = if human_score >= PASS_THRESHOLD {
            DetectionStatus::Passed
        } else {
            DetectionStatus::Failed
        };

        DetectionResult {
            detector_name: detector_name.to_string(),
            human_score,
            ai_score,
            status,
            confidence: format!(
                "{} Confidence ({}% Human)",
                confidence_tier(human_score),
                human_score
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHATTY: &str = "I think this is really great, you know?";
    const STERILE: &str = "The quarterly report shows revenue increased.";

    #[test]
    fn test_score_complement_and_bounds() {
        let sim = DetectorSim::new(7);
        for name in ["GPTZero", "Originality.ai", "Turnitin", "Copyleaks", "Writer.com"] {
            let r = sim.evaluate(CHATTY, name);
            assert_eq!(r.human_score + r.ai_score, 100);
            assert!((MIN_HUMAN_SCORE..=MAX_HUMAN_SCORE).contains(&r.human_score));
            assert_eq!(
                r.status == DetectionStatus::Passed,
                r.human_score >= PASS_THRESHOLD
            );
        }
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let a = DetectorSim::new(42).evaluate(CHATTY, "GPTZero");
        let b = DetectorSim::new(42).evaluate(CHATTY, "GPTZero");
        assert_eq!(a.human_score, b.human_score);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn test_chatty_text_passes_everywhere() {
        // pronoun + filler + emotional hits put the score well past threshold
        // even at the bottom of every jitter range.
        let sim = DetectorSim::new(1);
        for name in ["GPTZero", "Originality.ai", "Turnitin", "Copyleaks", "Writer.com"] {
            let r = sim.evaluate(CHATTY, name);
            assert_eq!(r.status, DetectionStatus::Passed, "{name}: {}", r.human_score);
        }
    }

    #[test]
    fn test_sterile_text_fails_everywhere() {
        // zero category matches: base score plus jitter never reaches 65
        let sim = DetectorSim::new(1);
        for name in ["GPTZero", "Originality.ai", "Turnitin", "Copyleaks", "Writer.com"] {
            let r = sim.evaluate(STERILE, name);
            assert_eq!(r.status, DetectionStatus::Failed, "{name}: {}", r.human_score);
            assert!(r.human_score <= BASE_SCORE + 8);
        }
    }

    #[test]
    fn test_empty_text_yields_valid_result() {
        let r = DetectorSim::new(3).evaluate("", "GPTZero");
        assert_eq!(r.status, DetectionStatus::Failed);
        assert_eq!(r.human_score + r.ai_score, 100);
        assert!(r.human_score >= MIN_HUMAN_SCORE);
    }

    #[test]
    fn test_chaos_patterns_outweigh_lexical_ones() {
        assert!(
            PatternCategory::Interruptions.weight() > PatternCategory::PersonalPronouns.weight()
        );
        assert!(
            PatternCategory::ChaosMarkers.weight() > PatternCategory::Contractions.weight()
        );
    }

    #[test]
    fn test_category_matching() {
        assert!(PatternCategory::Typos.matches("I recieve mail"));
        assert!(PatternCategory::InconsistentCaps.matches("this is wEird casing"));
        assert!(!PatternCategory::InconsistentCaps.matches("Plain Sentence Case"));
        assert!(PatternCategory::StreamOfConsciousness.matches("so... where was I"));
        assert!(PatternCategory::PersonalStories.matches("my friend told me about it"));
        assert!(!PatternCategory::PersonalPronouns.matches("The report is final."));
    }

    #[test]
    fn test_confidence_tier_banding() {
        assert_eq!(confidence_tier(95), "Very High");
        assert_eq!(confidence_tier(90), "Very High");
        assert_eq!(confidence_tier(75), "High");
        assert_eq!(confidence_tier(60), "Medium");
        assert_eq!(confidence_tier(40), "Low");
        assert_eq!(confidence_tier(39), "Very Low");
    }

    #[test]
    fn test_confidence_label_format() {
        let r = DetectorSim::new(9).evaluate(STERILE, "Copyleaks");
        let expected = format!(
            "{} Confidence ({}% Human)",
            confidence_tier(r.human_score),
            r.human_score
        );
        assert_eq!(r.confidence, expected);
    }
}
