// Textmorph Core Services

pub mod config_store;
pub mod detection;
pub mod humanizer;
pub mod prompts;
pub mod providers;
pub mod text_stats;
pub mod tools;

pub use config_store::*;
pub use humanizer::{fallback_text, Humanizer};
pub use providers::*;
pub use text_stats::*;

// Re-export detection module functions
pub use detection::{
    confidence_tier,
    risk_band,
    summarize,
    DetectionPanel,
    DetectionService,
    DetectorSim,
    PatternCategory,
    DEFAULT_ROSTER,
    PASS_THRESHOLD,
};
