// Detection Module
// AI-detectability scoring organized into specialized submodules:
// - simulator: heuristic human-likeness scorer (pure, seedable)
// - panel: roster runner + report aggregation + risk banding
// - external: real detection-API clients with heuristic fallback

pub mod simulator;
pub mod panel;
pub mod external;

pub use simulator::{confidence_tier, DetectorSim, PatternCategory, PASS_THRESHOLD};
pub use panel::{risk_band, summarize, DetectionPanel, DEFAULT_ROSTER};
pub use external::DetectionService;
