// Detection Panel
// Runs the heuristic simulator across a roster of named detectors and
// aggregates the per-detector results into one report.

use crate::models::{
    AiDetectionRisk, DetectionReport, DetectionResult, DetectionStatus, OverallStatus,
};
use super::simulator::DetectorSim;

/// Default roster, in display order.
pub const DEFAULT_ROSTER: [&str; 5] = [
    "GPTZero",
    "Originality.ai",
    "Copyleaks",
    "Turnitin",
    "Writer.com",
];

/// A fixed, ordered roster of simulated detectors. The roster is explicit
/// configuration; any size including zero is valid.
#[derive(Debug, Clone)]
pub struct DetectionPanel {
    roster: Vec<String>,
    sim: DetectorSim,
}

impl DetectionPanel {
    pub fn new(roster: Vec<String>, seed: u64) -> Self {
        Self {
            roster,
            sim: DetectorSim::new(seed),
        }
    }

    pub fn with_default_roster(seed: u64) -> Self {
        Self::new(DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(), seed)
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Evaluate `text` as one named detector would.
    pub fn evaluate(&self, text: &str, detector_name: &str) -> DetectionResult {
        self.sim.evaluate(text, detector_name)
    }

    /// Evaluate `text` against every detector in roster order. Never fails.
    pub fn run_all(&self, text: &str) -> (Vec<DetectionResult>, DetectionReport) {
        let results: Vec<DetectionResult> = self
            .roster
            .iter()
            .map(|name| self.sim.evaluate(text, name))
            .collect();
        let report = summarize(&results);
        (results, report)
    }
}

/// Derive the aggregate report from a result set. Error results contribute
/// nothing: they are excluded from counts and from the average.
pub fn summarize(results: &[DetectionResult]) -> DetectionReport {
    let valid: Vec<&DetectionResult> = results
        .iter()
        .filter(|r| r.status != DetectionStatus::Error)
        .collect();
    let passed_count = valid
        .iter()
        .filter(|r| r.status == DetectionStatus::Passed)
        .count();
    let total_count = valid.len();

    let average_human_score = if total_count > 0 {
        let sum: i32 = valid.iter().map(|r| r.human_score).sum();
        (sum as f64 / total_count as f64).round() as i32
    } else {
        0
    };

    let overall_status = if total_count > 0 && passed_count == total_count {
        OverallStatus::Passed
    } else if passed_count * 2 > total_count {
        OverallStatus::Mixed
    } else {
        OverallStatus::Failed
    };

    DetectionReport {
        overall_status,
        passed_count,
        total_count,
        average_human_score,
    }
}

/// Map the report's pass rate into the four risk bands.
pub fn risk_band(report: &DetectionReport) -> AiDetectionRisk {
    if report.total_count == 0 {
        return AiDetectionRisk::High;
    }
    let pass_rate = report.passed_count as f64 / report.total_count as f64;
    if pass_rate >= 0.8 {
        AiDetectionRisk::VeryLow
    } else if pass_rate >= 0.6 {
        AiDetectionRisk::Low
    } else if pass_rate >= 0.4 {
        AiDetectionRisk::Medium
    } else {
        AiDetectionRisk::High
    }
}
