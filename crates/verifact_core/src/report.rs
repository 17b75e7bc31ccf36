//! The fact-check result handed to the presentation layer.

use crate::citation::Citation;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// Confidence attached to every degraded (fallback) result.
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// One completed fact check. Constructed once per request and
/// immutable afterwards; callers always get a renderable value,
/// degraded or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckResult {
    pub verdict: Verdict,
    /// Certainty in [0.0, 1.0].
    pub confidence: f64,
    /// Concise prose explanation of the findings.
    pub explanation: String,
    /// Sanitized supporting sources; may be empty.
    pub citations: Vec<Citation>,
    /// The claim restated as a single sentence.
    pub normalized_claim: String,
}

impl FactCheckResult {
    /// Safe fallback for any failure past the configuration check:
    /// an uncertain verdict carrying a diagnostic explanation.
    pub fn indeterminate(claim: &str, explanation: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Uncertain,
            confidence: FALLBACK_CONFIDENCE,
            explanation: explanation.into(),
            citations: Vec::new(),
            normalized_claim: claim.trim().to_string(),
        }
    }
}
