//! Response normalizer: raw model reply -> `FactCheckResult`.
//!
//! Total and non-panicking. Every failure mode past the outbound call
//! degrades into an indeterminate result with a diagnostic
//! explanation; the presentation layer never sees an error from this
//! stage. Robust against the usual LLM output variations: fenced JSON,
//! missing fields, stringly-typed numbers, out-of-range confidence.

use crate::citation::{self, Citation};
use crate::gemini::{GenerateContentResponse, FINISH_MAX_TOKENS, FINISH_STOP};
use crate::report::FactCheckResult;
use crate::verdict::Verdict;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Loosely-typed decode target for the model's JSON. Required-field
/// validation happens after decoding so a missing field produces a
/// schema diagnostic instead of a parse error.
#[derive(Debug, Deserialize)]
struct RawReport {
    verdict: Option<String>,
    confidence: Option<Value>,
    explanation: Option<String>,
    #[serde(default)]
    citations: Vec<RawCitation>,
    normalized_claim: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCitation {
    url: Option<String>,
    title: Option<String>,
}

/// Normalize a raw Gemini reply into a renderable result.
pub fn normalize(reply: &GenerateContentResponse, claim: &str) -> FactCheckResult {
    let Some(text) = reply.text() else {
        return FactCheckResult::indeterminate(claim, empty_reply_diagnostic(reply));
    };

    let json_str = extract_json(&text);

    let raw: RawReport = match serde_json::from_str(&json_str) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "model reply was not valid JSON");
            let message = if reply.finish_reason() == Some(FINISH_MAX_TOKENS) {
                "The reply was too long and got cut off before completion. \
                 Try a shorter or more specific claim."
            } else {
                "The reply could not be structured into the expected format."
            };
            return FactCheckResult::indeterminate(claim, message);
        }
    };

    let (Some(label), Some(explanation)) = (raw.verdict, raw.explanation) else {
        return FactCheckResult::indeterminate(
            claim,
            "The reply did not conform to the expected schema.",
        );
    };
    if explanation.trim().is_empty() {
        return FactCheckResult::indeterminate(
            claim,
            "The reply did not conform to the expected schema.",
        );
    }

    let mut citations = citation::sanitize(
        raw.citations
            .into_iter()
            .filter_map(|c| {
                Some(Citation {
                    url: c.url?,
                    title: c.title,
                })
            })
            .collect(),
    );
    // The model may have leaned on provider-side search instead of
    // listing sources inline; grounding chunks are the backup.
    if citations.is_empty() {
        citations = citation::sanitize(reply.grounding_citations());
    }

    let normalized_claim = raw
        .normalized_claim
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| claim.trim().to_string());

    FactCheckResult {
        verdict: Verdict::from_label(&label),
        confidence: clamp_confidence(raw.confidence.as_ref()),
        explanation: explanation.trim().to_string(),
        citations,
        normalized_claim,
    }
}

fn empty_reply_diagnostic(reply: &GenerateContentResponse) -> String {
    if let Some(reason) = reply.block_reason() {
        return format!(
            "The provider declined to generate a reply (block reason: {}).",
            reason
        );
    }
    match reply.finish_reason() {
        Some(reason) if reason != FINISH_STOP => {
            format!("The model returned no usable text (finish reason: {}).", reason)
        }
        _ => "The model returned an empty reply.".to_string(),
    }
}

/// Clamp a confidence value into [0.0, 1.0].
///
/// Accepts a JSON number or a numeric string; anything else, and
/// non-finite numbers, become 0.
fn clamp_confidence(value: Option<&Value>) -> f64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => n.clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Strip a markdown code fence (``` or ```json) wrapping the reply.
fn extract_json(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() >= 3 && lines[lines.len() - 1].trim_start().starts_with("```") {
            return lines[1..lines.len() - 1].join("\n");
        }
    }
    trimmed.to_string()
}
