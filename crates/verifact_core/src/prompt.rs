//! Request builder: instruction prompt plus structured output schema.
//!
//! The schema is not guidance — it is sent as the provider's
//! `responseSchema` constraint, so a well-behaved backend can only
//! answer in the shape the normalizer expects. The normalizer still
//! re-validates everything (see `normalize`).

use crate::verdict::Verdict;
use serde_json::{json, Value};

/// What one fact-check request sends to the model.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub instructions: String,
    pub schema: Value,
}

/// Build the fixed fact-check prompt for a claim.
///
/// The claim must be non-empty after trimming; the presentation layer
/// rejects empty input before calling this.
pub fn build(claim: &str) -> PromptRequest {
    PromptRequest {
        instructions: instructions_for(claim),
        schema: response_schema(),
    }
}

fn instructions_for(claim: &str) -> String {
    format!(
        r#"You are an expert fact checker. Analyze the claim below and nothing else.

Claim to verify: "{}"

Your task:
1. Restate the claim as a single clear sentence (normalized_claim).
2. Gather 2-6 current evidentiary sources. Prefer primary and official
   sources (government records, peer-reviewed work, statements from the
   involved parties) over opaque blogs or aggregators.
3. Decide on exactly one verdict: TRUE, FALSE, MISLEADING, or UNCERTAIN.
4. Explain your finding neutrally in at most 120 words.
5. If the evidence is insufficient or contradictory, the verdict is
   UNCERTAIN.

Never fabricate URLs. Only cite sources you actually consulted.
Respond with a single JSON object matching the required schema."#,
        claim
    )
}

/// Gemini `responseSchema` for the fact-check reply.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "verdict": {
                "type": "STRING",
                "enum": Verdict::labels(),
            },
            "confidence": {
                "type": "NUMBER",
                "description": "Confidence in the verdict, 0.0 to 1.0",
            },
            "explanation": {
                "type": "STRING",
                "description": "Concise neutral explanation, at most 120 words",
            },
            "citations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "url": { "type": "STRING" },
                        "title": { "type": "STRING" },
                    },
                    "required": ["url"],
                },
            },
            "normalized_claim": {
                "type": "STRING",
                "description": "The claim restated as one sentence",
            },
        },
        "required": ["verdict", "confidence", "explanation", "citations", "normalized_claim"],
    })
}
