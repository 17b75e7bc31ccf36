//! Verifact core: fact-check a claim against a generative model.
//!
//! One public operation: [`fact_check`] submits a claim to Gemini with
//! a structured output constraint and returns a sanitized
//! [`FactCheckResult`]. The only hard error is a missing API key;
//! every other failure (transport, safety block, truncation, malformed
//! output) degrades into an `UNCERTAIN` result carrying a diagnostic
//! explanation, so callers have exactly one error path.
//!
//! Stateless: nothing persists between calls and there is exactly one
//! outbound request per call, with no retries.

pub mod citation;
pub mod error;
pub mod gemini;
pub mod normalize;
pub mod prompt;
pub mod report;
pub mod verdict;

pub use citation::Citation;
pub use error::VerifactError;
pub use gemini::GeminiClient;
pub use report::FactCheckResult;
pub use verdict::Verdict;

use tracing::warn;

/// Fact-check a claim using a client built from `GEMINI_API_KEY`.
///
/// Fails only when the key is missing, before any network
/// interaction. The claim should be non-empty after trimming; the
/// caller validates that.
pub async fn fact_check(claim: &str) -> Result<FactCheckResult, VerifactError> {
    let client = GeminiClient::from_env()?;
    Ok(fact_check_with(&client, claim).await)
}

/// Fact-check a claim with a pre-built client. Never fails: transport
/// and provider errors become an indeterminate result.
pub async fn fact_check_with(client: &GeminiClient, claim: &str) -> FactCheckResult {
    let claim = claim.trim();
    let request = prompt::build(claim);
    match client.generate(&request).await {
        Ok(reply) => normalize::normalize(&reply, claim),
        Err(e) => {
            warn!(error = %e, "fact check call failed");
            FactCheckResult::indeterminate(claim, format!("Error while verifying: {}", e))
        }
    }
}
