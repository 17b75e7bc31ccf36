//! Gemini `generateContent` client.
//!
//! One outbound call per fact check, no retries, no streaming. The
//! structured output schema from the request builder is passed as the
//! provider-enforced `responseSchema`; replies are deserialized into
//! typed wire structs and handed to the normalizer as-is.

use crate::citation::Citation;
use crate::error::VerifactError;
use crate::prompt::PromptRequest;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const TIMEOUT_SECS: u64 = 60;
const TEMPERATURE: f64 = 0.2;
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Finish reason for a normally completed candidate.
pub const FINISH_STOP: &str = "STOP";
/// Finish reason when the reply hit the output token budget.
pub const FINISH_MAX_TOKENS: &str = "MAX_TOKENS";

/// Client for the Gemini REST API.
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// A missing key is the one precondition failure that surfaces to
    /// the caller instead of degrading into a fallback result.
    pub fn from_env() -> Result<Self, VerifactError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(VerifactError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue the single outbound call. Errors here are transport or
    /// provider failures; the caller folds them into a fallback result.
    pub async fn generate(&self, request: &PromptRequest) -> Result<GenerateContentResponse> {
        let url = format!("{}/{}:generateContent", GEMINI_BASE_URL, self.model);

        let payload = serde_json::json!({
            "contents": [{
                "parts": [{ "text": request.instructions }]
            }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
                "responseMimeType": "application/json",
                "responseSchema": request.schema,
            },
        });

        debug!(model = %self.model, "calling Gemini generateContent");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        if !response.status().is_success() {
            anyhow::bail!("Gemini returned error status: {}", response.status());
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response body")?;

        Ok(reply)
    }
}

/// Top-level `generateContent` reply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

/// Safety metadata attached when the prompt itself was refused.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Provider-side evidence references for a grounded reply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("");
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }

    /// Citations harvested from grounding metadata, unsanitized.
    pub fn grounding_citations(&self) -> Vec<Citation> {
        let Some(candidate) = self.candidates.first() else {
            return Vec::new();
        };
        let Some(grounding) = &candidate.grounding_metadata else {
            return Vec::new();
        };
        grounding
            .grounding_chunks
            .iter()
            .filter_map(|chunk| {
                let web = chunk.web.as_ref()?;
                let uri = web.uri.clone()?;
                Some(Citation {
                    url: uri,
                    title: web.title.clone(),
                })
            })
            .collect()
    }
}
