//! Error types for verifact.

use thiserror::Error;

/// Errors that surface to the caller of the public API.
///
/// Only the configuration error actually escapes `fact_check`; every
/// other failure mode degrades into an `UNCERTAIN` result so the
/// presentation layer has exactly one hard error path.
#[derive(Error, Debug)]
pub enum VerifactError {
    #[error("GEMINI_API_KEY is not set. Export it before running a fact check.")]
    MissingApiKey,
}
