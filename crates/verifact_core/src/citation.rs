//! Citation sanitization.
//!
//! Citations come back from the model (or from provider grounding
//! metadata) and are untrusted: URLs may be relative, use odd schemes,
//! point at link shorteners, or repeat. `sanitize` enforces the
//! invariants; individual bad citations are dropped, never fatal.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Link-shortener hosts we refuse to cite. Shorteners hide the real
/// destination, which defeats the point of a citation.
const SHORTENER_HOSTS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "is.gd",
    "buff.ly",
    "cutt.ly",
    "rebrand.ly",
    "shorturl.at",
];

/// A supporting source: required URL plus optional title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Citation {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Filter a citation list down to the ones worth showing:
/// absolute http(s) URLs, no known shorteners, first occurrence
/// of each URL wins. Idempotent.
pub fn sanitize(citations: Vec<Citation>) -> Vec<Citation> {
    let mut seen: HashSet<String> = HashSet::new();
    citations
        .into_iter()
        .filter(|c| {
            if !is_acceptable_url(&c.url) {
                debug!(url = %c.url, "dropping citation with unacceptable URL");
                return false;
            }
            seen.insert(c.url.clone())
        })
        .collect()
}

fn is_acceptable_url(raw: &str) -> bool {
    let parsed = match Url::parse(raw) {
        Ok(u) => u,
        Err(_) => return false,
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }
    match parsed.host_str() {
        Some(host) => !is_shortener_host(host),
        None => false,
    }
}

fn is_shortener_host(host: &str) -> bool {
    let host = host.to_lowercase();
    SHORTENER_HOSTS
        .iter()
        .any(|s| host == *s || host.ends_with(&format!(".{}", s)))
}
