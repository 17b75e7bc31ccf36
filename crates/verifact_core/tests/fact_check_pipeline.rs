//! End-to-end tests for the request builder and response normalizer.
//!
//! These exercise the full normalize path against hand-built Gemini
//! replies, plus the configuration precondition. No network.

use verifact_core::gemini::GenerateContentResponse;
use verifact_core::report::FALLBACK_CONFIDENCE;
use verifact_core::{citation, normalize, prompt, Citation, Verdict, VerifactError};

fn reply(json: &str) -> GenerateContentResponse {
    serde_json::from_str(json).expect("test reply must deserialize")
}

fn reply_with_text(text: &str) -> GenerateContentResponse {
    reply(
        &serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] },
                "finishReason": "STOP",
            }]
        })
        .to_string(),
    )
}

#[test]
fn schema_and_prompt_agree_on_field_names() {
    let request = prompt::build("the sky is green");
    let required: Vec<&str> = request.schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();

    // A reply using exactly the schema's required fields must
    // normalize without falling back.
    let mut payload = serde_json::Map::new();
    for field in &required {
        let value = match *field {
            "verdict" => serde_json::json!("MISLEADING"),
            "confidence" => serde_json::json!(0.6),
            "explanation" => serde_json::json!("partly right, partly wrong"),
            "citations" => serde_json::json!([{"url": "https://example.com/a"}]),
            "normalized_claim" => serde_json::json!("The sky is green."),
            other => panic!("unexpected required field {}", other),
        };
        payload.insert(field.to_string(), value);
    }
    let text = serde_json::Value::Object(payload).to_string();

    let result = normalize::normalize(&reply_with_text(&text), "the sky is green");
    assert_eq!(result.verdict, Verdict::Misleading);
    assert_eq!(result.confidence, 0.6);
    assert_eq!(result.citations.len(), 1);
    assert_eq!(result.normalized_claim, "The sky is green.");
}

#[test]
fn fenced_and_unfenced_replies_normalize_identically() {
    let body = r#"{"verdict": "TRUE", "confidence": 0.8, "explanation": "checks out",
        "citations": [{"url": "https://example.gov/x", "title": "X"}],
        "normalized_claim": "It is so."}"#;
    let plain = normalize::normalize(&reply_with_text(body), "claim");
    let fenced = normalize::normalize(
        &reply_with_text(&format!("```json\n{}\n```", body)),
        "claim",
    );
    assert_eq!(plain, fenced);
    assert_eq!(plain.verdict, Verdict::True);
}

#[test]
fn degraded_results_are_always_renderable() {
    // Every failure shape still yields a complete result object.
    let cases = [
        r#"{"candidates": []}"#,
        r#"{"candidates": [], "promptFeedback": {"blockReason": "SAFETY"}}"#,
        r#"{"candidates": [{"content": {"parts": [{"text": "garbage"}]}, "finishReason": "STOP"}]}"#,
        r#"{"candidates": [{"content": {"parts": [{"text": "{\"ver"}]}, "finishReason": "MAX_TOKENS"}]}"#,
    ];
    for case in cases {
        let result = normalize::normalize(&reply(case), "  some claim  ");
        assert_eq!(result.verdict, Verdict::Uncertain);
        assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
        assert!(!result.explanation.is_empty());
        assert!(result.citations.is_empty());
        assert_eq!(result.normalized_claim, "some claim");
    }
}

#[test]
fn citation_sanitization_composes_with_normalization() {
    let text = r#"{"verdict": "TRUE", "confidence": 0.9, "explanation": "e",
        "citations": [
            {"url": "https://a.example/1", "title": "A"},
            {"url": "ftp://b.example/2"},
            {"url": "https://bit.ly/short"},
            {"url": "https://a.example/1", "title": "A again"},
            {"url": "https://c.example/3"}
        ],
        "normalized_claim": "c"}"#;
    let result = normalize::normalize(&reply_with_text(text), "c");
    assert_eq!(result.citations.len(), 2);
    assert_eq!(result.citations[0].url, "https://a.example/1");
    assert_eq!(result.citations[0].title.as_deref(), Some("A"));
    assert_eq!(result.citations[1].url, "https://c.example/3");

    // And re-sanitizing what normalize produced changes nothing.
    let again = citation::sanitize(result.citations.clone());
    assert_eq!(again, result.citations);
}

#[test]
fn sanitize_accepts_arbitrary_garbage() {
    let out = citation::sanitize(vec![
        Citation::new(""),
        Citation::new("not a url"),
        Citation::new("javascript:alert(1)"),
        Citation::new("https://"),
    ]);
    assert!(out.is_empty());
}

#[tokio::test]
async fn missing_api_key_fails_before_any_network_call() {
    // Sole test that touches the environment.
    std::env::remove_var("GEMINI_API_KEY");
    let err = verifact_core::fact_check("some claim").await.unwrap_err();
    assert!(matches!(err, VerifactError::MissingApiKey));
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}
