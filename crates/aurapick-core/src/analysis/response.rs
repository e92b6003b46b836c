//! Reading the service's answer back into a [`Verdict`].

use serde::Deserialize;
use thiserror::Error;

use super::Verdict;

/// Errors from building requests or reading responses.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Analysis response was empty")]
    EmptyResponse,

    #[error("Analysis response had no candidates")]
    NoCandidates,

    #[error("Malformed analysis JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Failed to serialize analysis request: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Parse the model's JSON text into a verdict.
///
/// Markdown code fences around the JSON are tolerated.
pub fn parse_verdict(text: &str) -> Result<Verdict, AnalysisError> {
    let clean = strip_fences(text);
    if clean.is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }
    serde_json::from_str(clean).map_err(AnalysisError::MalformedJson)
}

/// Parse a whole `generateContent` response body.
///
/// The text parts of the first candidate are concatenated and read as the
/// verdict.
pub fn parse_response(body: &str) -> Result<Verdict, AnalysisError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(AnalysisError::MalformedJson)?;
    let candidate = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or(AnalysisError::NoCandidates)?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    parse_verdict(&text)
}

fn strip_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let text = r#"{"bestCrop": "4:5 Upper", "cropAlignment": "top"}"#;
        let verdict = parse_verdict(text).unwrap();
        assert_eq!(verdict.best_crop, "4:5 Upper");
        assert_eq!(verdict.crop_alignment, "top");
    }

    #[test]
    fn test_parse_fenced_json() {
        let text = "```json\n{\"bestCrop\": \"9:16 Story\"}\n```";
        assert_eq!(parse_verdict(text).unwrap().best_crop, "9:16 Story");

        let text = "```\n{\"aestheticScore\": 12.5}\n```";
        assert_eq!(parse_verdict(text).unwrap().aesthetic_score, 12.5);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_verdict("  "), Err(AnalysisError::EmptyResponse)));
        assert!(matches!(
            parse_verdict("```json\n```"),
            Err(AnalysisError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_verdict("{not json").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedJson(_)));
        assert!(err.to_string().starts_with("Malformed analysis JSON"));
    }

    #[test]
    fn test_parse_response_envelope() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "{\"bestCrop\": \"1:1 "}, {"text": "Zoomed\"}"}]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let verdict = parse_response(body).unwrap();
        assert_eq!(verdict.best_crop, "1:1 Zoomed");
    }

    #[test]
    fn test_parse_response_without_candidates() {
        assert!(matches!(
            parse_response(r#"{"candidates": []}"#),
            Err(AnalysisError::NoCandidates)
        ));
        assert!(matches!(parse_response("{}"), Err(AnalysisError::NoCandidates)));
    }

    #[test]
    fn test_parse_response_blocked_candidate() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        assert!(matches!(parse_response(body), Err(AnalysisError::EmptyResponse)));
    }
}
