//! Structured field extraction from a spoken-introduction transcript.
//! The LLM is asked for a fixed-schema JSON object; the response is treated
//! as an untrusted payload and parsed through the typed `ProfilePatch`.

use crate::errors::AppError;
use crate::llm_client::{GeminiClient, LlmError};
use crate::models::profile::ProfilePatch;

/// Extraction prompt. Replace `{transcript}` before sending.
/// Fields the transcript does not mention must be omitted, so the merge
/// leaves the user's prior values untouched.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract structured profile fields from the following spoken self-introduction transcript.

Return a JSON object with this EXACT schema, omitting any field the transcript does not mention:
{
  "name": "Amina Begum",
  "age": 19,
  "education": "Completed secondary education from Government Girls School",
  "skills": ["Tailoring", "Basic Computer", "Communication"],
  "experience": "Helped run a small tailoring unit in her village",
  "courses": [
    {"course_name": "Digital Literacy for Women", "marks": "87%", "date": "2024-10-15"}
  ]
}

Rules:
- Respond with valid JSON only. Do NOT use markdown code fences.
- Do NOT include any text outside the JSON object.
- Do NOT invent fields the speaker did not state.
- "age" is a non-negative integer; "marks" and "date" are verbatim strings.

TRANSCRIPT:
{transcript}"#;

/// Runs the extraction prompt against the transcript and parses the result.
/// A non-JSON response surfaces the raw text for diagnosis.
pub async fn extract_profile(
    transcript: &str,
    llm: &GeminiClient,
) -> Result<ProfilePatch, AppError> {
    let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{transcript}", transcript);
    llm.call_json::<ProfilePatch>(&prompt)
        .await
        .map_err(map_extraction_error)
}

/// Parse failures keep their own condition (with the raw model output);
/// everything else is a generic LLM failure.
fn map_extraction_error(err: LlmError) -> AppError {
    match err {
        LlmError::Parse { raw, .. } => AppError::ExtractionParse { raw },
        other => AppError::Llm(format!("Profile extraction failed: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_payload;

    #[test]
    fn test_prompt_carries_the_transcript() {
        let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{transcript}", "I am Amina from Barabanki");
        assert!(prompt.ends_with("I am Amina from Barabanki"));
        assert!(!prompt.contains("{transcript}"));
    }

    #[test]
    fn test_partial_extraction_parses_into_patch() {
        let patch: ProfilePatch =
            parse_json_payload(r#"{"name": "Amina Begum", "skills": ["Tailoring"]}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Amina Begum"));
        assert_eq!(patch.skills, Some(vec!["Tailoring".to_string()]));
        assert!(patch.age.is_none());
        assert!(patch.education.is_none());
    }

    #[test]
    fn test_fenced_extraction_response_parses() {
        let patch: ProfilePatch =
            parse_json_payload("```json\n{\"age\": 19}\n```").unwrap();
        assert_eq!(patch.age, Some(19));
    }

    #[test]
    fn test_parse_failure_maps_to_extraction_error_with_raw_text() {
        let err = parse_json_payload::<ProfilePatch>("I could not find any fields")
            .unwrap_err();
        match map_extraction_error(err) {
            AppError::ExtractionParse { raw } => {
                assert_eq!(raw, "I could not find any fields");
            }
            other => panic!("expected ExtractionParse, got {other:?}"),
        }
    }

    #[test]
    fn test_non_parse_failure_maps_to_generic_llm_error() {
        let mapped = map_extraction_error(LlmError::EmptyContent);
        assert!(matches!(mapped, AppError::Llm(_)));
    }
}
