use serde_json::Value;

use crate::error::{CareloopError, Result};

/// Extract the assistant reply from a `generateContent` response:
/// `candidates[0].content.parts[0].text`. A response without candidates,
/// or with a candidate missing its content, is a malformed-response error
/// for this turn.
pub fn extract_reply(response_json: &Value) -> Result<String> {
    let candidates = response_json
        .get("candidates")
        .and_then(|c| c.as_array())
        .ok_or_else(|| CareloopError::MalformedResponse("no candidates in response".to_string()))?;

    let first_candidate = candidates
        .first()
        .ok_or_else(|| CareloopError::MalformedResponse("empty candidates array".to_string()))?;

    let parts = first_candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| CareloopError::MalformedResponse("candidate has no content parts".to_string()))?;

    parts
        .first()
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| CareloopError::MalformedResponse("candidate has no text part".to_string()))
}

/// Interpret a proxy reply: 2xx carries `{ result }`, anything else
/// carries `{ error }` and the HTTP status.
pub fn extract_proxy_result(status: u16, response_json: &Value) -> Result<String> {
    if (200..300).contains(&status) {
        return response_json
            .get("result")
            .and_then(|r| r.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                CareloopError::MalformedResponse("proxy reply has no result field".to_string())
            });
    }

    let message = response_json
        .get("error")
        .and_then(|e| e.as_str())
        .unwrap_or("proxy request failed")
        .to_string();
    Err(CareloopError::ApiError { status, message })
}
