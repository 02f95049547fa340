use careloop::api::{extract_proxy_result, extract_reply, GenerateRequest, ProxyGenerateRequest};
use serde_json::json;

#[test]
fn test_extract_reply_with_text() {
    let response = json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": "You are doing better than you think." }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    });

    let reply = extract_reply(&response).unwrap();
    assert_eq!(reply, "You are doing better than you think.");
}

#[test]
fn test_extract_reply_without_candidates_field() {
    let response = json!({ "promptFeedback": {} });
    assert!(extract_reply(&response).is_err());
}

#[test]
fn test_extract_reply_empty_candidates() {
    // zero candidates is a malformed response for the turn, never a
    // silent empty reply
    let response = json!({ "candidates": [] });
    let err = extract_reply(&response).unwrap_err();
    assert!(err.to_string().contains("empty candidates"));
}

#[test]
fn test_extract_reply_candidate_without_content() {
    let response = json!({ "candidates": [{ "finishReason": "SAFETY" }] });
    assert!(extract_reply(&response).is_err());
}

#[test]
fn test_extract_reply_part_without_text() {
    let response = json!({ "candidates": [{ "content": { "parts": [{}] } }] });
    assert!(extract_reply(&response).is_err());
}

#[test]
fn test_proxy_result_on_success() {
    let response = json!({ "result": "All good." });
    assert_eq!(extract_proxy_result(200, &response).unwrap(), "All good.");
}

#[test]
fn test_proxy_success_without_result_is_malformed() {
    let response = json!({});
    assert!(extract_proxy_result(200, &response).is_err());
}

#[test]
fn test_proxy_error_carries_status_and_message() {
    let response = json!({ "error": "quota exhausted" });
    let err = extract_proxy_result(429, &response).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("429"));
    assert!(text.contains("quota exhausted"));
}

#[test]
fn test_proxy_error_without_message_uses_default() {
    let err = extract_proxy_result(500, &json!({})).unwrap_err();
    assert!(err.to_string().contains("proxy request failed"));
}

#[test]
fn test_generate_request_shape() {
    let body = serde_json::to_value(GenerateRequest::from_text("hello")).unwrap();
    assert_eq!(
        body,
        json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
    );
}

#[test]
fn test_proxy_generate_request_uses_camel_case() {
    let body = serde_json::to_value(ProxyGenerateRequest {
        prompt_data: "data".to_string(),
        system_prompt: "system".to_string(),
    })
    .unwrap();
    assert_eq!(body, json!({ "promptData": "data", "systemPrompt": "system" }));
}
