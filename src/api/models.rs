use serde::{Deserialize, Serialize};

/// Request body for the generative-language `generateContent` endpoint:
/// one content with exactly one text part carrying the full prompt.
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: text.into() }],
            }],
        }
    }
}

/// Body for the proxy's `/generate` path; the proxy concatenates the two
/// fields server-side. Field names follow the proxy contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyGenerateRequest {
    pub prompt_data: String,
    pub system_prompt: String,
}
