use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;

use crate::api::GenerateRequest;
use crate::error::Result;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// POST a prompt straight to the generative-language API. No request
/// timeout and no retry; a slow upstream surfaces through the transport's
/// own failure.
pub async fn request_generate(
    api_key: &str,
    api_endpoint: &str,
    model: &str,
    request_body: &GenerateRequest,
) -> Result<reqwest::Response> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(API_KEY_HEADER),
        HeaderValue::from_str(api_key)
            .map_err(|e| crate::error::CareloopError::Other(format!("Invalid API key header: {}", e)))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    let url = format!(
        "{}/models/{}:generateContent",
        api_endpoint.trim_end_matches('/'),
        model
    );
    let response = client.post(&url).json(request_body).send().await?;
    Ok(response)
}

/// POST a body to one of the same-origin proxy paths (`chat` or
/// `generate`). The proxy holds the credential; nothing is attached
/// client-side.
pub async fn request_proxy<T: Serialize + ?Sized>(
    proxy_url: &str,
    path: &str,
    request_body: &T,
) -> Result<reqwest::Response> {
    let client = reqwest::Client::builder().build()?;
    let url = format!("{}/{}", proxy_url.trim_end_matches('/'), path);
    let response = client.post(&url).json(request_body).send().await?;
    Ok(response)
}
