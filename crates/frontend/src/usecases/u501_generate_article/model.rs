//! Generation Service client

use contracts::usecases::u501_generate_article::{GenerateArticleRequest, GenerateArticleResponse};
use gloo_net::http::Request;
use thiserror::Error;

/// Any failure of the generation call. The UI treats all variants the same;
/// the detail is for the developer console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationRequestError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

/// POST the topic to the Generation Service.
///
/// No timeout is set; the browser's default applies.
pub async fn generate_article(
    endpoint: &str,
    request: &GenerateArticleRequest,
) -> Result<GenerateArticleResponse, GenerationRequestError> {
    let resp = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| GenerationRequestError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| GenerationRequestError::Transport(e.to_string()))?;

    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(GenerationRequestError::Status {
            status: resp.status(),
            body,
        });
    }

    resp.json::<GenerateArticleResponse>()
        .await
        .map_err(|e| GenerationRequestError::Decode(e.to_string()))
}
