use gloo_net::http::{Request, Response};
use thiserror::Error;
use web_sys::FormData;

use crate::models::{AskRequest, AskResponse, ErrorBody, UploadAccepted};

/// Question-answering endpoint, same origin as the served page.
const ASK_URL: &str = "/ask";
/// Document upload endpoint.
const UPLOAD_URL: &str = "/upload";

/// Errors from the two backend endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// The endpoint answered with a non-success status and an
    /// application-level error message.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Sends a question to the QA endpoint.
pub async fn ask(query: &str) -> Result<AskResponse, ApiError> {
    let body = AskRequest {
        query: query.to_string(),
    };

    let resp = Request::post(ASK_URL)
        .json(&body)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(rejected(resp).await);
    }

    resp.json::<AskResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Uploads a document as multipart form data. The browser sets the
/// multipart boundary itself, so no Content-Type header is given.
/// Returns the server's confirmation message.
pub async fn upload_document(payload: FormData) -> Result<String, ApiError> {
    let resp = Request::post(UPLOAD_URL)
        .body(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(rejected(resp).await);
    }

    resp.json::<UploadAccepted>()
        .await
        .map(|accepted| accepted.message)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Maps a non-success response to `ApiError::Rejected`, falling back
/// to the HTTP status text when the `{error}` body is unreadable.
async fn rejected(resp: Response) -> ApiError {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => resp.status_text(),
    };
    ApiError::Rejected { status, message }
}
