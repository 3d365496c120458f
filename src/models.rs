use serde::{Deserialize, Serialize};

/// Request body for the question-answering endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct AskRequest {
    pub query: String,
}

/// Response from the question-answering endpoint. `sources` is
/// optional on the wire and defaults to empty.
#[derive(Clone, Debug, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Success body from the upload endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadAccepted {
    pub message: String,
}

/// Error body both endpoints use for non-success statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Outcome of the last upload submission. Overwritten by every
/// subsequent submit or response; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Processing,
    Succeeded(String),
    Failed(String),
}

/// One transcript entry. The transcript is append-only except for
/// `Pending`, which is either removed and replaced by a `Bot` entry
/// once the answer arrives, or converted in place to `Failed`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChatEntry {
    User { id: u64, text: String },
    Pending { id: u64 },
    Bot { id: u64, text: String, sources: Vec<String> },
    Failed { id: u64, message: String },
}
