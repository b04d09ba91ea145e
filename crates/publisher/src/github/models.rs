use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// The part of `GET /repos/{repo}/contents/{path}` the publisher reads.
#[derive(Debug, Deserialize)]
pub struct ContentsResponse {
    pub sha: String,
}

/// Body of `PUT /repos/{repo}/contents/{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PutContentsRequest {
    pub message: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl PutContentsRequest {
    /// Encodes `content` as base64. `sha` must be the current blob SHA when
    /// updating an existing file and `None` when creating one.
    pub fn new(message: impl Into<String>, content: &str, sha: Option<String>) -> Self {
        Self {
            message: message.into(),
            content: STANDARD.encode(content.as_bytes()),
            sha,
        }
    }
}
