use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PublisherError>;

#[derive(Error, Debug)]
pub enum PublisherError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Leaderboard error: {0}")]
    LeaderboardError(#[from] leaderboard::LeaderboardError),

    #[error("GitHub API error ({status}): {body}")]
    ApiError { status: StatusCode, body: String },

    #[error("Revision conflict on {path}: {body}")]
    ConflictError { path: String, body: String },

    #[error("Variable store error: {0}")]
    StoreError(String),

    #[error("Git error: {0}")]
    GitError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
