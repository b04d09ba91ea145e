use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeaderboardError>;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unknown leaderboard: {0}")]
    UnknownDomain(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
