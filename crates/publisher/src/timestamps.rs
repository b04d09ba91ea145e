//! "Last updated" times for the website, read from the commits the publisher
//! leaves behind.

use crate::{PublisherError, Result};
use chrono::{DateTime, FixedOffset, Utc};
use leaderboard::models::{GOLD_COMMIT_MARKER, MARBLES_COMMIT_MARKER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::warn;

pub const DEFAULT_TIMESTAMPS_PATH: &str = "src/data/timestamps.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub marbles: Option<DateTime<FixedOffset>>,
    pub gold: Option<DateTime<FixedOffset>>,
    pub last_generated: DateTime<Utc>,
}

pub struct TimestampDeriver {
    repo_dir: PathBuf,
}

impl TimestampDeriver {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    pub async fn derive(&self) -> Timestamps {
        Timestamps {
            marbles: self.lookup(MARBLES_COMMIT_MARKER).await,
            gold: self.lookup(GOLD_COMMIT_MARKER).await,
            last_generated: Utc::now(),
        }
    }

    /// Author date of the newest commit on any ref whose message contains
    /// `marker` verbatim.
    pub async fn last_commit_date(&self, marker: &str) -> Result<Option<DateTime<FixedOffset>>> {
        let output = Command::new("git")
            .arg("log")
            .arg("--all")
            .arg("--fixed-strings")
            .arg(format!("--grep={}", marker))
            .arg("--format=%aI")
            .arg("--max-count=1")
            .current_dir(&self.repo_dir)
            .output()
            .await
            .map_err(|e| PublisherError::GitError(format!("Failed to run git: {}", e)))?;

        if !output.status.success() {
            return Err(PublisherError::GitError(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        parse_commit_date(&String::from_utf8_lossy(&output.stdout))
    }

    async fn lookup(&self, marker: &str) -> Option<DateTime<FixedOffset>> {
        match self.last_commit_date(marker).await {
            Ok(date) => date,
            Err(e) => {
                warn!("Could not read commits for \"{}\": {}", marker, e);
                None
            }
        }
    }
}

/// Parses `git log --format=%aI` output; empty output means no matching commit.
pub fn parse_commit_date(output: &str) -> Result<Option<DateTime<FixedOffset>>> {
    let Some(line) = output.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return Ok(None);
    };

    DateTime::parse_from_rfc3339(line)
        .map(Some)
        .map_err(|e| PublisherError::GitError(format!("Unexpected commit date '{}': {}", line, e)))
}

pub async fn write_timestamps(path: &Path, timestamps: &Timestamps) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, serde_json::to_string_pretty(timestamps)?).await?;
    Ok(())
}
