use crate::{PublisherError, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and as whom leaderboards are published.
#[derive(Clone)]
pub struct GitHubConfig {
    pub repo: String,
    pub token: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl GitHubConfig {
    pub fn new(repo: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let repo = repo.into().trim().to_string();
        let token = token.into().trim().to_string();

        validate_repo_slug(&repo)?;
        if token.is_empty() {
            return Err(PublisherError::ConfigError(
                "GitHub token must not be empty".to_string(),
            ));
        }

        Ok(Self {
            repo,
            token,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn validate_repo_slug(repo: &str) -> Result<()> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(PublisherError::ConfigError(format!(
            "Repository must be given as 'owner/name', got '{}'",
            repo
        ))),
    }
}
