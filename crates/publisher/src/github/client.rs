use super::models::{ContentsResponse, PutContentsRequest};
use crate::config::GitHubConfig;
use crate::error::{PublisherError, Result};
use crate::traits::ContentsApi;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;

const USER_AGENT: &str = "leaderboard-sync";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

pub struct GitHubClient {
    api_url: String,
    token: String,
    client: reqwest::Client,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            client,
        })
    }

    pub fn contents_url(&self, repo: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.api_url,
            repo,
            path.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl ContentsApi for GitHubClient {
    async fn file_sha(&self, repo: &str, path: &str) -> Result<Option<String>> {
        let url = self.contents_url(repo, path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublisherError::ApiError { status, body });
        }

        let contents = response.json::<ContentsResponse>().await?;
        Ok(Some(contents.sha))
    }

    async fn put_contents(
        &self,
        repo: &str,
        path: &str,
        request: &PutContentsRequest,
    ) -> Result<()> {
        let url = self.contents_url(repo, path);

        tracing::debug!(
            "PUT {} ({} base64 chars, sha: {:?})",
            url,
            request.content.len(),
            request.sha
        );

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        if is_revision_conflict(status, &body) {
            Err(PublisherError::ConflictError {
                path: path.to_string(),
                body,
            })
        } else {
            Err(PublisherError::ApiError { status, body })
        }
    }
}

/// GitHub answers a stale or missing `sha` with 409, or with 422 naming the sha.
fn is_revision_conflict(status: StatusCode, body: &str) -> bool {
    status == StatusCode::CONFLICT
        || (status == StatusCode::UNPROCESSABLE_ENTITY && body.contains("sha"))
}
