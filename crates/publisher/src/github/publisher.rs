use super::models::PutContentsRequest;
use crate::error::{PublisherError, Result};
use crate::traits::ContentsApi;
use leaderboard::{Domain, LeaderboardDocument};
use tracing::{debug, error, info, warn};

/// One file write: where it goes, what it holds and how the commit is labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub repo_slug: String,
    pub path: String,
    pub content: String,
    pub commit_message: String,
}

impl UploadTarget {
    pub fn for_document(
        repo_slug: impl Into<String>,
        domain: Domain,
        document: &LeaderboardDocument,
    ) -> Result<Self> {
        Ok(Self {
            repo_slug: repo_slug.into(),
            path: domain.file_path(),
            content: document.to_json_pretty()?,
            commit_message: domain.commit_message().to_string(),
        })
    }
}

/// Writes files through the Contents API.
///
/// Each publish reads the file's current SHA and then writes with it. If
/// someone else commits to the same file in between, GitHub rejects the write
/// and the publish fails; nothing is retried.
pub struct Publisher<A> {
    api: A,
}

impl<A: ContentsApi> Publisher<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn publish(&self, target: &UploadTarget) -> bool {
        match self.upload(target).await {
            Ok(()) => {
                info!("Successfully uploaded {} to GitHub.", target.path);
                true
            }
            Err(PublisherError::ConflictError { path, body }) => {
                error!(
                    "{} changed on GitHub while it was being updated: {}",
                    path, body
                );
                false
            }
            Err(e) => {
                error!("Error uploading {} to GitHub: {}", target.path, e);
                false
            }
        }
    }

    pub async fn upload(&self, target: &UploadTarget) -> Result<()> {
        let sha = self.current_revision(target).await;
        let request = PutContentsRequest::new(&target.commit_message, &target.content, sha);

        self.api
            .put_contents(&target.repo_slug, &target.path, &request)
            .await
    }

    /// A failed lookup is not fatal; the write goes ahead as a file creation.
    async fn current_revision(&self, target: &UploadTarget) -> Option<String> {
        match self.api.file_sha(&target.repo_slug, &target.path).await {
            Ok(Some(sha)) => {
                debug!("{} is at revision {}", target.path, sha);
                Some(sha)
            }
            Ok(None) => {
                info!("{} does not exist yet, creating it", target.path);
                None
            }
            Err(e) => {
                warn!(
                    "Could not get file SHA for {} (file might not exist yet): {}",
                    target.path, e
                );
                None
            }
        }
    }
}
