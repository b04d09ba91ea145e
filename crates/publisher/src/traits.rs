use crate::Result;
use crate::github::models::PutContentsRequest;
use leaderboard::UserVariable;

/// Per-user variables kept by the streaming host.
#[async_trait::async_trait]
pub trait UserVariableStore: Send + Sync {
    /// All users holding variable `name`. Unknown variables yield an empty list.
    async fn user_variables(&self, name: &str) -> Result<Vec<UserVariable>>;

    fn name(&self) -> &'static str;
}

/// The two calls of the GitHub Contents API the publisher relies on.
#[async_trait::async_trait]
pub trait ContentsApi: Send + Sync {
    /// Blob SHA of the file at `path`, `None` when the file does not exist.
    async fn file_sha(&self, repo: &str, path: &str) -> Result<Option<String>>;

    /// Creates or updates the file at `path`.
    async fn put_contents(
        &self,
        repo: &str,
        path: &str,
        request: &PutContentsRequest,
    ) -> Result<()>;
}
