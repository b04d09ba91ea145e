use crate::Result;
use crate::github::{Publisher, UploadTarget};
use crate::sources::marbles::read_marble_records;
use crate::sources::{GOLD_VARIABLE, POINTS_PROFILE_VARIABLE, WATCHTIME_VARIABLE};
use crate::traits::{ContentsApi, UserVariableStore};
use leaderboard::{Domain, LeaderboardDocument, formatter};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Builds leaderboard documents from the host store and the marbles export.
pub struct DocumentCollector<S> {
    store: S,
    marbles_csv: PathBuf,
}

impl<S: UserVariableStore> DocumentCollector<S> {
    pub fn new(store: S, marbles_csv: impl Into<PathBuf>) -> Self {
        Self {
            store,
            marbles_csv: marbles_csv.into(),
        }
    }

    /// The formatted document for `domain`, `None` when its source holds no
    /// data at all.
    pub async fn collect(&self, domain: Domain) -> Result<Option<LeaderboardDocument>> {
        let document = match domain {
            Domain::Gold => self
                .variables(GOLD_VARIABLE)
                .await?
                .map(|vars| formatter::gold(&vars)),
            Domain::Watchtime => self
                .variables(WATCHTIME_VARIABLE)
                .await?
                .map(|vars| formatter::watchtime(&vars)),
            Domain::Coinflips => self
                .variables(POINTS_PROFILE_VARIABLE)
                .await?
                .map(|vars| formatter::coinflips(&vars)),
            Domain::Duels => self
                .variables(POINTS_PROFILE_VARIABLE)
                .await?
                .map(|vars| formatter::duels(&vars)),
            Domain::Marbles => read_marble_records(&self.marbles_csv)
                .await?
                .map(|records| formatter::marbles(&records)),
        };

        Ok(document)
    }

    async fn variables(&self, name: &str) -> Result<Option<Vec<leaderboard::UserVariable>>> {
        let variables = self.store.user_variables(name).await?;
        debug!(
            "Read {} entries of '{}' from {} store",
            variables.len(),
            name,
            self.store.name()
        );
        Ok((!variables.is_empty()).then_some(variables))
    }

    /// Writes each document below `output_dir` at its repository path.
    /// Returns `true` only if every domain was written.
    pub async fn export_all(&self, domains: &[Domain], output_dir: &Path) -> bool {
        let mut success = true;

        for &domain in domains {
            success &= match self.export(domain, output_dir).await {
                Ok(Some(path)) => {
                    info!("Exported {} leaderboard to: {}", domain, path.display());
                    true
                }
                Ok(None) => {
                    info!("No {} data found for any users.", domain);
                    false
                }
                Err(e) => {
                    error!("Error exporting {} leaderboard: {}", domain, e);
                    false
                }
            };
        }

        success
    }

    async fn export(&self, domain: Domain, output_dir: &Path) -> Result<Option<PathBuf>> {
        let Some(document) = self.collect(domain).await? else {
            return Ok(None);
        };

        let path = output_dir.join(domain.file_path());
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, document.to_json_pretty()?).await?;

        Ok(Some(path))
    }
}

/// Runs the collect-then-publish pipeline for each leaderboard.
///
/// Pipelines run one after another and never affect each other: a failure is
/// logged, counted against the overall result and the next domain still runs.
pub struct LeaderboardOrchestrator<S, A> {
    collector: DocumentCollector<S>,
    publisher: Publisher<A>,
    repo: String,
}

impl<S: UserVariableStore, A: ContentsApi> LeaderboardOrchestrator<S, A> {
    pub fn new(
        collector: DocumentCollector<S>,
        publisher: Publisher<A>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            collector,
            publisher,
            repo: repo.into(),
        }
    }

    /// Publishes every domain; `true` only if all of them succeeded.
    pub async fn run(&self) -> bool {
        self.run_domains(Domain::all()).await
    }

    pub async fn run_domains(&self, domains: &[Domain]) -> bool {
        let mut success = true;
        for &domain in domains {
            success &= self.run_domain(domain).await;
        }
        success
    }

    pub async fn run_domain(&self, domain: Domain) -> bool {
        let document = match self.collector.collect(domain).await {
            Ok(Some(document)) => document,
            Ok(None) => {
                info!("No {} data found for any users.", domain);
                return false;
            }
            Err(e) => {
                error!("Error updating {} leaderboard: {}", domain, e);
                return false;
            }
        };

        let target = match UploadTarget::for_document(&self.repo, domain, &document) {
            Ok(target) => target,
            Err(e) => {
                error!("Error updating {} leaderboard: {}", domain, e);
                return false;
            }
        };

        if self.publisher.publish(&target).await {
            info!(
                "Successfully updated {} leaderboard with {} users.",
                domain,
                document.len()
            );
            true
        } else {
            error!("Failed to upload {} leaderboard to GitHub.", domain);
            false
        }
    }
}
