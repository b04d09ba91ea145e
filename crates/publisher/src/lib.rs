pub mod config;
pub mod error;
pub mod github;
pub mod orchestrator;
pub mod sources;
pub mod timestamps;
pub mod traits;

pub use config::GitHubConfig;
pub use error::{PublisherError, Result};
pub use github::{GitHubClient, Publisher, UploadTarget};
pub use orchestrator::{DocumentCollector, LeaderboardOrchestrator};
pub use sources::{InMemoryStore, JsonFileStore};
pub use timestamps::{TimestampDeriver, Timestamps};
pub use traits::{ContentsApi, UserVariableStore};
