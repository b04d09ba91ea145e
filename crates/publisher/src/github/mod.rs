mod client;
pub mod models;
mod publisher;

pub use client::GitHubClient;
pub use models::{ContentsResponse, PutContentsRequest};
pub use publisher::{Publisher, UploadTarget};

#[cfg(test)]
pub(crate) use publisher::fake;
