mod torznab;
pub use torznab::{TorznabClient, TorznabConfig};

use anyhow::Result;
use fetcharr_types::{MediaKind, SearchCandidate};
use serde::{Deserialize, Serialize};

#[async_trait::async_trait]
pub trait Source: Send + Sync {
    async fn search(&self, kind: MediaKind, query: &str) -> Result<Vec<SearchCandidate>>;
}

#[async_trait::async_trait]
impl Source for Box<dyn Source + Send + Sync> {
    async fn search(&self, kind: MediaKind, query: &str) -> Result<Vec<SearchCandidate>> {
        Source::search(&**self, kind, query).await
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    Torznab(TorznabConfig),
}
