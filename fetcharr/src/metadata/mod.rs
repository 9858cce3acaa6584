mod tmdb;
pub use tmdb::{TmdbClient, TmdbConfig};

use anyhow::Result;
use fetcharr_types::EpisodeRef;
use serde::{Deserialize, Serialize};

#[async_trait::async_trait]
pub trait Metadata: Send + Sync {
    /// All episodes of one season, used to explode a season want into
    /// per-episode wants.
    async fn list_episodes(&self, show_id: u64, season: u32) -> Result<Vec<EpisodeRef>>;
}

#[async_trait::async_trait]
impl Metadata for Box<dyn Metadata + Send + Sync> {
    async fn list_episodes(&self, show_id: u64, season: u32) -> Result<Vec<EpisodeRef>> {
        Metadata::list_episodes(&**self, show_id, season).await
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum MetadataConfig {
    Tmdb(TmdbConfig),
}
