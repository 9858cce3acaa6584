mod transmission;
use serde::{Deserialize, Serialize};
pub use transmission::*;

use anyhow::Result;

/// A torrent as the download client knows it, right after an add.
#[derive(Debug, Clone)]
pub struct TorrentInfo {
    pub id: i64,
    pub hash: String,
    pub name: String,
}

#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    /// Adds a torrent, optionally paused, into `download_dir`. A torrent the
    /// client already had comes back with its existing id and hash.
    async fn add(
        &mut self,
        torrent_url: &str,
        paused: bool,
        download_dir: Option<&str>,
    ) -> Result<TorrentInfo>;

    async fn resume(&mut self, id: i64) -> Result<()>;

    /// Removes a torrent; `delete_data` also wipes its files.
    async fn remove(&mut self, id: i64, delete_data: bool) -> Result<()>;

    /// Ids of all torrents the client reports complete.
    async fn finished(&mut self) -> Result<Vec<i64>>;
}

#[async_trait::async_trait]
impl Sink for Box<dyn Sink + Send + Sync> {
    async fn add(
        &mut self,
        torrent_url: &str,
        paused: bool,
        download_dir: Option<&str>,
    ) -> Result<TorrentInfo> {
        Sink::add(&mut **self, torrent_url, paused, download_dir).await
    }

    async fn resume(&mut self, id: i64) -> Result<()> {
        Sink::resume(&mut **self, id).await
    }

    async fn remove(&mut self, id: i64, delete_data: bool) -> Result<()> {
        Sink::remove(&mut **self, id, delete_data).await
    }

    async fn finished(&mut self) -> Result<Vec<i64>> {
        Sink::finished(&mut **self).await
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum SinkConfig {
    Transmission(TransmissionConfig),
}
