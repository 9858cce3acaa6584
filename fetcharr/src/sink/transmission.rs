use serde::{Deserialize, Serialize};
use transmission_rpc::{
    types::{
        BasicAuth, Torrent, TorrentAction, TorrentAddArgs, TorrentAddedOrDuplicate,
        TorrentGetField,
    },
    *,
};

use crate::sink::Sink;
use anyhow::Result;

use super::TorrentInfo;

#[derive(Clone, Serialize, Deserialize)]
pub struct TransmissionConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

pub struct TransmissionClient {
    client: TransClient,
}

impl TransmissionClient {
    pub fn new(config: TransmissionConfig) -> Self {
        Self {
            client: TransClient::with_auth(
                &config.url,
                BasicAuth {
                    user: config.username,
                    password: config.password,
                },
            ),
        }
    }
}

impl TorrentInfo {
    fn from(torrent: &Torrent) -> Option<Self> {
        Some(Self {
            id: torrent.id?,
            hash: torrent.hash_string.clone()?,
            name: torrent.name.clone().unwrap_or_default(),
        })
    }
}

#[async_trait::async_trait]
impl Sink for TransmissionClient {
    async fn add(
        &mut self,
        torrent_url: &str,
        paused: bool,
        download_dir: Option<&str>,
    ) -> Result<TorrentInfo> {
        let pushed = self
            .client
            .torrent_add(TorrentAddArgs {
                filename: Some(torrent_url.to_string()),
                paused: Some(paused),
                download_dir: download_dir.map(str::to_string),
                ..Default::default()
            })
            .await
            .map_err(|e| anyhow!("failed to add torrent: {:?}", e))?;
        let torrent = match &pushed.arguments {
            TorrentAddedOrDuplicate::TorrentAdded(torrent) => torrent,
            TorrentAddedOrDuplicate::TorrentDuplicate(torrent) => torrent,
        };
        TorrentInfo::from(torrent).ok_or_else(|| anyhow!("failed to get torrent id: {:?}", pushed))
    }

    async fn resume(&mut self, id: i64) -> Result<()> {
        self.client
            .torrent_action(TorrentAction::Start, vec![types::Id::Id(id)])
            .await
            .map_err(|e| anyhow!("failed to resume torrent: {:?}", e))?;
        Ok(())
    }

    async fn remove(&mut self, id: i64, delete_data: bool) -> Result<()> {
        self.client
            .torrent_remove(vec![types::Id::Id(id)], delete_data)
            .await
            .map_err(|e| anyhow!("failed to delete torrent: {:?}", e))?;
        Ok(())
    }

    async fn finished(&mut self) -> Result<Vec<i64>> {
        let torrents = self
            .client
            .torrent_get(
                Some(vec![
                    TorrentGetField::Id,
                    TorrentGetField::IsFinished,
                    TorrentGetField::PercentDone,
                ]),
                None,
            )
            .await
            .map_err(|e| anyhow!("failed to get torrent: {:?}", e))?;

        Ok(torrents
            .arguments
            .torrents
            .into_iter()
            .filter(|x| x.is_finished == Some(true) || x.percent_done == Some(1.0))
            .filter_map(|x| x.id)
            .collect())
    }
}
