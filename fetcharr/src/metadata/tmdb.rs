use chrono::NaiveDate;
use fetcharr_types::EpisodeRef;
use serde::{Deserialize, Serialize};

use anyhow::Result;

use super::Metadata;

fn default_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
    #[serde(default = "default_url")]
    pub url: String,
}

pub struct TmdbClient {
    client: reqwest::Client,
    config: TmdbConfig,
}

#[derive(Deserialize)]
struct SeasonResponse {
    episodes: Vec<SeasonEpisode>,
}

#[derive(Deserialize)]
struct SeasonEpisode {
    id: u64,
    episode_number: u32,
    air_date: Option<NaiveDate>,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            client: reqwest::ClientBuilder::default()
                .build()
                .expect("failed to make client"),
            config,
        }
    }
}

#[async_trait::async_trait]
impl Metadata for TmdbClient {
    async fn list_episodes(&self, show_id: u64, season: u32) -> Result<Vec<EpisodeRef>> {
        let url = format!(
            "{}/tv/{}/season/{}?api_key={}",
            self.config.url, show_id, season, self.config.api_key
        );
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            bail!("bad http status code for tmdb: {}", response.status());
        }
        let season: SeasonResponse = response.json().await?;
        Ok(season
            .episodes
            .into_iter()
            .map(|ep| EpisodeRef {
                episode_number: ep.episode_number,
                air_date: ep.air_date,
                provider_episode_id: ep.id,
            })
            .collect())
    }
}
