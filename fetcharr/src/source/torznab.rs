use std::io::BufReader;

use chrono::DateTime;
use fetcharr_types::{MediaKind, SearchCandidate};
use rss::{extension::Extension, Channel, Item};
use serde::{Deserialize, Serialize};

use anyhow::Result;

use super::Source;

fn default_movie_category() -> u32 {
    2000
}

fn default_tv_category() -> u32 {
    5000
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TorznabConfig {
    /// Base api url, e.g. `http://jackett:9117/api/v2.0/indexers/all/results/torznab/api`
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_movie_category")]
    pub movie_category: u32,
    #[serde(default = "default_tv_category")]
    pub tv_category: u32,
}

pub struct TorznabClient {
    client: reqwest::Client,
    config: TorznabConfig,
}

/// `<torznab:attr name="..." value="..."/>` lookup on one item.
fn torznab_attr<'a>(item: &'a Item, name: &str) -> Option<&'a str> {
    let attrs: &Vec<Extension> = item.extensions.get("torznab")?.get("attr")?;
    attrs
        .iter()
        .find(|ext| ext.attrs.get("name").map(|n| &**n) == Some(name))
        .and_then(|ext| ext.attrs.get("value"))
        .map(|v| &**v)
}

fn candidate_from_item(item: Item) -> SearchCandidate {
    let magnet_uri = torznab_attr(&item, "magneturl")
        .map(str::to_string)
        .or_else(|| {
            item.link
                .as_ref()
                .filter(|l| l.starts_with("magnet:"))
                .cloned()
        });
    let link = item
        .enclosure
        .as_ref()
        .map(|e| e.url.clone())
        .or_else(|| item.link.as_ref().filter(|l| !l.starts_with("magnet:")).cloned());
    let size = torznab_attr(&item, "size")
        .and_then(|v| v.parse().ok())
        .or_else(|| {
            item.enclosure
                .as_ref()
                .and_then(|e| e.length.parse().ok())
        })
        .unwrap_or_default();

    SearchCandidate {
        title: item.title.clone().unwrap_or_default(),
        seeders: torznab_attr(&item, "seeders")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default(),
        size,
        date: item
            .pub_date
            .as_deref()
            .and_then(|x| DateTime::parse_from_rfc2822(x).ok()),
        magnet_uri,
        link,
    }
}

fn candidates_from_channel(channel: Channel) -> Vec<SearchCandidate> {
    channel.into_items().into_iter().map(candidate_from_item).collect()
}

impl TorznabClient {
    pub fn new(config: TorznabConfig) -> Self {
        Self {
            client: reqwest::ClientBuilder::default()
                .build()
                .expect("failed to make client"),
            config,
        }
    }

    pub async fn query(&self, category: u32, query: &str) -> Result<Vec<SearchCandidate>> {
        let url = format!(
            "{}?apikey={}&t=search&cat={}&q={}",
            self.config.url,
            self.config.api_key,
            category,
            urlencoding::encode(query)
        );
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            bail!("bad http status code for torznab: {}", response.status());
        }
        let body = response.text().await?;
        let rss = Channel::read_from(BufReader::new(body.as_bytes()))?;
        Ok(candidates_from_channel(rss))
    }
}

#[async_trait::async_trait]
impl Source for TorznabClient {
    async fn search(&self, kind: MediaKind, query: &str) -> Result<Vec<SearchCandidate>> {
        let category = match kind {
            MediaKind::Movie => self.config.movie_category,
            MediaKind::Tv => self.config.tv_category,
        };
        self.query(category, query).await
    }
}
