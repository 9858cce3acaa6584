use anyhow::Result;

#[async_trait::async_trait]
pub trait Resolver: Send + Sync {
    /// Turns a candidate locator into something the download client accepts.
    async fn resolve(&self, locator: &str) -> Result<String>;
}

#[async_trait::async_trait]
impl Resolver for Box<dyn Resolver + Send + Sync> {
    async fn resolve(&self, locator: &str) -> Result<String> {
        Resolver::resolve(&**self, locator).await
    }
}

/// Magnets pass through untouched. HTTP links get a single probe with
/// redirects disabled; trackers that answer with a redirect straight to a
/// magnet URI give that up, anything else keeps the original URL for the
/// client to fetch itself.
pub struct HttpResolver {
    client: reqwest::Client,
}

impl HttpResolver {
    pub fn new() -> Self {
        Self {
            client: reqwest::ClientBuilder::default()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("failed to make client"),
        }
    }
}

#[async_trait::async_trait]
impl Resolver for HttpResolver {
    async fn resolve(&self, locator: &str) -> Result<String> {
        if locator.starts_with("magnet:") {
            return Ok(locator.to_string());
        }
        let response = self.client.get(locator).send().await?;
        if response.status().is_redirection() {
            if let Some(location) = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok())
            {
                if location.starts_with("magnet:") {
                    return Ok(location.to_string());
                }
            }
            return Ok(locator.to_string());
        }
        if !response.status().is_success() {
            bail!("bad http status code resolving '{}': {}", locator, response.status());
        }
        Ok(locator.to_string())
    }
}
