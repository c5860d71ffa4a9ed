//! HTTP post source implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::config::Config;
use crate::domain::entities::Post;
use crate::domain::ports::PostSource;
use crate::error::SourceError;

/// Fetches a post array with a GET against one fixed path
pub struct HttpPostSource {
    http: Client,
    base_url: String,
    path: String,
    name: String,
}

impl HttpPostSource {
    pub fn new(http: Client, base_url: &str, path: &str, name: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            path: path.to_string(),
            name: name.into(),
        }
    }

    /// Posts authored on this node
    pub fn local(http: Client, config: &Config) -> Self {
        Self::new(http, &config.base_url, &config.local_posts_path, "local")
    }

    /// Posts pulled in from federated nodes
    pub fn remote(http: Client, config: &Config) -> Self {
        Self::new(http, &config.base_url, &config.remote_posts_path, "remote")
    }

    /// Shared client for both sources. The client-level timeout backs up the
    /// per-fetch timeout applied by the aggregator.
    pub fn build_client(timeout: Duration) -> Result<Client, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?)
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Vec<Post>, SourceError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| SourceError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(SourceError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        let url = self.url();
        tracing::debug!(source = %self.name, %url, "Fetching posts");

        let response = self.http.get(&url).send().await?;
        self.handle_response(response).await
    }
}
