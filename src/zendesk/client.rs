use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Comment, CommentPage, TicketPage};

pub struct ZendeskClient {
    client: Client,
    username: String,
    api_token: String,
    base_url: String,
}

impl ZendeskClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.base_url();
        Self::with_base_url(config, base_url)
    }

    /// Builds a client against an explicit base URL instead of the one derived
    /// from the subdomain. Used to point at a mock server in tests.
    pub fn with_base_url(config: &Config, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("zendesk-exporter/0.1.0")
            .build()?;

        Ok(Self {
            client,
            username: format!("{}/token", config.email),
            api_token: config.api_token.clone(),
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One authenticated GET round trip, parsed as JSON. Non-success statuses
    /// fail here; the caller decides whether that is fatal.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.api_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn fetch_ticket_page(&self, url: &str) -> Result<TicketPage> {
        self.get_json(url).await
    }

    pub async fn fetch_comments(&self, ticket_id: u64) -> Result<Vec<Comment>> {
        let url = format!("{}/tickets/{}/comments.json", self.base_url, ticket_id);
        let page: CommentPage = self.get_json(&url).await?;
        Ok(page.comments)
    }
}
