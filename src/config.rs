use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub subdomain: String,
    pub email: String,
    pub api_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let subdomain = env::var("ZENDESK_SUBDOMAIN").ok();
        let email = env::var("ZENDESK_EMAIL").ok();
        let api_token = env::var("ZENDESK_API_TOKEN").ok();

        match (subdomain, email, api_token) {
            (Some(subdomain), Some(email), Some(api_token)) => Ok(Self {
                subdomain,
                email,
                api_token,
            }),
            _ => Err(Error::Config(
                "Missing Zendesk credentials. Please set these environment variables:\n\
                 \x20 - ZENDESK_SUBDOMAIN\n\
                 \x20 - ZENDESK_EMAIL\n\
                 \x20 - ZENDESK_API_TOKEN"
                    .to_string(),
            )),
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.zendesk.com/api/v2", self.subdomain)
    }
}
