//! HTTP items provider
//!
//! One blocking GET per call; no retries, no cache.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;

use super::wire::decode_items;
use super::ItemsProvider;
use crate::error::{CredlineError, CredlineResult};
use crate::models::StepContent;

pub struct HttpItemsProvider {
    client: Client,
    url: String,
}

impl HttpItemsProvider {
    /// The client never times out; a slow provider keeps the wizard loading
    pub fn new(url: impl Into<String>) -> CredlineResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("credline/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ItemsProvider for HttpItemsProvider {
    fn fetch_items(&self) -> CredlineResult<Vec<StepContent>> {
        info!("Fetching step contents from {}", self.url);

        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CredlineError::Network(format!(
                "{} answered with status {}",
                self.url, status
            )));
        }

        let body = response.text()?;
        debug!("Received {} bytes of items payload", body.len());

        // A body that is not the expected shape is a provider failure too
        decode_items(&body).map_err(|e| CredlineError::Network(format!("Bad payload: {}", e)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
