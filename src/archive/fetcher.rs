//! Outlook download over HTTP.

use std::net::{IpAddr, Ipv4Addr};

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info};

use super::{Snapshot, DEFAULT_ARCHIVE_BASE};
use crate::models::OutlookCollection;

const DEFAULT_USER_AGENT: &str = concat!("stormrisk/", env!("CARGO_PKG_VERSION"));

/// Client construction options
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Scheme and host of the archive server
    pub archive_base: String,
    /// Only connect over IPv4
    pub force_ipv4: bool,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            archive_base: DEFAULT_ARCHIVE_BASE.to_string(),
            force_ipv4: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Downloads categorical outlooks from the archive
pub struct OutlookFetcher {
    client: Client,
    archive_base: String,
}

impl OutlookFetcher {
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let mut builder = Client::builder().user_agent(options.user_agent.as_str());

        // Binding the unspecified v4 address keeps every connection on IPv4
        if options.force_ipv4 {
            builder = builder.local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            archive_base: options.archive_base.clone(),
        })
    }

    /// URL the given snapshot is fetched from
    pub fn url_for(&self, snapshot: &Snapshot) -> String {
        snapshot.url(&self.archive_base)
    }

    /// Fetch and decode the outlook for a snapshot
    pub async fn fetch(&self, snapshot: &Snapshot) -> Result<OutlookCollection> {
        let url = self.url_for(snapshot);
        info!("Fetching outlook {} from {}", snapshot, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Archive returned an error for {}", url))?;

        let collection: OutlookCollection = response
            .json()
            .await
            .with_context(|| format!("Failed to decode outlook from {}", url))?;

        debug!("Outlook has {} features", collection.features.len());
        Ok(collection)
    }
}
