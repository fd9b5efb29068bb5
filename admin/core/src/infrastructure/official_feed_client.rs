// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Official Plugin Feed Client
//!
//! Reads the remote catalog of officially published plugins over HTTP.
//!
//! # Architecture
//!
//! - **Layer:** Infrastructure
//! - **Purpose:** Serve the official feed browser with categories, versions
//!   and paged plugin searches
//! - **Integration:** Remote catalog JSON API → `OfficialFeedClient` port
//!
//! # Endpoints
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/categories` | `[OfficialFeedCategory]` |
//! | GET | `/versions` | `[OfficialFeedVersion]` |
//! | GET | `/plugins?categoryId&versionId&price&searchTerm&pageIndex&pageSize` | `OfficialFeedPluginPage` |

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::admin_config::OfficialFeedSettings;
use crate::domain::official_feed::{
    OfficialFeedCategory, OfficialFeedPluginPage, OfficialFeedQuery, OfficialFeedVersion,
};
use crate::domain::repository::{OfficialFeedClient, ServiceError};

const USER_AGENT: &str = concat!("bazaar-admin/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Client Implementation
// ============================================================================

pub struct HttpOfficialFeedClient {
    /// Base URL of the catalog API, without trailing slash
    base_url: String,

    /// HTTP client
    client: Client,
}

impl HttpOfficialFeedClient {
    /// Create a client with the default timeout
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        HttpOfficialFeedClientBuilder::new().base_url(base_url).build()
    }

    /// Create a client from the `official_feed` settings
    pub fn from_settings(settings: &OfficialFeedSettings) -> anyhow::Result<Self> {
        HttpOfficialFeedClientBuilder::new()
            .base_url(settings.endpoint.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ServiceError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Requesting official feed");

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ServiceError::Remote(format!(
                "Official feed request to {} failed (HTTP {})",
                path,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl OfficialFeedClient for HttpOfficialFeedClient {
    async fn get_categories(&self) -> Result<Vec<OfficialFeedCategory>, ServiceError> {
        self.get_json("/categories", &[]).await
    }

    async fn get_versions(&self) -> Result<Vec<OfficialFeedVersion>, ServiceError> {
        self.get_json("/versions", &[]).await
    }

    async fn get_all_plugins(&self, query: &OfficialFeedQuery) -> Result<OfficialFeedPluginPage, ServiceError> {
        let params = [
            ("categoryId", query.category_id.to_string()),
            ("versionId", query.version_id.to_string()),
            ("price", query.price.to_string()),
            ("searchTerm", query.search_term.clone()),
            ("pageIndex", query.page_index.to_string()),
            ("pageSize", query.page_size.to_string()),
        ];
        self.get_json("/plugins", &params).await
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

pub struct HttpOfficialFeedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl HttpOfficialFeedClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> anyhow::Result<HttpOfficialFeedClient> {
        let defaults = OfficialFeedSettings::default();
        let base_url = self.base_url.unwrap_or(defaults.endpoint);
        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(defaults.timeout_secs));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build official feed HTTP client")?;

        Ok(HttpOfficialFeedClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl Default for HttpOfficialFeedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_get_versions() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/versions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 7, "name": "Bazaar 4.10"}, {"id": 6, "name": "Bazaar 4.00"}]"#)
            .create_async()
            .await;

        let client = HttpOfficialFeedClient::new(server.url()).unwrap();
        let versions = client.get_versions().await.unwrap();

        mock.assert_async().await;
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].name, "Bazaar 4.10");
    }

    #[tokio::test]
    async fn test_get_all_plugins_sends_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/plugins")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("categoryId".into(), "3".into()),
                Matcher::UrlEncoded("searchTerm".into(), "stripe".into()),
                Matcher::UrlEncoded("pageIndex".into(), "1".into()),
                Matcher::UrlEncoded("pageSize".into(), "15".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"plugins": [{"name": "Stripe", "url": "https://feed.example/stripe",
                    "category": "Payment", "supportedVersions": "4.10", "price": "Free"}],
                    "totalCount": 16}"#,
            )
            .create_async()
            .await;

        let client = HttpOfficialFeedClient::new(format!("{}/", server.url())).unwrap();
        let page = client
            .get_all_plugins(&OfficialFeedQuery {
                category_id: 3,
                search_term: "stripe".to_string(),
                page_index: 1,
                page_size: 15,
                ..Default::default()
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(page.total_count, 16);
        assert_eq!(page.plugins[0].supported_versions, "4.10");
        assert_eq!(page.plugins[0].picture_url, "");
    }

    #[tokio::test]
    async fn test_http_error_is_remote_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/categories")
            .with_status(503)
            .create_async()
            .await;

        let client = HttpOfficialFeedClient::new(server.url()).unwrap();
        let result = client.get_categories().await;

        assert!(matches!(result, Err(ServiceError::Remote(_))));
    }
}
