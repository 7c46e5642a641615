//! Remote catalogs of installable formulas and casks.

use reqwest::Client;
use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::{
    category::Category,
    config::Config,
    diagnostics::Reporter,
    error::{Error, Result},
};

/// User agent sent with catalog requests.
const USER_AGENT: &str = concat!("brewpick/", env!("CARGO_PKG_VERSION"));

/// Source of catalog listings.
pub(crate) trait CatalogSource {
    /// Fetch every identifier in a category's catalog.
    async fn fetch(&self, category: Category) -> Result<Vec<String>>;

    /// Fetch a catalog, reporting failures and degrading them to an empty list.
    async fn fetch_or_empty(&self, category: Category, reporter: &mut Reporter) -> Vec<String> {
        match self.fetch(category).await {
            Ok(items) => items,
            Err(error) => {
                reporter.warn(error.to_string());
                Vec::new()
            }
        }
    }
}

/// Catalog source backed by the Homebrew JSON API.
#[derive(Debug)]
pub struct HttpCatalog {
    /// Shared HTTP client with the configured timeout.
    client: Client,
    /// Formula endpoint.
    formula_url: String,
    /// Cask endpoint.
    cask_url: String,
}

impl HttpCatalog {
    /// Build a catalog client from config.
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::HttpClient {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            formula_url: config.catalog_url(Category::Formula).to_string(),
            cask_url: config.catalog_url(Category::Cask).to_string(),
        })
    }

    /// Endpoint for a category.
    fn url(&self, category: Category) -> &str {
        match category {
            Category::Formula => &self.formula_url,
            Category::Cask => &self.cask_url,
        }
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch(&self, category: Category) -> Result<Vec<String>> {
        let url = self.url(category);
        tracing::debug!(%url, %category, "fetching catalog");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::CatalogFetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(Error::CatalogFetch {
                url: url.to_string(),
                message: format!("server returned {}", response.status()),
            });
        }

        let bytes = response.bytes().await.map_err(|e| Error::CatalogFetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let items = parse_catalog(category, &bytes).map_err(|source| Error::CatalogParse {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!(count = items.len(), %category, "catalog loaded");
        Ok(items)
    }
}

/// Extract identifiers from a catalog body, keeping catalog order.
fn parse_catalog(category: Category, body: &[u8]) -> serde_json::Result<Vec<String>> {
    let key = category.catalog_key();
    let entries: Vec<Map<String, Value>> = serde_json::from_slice(body)?;
    entries
        .into_iter()
        .map(|mut entry| match entry.remove(key) {
            Some(Value::String(name)) => Ok(name),
            _ => Err(serde_json::Error::missing_field(key)),
        })
        .collect()
}
