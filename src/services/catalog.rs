use crate::core::eligible_candidates;
use crate::models::CatProfile;
use crate::services::cache::{CacheKey, CacheManager};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the cat catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid catalog API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Cat catalog API client
///
/// Read-only view of the shelter catalog. Shelter staff own the records;
/// this client only lists them.
pub struct CatalogClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// List the cats currently published for adoption
    ///
    /// Documents that do not parse are skipped with a warning so one bad
    /// record never hides the rest of the catalog.
    pub async fn list_cats(&self) -> Result<Vec<CatProfile>, CatalogError> {
        let url = format!("{}?status={}", self.url("cats"), urlencoding::encode("adoption"));

        tracing::debug!("Listing catalog cats from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(CatalogError::Unauthorized)
            }
            status => {
                return Err(CatalogError::ApiError(format!(
                    "Failed to list cats: {}",
                    status
                )))
            }
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| CatalogError::InvalidResponse("Missing documents array".into()))?;

        let cats: Vec<CatProfile> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                match serde_json::from_value(data.clone()) {
                    Ok(cat) => Some(cat),
                    Err(e) => {
                        tracing::warn!("Skipping unparseable catalog document: {}", e);
                        None
                    }
                }
            })
            .collect();

        tracing::debug!("Listed {} cats (total: {})", cats.len(), total);

        Ok(cats)
    }
}

/// Catalog snapshot shared by the match endpoints and the alert sweep
///
/// Holds the eligible candidate set in the cache so repeated wizard runs do
/// not hit the catalog store; `invalidate` is called when the catalog changes.
pub struct CachedCatalog {
    client: Arc<CatalogClient>,
    cache: Arc<CacheManager>,
}

impl CachedCatalog {
    pub fn new(client: Arc<CatalogClient>, cache: Arc<CacheManager>) -> Self {
        Self { client, cache }
    }

    /// Eligible candidates in catalog order
    pub async fn candidates(&self) -> Result<Vec<CatProfile>, CatalogError> {
        let key = CacheKey::catalog();

        match self.cache.get::<Vec<CatProfile>>(&key).await {
            Ok(cats) => return Ok(cats),
            Err(e) => tracing::trace!("Catalog snapshot not cached: {}", e),
        }

        let cats = eligible_candidates(self.client.list_cats().await?);

        if let Err(e) = self.cache.set(&key, &cats).await {
            tracing::warn!("Failed to cache catalog snapshot: {}", e);
        }

        Ok(cats)
    }

    pub async fn invalidate(&self) {
        if let Err(e) = self.cache.delete(&CacheKey::catalog()).await {
            tracing::warn!("Failed to invalidate catalog snapshot: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_client_creation() {
        let client = CatalogClient::new(
            "https://catalog.test/v1/".to_string(),
            "test_key".to_string(),
            5,
        )
        .unwrap();

        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.url("cats"), "https://catalog.test/v1/cats");
    }
}
