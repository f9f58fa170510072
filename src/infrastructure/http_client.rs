use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::pool::{MiningPool, MiningPoolDetails, PoolSource};
use crate::shared::errors::PoolError;

/// Pools API client over HTTP
pub struct HttpPoolClient {
    client: Client,
    base_url: String,
}

impl HttpPoolClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, PoolError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn pools_url(&self) -> String {
        format!("{}/mining-pools", self.base_url)
    }

    pub fn details_url(&self, id: &str) -> String {
        format!("{}/mining-pools/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, id: Option<&str>) -> Result<T, PoolError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(PoolError::NotFound(id.to_string()));
            }
        }
        if !status.is_success() {
            warn!("⚠️  GET {} returned {}", url, status);
            return Err(PoolError::Api(format!("GET {} returned {}", url, status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PoolError::InvalidPoolData(e.to_string()))
    }
}

#[async_trait]
impl PoolSource for HttpPoolClient {
    async fn fetch_pools(&self) -> Result<Vec<MiningPool>, PoolError> {
        let url = self.pools_url();
        let pools: Vec<MiningPool> = self.get_json(&url, None).await?;
        info!("📊 Fetched {} pools from {}", pools.len(), url);
        Ok(pools)
    }

    async fn fetch_pool_details(&self, id: &str) -> Result<MiningPoolDetails, PoolError> {
        let url = self.details_url(id);
        self.get_json(&url, Some(id)).await
    }
}
