use async_trait::async_trait;

use super::{MiningPool, MiningPoolDetails};
use crate::shared::errors::PoolError;

/// Anything that can serve the list and details endpoints
#[async_trait]
pub trait PoolSource: Send + Sync {
    /// Fetch the current metrics of every pool
    async fn fetch_pools(&self) -> Result<Vec<MiningPool>, PoolError>;

    /// Fetch one pool with its extended details
    async fn fetch_pool_details(&self, id: &str) -> Result<MiningPoolDetails, PoolError>;
}

#[async_trait]
impl<T: PoolSource + ?Sized> PoolSource for Box<T> {
    async fn fetch_pools(&self) -> Result<Vec<MiningPool>, PoolError> {
        (**self).fetch_pools().await
    }

    async fn fetch_pool_details(&self, id: &str) -> Result<MiningPoolDetails, PoolError> {
        (**self).fetch_pool_details(id).await
    }
}
