//! In-process mock of the pools API
//!
//! Serves a fixed set of pools with a little random jitter on the online
//! ones so consecutive refreshes look alive.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::pool::{MiningPool, MiningPoolDetails, PoolSource, PoolStatus};
use crate::shared::errors::PoolError;

const LIST_ROUTE: &str = "/mining-pools";

/// Response produced by [`MockPoolApi::handle`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    /// Value of the `Allow` header, set on 405 responses
    pub allow: Option<Vec<String>>,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, allow: None, body }
    }

    fn not_found(message: &str) -> Self {
        Self {
            status: 404,
            allow: None,
            body: json!({ "error": message }),
        }
    }

    fn method_not_allowed(method: &str) -> Self {
        Self {
            status: 405,
            allow: Some(vec!["GET".to_string()]),
            body: Value::String(format!("Method {} Not Allowed", method)),
        }
    }
}

pub struct MockPoolApi {
    pools: Vec<MiningPoolDetails>,
    list_delay: Duration,
    details_delay: Duration,
    rng: Mutex<StdRng>,
}

impl MockPoolApi {
    pub fn new(list_delay: Duration, details_delay: Duration) -> Self {
        Self::with_rng(list_delay, details_delay, StdRng::from_entropy())
    }

    /// Deterministic jitter, no simulated latency
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Duration::ZERO, Duration::ZERO, StdRng::seed_from_u64(seed))
    }

    fn with_rng(list_delay: Duration, details_delay: Duration, rng: StdRng) -> Self {
        Self {
            pools: fixture_pools(),
            list_delay,
            details_delay,
            rng: Mutex::new(rng),
        }
    }

    /// Current pool list; online pools are jittered
    pub fn list_pools(&self) -> Vec<MiningPool> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        self.pools
            .iter()
            .map(|details| jitter_pool(&details.pool, &mut *rng))
            .collect()
    }

    /// One pool with details; online pools are jittered
    pub fn pool_details(&self, id: &str) -> Result<MiningPoolDetails, PoolError> {
        let details = self
            .pools
            .iter()
            .find(|d| d.pool.id == id)
            .ok_or_else(|| PoolError::NotFound(id.to_string()))?;

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Ok(jitter_details(details, &mut *rng))
    }

    /// Routes a request the way the HTTP endpoints would.
    ///
    /// Paths may carry an `/api` prefix. Only `GET` is served.
    pub async fn handle(&self, method: &str, path: &str) -> ApiResponse {
        let path = path.trim_end_matches('/');
        let path = path.strip_prefix("/api").unwrap_or(path);

        let Some(rest) = path.strip_prefix(LIST_ROUTE) else {
            return ApiResponse::not_found("Not found");
        };

        if rest.is_empty() {
            tokio::time::sleep(self.list_delay).await;
            if !method.eq_ignore_ascii_case("GET") {
                return ApiResponse::method_not_allowed(method);
            }
            return match serde_json::to_value(self.list_pools()) {
                Ok(body) => ApiResponse::ok(body),
                Err(e) => ApiResponse {
                    status: 500,
                    allow: None,
                    body: json!({ "error": e.to_string() }),
                },
            };
        }

        let id = match rest.strip_prefix('/') {
            Some(id) if !id.is_empty() && !id.contains('/') => id,
            _ => return ApiResponse::not_found("Not found"),
        };

        tokio::time::sleep(self.details_delay).await;
        if !method.eq_ignore_ascii_case("GET") {
            return ApiResponse::method_not_allowed(method);
        }

        match self.pool_details(id) {
            Ok(details) => match serde_json::to_value(details) {
                Ok(body) => ApiResponse::ok(body),
                Err(e) => ApiResponse {
                    status: 500,
                    allow: None,
                    body: json!({ "error": e.to_string() }),
                },
            },
            Err(_) => ApiResponse::not_found("Mining pool not found"),
        }
    }
}

impl Default for MockPoolApi {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(300))
    }
}

#[async_trait]
impl PoolSource for MockPoolApi {
    async fn fetch_pools(&self) -> Result<Vec<MiningPool>, PoolError> {
        tokio::time::sleep(self.list_delay).await;
        let pools = self.list_pools();
        info!("📊 Mock API served {} pools", pools.len());
        Ok(pools)
    }

    async fn fetch_pool_details(&self, id: &str) -> Result<MiningPoolDetails, PoolError> {
        tokio::time::sleep(self.details_delay).await;
        debug!("Mock API details request for {}", id);
        self.pool_details(id)
    }
}

/// Symmetric noise in `[-span / 2, span / 2)`
fn noise<R: Rng>(rng: &mut R, span: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * span
}

fn jitter_pool<R: Rng>(pool: &MiningPool, rng: &mut R) -> MiningPool {
    if pool.status != PoolStatus::Online {
        return pool.clone();
    }

    let workers = (f64::from(pool.active_workers) + noise(rng, 100.0)).floor().max(0.0);
    MiningPool {
        hashrate_ths: pool.hashrate_ths + noise(rng, 50.0),
        active_workers: workers as u32,
        reject_rate: (pool.reject_rate + noise(rng, 0.01)).max(0.0),
        ..pool.clone()
    }
}

fn jitter_details<R: Rng>(details: &MiningPoolDetails, rng: &mut R) -> MiningPoolDetails {
    if details.pool.status != PoolStatus::Online {
        return details.clone();
    }

    MiningPoolDetails {
        pool: jitter_pool(&details.pool, rng),
        last_24h_revenue_btc: (details.last_24h_revenue_btc + noise(rng, 0.01)).max(0.0),
        uptime_percent: (details.uptime_percent + noise(rng, 2.0)).clamp(95.0, 100.0),
        ..details.clone()
    }
}

fn fixture_pools() -> Vec<MiningPoolDetails> {
    let entry = |pool: MiningPool, revenue: f64, uptime: f64, location: &str, fee: f64| MiningPoolDetails {
        pool,
        last_24h_revenue_btc: revenue,
        uptime_percent: uptime,
        location: location.to_string(),
        fee_percent: fee,
    };

    vec![
        entry(
            MiningPool::new("pool-1", "US East Pool", 830.5, 1240, 0.012, PoolStatus::Online),
            0.035,
            99.82,
            "Ashburn, VA",
            1.0,
        ),
        entry(
            MiningPool::new("pool-2", "EU Central Pool", 460.3, 876, 0.045, PoolStatus::Degraded),
            0.021,
            97.45,
            "Frankfurt, Germany",
            1.2,
        ),
        entry(
            MiningPool::new("pool-3", "Asia Pacific Pool", 720.8, 1567, 0.021, PoolStatus::Online),
            0.042,
            99.95,
            "Singapore",
            0.8,
        ),
        entry(
            MiningPool::new("pool-4", "Canada North Pool", 0.0, 0, 0.0, PoolStatus::Offline),
            0.0,
            0.0,
            "Toronto, Canada",
            1.5,
        ),
    ]
}
