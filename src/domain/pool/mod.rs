//! Pool domain - mining pool records and where they come from

mod pool_source;

pub use pool_source::PoolSource;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::ParseError;

/// Operational status of a mining pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolStatus {
    Online,
    Degraded,
    Offline,
    /// Any status string the dashboard does not recognize
    #[serde(other)]
    Unknown,
}

impl PoolStatus {
    /// Sort priority: online > degraded > offline > anything else
    pub fn priority(self) -> u8 {
        match self {
            PoolStatus::Online => 3,
            PoolStatus::Degraded => 2,
            PoolStatus::Offline => 1,
            PoolStatus::Unknown => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PoolStatus::Online => "online",
            PoolStatus::Degraded => "degraded",
            PoolStatus::Offline => "offline",
            PoolStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoolStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(PoolStatus::Online),
            "degraded" => Ok(PoolStatus::Degraded),
            "offline" => Ok(PoolStatus::Offline),
            _ => Err(ParseError::UnknownStatus(s.to_string())),
        }
    }
}

/// Current metrics of one mining pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningPool {
    pub id: String,
    pub name: String,
    #[serde(rename = "hashrateTHs")]
    pub hashrate_ths: f64,
    pub active_workers: u32,
    /// Fraction of submitted shares rejected, in [0, 1]
    pub reject_rate: f64,
    pub status: PoolStatus,
}

impl MiningPool {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hashrate_ths: f64,
        active_workers: u32,
        reject_rate: f64,
        status: PoolStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hashrate_ths,
            active_workers,
            reject_rate,
            status,
        }
    }
}

/// Pool record extended with the fields shown in the details view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningPoolDetails {
    #[serde(flatten)]
    pub pool: MiningPool,
    #[serde(rename = "last24hRevenueBTC")]
    pub last_24h_revenue_btc: f64,
    pub uptime_percent: f64,
    pub location: String,
    pub fee_percent: f64,
}
