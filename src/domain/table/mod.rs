//! Table domain - sorting, filtering and annotating pool rows
//!
//! Every function here is pure: inputs are borrowed, outputs are freshly
//! allocated, and nothing is kept between calls.

mod filter;
mod sorter;
mod stats;

pub use filter::{filter_and_sort_pools, filter_pools, validate_filter_ranges};
pub use sorter::sort_pools;
pub use stats::{filter_stats, sort_indicator, FilterStats, SortIndicator};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::pool::PoolStatus;
use crate::shared::errors::ParseError;

/// Column a table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "hashrateTHs")]
    HashrateThs,
    #[serde(rename = "activeWorkers")]
    ActiveWorkers,
    #[serde(rename = "rejectRate")]
    RejectRate,
    #[serde(rename = "status")]
    Status,
}

impl SortField {
    /// Columns in display order
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::HashrateThs,
        SortField::ActiveWorkers,
        SortField::RejectRate,
        SortField::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::HashrateThs => "hashrateTHs",
            SortField::ActiveWorkers => "activeWorkers",
            SortField::RejectRate => "rejectRate",
            SortField::Status => "status",
        }
    }

    /// Column header shown in rendered tables
    pub fn title(&self) -> &'static str {
        match self {
            SortField::Name => "Pool",
            SortField::HashrateThs => "Hashrate",
            SortField::ActiveWorkers => "Workers",
            SortField::RejectRate => "Reject Rate",
            SortField::Status => "Status",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "name" => Ok(SortField::Name),
            "hashrateths" | "hashrate" => Ok(SortField::HashrateThs),
            "activeworkers" | "workers" => Ok(SortField::ActiveWorkers),
            "rejectrate" => Ok(SortField::RejectRate),
            "status" => Ok(SortField::Status),
            _ => Err(ParseError::UnknownSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(ParseError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Field and direction used to order rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::desc(SortField::HashrateThs)
    }
}

/// Inclusive numeric bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Status criterion: either every status or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Online,
    Degraded,
    Offline,
}

impl StatusFilter {
    pub fn matches(&self, status: PoolStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Online => status == PoolStatus::Online,
            StatusFilter::Degraded => status == PoolStatus::Degraded,
            StatusFilter::Offline => status == PoolStatus::Offline,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "online" => Ok(StatusFilter::Online),
            "degraded" => Ok(StatusFilter::Degraded),
            "offline" => Ok(StatusFilter::Offline),
            _ => Err(ParseError::UnknownStatusFilter(s.to_string())),
        }
    }
}

/// User-selected inclusion criteria applied before display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub hashrate_range: ValueRange,
    pub workers_range: ValueRange,
    pub reject_rate_range: ValueRange,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            hashrate_range: ValueRange::new(0.0, 50_000.0),
            workers_range: ValueRange::new(0.0, 10_000.0),
            // reject rate is a fraction, so the full range is [0, 1]
            reject_rate_range: ValueRange::new(0.0, 1.0),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::pool::{MiningPool, PoolStatus};

    pub fn mock_pools() -> Vec<MiningPool> {
        vec![
            MiningPool::new("pool-1", "Antpool", 25420.8, 8547, 0.008, PoolStatus::Online),
            MiningPool::new("pool-2", "F2Pool", 18950.3, 6234, 0.012, PoolStatus::Online),
            MiningPool::new("pool-3", "Via BTC", 12670.5, 4321, 0.021, PoolStatus::Degraded),
            MiningPool::new("pool-4", "Slush Pool", 9834.2, 3456, 0.009, PoolStatus::Online),
            MiningPool::new("pool-5", "BTC.com", 7652.8, 2987, 0.034, PoolStatus::Offline),
        ]
    }

    pub fn names(pools: &[MiningPool]) -> Vec<&str> {
        pools.iter().map(|p| p.name.as_str()).collect()
    }
}
