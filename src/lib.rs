//! Minepools - Mining Pools Dashboard
//! Sortable, filterable view over Bitcoin mining-pool statistics

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use application::{DashboardService, TableView};
pub use domain::dashboard::DashboardState;
pub use domain::pool::{MiningPool, MiningPoolDetails, PoolSource, PoolStatus};
pub use domain::table::{
    filter_and_sort_pools, filter_pools, filter_stats, sort_indicator, sort_pools,
    validate_filter_ranges, FilterConfig, SortConfig,
};
pub use infrastructure::{HttpPoolClient, MockPoolApi};
