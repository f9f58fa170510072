//! Row filtering and filter normalization

use super::{sort_pools, FilterConfig, SortConfig, ValueRange};
use crate::domain::pool::MiningPool;

/// Keeps the pools matching every criterion of `filter_config`, in input order.
pub fn filter_pools(pools: &[MiningPool], filter_config: &FilterConfig) -> Vec<MiningPool> {
    let search_term = filter_config.search_term.to_lowercase();

    pools
        .iter()
        .filter(|pool| matches_filter(pool, filter_config, &search_term))
        .cloned()
        .collect()
}

fn matches_filter(pool: &MiningPool, filter_config: &FilterConfig, search_term: &str) -> bool {
    if !search_term.is_empty() && !pool.name.to_lowercase().contains(search_term) {
        return false;
    }

    if !filter_config.status_filter.matches(pool.status) {
        return false;
    }

    filter_config.hashrate_range.contains(pool.hashrate_ths)
        && filter_config.workers_range.contains(f64::from(pool.active_workers))
        && filter_config.reject_rate_range.contains(pool.reject_rate)
}

/// Filter first, then sort the survivors.
pub fn filter_and_sort_pools(
    pools: &[MiningPool],
    filter_config: &FilterConfig,
    sort_config: &SortConfig,
) -> Vec<MiningPool> {
    let filtered = filter_pools(pools, filter_config);
    sort_pools(&filtered, sort_config)
}

/// Returns a copy of `filter_config` with every numeric range clamped to
/// be non-negative and with `min` pulled down to `max` when they cross.
pub fn validate_filter_ranges(filter_config: &FilterConfig) -> FilterConfig {
    FilterConfig {
        hashrate_range: normalize_range(filter_config.hashrate_range),
        workers_range: normalize_range(filter_config.workers_range),
        reject_rate_range: normalize_range(filter_config.reject_rate_range),
        ..filter_config.clone()
    }
}

fn normalize_range(range: ValueRange) -> ValueRange {
    let min = range.min.max(0.0);
    let max = range.max.max(0.0);

    if min > max {
        ValueRange::new(max, max)
    } else {
        ValueRange::new(min, max)
    }
}
