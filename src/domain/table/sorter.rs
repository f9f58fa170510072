//! Row ordering for the pools table

use std::cmp::Ordering;

use super::{SortConfig, SortDirection, SortField};
use crate::domain::pool::MiningPool;

/// Returns a new vector ordered by `sort_config`; `pools` is left untouched.
///
/// The sort is stable: rows that compare equal keep their input order in
/// both directions.
pub fn sort_pools(pools: &[MiningPool], sort_config: &SortConfig) -> Vec<MiningPool> {
    let mut sorted = pools.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, sort_config.field);

        match sort_config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Per-field comparator table.
///
/// - `name`: case-insensitive lexicographic
/// - `status`: by priority (online > degraded > offline > unknown)
/// - numeric fields: numeric; NaN sorts above every number
fn compare_by_field(a: &MiningPool, b: &MiningPool, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Status => a.status.priority().cmp(&b.status.priority()),
        SortField::HashrateThs => compare_f64(a.hashrate_ths, b.hashrate_ths),
        SortField::ActiveWorkers => a.active_workers.cmp(&b.active_workers),
        SortField::RejectRate => compare_f64(a.reject_rate, b.reject_rate),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    // NaN > any number, NaN == NaN
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
