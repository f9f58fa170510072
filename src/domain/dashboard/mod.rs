//! Dashboard domain - the sort and filter selection held between renders

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::table::{
    FilterConfig, SortConfig, SortDirection, SortField, StatusFilter, ValueRange,
};

/// Explicit dashboard state, passed into the table functions on every render
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub sort_config: SortConfig,
    pub filter_config: FilterConfig,
    pub last_updated: Option<DateTime<Utc>>,
    initial_sort: SortConfig,
    initial_filter: FilterConfig,
}

impl DashboardState {
    /// State whose reset target is the given defaults
    pub fn new(initial_sort: SortConfig, initial_filter: FilterConfig) -> Self {
        Self {
            sort_config: initial_sort,
            filter_config: initial_filter.clone(),
            last_updated: None,
            initial_sort,
            initial_filter,
        }
    }

    pub fn set_sort_config(&mut self, sort_config: SortConfig) {
        self.sort_config = sort_config;
    }

    /// Clicking the active column flips its direction; any other column
    /// becomes active in descending order.
    pub fn set_sort_field(&mut self, field: SortField) {
        if self.sort_config.field == field {
            self.sort_config.direction = self.sort_config.direction.toggled();
        } else {
            self.sort_config = SortConfig::new(field, SortDirection::Desc);
        }
        debug!("sort -> {} {:?}", self.sort_config.field, self.sort_config.direction);
    }

    pub fn set_filter_config(&mut self, filter_config: FilterConfig) {
        self.filter_config = filter_config;
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.filter_config.search_term = search_term.into();
    }

    pub fn set_status_filter(&mut self, status_filter: StatusFilter) {
        self.filter_config.status_filter = status_filter;
    }

    pub fn set_hashrate_range(&mut self, range: ValueRange) {
        self.filter_config.hashrate_range = range;
    }

    pub fn set_workers_range(&mut self, range: ValueRange) {
        self.filter_config.workers_range = range;
    }

    pub fn set_reject_rate_range(&mut self, range: ValueRange) {
        self.filter_config.reject_rate_range = range;
    }

    /// Restores both the filter and the sort selection
    pub fn reset_filters(&mut self) {
        self.filter_config = self.initial_filter.clone();
        self.sort_config = self.initial_sort;
    }

    pub fn mark_updated(&mut self, at: DateTime<Utc>) {
        self.last_updated = Some(at);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(SortConfig::default(), FilterConfig::default())
    }
}
