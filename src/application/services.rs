//! Application services and use cases

use chrono::Utc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::application::report::TableView;
use crate::domain::dashboard::DashboardState;
use crate::domain::pool::{MiningPool, MiningPoolDetails, PoolSource};
use crate::shared::errors::AppError;

/// Fetches pools from a source and renders them through the dashboard state
pub struct DashboardService<S: PoolSource> {
    source: S,
    state: DashboardState,
    pools: Vec<MiningPool>,
}

impl<S: PoolSource> DashboardService<S> {
    pub fn new(source: S, state: DashboardState) -> Self {
        Self {
            source,
            state,
            pools: Vec::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    /// Re-fetch the pool list and build the view for the current state
    pub async fn refresh(&mut self) -> Result<TableView, AppError> {
        self.pools = self.source.fetch_pools().await?;
        self.state.mark_updated(Utc::now());
        info!("🔄 Refreshed {} pools", self.pools.len());
        Ok(self.view())
    }

    /// View of the last fetched pools, without touching the source
    pub fn view(&self) -> TableView {
        TableView::build(
            &self.pools,
            &self.state.filter_config,
            &self.state.sort_config,
            self.state.last_updated,
        )
    }

    pub async fn details(&self, id: &str) -> Result<MiningPoolDetails, AppError> {
        Ok(self.source.fetch_pool_details(id).await?)
    }

    /// Refresh on a fixed interval, handing every view to `on_view`.
    ///
    /// Runs forever when `rounds` is `None`. A failed refresh is logged and
    /// the previous rows stay on screen until the next tick.
    pub async fn watch<F>(&mut self, interval: Duration, rounds: Option<u64>, mut on_view: F)
    where
        F: FnMut(&TableView) + Send,
    {
        let mut round = 0u64;
        loop {
            if rounds.is_some_and(|limit| round >= limit) {
                break;
            }
            if round > 0 {
                sleep(interval).await;
            }

            round += 1;
            match self.refresh().await {
                Ok(view) => on_view(&view),
                Err(e) => {
                    warn!("⚠️  Refresh #{} failed: {}", round, e);
                    on_view(&self.view());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{SortConfig, SortField, StatusFilter};
    use crate::infrastructure::MockPoolApi;

    fn service() -> DashboardService<MockPoolApi> {
        DashboardService::new(MockPoolApi::with_seed(11), DashboardState::default())
    }

    #[tokio::test]
    async fn test_refresh_builds_view_and_stamps_time() {
        let mut service = service();
        assert!(service.state().last_updated.is_none());

        let view = service.refresh().await.unwrap();

        assert_eq!(view.rows.len(), 4);
        assert!(!view.stats.is_filtered);
        assert!(service.state().last_updated.is_some());
        assert_eq!(view.rows[0].name, "US East Pool");
    }

    #[tokio::test]
    async fn test_state_changes_apply_to_cached_rows() {
        let mut service = service();
        service.refresh().await.unwrap();

        service.state_mut().set_status_filter(StatusFilter::Online);
        service.state_mut().set_sort_field(SortField::Name);
        let view = service.view();

        assert_eq!(view.sort, SortConfig::desc(SortField::Name));
        let names: Vec<&str> = view.rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["US East Pool", "Asia Pacific Pool"]);
        assert_eq!(view.stats.message, "Showing 2 of 4 pools");
    }

    #[tokio::test]
    async fn test_details_not_found() {
        let service = service();
        let err = service.details("pool-42").await.unwrap_err();
        assert!(err.to_string().contains("pool-42"));
    }

    #[tokio::test]
    async fn test_watch_stops_after_rounds() {
        let mut service = service();
        let mut seen = 0;

        service
            .watch(Duration::from_millis(1), Some(3), |view| {
                assert_eq!(view.rows.len(), 4);
                seen += 1;
            })
            .await;

        assert_eq!(seen, 3);
    }

    #[tokio::test]
    async fn test_watch_with_zero_rounds_renders_nothing() {
        let mut service = service();
        let mut seen = 0;

        service
            .watch(Duration::from_millis(1), Some(0), |_| seen += 1)
            .await;

        assert_eq!(seen, 0);
        assert!(service.state().last_updated.is_none());
    }
}
