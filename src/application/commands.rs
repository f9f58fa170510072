//! CLI commands and handlers
use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use tracing::info;

use crate::application::report::render_details;
use crate::application::services::DashboardService;
use crate::domain::dashboard::DashboardState;
use crate::domain::pool::PoolSource;
use crate::domain::table::{
    validate_filter_ranges, SortConfig, SortDirection, SortField, StatusFilter, ValueRange,
};
use crate::infrastructure::{HttpPoolClient, MockPoolApi};
use crate::shared::config::DashboardConfig;
use crate::shared::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "minepools")]
#[command(version, about = "Mining Pools Dashboard - Bitcoin pool statistics in the terminal")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Base URL of a running pools API (overrides config); the built-in mock is used otherwise
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the pools table
    Pools {
        #[command(flatten)]
        table: TableArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show extended details of one pool
    Details {
        /// Pool identifier, e.g. pool-1
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Refresh the table periodically
    Watch {
        #[command(flatten)]
        table: TableArgs,

        /// Refresh interval in seconds (defaults to the config value)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Stop after this many refreshes
        #[arg(short, long)]
        rounds: Option<u64>,
    },

    /// Send a request to the built-in mock API and print the raw response
    Api {
        /// HTTP method, e.g. GET
        method: String,

        /// Request path, e.g. /mining-pools/pool-1
        path: String,
    },
}

/// Sort and filter selection shared by the table commands
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Case-insensitive substring of the pool name
    #[arg(short, long)]
    pub search: Option<String>,

    /// all, online, degraded or offline
    #[arg(long)]
    pub status: Option<StatusFilter>,

    /// name, hashrate, workers, reject-rate or status
    #[arg(long)]
    pub sort: Option<SortField>,

    /// asc or desc
    #[arg(long)]
    pub direction: Option<SortDirection>,

    #[arg(long)]
    pub min_hashrate: Option<f64>,
    #[arg(long)]
    pub max_hashrate: Option<f64>,

    #[arg(long)]
    pub min_workers: Option<f64>,
    #[arg(long)]
    pub max_workers: Option<f64>,

    /// Fraction in [0, 1]
    #[arg(long)]
    pub min_reject_rate: Option<f64>,
    #[arg(long)]
    pub max_reject_rate: Option<f64>,
}

impl TableArgs {
    /// Overlay the CLI selection on `state`; ranges are normalized afterwards
    pub fn apply(&self, state: &mut DashboardState) {
        if let Some(search) = &self.search {
            state.set_search_term(search.clone());
        }
        if let Some(status) = self.status {
            state.set_status_filter(status);
        }
        if self.sort.is_some() || self.direction.is_some() {
            let current = state.sort_config;
            state.set_sort_config(SortConfig::new(
                self.sort.unwrap_or(current.field),
                self.direction.unwrap_or(current.direction),
            ));
        }

        let filter = &state.filter_config;
        let hashrate = overlay(filter.hashrate_range, self.min_hashrate, self.max_hashrate);
        let workers = overlay(filter.workers_range, self.min_workers, self.max_workers);
        let reject_rate = overlay(filter.reject_rate_range, self.min_reject_rate, self.max_reject_rate);
        state.set_hashrate_range(hashrate);
        state.set_workers_range(workers);
        state.set_reject_rate_range(reject_rate);

        let validated = validate_filter_ranges(&state.filter_config);
        state.set_filter_config(validated);
    }
}

fn overlay(range: ValueRange, min: Option<f64>, max: Option<f64>) -> ValueRange {
    ValueRange::new(min.unwrap_or(range.min), max.unwrap_or(range.max))
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command
    pub async fn execute(cli: Cli, config: DashboardConfig) -> Result<(), AppError> {
        let base_url = cli.api_url.or_else(|| config.api.base_url.clone());

        match cli.command {
            Commands::Pools { table, json } => {
                Self::execute_pools_command(table, json, base_url, &config).await
            }
            Commands::Details { id, json } => {
                Self::execute_details_command(&id, json, base_url, &config).await
            }
            Commands::Watch { table, interval, rounds } => {
                Self::execute_watch_command(table, interval, rounds, base_url, &config).await
            }
            Commands::Api { method, path } => {
                Self::execute_api_command(&method, &path, &config).await
            }
        }
    }

    fn service(
        base_url: Option<String>,
        config: &DashboardConfig,
    ) -> Result<DashboardService<Box<dyn PoolSource>>, AppError> {
        let source = Self::pool_source(base_url, config)?;
        Ok(DashboardService::new(source, config.initial_state()))
    }

    async fn execute_pools_command(
        table: TableArgs,
        json: bool,
        base_url: Option<String>,
        config: &DashboardConfig,
    ) -> Result<(), AppError> {
        let mut service = Self::service(base_url, config)?;
        table.apply(service.state_mut());

        let view = service.refresh().await?;
        if json {
            println!("{}", view.to_json()?);
        } else {
            println!("{}", view.render_text());
        }
        Ok(())
    }

    async fn execute_details_command(
        id: &str,
        json: bool,
        base_url: Option<String>,
        config: &DashboardConfig,
    ) -> Result<(), AppError> {
        let service = Self::service(base_url, config)?;

        let details = service.details(id).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&details)?);
        } else {
            println!("{}", render_details(&details));
        }
        Ok(())
    }

    async fn execute_watch_command(
        table: TableArgs,
        interval: Option<u64>,
        rounds: Option<u64>,
        base_url: Option<String>,
        config: &DashboardConfig,
    ) -> Result<(), AppError> {
        let mut service = Self::service(base_url, config)?;
        table.apply(service.state_mut());

        let interval = interval
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.refresh.interval());
        info!("👀 Refreshing every {}s", interval.as_secs());

        service
            .watch(interval, rounds, |view| println!("{}\n", view.render_text()))
            .await;
        Ok(())
    }

    fn pool_source(base_url: Option<String>, config: &DashboardConfig) -> Result<Box<dyn PoolSource>, AppError> {
        match base_url {
            Some(url) => {
                info!("🌐 Using pools API at {}", url);
                Ok(Box::new(HttpPoolClient::new(url)?))
            }
            None => {
                info!("🧪 Using built-in mock pools API");
                Ok(Box::new(Self::mock_api(config)))
            }
        }
    }

    fn mock_api(config: &DashboardConfig) -> MockPoolApi {
        MockPoolApi::new(
            Duration::from_millis(config.api.list_delay_ms),
            Duration::from_millis(config.api.details_delay_ms),
        )
    }

    async fn execute_api_command(method: &str, path: &str, config: &DashboardConfig) -> Result<(), AppError> {
        let response = Self::mock_api(config).handle(method, path).await;

        println!("Status: {}", response.status);
        if let Some(allow) = &response.allow {
            println!("Allow: {}", allow.join(", "));
        }
        println!("{}", serde_json::to_string_pretty(&response.body)?);
        Ok(())
    }
}
