use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::domain::dashboard::DashboardState;
use crate::domain::table::{validate_filter_ranges, FilterConfig, SortConfig};
use crate::shared::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiCfg {
    /// Base URL of a running pools API; the in-process mock is used when unset
    pub base_url: Option<String>,
    pub list_delay_ms: u64,
    pub details_delay_ms: u64,
}

impl Default for ApiCfg {
    fn default() -> Self {
        Self {
            base_url: None,
            list_delay_ms: 500,
            details_delay_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefreshCfg {
    pub interval_secs: u64,
}

impl Default for RefreshCfg {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

impl RefreshCfg {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Dashboard configuration, every section optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiCfg,
    pub refresh: RefreshCfg,
    pub filters: FilterConfig,
    pub sort: SortConfig,
}

impl DashboardConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// Initial dashboard state; configured ranges are normalized first
    pub fn initial_state(&self) -> DashboardState {
        DashboardState::new(self.sort, validate_filter_ranges(&self.filters))
    }
}

/// Загрузчик конфигурации
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DashboardConfig, AppError> {
        let config_content = fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file: {}", e)))?;

        DashboardConfig::from_toml_str(&config_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{SortDirection, SortField, StatusFilter, ValueRange};

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = DashboardConfig::from_toml_str("").unwrap();
        assert!(cfg.api.base_url.is_none());
        assert_eq!(cfg.api.list_delay_ms, 500);
        assert_eq!(cfg.refresh.interval(), Duration::from_secs(30));
        assert_eq!(cfg.filters, FilterConfig::default());
        assert_eq!(cfg.sort, SortConfig::default());
    }

    #[test]
    fn test_full_config() {
        let cfg = DashboardConfig::from_toml_str(
            r#"
            [api]
            base_url = "http://localhost:3000/api"
            list_delay_ms = 0

            [refresh]
            interval_secs = 10

            [filters]
            searchTerm = "pool"
            statusFilter = "degraded"
            hashrateRange = { min = 1000.0, max = 100.0 }

            [sort]
            field = "activeWorkers"
            direction = "asc"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.api.base_url.as_deref(), Some("http://localhost:3000/api"));
        assert_eq!(cfg.api.list_delay_ms, 0);
        assert_eq!(cfg.api.details_delay_ms, 300);
        assert_eq!(cfg.refresh.interval_secs, 10);
        assert_eq!(cfg.filters.status_filter, StatusFilter::Degraded);
        assert_eq!(cfg.sort, SortConfig::new(SortField::ActiveWorkers, SortDirection::Asc));

        let state = cfg.initial_state();
        assert_eq!(state.filter_config.hashrate_range, ValueRange::new(100.0, 100.0));
        assert_eq!(state.filter_config.search_term, "pool");
    }

    #[test]
    fn test_partial_sort_section_keeps_default_direction() {
        let cfg = DashboardConfig::from_toml_str("[sort]\nfield = \"name\"").unwrap();
        assert_eq!(cfg.sort, SortConfig::desc(SortField::Name));

        let cfg = DashboardConfig::from_toml_str("[sort]\ndirection = \"asc\"").unwrap();
        assert_eq!(cfg.sort, SortConfig::asc(SortField::HashrateThs));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let err = DashboardConfig::from_toml_str("[sort]\nfield = \"volume\"").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = ConfigLoader::load_config("/nonexistent/minepools.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
