// src/application/report.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::pool::{MiningPool, MiningPoolDetails};
use crate::domain::table::{
    filter_and_sort_pools, filter_stats, sort_indicator, FilterConfig, FilterStats, SortConfig,
    SortField, SortIndicator,
};
use crate::shared::utils::{format_btc, format_hashrate, format_percent, format_reject_rate, status_label};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub field: SortField,
    pub title: &'static str,
    pub indicator: SortIndicator,
}

/// Rows ready to render, plus the header annotations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<MiningPool>,
    pub stats: FilterStats,
    pub sort: SortConfig,
    pub last_updated: Option<DateTime<Utc>>,
}

impl TableView {
    pub fn build(
        pools: &[MiningPool],
        filter_config: &FilterConfig,
        sort_config: &SortConfig,
        last_updated: Option<DateTime<Utc>>,
    ) -> Self {
        let rows = filter_and_sort_pools(pools, filter_config, sort_config);
        let stats = filter_stats(pools.len(), rows.len());
        let columns = SortField::ALL
            .iter()
            .map(|&field| ColumnHeader {
                field,
                title: field.title(),
                indicator: sort_indicator(field, sort_config),
            })
            .collect();

        Self {
            columns,
            rows,
            stats,
            sort: *sort_config,
            last_updated,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text table for terminals
    pub fn render_text(&self) -> String {
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("{} {}", c.title, c.indicator.glyph()))
            .collect();

        let mut lines = vec![format!(
            "{:<24} {:>16} {:>12} {:>14} {:>12}",
            header[0], header[1], header[2], header[3], header[4]
        )];

        for pool in &self.rows {
            lines.push(format!(
                "{:<24} {:>16} {:>12} {:>14} {:>12}",
                pool.name,
                format_hashrate(pool.hashrate_ths),
                pool.active_workers,
                format_reject_rate(pool.reject_rate),
                status_label(pool.status),
            ));
        }

        if self.rows.is_empty() {
            lines.push("No pools match the current filters".to_string());
        }

        lines.push(self.stats.message.clone());
        if let Some(updated) = self.last_updated {
            lines.push(format!("Updated at {}", updated.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        lines.join("\n")
    }
}

/// Key/value listing of one pool's details
pub fn render_details(details: &MiningPoolDetails) -> String {
    let pool = &details.pool;
    [
        format!("Pool:          {} ({})", pool.name, pool.id),
        format!("Status:        {}", status_label(pool.status)),
        format!("Hashrate:      {}", format_hashrate(pool.hashrate_ths)),
        format!("Workers:       {}", pool.active_workers),
        format!("Reject rate:   {}", format_reject_rate(pool.reject_rate)),
        format!("Revenue 24h:   {}", format_btc(details.last_24h_revenue_btc)),
        format!("Uptime:        {}", format_percent(details.uptime_percent)),
        format!("Location:      {}", details.location),
        format!("Fee:           {}", format_percent(details.fee_percent)),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pool::PoolStatus;
    use crate::domain::table::StatusFilter;

    fn sample_pools() -> Vec<MiningPool> {
        vec![
            MiningPool::new("pool-1", "US East Pool", 830.5, 1240, 0.012, PoolStatus::Online),
            MiningPool::new("pool-2", "EU Central Pool", 460.3, 876, 0.045, PoolStatus::Degraded),
            MiningPool::new("pool-4", "Canada North Pool", 0.0, 0, 0.0, PoolStatus::Offline),
        ]
    }

    #[test]
    fn test_table_view_annotations() {
        let filter = FilterConfig {
            status_filter: StatusFilter::Online,
            ..FilterConfig::default()
        };
        let view = TableView::build(&sample_pools(), &filter, &SortConfig::default(), None);

        assert_eq!(view.rows.len(), 1);
        assert!(view.stats.is_filtered);
        assert_eq!(view.stats.message, "Showing 1 of 3 pools");
        assert_eq!(view.columns.len(), 5);
        assert_eq!(view.columns[1].indicator, SortIndicator::Descending);
        assert_eq!(view.columns[0].indicator, SortIndicator::Neutral);
    }

    #[test]
    fn test_render_text() {
        let view = TableView::build(&sample_pools(), &FilterConfig::default(), &SortConfig::default(), None);
        let text = view.render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("Hashrate ↓"));
        assert!(lines[1].starts_with("US East Pool"));
        assert!(lines[1].contains("830.5 TH/s"));
        assert!(lines[1].contains("1.20%"));
        assert!(lines[3].contains("0 TH/s"));
        assert_eq!(*lines.last().unwrap(), "Showing 3 pools");
    }

    #[test]
    fn test_render_text_when_nothing_matches() {
        let filter = FilterConfig {
            search_term: "zzz".to_string(),
            ..FilterConfig::default()
        };
        let view = TableView::build(&sample_pools(), &filter, &SortConfig::default(), None);
        assert!(view.render_text().contains("No pools match the current filters"));
    }

    #[test]
    fn test_to_json() {
        let view = TableView::build(&sample_pools(), &FilterConfig::default(), &SortConfig::default(), None);
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();

        assert_eq!(json["rows"][0]["hashrateTHs"], 830.5);
        assert_eq!(json["stats"]["isFiltered"], false);
        assert_eq!(json["sort"]["field"], "hashrateTHs");
        assert_eq!(json["columns"][1]["indicator"], "descending");
    }

    #[test]
    fn test_render_details() {
        let details = MiningPoolDetails {
            pool: sample_pools()[0].clone(),
            last_24h_revenue_btc: 0.035,
            uptime_percent: 99.82,
            location: "Ashburn, VA".to_string(),
            fee_percent: 1.0,
        };
        let text = render_details(&details);

        assert!(text.contains("US East Pool (pool-1)"));
        assert!(text.contains("0.035000 BTC"));
        assert!(text.contains("99.82%"));
        assert!(text.contains("Ashburn, VA"));
        assert!(text.contains("1.00%"));
    }
}
