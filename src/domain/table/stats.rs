//! Header annotations: sort glyphs and the filter summary line

use serde::Serialize;

use super::{SortConfig, SortDirection, SortField};

/// Glyph drawn next to a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Ascending,
    Descending,
    Neutral,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
            SortIndicator::Neutral => "↕️",
        }
    }
}

pub fn sort_indicator(field: SortField, sort_config: &SortConfig) -> SortIndicator {
    if sort_config.field != field {
        return SortIndicator::Neutral;
    }

    match sort_config.direction {
        SortDirection::Asc => SortIndicator::Ascending,
        SortDirection::Desc => SortIndicator::Descending,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    pub is_filtered: bool,
    pub message: String,
}

/// Summarizes how many rows survived filtering.
///
/// Callers pass `filtered_count <= total_count`; nothing here checks it.
pub fn filter_stats(total_count: usize, filtered_count: usize) -> FilterStats {
    let is_filtered = filtered_count < total_count;
    let message = if is_filtered {
        format!("Showing {} of {} pools", filtered_count, total_count)
    } else {
        format!("Showing {} pools", total_count)
    };

    FilterStats { is_filtered, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_for_active_field() {
        let sort = SortConfig::asc(SortField::Name);
        assert_eq!(sort_indicator(SortField::Name, &sort), SortIndicator::Ascending);
        assert_eq!(sort_indicator(SortField::Name, &sort).glyph(), "↑");

        let sort = SortConfig::desc(SortField::Name);
        assert_eq!(sort_indicator(SortField::Name, &sort).glyph(), "↓");
    }

    #[test]
    fn test_indicator_for_inactive_field() {
        let sort = SortConfig::asc(SortField::Name);
        assert_eq!(sort_indicator(SortField::HashrateThs, &sort), SortIndicator::Neutral);
        assert_eq!(sort_indicator(SortField::Status, &sort).glyph(), "↕️");
    }

    #[test]
    fn test_stats_when_filtered() {
        let stats = filter_stats(5, 3);
        assert!(stats.is_filtered);
        assert_eq!(stats.message, "Showing 3 of 5 pools");
    }

    #[test]
    fn test_stats_when_not_filtered() {
        let stats = filter_stats(5, 5);
        assert!(!stats.is_filtered);
        assert_eq!(stats.message, "Showing 5 pools");
    }

    #[test]
    fn test_stats_with_empty_table() {
        let stats = filter_stats(0, 0);
        assert!(!stats.is_filtered);
        assert_eq!(stats.message, "Showing 0 pools");
    }
}
