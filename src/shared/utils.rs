//! Display formatters for pool metrics

use crate::domain::pool::PoolStatus;

/// Hashrate with one decimal, e.g. `830.5 TH/s`
pub fn format_hashrate(hashrate_ths: f64) -> String {
    if hashrate_ths == 0.0 {
        return "0 TH/s".to_string();
    }
    format!("{:.1} TH/s", hashrate_ths)
}

/// Reject rate given as a fraction, rendered as a percentage
pub fn format_reject_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

pub fn format_btc(amount: f64) -> String {
    format!("{:.6} BTC", amount)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn status_label(status: PoolStatus) -> &'static str {
    match status {
        PoolStatus::Online => "Online",
        PoolStatus::Degraded => "Degraded",
        PoolStatus::Offline => "Offline",
        PoolStatus::Unknown => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hashrate() {
        assert_eq!(format_hashrate(0.0), "0 TH/s");
        assert_eq!(format_hashrate(830.5), "830.5 TH/s");
        assert_eq!(format_hashrate(460.33), "460.3 TH/s");
        assert_eq!(format_hashrate(1.0), "1.0 TH/s");
        assert_eq!(format_hashrate(999.99), "1000.0 TH/s");
    }

    #[test]
    fn test_format_reject_rate() {
        assert_eq!(format_reject_rate(0.012), "1.20%");
        assert_eq!(format_reject_rate(0.045), "4.50%");
        assert_eq!(format_reject_rate(0.0), "0.00%");
        assert_eq!(format_reject_rate(0.001), "0.10%");
    }

    #[test]
    fn test_format_btc() {
        assert_eq!(format_btc(0.035), "0.035000 BTC");
        assert_eq!(format_btc(0.021456), "0.021456 BTC");
        assert_eq!(format_btc(10.0), "10.000000 BTC");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(99.82), "99.82%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(100.0), "100.00%");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(PoolStatus::Online), "Online");
        assert_eq!(status_label(PoolStatus::Unknown), "Unknown");
    }
}
