//! Usage and analytics snapshots
//!
//! Both are read-only and backend-owned. The empty values stand in when the
//! backend has nothing yet (a fresh project answers these calls with 404).

use chrono::{Days, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Daily request limit assumed until the backend reports one
pub const DEFAULT_DAILY_LIMIT: u64 = 100;

// ============================================================================
// UsageSnapshot
// ============================================================================

/// Today's request usage for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    pub current_usage: u64,
    pub max_limit: u64,
}

impl UsageSnapshot {
    /// No requests against the default limit
    pub fn empty() -> Self {
        Self {
            current_usage: 0,
            max_limit: DEFAULT_DAILY_LIMIT,
        }
    }

    /// Share of the daily limit used, in percent
    pub fn percent(&self) -> f64 {
        if self.max_limit == 0 {
            0.0
        } else {
            self.current_usage as f64 / self.max_limit as f64 * 100.0
        }
    }

    pub fn level(&self) -> UsageLevel {
        UsageLevel::from_percent(self.percent())
    }
}

impl Default for UsageSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// How close usage is to the daily limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    /// 60% or more
    Warning,
    /// 80% or more
    High,
}

impl UsageLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            UsageLevel::High
        } else if percent >= 60.0 {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        }
    }
}

// ============================================================================
// AnalyticsSnapshot
// ============================================================================

/// Requests served in one hour of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRequests {
    pub hour: String,
    pub requests: u64,
}

/// Cache hit rate for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStat {
    pub date: String,
    pub hit_rate: f64,
}

/// Request analytics for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_requests: u64,
    pub cache_hit_rate: f64,
    pub rate_limit_remaining: u64,
    pub requests_today: u64,
    pub requests_limit: u64,
    #[serde(default)]
    pub hourly_requests: Vec<HourlyRequests>,
    #[serde(default)]
    pub cache_stats: Vec<CacheStat>,
}

impl AnalyticsSnapshot {
    /// Zeroed analytics with 24 hourly and 7 daily buckets ending `today`
    pub fn empty_on(today: NaiveDate) -> Self {
        let hourly_requests = (0..24)
            .map(|hour| HourlyRequests {
                hour: hour_label(hour),
                requests: 0,
            })
            .collect();

        let cache_stats = (0..7u64)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .map(|date| CacheStat {
                date: date.format("%b %-d").to_string(),
                hit_rate: 0.0,
            })
            .collect();

        Self {
            total_requests: 0,
            cache_hit_rate: 0.0,
            rate_limit_remaining: DEFAULT_DAILY_LIMIT,
            requests_today: 0,
            requests_limit: DEFAULT_DAILY_LIMIT,
            hourly_requests,
            cache_stats,
        }
    }

    /// Zeroed analytics for the local current day
    pub fn empty() -> Self {
        Self::empty_on(Local::now().date_naive())
    }

    /// Share of today's limit used, in percent
    pub fn usage_percent(&self) -> f64 {
        if self.requests_limit == 0 {
            0.0
        } else {
            self.requests_today as f64 / self.requests_limit as f64 * 100.0
        }
    }
}

/// Twelve-hour label for an hour of the day (`12 AM`, `1 AM`, … `11 PM`)
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", twelve, suffix)
}

// ============================================================================
// Daily reset countdown
// ============================================================================

/// Time left until the next midnight after `now`
pub fn time_until_reset(now: NaiveDateTime) -> Duration {
    let tomorrow = now
        .date()
        .succ_opt()
        .unwrap_or(now.date())
        .and_time(NaiveTime::MIN);
    tomorrow - now
}

/// Render a countdown as `{h}h {m}m {s}s`
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    format!(
        "{}h {}m {}s",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Countdown to the next local midnight
pub fn reset_countdown() -> String {
    format_countdown(time_until_reset(Local::now().naive_local()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_usage_snapshot_wire_shape() {
        let usage: UsageSnapshot =
            serde_json::from_str(r#"{"currentUsage": 42, "maxLimit": 100}"#).unwrap();
        assert_eq!(usage.current_usage, 42);
        assert_eq!(usage.level(), UsageLevel::Normal);
        assert_eq!(UsageSnapshot::empty(), UsageSnapshot { current_usage: 0, max_limit: 100 });
    }

    #[test]
    fn test_usage_levels() {
        assert_eq!(UsageLevel::from_percent(59.9), UsageLevel::Normal);
        assert_eq!(UsageLevel::from_percent(60.0), UsageLevel::Warning);
        assert_eq!(UsageLevel::from_percent(80.0), UsageLevel::High);
        let zero_limit = UsageSnapshot { current_usage: 5, max_limit: 0 };
        assert_eq!(zero_limit.percent(), 0.0);
    }

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(0), "12 AM");
        assert_eq!(hour_label(1), "1 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(23), "11 PM");
    }

    #[test]
    fn test_empty_analytics() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let empty = AnalyticsSnapshot::empty_on(today);

        assert_eq!(empty.total_requests, 0);
        assert_eq!(empty.rate_limit_remaining, 100);
        assert_eq!(empty.requests_limit, 100);
        assert_eq!(empty.hourly_requests.len(), 24);
        assert_eq!(empty.hourly_requests[0].hour, "12 AM");
        assert_eq!(empty.hourly_requests[23].hour, "11 PM");

        let dates: Vec<&str> = empty.cache_stats.iter().map(|c| c.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["Feb 25", "Feb 26", "Feb 27", "Feb 28", "Feb 29", "Mar 1", "Mar 2"]
        );
    }

    #[test]
    fn test_analytics_wire_shape() {
        let json = r#"{
            "totalRequests": 10,
            "cacheHitRate": 12.5,
            "rateLimitRemaining": 90,
            "requestsToday": 10,
            "requestsLimit": 100,
            "hourlyRequests": [{"hour": "1 AM", "requests": 3}],
            "cacheStats": [{"date": "Mar 2", "hitRate": 50.0}]
        }"#;
        let analytics: AnalyticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(analytics.hourly_requests[0].requests, 3);
        assert_eq!(analytics.cache_stats[0].hit_rate, 50.0);
        assert_eq!(analytics.usage_percent(), 10.0);
    }

    #[test]
    fn test_time_until_reset() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(22, 30, 15)
            .unwrap();
        let remaining = time_until_reset(now);
        assert_eq!(format_countdown(remaining), "1h 29m 45s");

        let midnight = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_countdown(time_until_reset(midnight)), "24h 0m 0s");
    }
}
