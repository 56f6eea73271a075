use serde::{Deserialize, Serialize};

use super::trend::{classify_trend, Trend};
use crate::api::Metric;

/// A metrics series plus the aggregates the dashboard shows alongside it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Most recent period first
    pub metrics: Vec<Metric>,
    pub avg_review_turnaround: f64,
    pub avg_merge_time: f64,
    pub pr_trend: Trend,
    pub merge_time_trend: Trend,
    pub review_trend: Trend,
}

impl MetricsSummary {
    pub fn from_series(metrics: Vec<Metric>) -> Self {
        let avg_review_turnaround = average(&metrics, |m| m.median_review_turnaround_seconds);
        let avg_merge_time = average(&metrics, |m| m.median_merge_time_seconds);
        let pr_trend = latest_trend(&metrics, |m| m.total_prs as f64);
        let merge_time_trend = latest_trend(&metrics, |m| m.median_merge_time_seconds);
        let review_trend = latest_trend(&metrics, |m| m.median_review_turnaround_seconds);

        Self {
            metrics,
            avg_review_turnaround,
            avg_merge_time,
            pr_trend,
            merge_time_trend,
            review_trend,
        }
    }

    /// The most recent period, if any
    pub fn latest(&self) -> Option<&Metric> {
        self.metrics.first()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

/// Arithmetic mean of a field, 0 for an empty series
pub fn average<F>(metrics: &[Metric], field: F) -> f64
where
    F: Fn(&Metric) -> f64,
{
    if metrics.is_empty() {
        return 0.0;
    }
    metrics.iter().map(field).sum::<f64>() / metrics.len() as f64
}

/// Trend of a field between the latest period and the one before it
pub fn latest_trend<F>(metrics: &[Metric], field: F) -> Trend
where
    F: Fn(&Metric) -> f64,
{
    match metrics {
        [current, previous, ..] => classify_trend(field(current), field(previous)),
        _ => Trend::Unchanged,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn metric(period: &str, total_prs: u64, merge_secs: f64, review_secs: f64) -> Metric {
        Metric {
            period: period.to_string(),
            start_date: format!("{period}-start"),
            end_date: format!("{period}-end"),
            total_prs,
            merged_prs: total_prs / 2,
            reviewed_prs: total_prs,
            median_merge_time_seconds: merge_secs,
            median_review_turnaround_seconds: review_secs,
            median_merge_time: String::new(),
            median_review_turnaround: String::new(),
        }
    }

    #[test]
    fn test_average_of_empty_series_is_zero() {
        assert_eq!(average(&[], |m| m.median_merge_time_seconds), 0.0);
    }

    #[test]
    fn test_average_of_two_periods() {
        let series = vec![metric("w2", 1, 3600.0, 0.0), metric("w1", 1, 7200.0, 0.0)];
        assert_eq!(average(&series, |m| m.median_merge_time_seconds), 5400.0);
    }

    #[test]
    fn test_single_period_has_no_trend() {
        let summary = MetricsSummary::from_series(vec![metric("w1", 40, 100.0, 50.0)]);
        assert_eq!(summary.pr_trend, Trend::Unchanged);
        assert_eq!(summary.merge_time_trend, Trend::Unchanged);
        assert_eq!(summary.review_trend, Trend::Unchanged);
        assert_eq!(summary.avg_merge_time, 100.0);
    }

    #[test]
    fn test_trends_compare_first_two_periods_only() {
        let summary = MetricsSummary::from_series(vec![
            metric("w3", 10, 1800.0, 900.0),
            metric("w2", 5, 3600.0, 900.0),
            metric("w1", 50, 60.0, 10.0),
        ]);

        assert_eq!(summary.pr_trend, Trend::Up);
        assert_eq!(summary.merge_time_trend, Trend::Down);
        assert_eq!(summary.review_trend, Trend::Unchanged);
        assert_eq!(summary.avg_merge_time, 1820.0);
        assert_eq!(summary.latest().map(|m| m.period.as_str()), Some("w3"));
    }

    #[test]
    fn test_empty_summary_is_zeroed() {
        let summary = MetricsSummary::from_series(Vec::new());
        assert!(summary.is_empty());
        assert_eq!(summary, MetricsSummary::default());
    }
}
