use super::charts::{render_duration_chart, render_pull_request_trends};
use super::table::render_metrics_table;
use crate::api::Aggregation;
use crate::formatters::{format_duration, DateAndDay};
use crate::metrics::{LoadStatus, MetricsQuery, MetricsSummary, MetricsView, TrendIndicator};

pub fn render_header(query: &MetricsQuery, date: &DateAndDay) -> Vec<String> {
    let title = format!("🔍 CodeVigil · {}", query.repo);
    vec![
        title.clone(),
        format!(
            "   {}, {} · {} aggregation",
            date.current_day,
            date.current_date,
            aggregation_label(query.aggregation)
        ),
        "=".repeat(title.chars().count() + 8),
    ]
}

fn aggregation_label(aggregation: Aggregation) -> &'static str {
    match aggregation {
        Aggregation::Daily => "Daily",
        Aggregation::Weekly => "Weekly",
    }
}

/// Latest-period cards with trend glyphs, plus series averages
///
/// An empty series shows zeros rather than blanks.
pub fn render_stat_cards(summary: &MetricsSummary) -> Vec<String> {
    let (period, total, merged, merge_secs, review_secs) = match summary.latest() {
        Some(m) => (
            m.period.as_str(),
            m.total_prs,
            m.merged_prs,
            m.median_merge_time_seconds,
            m.median_review_turnaround_seconds,
        ),
        None => ("-", 0, 0, 0.0, 0.0),
    };

    vec![
        format!("📊 LATEST PERIOD ({period})"),
        "─".repeat(20),
        format!(
            "  Pull Requests       {:>8} {}  ({merged} merged)",
            total,
            TrendIndicator::for_count(summary.pr_trend).glyph()
        ),
        format!(
            "  Median Merge Time   {:>8} {}",
            format_duration(merge_secs),
            TrendIndicator::for_duration(summary.merge_time_trend).glyph()
        ),
        format!(
            "  Review Turnaround   {:>8} {}",
            format_duration(review_secs),
            TrendIndicator::for_duration(summary.review_trend).glyph()
        ),
        String::new(),
        format!(
            "  Average merge time {} · average review turnaround {}",
            format_duration(summary.avg_merge_time),
            format_duration(summary.avg_review_turnaround)
        ),
    ]
}

/// One-line notice for anything other than a populated series
pub fn render_status_banner(view: &MetricsView) -> Option<String> {
    match &view.status {
        LoadStatus::Idle => Some("💤 No repository selected".to_string()),
        LoadStatus::Loading => Some("⏳ Loading metrics...".to_string()),
        LoadStatus::Empty => Some("📭 No metrics available for this repository yet".to_string()),
        LoadStatus::Failed { .. } => {
            Some("⚠️  Metrics could not be loaded; showing empty results (see logs)".to_string())
        }
        LoadStatus::Ready => None,
    }
}

/// Full dashboard for one query
pub fn render_dashboard(query: &MetricsQuery, view: &MetricsView, date: &DateAndDay) -> String {
    let mut lines = render_header(query, date);
    lines.push(String::new());

    if let Some(banner) = render_status_banner(view) {
        lines.push(banner);
        lines.push(String::new());
    }
    if view.is_loading() {
        return lines.join("\n");
    }

    let summary = &view.summary;
    let sections = [
        render_stat_cards(summary),
        render_pull_request_trends(&summary.metrics),
        render_duration_chart("⏱️  MERGE TIME", "Merge Time", &summary.metrics, |m| {
            m.median_merge_time_seconds
        }),
        render_duration_chart("👀 REVIEW TURNAROUND", "Review Time", &summary.metrics, |m| {
            m.median_review_turnaround_seconds
        }),
        render_metrics_table(&summary.metrics),
    ];
    for section in sections {
        lines.extend(section);
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RepoId;
    use crate::metrics::summary::tests::metric;

    fn date() -> DateAndDay {
        DateAndDay {
            current_date: "October 16, 2026".to_string(),
            current_day: "Friday".to_string(),
        }
    }

    fn query() -> MetricsQuery {
        MetricsQuery::new(RepoId::new("octo", "hello"), Aggregation::Weekly)
    }

    #[test]
    fn test_header_shows_repo_and_date() {
        let lines = render_header(&query(), &date());
        assert!(lines[0].contains("octo/hello"));
        assert_eq!(lines[1].trim(), "Friday, October 16, 2026 · Weekly aggregation");
    }

    #[test]
    fn test_stat_cards_use_trend_sentiment() {
        let summary = MetricsSummary::from_series(vec![
            metric("w2", 10, 1800.0, 900.0),
            metric("w1", 5, 3600.0, 600.0),
        ]);
        let lines = render_stat_cards(&summary);

        assert!(lines[2].contains("10 ▲") && lines[2].contains("(5 merged)"));
        // Merge time went down, which is good
        assert!(lines[3].contains("30m ▲"));
        // Review turnaround went up, which is bad
        assert!(lines[4].contains("15m ▼"));
        assert!(lines[6].contains("Average merge time 45m"));
    }

    #[test]
    fn test_stat_cards_fall_back_to_zero() {
        let lines = render_stat_cards(&MetricsSummary::default());
        assert!(lines[0].contains("(-)"));
        assert!(lines[2].contains("0 –"));
        assert!(lines[3].contains("0m –"));
    }

    #[test]
    fn test_loading_dashboard_shows_only_banner() {
        let view = MetricsView {
            query: Some(query()),
            status: LoadStatus::Loading,
            summary: MetricsSummary::default(),
        };
        let output = render_dashboard(&query(), &view, &date());
        assert!(output.contains("Loading metrics"));
        assert!(!output.contains("DETAILED METRICS"));
    }

    #[test]
    fn test_failed_dashboard_is_zeroed_with_notice() {
        let view = MetricsView {
            query: Some(query()),
            status: LoadStatus::Failed {
                reason: "HTTP 500".to_string(),
            },
            summary: MetricsSummary::default(),
        };
        let output = render_dashboard(&query(), &view, &date());
        assert!(output.contains("could not be loaded"));
        assert!(output.contains("DETAILED METRICS"));
        assert!(output.contains("(no periods)"));
    }
}
