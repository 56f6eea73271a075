use crate::api::Metric;
use crate::formatters::{format_axis_tick, format_tooltip_value};

const BAR_WIDTH: usize = 24;

/// Horizontal bar proportional to `value / max`
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if width == 0 || max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

fn period_width(metrics: &[Metric]) -> usize {
    metrics.iter().map(|m| m.period.len()).max().unwrap_or(0).max(6)
}

/// Pull request counts per period, oldest first
pub fn render_pull_request_trends(metrics: &[Metric]) -> Vec<String> {
    let mut lines = vec!["📈 PULL REQUEST TRENDS".to_string(), "─".repeat(21)];
    if metrics.is_empty() {
        lines.push("   (no data)".to_string());
        return lines;
    }

    let width = period_width(metrics);
    let max = metrics.iter().map(|m| m.total_prs).max().unwrap_or(0) as f64;

    for m in metrics.iter().rev() {
        lines.push(format!(
            "  {:<width$}  {:<BAR_WIDTH$}  {} total, {} merged, {} reviewed",
            m.period,
            bar(m.total_prs as f64, max, BAR_WIDTH),
            m.total_prs,
            m.merged_prs,
            m.reviewed_prs,
        ));
    }
    lines
}

/// Duration per period, oldest first
pub fn render_duration_chart<F>(title: &str, label: &str, metrics: &[Metric], field: F) -> Vec<String>
where
    F: Fn(&Metric) -> f64,
{
    let mut lines = Vec::new();
    if metrics.is_empty() {
        lines.push(title.to_string());
        lines.push("─".repeat(title.chars().count()));
        lines.push("   (no data)".to_string());
        return lines;
    }

    let width = period_width(metrics);
    let max = metrics.iter().map(&field).fold(0.0, f64::max);
    let heading = format!("{title} (scale 0m to {})", format_axis_tick(max));
    lines.push(heading.clone());
    lines.push("─".repeat(heading.chars().count()));

    for m in metrics.iter().rev() {
        let seconds = field(m);
        let (value, _) = format_tooltip_value(Some(seconds), label);
        lines.push(format!(
            "  {:<width$}  {:<BAR_WIDTH$}  {value}",
            m.period,
            bar(seconds, max, BAR_WIDTH),
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::summary::tests::metric;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(10.0, 10.0, 8).chars().count(), 8);
        assert_eq!(bar(5.0, 10.0, 8).chars().count(), 4);
        assert_eq!(bar(0.1, 10.0, 8).chars().count(), 1);
        assert!(bar(0.0, 10.0, 8).is_empty());
        assert!(bar(3.0, 0.0, 8).is_empty());
    }

    #[test]
    fn test_zero_width_bar_is_empty() {
        assert!(bar(5.0, 10.0, 0).is_empty());
    }

    #[test]
    fn test_pull_request_chart_is_chronological() {
        let series = vec![metric("2024-W10", 12, 0.0, 0.0), metric("2024-W09", 6, 0.0, 0.0)];
        let lines = render_pull_request_trends(&series);

        let older = lines.iter().position(|l| l.contains("2024-W09")).unwrap();
        let newer = lines.iter().position(|l| l.contains("2024-W10")).unwrap();
        assert!(older < newer);
        assert!(lines[newer].contains("12 total, 6 merged, 12 reviewed"));
    }

    #[test]
    fn test_duration_chart_labels() {
        let series = vec![metric("d2", 1, 5400.0, 0.0), metric("d1", 1, 1800.0, 0.0)];
        let lines = render_duration_chart("⏱️  MERGE TIME", "Merge Time", &series, |m| {
            m.median_merge_time_seconds
        });

        assert!(lines[0].ends_with("(scale 0m to 1h)"));
        assert!(lines.iter().any(|l| l.contains("d1") && l.ends_with("0h 30m")));
        assert!(lines.iter().any(|l| l.contains("d2") && l.ends_with("1h 30m")));
    }
}
