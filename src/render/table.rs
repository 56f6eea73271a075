use crate::api::Metric;
use crate::formatters::format_duration;

const HEADERS: [&str; 6] = [
    "Period",
    "Total PRs",
    "Merged PRs",
    "Reviewed PRs",
    "Merge Time",
    "Review Time",
];

/// Detailed per-period table, most recent period first
pub fn render_metrics_table(metrics: &[Metric]) -> Vec<String> {
    let rows: Vec<[String; 6]> = metrics
        .iter()
        .map(|m| {
            [
                m.period.clone(),
                m.total_prs.to_string(),
                m.merged_prs.to_string(),
                m.reviewed_prs.to_string(),
                format_duration(m.median_merge_time_seconds),
                format_duration(m.median_review_turnaround_seconds),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 6]| -> String {
        let mut line = format!("  {:<w$}", cells[0], w = widths[0]);
        for (cell, &width) in cells.iter().zip(widths.iter()).skip(1) {
            line.push_str(&format!("  {cell:>width$}"));
        }
        line
    };

    let mut lines = vec!["📋 DETAILED METRICS".to_string(), "─".repeat(19)];
    lines.push(format_row(HEADERS));
    lines.push(format!("  {}", "─".repeat(widths.iter().sum::<usize>() + 2 * 5)));

    if rows.is_empty() {
        lines.push("  (no periods)".to_string());
    }
    for row in &rows {
        lines.push(format_row(row.each_ref().map(String::as_str)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::summary::tests::metric;

    #[test]
    fn test_table_rows_keep_series_order_and_format_durations() {
        let series = vec![
            metric("2024-W10", 12, 5400.0, 59.0),
            metric("2024-W09", 4, 3600.0, 120.0),
        ];
        let lines = render_metrics_table(&series);

        assert!(lines[2].contains("Period") && lines[2].contains("Review Time"));
        assert!(lines[4].starts_with("  2024-W10"));
        assert!(lines[4].contains("1h 30m"));
        assert!(lines[4].ends_with("0m"));
        assert!(lines[5].starts_with("  2024-W09"));
        assert!(lines[5].ends_with("2m"));
    }

    #[test]
    fn test_empty_table() {
        let lines = render_metrics_table(&[]);
        assert_eq!(lines.last().map(String::as_str), Some("  (no periods)"));
    }
}
