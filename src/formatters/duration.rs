/// Split a duration into whole hours and leftover minutes, truncating
fn hours_minutes(seconds: f64) -> (u64, u64) {
    // Negative input is out of contract; treat it as zero rather than wrap
    let whole = seconds.max(0.0).trunc() as u64;
    (whole / 3600, (whole % 3600) / 60)
}

/// Formats seconds as "2h 30m", or "45m" under an hour
pub fn format_duration(seconds: f64) -> String {
    match hours_minutes(seconds) {
        (0, minutes) => format!("{minutes}m"),
        (hours, minutes) => format!("{hours}h {minutes}m"),
    }
}

/// Value and label pair for chart tooltips; always shows both units
pub fn format_tooltip_value(value: Option<f64>, label: &str) -> (String, String) {
    let text = match value {
        Some(seconds) => {
            let (hours, minutes) = hours_minutes(seconds);
            format!("{hours}h {minutes}m")
        }
        None => "0h 0m".to_string(),
    };
    (text, label.to_string())
}

/// Coarse axis label: whole hours when there are any, minutes otherwise
pub fn format_axis_tick(seconds: f64) -> String {
    match hours_minutes(seconds) {
        (0, minutes) => format!("{minutes}m"),
        (hours, _) => format!("{hours}h"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0m");
        assert_eq!(format_duration(59.0), "0m");
        assert_eq!(format_duration(60.0), "1m");
        assert_eq!(format_duration(3600.0), "1h 0m");
        assert_eq!(format_duration(5400.0), "1h 30m");
        assert_eq!(format_duration(90061.0), "25h 1m");
    }

    #[test]
    fn test_format_duration_truncates_fractions() {
        assert_eq!(format_duration(119.9), "1m");
        assert_eq!(format_duration(3599.99), "59m");
    }

    #[test]
    fn test_tooltip_value() {
        assert_eq!(
            format_tooltip_value(Some(1800.0), "Merge Time"),
            ("0h 30m".to_string(), "Merge Time".to_string())
        );
        assert_eq!(format_tooltip_value(None, "Time").0, "0h 0m");
    }

    #[test]
    fn test_axis_tick() {
        assert_eq!(format_axis_tick(7260.0), "2h");
        assert_eq!(format_axis_tick(300.0), "5m");
    }
}
