use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of change between two consecutive periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Unchanged,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Unchanged => "unchanged",
        })
    }
}

/// Compare the current value against the previous one
///
/// Whether `Up` is good news is for the caller to decide, see [`TrendIndicator`].
pub fn classify_trend(current: f64, previous: f64) -> Trend {
    if current == previous {
        Trend::Unchanged
    } else if current > previous {
        Trend::Up
    } else {
        Trend::Down
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Favorable,
    Unfavorable,
    Neutral,
}

/// A trend paired with the caller's reading of which direction is good
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendIndicator {
    pub trend: Trend,
    pub higher_is_better: bool,
}

impl TrendIndicator {
    /// Counts such as pull requests opened: more is better
    pub fn for_count(trend: Trend) -> Self {
        Self {
            trend,
            higher_is_better: true,
        }
    }

    /// Durations such as merge time: less is better
    pub fn for_duration(trend: Trend) -> Self {
        Self {
            trend,
            higher_is_better: false,
        }
    }

    pub fn sentiment(&self) -> Sentiment {
        match (self.trend, self.higher_is_better) {
            (Trend::Unchanged, _) => Sentiment::Neutral,
            (Trend::Up, true) | (Trend::Down, false) => Sentiment::Favorable,
            _ => Sentiment::Unfavorable,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self.sentiment() {
            Sentiment::Favorable => "▲",
            Sentiment::Unfavorable => "▼",
            Sentiment::Neutral => "–",
        }
    }
}
