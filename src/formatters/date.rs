use chrono::{Local, NaiveDate};

/// Source of "today" for anything that prints the current date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAndDay {
    pub current_date: String,
    pub current_day: String,
}

/// "October 16, 2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Friday"
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

pub fn formatted_date_and_day(clock: &dyn Clock) -> DateAndDay {
    let today = clock.today();
    DateAndDay {
        current_date: format_date(today),
        current_day: weekday_name(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_has_no_zero_padding() {
        assert_eq!(format_date(date(2024, 3, 5)), "March 5, 2024");
        assert_eq!(format_date(date(2026, 10, 16)), "October 16, 2026");
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(date(2024, 3, 5)), "Tuesday");
        assert_eq!(weekday_name(date(2023, 1, 1)), "Sunday");
    }

    #[test]
    fn test_fixed_clock_drives_output() {
        let clock = FixedClock(date(2026, 10, 16));
        assert_eq!(
            formatted_date_and_day(&clock),
            DateAndDay {
                current_date: "October 16, 2026".to_string(),
                current_day: "Friday".to_string(),
            }
        );
    }
}
