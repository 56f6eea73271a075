pub mod date;
pub mod duration;

pub use date::{format_date, formatted_date_and_day, weekday_name, Clock, DateAndDay, FixedClock, SystemClock};
pub use duration::{format_axis_tick, format_duration, format_tooltip_value};
