// Terminal renderers: pure functions from data to text, no I/O

pub mod charts;
pub mod dashboard;
pub mod repositories;
pub mod table;

pub use dashboard::{render_dashboard, render_header, render_stat_cards, render_status_banner};
pub use repositories::render_repository_list;
pub use table::render_metrics_table;
