// Pull request metrics derivation
// Averages and period-over-period trends over a series fetched from the backend

pub mod service;
pub mod source;
pub mod subscription;
pub mod summary;
pub mod trend;

pub use service::{LoadStatus, MetricsQuery, MetricsService, MetricsView};
pub use source::MetricsSource;
pub use subscription::MetricsSubscription;
pub use summary::{average, latest_trend, MetricsSummary};
pub use trend::{classify_trend, Sentiment, Trend, TrendIndicator};
