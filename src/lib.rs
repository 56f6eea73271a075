// CodeVigil Library - pull request metrics client
// This exposes the core components for the CLI, testing and integration

pub mod api;
pub mod cli;
pub mod config;
pub mod formatters;
pub mod metrics;
pub mod observability;
pub mod render;
pub mod repository_url;
pub mod telemetry;

// Re-export key types for easy access
pub use api::{Aggregation, ApiClient, ApiError, Metric, RepoId, Repository};
pub use config::CodeVigilConfig;
pub use formatters::{format_duration, Clock, FixedClock, SystemClock};
pub use metrics::{
    classify_trend, LoadStatus, MetricsQuery, MetricsService, MetricsSource, MetricsSubscription,
    MetricsSummary, MetricsView, Trend, TrendIndicator,
};
pub use observability::{api_stats, OperationTimer};
pub use repository_url::{validate_repo_url, RepoUrlError};
pub use telemetry::{generate_correlation_id, init_telemetry};
