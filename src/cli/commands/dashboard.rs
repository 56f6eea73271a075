use anyhow::Result;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::{build_client, Command};
use crate::api::{Aggregation, RepoId};
use crate::config::CodeVigilConfig;
use crate::formatters::{formatted_date_and_day, Clock, SystemClock};
use crate::metrics::{MetricsQuery, MetricsService, MetricsSubscription, MetricsView};
use crate::render::render_dashboard;

pub struct DashboardCommand {
    pub repo: RepoId,
    pub aggregation: Option<Aggregation>,
    pub json: bool,
    pub watch: bool,
    pub interval: Option<u64>,
    clock: Arc<dyn Clock>,
}

impl DashboardCommand {
    pub fn new(repo: RepoId, aggregation: Option<Aggregation>, json: bool) -> Self {
        Self {
            repo,
            aggregation,
            json,
            watch: false,
            interval: None,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_watch(mut self, watch: bool, interval: Option<u64>) -> Self {
        self.watch = watch;
        self.interval = interval;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn query(&self, config: &CodeVigilConfig) -> MetricsQuery {
        MetricsQuery::new(
            self.repo.clone(),
            self.aggregation
                .unwrap_or(config.dashboard.default_aggregation),
        )
    }

    fn print(&self, query: &MetricsQuery, view: &MetricsView) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(view)?);
        } else {
            let date = formatted_date_and_day(self.clock.as_ref());
            println!("{}", render_dashboard(query, view, &date));
        }
        Ok(())
    }

    async fn watch_loop(
        &self,
        query: &MetricsQuery,
        subscription: &mut MetricsSubscription,
        interval: Duration,
    ) -> Result<()> {
        let mut rx = subscription.subscribe();
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        info!(query = %query, interval_secs = interval.as_secs(), "Watching metrics");
        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    info!("Stopping watch");
                    return Ok(());
                }
                _ = ticker.tick() => {
                    if let Some(generation) = subscription.refresh(query.clone()) {
                        debug!(generation, "Refreshing metrics");
                    }
                }
                changed = rx.changed() => {
                    if changed.is_err() {
                        return Ok(());
                    }
                    let view = rx.borrow_and_update().clone();
                    if view.is_settled() {
                        self.print(query, &view)?;
                    }
                }
            }
        }
    }
}

impl Command for DashboardCommand {
    async fn execute(&self, config: &CodeVigilConfig) -> Result<ExitCode> {
        let client = build_client(config)?;
        let service = MetricsService::new(Arc::new(client));
        let mut subscription = MetricsSubscription::new(service);
        let query = self.query(config);

        if self.watch {
            let secs = self
                .interval
                .unwrap_or(config.dashboard.watch_interval_seconds)
                .max(1);
            self.watch_loop(&query, &mut subscription, Duration::from_secs(secs))
                .await?;
        } else {
            subscription.request(query.clone());
            let view = subscription.wait_until_settled().await;
            self.print(&query, &view)?;
        }
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_falls_back_to_configured_aggregation() {
        let mut config = CodeVigilConfig::default();
        config.dashboard.default_aggregation = Aggregation::Daily;

        let implicit = DashboardCommand::new(RepoId::new("octo", "hello"), None, false);
        assert_eq!(implicit.query(&config).aggregation, Aggregation::Daily);

        let explicit =
            DashboardCommand::new(RepoId::new("octo", "hello"), Some(Aggregation::Weekly), false);
        assert_eq!(explicit.query(&config).aggregation, Aggregation::Weekly);
    }
}
