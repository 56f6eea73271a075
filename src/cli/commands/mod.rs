use anyhow::{Context, Result};
use std::process::ExitCode;

use crate::api::ApiClient;
use crate::config::CodeVigilConfig;

pub mod add;
pub mod config;
pub mod dashboard;
pub mod repos;

pub use add::AddCommand;
pub use config::ConfigCommand;
pub use dashboard::DashboardCommand;
pub use repos::ReposCommand;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self, config: &CodeVigilConfig) -> Result<ExitCode>;
}

pub fn build_client(config: &CodeVigilConfig) -> Result<ApiClient> {
    ApiClient::new(&config.api)
        .with_context(|| format!("Cannot create API client for {}", config.api.base_url))
}

pub fn show_getting_started() -> ExitCode {
    println!("🔍 CodeVigil - Pull Request Metrics");
    println!();
    println!("To get started:");
    println!("  📚 codevigil repos                          # List tracked repositories");
    println!("  📊 codevigil dashboard owner/name           # Metrics for one repository");
    println!("  📅 codevigil dashboard owner/name -a daily  # Daily instead of weekly buckets");
    println!("  ➕ codevigil add https://github.com/o/r     # Track a new repository");
    println!("  ⚙️  codevigil config                         # Show effective configuration");
    println!();
    println!("💡 Point at your backend with --api-url or CODEVIGIL__API__BASE_URL");
    ExitCode::SUCCESS
}
