use anyhow::Result;
use std::process::ExitCode;
use tracing::warn;

use super::{build_client, Command};
use crate::api::RepositoriesResponse;
use crate::config::CodeVigilConfig;
use crate::render::render_repository_list;

pub struct ReposCommand {
    pub json: bool,
}

impl ReposCommand {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl Command for ReposCommand {
    async fn execute(&self, config: &CodeVigilConfig) -> Result<ExitCode> {
        let client = build_client(config)?;

        // A failed listing reads as an empty one, as on the repositories page
        let repositories = match client.list_repositories().await {
            Ok(repositories) => repositories,
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Error fetching repositories");
                Vec::new()
            }
        };

        if self.json {
            let response = RepositoriesResponse { repositories };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", render_repository_list(&repositories));
        }
        Ok(ExitCode::SUCCESS)
    }
}
