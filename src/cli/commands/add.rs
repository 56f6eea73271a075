use anyhow::Result;
use std::process::ExitCode;
use tracing::info;

use super::{build_client, Command};
use crate::config::CodeVigilConfig;
use crate::repository_url::validate_repo_url;

pub struct AddCommand {
    pub repo_url: String,
}

impl AddCommand {
    pub fn new(repo_url: String) -> Self {
        Self { repo_url }
    }
}

fn print_error_notification(message: &str) {
    eprintln!("❌ Error");
    eprintln!("   {message}");
}

impl Command for AddCommand {
    async fn execute(&self, config: &CodeVigilConfig) -> Result<ExitCode> {
        if let Err(e) = validate_repo_url(&self.repo_url) {
            print_error_notification(&e.to_string());
            return Ok(ExitCode::FAILURE);
        }

        let client = build_client(config)?;
        print!("🔄 Adding repository... ");
        std::io::Write::flush(&mut std::io::stdout())?;

        match client.add_repository(&self.repo_url).await {
            Ok(repo) => {
                println!("✅");
                println!("✅ Repository added successfully");
                println!("   Added {repo}");
                println!();
                println!("💡 View its metrics with: codevigil dashboard {repo}");
                info!(repo = %repo, "Repository added");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                println!("❌");
                print_error_notification(&e.to_string());
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
