use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use super::Command;
use crate::config::{CodeVigilConfig, CONFIG_FILE};

pub struct ConfigCommand {
    pub init: bool,
    pub force: bool,
}

impl ConfigCommand {
    pub fn new(init: bool, force: bool) -> Self {
        Self { init, force }
    }
}

impl Command for ConfigCommand {
    async fn execute(&self, config: &CodeVigilConfig) -> Result<ExitCode> {
        if !self.init {
            print!("{}", config.to_toml()?);
            return Ok(ExitCode::SUCCESS);
        }

        let path = Path::new(CONFIG_FILE);
        if path.exists() && !self.force {
            eprintln!("⚠️  {CONFIG_FILE} already exists (use --force to overwrite)");
            return Ok(ExitCode::FAILURE);
        }

        CodeVigilConfig::default().save_to_file(path)?;
        println!("✅ Wrote default configuration to {CONFIG_FILE}");
        Ok(ExitCode::SUCCESS)
    }
}
