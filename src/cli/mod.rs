use clap::{Parser, Subcommand};

use crate::api::{Aggregation, RepoId};

pub mod commands;

#[derive(Parser)]
#[command(name = "codevigil", version)]
#[command(about = "Pull request review and merge metrics for tracked repositories")]
#[command(long_about = "CodeVigil shows pull request volume, merge time and review turnaround for \
                       repositories tracked by a CodeVigil backend. Start with 'codevigil repos' \
                       to see what is tracked.")]
pub struct Cli {
    /// Backend base URL, overriding configuration
    #[arg(long, global = true, value_name = "URL", help = "CodeVigil backend base URL (e.g. http://localhost:8000)")]
    pub api_url: Option<String>,

    /// Emit JSON log lines on stderr
    #[arg(long, global = true, help = "Write structured JSON logs to stderr")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List repositories tracked by the backend
    Repos {
        /// Print the raw JSON response
        #[arg(long, help = "Print repositories as JSON instead of a list")]
        json: bool,
    },
    /// Show pull request metrics for one repository
    Dashboard {
        /// Repository in owner/name form
        #[arg(value_name = "OWNER/NAME")]
        repo: RepoId,
        /// Time bucketing for the series
        #[arg(long, short, value_enum, help = "Aggregation granularity (defaults to configuration)")]
        aggregation: Option<Aggregation>,
        /// Print the derived summary as JSON
        #[arg(long, help = "Print the metrics view as JSON instead of the dashboard")]
        json: bool,
        /// Keep refreshing until interrupted
        #[arg(long, short, help = "Refresh periodically until Ctrl-C")]
        watch: bool,
        /// Refresh interval in seconds for --watch
        #[arg(long, value_name = "SECS", requires = "watch", help = "Seconds between refreshes (defaults to configuration)")]
        interval: Option<u64>,
    },
    /// Start tracking a GitHub repository
    Add {
        /// Repository URL, e.g. https://github.com/owner/repo
        #[arg(value_name = "REPO_URL")]
        repo_url: String,
    },
    /// Show or initialize configuration
    Config {
        /// Write a default codevigil.toml in the current directory
        #[arg(long, help = "Write default configuration to codevigil.toml")]
        init: bool,
        /// Overwrite an existing file with --init
        #[arg(long, requires = "init", help = "Overwrite an existing codevigil.toml")]
        force: bool,
    },
}
