use anyhow::Result;
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::api::Aggregation;

/// Main configuration structure for CodeVigil
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CodeVigilConfig {
    /// Backend API settings
    pub api: ApiConfig,
    /// Dashboard defaults
    pub dashboard: DashboardConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the CodeVigil backend
    pub base_url: String,
    /// Request timeout; unset means the HTTP stack default
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Aggregation used when none is given on the command line
    pub default_aggregation: Aggregation,
    /// Refresh interval for `dashboard --watch` without an explicit value
    pub watch_interval_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_aggregation: Aggregation::Weekly,
            watch_interval_seconds: 30,
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

pub const CONFIG_FILE: &str = "codevigil.toml";
const RC_FILE: &str = ".codevigil-rc";

impl CodeVigilConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (codevigil.toml, .codevigil-rc)
    /// 3. Environment variables (CODEVIGIL__SECTION__KEY)
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load_with_env(dir, None)
    }

    /// Like [`load_from_dir`](Self::load_from_dir), reading `CODEVIGIL__*`
    /// variables from `env` instead of the process environment when given
    pub fn load_with_env(dir: &Path, env: Option<Map<String, String>>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        let config_file = dir.join(CONFIG_FILE);
        if config_file.exists() {
            builder = builder.add_source(File::from(config_file));
        }

        let rc_file = dir.join(RC_FILE);
        if rc_file.exists() {
            builder = builder.add_source(File::from(rc_file).format(config::FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("CODEVIGIL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: CodeVigilConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let config = CodeVigilConfig::load_with_env(dir.path(), env(&[])).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_seconds, None);
        assert_eq!(config.dashboard.default_aggregation, Aggregation::Weekly);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[api]
base_url = "https://vigil.example.com"
timeout_seconds = 15

[dashboard]
default_aggregation = "daily"
"#,
        )
        .unwrap();

        let config = CodeVigilConfig::load_with_env(dir.path(), env(&[])).unwrap();
        assert_eq!(config.api.base_url, "https://vigil.example.com");
        assert_eq!(config.api.timeout_seconds, Some(15));
        assert_eq!(config.dashboard.default_aggregation, Aggregation::Daily);
        // Untouched sections keep their defaults
        assert_eq!(config.dashboard.watch_interval_seconds, 30);
        assert!(!config.observability.json_logs);
    }

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_rc_file_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[api]\nbase_url = \"https://toml.example.com\"\n\n[dashboard]\nwatch_interval_seconds = 10\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(RC_FILE),
            "[api]\nbase_url = \"https://rc.example.com\"\n",
        )
        .unwrap();

        let config = CodeVigilConfig::load_with_env(dir.path(), env(&[])).unwrap();
        assert_eq!(config.api.base_url, "https://rc.example.com");
        // Keys the rc file leaves alone still come from codevigil.toml
        assert_eq!(config.dashboard.watch_interval_seconds, 10);
    }

    #[test]
    fn test_env_overrides_both_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[api]\nbase_url = \"https://toml.example.com\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(RC_FILE),
            "[api]\nbase_url = \"https://rc.example.com\"\ntimeout_seconds = 5\n",
        )
        .unwrap();

        let config = CodeVigilConfig::load_with_env(
            dir.path(),
            env(&[
                ("CODEVIGIL__API__BASE_URL", "http://env.example:9"),
                ("CODEVIGIL__DASHBOARD__DEFAULT_AGGREGATION", "daily"),
                ("CODEVIGIL__DASHBOARD__WATCH_INTERVAL_SECONDS", "45"),
                ("UNRELATED__API__BASE_URL", "http://ignored.example"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://env.example:9");
        assert_eq!(config.api.timeout_seconds, Some(5));
        assert_eq!(config.dashboard.default_aggregation, Aggregation::Daily);
        assert_eq!(config.dashboard.watch_interval_seconds, 45);
    }

    #[test]
    fn test_save_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let mut config = CodeVigilConfig::default();
        config.observability.json_logs = true;
        config.save_to_file(dir.path().join(CONFIG_FILE)).unwrap();

        let loaded = CodeVigilConfig::load_with_env(dir.path(), env(&[])).unwrap();
        assert_eq!(loaded, config);
    }
}
