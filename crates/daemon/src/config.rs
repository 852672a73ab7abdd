//! Daemon settings
//!
//! Defaults overlaid by `JOBTRACK_*` environment variables
//! (`JOBTRACK_DB_PATH`, `JOBTRACK_RPC_HOST`, `JOBTRACK_RPC_PORT`, `JOBTRACK_LOG_FORMAT`).

use config::{Config, ConfigError, Environment};
use jobtrack_api_rpc::server::{DEFAULT_RPC_HOST, DEFAULT_RPC_PORT};
use serde::Deserialize;

const ENV_PREFIX: &str = "JOBTRACK";
const DEFAULT_DB_PATH: &str = "~/.jobtrack/jobs.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Development: human-readable, colored
    Pretty,
    /// Production: one JSON object per line
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub log_format: LogFormat,
}

impl Settings {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .set_default("db_path", DEFAULT_DB_PATH)?
            .set_default("rpc_host", DEFAULT_RPC_HOST)?
            .set_default("rpc_port", i64::from(DEFAULT_RPC_PORT))?
            .set_default("log_format", "pretty")?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        settings.db_path = shellexpand::tilde(&settings.db_path).into_owned();
        Ok(settings)
    }

    /// True when the database lives in memory (nothing to create on disk)
    pub fn is_in_memory(&self) -> bool {
        self.db_path.contains(":memory:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_env(env(&[])).unwrap();

        assert_eq!(settings.rpc_host, "127.0.0.1");
        assert_eq!(settings.rpc_port, DEFAULT_RPC_PORT);
        assert_eq!(settings.log_format, LogFormat::Pretty);
        assert!(settings.db_path.ends_with(".jobtrack/jobs.db"));
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::from_env(env(&[
            ("JOBTRACK_DB_PATH", "sqlite::memory:"),
            ("JOBTRACK_RPC_PORT", "9999"),
            ("JOBTRACK_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(settings.rpc_port, 9999);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert!(settings.is_in_memory());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Settings::from_env(env(&[("JOBTRACK_RPC_PORT", "not-a-port")])).is_err());
    }
}
