use std::{path::PathBuf, time::Duration};

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_REPORTS_DIR: &str = "public/uploads/reports";
const DEFAULT_REPORT_TIMEOUT_SECS: u64 = 60;

/// Server configuration loaded from environment variables.
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Directory generated report files are written to and served from
    pub reports_dir: PathBuf,
    /// Upper bound for generating a single Excel or PowerPoint file
    pub report_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let database_url =
            get("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".into()))?;

        let report_timeout_secs = match get("REPORT_TIMEOUT_SECS") {
            None => DEFAULT_REPORT_TIMEOUT_SECS,
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "REPORT_TIMEOUT_SECS".to_string(),
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "REPORT_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            database_url,
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            reports_dir: get("REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_DIR)),
            report_timeout: Duration::from_secs(report_timeout_secs),
        })
    }
}
