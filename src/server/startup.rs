use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error};

static DEFAULT_LOG_FILTER: &str = "info";

/// Install the global tracing subscriber
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();
}

/// Filter for the given `RUST_LOG` value, falling back to the default when it is unset or
/// invalid.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Create the reports directory if it doesn't exist yet
pub async fn prepare_reports_dir(config: &Config) -> Result<(), Error> {
    tokio::fs::create_dir_all(&config.reports_dir).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::server::startup::log_filter;

    /// Expect `info` when RUST_LOG is unset or blank
    #[test]
    fn defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("  ")).to_string(), "info");
    }

    /// Expect RUST_LOG directives to replace the default
    #[test]
    fn honours_rust_log() {
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
    }
}
