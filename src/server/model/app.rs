use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::report::artifact::ArtifactStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Destination for generated Excel and PowerPoint files
    pub artifacts: ArtifactStore,
    /// Upper bound for generating a single report file
    pub report_timeout: Duration,
}
