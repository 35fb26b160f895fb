//! Test context structure returned by [`TestBuilder`](crate::TestBuilder).

use std::path::Path;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

use crate::error::TestError;

/// Test environment for one test.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_report_tables().build().await?;
///
/// let team = test.okr().insert_team("Engineering").await?;
/// let db = &test.db;
/// let reports = test.reports_dir();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Scratch directory for generated report files, removed when the context is dropped
    pub reports: TempDir,
}

impl TestContext {
    /// Create a new test context with an empty in-memory database.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let reports = tempfile::tempdir()?;

        Ok(TestContext { db, reports })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Directory generated report files should be written to.
    pub fn reports_dir(&self) -> &Path {
        self.reports.path()
    }
}
