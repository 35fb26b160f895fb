//! Declarative test builder.
//!
//! Configuration methods are queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// ```no_run
/// use compass_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), compass_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_table(entity::prelude::Team)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_report_tables: bool,
    company_name: Option<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_report_tables: false,
            company_name: None,
        }
    }

    /// Add every table read by report generation.
    ///
    /// Creates Team, OkrUser, Objective, KeyResult and CompanySettings in dependency order.
    pub fn with_report_tables(mut self) -> Self {
        self.include_report_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a company settings row with the given company name during `build()`.
    ///
    /// Requires the CompanySettings table, usually via `with_report_tables`.
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::IoError)` - Scratch reports directory could not be created
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_report_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::OkrUser),
                schema.create_table_from_entity(entity::prelude::Objective),
                schema.create_table_from_entity(entity::prelude::KeyResult),
                schema.create_table_from_entity(entity::prelude::CompanySettings),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        if let Some(company_name) = self.company_name {
            context
                .okr()
                .insert_company_settings(Some(&company_name))
                .await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
