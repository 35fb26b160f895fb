//! Test utilities for creating AppState from a test context

use std::time::Duration;

use compass::server::{model::app::AppState, report::artifact::ArtifactStore};
use compass_test_utils::TestContext;

/// Report timeout for test app state
const TEST_REPORT_TIMEOUT: Duration = Duration::from_secs(30);

/// Extension trait for TestContext to create AppState writing into the test's reports directory
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            artifacts: ArtifactStore::new(self.reports_dir()),
            report_timeout: TEST_REPORT_TIMEOUT,
        }
    }
}
