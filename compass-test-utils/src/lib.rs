//! Shared test utilities for the compass workspace.
//!
//! Tests describe their environment with [`TestBuilder`] and receive a [`TestContext`]
//! holding an in-memory SQLite database and a scratch reports directory. Fixture helpers
//! under [`fixtures`] insert records (`test.okr().insert_team(..)`) or build in-memory
//! models (`factory::mock_objective_model(..)`).

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::okr::factory, TestBuilder, TestContext, TestError};
}
