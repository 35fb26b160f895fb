//! OKR fixture utilities.
//!
//! `data` inserts records into the test database; `factory` builds in-memory models for
//! unit tests that don't need a database.

pub mod data;
pub mod factory;

use crate::TestContext;

impl TestContext {
    pub fn okr<'a>(&'a mut self) -> OkrFixtures<'a> {
        OkrFixtures { context: self }
    }
}

pub struct OkrFixtures<'a> {
    pub context: &'a mut TestContext,
}
