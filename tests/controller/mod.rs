//! Tests for HTTP controller endpoints.
//!
//! Integration tests for the report controllers, verifying request validation, response
//! bodies, generated files, and error handling.

mod report;

use compass_test_utils::prelude::*;

use crate::util::TestContextExt;
