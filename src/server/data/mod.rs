//! Data access layer repositories.
//!
//! Read-only repositories over the OKR tables. Every list query is ordered by primary key so
//! report output is deterministic.

pub mod company_settings;
pub mod key_result;
pub mod objective;
pub mod team;
pub mod user;
