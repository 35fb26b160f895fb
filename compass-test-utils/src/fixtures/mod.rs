//! Test fixture modules.
//!
//! - `okr` - teams, users, objectives, key results and company settings

pub mod okr;
