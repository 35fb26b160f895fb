//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and report adapters. The report service aggregates a
//! request's filters into a dataset once and hands it to the requested output adapter.

pub mod report;
