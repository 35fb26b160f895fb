//! Compass: the reporting core of an OKR management application.
//!
//! Aggregates objectives and key results into a JSON preview, an Excel workbook, or a
//! PowerPoint deck, and serves the three projections over HTTP.

pub mod model;
pub mod server;
