//! Report projections.
//!
//! The aggregation rules shared by every output format live in [`statistics`]; the three
//! adapters ([`preview`], [`excel`], [`powerpoint`]) turn a
//! [`ReportDataset`](crate::server::model::report::ReportDataset) into their respective
//! output, and [`artifact`] persists generated files under unique names.

pub mod artifact;
pub mod excel;
pub mod powerpoint;
pub mod preview;
pub mod statistics;
