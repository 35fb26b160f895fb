//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, and the report filter and dataset types shared between the
//! aggregation service and the output adapters.

pub mod app;
pub mod db;
pub mod report;
