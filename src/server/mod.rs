//! Server application core modules.
//!
//! This module contains all server-side functionality for Compass: configuration, HTTP
//! routing and controllers, read-only data repositories, report aggregation, and the
//! preview, Excel and PowerPoint report adapters.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod report;
pub mod router;
pub mod service;
pub mod startup;
