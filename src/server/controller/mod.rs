//! HTTP controller endpoints for the Compass web API.
//!
//! Axum handlers for report generation. Controllers validate the request body into
//! report filters, call the report service, and translate failures into the endpoint's
//! error response. Endpoints are documented for OpenAPI with utoipa.

pub mod report;
