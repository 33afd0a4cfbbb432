//! # devicehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/v1/devices`
//! - Decode request bodies and enforce input rules the store does not check
//!   (non-empty serial number, dotted-quad IPv4 address)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP status codes
//!
//! ## Dependency rule
//! Depends on `devicehub-app` (for port traits and services) and `devicehub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
