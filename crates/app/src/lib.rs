//! # devicehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port): `DeviceRepository` — CRUD keyed by serial number
//! - Define the **driving/inbound port** as a use-case struct:
//!   `DeviceService` — create, get, update, delete, list
//! - Attach operation context to failures without changing their kind
//!
//! ## Dependency rule
//! Depends on `devicehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod error;
pub mod ports;
pub mod services;
