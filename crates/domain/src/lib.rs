//! # devicehub-domain
//!
//! Pure domain model for the devicehub device registry.
//!
//! ## Responsibilities
//! - Foundational types: the [`SerialNum`](id::SerialNum) identifier and error conventions
//! - Define **Devices** (a serial number, a model label, and an IPv4 address)
//! - Contain all invariant enforcement (non-empty serial, dotted-quad IP)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
