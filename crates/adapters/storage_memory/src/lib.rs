//! # devicehub-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `devicehub-app::ports::storage`
//! - Keep every device in a single map guarded by one reader/writer lock
//! - Hand out clones of stored values, never references into the map
//!
//! Nothing is written to disk: restarting the process loses all devices.
//!
//! ## Dependency rule
//! Depends on `devicehub-app` (for port traits) and `devicehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_repo;

pub use device_repo::InMemoryDeviceRepository;
