//! Storage port — repository trait for device persistence.

use std::future::Future;

use devicehub_domain::device::Device;
use devicehub_domain::error::DeviceHubError;

/// Keyed storage of [`Device`]s, one record per serial number.
///
/// Implementations must be safe to call from many tasks at once. Each call
/// affects exactly one key atomically; stored values are handed out as
/// copies, never shared.
pub trait DeviceRepository {
    /// Get the device stored under `serial_num`.
    ///
    /// Fails with [`DeviceHubError::NotFound`] when no such device exists.
    fn get(
        &self,
        serial_num: &str,
    ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send;

    /// Insert a new device keyed by its serial number.
    ///
    /// Fails with [`DeviceHubError::Conflict`] when the key is already taken;
    /// the stored device is left untouched.
    fn create(&self, device: Device) -> impl Future<Output = Result<(), DeviceHubError>> + Send;

    /// Replace the device stored under the same serial number.
    ///
    /// Fails with [`DeviceHubError::NotFound`] when the key is absent. Never
    /// inserts.
    fn update(&self, device: Device) -> impl Future<Output = Result<(), DeviceHubError>> + Send;

    /// Remove the device stored under `serial_num`.
    ///
    /// Fails with [`DeviceHubError::NotFound`] when the key is absent.
    fn delete(
        &self,
        serial_num: &str,
    ) -> impl Future<Output = Result<(), DeviceHubError>> + Send;

    /// Get all devices, ordered by serial number.
    fn list(&self) -> impl Future<Output = Result<Vec<Device>, DeviceHubError>> + Send;
}
