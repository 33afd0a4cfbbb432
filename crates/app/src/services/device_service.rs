//! Device service — use-cases for managing devices.

use devicehub_domain::device::Device;

use crate::error::{Operation, ServiceError};
use crate::ports::DeviceRepository;

/// Application service for device CRUD operations.
///
/// Forwards every call to the repository. Failures come back as
/// [`ServiceError`] with the operation attached; nothing is retried or
/// swallowed.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a device by serial number.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] wrapping `NotFound` when no device with
    /// `serial_num` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, serial_num: &str) -> Result<Device, ServiceError> {
        self.repo
            .get(serial_num)
            .await
            .map_err(|err| ServiceError::new(Operation::Get, err))
    }

    /// Register a new device.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] wrapping `Conflict` when the serial number
    /// is already registered.
    #[tracing::instrument(skip(self, device), fields(serial_num = %device.serial_num))]
    pub async fn create_device(&self, device: Device) -> Result<(), ServiceError> {
        self.repo
            .create(device)
            .await
            .map_err(|err| ServiceError::new(Operation::Create, err))
    }

    /// Replace the model and address of an existing device.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] wrapping `NotFound` when the serial number
    /// is not registered.
    #[tracing::instrument(skip(self, device), fields(serial_num = %device.serial_num))]
    pub async fn update_device(&self, device: Device) -> Result<(), ServiceError> {
        self.repo
            .update(device)
            .await
            .map_err(|err| ServiceError::new(Operation::Update, err))
    }

    /// Delete a device by serial number.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] wrapping `NotFound` when the serial number
    /// is not registered.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, serial_num: &str) -> Result<(), ServiceError> {
        self.repo
            .delete(serial_num)
            .await
            .map_err(|err| ServiceError::new(Operation::Delete, err))
    }

    /// List all devices, ordered by serial number.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, ServiceError> {
        self.repo
            .list()
            .await
            .map_err(|err| ServiceError::new(Operation::List, err))
    }
}
