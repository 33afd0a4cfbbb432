//! In-memory implementation of [`DeviceRepository`].

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::RwLock;

use devicehub_app::ports::DeviceRepository;
use devicehub_domain::device::Device;
use devicehub_domain::error::{ConflictError, DeviceHubError, NotFoundError};
use devicehub_domain::id::SerialNum;

/// Device repository backed by a `HashMap` behind a single `RwLock`.
///
/// Reads share the lock; writes hold it exclusively. Every guard is held
/// for exactly one map access.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRepository {
    devices: RwLock<HashMap<SerialNum, Device>>,
}

impl InMemoryDeviceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored devices.
    pub async fn len(&self) -> usize {
        self.devices.read().await.len()
    }

    /// Whether no device is stored.
    pub async fn is_empty(&self) -> bool {
        self.devices.read().await.is_empty()
    }
}

fn not_found(serial_num: &str) -> DeviceHubError {
    tracing::debug!(serial_num, "device not found");
    NotFoundError {
        serial_num: serial_num.to_string(),
    }
    .into()
}

impl DeviceRepository for InMemoryDeviceRepository {
    fn get(
        &self,
        serial_num: &str,
    ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send {
        async move {
            let devices = self.devices.read().await;
            devices
                .get(serial_num)
                .cloned()
                .ok_or_else(|| not_found(serial_num))
        }
    }

    fn create(&self, device: Device) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
        async move {
            let mut devices = self.devices.write().await;
            if devices.contains_key(&device.serial_num) {
                return Err(ConflictError {
                    serial_num: device.serial_num.into_inner(),
                }
                .into());
            }
            tracing::debug!(serial_num = %device.serial_num, "device created");
            devices.insert(device.serial_num.clone(), device);
            Ok(())
        }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
        async move {
            let mut devices = self.devices.write().await;
            let Some(slot) = devices.get_mut(&device.serial_num) else {
                return Err(not_found(device.serial_num.as_str()));
            };
            tracing::debug!(serial_num = %device.serial_num, "device updated");
            *slot = device;
            Ok(())
        }
    }

    fn delete(
        &self,
        serial_num: &str,
    ) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
        async move {
            let mut devices = self.devices.write().await;
            if devices.remove(serial_num).is_none() {
                return Err(not_found(serial_num));
            }
            tracing::debug!(serial_num, "device deleted");
            Ok(())
        }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Device>, DeviceHubError>> + Send {
        async move {
            let devices = self.devices.read().await;
            let mut keys: Vec<&SerialNum> = devices.keys().collect();
            keys.sort_unstable();
            Ok(keys.into_iter().map(|key| devices[key].clone()).collect())
        }
    }
}
