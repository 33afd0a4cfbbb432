//! Device — a network device registered under its serial number.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::error::{DeviceHubError, ValidationError};
use crate::id::SerialNum;

/// A registered device.
///
/// Field names on the wire follow the public API: `SerialNum`, `Model`, `IP`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "SerialNum")]
    pub serial_num: SerialNum,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "IP")]
    pub ip: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// The serial number is non-empty by construction, so only the address
    /// needs checking here.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Validation`] when `ip` is not a dotted-quad
    /// IPv4 address.
    pub fn validate(&self) -> Result<(), DeviceHubError> {
        parse_ipv4(&self.ip)?;
        Ok(())
    }
}

/// Parse a dotted-quad IPv4 address.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidIpv4`] when `ip` does not parse.
pub fn parse_ipv4(ip: &str) -> Result<Ipv4Addr, ValidationError> {
    ip.parse().map_err(|_| ValidationError::InvalidIpv4 { ip: ip.to_string() })
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    serial_num: Option<String>,
    model: Option<String>,
    ip: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn serial_num(mut self, serial_num: impl Into<String>) -> Self {
        self.serial_num = Some(serial_num.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::Validation`] if the serial number is missing
    /// or empty, or if the IP is not a valid IPv4 address.
    pub fn build(self) -> Result<Device, DeviceHubError> {
        let device = Device {
            serial_num: SerialNum::new(self.serial_num.unwrap_or_default())?,
            model: self.model.unwrap_or_default(),
            ip: self.ip.unwrap_or_default(),
        };
        device.validate()?;
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_device_when_all_fields_provided() {
        let device = Device::builder()
            .serial_num("1")
            .model("ppp")
            .ip("0.9.9.0")
            .build()
            .unwrap();

        assert_eq!(device.serial_num.as_str(), "1");
        assert_eq!(device.model, "ppp");
        assert_eq!(device.ip, "0.9.9.0");
    }

    #[test]
    fn should_allow_empty_model() {
        let device = Device::builder()
            .serial_num("1")
            .ip("10.0.0.1")
            .build()
            .unwrap();
        assert!(device.model.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_serial_num_missing() {
        let result = Device::builder().ip("10.0.0.1").build();
        assert!(matches!(
            result,
            Err(DeviceHubError::Validation(ValidationError::EmptySerialNum))
        ));
    }

    #[test]
    fn should_return_validation_error_when_ip_is_not_ipv4() {
        for ip in ["", "updated_ip", "256.0.0.1", "1.2.3", "::1", "fe80::1"] {
            let result = Device::builder().serial_num("1").ip(ip).build();
            assert!(
                matches!(
                    result,
                    Err(DeviceHubError::Validation(ValidationError::InvalidIpv4 { .. }))
                ),
                "expected {ip:?} to be rejected"
            );
        }
    }

    #[test]
    fn should_use_api_field_names_in_json() {
        let device = Device::builder()
            .serial_num("2")
            .model("ppp")
            .ip("0.9.9.0")
            .build()
            .unwrap();

        let json = serde_json::to_string(&device).unwrap();
        assert_eq!(json, r#"{"SerialNum":"2","Model":"ppp","IP":"0.9.9.0"}"#);
    }

    #[test]
    fn should_parse_device_from_api_json() {
        let device: Device =
            serde_json::from_str(r#"{"SerialNum":"7","Model":"m","IP":"1.1.1.1"}"#).unwrap();
        assert_eq!(device.serial_num.as_str(), "7");
        assert_eq!(device.ip, "1.1.1.1");
    }
}
