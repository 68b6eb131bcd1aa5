//! Device identity: the kernel-visible name and bus/vendor/product ids.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum device name length, fixed by the kernel's `UINPUT_MAX_NAME_SIZE`.
pub const MAX_NAME_LEN: usize = 80;

/// `BUS_USB`
pub const BUS_USB: u16 = 0x03;

/// Name under which the device is announced to the system.
///
/// Always non-empty and at most [`MAX_NAME_LEN`] bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceName(Vec<u8>);

impl DeviceName {
    /// Validates a device name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or longer than [`MAX_NAME_LEN`] bytes.
    pub fn new(name: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "device name must not be empty");
        assert!(
            name.len() <= MAX_NAME_LEN,
            "device name {} is too long (maximum of {} characters allowed)",
            String::from_utf8_lossy(&name),
            MAX_NAME_LEN
        );
        Self(name)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The name as the fixed-size field of the kernel setup structs.
    pub(crate) fn to_field(&self) -> [u8; MAX_NAME_LEN] {
        let mut field = [0u8; MAX_NAME_LEN];
        field[..self.0.len()].copy_from_slice(&self.0);
        field
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceName({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// Bus and product identifiers reported for the device.
///
/// The defaults are placeholders; nothing in the input stack interprets them
/// for a relative mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceIdentity {
    pub bus_type: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self {
            bus_type: BUS_USB,
            vendor: 0x4711,
            product: 0x0815,
            version: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_at_limit_is_accepted() {
        let name = DeviceName::new(vec![b'm'; MAX_NAME_LEN]);
        assert_eq!(name.as_bytes().len(), MAX_NAME_LEN);
        assert_eq!(name.to_field(), [b'm'; MAX_NAME_LEN]);
    }

    #[test]
    fn test_name_field_is_nul_padded() {
        let field = DeviceName::new("Test Basic Mouse").to_field();
        assert_eq!(&field[..16], b"Test Basic Mouse");
        assert!(field[16..].iter().all(|&b| b == 0));
    }

    #[test]
    #[should_panic(expected = "is too long (maximum of 80 characters allowed)")]
    fn test_name_over_limit_panics() {
        DeviceName::new(vec![b'm'; MAX_NAME_LEN + 1]);
    }

    #[test]
    #[should_panic(expected = "device name must not be empty")]
    fn test_empty_name_panics() {
        DeviceName::new(Vec::new());
    }

    #[test]
    fn test_display_is_lossy_utf8() {
        assert_eq!(DeviceName::new("Mouse").to_string(), "Mouse");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_identity_deserializes_with_defaults() {
        let identity: DeviceIdentity = serde_json::from_str(r#"{"vendor": 4660}"#).unwrap();
        assert_eq!(identity.vendor, 0x1234);
        assert_eq!(identity.product, DeviceIdentity::default().product);
    }
}
