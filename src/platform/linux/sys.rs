//! uinput control requests and the raw structs they take.
//!
//! Request numbers follow the generic `_IOC` encoding
//! (`dir << 30 | size << 16 | type << 8 | nr`); `platform/mod.rs` only builds
//! this backend on architectures that use it.

use crate::error::{Error, Result};
use crate::identity::{DeviceIdentity, DeviceName, MAX_NAME_LEN};
use std::io;
use std::mem::size_of;
use std::os::fd::RawFd;

/// Request argument type of `libc::ioctl`, which differs between C libraries.
#[cfg(any(target_env = "musl", target_os = "android"))]
pub type Ioctl = libc::c_int;
#[cfg(not(any(target_env = "musl", target_os = "android")))]
pub type Ioctl = libc::c_ulong;

const IOC_NONE: u32 = 0;
const IOC_WRITE: u32 = 1;

const UINPUT_IOCTL_BASE: u32 = b'U' as u32;

const fn ioc(dir: u32, nr: u32, size: usize) -> Ioctl {
    ((dir << 30) | ((size as u32) << 16) | (UINPUT_IOCTL_BASE << 8) | nr) as Ioctl
}

pub const UI_DEV_CREATE: Ioctl = ioc(IOC_NONE, 1, 0);
pub const UI_DEV_DESTROY: Ioctl = ioc(IOC_NONE, 2, 0);
pub const UI_DEV_SETUP: Ioctl = ioc(IOC_WRITE, 3, size_of::<UinputSetup>());
pub const UI_SET_EVBIT: Ioctl = ioc(IOC_WRITE, 100, size_of::<libc::c_int>());
pub const UI_SET_KEYBIT: Ioctl = ioc(IOC_WRITE, 101, size_of::<libc::c_int>());
pub const UI_SET_RELBIT: Ioctl = ioc(IOC_WRITE, 102, size_of::<libc::c_int>());

/// Number of absolute axes in the legacy setup record.
const ABS_CNT: usize = 64;

/// `struct input_id`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct InputId {
    pub bustype: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

impl From<DeviceIdentity> for InputId {
    fn from(identity: DeviceIdentity) -> Self {
        Self {
            bustype: identity.bus_type,
            vendor: identity.vendor,
            product: identity.product,
            version: identity.version,
        }
    }
}

/// `struct uinput_setup`, taken by `UI_DEV_SETUP`.
#[repr(C)]
#[derive(Debug)]
pub struct UinputSetup {
    pub id: InputId,
    pub name: [u8; MAX_NAME_LEN],
    pub ff_effects_max: u32,
}

impl UinputSetup {
    pub fn new(name: &DeviceName, identity: DeviceIdentity) -> Self {
        Self {
            id: identity.into(),
            name: name.to_field(),
            ff_effects_max: 0,
        }
    }
}

/// Bytes of the legacy `struct uinput_user_dev`, written to the descriptor on
/// kernels that predate `UI_DEV_SETUP`.
pub fn legacy_user_dev(name: &DeviceName, identity: DeviceIdentity) -> Vec<u8> {
    let id = InputId::from(identity);
    let mut record = Vec::with_capacity(legacy_user_dev_size());
    record.extend_from_slice(&name.to_field());
    for field in [id.bustype, id.vendor, id.product, id.version] {
        record.extend_from_slice(&field.to_ne_bytes());
    }
    // ff_effects_max, then absmax/absmin/absfuzz/absflat
    record.resize(legacy_user_dev_size(), 0);
    record
}

const fn legacy_user_dev_size() -> usize {
    MAX_NAME_LEN + size_of::<InputId>() + size_of::<u32>() + 4 * ABS_CNT * size_of::<i32>()
}

/// Issues a request that takes an integer argument, such as `UI_SET_EVBIT`.
pub fn ioctl_int(fd: RawFd, request: Ioctl, name: &'static str, value: u16) -> Result<()> {
    // SAFETY: the request takes its argument by value.
    let ret = unsafe { libc::ioctl(fd, request, libc::c_int::from(value)) };
    if ret < 0 {
        return Err(Error::request(name));
    }
    Ok(())
}

/// Issues a request without an argument, such as `UI_DEV_CREATE`.
pub fn ioctl_none(fd: RawFd, request: Ioctl, name: &'static str) -> Result<()> {
    // SAFETY: the request reads no argument.
    let ret = unsafe { libc::ioctl(fd, request) };
    if ret < 0 {
        return Err(Error::request(name));
    }
    Ok(())
}

/// Issues `UI_DEV_SETUP`, returning the raw OS error so callers can detect
/// kernels that lack the request.
pub fn dev_setup(fd: RawFd, setup: &UinputSetup) -> io::Result<()> {
    // SAFETY: `setup` is a live `uinput_setup` for the duration of the call;
    // the kernel only reads from it.
    let ret = unsafe { libc::ioctl(fd, UI_DEV_SETUP, setup as *const UinputSetup) };
    if ret < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_numbers() {
        assert_eq!(UI_DEV_CREATE as u64, 0x5501);
        assert_eq!(UI_DEV_DESTROY as u64, 0x5502);
        assert_eq!(UI_DEV_SETUP as u64, 0x405c5503);
        assert_eq!(UI_SET_EVBIT as u64, 0x40045564);
        assert_eq!(UI_SET_KEYBIT as u64, 0x40045565);
        assert_eq!(UI_SET_RELBIT as u64, 0x40045566);
    }

    #[test]
    fn test_setup_struct_size() {
        assert_eq!(size_of::<InputId>(), 8);
        assert_eq!(size_of::<UinputSetup>(), 92);
    }

    #[test]
    fn test_legacy_user_dev_layout() {
        let identity = DeviceIdentity::default();
        let record = legacy_user_dev(&DeviceName::new("legacy"), identity);
        assert_eq!(record.len(), 1116);
        assert_eq!(&record[..6], b"legacy");
        assert_eq!(&record[80..82], &identity.bus_type.to_ne_bytes());
        assert_eq!(&record[82..84], &identity.vendor.to_ne_bytes());
        assert!(record[88..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_setup_carries_identity() {
        let identity = DeviceIdentity {
            bus_type: 0x06,
            vendor: 1,
            product: 2,
            version: 3,
        };
        let setup = UinputSetup::new(&DeviceName::new("ids"), identity);
        assert_eq!(setup.id.bustype, 0x06);
        assert_eq!(setup.id.version, 3);
        assert_eq!(&setup.name[..3], b"ids");
    }
}
