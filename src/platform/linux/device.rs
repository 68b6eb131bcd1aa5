//! Virtual device lifecycle: open, register, create, emit, destroy.

use super::registrar;
use super::sys::{self, UI_DEV_CREATE, UI_DEV_DESTROY, UinputSetup};
use crate::capability::CapabilitySet;
use crate::error::{Error, Result};
use crate::event::{FRAME_SIZE, InputEvent};
use crate::identity::{DeviceIdentity, DeviceName};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::fd::AsRawFd;
use std::path::Path;

/// An active uinput device, owning the descriptor it was created on.
///
/// Once [`close`](Self::close) has run the descriptor is gone and every
/// emission fails with [`Error::DeviceClosed`]; the device is never reopened.
/// Events outside the registered [`CapabilitySet`] are refused with
/// [`Error::Unsupported`] before anything is written.
#[derive(Debug)]
pub struct VirtualDevice {
    file: Option<File>,
    name: DeviceName,
    caps: CapabilitySet,
}

impl VirtualDevice {
    /// Opens `path`, registers `caps`, and creates the device.
    ///
    /// Either a fully usable device is returned or nothing is left behind:
    /// if any step fails the descriptor is closed before the kernel device
    /// exists.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty or does not exist, or if `name` is empty or
    /// longer than [`MAX_NAME_LEN`](crate::MAX_NAME_LEN) bytes.
    pub fn create(
        path: impl AsRef<Path>,
        name: impl Into<Vec<u8>>,
        identity: DeviceIdentity,
        caps: &CapabilitySet,
    ) -> Result<Self> {
        let path = path.as_ref();
        assert!(
            !path.as_os_str().is_empty(),
            "device path must not be empty"
        );
        assert!(
            path.exists(),
            "device path '{}' does not exist",
            path.display()
        );
        let name = DeviceName::new(name);

        let mut file = open_node(path)?;
        let fd = file.as_raw_fd();

        registrar::register(fd, caps)?;

        let setup = UinputSetup::new(&name, identity);
        match sys::dev_setup(fd, &setup) {
            Ok(()) => {}
            Err(e) if e.raw_os_error() == Some(libc::EINVAL) => {
                // Kernels before 4.5 take the identity as a written record.
                log::debug!("UI_DEV_SETUP unsupported, writing legacy uinput_user_dev");
                file.write_all(&sys::legacy_user_dev(&name, identity))
                    .map_err(|source| Error::Request {
                        request: "uinput_user_dev",
                        source,
                    })?;
            }
            Err(source) => {
                return Err(Error::Request {
                    request: "UI_DEV_SETUP",
                    source,
                });
            }
        }

        sys::ioctl_none(fd, UI_DEV_CREATE, "UI_DEV_CREATE")?;
        log::info!("created virtual device '{}' on {}", name, path.display());

        Ok(Self {
            file: Some(file),
            name,
            caps: caps.clone(),
        })
    }

    /// Wraps an already-open descriptor as a mouse without touching the kernel.
    #[cfg(test)]
    pub(crate) fn from_file(file: File, name: &str) -> Self {
        Self {
            file: Some(file),
            name: DeviceName::new(name),
            caps: CapabilitySet::mouse(),
        }
    }

    pub fn name(&self) -> &DeviceName {
        &self.name
    }

    /// The capabilities registered when the device was created.
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.caps
    }

    /// Returns `true` once the device has been closed.
    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }

    /// Writes `event` followed by a synchronization record in a single write.
    ///
    /// `event` must be a key or relative event registered on the device;
    /// anything else, including a bare synchronization event, fails with
    /// [`Error::Unsupported`]. Success only means the kernel accepted the
    /// bytes.
    pub fn emit(&mut self, event: InputEvent) -> Result<()> {
        let file = self.file.as_mut().ok_or(Error::DeviceClosed)?;
        if !self.caps.permits(&event) {
            return Err(Error::Unsupported {
                event_type: event.event_type,
                code: event.code,
            });
        }
        let frame = event.encode_frame();
        let written = file.write(&frame).map_err(Error::Write)?;
        if written != FRAME_SIZE {
            return Err(Error::ShortWrite {
                written,
                expected: FRAME_SIZE,
            });
        }
        Ok(())
    }

    /// Destroys the kernel device and releases the descriptor.
    ///
    /// The descriptor is released even if the destroy request fails; that
    /// failure is still returned. Closing twice returns
    /// [`Error::DeviceClosed`].
    pub fn close(&mut self) -> Result<()> {
        let file = self.file.take().ok_or(Error::DeviceClosed)?;
        let result = sys::ioctl_none(file.as_raw_fd(), UI_DEV_DESTROY, "UI_DEV_DESTROY");
        drop(file);
        log::debug!("closed virtual device '{}'", self.name);
        result
    }
}

impl Drop for VirtualDevice {
    fn drop(&mut self) {
        if self.file.is_some()
            && let Err(e) = self.close()
        {
            log::warn!("failed to destroy virtual device '{}': {}", self.name, e);
        }
    }
}

fn open_node(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(format!(
                "cannot open {}: {}. Make sure it is accessible \
                 (you may need to be in the 'input' group or have appropriate udev rules).",
                path.display(),
                source
            )),
            _ => Error::Open {
                path: path.to_path_buf(),
                source,
            },
        })
}
