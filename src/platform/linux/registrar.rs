//! Capability registration on a not-yet-created uinput descriptor.

use super::sys::{self, UI_SET_EVBIT, UI_SET_KEYBIT, UI_SET_RELBIT};
use crate::capability::CapabilitySet;
use crate::error::Result;
use std::os::fd::RawFd;

/// Enables every event type, then every button and axis code in `caps`.
///
/// Stops at the first rejected request. The device does not exist yet at this
/// point, so closing the descriptor discards whatever was registered.
pub fn register(fd: RawFd, caps: &CapabilitySet) -> Result<()> {
    for event_type in caps.event_types() {
        sys::ioctl_int(fd, UI_SET_EVBIT, "UI_SET_EVBIT", event_type.code())?;
    }
    for button in caps.buttons() {
        sys::ioctl_int(fd, UI_SET_KEYBIT, "UI_SET_KEYBIT", button.code())?;
    }
    for axis in caps.axes() {
        sys::ioctl_int(fd, UI_SET_RELBIT, "UI_SET_RELBIT", axis.code())?;
    }

    log::debug!(
        "registered {} buttons and {} relative axes",
        caps.buttons().len(),
        caps.axes().len()
    );
    Ok(())
}
