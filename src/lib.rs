//! # vmouse
//!
//! Virtual mouse emulation on Linux through the kernel's uinput facility.
//!
//! A [`Mouse`] is a real input device as far as the rest of the system is
//! concerned: it shows up under `/dev/input`, and X11, Wayland compositors
//! and the console all consume its events like those of physical hardware.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vmouse::{DEFAULT_DEVICE_PATH, Mouse};
//!
//! let mut mouse = Mouse::create(DEFAULT_DEVICE_PATH, "my virtual mouse")?;
//!
//! mouse.move_right(150)?;
//! mouse.move_down(100)?;
//! mouse.left_click()?;
//! mouse.wheel(false, -2)?;
//!
//! mouse.close()?;
//! # Ok::<(), vmouse::Error>(())
//! ```
//!
//! ## Errors
//!
//! There are two tiers of failure:
//!
//! - Construction with an empty or missing device path, or with an empty or
//!   oversized name, panics. These are caller bugs.
//! - Everything the kernel can reject (opening the node, control requests,
//!   event writes) and any use of a closed device returns an [`Error`].
//!
//! Nothing is retried internally.
//!
//! ## Permissions
//!
//! The process needs read/write access to `/dev/uinput`:
//! ```bash
//! sudo usermod -aG input $USER
//! # Then log out and back in
//! ```

pub mod capability;
pub mod error;
pub mod event;
pub mod identity;
pub mod mouse;

mod platform;
#[cfg(test)]
mod test_support;

// Re-exports
pub use capability::CapabilitySet;
pub use error::{Error, Result};
pub use event::{Button, EVENT_SIZE, EventType, InputEvent, RelativeAxis};
pub use identity::{DeviceIdentity, DeviceName, MAX_NAME_LEN};
pub use mouse::{DEFAULT_DEVICE_PATH, Mouse};
pub use platform::VirtualDevice;
