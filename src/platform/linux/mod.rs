//! Linux uinput backend.
//!
//! Virtual devices are created through `/dev/uinput`. The process needs write
//! access to it, usually by running as a user in the `input` group or through
//! a udev rule:
//!
//! ```text
//! KERNEL=="uinput", GROUP="input", MODE="0660"
//! ```

mod device;
mod registrar;
mod sys;

pub use device::VirtualDevice;
