//! Error types for virtual device operations.
//!
//! Only recoverable runtime failures live here. Misconfiguration at
//! construction time (empty or missing device path, bad device name) panics
//! instead, see [`Mouse::create`](crate::Mouse::create).

use crate::event::EventType;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vmouse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a virtual device.
#[derive(Debug, Error)]
pub enum Error {
    /// The device was closed and can no longer emit events.
    #[error("device is closed")]
    DeviceClosed,

    /// Opening the device node failed.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The process is not allowed to open the device node.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A control request was rejected by the kernel.
    #[error("{request} request failed: {source}")]
    Request {
        request: &'static str,
        #[source]
        source: io::Error,
    },

    /// The event's type or code was not registered on the device.
    #[error("event type {event_type:?} code {code:#x} is not registered on this device")]
    Unsupported { event_type: EventType, code: u16 },

    /// Writing an event record failed.
    #[error("failed to write event: {0}")]
    Write(#[source] io::Error),

    /// The kernel accepted fewer bytes than a full frame.
    #[error("short write: {written} of {expected} bytes accepted")]
    ShortWrite { written: usize, expected: usize },

    /// A movement distance does not fit the kernel's signed event value.
    #[error("distance {0} exceeds the maximum relative motion of {max}", max = i32::MAX)]
    DistanceOutOfRange(u32),
}

impl Error {
    /// Returns `true` if this error reports use of a closed device.
    pub fn is_closed(&self) -> bool {
        matches!(self, Error::DeviceClosed)
    }

    pub(crate) fn request(request: &'static str) -> Self {
        Error::Request {
            request,
            source: io::Error::last_os_error(),
        }
    }
}
