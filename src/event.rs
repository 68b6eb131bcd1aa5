//! Input event types and the encoder for kernel event records.
//!
//! Every record written to a uinput descriptor has the layout of the kernel's
//! `struct input_event`:
//!
//! ```text
//! | time.sec (ulong) | time.usec (ulong) | type (u16) | code (u16) | value (i32) |
//! ```
//!
//! The time fields are left zeroed; the input core stamps the event when it is
//! injected. All fields use native byte order.

use std::ffi::c_ulong;
use std::mem::size_of;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size of the zero-filled timestamp prefix of a record.
const TIME_SIZE: usize = 2 * size_of::<c_ulong>();

/// Size in bytes of one encoded event record.
pub const EVENT_SIZE: usize = TIME_SIZE + 2 + 2 + 4;

/// Size in bytes of one frame: an event followed by its synchronization record.
pub const FRAME_SIZE: usize = 2 * EVENT_SIZE;

/// `SYN_REPORT`, the synchronization code that closes a frame.
pub const SYN_REPORT: u16 = 0x00;

/// Event types a virtual mouse emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventType {
    /// `EV_SYN`: frame boundary.
    Synchronization,
    /// `EV_KEY`: key and button state changes.
    Key,
    /// `EV_REL`: relative axis motion.
    Relative,
}

impl EventType {
    /// Kernel `EV_*` value.
    pub const fn code(self) -> u16 {
        match self {
            EventType::Synchronization => 0x00,
            EventType::Key => 0x01,
            EventType::Relative => 0x02,
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Button {
    /// `BTN_LEFT`
    Left,
    /// `BTN_RIGHT`
    Right,
    /// `BTN_MIDDLE`
    Middle,
}

impl Button {
    /// Kernel `BTN_*` code.
    pub const fn code(self) -> u16 {
        match self {
            Button::Left => 0x110,
            Button::Right => 0x111,
            Button::Middle => 0x112,
        }
    }

    /// The button with kernel code `code`, if it is one of ours.
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0x110 => Some(Button::Left),
            0x111 => Some(Button::Right),
            0x112 => Some(Button::Middle),
            _ => None,
        }
    }
}

/// Relative axes.
///
/// Positive `X` moves right and positive `Y` moves down. Positive `Wheel`
/// scrolls up and positive `HorizontalWheel` scrolls right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RelativeAxis {
    /// `REL_X`
    X,
    /// `REL_Y`
    Y,
    /// `REL_HWHEEL`
    HorizontalWheel,
    /// `REL_WHEEL`
    Wheel,
}

impl RelativeAxis {
    /// Kernel `REL_*` code.
    pub const fn code(self) -> u16 {
        match self {
            RelativeAxis::X => 0x00,
            RelativeAxis::Y => 0x01,
            RelativeAxis::HorizontalWheel => 0x06,
            RelativeAxis::Wheel => 0x08,
        }
    }

    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0x00 => Some(RelativeAxis::X),
            0x01 => Some(RelativeAxis::Y),
            0x06 => Some(RelativeAxis::HorizontalWheel),
            0x08 => Some(RelativeAxis::Wheel),
            _ => None,
        }
    }
}

/// A logical input event, constructed and serialized per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub event_type: EventType,
    pub code: u16,
    pub value: i32,
}

impl InputEvent {
    pub const fn new(event_type: EventType, code: u16, value: i32) -> Self {
        Self {
            event_type,
            code,
            value,
        }
    }

    /// A button press (`pressed = true`, value 1) or release (value 0).
    pub const fn button(button: Button, pressed: bool) -> Self {
        Self::new(EventType::Key, button.code(), pressed as i32)
    }

    /// Relative motion of `value` along `axis`.
    pub const fn relative(axis: RelativeAxis, value: i32) -> Self {
        Self::new(EventType::Relative, axis.code(), value)
    }

    /// The `SYN_REPORT` marker that ends a frame.
    pub const fn sync() -> Self {
        Self::new(EventType::Synchronization, SYN_REPORT, 0)
    }

    /// Packs the event into a kernel event record.
    pub fn encode(&self) -> [u8; EVENT_SIZE] {
        let mut record = [0u8; EVENT_SIZE];
        record[TIME_SIZE..TIME_SIZE + 2].copy_from_slice(&self.event_type.code().to_ne_bytes());
        record[TIME_SIZE + 2..TIME_SIZE + 4].copy_from_slice(&self.code.to_ne_bytes());
        record[TIME_SIZE + 4..].copy_from_slice(&self.value.to_ne_bytes());
        record
    }

    /// Encodes the event followed by a synchronization record, so the input
    /// core applies it as one atomic frame.
    pub fn encode_frame(&self) -> [u8; FRAME_SIZE] {
        let mut frame = [0u8; FRAME_SIZE];
        frame[..EVENT_SIZE].copy_from_slice(&self.encode());
        frame[EVENT_SIZE..].copy_from_slice(&Self::sync().encode());
        frame
    }
}

/// Splits raw bytes back into `(type, code, value)` triples.
#[cfg(test)]
pub(crate) fn decode_records(bytes: &[u8]) -> Vec<(u16, u16, i32)> {
    assert_eq!(bytes.len() % EVENT_SIZE, 0, "partial record in buffer");
    bytes
        .chunks_exact(EVENT_SIZE)
        .map(|record| {
            assert!(record[..TIME_SIZE].iter().all(|&b| b == 0));
            let field = &record[TIME_SIZE..];
            (
                u16::from_ne_bytes([field[0], field[1]]),
                u16::from_ne_bytes([field[2], field[3]]),
                i32::from_ne_bytes([field[4], field[5], field[6], field[7]]),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_size_matches_kernel_layout() {
        #[cfg(target_pointer_width = "64")]
        assert_eq!(EVENT_SIZE, 24);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(EVENT_SIZE, 16);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_event_size_matches_libc() {
        assert_eq!(EVENT_SIZE, size_of::<libc::input_event>());
    }

    #[test]
    fn test_encode_packs_fields_after_timestamp() {
        let record = InputEvent::relative(RelativeAxis::Y, -42).encode();
        assert!(record[..TIME_SIZE].iter().all(|&b| b == 0));
        assert_eq!(&record[TIME_SIZE..TIME_SIZE + 2], &0x02u16.to_ne_bytes());
        assert_eq!(&record[TIME_SIZE + 2..TIME_SIZE + 4], &0x01u16.to_ne_bytes());
        assert_eq!(&record[TIME_SIZE + 4..], &(-42i32).to_ne_bytes());
    }

    #[test]
    fn test_button_values() {
        assert_eq!(
            InputEvent::button(Button::Left, true),
            InputEvent::new(EventType::Key, 0x110, 1)
        );
        assert_eq!(
            InputEvent::button(Button::Right, false),
            InputEvent::new(EventType::Key, 0x111, 0)
        );
    }

    #[test]
    fn test_frame_ends_with_sync() {
        let frame = InputEvent::button(Button::Middle, true).encode_frame();
        assert_eq!(
            decode_records(&frame),
            vec![(0x01, 0x112, 1), (0x00, SYN_REPORT, 0)]
        );
    }

    #[test]
    fn test_kernel_codes() {
        assert_eq!(EventType::Synchronization.code(), 0x00);
        assert_eq!(RelativeAxis::X.code(), 0x00);
        assert_eq!(RelativeAxis::HorizontalWheel.code(), 0x06);
        assert_eq!(RelativeAxis::Wheel.code(), 0x08);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Button::from_code(0x112), Some(Button::Middle));
        assert_eq!(Button::from_code(0x1E), None);
        assert_eq!(RelativeAxis::from_code(0x06), Some(RelativeAxis::HorizontalWheel));
        assert_eq!(RelativeAxis::from_code(0x02), None);
    }
}
