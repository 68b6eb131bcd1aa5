//! The virtual mouse.

use crate::capability::CapabilitySet;
use crate::error::{Error, Result};
use crate::event::{Button, InputEvent, RelativeAxis};
use crate::identity::{DeviceIdentity, DeviceName};
use crate::platform::VirtualDevice;
use std::path::Path;

/// Conventional location of the uinput control node.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/uinput";

/// A virtual relative mouse with left, right and middle buttons and two
/// scroll wheels.
///
/// Every operation writes one frame per logical event (the event followed by
/// `SYN_REPORT`) and returns as soon as the kernel accepts the bytes. After
/// [`close`](Self::close) every operation fails with [`Error::DeviceClosed`].
///
/// The mouse is not synchronized; share it across threads only behind a lock.
#[derive(Debug)]
pub struct Mouse {
    device: VirtualDevice,
}

impl Mouse {
    /// Creates a virtual mouse named `name` through the uinput node at `path`.
    ///
    /// ```no_run
    /// use vmouse::{DEFAULT_DEVICE_PATH, Mouse};
    ///
    /// let mut mouse = Mouse::create(DEFAULT_DEVICE_PATH, "vmouse demo")?;
    /// mouse.move_right(100)?;
    /// mouse.left_click()?;
    /// mouse.close()?;
    /// # Ok::<(), vmouse::Error>(())
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty or does not exist, or if `name` is empty or
    /// longer than [`MAX_NAME_LEN`](crate::MAX_NAME_LEN) bytes. These are
    /// configuration mistakes, not runtime conditions.
    pub fn create(path: impl AsRef<Path>, name: impl Into<Vec<u8>>) -> Result<Self> {
        Self::create_with_identity(path, name, DeviceIdentity::default())
    }

    /// Like [`create`](Self::create), reporting `identity` as the device's
    /// bus, vendor, product and version.
    ///
    /// # Panics
    ///
    /// Same as [`create`](Self::create).
    pub fn create_with_identity(
        path: impl AsRef<Path>,
        name: impl Into<Vec<u8>>,
        identity: DeviceIdentity,
    ) -> Result<Self> {
        let device = VirtualDevice::create(path, name, identity, &CapabilitySet::mouse())?;
        Ok(Self { device })
    }

    #[cfg(test)]
    pub(crate) fn from_device(device: VirtualDevice) -> Self {
        Self { device }
    }

    pub fn name(&self) -> &DeviceName {
        self.device.name()
    }

    /// Returns `true` once the mouse has been closed.
    pub fn is_closed(&self) -> bool {
        self.device.is_closed()
    }

    pub fn move_left(&mut self, distance: u32) -> Result<()> {
        self.motion(RelativeAxis::X, -to_value(distance)?)
    }

    pub fn move_right(&mut self, distance: u32) -> Result<()> {
        self.motion(RelativeAxis::X, to_value(distance)?)
    }

    /// Moves the pointer up; the kernel's Y axis grows downwards.
    pub fn move_up(&mut self, distance: u32) -> Result<()> {
        self.motion(RelativeAxis::Y, -to_value(distance)?)
    }

    pub fn move_down(&mut self, distance: u32) -> Result<()> {
        self.motion(RelativeAxis::Y, to_value(distance)?)
    }

    /// Scrolls by `delta` notches. Positive values scroll up, or right when
    /// `horizontal` is set.
    pub fn wheel(&mut self, horizontal: bool, delta: i32) -> Result<()> {
        let axis = if horizontal {
            RelativeAxis::HorizontalWheel
        } else {
            RelativeAxis::Wheel
        };
        self.motion(axis, delta)
    }

    pub fn left_press(&mut self) -> Result<()> {
        self.button(Button::Left, true)
    }

    pub fn left_release(&mut self) -> Result<()> {
        self.button(Button::Left, false)
    }

    /// Presses and releases the left button as two separate frames.
    pub fn left_click(&mut self) -> Result<()> {
        self.click(Button::Left)
    }

    pub fn right_press(&mut self) -> Result<()> {
        self.button(Button::Right, true)
    }

    pub fn right_release(&mut self) -> Result<()> {
        self.button(Button::Right, false)
    }

    /// Presses and releases the right button as two separate frames.
    pub fn right_click(&mut self) -> Result<()> {
        self.click(Button::Right)
    }

    pub fn middle_press(&mut self) -> Result<()> {
        self.button(Button::Middle, true)
    }

    pub fn middle_release(&mut self) -> Result<()> {
        self.button(Button::Middle, false)
    }

    pub fn middle_click(&mut self) -> Result<()> {
        self.click(Button::Middle)
    }

    /// Destroys the virtual device. A second call returns
    /// [`Error::DeviceClosed`].
    pub fn close(&mut self) -> Result<()> {
        self.device.close()
    }

    fn motion(&mut self, axis: RelativeAxis, value: i32) -> Result<()> {
        self.device.emit(InputEvent::relative(axis, value))
    }

    fn button(&mut self, button: Button, pressed: bool) -> Result<()> {
        self.device.emit(InputEvent::button(button, pressed))
    }

    fn click(&mut self, button: Button) -> Result<()> {
        self.button(button, true)?;
        self.button(button, false)
    }
}

fn to_value(distance: u32) -> Result<i32> {
    i32::try_from(distance).map_err(|_| Error::DistanceOutOfRange(distance))
}
