//! The set of event types and codes a virtual device declares before it is
//! activated.

use crate::event::{Button, EventType, InputEvent, RelativeAxis};

/// Event types and codes registered on a device at creation time.
///
/// The set is fixed once the device is active. A device keeps the set it was
/// created with and refuses to write any event it does not
/// [`permit`](Self::permits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    buttons: Vec<Button>,
    axes: Vec<RelativeAxis>,
}

impl CapabilitySet {
    /// The capabilities of a three-button wheel mouse.
    pub fn mouse() -> Self {
        Self {
            buttons: vec![Button::Left, Button::Right, Button::Middle],
            axes: vec![
                RelativeAxis::X,
                RelativeAxis::Y,
                RelativeAxis::HorizontalWheel,
                RelativeAxis::Wheel,
            ],
        }
    }

    /// Event types to enable, in registration order.
    pub fn event_types(&self) -> Vec<EventType> {
        let mut types = vec![EventType::Synchronization];
        if !self.buttons.is_empty() {
            types.push(EventType::Key);
        }
        if !self.axes.is_empty() {
            types.push(EventType::Relative);
        }
        types
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn axes(&self) -> &[RelativeAxis] {
        &self.axes
    }

    /// Returns `true` if `button` is registered.
    pub fn has_button(&self, button: Button) -> bool {
        self.buttons.contains(&button)
    }

    /// Returns `true` if `axis` is registered.
    pub fn has_axis(&self, axis: RelativeAxis) -> bool {
        self.axes.contains(&axis)
    }

    /// Returns `true` if `event` may be emitted as the payload of a frame.
    ///
    /// Synchronization events are never a payload; every frame already ends
    /// with one.
    pub fn permits(&self, event: &InputEvent) -> bool {
        match event.event_type {
            EventType::Key => Button::from_code(event.code).is_some_and(|b| self.has_button(b)),
            EventType::Relative => {
                RelativeAxis::from_code(event.code).is_some_and(|a| self.has_axis(a))
            }
            EventType::Synchronization => false,
        }
    }
}
