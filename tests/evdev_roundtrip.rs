//! Checks what the kernel made of a virtual mouse by reading it back through
//! evdev. Needs access to `/dev/uinput` and `/dev/input/event*`.

use evdev::{Device, EventType, Key, RelativeAxisType};
use std::thread::sleep;
use std::time::Duration;
use vmouse::{DEFAULT_DEVICE_PATH, Mouse};

fn find_device(name: &str) -> Option<Device> {
    // udev needs a moment to publish the event node.
    for _ in 0..20 {
        if let Some((_, device)) = evdev::enumerate().find(|(_, d)| d.name() == Some(name)) {
            return Some(device);
        }
        sleep(Duration::from_millis(50));
    }
    None
}

#[test]
#[ignore = "requires access to /dev/uinput and /dev/input"]
fn test_registered_capabilities() {
    let name = "vmouse capability check";
    let mut mouse = Mouse::create(DEFAULT_DEVICE_PATH, name).unwrap();
    let device = find_device(name).expect("virtual mouse did not appear");

    let axes = device.supported_relative_axes().unwrap();
    assert!(axes.contains(RelativeAxisType::REL_X));
    assert!(axes.contains(RelativeAxisType::REL_Y));
    assert!(axes.contains(RelativeAxisType::REL_WHEEL));
    assert!(axes.contains(RelativeAxisType::REL_HWHEEL));

    let keys = device.supported_keys().unwrap();
    assert!(keys.contains(Key::BTN_LEFT));
    assert!(keys.contains(Key::BTN_RIGHT));
    assert!(keys.contains(Key::BTN_MIDDLE));

    mouse.close().unwrap();
}

#[test]
#[ignore = "requires access to /dev/uinput and /dev/input"]
fn test_events_arrive_as_frames() {
    let name = "vmouse frame check";
    let mut mouse = Mouse::create(DEFAULT_DEVICE_PATH, name).unwrap();
    let mut device = find_device(name).expect("virtual mouse did not appear");

    mouse.move_up(5).unwrap();

    let events: Vec<_> = device.fetch_events().unwrap().collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type(), EventType::RELATIVE);
    assert_eq!(events[0].code(), RelativeAxisType::REL_Y.0);
    assert_eq!(events[0].value(), -5);
    assert_eq!(events[1].event_type(), EventType::SYNCHRONIZATION);

    mouse.close().unwrap();
}
