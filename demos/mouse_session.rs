//! Virtual mouse example.
//!
//! Run with: cargo run --example mouse_session
//!
//! WARNING: This will actually move your pointer and click!

use std::thread::sleep;
use std::time::Duration;
use vmouse::{DEFAULT_DEVICE_PATH, Mouse};

fn main() {
    println!("vmouse session example");
    println!("======================\n");

    let mut mouse = match Mouse::create(DEFAULT_DEVICE_PATH, "vmouse demo") {
        Ok(mouse) => mouse,
        Err(e) => {
            eprintln!("Failed to create virtual mouse: {}", e);
            return;
        }
    };

    println!("Created '{}'. Starting in 3 seconds... (Press Ctrl+C to cancel)\n", mouse.name());
    sleep(Duration::from_secs(3));

    println!("1. Drawing a square...");
    for step in 0..4 {
        let result = match step {
            0 => mouse.move_right(200),
            1 => mouse.move_down(200),
            2 => mouse.move_left(200),
            _ => mouse.move_up(200),
        };
        if let Err(e) = result {
            eprintln!("   Error: {}", e);
        }
        sleep(Duration::from_millis(300));
    }

    println!("2. Scrolling down...");
    if let Err(e) = mouse.wheel(false, -3) {
        eprintln!("   Error: {}", e);
    }
    sleep(Duration::from_millis(300));

    println!("3. Right clicking...");
    if let Err(e) = mouse.right_click() {
        eprintln!("   Error: {}", e);
    }

    if let Err(e) = mouse.close() {
        eprintln!("Failed to close: {}", e);
    }
    println!("\nSession complete!");
}
