//! Mouse and keyboard stand-in for a hand tracker.
//!
//! The cursor is the first hand's fingertip and the left button pinches it.
//! Holding the right button adds a second, x-mirrored hand that is also
//! pinching, so both buttons together give the two-hand line. Digit keys
//! 0–5 set the reported finger count and `N` reports no reading.

use particles_core::{HandFrame, HandSnapshot, HandState};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

pub struct MouseHands {
    /// Normalised `[-1, 1]` cursor position, `None` when outside the window.
    cursor: Option<(f32, f32)>,
    left_down: bool,
    right_down: bool,
    gesture: Option<u8>,
    snapshot: HandSnapshot,
}

impl MouseHands {
    pub fn new(snapshot: HandSnapshot) -> Self {
        Self {
            cursor: None,
            left_down: false,
            right_down: false,
            gesture: None,
            snapshot,
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let nx = (x / width as f64) as f32 * 2.0 - 1.0;
        let ny = 1.0 - (y / height as f64) as f32 * 2.0;
        self.cursor = Some((nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0)));
        self.publish();
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
        self.publish();
    }

    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left_down = pressed,
            MouseButton::Right => self.right_down = pressed,
            _ => return,
        }
        self.publish();
    }

    /// Returns `true` when the key was one of ours.
    pub fn key_pressed(&mut self, key: KeyCode) -> bool {
        self.gesture = match key {
            KeyCode::Digit0 => Some(0),
            KeyCode::Digit1 => Some(1),
            KeyCode::Digit2 => Some(2),
            KeyCode::Digit3 => Some(3),
            KeyCode::Digit4 => Some(4),
            KeyCode::Digit5 => Some(5),
            KeyCode::KeyN => None,
            _ => return false,
        };
        log::info!("simulated finger count: {:?}", self.gesture);
        self.publish();
        true
    }

    pub fn frame(&self) -> HandFrame {
        let Some((x, y)) = self.cursor else {
            return HandFrame::empty();
        };
        let first = HandState::new(x, y, self.left_down, self.gesture);
        if self.right_down {
            HandFrame::from_hands([first, HandState::new(-x, y, true, None)])
        } else {
            HandFrame::from_hands([first])
        }
    }

    fn publish(&self) {
        self.snapshot.publish(self.frame());
    }
}
