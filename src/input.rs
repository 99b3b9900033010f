//! Input events
//!
//! macroquad exposes input as per-frame state rather than a queue. The poller
//! turns that state back into a short ordered list of events so the game can
//! drain and route them one at a time.

use macroquad::prelude::*;

/// One input occurrence for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close was requested
    Quit,
    KeyDown(KeyCode),
    /// Cursor moved to absolute window coordinates
    MouseMotion { x: i32, y: i32 },
    /// Anything else (mouse buttons); routed but ignored by the game
    Other,
}

impl InputEvent {
    /// Close requests and key presses both end the game
    pub fn is_quit_signal(&self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::KeyDown(_))
    }
}

/// Translates macroquad's input state into [`InputEvent`]s
pub struct InputPoller {
    last_mouse: Option<(i32, i32)>,
}

impl InputPoller {
    /// Creates the poller and takes over window-close handling, so closing
    /// the window arrives as [`InputEvent::Quit`] instead of exiting.
    pub fn new() -> Self {
        prevent_quit();
        Self { last_mouse: None }
    }

    /// Collect this frame's events: quit request, key presses, mouse
    /// buttons, then at most one motion event.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }
        events.extend(get_keys_pressed().into_iter().map(InputEvent::KeyDown));
        for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
            if is_mouse_button_pressed(button) {
                events.push(InputEvent::Other);
            }
        }
        if let Some(motion) = self.motion_to(mouse_position()) {
            events.push(motion);
        }

        events
    }

    /// Motion event for a cursor at `pos`, if it differs from the last one seen
    fn motion_to(&mut self, pos: (f32, f32)) -> Option<InputEvent> {
        let pos = (pos.0 as i32, pos.1 as i32);
        if self.last_mouse == Some(pos) {
            return None;
        }
        self.last_mouse = Some(pos);
        Some(InputEvent::MouseMotion { x: pos.0, y: pos.1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poller() -> InputPoller {
        // Bypass new(): prevent_quit needs a live window
        InputPoller { last_mouse: None }
    }

    #[test]
    fn test_first_position_is_reported() {
        let mut input = poller();
        assert_eq!(
            input.motion_to((12.7, 40.2)),
            Some(InputEvent::MouseMotion { x: 12, y: 40 })
        );
    }

    #[test]
    fn test_motion_only_on_change() {
        let mut input = poller();
        input.motion_to((5.0, 5.0));
        assert_eq!(input.motion_to((5.4, 5.9)), None);
        assert_eq!(
            input.motion_to((700.0, 10.0)),
            Some(InputEvent::MouseMotion { x: 700, y: 10 })
        );
    }

    #[test]
    fn test_quit_signals() {
        assert!(InputEvent::Quit.is_quit_signal());
        assert!(InputEvent::KeyDown(KeyCode::End).is_quit_signal());
        assert!(InputEvent::KeyDown(KeyCode::A).is_quit_signal());
        assert!(!InputEvent::MouseMotion { x: 1, y: 1 }.is_quit_signal());
        assert!(!InputEvent::Other.is_quit_signal());
    }
}
