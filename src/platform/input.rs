//! Polled input state for pointer, keyboard and touch

use crate::sim::TickInput;

/// Horizontal direction bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Input gathered from event handlers between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer_x: Option<f32>,
    drag_dx: f32,
    touch_x: Option<f32>,
    left: bool,
    right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved to `x` (viewport pixels)
    pub fn pointer_move(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    /// A direction key went down. Returns false for unbound keys.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set_key(key, true)
    }

    /// A direction key was released. Returns false for unbound keys.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set_key(key, false)
    }

    fn set_key(&mut self, key: &str, held: bool) -> bool {
        match Direction::from_key(key) {
            Some(Direction::Left) => self.left = held,
            Some(Direction::Right) => self.right = held,
            None => return false,
        }
        true
    }

    /// First finger touched down at `x`
    pub fn touch_start(&mut self, x: f32) {
        self.touch_x = Some(x);
    }

    /// First finger moved to `x`; accumulates the delta since the last position
    pub fn touch_move(&mut self, x: f32) {
        // A move without a start (e.g. touch began outside the canvas) only anchors
        if let Some(last) = self.touch_x {
            self.drag_dx += x - last;
        }
        self.touch_x = Some(x);
    }

    pub fn touch_end(&mut self) {
        self.touch_x = None;
    }

    /// Release everything (window lost focus, restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Sample the input for one tick.
    ///
    /// Pointer position and drag delta are consumed; held keys keep
    /// applying every tick until released.
    pub fn take_snapshot(&mut self) -> TickInput {
        TickInput {
            pointer_x: self.pointer_x.take(),
            drag_dx: std::mem::take(&mut self.drag_dx),
            left: self.left,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_is_consumed() {
        let mut input = InputState::new();
        input.pointer_move(120.0);
        input.pointer_move(140.0);

        assert_eq!(input.take_snapshot().pointer_x, Some(140.0));
        assert_eq!(input.take_snapshot().pointer_x, None);
    }

    #[test]
    fn test_keys_persist_until_released() {
        let mut input = InputState::new();
        assert!(input.key_down("ArrowLeft"));
        assert!(input.take_snapshot().left);
        assert!(input.take_snapshot().left);

        assert!(input.key_up("ArrowLeft"));
        assert!(!input.take_snapshot().left);

        assert!(input.key_down("d"));
        assert!(input.take_snapshot().right);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut input = InputState::new();
        assert!(!input.key_down("Enter"));
        assert_eq!(input.take_snapshot(), TickInput::default());
    }

    #[test]
    fn test_touch_drag_accumulates_deltas() {
        let mut input = InputState::new();
        input.touch_start(100.0);
        input.touch_move(110.0);
        input.touch_move(105.0);
        assert_eq!(input.take_snapshot().drag_dx, 5.0);

        input.touch_move(125.0);
        assert_eq!(input.take_snapshot().drag_dx, 20.0);
        assert_eq!(input.take_snapshot().drag_dx, 0.0);
    }

    #[test]
    fn test_touch_move_without_start_only_anchors() {
        let mut input = InputState::new();
        input.touch_move(300.0);
        assert_eq!(input.take_snapshot().drag_dx, 0.0);

        input.touch_move(310.0);
        assert_eq!(input.take_snapshot().drag_dx, 10.0);

        input.touch_end();
        input.touch_move(50.0);
        assert_eq!(input.take_snapshot().drag_dx, 0.0);
    }
}
