// SPDX-License-Identifier: MPL-2.0
//! Pointer drag tracking
//!
//! Turns raw mouse and touch positions into swipe drag messages, with
//! offsets measured from the point where the press happened.

use crate::application::swipe::Message as SwipeMessage;
use iced::touch::Finger;
use iced::Point;

/// What is holding the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Finger(Finger),
}

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pointer: Option<Pointer>,
    start_position: Option<Point>,
    last_position: Option<Point>,
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// Starts a drag. A second pointer pressing while one is down is ignored.
    pub fn press(&mut self, pointer: Pointer, position: Point) -> Option<SwipeMessage> {
        if self.pointer.is_some() {
            return None;
        }
        self.pointer = Some(pointer);
        self.start_position = Some(position);
        self.last_position = Some(position);
        Some(SwipeMessage::DragStart)
    }

    /// Follows the pointer that started the drag.
    pub fn motion(&mut self, pointer: Pointer, position: Point) -> Option<SwipeMessage> {
        if self.pointer != Some(pointer) {
            return None;
        }
        self.last_position = Some(position);
        let (dx, dy) = self.delta(position)?;
        Some(SwipeMessage::DragUpdate { dx, dy })
    }

    /// Ends the drag at the last known position.
    pub fn release(&mut self, pointer: Pointer) -> Option<SwipeMessage> {
        if self.pointer != Some(pointer) {
            return None;
        }
        let end = self.last_position?;
        let (dx, dy) = self.delta(end)?;
        self.stop();
        Some(SwipeMessage::DragEnd { dx, dy })
    }

    /// Drops the drag without a release, e.g. when the cursor leaves the
    /// window or the touch is cancelled. The card is released where it is.
    pub fn abort(&mut self) -> Option<SwipeMessage> {
        let pointer = self.pointer?;
        self.release(pointer)
    }

    fn delta(&self, position: Point) -> Option<(f32, f32)> {
        let start = self.start_position?;
        Some((position.x - start.x, position.y - start.y))
    }

    fn stop(&mut self) {
        self.pointer = None;
        self.start_position = None;
        self.last_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging());
    }

    #[test]
    fn press_move_release_measures_from_press_point() {
        let mut state = DragState::default();
        assert_eq!(
            state.press(Pointer::Mouse, Point::new(100.0, 50.0)),
            Some(SwipeMessage::DragStart)
        );
        assert_eq!(
            state.motion(Pointer::Mouse, Point::new(180.0, 40.0)),
            Some(SwipeMessage::DragUpdate { dx: 80.0, dy: -10.0 })
        );
        assert_eq!(
            state.release(Pointer::Mouse),
            Some(SwipeMessage::DragEnd { dx: 80.0, dy: -10.0 })
        );
        assert!(!state.is_dragging());
    }

    #[test]
    fn motion_without_press_is_ignored() {
        let mut state = DragState::default();
        assert!(state.motion(Pointer::Mouse, Point::new(1.0, 1.0)).is_none());
        assert!(state.release(Pointer::Mouse).is_none());
    }

    #[test]
    fn other_pointers_are_ignored_while_dragging() {
        let mut state = DragState::default();
        let first = Pointer::Finger(Finger(1));
        let second = Pointer::Finger(Finger(2));

        state.press(first, Point::ORIGIN);
        assert!(state.press(second, Point::new(5.0, 5.0)).is_none());
        assert!(state.motion(second, Point::new(50.0, 0.0)).is_none());
        assert!(state.release(second).is_none());
        assert!(state.is_dragging());
    }

    #[test]
    fn abort_releases_at_last_position() {
        let mut state = DragState::default();
        state.press(Pointer::Mouse, Point::new(10.0, 10.0));
        state.motion(Pointer::Mouse, Point::new(-140.0, 10.0));
        assert_eq!(
            state.abort(),
            Some(SwipeMessage::DragEnd { dx: -150.0, dy: 0.0 })
        );
        assert!(state.abort().is_none());
    }
}
