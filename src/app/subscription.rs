// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native mouse, touch and keyboard events are routed to the swipe card.
//! Presses that a widget already captured (the keep/delete buttons, the
//! folder picker button) never start a drag.

use super::update::FRAME_INTERVAL;
use super::Message;
use crate::application::swipe;
use crate::domain::gesture::SwipeOutcome;
use crate::ui::drag::Pointer;
use iced::keyboard::{self, key};
use iced::{event, mouse, time, touch, window, Subscription};

/// Creates the subscription for native input and window events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Mouse(mouse_event) => route_mouse(mouse_event, status),
        event::Event::Touch(touch_event) => route_touch(touch_event, status),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            route_key(&key)
        }
        _ => None,
    })
}

fn route_mouse(event: mouse::Event, status: event::Status) -> Option<Message> {
    match event {
        mouse::Event::CursorMoved { position } => {
            Some(Message::PointerMoved(Pointer::Mouse, position))
        }
        mouse::Event::ButtonPressed(mouse::Button::Left) if status == event::Status::Ignored => {
            Some(Message::MousePressed)
        }
        mouse::Event::ButtonReleased(mouse::Button::Left) => {
            Some(Message::PointerReleased(Pointer::Mouse))
        }
        mouse::Event::CursorLeft => Some(Message::PointerLost),
        _ => None,
    }
}

fn route_touch(event: touch::Event, status: event::Status) -> Option<Message> {
    match event {
        touch::Event::FingerPressed { id, position } if status == event::Status::Ignored => {
            Some(Message::FingerPressed(id, position))
        }
        touch::Event::FingerMoved { id, position } => {
            Some(Message::PointerMoved(Pointer::Finger(id), position))
        }
        touch::Event::FingerLifted { id, .. } => {
            Some(Message::PointerReleased(Pointer::Finger(id)))
        }
        touch::Event::FingerLost { .. } => Some(Message::PointerLost),
        touch::Event::FingerPressed { .. } => None,
    }
}

/// Right arrow keeps, left arrow deletes.
fn route_key(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::ArrowRight) => {
            Some(Message::Swipe(swipe::Message::Trigger(SwipeOutcome::Keep)))
        }
        keyboard::Key::Named(key::Named::ArrowLeft) => {
            Some(Message::Swipe(swipe::Message::Trigger(SwipeOutcome::Delete)))
        }
        _ => None,
    }
}

/// Drives the spring animation while the card is moving on its own.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}
