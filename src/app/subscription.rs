// SPDX-License-Identifier: MPL-2.0
//! Native event routing for the application.
//!
//! Window resizes always reach the carousels. Escape closes the open dialog.
//! Arrow keys are only routed when no focused widget (a text field, for
//! instance) already consumed them.

use super::{Direction, Message};
use iced::{event, keyboard, window, Event, Subscription};

/// Creates the application-wide native event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(&event, status))
}

fn route_event(event: &Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size.width)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => {
            let direction = match named {
                keyboard::key::Named::ArrowLeft => Direction::Previous,
                keyboard::key::Named::ArrowRight => Direction::Next,
                _ => return None,
            };
            match status {
                event::Status::Ignored => Some(Message::Arrow(direction)),
                event::Status::Captured => None,
            }
        }
        _ => None,
    }
}
