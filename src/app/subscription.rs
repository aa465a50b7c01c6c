// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, window) depending on whether
//! the lightbox is showing. File drops open a gallery from any state;
//! keyboard shortcuts only apply while the lightbox is open.

use super::Message;
use crate::ui::modal;
use iced::{event, keyboard, Subscription};

/// Creates the event subscription for the current application state.
///
/// With the lightbox open, Escape closes it and the arrow keys step through
/// the visible items with wrap-around. Keyboard events already captured by
/// a focused widget are left alone.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
                match status {
                    event::Status::Ignored => match key {
                        keyboard::Key::Named(keyboard::key::Named::Escape) => {
                            Some(Message::Modal(modal::Message::Close))
                        }
                        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                            Some(Message::Modal(modal::Message::NavigatePrevious))
                        }
                        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                            Some(Message::Modal(modal::Message::NavigateNext))
                        }
                        _ => None,
                    },
                    event::Status::Captured => None,
                }
            } else {
                None
            }
        })
    } else {
        event::listen_with(|event, _status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            None
        })
    }
}
