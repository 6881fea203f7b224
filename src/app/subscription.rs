// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only routed on the detail screen, and only when no
//! widget captured the key first.

use super::{Message, Screen};
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Creates the keyboard subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Detail => event::listen_with(|event, status, _window| match (event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
                event::Status::Ignored,
            ) => Some(Message::KeyPressed(key)),
            _ => None,
        }),
        Screen::List => Subscription::none(),
    }
}

/// Ticks while notifications are on screen so warnings can expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}
