// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler forwards a message to its screen, then turns the returned
//! effect into navigation or notifications.

use super::{Message, Screen};
use crate::ui::detail;
use crate::ui::list;
use crate::ui::notifications::{self, Notification};
use iced::keyboard::{self, key::Named, Key};
use iced::Task;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub list: &'a mut list::State,
    pub detail: &'a mut detail::State,
    pub client: &'a reqwest::Client,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_list_message(ctx: &mut UpdateContext<'_>, message: list::Message) -> Task<Message> {
    match ctx.list.handle_message(message) {
        list::Effect::None => Task::none(),
        list::Effect::OpenDetail { title, url } => {
            *ctx.screen = Screen::Detail;
            ctx.detail
                .start(ctx.client, title, Some(url))
                .map(Message::Detail)
        }
        list::Effect::ThumbnailFailed { title } => {
            ctx.notifications.push(
                Notification::warning("notification-thumbnail-error").with_arg("title", title),
            );
            Task::none()
        }
    }
}

pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: detail::Message,
) -> Task<Message> {
    let (effect, task) = ctx.detail.handle_message(message);
    if effect == detail::Effect::ReturnToList {
        *ctx.screen = Screen::List;
    }
    task.map(Message::Detail)
}

/// Maps detail screen shortcuts to detail messages.
pub fn handle_key_press(ctx: &mut UpdateContext<'_>, key: Key) -> Task<Message> {
    if *ctx.screen != Screen::Detail {
        return Task::none();
    }
    match detail_shortcut(&key) {
        Some(message) => handle_detail_message(ctx, message),
        None => Task::none(),
    }
}

fn detail_shortcut(key: &Key) -> Option<detail::Message> {
    match key.as_ref() {
        keyboard::Key::Named(Named::Escape) => Some(detail::Message::Back),
        keyboard::Key::Character("+" | "=") => Some(detail::Message::ZoomIn),
        keyboard::Key::Character("-") => Some(detail::Message::ZoomOut),
        keyboard::Key::Character("0") => Some(detail::Message::ZoomFit),
        _ => None,
    }
}
