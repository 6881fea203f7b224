// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen fills the window and toasts are stacked above it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::detail;
use crate::ui::list;
use crate::ui::notifications::{self, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub list: &'a list::State,
    pub detail: &'a detail::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::List => ctx
            .list
            .view(list::ViewContext { i18n: ctx.i18n })
            .map(Message::List),
        Screen::Detail => ctx
            .detail
            .view(detail::ViewEnv { i18n: ctx.i18n })
            .map(Message::Detail),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
