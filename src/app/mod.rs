// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the list and detail
//! screens.
//!
//! The `App` struct wires together the screens, localization, the shared HTTP
//! client and toast notifications, and translates screen effects into
//! navigation.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::detail;
use crate::ui::list;
use crate::ui::notifications::{self, Notification};
use crate::ui::state::ZoomState;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    list: list::State,
    detail: detail::State,
    client: reqwest::Client,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("detail", &self.detail)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 400;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced calls boot through `Fn`, so the flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, builds the HTTP client and starts thumbnail downloads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let client = match media::build_client(&config.network) {
            Ok(client) => client,
            Err(error) => {
                tracing::error!(%error, "could not configure the HTTP client");
                notifications.push(Notification::error("notification-client-error"));
                reqwest::Client::new()
            }
        };

        let zoom = config
            .viewer
            .zoom_step
            .map(ZoomState::with_step)
            .unwrap_or_default();

        let list = list::State::default();
        let task = list.load_thumbnails(&client).map(Message::List);
        tracing::info!(
            locale = %i18n.current_locale(),
            rows = list.rows().count(),
            "application started"
        );

        let app = App {
            i18n,
            screen: Screen::default(),
            list,
            detail: detail::State::new(zoom),
            client,
            theme_mode: config.general.theme_mode,
            notifications,
        };
        (app, task)
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::List => self.i18n.tr("app-name"),
            Screen::Detail => self
                .i18n
                .tr_with_args("detail-window-title", &[("title", self.detail.title())]),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            list: &mut self.list,
            detail: &mut self.detail,
            client: &self.client,
            notifications: &mut self.notifications,
        };

        match message {
            Message::List(list_message) => update::handle_list_message(&mut ctx, list_message),
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut ctx, detail_message)
            }
            Message::KeyPressed(key) => update::handle_key_press(&mut ctx, key),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            list: &self.list,
            detail: &self.detail,
            notifications: &self.notifications,
        })
    }
}
