// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::detail;
use crate::ui::list;
use crate::ui::notifications;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    List(list::Message),
    Detail(detail::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick,
    /// A key press nothing else handled.
    KeyPressed(iced::keyboard::Key),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional tracing filter directive, e.g. `iced_gallery=debug`.
    pub log: Option<String>,
}
