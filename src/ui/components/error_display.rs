// SPDX-License-Identifier: MPL-2.0
//! Dismissable error panel.
//!
//! The panel shows a title, a user-facing message, an acknowledge button and
//! optional technical details that can be expanded.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::for_error(&error, &i18n)
//!     .details_visible(show_details)
//!     .action(i18n.tr("error-download-ok"), Message::DismissError)
//!     .on_toggle_details(Message::ToggleDetails)
//!     .view()
//! ```

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Accent for the panel title and border.
const ACCENT: Color = palette::ERROR_500;

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    action_label: Option<String>,
    action_message: Option<Message>,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
    details_heading_label: String,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            details: None,
            show_details: false,
            action_label: None,
            action_message: None,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
            details_heading_label: "Technical details".to_string(),
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a localized panel for a download error.
    ///
    /// Transfer errors interpolate their cause into the message; the other
    /// kinds keep the cause in the expandable details.
    pub fn for_error(error: &Error, i18n: &I18n) -> Self {
        let message = match error {
            Error::Transfer(cause) => {
                i18n.tr_with_args(error.i18n_key(), &[("detail", cause.as_str())])
            }
            _ => i18n.tr(error.i18n_key()),
        };

        let mut display = Self::new()
            .title(i18n.tr("error-download-title"))
            .message(message)
            .details_labels(
                i18n.tr("error-details-show"),
                i18n.tr("error-details-hide"),
                i18n.tr("error-details-heading"),
            );
        if let Some(detail) = error.detail() {
            display = display.details(detail);
        }
        display
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details (collapsible).
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    /// Sets the acknowledge button label and the message it emits.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    pub fn details_labels(
        mut self,
        show_label: impl Into<String>,
        hide_label: impl Into<String>,
        heading_label: impl Into<String>,
    ) -> Self {
        self.show_details_label = show_label.into();
        self.hide_details_label = hide_label.into();
        self.details_heading_label = heading_label.into();
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent_color = ACCENT;

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            content = content.push(Text::new(title_text).size(typography::TITLE_MD).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                },
            ));
        }

        if let Some(message_text) = self.message {
            content = content.push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label))
                .on_press(msg)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::primary);
            content = content.push(Container::new(action_btn).padding(spacing::SM));
        }

        if let Some(details_text) = self.details {
            let toggle_label = if self.show_details {
                self.hide_details_label
            } else {
                self.show_details_label
            };

            if let Some(toggle_msg) = self.toggle_details_message {
                let toggle_btn = button(Text::new(toggle_label).size(typography::CAPTION))
                    .on_press(toggle_msg)
                    .style(styles::button::ghost);
                content = content.push(toggle_btn);
            }

            if self.show_details {
                let secondary = |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                };
                let details_column = Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(rule::horizontal(1))
                    .push(
                        Text::new(self.details_heading_label)
                            .size(typography::BODY)
                            .style(secondary),
                    )
                    .push(
                        Text::new(details_text)
                            .size(typography::CAPTION)
                            .style(secondary),
                    );
                content = content.push(
                    Container::new(details_column)
                        .width(Length::Fill)
                        .padding(spacing::SM),
                );
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::ERROR_PANEL_WIDTH)
            .padding(spacing::LG)
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(iced::Background::Color(palette.background.weak.color)),
                    border: iced::Border {
                        color: palette.background.strong.color,
                        width: border::WIDTH_SM,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

/// Centers the panel in the available space.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::DecodeError;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Ok,
        ToggleDetails,
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn builder_records_fields() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new()
            .title("Download failed")
            .message("Something went wrong")
            .details("connection reset")
            .details_visible(true)
            .action("OK", TestMessage::Ok)
            .on_toggle_details(TestMessage::ToggleDetails);

        assert_eq!(display.title.as_deref(), Some("Download failed"));
        assert_eq!(display.details.as_deref(), Some("connection reset"));
        assert!(display.show_details);
        assert!(display.action_message.is_some());
    }

    #[test]
    fn decode_error_uses_fixed_wording() {
        let error = Error::Decode(DecodeError::NotAnImage("bad magic".into()));
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::for_error(&error, &english());

        assert_eq!(
            display.message.as_deref(),
            Some("The downloaded file is not an image")
        );
        assert!(display.details.unwrap_or_default().contains("bad magic"));
    }

    #[test]
    fn transfer_error_interpolates_cause() {
        let error = Error::Transfer("HTTP status: 404 Not Found".into());
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::for_error(&error, &english());

        let message = display.message.unwrap_or_default();
        assert!(message.contains("404"));
        assert!(message.starts_with("The image could not be downloaded"));
    }
}
