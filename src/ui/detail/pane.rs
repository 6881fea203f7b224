// SPDX-License-Identifier: MPL-2.0
//! Detail screen rendering: toolbar, download progress, zoomable image and
//! the error panel.

use crate::domain::fit::ImageLayout;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::detail::component::{LoadState, Message, State, ViewEnv, SCROLLABLE_ID};
use crate::ui::state::zoom::scale_percent_label;
use crate::ui::styles;
use crate::ui::widgets::zoom_surface::zoom_surface;
use iced::mouse;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{
    button, mouse_area, progress_bar, Column, Container, Id, Image, Row, Scrollable, Text,
};
use iced::{alignment, ContentFit, Element, Length, Padding};

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match state.load_state() {
        LoadState::Idle => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        LoadState::Downloading { .. } => downloading(env.i18n, state.progress_indicator()),
        LoadState::Ready { image, .. } => image_surface(image, state.layout(), state.is_dragging()),
        LoadState::Failed {
            error,
            show_details,
        } => centered_error_view(
            ErrorDisplay::for_error(error, env.i18n)
                .details_visible(*show_details)
                .action(env.i18n.tr("error-download-ok"), Message::DismissError)
                .on_toggle_details(Message::ToggleErrorDetails),
        ),
    };

    Column::new()
        .push(toolbar(state, env.i18n))
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let back = button(Text::new(i18n.tr("detail-back")).size(typography::BODY))
        .on_press(Message::Back)
        .style(styles::button::ghost);

    let title = Text::new(state.title())
        .size(typography::TITLE_SM)
        .width(Length::Fill);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(back)
        .push(title);

    if let Some(layout) = state.layout() {
        let zoom = state.zoom();
        let percent = scale_percent_label(layout.scale);
        row = row
            .push(
                Text::new(i18n.tr_with_args("detail-zoom-label", &[("percent", percent.as_str())]))
                    .size(typography::CAPTION),
            )
            .push(
                button(Text::new(i18n.tr("detail-zoom-out")).size(typography::BODY))
                    .on_press_maybe(zoom.can_zoom_out().then_some(Message::ZoomOut))
                    .style(styles::button::ghost),
            )
            .push(
                button(Text::new(i18n.tr("detail-zoom-in")).size(typography::BODY))
                    .on_press_maybe(zoom.can_zoom_in().then_some(Message::ZoomIn))
                    .style(styles::button::ghost),
            )
            .push(
                button(Text::new(i18n.tr("detail-zoom-fit")).size(typography::BODY))
                    .on_press_maybe(zoom.can_zoom_out().then_some(Message::ZoomFit))
                    .style(styles::button::ghost),
            );
    }

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::toolbar)
        .into()
}

fn downloading<'a>(i18n: &I18n, ratio: Option<f32>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("detail-downloading")).size(typography::BODY));

    if let Some(ratio) = ratio {
        content = content.push(
            Container::new(progress_bar(0.0..=1.0, ratio))
                .width(Length::Fixed(sizing::PROGRESS_BAR_WIDTH)),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Image inside a scrollable, padded so it stays centered until it overflows.
///
/// Until the viewport has been measured the image is drawn contained in the
/// available space.
fn image_surface<'a>(
    image: &'a ImageData,
    layout: Option<ImageLayout>,
    dragging: bool,
) -> Element<'a, Message> {
    let picture = Image::new(image.handle.clone());
    let content: Element<'a, Message> = match layout {
        Some(layout) => Container::new(
            picture
                .content_fit(ContentFit::Fill)
                .width(Length::Fixed(layout.size.width))
                .height(Length::Fixed(layout.size.height)),
        )
        .padding(Padding {
            top: layout.offset_y,
            right: layout.offset_x,
            bottom: layout.offset_y,
            left: layout.offset_x,
        })
        .into(),
        None => picture
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let scrollable = Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        })
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let interaction = match (dragging, layout) {
        (true, _) => mouse::Interaction::Grabbing,
        (false, Some(_)) => mouse::Interaction::Grab,
        (false, None) => mouse::Interaction::default(),
    };

    let pannable = mouse_area(scrollable)
        .on_press(Message::DragStarted)
        .on_release(Message::DragEnded)
        .on_exit(Message::DragEnded)
        .on_move(Message::CursorMoved)
        .interaction(interaction);

    zoom_surface(pannable)
        .on_wheel(Message::Wheel)
        .on_resize(Message::ViewportResized)
        .into()
}
