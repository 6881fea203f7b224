// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that turns the mouse wheel into zoom requests and reports
//! its own size after layout.
//!
//! Wheel events never reach the wrapped content, so a scrollable inside keeps
//! grab-and-drag panning while the wheel is used exclusively for zoom.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Pixel deltas (touchpads) are converted to wheel lines with this ratio.
const PIXELS_PER_LINE: f32 = 60.0;

/// Wraps content, publishing wheel zoom and size change messages.
pub struct ZoomSurface<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_wheel: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_resize: Option<Box<dyn Fn(Size) -> Message + 'a>>,
}

#[derive(Debug, Default)]
struct State {
    last_size: Option<Size>,
}

impl<'a, Message, Theme, Renderer> ZoomSurface<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_wheel: None,
            on_resize: None,
        }
    }

    /// Message produced for a wheel gesture over the surface, in lines.
    /// Positive values mean "scroll up", i.e. zoom in.
    #[must_use]
    pub fn on_wheel(mut self, f: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_wheel = Some(Box::new(f));
        self
    }

    /// Message produced whenever the laid out size differs from the last one seen.
    #[must_use]
    pub fn on_resize(mut self, f: impl Fn(Size) -> Message + 'a) -> Self {
        self.on_resize = Some(Box::new(f));
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ZoomSurface<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        {
            let state = tree.state.downcast_mut::<State>();
            if state.last_size != Some(bounds.size()) {
                state.last_size = Some(bounds.size());
                if let Some(on_resize) = &self.on_resize {
                    shell.publish(on_resize(bounds.size()));
                }
            }
        }

        if let Event::Mouse(mouse::Event::WheelScrolled { delta }) = event {
            if cursor.is_over(bounds) {
                if let Some(on_wheel) = &self.on_wheel {
                    shell.publish(on_wheel(wheel_lines(*delta)));
                    shell.capture_event();
                }
            }
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ZoomSurface<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(surface: ZoomSurface<'a, Message, Theme, Renderer>) -> Self {
        Self::new(surface)
    }
}

/// Helper function to create a zoom surface.
pub fn zoom_surface<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> ZoomSurface<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ZoomSurface::new(content)
}

/// Converts a wheel delta to lines, positive when scrolling up.
fn wheel_lines(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => y,
        mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, SCALE_EPSILON};

    #[test]
    fn line_deltas_pass_through() {
        let lines = wheel_lines(mouse::ScrollDelta::Lines { x: 0.0, y: -2.0 });
        assert_abs_diff_eq!(lines, -2.0);
    }

    #[test]
    fn pixel_deltas_are_converted_to_lines() {
        let lines = wheel_lines(mouse::ScrollDelta::Pixels {
            x: 0.0,
            y: PIXELS_PER_LINE * 1.5,
        });
        assert_abs_diff_eq!(lines, 1.5, epsilon = SCALE_EPSILON);
    }

    #[test]
    fn horizontal_deltas_are_ignored() {
        let lines = wheel_lines(mouse::ScrollDelta::Lines { x: 3.0, y: 0.0 });
        assert_abs_diff_eq!(lines, 0.0);
    }
}
