// SPDX-License-Identifier: MPL-2.0
//! Detail screen state: one download at a time, then fit and zoom.
//!
//! Every download gets a fresh [`FetchId`]. Starting a new one aborts the
//! previous task and events that still arrive from it are dropped, so only
//! the most recent request can change what is displayed.

use crate::domain::fit::{Extent, FitError, ImageLayout, ViewportFit};
use crate::domain::progress::DownloadProgress;
use crate::error::{DecodeError, Error};
use crate::i18n::fluent::I18n;
use crate::media::{fetch, DecodeTarget, DownloadEvent, ImageData};
use crate::ui::detail::pane;
use crate::ui::state::{DragState, ViewportState, ZoomState};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{task, Element, Point, Rectangle, Size, Task};
use reqwest::Url;
use std::fmt;

/// Identifier used for the detail scrollable widget.
pub const SCROLLABLE_ID: &str = "detail-image-scrollable";

/// Generation number of a download started by [`State::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchId(u64);

/// Where the screen is in its download lifecycle.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Nothing requested, or the last request was withdrawn.
    Idle,
    /// Waiting for bytes. `progress` stays `None` until the server answers.
    Downloading { progress: Option<DownloadProgress> },
    /// Decoded and displayable. `fit` is known once the viewport has a size.
    Ready {
        image: ImageData,
        fit: Option<ViewportFit>,
    },
    Failed { error: Error, show_details: bool },
}

#[derive(Debug, Clone)]
pub enum Message {
    Download { id: FetchId, event: DownloadEvent },
    ViewportResized(Size),
    Scrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    ZoomIn,
    ZoomOut,
    ZoomFit,
    /// Mouse wheel over the image, in lines. Positive zooms in.
    Wheel(f32),
    CursorMoved(Point),
    DragStarted,
    DragEnded,
    Back,
    DismissError,
    ToggleErrorDetails,
}

/// Side effects the application should perform after a detail message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ReturnToList,
}

/// Environment needed to render the screen.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

pub struct State {
    title: String,
    load: LoadState,
    active: Option<FetchId>,
    abort: Option<task::Handle>,
    next_id: u64,
    zoom: ZoomState,
    viewport: ViewportState,
    drag: DragState,
    cursor: Option<Point>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("title", &self.title)
            .field("load", &self.load)
            .field("active", &self.active)
            .field("zoom", &self.zoom)
            .finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(ZoomState::default())
    }
}

impl State {
    #[must_use]
    pub fn new(zoom: ZoomState) -> Self {
        Self {
            title: String::new(),
            load: LoadState::Idle,
            active: None,
            abort: None,
            next_id: 0,
            zoom,
            viewport: ViewportState::default(),
            drag: DragState::default(),
            cursor: None,
        }
    }

    /// Starts downloading `url`, replacing whatever was shown or in flight.
    ///
    /// A missing URL leaves the screen idle.
    pub fn start(
        &mut self,
        client: &reqwest::Client,
        title: impl Into<String>,
        url: Option<Url>,
    ) -> Task<Message> {
        self.supersede();
        self.title = title.into();
        self.zoom.reset();
        self.viewport.reset_offset();
        self.drag.stop();

        let Some(url) = url else {
            self.load = LoadState::Idle;
            return Task::none();
        };

        let id = FetchId(self.next_id);
        self.next_id += 1;
        self.active = Some(id);
        self.load = LoadState::Downloading { progress: None };
        tracing::info!(%url, fetch = id.0, "starting download");

        let (task, handle) = Task::stream(fetch(client.clone(), url, DecodeTarget::Full))
            .map(move |event| Message::Download { id, event })
            .abortable();
        self.abort = Some(handle);
        task
    }

    /// Withdraws any download in flight and returns to idle.
    pub fn reset(&mut self) {
        self.supersede();
        self.load = LoadState::Idle;
        self.drag.stop();
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Download { id, event } => (Effect::None, self.handle_download(id, event)),
            Message::ViewportResized(size) => {
                let task = if self.viewport.resize(size) {
                    self.refit()
                } else {
                    Task::none()
                };
                (Effect::None, task)
            }
            Message::Scrolled { bounds, offset } => {
                let task = if self.viewport.update(bounds, offset) {
                    self.refit()
                } else {
                    Task::none()
                };
                (Effect::None, task)
            }
            Message::ZoomIn => (Effect::None, self.apply_zoom(ZoomState::zoom_in)),
            Message::ZoomOut => (Effect::None, self.apply_zoom(ZoomState::zoom_out)),
            Message::ZoomFit => (Effect::None, self.apply_zoom(ZoomState::reset)),
            Message::Wheel(lines) => (
                Effect::None,
                self.apply_zoom(|zoom| zoom.apply_wheel(lines)),
            ),
            Message::CursorMoved(position) => {
                self.cursor = Some(position);
                (Effect::None, self.drag_to(position))
            }
            Message::DragStarted => {
                if let (Some(position), Some(_)) = (self.cursor, self.fit()) {
                    self.drag.start(position, self.viewport.offset);
                }
                (Effect::None, Task::none())
            }
            Message::DragEnded => {
                self.drag.stop();
                (Effect::None, Task::none())
            }
            Message::Back | Message::DismissError => {
                self.reset();
                (Effect::ReturnToList, Task::none())
            }
            Message::ToggleErrorDetails => {
                if let LoadState::Failed { show_details, .. } = &mut self.load {
                    *show_details = !*show_details;
                }
                (Effect::None, Task::none())
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        pane::view(self, env)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// The download whose events are currently accepted.
    #[must_use]
    pub fn active_fetch(&self) -> Option<FetchId> {
        self.active
    }

    #[must_use]
    pub fn is_downloading(&self) -> bool {
        matches!(self.load, LoadState::Downloading { .. })
    }

    /// Completed fraction for the progress bar.
    ///
    /// `None` hides the bar: nothing is downloading, or the size is unknown.
    #[must_use]
    pub fn progress_indicator(&self) -> Option<f32> {
        match &self.load {
            LoadState::Downloading {
                progress: Some(progress),
            } => progress.ratio(),
            _ => None,
        }
    }

    #[must_use]
    pub fn fit(&self) -> Option<ViewportFit> {
        match &self.load {
            LoadState::Ready { fit, .. } => *fit,
            _ => None,
        }
    }

    /// Displayed rectangle of the image at the current zoom.
    #[must_use]
    pub fn layout(&self) -> Option<ImageLayout> {
        self.fit().map(|fit| self.zoom.layout(&fit))
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    fn supersede(&mut self) {
        if let Some(handle) = self.abort.take() {
            handle.abort();
        }
        if let Some(id) = self.active.take() {
            tracing::debug!(fetch = id.0, "download superseded");
        }
    }

    fn handle_download(&mut self, id: FetchId, event: DownloadEvent) -> Task<Message> {
        if self.active != Some(id) {
            tracing::debug!(fetch = id.0, "ignoring event from a stale download");
            return Task::none();
        }

        match event {
            DownloadEvent::Progress(report) => {
                if let LoadState::Downloading { progress } = &mut self.load {
                    *progress = Some(report);
                }
                Task::none()
            }
            DownloadEvent::Completed(Ok(image)) => {
                self.active = None;
                self.abort = None;
                if image.extent().is_empty() {
                    let (width, height) = (image.width, image.height);
                    self.fail(DecodeError::EmptyImage { width, height }.into());
                    return Task::none();
                }
                tracing::info!(
                    fetch = id.0,
                    width = image.width,
                    height = image.height,
                    "image ready"
                );
                self.load = LoadState::Ready { image, fit: None };
                self.refit()
            }
            DownloadEvent::Completed(Err(error)) => {
                self.active = None;
                self.abort = None;
                self.fail(error);
                Task::none()
            }
        }
    }

    fn fail(&mut self, error: Error) {
        tracing::warn!(%error, "download failed");
        self.drag.stop();
        self.load = LoadState::Failed {
            error,
            show_details: false,
        };
    }

    /// Recomputes the fit for the current image and viewport.
    ///
    /// The zoom factor is kept, so the scale follows the new fit.
    fn refit(&mut self) -> Task<Message> {
        let Some(viewport) = self.viewport.extent() else {
            return Task::none();
        };
        let LoadState::Ready { image, fit } = &mut self.load else {
            return Task::none();
        };

        match ViewportFit::compute(image.extent(), viewport) {
            Ok(new_fit) => {
                let previous = fit.replace(new_fit).map(|old| self.zoom.layout(&old));
                let layout = self.zoom.layout(&new_fit);
                if let Some(previous) = previous {
                    self.viewport.keep_center(&previous, &layout, viewport);
                }
                tracing::debug!(
                    scale = layout.scale,
                    offset_x = layout.offset_x,
                    offset_y = layout.offset_y,
                    "fitted image to viewport"
                );
                self.sync_scroll(layout.overflow(viewport))
            }
            Err(FitError::DegenerateImage) => {
                let (width, height) = (image.width, image.height);
                self.fail(DecodeError::EmptyImage { width, height }.into());
                Task::none()
            }
            Err(FitError::EmptyViewport) => Task::none(),
        }
    }

    fn apply_zoom(&mut self, change: impl FnOnce(&mut ZoomState)) -> Task<Message> {
        let (Some(fit), Some(viewport)) = (self.fit(), self.viewport.extent()) else {
            return Task::none();
        };

        let before = self.zoom.layout(&fit);
        change(&mut self.zoom);
        let after = self.zoom.layout(&fit);
        if before == after {
            return Task::none();
        }

        self.viewport.keep_center(&before, &after, viewport);
        self.sync_scroll(after.overflow(viewport))
    }

    fn drag_to(&mut self, position: Point) -> Task<Message> {
        let (Some(layout), Some(viewport)) = (self.layout(), self.viewport.extent()) else {
            return Task::none();
        };
        match self
            .drag
            .calculate_offset(position, layout.overflow(viewport))
        {
            Some(offset) => {
                self.viewport.offset = offset;
                self.sync_scroll(layout.overflow(viewport))
            }
            None => Task::none(),
        }
    }

    /// Clamps the offset to `overflow` and moves the scrollable there.
    fn sync_scroll(&mut self, overflow: Extent) -> Task<Message> {
        self.viewport.clamp_offset(overflow);
        let relative = |offset: f32, max: f32| if max > 0.0 { offset / max } else { 0.0 };
        operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: relative(self.viewport.offset.x, overflow.width),
                y: relative(self.viewport.offset.y, overflow.height),
            },
        )
    }
}
