// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: input handling, paging, dismissal and edit mode.
//!
//! The gallery never reaches into its presenter. Every message returns an
//! [`Event`] the app reacts to, the same way the other components report
//! their side effects.

use std::time::Instant;

use iced::{event, keyboard, mouse, window, Point, Rectangle, Size, Task, Vector};

use super::gesture::{self, Axis, DragGesture, SwipeOutcome};
use super::mode::{ModeEvent, UiMode};
use super::session::GallerySession;
use super::zoom_cell::ZoomCell;
use crate::config::{
    DOUBLE_CLICK_THRESHOLD, SNAP_BACK_DAMPING, SNAP_BACK_DURATION, WHEEL_ZOOM_FACTOR,
};
use crate::media::ImageData;
use crate::transition::{aspect_fit, SpringCurve};

/// Horizontal drag is damped by this factor past the first and last page.
const EDGE_RESISTANCE: f32 = 0.35;

/// Pixel wheel deltas per wheel "line".
const PIXELS_PER_LINE: f32 = 50.0;

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    Close,
    Edit,
    CancelEdit,
    Save,
    ExportFinished {
        success: bool,
    },
    NextPage,
    PreviousPage,
    Tick(Instant),
}

/// What closed the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissCause {
    Pan,
    CloseButton,
    Escape,
}

impl DismissCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            DismissCause::Pan => "pan",
            DismissCause::CloseButton => "close_button",
            DismissCause::Escape => "escape",
        }
    }
}

/// Outcomes the presenter must act on.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Reported once per gallery. `offset` is the page's drag offset at
    /// the time, `backdrop_alpha` the dimming it had reached.
    DismissRequested {
        cause: DismissCause,
        offset: Vector,
        backdrop_alpha: f32,
    },
    BackdropChanged(f32),
    /// Filter `image` and save it to the photo library, then answer with
    /// [`Message::ExportFinished`].
    ExportRequested {
        page: usize,
        image: ImageData,
    },
    PageChanged(usize),
    ModeChanged(UiMode),
}

impl Event {
    fn from_mode(mode: Option<UiMode>) -> Self {
        mode.map_or(Event::None, Event::ModeChanged)
    }
}

#[derive(Debug, Clone, Copy)]
struct Click {
    at: Instant,
    toggled_chrome: bool,
}

/// Spring that brings the page strip back to rest after a drag.
#[derive(Debug, Clone, Copy)]
struct Settle {
    from: Vector,
    started_at: Instant,
    curve: SpringCurve,
}

#[derive(Debug, Clone)]
pub struct State {
    session: GallerySession,
    cell: ZoomCell,
    viewport: Size,
    interactive: bool,
    dismissed: bool,
    drag: Option<DragGesture>,
    /// Offset of the whole page strip: horizontal while paging, vertical
    /// while dragging to dismiss.
    drag_offset: Vector,
    settle: Option<Settle>,
    cursor: Option<Point>,
    last_click: Option<Click>,
}

impl State {
    /// A gallery filling `viewport`. It ignores input until
    /// [`State::set_interactive`] is called.
    #[must_use]
    pub fn new(session: GallerySession, viewport: Size, max_zoom: f32) -> Self {
        let mut state = Self {
            session,
            cell: ZoomCell::new(max_zoom),
            viewport,
            interactive: false,
            dismissed: false,
            drag: None,
            drag_offset: Vector::ZERO,
            settle: None,
            cursor: None,
            last_click: None,
        };
        state.refresh_geometry();
        state.cell.set_editing(state.session.mode().is_editing_shrunk());
        state
    }

    pub fn session(&self) -> &GallerySession {
        &self.session
    }

    pub fn page(&self) -> usize {
        self.session.page()
    }

    pub fn mode(&self) -> UiMode {
        self.session.mode()
    }

    pub fn cell(&self) -> &ZoomCell {
        &self.cell
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn drag_offset(&self) -> Vector {
        self.drag_offset
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Last known pointer position, until the next `CursorMoved`.
    pub fn set_cursor(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    /// True while the gallery needs animation ticks.
    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    /// Where the current page is drawn right now, in window coordinates.
    pub fn current_image_frame(&self) -> Rectangle {
        self.cell.image_frame(self.viewport_rect()) + self.drag_offset
    }

    /// Where `page` is drawn, or `None` if it is off screen.
    pub fn page_frame(&self, page: usize) -> Option<Rectangle> {
        if page == self.session.page() {
            return Some(self.current_image_frame());
        }
        let image = self.session.image(page)?;
        let shift = (page as f32 - self.session.page() as f32) * self.viewport.width;
        let slot = self.viewport_rect() + Vector::new(shift, 0.0) + self.drag_offset;
        let visible = slot.x < self.viewport.width && slot.x + slot.width > 0.0;
        visible.then(|| aspect_fit(image_size(image), slot))
    }

    /// Current backdrop alpha implied by the drag.
    pub fn backdrop_alpha(&self) -> f32 {
        gesture::background_alpha(self.drag_offset.y)
    }

    pub fn handle_message(&mut self, message: Message) -> (Event, Task<Message>) {
        self.handle_message_at(message, Instant::now())
    }

    /// Handles `message` as if it arrived at `now`.
    pub fn handle_message_at(&mut self, message: Message, now: Instant) -> (Event, Task<Message>) {
        let event = match message {
            Message::RawEvent { event, .. } => self.handle_raw_event(event, now),
            Message::Tick(at) => self.advance_settle(at),
            _ if !self.accepts_input() => Event::None,
            Message::Close => self.request_dismiss(DismissCause::CloseButton),
            Message::Edit => self.apply_mode(ModeEvent::Edit),
            Message::CancelEdit => self.apply_mode(ModeEvent::Cancel),
            Message::Save => self.save(),
            Message::ExportFinished { success } => {
                tracing::debug!(success, "export finished");
                self.apply_mode(ModeEvent::SaveFinished)
            }
            Message::NextPage => self.step_page(SwipeOutcome::Next, now),
            Message::PreviousPage => self.step_page(SwipeOutcome::Previous, now),
        };
        (event, Task::none())
    }

    fn accepts_input(&self) -> bool {
        self.interactive && !self.dismissed
    }

    fn handle_raw_event(&mut self, event: event::Event, now: Instant) -> Event {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            self.viewport = size;
            self.refresh_geometry();
            return Event::None;
        }
        if let event::Event::Mouse(mouse::Event::CursorMoved { position }) = event {
            self.cursor = Some(position);
        }
        if !self.accepts_input() {
            return Event::None;
        }

        match event {
            event::Event::Mouse(mouse_event) => self.handle_mouse(mouse_event, now),
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(key.as_ref(), now)
            }
            _ => Event::None,
        }
    }

    fn handle_mouse(&mut self, event: mouse::Event, now: Instant) -> Event {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let Some(position) = self.cursor else {
                    return Event::None;
                };
                let event = self.finish_settle();
                self.drag = Some(DragGesture::begin(position, now, self.cell.is_zoomed()));
                event
            }
            mouse::Event::CursorMoved { position } => self.drag_to(position, now),
            mouse::Event::ButtonReleased(mouse::Button::Left) => self.release(now),
            mouse::Event::CursorLeft => {
                // Treat leaving the window as letting go.
                self.release(now)
            }
            mouse::Event::WheelScrolled { delta } if self.drag.is_none() => {
                let steps = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y,
                    mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_LINE,
                };
                let anchor = self.cursor.unwrap_or_else(|| self.viewport_center());
                self.cell.zoom_by(WHEEL_ZOOM_FACTOR.powf(steps), anchor);
                Event::None
            }
            _ => Event::None,
        }
    }

    fn handle_key(&mut self, key: keyboard::Key<&str>, now: Instant) -> Event {
        use keyboard::key::Named;
        use keyboard::Key;

        match key {
            Key::Named(Named::Escape) => {
                if self.mode() == UiMode::Editing {
                    self.apply_mode(ModeEvent::Cancel)
                } else {
                    self.request_dismiss(DismissCause::Escape)
                }
            }
            Key::Named(Named::ArrowRight) => self.step_page(SwipeOutcome::Next, now),
            Key::Named(Named::ArrowLeft) => self.step_page(SwipeOutcome::Previous, now),
            Key::Named(Named::Space) => self.apply_mode(ModeEvent::BackgroundTap),
            Key::Character("+" | "=") => {
                self.cell.zoom_by(WHEEL_ZOOM_FACTOR, self.viewport_center());
                Event::None
            }
            Key::Character("-") => {
                self.cell.zoom_by(1.0 / WHEEL_ZOOM_FACTOR, self.viewport_center());
                Event::None
            }
            Key::Character("0") => {
                self.cell.reset();
                Event::None
            }
            _ => Event::None,
        }
    }

    fn drag_to(&mut self, position: Point, now: Instant) -> Event {
        let mode = self.mode();
        let Some(gesture) = self.drag.as_mut() else {
            return Event::None;
        };
        let delta = gesture.update(position, now);
        let translation = gesture.translation();

        match gesture.axis() {
            Axis::Pan => {
                self.cell.pan_by(delta);
                Event::None
            }
            Axis::Vertical if mode.allows_pan_dismiss() => {
                self.drag_offset = Vector::new(0.0, translation.y);
                Event::BackdropChanged(gesture::background_alpha(translation.y))
            }
            Axis::Horizontal if mode.allows_paging() => {
                self.drag_offset = Vector::new(self.resist_at_edges(translation.x), 0.0);
                Event::None
            }
            _ => Event::None,
        }
    }

    fn release(&mut self, now: Instant) -> Event {
        let Some(gesture) = self.drag.take() else {
            return Event::None;
        };
        if gesture.is_click() {
            return self.click(gesture.start(), now);
        }

        let mode = self.mode();
        let translation = gesture.translation();
        let velocity = gesture.release_velocity(now);

        match gesture.axis() {
            Axis::Vertical if mode.allows_pan_dismiss() => {
                if gesture::should_dismiss(translation.y, velocity.y) {
                    self.request_dismiss(DismissCause::Pan)
                } else {
                    self.start_settle(now);
                    Event::None
                }
            }
            Axis::Horizontal if mode.allows_paging() => {
                let outcome = gesture::swipe_outcome(translation.x, velocity.x, self.viewport.width);
                let event = self.step_page(outcome, now);
                // Keep the drag offset through the page change so the strip
                // settles from where the pointer left it.
                self.start_settle(now);
                event
            }
            _ => Event::None,
        }
    }

    fn click(&mut self, position: Point, now: Instant) -> Event {
        let previous = self
            .last_click
            .take()
            .filter(|click| now.saturating_duration_since(click.at) <= DOUBLE_CLICK_THRESHOLD);

        match previous {
            Some(first) => {
                // The first click of a double click must not leave the
                // chrome toggled.
                let reverted = if first.toggled_chrome {
                    self.session.apply(ModeEvent::BackgroundTap)
                } else {
                    None
                };
                self.cell.toggle_double_click(position);
                Event::from_mode(reverted)
            }
            None => {
                let toggled = self.session.apply(ModeEvent::BackgroundTap);
                self.last_click = Some(Click {
                    at: now,
                    toggled_chrome: toggled.is_some(),
                });
                Event::from_mode(toggled)
            }
        }
    }

    fn step_page(&mut self, outcome: SwipeOutcome, now: Instant) -> Event {
        if !self.mode().allows_paging() {
            return Event::None;
        }
        let width = self.viewport.width;
        let moved = match outcome {
            SwipeOutcome::Next => self.session.next().then_some(width),
            SwipeOutcome::Previous => self.session.previous().then_some(-width),
            SwipeOutcome::Stay => None,
        };
        let Some(shift) = moved else {
            return Event::None;
        };

        self.drag_offset = self.drag_offset + Vector::new(shift, 0.0);
        self.start_settle(now);
        self.last_click = None;
        self.refresh_geometry();
        self.cell.reset();
        Event::PageChanged(self.session.page())
    }

    fn apply_mode(&mut self, event: ModeEvent) -> Event {
        let changed = self.session.apply(event);
        if let Some(mode) = changed {
            self.cell.set_editing(mode.is_editing_shrunk());
            if !mode.allows_paging() {
                self.drag = None;
            }
        }
        Event::from_mode(changed)
    }

    fn save(&mut self) -> Event {
        if self.session.apply(ModeEvent::Save).is_none() {
            return Event::None;
        }
        Event::ExportRequested {
            page: self.session.page(),
            image: self.session.current_image().clone(),
        }
    }

    fn request_dismiss(&mut self, cause: DismissCause) -> Event {
        if self.dismissed {
            return Event::None;
        }
        if !self.mode().allows_dismiss() {
            tracing::debug!(cause = cause.as_str(), "dismissal blocked while saving");
            return Event::None;
        }
        self.dismissed = true;
        self.drag = None;
        self.settle = None;
        Event::DismissRequested {
            cause,
            offset: self.drag_offset,
            backdrop_alpha: self.backdrop_alpha(),
        }
    }

    fn start_settle(&mut self, now: Instant) {
        if self.drag_offset == Vector::ZERO {
            self.settle = None;
            return;
        }
        self.settle = Some(Settle {
            from: self.drag_offset,
            started_at: now,
            curve: SpringCurve::new(SNAP_BACK_DAMPING, 0.0, SNAP_BACK_DURATION),
        });
    }

    fn advance_settle(&mut self, now: Instant) -> Event {
        let Some(settle) = self.settle else {
            return Event::None;
        };
        let elapsed = now.saturating_duration_since(settle.started_at);
        let remaining = 1.0 - settle.curve.value(elapsed);
        self.drag_offset = settle.from * remaining;
        if elapsed >= settle.curve.duration() {
            self.drag_offset = Vector::ZERO;
            self.settle = None;
        }

        if settle.from.y == 0.0 {
            Event::None
        } else {
            Event::BackdropChanged(self.backdrop_alpha())
        }
    }

    /// Jumps a running settle animation to its end.
    fn finish_settle(&mut self) -> Event {
        match self.settle.take() {
            Some(settle) => {
                self.drag_offset = Vector::ZERO;
                if settle.from.y == 0.0 {
                    Event::None
                } else {
                    Event::BackdropChanged(1.0)
                }
            }
            None => Event::None,
        }
    }

    fn resist_at_edges(&self, translation_x: f32) -> f32 {
        let at_first = self.session.page() == 0 && translation_x > 0.0;
        let at_last = self.session.page() + 1 == self.session.page_count() && translation_x < 0.0;
        if at_first || at_last {
            translation_x * EDGE_RESISTANCE
        } else {
            translation_x
        }
    }

    fn refresh_geometry(&mut self) {
        let size = image_size(self.session.current_image());
        self.cell.set_geometry(size, self.viewport);
    }

    fn viewport_rect(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, self.viewport)
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }
}

fn image_size(image: &ImageData) -> Size {
    Size::new(image.width as f32, image.height as f32)
}
