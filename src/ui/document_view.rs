// SPDX-License-Identifier: MPL-2.0
//! Scrollable rendering of the content host.
//!
//! Text is drawn on a fixed character grid with a monospace font and every
//! placeholder shows its image scaled into the laid-out box. A left click
//! (press and release without dragging) is reported in host-local
//! coordinates for hit testing.

use iced::widget::canvas::{self, Canvas, Path, Stroke};
use iced::widget::scrollable::{self, Scrollable};
use iced::widget::Action;
use iced::{mouse, Element, Font, Length, Pixels, Point, Rectangle, Renderer, Theme};

use crate::config::DRAG_SLOP;
use crate::document::{ContentHost, SlotKind};
use crate::ui::state::ViewportState;
use crate::ui::design_tokens::stroke;
use crate::ui::theming::ColorScheme;

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(scrollable::Viewport),
    /// Left click released at a host-local point.
    Clicked(Point),
}

/// What the document view reports to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A thumbnail was clicked. `source` is its frame and `position` the
    /// click point, both in window space.
    ThumbnailTapped {
        index: usize,
        source: Rectangle,
        position: Point,
    },
    /// A click landed on text or empty space.
    Missed,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    viewport: ViewportState,
    /// Placeholder left blank while its image is shown in the gallery.
    hidden: Option<usize>,
}

impl State {
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn hidden(&self) -> Option<usize> {
        self.hidden
    }

    /// Blanks out the thumbnail at `index`, or restores all with `None`.
    pub fn hide(&mut self, index: Option<usize>) {
        self.hidden = index;
    }

    /// Window-space frame of the thumbnail at `index`.
    pub fn thumbnail_frame(&self, host: &ContentHost, index: usize) -> Option<Rectangle> {
        host.placeholder_frame(index)
            .map(|frame| self.viewport.to_window(frame))
    }

    pub fn handle_message(&mut self, host: &mut ContentHost, message: Message) -> Event {
        match message {
            Message::Scrolled(viewport) => {
                let bounds = viewport.bounds();
                if self.viewport.update(bounds, viewport.absolute_offset()) {
                    host.relayout(bounds.width);
                }
                Event::None
            }
            Message::Clicked(point) => match host.hit_test(point) {
                Some(hit) => Event::ThumbnailTapped {
                    index: hit.index,
                    source: self.viewport.to_window(hit.frame),
                    position: self.viewport.to_window_point(point),
                },
                None => Event::Missed,
            },
        }
    }
}

/// Canvas program painting the laid-out document.
struct Page<'a> {
    host: &'a ContentHost,
    colors: &'a ColorScheme,
    hidden: Option<usize>,
    /// Clicks are ignored while the gallery covers the document.
    interactive: bool,
}

impl Page<'_> {
    fn draw_text(&self, frame: &mut canvas::Frame, origin: Point, content: String) {
        let metrics = self.host.layout().metrics();
        frame.fill_text(canvas::Text {
            content,
            position: origin,
            color: self.colors.text,
            size: Pixels(metrics.font_size),
            font: Font::MONOSPACE,
            ..canvas::Text::default()
        });
    }

    fn draw_thumbnail(&self, frame: &mut canvas::Frame, index: usize, rect: Rectangle) {
        let outline = Path::rectangle(rect.position(), rect.size());
        match self.host.image(index) {
            Some(image) if self.hidden != Some(index) => {
                frame.draw_image(rect, canvas::Image::new(image.handle.clone()));
            }
            _ => frame.fill(&outline, self.colors.thumbnail_missing),
        }
        frame.stroke(
            &outline,
            Stroke::default()
                .with_width(stroke::HAIRLINE)
                .with_color(self.colors.thumbnail_border),
        );
    }
}

/// Press position of a click in progress.
#[derive(Debug, Default)]
struct PressState {
    pressed_at: Option<Point>,
}

impl canvas::Program<Message> for Page<'_> {
    type State = PressState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if !self.interactive {
            state.pressed_at = None;
            return None;
        }
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                state.pressed_at = cursor.position_in(bounds);
                state.pressed_at.map(|_| Action::capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let pressed_at = state.pressed_at.take()?;
                let released_at = cursor.position_in(bounds)?;
                (pressed_at.distance(released_at) <= DRAG_SLOP)
                    .then(|| Action::publish(Message::Clicked(released_at)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.colors.surface);

        let layout = self.host.layout();
        let inset = layout.metrics().inset;

        for line in layout.lines() {
            let mut run = String::new();
            let mut run_origin = None;
            for slot in layout.line_slots(line) {
                let rect = slot.rect + inset;
                match slot.kind {
                    SlotKind::Char(c) => {
                        run_origin.get_or_insert(rect.position());
                        run.push(c);
                    }
                    SlotKind::Placeholder { index, .. } => {
                        if let Some(origin) = run_origin.take() {
                            self.draw_text(&mut frame, origin, std::mem::take(&mut run));
                        }
                        self.draw_thumbnail(&mut frame, index, rect);
                    }
                }
            }
            if let Some(origin) = run_origin {
                self.draw_text(&mut frame, origin, run);
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Renders the document inside a vertical scrollable.
pub fn view<'a>(
    state: &'a State,
    host: &'a ContentHost,
    colors: &'a ColorScheme,
    interactive: bool,
) -> Element<'a, Message> {
    let height = host.content_size().height;
    let page = Canvas::new(Page {
        host,
        colors,
        hidden: state.hidden,
        interactive,
    })
    .width(Length::Fill)
    .height(Length::Fixed(height));

    Scrollable::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::Scrolled)
        .into()
}
