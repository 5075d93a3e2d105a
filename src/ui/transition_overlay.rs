// SPDX-License-Identifier: MPL-2.0
//! Full-window layer with the dimmed backdrop and, during a transition,
//! the proxy image flying between thumbnail and gallery.

use iced::widget::canvas::{self, Canvas};
use iced::widget::{image, Action};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::transition::TransitionFrame;

/// Proxy image drawn over the backdrop.
#[derive(Debug, Clone)]
struct Proxy {
    handle: image::Handle,
    frame: Rectangle,
    opacity: f32,
}

struct Overlay {
    backdrop: Color,
    proxy: Option<Proxy>,
}

impl<Message> canvas::Program<Message> for Overlay {
    type State = ();

    /// Swallows wheel input so the document underneath does not scroll.
    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::WheelScrolled { .. }) => Some(Action::capture()),
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
        if self.backdrop.a > 0.0 {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.backdrop);
        }
        if let Some(proxy) = &self.proxy {
            if proxy.opacity > 0.0 {
                frame.draw_image(
                    proxy.frame,
                    canvas::Image::new(proxy.handle.clone()).opacity(proxy.opacity),
                );
            }
        }
        vec![frame.into_geometry()]
    }
}

/// Backdrop alone, as shown behind the interactive gallery.
pub fn backdrop<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    Canvas::new(Overlay {
        backdrop: color,
        proxy: None,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// One sampled frame of a running transition. `backdrop` is the full
/// opacity color; the frame's alpha is applied to it.
pub fn transition<'a, Message: 'a>(
    handle: &image::Handle,
    frame: TransitionFrame,
    backdrop: Color,
) -> Element<'a, Message> {
    Canvas::new(Overlay {
        backdrop: Color {
            a: frame.backdrop_alpha.clamp(0.0, 1.0),
            ..backdrop
        },
        proxy: Some(Proxy {
            handle: handle.clone(),
            frame: frame.proxy,
            opacity: frame.proxy_opacity.clamp(0.0, 1.0),
        }),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
