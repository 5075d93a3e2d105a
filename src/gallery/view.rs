// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: the page strip and the chrome on top of it.
//!
//! The backdrop is drawn by the app, which owns its alpha across
//! transitions.

use iced::widget::{button, canvas, column, container, row, text, Canvas, Row, Space, Stack};
use iced::{alignment, mouse, Element, Length, Rectangle, Renderer, Theme};

use super::component::{Message, State};
use super::mode::UiMode;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, spacing, typography};
use crate::ui::styles;

/// Draws every visible page at its current frame.
struct Pages<'a> {
    state: &'a State,
}

impl canvas::Program<Message> for Pages<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let session = self.state.session();

        for (page, image) in session.images().iter().enumerate() {
            if let Some(rect) = self.state.page_frame(page) {
                frame.draw_image(rect, canvas::Image::new(image.handle.clone()));
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Renders the gallery for `state`.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let pages = Canvas::new(Pages { state })
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(pages);
    if state.mode().shows_chrome() && state.is_interactive() {
        layers = layers.push(chrome(state, i18n));
    }
    layers.into()
}

fn chrome<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let session = state.session();
    let counter = i18n.tr_with_args(
        "gallery-page-counter",
        &[
            ("current", &(session.page() + 1).to_string()),
            ("total", &session.page_count().to_string()),
        ],
    );

    let close = button(text(i18n.tr("gallery-close")).size(typography::BODY))
        .padding(spacing::XS)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));
    let close = if state.mode().allows_dismiss() {
        close.on_press(Message::Close)
    } else {
        close
    };

    let top_bar = row![
        close,
        Space::new().width(Length::Fill),
        container(text(counter).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::overlay::indicator(radius::FULL)),
    ]
    .align_y(alignment::Vertical::Center)
    .padding(spacing::MD);

    let paging = if state.mode().allows_paging() {
        let arrow = |label: &'static str, message: Message| {
            button(text(label).size(typography::TITLE_MD))
                .padding([spacing::XS, spacing::SM])
                .on_press(message)
                .style(styles::button::overlay(
                    WHITE,
                    opacity::OVERLAY_SUBTLE,
                    opacity::OVERLAY_HOVER,
                ))
        };
        // A disabled button lets the press through to the page strip,
        // where it would toggle the chrome; leave the arrow out instead.
        let (previous, next) = page_arrows(state);
        let mut arrows = Row::new();
        if let Some(message) = previous {
            arrows = arrows.push(arrow("‹", message));
        }
        arrows = arrows.push(Space::new().width(Length::Fill));
        if let Some(message) = next {
            arrows = arrows.push(arrow("›", message));
        }
        arrows
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XS)
    } else {
        Row::new()
    };

    column![
        top_bar,
        Space::new().height(Length::Fill),
        paging,
        Space::new().height(Length::Fill),
        container(bottom_bar(state.mode(), i18n))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::MD),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Paging arrows to show: none past either end of the strip.
fn page_arrows(state: &State) -> (Option<Message>, Option<Message>) {
    let session = state.session();
    let has_previous = session.page() > 0;
    let has_next = session.page() + 1 < session.page_count();
    (
        has_previous.then_some(Message::PreviousPage),
        has_next.then_some(Message::NextPage),
    )
}

fn bottom_bar<'a>(mode: UiMode, i18n: &'a I18n) -> Element<'a, Message> {
    let label = |key: &str| text(i18n.tr(key)).size(typography::BODY);

    let content: Element<'a, Message> = match mode {
        UiMode::Normal => button(label("gallery-edit"))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::Edit)
            .style(styles::button::overlay(
                WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .into(),
        UiMode::Editing => row![
            button(label("gallery-cancel"))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::CancelEdit)
                .style(styles::button::overlay(
                    WHITE,
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_HOVER,
                )),
            button(label("gallery-apply-save"))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::Save)
                .style(styles::button::primary),
        ]
        .spacing(spacing::SM)
        .into(),
        UiMode::Saving => button(label("gallery-saving"))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::disabled())
            .into(),
        UiMode::Hidden => Space::new().into(),
    };

    container(content)
        .padding(spacing::XS)
        .style(styles::overlay::controls_container)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GallerySession;
    use crate::test_utils::solid_image;
    use iced::Size;

    fn state_on(page: usize) -> State {
        let images = (0..3).map(|_| solid_image(4, 3)).collect();
        let session = GallerySession::new(images, page, true).expect("images");
        State::new(session, Size::new(800.0, 600.0), 3.0)
    }

    #[test]
    fn arrows_are_left_out_at_the_ends() {
        let (previous, next) = page_arrows(&state_on(0));
        assert!(previous.is_none());
        assert!(matches!(next, Some(Message::NextPage)));

        let (previous, next) = page_arrows(&state_on(2));
        assert!(matches!(previous, Some(Message::PreviousPage)));
        assert!(next.is_none());
    }

    #[test]
    fn middle_page_shows_both_arrows() {
        let (previous, next) = page_arrows(&state_on(1));
        assert!(previous.is_some() && next.is_some());
    }
}
