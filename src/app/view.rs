// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The document is always at the bottom of the stack so the dimmed
//! backdrop lets it show through; the gallery, or the transition proxy
//! standing in for it, goes on top, then the toasts.

use super::{Message, Phase};
use crate::document::ContentHost;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::transition::Transition;
use crate::ui::design_tokens::typography;
use crate::ui::document_view;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ColorScheme;
use crate::ui::transition_overlay;
use iced::widget::{Container, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub phase: Phase,
    pub host: Option<&'a ContentHost>,
    pub document: &'a document_view::State,
    pub gallery: Option<&'a gallery::State>,
    pub transition: Option<&'a Transition>,
    pub backdrop_alpha: f32,
    pub notifications: &'a notifications::Manager,
}

/// Renders every layer for the current phase.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    layers = match ctx.host {
        Some(host) => layers.push(
            document_view::view(
                ctx.document,
                host,
                ctx.colors,
                ctx.phase.document_is_interactive(),
            )
            .map(Message::Document),
        ),
        None => layers.push(view_loading(ctx.i18n, ctx.colors)),
    };

    if ctx.phase.shows_gallery_layer() {
        layers = match (ctx.transition, ctx.gallery) {
            (Some(transition), _) => layers.push(transition_overlay::transition(
                &transition.image().handle,
                transition.frame_at(Instant::now()),
                ctx.colors.backdrop,
            )),
            (None, Some(gallery)) => layers
                .push(transition_overlay::backdrop(
                    ctx.colors.backdrop_with_alpha(ctx.backdrop_alpha),
                ))
                .push(gallery::view(gallery, ctx.i18n).map(Message::Gallery)),
            (None, None) => layers,
        };
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_loading<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let text_color = colors.text_muted;
    Container::new(
        Text::new(i18n.tr("document-loading"))
            .size(typography::BODY_LG)
            .color(text_color),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
