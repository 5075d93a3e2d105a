// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, mouse, window) to the
//! gallery or the app depending on the current phase.

use super::{Message, Phase};
use crate::config::ANIMATION_TICK;
use crate::gallery;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Interval used when only notifications need their timers checked.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Creates the event subscription for `phase`.
///
/// While the gallery is interactive it receives pointer, wheel, keyboard
/// and resize events. Button presses reach it only when no chrome button
/// captured them; moves and releases always do, so a drag that ends over
/// a button still finishes. Other phases only track the window size.
pub fn create_event_subscription(phase: Phase) -> Subscription<Message> {
    match phase {
        Phase::Gallery => event::listen_with(|event, status, window_id| {
            if let event::Event::Window(window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }

            let raw = |event: event::Event| {
                Some(Message::Gallery(gallery::Message::RawEvent {
                    window: window_id,
                    event,
                }))
            };

            match &event {
                event::Event::Window(window::Event::Resized(_)) => raw(event),
                event::Event::Mouse(
                    mouse::Event::CursorMoved { .. }
                    | mouse::Event::CursorLeft
                    | mouse::Event::ButtonReleased(mouse::Button::Left)
                    | mouse::Event::WheelScrolled { .. },
                ) => raw(event),
                event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                | event::Event::Keyboard(..) => match status {
                    event::Status::Ignored => raw(event),
                    event::Status::Captured => None,
                },
                _ => None,
            }
        }),
        Phase::Loading | Phase::Document | Phase::Presenting | Phase::Dismissing => {
            event::listen_with(|event, _status, window_id| match event {
                event::Event::Window(window::Event::CloseRequested) => {
                    Some(Message::WindowCloseRequested(window_id))
                }
                event::Event::Window(window::Event::Resized(size)) => {
                    Some(Message::WindowResized(size))
                }
                _ => None,
            })
        }
    }
}

/// Creates a periodic tick while something animates or a toast may expire.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
