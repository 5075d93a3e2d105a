// SPDX-License-Identifier: MPL-2.0
//! End-to-end interaction on a three-image document: open from a
//! thumbnail, swipe to the next page, then drag down to close.

use inline_lens::document::loader::{load_blocking, DocumentSource};
use inline_lens::document::ContentHost;
use inline_lens::gallery::{self, DismissCause, GallerySession};
use inline_lens::transition::Transition;
use iced::{event, mouse, window, Point, Rectangle, Size};
use std::time::{Duration, Instant};

const WINDOW: Size = Size::new(800.0, 600.0);
const STEP: Duration = Duration::from_millis(16);

fn sample_host() -> ContentHost {
    let loaded =
        load_blocking(&DocumentSource::Samples, "Tap images below:\n\n").expect("samples load");
    ContentHost::from_loaded(loaded, WINDOW.width)
}

fn center(rect: Rectangle) -> Point {
    Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

fn send(
    gallery: &mut gallery::State,
    event: mouse::Event,
    now: Instant,
) -> gallery::Event {
    let message = gallery::Message::RawEvent {
        window: window::Id::unique(),
        event: event::Event::Mouse(event),
    };
    gallery.handle_message_at(message, now).0
}

/// Drags from `from` to `to` in `steps` moves and releases. Returns every
/// event reported along the way and the release time.
fn drag(
    gallery: &mut gallery::State,
    from: Point,
    to: Point,
    steps: u32,
    start: Instant,
) -> (Vec<gallery::Event>, Instant) {
    let mut events = vec![
        send(gallery, mouse::Event::CursorMoved { position: from }, start),
        send(
            gallery,
            mouse::Event::ButtonPressed(mouse::Button::Left),
            start,
        ),
    ];
    let mut now = start;
    for step in 1..=steps {
        now += STEP;
        let t = step as f32 / steps as f32;
        let position = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
        events.push(send(gallery, mouse::Event::CursorMoved { position }, now));
    }
    events.push(send(
        gallery,
        mouse::Event::ButtonReleased(mouse::Button::Left),
        now,
    ));
    (events, now)
}

fn open(host: &ContentHost, index: usize) -> gallery::State {
    let session = GallerySession::new(host.snapshot(), index, true).expect("session");
    let mut state = gallery::State::new(session, WINDOW, 3.0);
    state.set_interactive(true);
    state
}

#[test]
fn tap_swipe_and_pan_down_dismisses_once() {
    let host = sample_host();
    assert_eq!(host.image_count(), 3);

    // Tap placeholder 1.
    let frame = host.placeholder_frame(1).expect("placeholder 1");
    let hit = host.hit_test(center(frame)).expect("hit");
    assert_eq!(hit.index, 1);

    let start = Instant::now();
    let transition =
        Transition::present(host.image(hit.index), hit.frame, WINDOW, hit.index, start)
            .expect("transition starts");
    assert!(transition.is_finished(start + transition.duration()));

    let mut gallery = open(&host, hit.index);
    assert_eq!(gallery.page(), 1);

    // Swipe left moves to page 2.
    let (events, released) = drag(
        &mut gallery,
        Point::new(600.0, 300.0),
        Point::new(250.0, 300.0),
        10,
        start,
    );
    assert!(events
        .iter()
        .any(|event| matches!(event, gallery::Event::PageChanged(2))));
    assert_eq!(gallery.page(), 2);

    // Let the strip settle.
    let mut now = released;
    for _ in 0..40 {
        now += STEP;
        let _ = gallery.handle_message_at(gallery::Message::Tick(now), now);
    }
    assert!(!gallery.is_animating());

    // Pan down 200 px.
    let (events, released) = drag(
        &mut gallery,
        Point::new(400.0, 300.0),
        Point::new(400.0, 500.0),
        10,
        now + Duration::from_millis(200),
    );
    let dismissals = events
        .iter()
        .filter(|event| {
            matches!(
                event,
                gallery::Event::DismissRequested {
                    cause: DismissCause::Pan,
                    ..
                }
            )
        })
        .count();
    assert_eq!(dismissals, 1);
    assert!(gallery.is_dismissed());

    // Nothing else can close it again.
    let (event, _) = gallery.handle_message_at(gallery::Message::Close, released);
    assert!(matches!(event, gallery::Event::None));
}

#[test]
fn slow_short_pan_does_not_dismiss() {
    let host = sample_host();
    let mut gallery = open(&host, 0);

    // 100 px over 1.6 s: under both thresholds.
    let (events, _) = drag(
        &mut gallery,
        Point::new(400.0, 300.0),
        Point::new(400.0, 400.0),
        100,
        Instant::now(),
    );
    assert!(!events
        .iter()
        .any(|event| matches!(event, gallery::Event::DismissRequested { .. })));
    assert!(!gallery.is_dismissed());
}

#[test]
fn open_then_dismiss_leaves_the_host_unchanged() {
    let host = sample_host();
    let before: Vec<Vec<u8>> = host
        .snapshot()
        .iter()
        .map(|image| image.rgba_bytes().to_vec())
        .collect();

    let mut gallery = open(&host, 2);
    let (event, _) = gallery.handle_message_at(gallery::Message::Close, Instant::now());
    assert!(matches!(
        event,
        gallery::Event::DismissRequested {
            cause: DismissCause::CloseButton,
            ..
        }
    ));
    drop(gallery);

    let after: Vec<Vec<u8>> = host
        .snapshot()
        .iter()
        .map(|image| image.rgba_bytes().to_vec())
        .collect();
    assert_eq!(before, after);
    assert_eq!(host.image_count(), 3);
}

#[test]
fn click_outside_thumbnails_misses() {
    let host = sample_host();
    let size = host.content_size();
    assert!(host.hit_test(Point::new(size.width - 2.0, 2.0)).is_none());
    assert!(host.hit_test(Point::new(-10.0, -10.0)).is_none());
}
