// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the document and the
//! gallery.
//!
//! The `App` owns the content host, the gallery session while one is open,
//! and the transition between them. Components report what happened through
//! their `Event`s and the app turns those into transitions, exports,
//! notifications and diagnostics.

mod message;
pub mod paths;
pub mod persisted_state;
mod phase;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use phase::Phase;

use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, DEFAULT_BUFFER_CAPACITY};
use crate::document::{self, ContentHost, DocumentSource};
use crate::export::DirectoryLibrary;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::transition::{Direction, Transition};
use crate::ui::document_view;
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    /// Persisted application state (photo authorization, last document).
    app_state: persisted_state::AppState,
    /// `None` until the document finished loading.
    host: Option<ContentHost>,
    document: document_view::State,
    gallery: Option<gallery::State>,
    transition: Option<Transition>,
    /// Backdrop dimming under the interactive gallery.
    backdrop_alpha: f32,
    window_size: Size,
    library: DirectoryLibrary,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    diagnostics_path: Option<PathBuf>,
    /// Set once a failed document was replaced by the samples.
    fell_back_to_samples: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.phase())
            .field("gallery_page", &self.gallery.as_ref().map(gallery::State::page))
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 400;

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings. Close requests are handled by the app so
/// the diagnostics report can be written first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let mut diagnostics = DiagnosticsCollector::new(DEFAULT_BUFFER_CAPACITY);
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());
        diagnostics.process_pending();

        Self {
            i18n: I18n::default(),
            theme: AppTheme::new(config.general.theme_mode),
            library: DirectoryLibrary::new(config.export.effective_directory(), Default::default()),
            config,
            app_state: persisted_state::AppState::default(),
            host: None,
            document: document_view::State::default(),
            gallery: None,
            transition: None,
            backdrop_alpha: 0.0,
            window_size: default_window_size(),
            notifications,
            diagnostics,
            diagnostics_path: None,
            fell_back_to_samples: false,
        }
    }
}

impl App {
    /// Loads configuration and state, then starts loading the document.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n: I18n::new(flags.lang.clone(), &config),
            theme: AppTheme::new(config.general.theme_mode),
            library: DirectoryLibrary::new(
                config.export.effective_directory(),
                app_state.photo_authorization,
            ),
            config,
            app_state,
            diagnostics_path: flags.diagnostics_path,
            ..Self::default()
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let source = DocumentSource::from_paths(flags.paths);
        let task = app.load_document(source);
        (app, task)
    }

    fn load_document(&self, source: DocumentSource) -> Task<Message> {
        let intro = format!("{}\n\n", self.i18n.tr("document-intro"));
        Task::perform(document::loader::load(source, intro), Message::DocumentLoaded)
    }

    /// Current phase, derived from which state is populated.
    pub fn phase(&self) -> Phase {
        match (&self.host, &self.transition, &self.gallery) {
            (None, _, _) => Phase::Loading,
            (Some(_), Some(transition), _) => match transition.direction() {
                Direction::Present => Phase::Presenting,
                Direction::Dismiss => Phase::Dismissing,
            },
            (Some(_), None, Some(_)) => Phase::Gallery,
            (Some(_), None, None) => Phase::Document,
        }
    }

    pub fn host(&self) -> Option<&ContentHost> {
        self.host.as_ref()
    }

    pub fn gallery(&self) -> Option<&gallery::State> {
        self.gallery.as_ref()
    }

    pub fn backdrop_alpha(&self) -> f32 {
        self.backdrop_alpha
    }

    fn is_animating(&self) -> bool {
        self.transition.is_some() || self.gallery.as_ref().is_some_and(gallery::State::is_animating)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match &self.gallery {
            Some(gallery) if self.phase() == Phase::Gallery => {
                let counter = self.i18n.tr_with_args(
                    "gallery-page-counter",
                    &[
                        ("current", &(gallery.page() + 1).to_string()),
                        ("total", &gallery.session().page_count().to_string()),
                    ],
                );
                format!("{counter} - {app_name}")
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.phase());
        let tick_sub = subscription::create_tick_subscription(
            self.is_animating(),
            self.notifications.has_notifications(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.handle(message);
        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            phase: self.phase(),
            host: self.host.as_ref(),
            document: &self.document,
            gallery: self.gallery.as_ref(),
            transition: self.transition.as_ref(),
            backdrop_alpha: self.backdrop_alpha,
            notifications: &self.notifications,
        })
    }
}
