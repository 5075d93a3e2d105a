// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! `App::handle` dispatches each top-level message; the helpers below
//! react to the events reported by the document view and the gallery.

use super::{App, Message, Phase};
use crate::diagnostics::{AppStateEvent, UserAction};
use crate::document::{ContentHost, DocumentSource, LoadedDocument};
use crate::error::{Error, ExportError};
use crate::export::{self, PhotoAuthorization, PhotoLibrary};
use crate::gallery::{self, DismissCause, GallerySession, UiMode};
use crate::media::ImageData;
use crate::transition::{AbortReason, Direction, Transition};
use crate::ui::document_view;
use crate::ui::notifications::Notification;
use iced::{event, window, Point, Rectangle, Task};
use std::path::PathBuf;
use std::time::Instant;

impl App {
    pub(super) fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DocumentLoaded(result) => self.handle_document_loaded(result),
            Message::Document(message) => {
                self.handle_document_message(message);
                Task::none()
            }
            Message::Gallery(message) => self.handle_gallery_message(message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::AuthorizationAnswered {
                status,
                page,
                image,
            } => self.handle_authorization(status, page, image),
            Message::ExportCompleted(result) => self.handle_export_completed(result),
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::Tick(now) => self.handle_tick(now),
            Message::WindowCloseRequested(id) => self.handle_close_requested(id),
        }
    }

    fn handle_document_loaded(&mut self, result: Result<LoadedDocument, Error>) -> Task<Message> {
        let loaded = match result {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::warn!("document failed to load: {err}");
                self.notifications
                    .push(Notification::error("notification-document-load-error"));
                // Samples are generated in memory; only fall back once.
                return if self.host.is_none() && !self.fell_back_to_samples {
                    self.fell_back_to_samples = true;
                    self.load_document(DocumentSource::Samples)
                } else {
                    Task::none()
                };
            }
        };

        for failure in &loaded.failures {
            tracing::warn!("image {} replaced by fallback: {}", failure.source, failure.error);
            self.notifications.push(
                Notification::warning("notification-image-load-error")
                    .with_arg("source", failure.source.to_string()),
            );
        }

        if let Some(origin) = &loaded.origin {
            self.app_state.set_last_document_dir_from_file(origin);
            if let Some(key) = self.app_state.save() {
                self.notifications.push(Notification::warning(&key));
            }
        }

        let host = ContentHost::from_loaded(loaded, self.window_size.width);
        self.diagnostics.handle().log_state(AppStateEvent::DocumentLoaded {
            placeholders: host.document().placeholders().count(),
        });
        self.host = Some(host);
        Task::none()
    }

    fn handle_document_message(&mut self, message: document_view::Message) {
        let is_click = matches!(message, document_view::Message::Clicked(_));
        if is_click && !self.phase().document_is_interactive() {
            return;
        }
        let Some(host) = self.host.as_mut() else {
            return;
        };

        match self.document.handle_message(host, message) {
            document_view::Event::None => {}
            document_view::Event::Missed => {
                tracing::debug!("click did not hit a thumbnail");
                self.diagnostics
                    .handle()
                    .log_action(UserAction::MissedThumbnail);
            }
            document_view::Event::ThumbnailTapped {
                index,
                source,
                position,
            } => {
                self.open_gallery(index, source, position, Instant::now());
            }
        }
    }

    /// Snapshots the host images and starts zooming `index` out of its
    /// thumbnail at `source`. `tap` is where the click landed; the gallery
    /// starts with its cursor there so a press made before the mouse moves
    /// again still begins a drag. Both are in window coordinates.
    fn open_gallery(&mut self, index: usize, source: Rectangle, tap: Point, now: Instant) {
        let Some(host) = self.host.as_ref() else {
            return;
        };

        let transition = match Transition::present(
            host.image(index),
            source,
            self.window_size,
            index,
            now,
        ) {
            Ok(transition) => transition,
            Err(reason) => {
                self.log_abort(reason);
                return;
            }
        };

        let show_chrome = self.config.gallery.show_chrome_on_open.unwrap_or(true);
        let Some(session) = GallerySession::new(host.snapshot(), index, show_chrome) else {
            tracing::debug!("no images to show in the gallery");
            return;
        };

        let mut gallery = gallery::State::new(
            session,
            self.window_size,
            self.config.gallery.effective_max_zoom(),
        );
        gallery.set_cursor(tap);
        self.gallery = Some(gallery);
        self.transition = Some(transition);
        self.backdrop_alpha = 0.0;
        self.document.hide(Some(index));
        self.diagnostics
            .handle()
            .log_action(UserAction::OpenGallery { index });
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        if let gallery::Message::RawEvent {
            event: event::Event::Window(window::Event::Resized(size)),
            ..
        } = &message
        {
            self.window_size = *size;
        }

        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };
        let previous_mode = gallery.mode();
        let (event, task) = gallery.handle_message(message);
        let follow_up = self.handle_gallery_event(event, previous_mode);

        Task::batch([task.map(Message::Gallery), follow_up])
    }

    fn handle_gallery_event(&mut self, event: gallery::Event, previous_mode: UiMode) -> Task<Message> {
        match event {
            gallery::Event::None => Task::none(),
            gallery::Event::BackdropChanged(alpha) => {
                self.backdrop_alpha = alpha;
                Task::none()
            }
            gallery::Event::PageChanged(page) => {
                self.document.hide(Some(page));
                self.diagnostics
                    .handle()
                    .log_action(UserAction::ChangePage { page });
                Task::none()
            }
            gallery::Event::ModeChanged(mode) => {
                self.log_mode_change(previous_mode, mode);
                Task::none()
            }
            gallery::Event::DismissRequested {
                cause,
                backdrop_alpha,
                ..
            } => {
                self.dismiss_gallery(cause, backdrop_alpha, Instant::now());
                Task::none()
            }
            gallery::Event::ExportRequested { page, image } => {
                self.diagnostics
                    .handle()
                    .log_action(UserAction::SaveEdited { page });
                self.start_export(page, image)
            }
        }
    }

    fn log_mode_change(&self, from: UiMode, to: UiMode) {
        let handle = self.diagnostics.handle();
        match (from, to) {
            (UiMode::Normal, UiMode::Hidden) => {
                handle.log_action(UserAction::ToggleChrome { visible: false });
            }
            (UiMode::Hidden, UiMode::Normal) => {
                handle.log_action(UserAction::ToggleChrome { visible: true });
            }
            (_, UiMode::Editing) => handle.log_action(UserAction::EnterEditing),
            (UiMode::Editing, UiMode::Normal) => handle.log_action(UserAction::CancelEditing),
            _ => {}
        }
    }

    /// Starts the dismissing transition for the current page.
    ///
    /// A pan slides the page down from where it was dragged; the close
    /// button and Escape zoom it back into its thumbnail.
    fn dismiss_gallery(&mut self, cause: DismissCause, backdrop_alpha: f32, now: Instant) {
        let Some(gallery) = self.gallery.as_mut() else {
            return;
        };
        self.diagnostics.handle().log_action(UserAction::Dismiss {
            cause: cause.as_str().to_string(),
        });

        let page = gallery.page();
        let image = Some(gallery.session().current_image());
        let frame = gallery.current_image_frame();
        let result = match cause {
            DismissCause::Pan => {
                Transition::slide_out(image, frame, self.window_size, backdrop_alpha, page, now)
            }
            DismissCause::CloseButton | DismissCause::Escape => {
                let thumbnail = self
                    .host
                    .as_ref()
                    .and_then(|host| self.document.thumbnail_frame(host, page));
                Transition::dismiss(image, frame, thumbnail, backdrop_alpha, page, now)
            }
        };
        gallery.set_interactive(false);

        match result {
            Ok(transition) => {
                self.document.hide(Some(page));
                self.transition = Some(transition);
            }
            Err(reason) => {
                self.log_abort(reason);
                self.close_gallery();
            }
        }
    }

    /// Drops the session and shows every thumbnail again.
    fn close_gallery(&mut self) {
        self.gallery = None;
        self.transition = None;
        self.backdrop_alpha = 0.0;
        self.document.hide(None);
        self.diagnostics.handle().log_state(AppStateEvent::GalleryClosed);
    }

    fn log_abort(&self, reason: AbortReason) {
        tracing::debug!(reason = reason.as_str(), "transition aborted");
        self.diagnostics
            .handle()
            .log_state(AppStateEvent::TransitionAborted {
                reason: reason.as_str().to_string(),
            });
    }

    fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        self.notifications.tick_at(now);

        if let Some(transition) = &self.transition {
            if transition.is_finished(now) {
                match transition.direction() {
                    Direction::Present => self.finish_presenting(),
                    Direction::Dismiss => self.close_gallery(),
                }
            }
            return Task::none();
        }

        match self.gallery.as_mut() {
            Some(gallery) if gallery.is_animating() => {
                let previous_mode = gallery.mode();
                let (event, task) = gallery.handle_message_at(gallery::Message::Tick(now), now);
                let follow_up = self.handle_gallery_event(event, previous_mode);
                Task::batch([task.map(Message::Gallery), follow_up])
            }
            _ => Task::none(),
        }
    }

    fn finish_presenting(&mut self) {
        self.transition = None;
        self.backdrop_alpha = 1.0;
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.set_interactive(true);
            self.diagnostics
                .handle()
                .log_state(AppStateEvent::GalleryPresented {
                    page_count: gallery.session().page_count(),
                });
        }
    }

    /// Routes an export through the photo library permission.
    fn start_export(&mut self, page: usize, image: ImageData) -> Task<Message> {
        match self.library.authorization() {
            PhotoAuthorization::Authorized => self.run_export(page, image),
            PhotoAuthorization::Denied => self.refuse_export(),
            PhotoAuthorization::NotDetermined => {
                let title = self.i18n.tr("permission-dialog-title");
                let description = self.i18n.tr("permission-dialog-body");
                Task::perform(
                    export::request_authorization(title, description),
                    move |status| Message::AuthorizationAnswered {
                        status,
                        page,
                        image,
                    },
                )
            }
        }
    }

    fn handle_authorization(
        &mut self,
        status: PhotoAuthorization,
        page: usize,
        image: ImageData,
    ) -> Task<Message> {
        self.library.set_authorization(status);
        self.app_state.photo_authorization = status;
        if let Some(key) = self.app_state.save() {
            self.notifications.push(Notification::warning(&key));
        }

        match status {
            PhotoAuthorization::Authorized => self.run_export(page, image),
            PhotoAuthorization::Denied | PhotoAuthorization::NotDetermined => {
                self.refuse_export()
            }
        }
    }

    fn run_export(&self, page: usize, image: ImageData) -> Task<Message> {
        let library = self.library.clone();
        let intensity = self.config.export.effective_sepia_intensity();
        Task::perform(
            export::export(library, image, page, intensity),
            Message::ExportCompleted,
        )
    }

    fn refuse_export(&mut self) -> Task<Message> {
        self.finish_export(Err(ExportError::PermissionDenied))
    }

    fn handle_export_completed(&mut self, result: Result<PathBuf, ExportError>) -> Task<Message> {
        self.finish_export(result)
    }

    /// Reports the outcome and hands the gallery back its toolbar.
    fn finish_export(&mut self, result: Result<PathBuf, ExportError>) -> Task<Message> {
        let success = match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "exported edited image");
                self.diagnostics.handle().log_state(AppStateEvent::ExportSucceeded);
                self.notifications
                    .push(Notification::success("notification-export-success"));
                true
            }
            Err(err) => {
                tracing::warn!("export failed: {err}");
                self.diagnostics
                    .handle()
                    .log_state(AppStateEvent::ExportFailed {
                        reason: err.to_string(),
                    });
                let notification = match err {
                    ExportError::PermissionDenied => Notification::warning(err.i18n_key()),
                    _ => Notification::error(err.i18n_key()),
                };
                self.notifications.push(notification);
                false
            }
        };

        if self.phase() == Phase::Gallery {
            self.handle_gallery_message(gallery::Message::ExportFinished { success })
        } else {
            Task::none()
        }
    }

    fn handle_close_requested(&mut self, id: window::Id) -> Task<Message> {
        if let Some(path) = &self.diagnostics_path {
            self.diagnostics.process_pending();
            if let Err(err) = self.diagnostics.export_to_file(path) {
                tracing::warn!("cannot write diagnostics report to {}: {err}", path.display());
            }
        }
        tracing::debug!(?id, "window close requested");
        iced::exit()
    }
}
