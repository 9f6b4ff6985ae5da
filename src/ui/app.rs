use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::capture::{
    CaptureError, CapturePipeline, CreateEntryError, DeviceLocale, Entry, LocationError,
    Permission,
};
use crate::config::DialogConfig;
use crate::locale::{Locale, Strings};
use crate::ui::dialog::{
    CallbackError, Clock, ConfirmDialog, DialogAction, DialogOutcome, DialogRequest, Severity,
    SystemClock, TransitionConfig,
};
use crate::ui::events::AppEvent;
use crate::ui::layout::{layout_regions, ScreenLayout, ScreenTarget};

/// Which confirmation the modal is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Delete,
    Alert {
        severity: Severity,
        title: String,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
    /// Kept after closing so the exit transition shows the same content.
    pub mode: Option<ModalMode>,
}

/// State the dialog actions operate on.
pub struct Screen {
    pub entry: Option<Entry>,
    pub modal: ModalState,
    pub capture_in_progress: bool,
    pipeline: Arc<CapturePipeline>,
    events: Sender<AppEvent>,
}

impl Screen {
    /// Runs the capture pipeline on a worker thread. The result comes back
    /// as [`AppEvent::CaptureFinished`].
    fn start_capture(&mut self, strings: &Strings) -> Result<(), CallbackError> {
        if self.capture_in_progress {
            return Err(CallbackError::new(strings.capture_busy));
        }
        let pipeline = Arc::clone(&self.pipeline);
        let events = self.events.clone();
        thread::Builder::new()
            .name("worldtag-capture".to_string())
            .spawn(move || {
                let result = pipeline.run();
                if events.send(AppEvent::CaptureFinished(result)).is_err() {
                    tracing::debug!("Capture finished after the UI exited");
                }
            })
            .map_err(|err| CallbackError::new(err.to_string()))?;
        self.capture_in_progress = true;
        tracing::info!("Capture started");
        Ok(())
    }

    fn delete_entry(&mut self) {
        if let Some(entry) = self.entry.take() {
            tracing::info!(path = %entry.photo.path.display(), "Entry deleted");
        }
    }

    fn close_modal(&mut self) {
        self.modal.visible = false;
    }
}

pub struct App<C: Clock = SystemClock> {
    screen: Screen,
    dialog: ConfirmDialog<C>,
    locale: Locale,
    device: DeviceLocale,
    dismiss_on_backdrop: bool,
    surface_action_errors: bool,
    area: Rect,
    should_quit: bool,
}

impl App<SystemClock> {
    pub fn new(
        config: &DialogConfig,
        locale: Locale,
        device: DeviceLocale,
        pipeline: Arc<CapturePipeline>,
        events: Sender<AppEvent>,
    ) -> Self {
        Self::with_clock(config, locale, device, pipeline, events, SystemClock)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(
        config: &DialogConfig,
        locale: Locale,
        device: DeviceLocale,
        pipeline: Arc<CapturePipeline>,
        events: Sender<AppEvent>,
        clock: C,
    ) -> Self {
        if pipeline.location_permission() == Permission::Denied {
            tracing::warn!("Location permission denied; entries cannot be created");
        }
        Self {
            screen: Screen {
                entry: None,
                modal: ModalState::default(),
                capture_in_progress: false,
                pipeline,
                events,
            },
            dialog: ConfirmDialog::with_clock(TransitionConfig::from(config), clock),
            locale,
            device,
            dismiss_on_backdrop: config.dismiss_on_backdrop,
            surface_action_errors: config.surface_action_errors,
            area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    pub fn device(&self) -> &DeviceLocale {
        &self.device
    }

    pub fn entry(&self) -> Option<&Entry> {
        self.screen.entry.as_ref()
    }

    pub fn modal(&self) -> &ModalState {
        &self.screen.modal
    }

    pub fn capture_in_progress(&self) -> bool {
        self.screen.capture_in_progress
    }

    pub fn dialog(&self) -> &ConfirmDialog<C> {
        &self.dialog
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.locale {
            tracing::info!(%locale, "Locale changed");
            self.locale = locale;
        }
    }

    pub fn cycle_locale(&mut self) {
        self.set_locale(self.locale.next());
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
    }

    pub fn on_tick(&mut self) {
        self.dialog.tick();
    }

    pub fn is_animating(&self) -> bool {
        self.dialog.is_animating()
    }

    pub fn screen_layout(&self) -> ScreenLayout {
        let (_, body, _) = layout_regions(self.area);
        ScreenLayout::new(body, self.strings(), self.screen.entry.is_some())
    }

    pub fn open_create(&mut self) {
        self.open_modal(ModalMode::Create);
    }

    /// No-op without an entry.
    pub fn open_delete(&mut self) {
        if self.screen.entry.is_some() {
            self.open_modal(ModalMode::Delete);
        }
    }

    pub fn open_alert(
        &mut self,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.open_modal(ModalMode::Alert {
            severity,
            title: title.into(),
            message: message.into(),
        });
    }

    fn open_modal(&mut self, mode: ModalMode) {
        tracing::debug!(?mode, "Opening modal");
        self.screen.modal = ModalState {
            visible: true,
            mode: Some(mode),
        };
        self.dialog.sync(true);
    }

    /// The dialog request for the current modal. Rebuilt for every render
    /// and every gesture.
    pub fn dialog_request(&self) -> DialogRequest<Screen> {
        let strings = self.strings();
        let request = DialogRequest::new(self.screen.modal.visible)
            .dismiss_on_backdrop(self.dismiss_on_backdrop);
        match &self.screen.modal.mode {
            None => request,
            Some(ModalMode::Create) => request
                .severity(Severity::Warning)
                .title(strings.create_title)
                .message(strings.create_message)
                .confirm(
                    DialogAction::new(strings.create_confirm)
                        .on_invoke(move |screen: &mut Screen| screen.start_capture(strings)),
                )
                .cancel(DialogAction::new(strings.cancel)),
            Some(ModalMode::Delete) => request
                .severity(Severity::Danger)
                .title(strings.delete_title)
                .message(strings.delete_message)
                .confirm(
                    DialogAction::new(strings.delete_confirm).on_invoke(|screen: &mut Screen| {
                        screen.delete_entry();
                        Ok(())
                    }),
                )
                .cancel(DialogAction::new(strings.cancel)),
            Some(ModalMode::Alert {
                severity,
                title,
                message,
            }) => request
                .severity(*severity)
                .title(title.clone())
                .message(message.clone())
                .confirm(DialogAction::unlabeled()),
        }
    }

    pub fn dialog_key(&mut self, key: KeyEvent) {
        let request = self.dialog_request();
        let outcome = self
            .dialog
            .handle_key(key, request, &mut self.screen, Screen::close_modal);
        self.after_dialog(outcome);
    }

    pub fn dialog_mouse(&mut self, mouse: MouseEvent) {
        let request = self.dialog_request();
        let outcome = self.dialog.handle_mouse(
            mouse,
            self.area,
            request,
            &mut self.screen,
            Screen::close_modal,
        );
        self.after_dialog(outcome);
    }

    /// Click on the main screen.
    pub fn screen_click(&mut self, column: u16, row: u16) {
        match self.screen_layout().hit_test(column, row) {
            Some(ScreenTarget::Create) => self.open_create(),
            Some(ScreenTarget::Delete) => self.open_delete(),
            Some(ScreenTarget::Chip(locale)) => self.set_locale(locale),
            None => {}
        }
    }

    fn after_dialog(&mut self, outcome: DialogOutcome) {
        self.dialog.sync(self.screen.modal.visible);
        let Some(error) = outcome.take_error() else {
            return;
        };
        if self.surface_action_errors {
            let title = self.strings().action_failed_title;
            self.open_alert(Severity::Danger, title, error.message());
        }
    }

    pub fn on_capture_finished(&mut self, result: Result<Entry, CreateEntryError>) {
        self.screen.capture_in_progress = false;
        let strings = self.strings();
        let (severity, message) = match result {
            Ok(entry) => {
                tracing::info!(path = %entry.photo.path.display(), "Latest entry replaced");
                self.screen.entry = Some(entry);
                return;
            }
            Err(CreateEntryError::Cancelled) => {
                tracing::info!("Capture cancelled");
                return;
            }
            Err(CreateEntryError::Location(LocationError::PermissionDenied)) => {
                (Severity::Warning, strings.location_denied.to_string())
            }
            Err(CreateEntryError::Location(err)) => {
                tracing::warn!(error = %err, "Capture failed");
                (
                    Severity::Danger,
                    format!("{}\n{}", strings.location_unavailable, err),
                )
            }
            Err(CreateEntryError::Camera(err @ CaptureError::Unavailable { .. })) => {
                tracing::warn!(error = %err, "Capture failed");
                (
                    Severity::Danger,
                    format!("{}\n{}", strings.camera_unavailable, err),
                )
            }
            Err(CreateEntryError::Camera(err)) => {
                tracing::warn!(error = %err, "Capture failed");
                (Severity::Danger, err.to_string())
            }
        };
        self.open_alert(severity, strings.capture_failed_title, message);
    }
}
