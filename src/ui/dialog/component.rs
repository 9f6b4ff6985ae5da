use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::ui::mvi::Reducer;

use super::clock::{Clock, SystemClock};
use super::intent::DialogIntent;
use super::reducer::DialogReducer;
use super::request::{CallbackError, DialogRequest};
use super::state::{DialogButton, DialogState};
use super::transition::{Pose, TransitionConfig};
use super::view::{DialogView, HitTarget};

/// How a dialog cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Confirm,
    Cancel,
    /// Click outside the card with backdrop dismissal enabled.
    Backdrop,
    /// Esc, the terminal's counterpart of a platform back gesture.
    System,
}

/// Result of handing one gesture to the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Gesture did nothing (not visible, already settled, no such button).
    Ignored,
    FocusMoved,
    /// `on_close` has run. `error` carries what the action returned, if anything.
    Closed {
        reason: CloseReason,
        error: Option<CallbackError>,
    },
}

impl DialogOutcome {
    pub fn is_closed(&self) -> bool {
        matches!(self, DialogOutcome::Closed { .. })
    }

    pub fn take_error(self) -> Option<CallbackError> {
        match self {
            DialogOutcome::Closed { error, .. } => error,
            _ => None,
        }
    }
}

/// Modal yes/no dialog.
///
/// The dialog is a view over the host's `visible` flag plus an animation
/// driver. Every dispatching method takes the request by value (actions are
/// `FnOnce`), the host context the actions run against, and the host's
/// `on_close`. At most one action runs per open/close cycle and it always
/// runs before `on_close`.
pub struct ConfirmDialog<C = SystemClock> {
    state: DialogState,
    clock: C,
}

impl ConfirmDialog<SystemClock> {
    pub fn new(config: TransitionConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $intent:expr) => {
        $self.state = DialogReducer::reduce(std::mem::take(&mut $self.state), $intent);
    };
}

impl<C: Clock> ConfirmDialog<C> {
    pub fn with_clock(config: TransitionConfig, clock: C) -> Self {
        Self {
            state: DialogState::new(config),
            clock,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn pose(&self) -> Pose {
        self.state.pose()
    }

    pub fn focus(&self) -> DialogButton {
        self.state.focus
    }

    pub fn is_presented(&self) -> bool {
        self.state.is_presented()
    }

    pub fn is_animating(&self) -> bool {
        self.state.transition.is_animating()
    }

    /// Observe the host's `visible` flag. Edges start a transition.
    pub fn sync(&mut self, visible: bool) {
        if visible != self.state.visible {
            tracing::debug!(visible, "Dialog visibility changed");
        }
        let now = self.clock.now();
        dispatch_mvi!(self, DialogIntent::Sync { visible, now });
    }

    pub fn tick(&mut self) {
        let now = self.clock.now();
        dispatch_mvi!(self, DialogIntent::Tick { now });
    }

    /// Press a button: run its action, then `on_close`, even if the action
    /// fails or panics.
    pub fn press<H>(
        &mut self,
        button: DialogButton,
        mut request: DialogRequest<H>,
        host: &mut H,
        on_close: impl FnOnce(&mut H),
    ) -> DialogOutcome {
        self.sync(request.visible);
        if !self.state.accepts_input() {
            tracing::debug!(?button, "Dialog press ignored");
            return DialogOutcome::Ignored;
        }
        let (action, reason) = match button {
            DialogButton::Confirm => (request.confirm.take(), CloseReason::Confirm),
            DialogButton::Cancel => match request.cancel.take() {
                Some(action) => (Some(action), CloseReason::Cancel),
                None => return DialogOutcome::Ignored,
            },
        };
        dispatch_mvi!(self, DialogIntent::Settle);

        let error = {
            let mut host = scopeguard::guard(host, |host| on_close(host));
            match action.and_then(|action| action.on_invoke) {
                Some(invoke) => invoke(&mut **host).err(),
                None => None,
            }
        };

        match &error {
            Some(err) => tracing::warn!(?reason, error = %err, "Dialog action failed"),
            None => tracing::info!(?reason, "Dialog closed"),
        }
        DialogOutcome::Closed { reason, error }
    }

    /// Click outside the card. Closes without running an action when the
    /// request allows backdrop dismissal, otherwise does nothing.
    pub fn backdrop_tap<H>(
        &mut self,
        request: DialogRequest<H>,
        host: &mut H,
        on_close: impl FnOnce(&mut H),
    ) -> DialogOutcome {
        if !request.dismiss_on_backdrop {
            tracing::debug!("Backdrop dismissal disabled");
            return DialogOutcome::Ignored;
        }
        self.close_without_action(request.visible, CloseReason::Backdrop, host, on_close)
    }

    /// Esc. Always closes without running an action.
    pub fn dismiss<H>(
        &mut self,
        request: DialogRequest<H>,
        host: &mut H,
        on_close: impl FnOnce(&mut H),
    ) -> DialogOutcome {
        self.close_without_action(request.visible, CloseReason::System, host, on_close)
    }

    fn close_without_action<H>(
        &mut self,
        visible: bool,
        reason: CloseReason,
        host: &mut H,
        on_close: impl FnOnce(&mut H),
    ) -> DialogOutcome {
        self.sync(visible);
        if !self.state.accepts_input() {
            return DialogOutcome::Ignored;
        }
        dispatch_mvi!(self, DialogIntent::Settle);
        on_close(host);
        tracing::info!(?reason, "Dialog closed");
        DialogOutcome::Closed {
            reason,
            error: None,
        }
    }

    /// Keyboard: arrows/Tab move focus, Enter presses the focused button,
    /// `y`/`n` press confirm/cancel, Esc dismisses.
    pub fn handle_key<H>(
        &mut self,
        key: KeyEvent,
        request: DialogRequest<H>,
        host: &mut H,
        on_close: impl FnOnce(&mut H),
    ) -> DialogOutcome {
        if key.kind != KeyEventKind::Press {
            return DialogOutcome::Ignored;
        }
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.sync(request.visible);
                if !self.state.accepts_input() {
                    return DialogOutcome::Ignored;
                }
                let has_cancel = request.has_cancel();
                dispatch_mvi!(self, DialogIntent::ToggleFocus { has_cancel });
                DialogOutcome::FocusMoved
            }
            KeyCode::Enter => {
                let focus = if request.has_cancel() {
                    self.state.focus
                } else {
                    DialogButton::Confirm
                };
                self.press(focus, request, host, on_close)
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.press(DialogButton::Confirm, request, host, on_close)
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.press(DialogButton::Cancel, request, host, on_close)
            }
            KeyCode::Esc => self.dismiss(request, host, on_close),
            _ => DialogOutcome::Ignored,
        }
    }

    /// Mouse: left click on a button presses it, outside the card is a
    /// backdrop tap, anywhere else on the card is ignored.
    pub fn handle_mouse<H>(
        &mut self,
        mouse: MouseEvent,
        area: Rect,
        request: DialogRequest<H>,
        host: &mut H,
        on_close: impl FnOnce(&mut H),
    ) -> DialogOutcome {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return DialogOutcome::Ignored;
        }
        self.sync(request.visible);
        if !self.state.accepts_input() {
            return DialogOutcome::Ignored;
        }
        let view = DialogView::build(&request, self.pose(), self.state.focus, area);
        match view.hit_test(mouse.column, mouse.row) {
            HitTarget::Button(button) => {
                dispatch_mvi!(self, DialogIntent::Focus(button));
                self.press(button, request, host, on_close)
            }
            HitTarget::Card => DialogOutcome::Ignored,
            HitTarget::Backdrop => self.backdrop_tap(request, host, on_close),
        }
    }

    /// Layout for `request` at the current pose, or `None` when nothing is
    /// on screen.
    pub fn view<H>(&self, area: Rect, request: &DialogRequest<H>) -> Option<DialogView> {
        if !request.visible && !self.is_presented() {
            return None;
        }
        Some(DialogView::build(
            request,
            self.pose(),
            self.state.focus,
            area,
        ))
    }

    pub fn render<H>(&self, frame: &mut Frame, area: Rect, request: &DialogRequest<H>) {
        if let Some(view) = self.view(area, request) {
            view.draw(frame);
        }
    }
}
