//! State owned by the confirmation dialog.

use crate::ui::mvi::UiState;

use super::transition::{Pose, TransitionConfig, TransitionState};

/// Buttons a dialog can show. Confirm is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    Cancel,
    #[default]
    Confirm,
}

/// Everything the dialog remembers between renders.
///
/// None of this is business state: the host owns `visible` and the actions,
/// the dialog only tracks the last `visible` it observed, its transition and
/// whether the current open/close cycle already dispatched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialogState {
    pub config: TransitionConfig,
    pub transition: TransitionState,
    /// Last `visible` flag seen from the host.
    pub visible: bool,
    pub focus: DialogButton,
    /// Set once a terminal action ran in the current cycle.
    pub settled: bool,
}

impl UiState for DialogState {}

impl DialogState {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn pose(&self) -> Pose {
        self.transition.pose()
    }

    /// True while the card is on screen, including the exit transition.
    pub fn is_presented(&self) -> bool {
        self.visible || self.transition.is_animating()
    }

    /// True when input may dispatch an action.
    pub fn accepts_input(&self) -> bool {
        self.visible && !self.settled
    }
}
