//! Intents for the confirmation dialog.

use std::time::Instant;

use crate::ui::mvi::Intent;

use super::state::DialogButton;

#[derive(Debug, Clone)]
pub enum DialogIntent {
    /// Host reported its `visible` flag. Edges start a transition.
    Sync { visible: bool, now: Instant },

    /// Sample the transition at `now`.
    Tick { now: Instant },

    /// Move focus to the other button, if there is one.
    ToggleFocus { has_cancel: bool },

    Focus(DialogButton),

    /// A terminal action was dispatched for the current cycle.
    Settle,
}

impl Intent for DialogIntent {}
