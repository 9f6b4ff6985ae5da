//! Reducer for the confirmation dialog.

use crate::ui::mvi::Reducer;

use super::intent::DialogIntent;
use super::state::{DialogButton, DialogState};

pub struct DialogReducer;

impl Reducer for DialogReducer {
    type State = DialogState;
    type Intent = DialogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DialogIntent::Sync { visible, now } => {
                match (state.visible, visible) {
                    (false, true) => {
                        state.transition.show(now, &state.config);
                        state.focus = DialogButton::Confirm;
                        state.settled = false;
                    }
                    (true, false) => state.transition.hide(now, &state.config),
                    _ => {}
                }
                state.visible = visible;
                state
            }

            DialogIntent::Tick { now } => {
                state.transition.advance(now);
                state
            }

            DialogIntent::ToggleFocus { has_cancel } => {
                state.focus = match (state.focus, has_cancel) {
                    (DialogButton::Confirm, true) => DialogButton::Cancel,
                    _ => DialogButton::Confirm,
                };
                state
            }

            DialogIntent::Focus(button) => {
                state.focus = button;
                state
            }

            DialogIntent::Settle => {
                state.settled = true;
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dialog::transition::Pose;
    use std::time::{Duration, Instant};

    fn shown(now: Instant) -> DialogState {
        DialogReducer::reduce(
            DialogState::default(),
            DialogIntent::Sync { visible: true, now },
        )
    }

    #[test]
    fn rising_edge_starts_show() {
        let now = Instant::now();
        let state = shown(now);
        assert!(state.visible);
        assert!(state.transition.is_animating());
        assert_eq!(state.transition.target(), Pose::SHOWN);
    }

    #[test]
    fn repeated_sync_without_edge_is_noop() {
        let now = Instant::now();
        let state = shown(now);
        let again = DialogReducer::reduce(
            state.clone(),
            DialogIntent::Sync {
                visible: true,
                now: now + Duration::from_millis(10),
            },
        );
        assert_eq!(again, state);
    }

    #[test]
    fn falling_edge_starts_hide() {
        let now = Instant::now();
        let state = DialogReducer::reduce(
            shown(now),
            DialogIntent::Sync {
                visible: false,
                now: now + Duration::from_millis(20),
            },
        );
        assert!(!state.visible);
        assert_eq!(state.transition.target(), Pose::HIDDEN);
    }

    #[test]
    fn rising_edge_resets_cycle() {
        let now = Instant::now();
        let mut state = shown(now);
        state = DialogReducer::reduce(state, DialogIntent::Focus(DialogButton::Cancel));
        state = DialogReducer::reduce(state, DialogIntent::Settle);
        state = DialogReducer::reduce(state, DialogIntent::Sync { visible: false, now });
        state = DialogReducer::reduce(state, DialogIntent::Sync { visible: true, now });
        assert!(!state.settled);
        assert_eq!(state.focus, DialogButton::Confirm);
    }

    #[test]
    fn toggle_focus_requires_cancel() {
        let state = DialogReducer::reduce(
            DialogState::default(),
            DialogIntent::ToggleFocus { has_cancel: false },
        );
        assert_eq!(state.focus, DialogButton::Confirm);

        let state = DialogReducer::reduce(state, DialogIntent::ToggleFocus { has_cancel: true });
        assert_eq!(state.focus, DialogButton::Cancel);
        let state = DialogReducer::reduce(state, DialogIntent::ToggleFocus { has_cancel: true });
        assert_eq!(state.focus, DialogButton::Confirm);
    }

    #[test]
    fn tick_advances_transition() {
        let now = Instant::now();
        let state = shown(now);
        let end = state.transition.settles_at().unwrap();
        let state = DialogReducer::reduce(state, DialogIntent::Tick { now: end });
        assert_eq!(state.pose(), Pose::SHOWN);
        assert!(!state.transition.is_animating());
    }
}
