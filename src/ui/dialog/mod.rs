//! Generic confirmation dialog.
//!
//! A modal yes/no card over a dimmed backdrop with an enter/exit transition,
//! a severity category and two dispatchable actions.
//!
//! # Architecture
//!
//! Uses the MVI pattern like the rest of the UI:
//! - `state.rs` / `intent.rs` / `reducer.rs` - transition and focus state
//! - `transition.rs` - timed and spring-driven animated values
//! - `clock.rs` - injected time source
//! - `request.rs` - what the host passes in on every render
//! - `view.rs` - layout, hit-testing and drawing
//! - `component.rs` - gesture dispatch with close-after-action semantics

mod clock;
mod component;
mod intent;
mod reducer;
mod request;
mod severity;
mod state;
mod transition;
mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use component::{CloseReason, ConfirmDialog, DialogOutcome};
pub use intent::DialogIntent;
pub use reducer::DialogReducer;
pub use request::{
    ActionFn, CallbackError, DialogAction, DialogMessage, DialogRequest, DEFAULT_CANCEL_LABEL,
    DEFAULT_CONFIRM_LABEL,
};
pub use severity::{Severity, SeverityTheme};
pub use state::{DialogButton, DialogState};
pub use transition::{
    Channel, Easing, Pose, SpringParams, TransitionConfig, TransitionState, HIDDEN_OFFSET,
    HIDDEN_SCALE,
};
pub use view::{ButtonView, DialogView, HitTarget};
