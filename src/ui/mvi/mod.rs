//! Model-View-Intent (MVI) primitives shared by the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot the view renders from
//! - **Intent**: gesture, host notification or clock sample
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
