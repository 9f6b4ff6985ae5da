//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User gestures (key presses, clicks)
/// - Host notifications (visibility flips)
/// - Clock samples
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
