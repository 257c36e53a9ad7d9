//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are produced by the terminal shell (key presses, mouse clicks
/// on keypad buttons) and consumed by reducers.
pub trait Intent: Send + 'static {}
