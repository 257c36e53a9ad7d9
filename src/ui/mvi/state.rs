//! Base trait for UI state.

/// Marker trait for state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and start from `Default` at launch or after a reset.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
