/// Marker trait for things that can happen to a panel: key presses,
/// resolved modals, finished settings writes.
pub trait Intent: Send + 'static {}
