/// Marker trait for panel state.
///
/// State is everything a view needs to draw one frame. It is cloned, never
/// shared, so `PartialEq` is enough to tell whether a redraw changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
