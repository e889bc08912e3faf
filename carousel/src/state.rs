use crate::PageIndicator;

/// A lightweight, serializable snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f32,
    pub content_extent: f32,
}

/// A combined snapshot of scroll + indicator state.
///
/// This is useful for restoring a carousel across sessions without coupling it to any
/// specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub scroll: ScrollState,
    pub indicator: PageIndicator,
}
