use alloc::vec::Vec;

use crate::Vec2;

/// A serializable snapshot of a panel's scroll position.
///
/// Hosts can persist this to restore a carousel across sessions without coupling the engine to
/// any storage format.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelState {
    pub content_offset: Vec2,
    pub target_offset: Vec2,
    pub center_index: usize,
    pub snapping: bool,
    /// Item offsets in index order (they drift from the layout under infinite wrap).
    pub item_offsets: Vec<Vec2>,
}
