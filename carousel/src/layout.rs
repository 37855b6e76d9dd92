use crate::{Axis, Vec2};

/// One addressable element of the scrollable sequence.
///
/// The index never changes after creation. The offset is content-local and points at the
/// item's center.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    index: usize,
    offset: Vec2,
}

impl Item {
    pub fn new(index: usize, offset: Vec2) -> Self {
        Self { index, offset }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}

/// Inputs for [`layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    pub axis: Axis,
    /// Resolved per-item size (already `Fit`-adjusted).
    pub item_size: Vec2,
    pub spacing: f32,
    pub auto_layout: bool,
}

/// Extent of `count` items of `size` separated by `spacing`.
///
/// `count * size + (count - 1) * spacing`, and `0` for an empty set.
pub fn content_extent(count: usize, size: f32, spacing: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let n = count as f32;
    n * size + (n - 1.0) * spacing
}

/// Offset of item `index` along the scroll axis: `index * (size + spacing) + size / 2`.
pub fn item_axis_offset(index: usize, size: f32, spacing: f32) -> f32 {
    index as f32 * (size + spacing) + size / 2.0
}

/// Assigns auto-layout offsets to `items` and returns the computed content size.
///
/// Returns `None` (leaving every offset untouched) when auto layout is off or the axis is
/// [`Axis::Free`]; placement is then manual and the caller keeps its own content size.
pub fn layout(items: &mut [Item], params: &LayoutParams) -> Option<Vec2> {
    if !params.auto_layout {
        return None;
    }
    let unit = params.axis.unit();
    let size = params.axis.component(params.item_size)?;

    for item in items.iter_mut() {
        let along = item_axis_offset(item.index, size, params.spacing);
        item.set_offset(unit * along);
    }

    let extent = content_extent(items.len(), size, params.spacing);
    Some(if params.axis == Axis::Horizontal {
        Vec2::new(extent, params.item_size.y)
    } else {
        Vec2::new(params.item_size.x, extent)
    })
}
