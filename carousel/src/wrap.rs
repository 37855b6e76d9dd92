use crate::{Axis, Item, Vec2};

/// Recycles items that drift past the content bounds so a finite chain loops endlessly.
///
/// Only axis-aligned panels can wrap; distances on [`Axis::Free`] are unsigned.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfiniteWrap {
    axis: Axis,
    /// Content-local shift applied on wrap: content extent plus the seam between last and first.
    wrap_extent: f32,
    /// Content extent in distance units (after scaling), compared against distances.
    scaled_extent: f32,
}

impl InfiniteWrap {
    pub fn new(axis: Axis, wrap_extent: f32, scaled_extent: f32) -> Option<Self> {
        if axis == Axis::Free {
            return None;
        }
        Some(Self {
            axis,
            wrap_extent,
            scaled_extent,
        })
    }

    /// Builds a corrector from an auto-layout content size.
    ///
    /// `scaled_size` is the content size expressed in distance-from-center units.
    pub fn from_content(
        axis: Axis,
        content_size: Vec2,
        scaled_size: Vec2,
        spacing: f32,
    ) -> Option<Self> {
        let extent = axis.component(content_size)?;
        let scaled = axis.component(scaled_size)?;
        Self::new(axis, extent + spacing, scaled)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn wrap_extent(&self) -> f32 {
        self.wrap_extent
    }

    pub fn scaled_extent(&self) -> f32 {
        self.scaled_extent
    }

    /// The signed shift (along the scroll axis) for an item at `distance` from center.
    ///
    /// At most one extent unit per call.
    pub fn shift_for(&self, distance: f32) -> f32 {
        let half = self.scaled_extent / 2.0;
        if distance > half {
            -self.wrap_extent
        } else if distance < -half {
            self.wrap_extent
        } else {
            0.0
        }
    }

    /// Runs one correction pass. Returns how many items were shifted.
    pub fn apply(&self, items: &mut [Item], mut distance: impl FnMut(&Item) -> f32) -> usize {
        let unit = self.axis.unit();
        let mut shifted = 0;
        for item in items.iter_mut() {
            let shift = self.shift_for(distance(item));
            if shift != 0.0 {
                ctrace!(index = item.index(), shift, "InfiniteWrap: shift item");
                item.set_offset(item.offset() + unit * shift);
                shifted += 1;
            }
        }
        shifted
    }
}
