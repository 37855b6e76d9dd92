use alloc::vec::Vec;

use carousel::{EffectTarget, RotationAxis, ScaleAxis, Vec2, Viewport};

/// A host-side drawable representing one carousel item.
pub trait ItemHandle {
    /// Current content-local offset (read once for pre-existing items).
    fn offset(&self) -> Vec2;

    fn set_offset(&mut self, offset: Vec2);

    /// Sets one euler angle (degrees) of the local rotation, leaving the others untouched.
    fn set_local_rotation_axis(&mut self, axis: RotationAxis, degrees: f32);

    /// Sets one axis of the local scale, leaving the others untouched.
    fn set_local_scale_axis(&mut self, axis: ScaleAxis, value: f32);

    fn set_local_depth(&mut self, depth: f32);
}

/// The host scene a [`crate::Controller`] drives.
pub trait ScrollHost {
    type Item: ItemHandle;
    /// Template used to create items in [`InitMode::Dynamic`].
    type Prefab;

    fn viewport(&self) -> Viewport;

    /// Hands over the items already present in the content container, in index order.
    fn take_children(&mut self) -> Vec<Self::Item>;

    /// Creates the item for `index` from `prefab`, parented to the content container.
    fn instantiate(&mut self, prefab: &Self::Prefab, index: usize) -> Self::Item;

    fn set_content_offset(&mut self, offset: Vec2);
}

/// Where a controller's items come from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitMode<P> {
    /// Use the host's existing children.
    Static,
    /// Instantiate `count` items from `prefab`.
    Dynamic { prefab: P, count: usize },
}

/// Routes effect outputs to item handles by index.
pub(crate) struct Handles<'a, I>(pub(crate) &'a mut [I]);

impl<I: ItemHandle> EffectTarget for Handles<'_, I> {
    fn set_local_rotation_axis(&mut self, index: usize, axis: RotationAxis, degrees: f32) {
        self.0[index].set_local_rotation_axis(axis, degrees);
    }

    fn set_local_scale_axis(&mut self, index: usize, axis: ScaleAxis, value: f32) {
        self.0[index].set_local_scale_axis(axis, value);
    }

    fn set_local_depth(&mut self, index: usize, depth: f32) {
        self.0[index].set_local_depth(depth);
    }
}
