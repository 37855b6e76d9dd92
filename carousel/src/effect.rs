use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::emitter::{CustomEffectListener, Listeners};
use crate::{Curve, Keyframe, RotationAxis, ScaleAxis, Vec2, Vec3};

/// Output channel of an [`Effect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    RotationX,
    RotationY,
    RotationZ,
    ScaleX,
    ScaleY,
    /// Local depth coordinate.
    Depth,
    /// Not applied by the engine; delivered to `on_custom_effect` listeners.
    Custom,
}

impl EffectKind {
    pub const ALL: [Self; 7] = [
        Self::RotationX,
        Self::RotationY,
        Self::RotationZ,
        Self::ScaleX,
        Self::ScaleY,
        Self::Depth,
        Self::Custom,
    ];
}

/// A closed `[min, max]` range. Authoring hint only; never enforced at evaluation time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// An effect descriptor: maps an item's distance from center to an output value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub kind: EffectKind,
    /// Expected input-distance domain.
    pub space: Interval,
    /// Expected output range.
    pub value: Interval,
    pub curve: Option<Curve>,
}

impl Effect {
    /// A descriptor with the default authoring setup: distances in `[-100, 100]`, values in
    /// `[0, 1]`, and a bell curve peaking at the center.
    pub fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            space: Interval::new(-100.0, 100.0),
            value: Interval::new(0.0, 1.0),
            curve: Some(Curve::new([
                Keyframe::new(-100.0, 0.0),
                Keyframe::new(0.0, 1.0),
                Keyframe::new(100.0, 0.0),
            ])),
        }
    }

    pub fn with_curve(mut self, curve: Option<Curve>) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_space(mut self, min: f32, max: f32) -> Self {
        self.space = Interval::new(min, max);
        self
    }

    pub fn with_value(mut self, min: f32, max: f32) -> Self {
        self.value = Interval::new(min, max);
        self
    }

    /// Evaluates the curve at `distance`. A descriptor without a curve yields `0.0`.
    pub fn value_at(&self, distance: f32) -> f32 {
        self.curve.as_ref().map_or(0.0, |c| c.evaluate(distance))
    }
}

/// Read-only view of a set of positioned items.
pub trait ItemSource {
    fn item_count(&self) -> usize;

    fn item_world_position(&self, index: usize) -> Vec2;

    /// Signed distance along the scroll axis (unsigned Euclidean on the free axis), normalized
    /// by the ancestor scale.
    fn distance_from_center(&self, point: Vec2) -> f32;
}

/// Receives built-in effect outputs for items.
pub trait EffectTarget {
    /// Sets one euler angle (degrees) of the item's local rotation; other axes are untouched.
    fn set_local_rotation_axis(&mut self, index: usize, axis: RotationAxis, degrees: f32);

    /// Sets one axis of the item's local scale; the other axes are untouched.
    fn set_local_scale_axis(&mut self, index: usize, axis: ScaleAxis, value: f32);

    fn set_local_depth(&mut self, index: usize, depth: f32);
}

/// A plain local transform snapshot, usable as an [`EffectTarget`] via slices.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransform {
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub depth: f32,
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            depth: 0.0,
        }
    }
}

impl EffectTarget for [ItemTransform] {
    fn set_local_rotation_axis(&mut self, index: usize, axis: RotationAxis, degrees: f32) {
        let r = &mut self[index].rotation;
        match axis {
            RotationAxis::X => r.x = degrees,
            RotationAxis::Y => r.y = degrees,
            RotationAxis::Z => r.z = degrees,
        }
    }

    fn set_local_scale_axis(&mut self, index: usize, axis: ScaleAxis, value: f32) {
        let s = &mut self[index].scale;
        match axis {
            ScaleAxis::X => s.x = value,
            ScaleAxis::Y => s.y = value,
        }
    }

    fn set_local_depth(&mut self, index: usize, depth: f32) {
        self[index].depth = depth;
    }
}

/// Evaluates effect descriptors for every item of an [`ItemSource`].
///
/// Descriptors are applied in list order. Different kinds write disjoint channels; for
/// duplicates of one kind the last descriptor wins.
#[derive(Clone, Debug, Default)]
pub struct EffectEngine {
    effects: Vec<Effect>,
    on_custom_effect: Listeners<CustomEffectListener>,
}

impl EffectEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_on_custom_effect(
        mut self,
        listener: impl Fn(usize, f32) + Send + Sync + 'static,
    ) -> Self {
        self.add_on_custom_effect(listener);
        self
    }

    pub fn add_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Removes the descriptor at `index`, if any.
    pub fn remove_effect(&mut self, index: usize) -> Option<Effect> {
        (index < self.effects.len()).then(|| self.effects.remove(index))
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut [Effect] {
        &mut self.effects
    }

    /// Whether a descriptor of `kind` is attached.
    pub fn has_kind(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn add_on_custom_effect(&mut self, listener: impl Fn(usize, f32) + Send + Sync + 'static) {
        self.on_custom_effect
            .push(Arc::new(listener) as Arc<CustomEffectListener>);
    }

    /// Evaluates every descriptor at `distance`, in list order.
    pub fn for_each_value(&self, distance: f32, mut f: impl FnMut(EffectKind, f32)) {
        for effect in &self.effects {
            f(effect.kind, effect.value_at(distance));
        }
    }

    /// Runs one effect pass over all items.
    pub fn apply<S, T>(&self, source: &S, target: &mut T)
    where
        S: ItemSource + ?Sized,
        T: EffectTarget + ?Sized,
    {
        if self.effects.is_empty() {
            return;
        }
        for index in 0..source.item_count() {
            let distance = source.distance_from_center(source.item_world_position(index));
            self.for_each_value(distance, |kind, value| {
                self.dispatch(index, kind, value, &mut *target);
            });
        }
    }

    fn dispatch<T: EffectTarget + ?Sized>(
        &self,
        index: usize,
        kind: EffectKind,
        value: f32,
        target: &mut T,
    ) {
        match kind {
            EffectKind::RotationX => target.set_local_rotation_axis(index, RotationAxis::X, value),
            EffectKind::RotationY => target.set_local_rotation_axis(index, RotationAxis::Y, value),
            EffectKind::RotationZ => target.set_local_rotation_axis(index, RotationAxis::Z, value),
            EffectKind::ScaleX => target.set_local_scale_axis(index, ScaleAxis::X, value),
            EffectKind::ScaleY => target.set_local_scale_axis(index, ScaleAxis::Y, value),
            EffectKind::Depth => target.set_local_depth(index, value),
            EffectKind::Custom => {
                for listener in self.on_custom_effect.iter() {
                    listener(index, value);
                }
            }
        }
    }
}
