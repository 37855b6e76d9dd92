use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::math;

/// A 2D vector in content-local or world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        math::sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Linear interpolation. `t` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    /// Component-wise product.
    pub fn scale(self, by: Self) -> Self {
        Self::new(self.x * by.x, self.y * by.y)
    }

    /// Component-wise quotient.
    pub fn unscale(self, by: Self) -> Self {
        Self::new(self.x / by.x, self.y / by.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// A 3D vector, used for item-local rotation (euler degrees) and scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The scroll axis of a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
    /// Arbitrary 2D placement. Layout is manual and distances are unsigned.
    Free,
}

impl Axis {
    /// Whether a host scroll surface should accept horizontal drag.
    pub fn scrolls_horizontally(self) -> bool {
        self != Self::Vertical
    }

    /// Whether a host scroll surface should accept vertical drag.
    pub fn scrolls_vertically(self) -> bool {
        self != Self::Horizontal
    }

    /// Component of `v` along this axis. `None` for [`Axis::Free`].
    pub fn component(self, v: Vec2) -> Option<f32> {
        match self {
            Self::Horizontal => Some(v.x),
            Self::Vertical => Some(v.y),
            Self::Free => None,
        }
    }

    /// Unit vector along this axis. Zero for [`Axis::Free`].
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(1.0, 0.0),
            Self::Vertical => Vec2::new(0.0, 1.0),
            Self::Free => Vec2::ZERO,
        }
    }
}

/// How the per-item size is chosen for auto layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSizeMode {
    /// Use the explicit `item_size` from the options.
    #[default]
    Custom,
    /// Match the viewport size.
    Fit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleAxis {
    X,
    Y,
}

/// The conceptual state of the drag/snap machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    Pressing,
    Dragging,
    Snapping,
}

/// Viewport geometry supplied by the host.
///
/// Item world positions are derived from this as
/// `world_center + (content_offset + item_offset - center) * content_scale`, where `center` is
/// the viewport center expressed in content-anchor space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub size: Vec2,
    pub world_center: Vec2,
    /// World units per content unit (the content's accumulated scale).
    pub content_scale: Vec2,
    /// Root/canvas scale that distances from center are normalized by.
    pub ancestor_scale: Vec2,
}

impl Viewport {
    /// An unscaled viewport centered at the world origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            world_center: Vec2::ZERO,
            content_scale: Vec2::ONE,
            ancestor_scale: Vec2::ONE,
        }
    }

    pub fn with_world_center(mut self, world_center: Vec2) -> Self {
        self.world_center = world_center;
        self
    }

    pub fn with_content_scale(mut self, content_scale: Vec2) -> Self {
        self.content_scale = content_scale;
        self
    }

    pub fn with_ancestor_scale(mut self, ancestor_scale: Vec2) -> Self {
        self.ancestor_scale = ancestor_scale;
        self
    }

    /// The viewport center in content-anchor space.
    ///
    /// Content is anchored at the viewport's leading edge along the scroll axis and centered on
    /// the cross axis, so only scrolling components are offset by half the viewport size.
    pub fn center_offset(&self, axis: Axis) -> Vec2 {
        Vec2::new(
            if axis.scrolls_horizontally() { self.size.x / 2.0 } else { 0.0 },
            if axis.scrolls_vertically() { self.size.y / 2.0 } else { 0.0 },
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
