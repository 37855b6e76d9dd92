//! A headless carousel engine: scroll-snap, infinite wrap, and distance-driven item effects.
//!
//! For driving a host scene graph (item handles, pointer forwarding), see the
//! `carousel-adapter` crate.
//!
//! This crate holds the algorithmic core of a carousel: laying items out along a scroll axis,
//! snapping the nearest item to the viewport center with exponential smoothing, recycling items
//! to loop endlessly, and mapping each item's distance from center through curves into visual
//! parameters (rotation, scale, depth, or a custom value).
//!
//! It is UI-agnostic. A host is expected to provide:
//! - viewport geometry (size, world center, scale factors)
//! - a per-frame time delta
//! - pointer press/drag/release notifications and the content offset its drag produced
//!
//! and to apply the computed offsets and effect values to its own drawables.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod curve;
mod effect;
mod emitter;
mod layout;
mod math;
mod options;
mod panel;
mod snap;
mod state;
mod types;
mod warning;
mod wrap;


pub use curve::{Curve, Keyframe};
pub use effect::{
    Effect, EffectEngine, EffectKind, EffectTarget, Interval, ItemSource, ItemTransform,
};
pub use emitter::{
    CustomEffectListener, ItemCenterListener, ItemInitListener, Listeners, WarningListener,
};
pub use layout::{Item, LayoutParams, content_extent, item_axis_offset, layout};
pub use options::{ItemInit, PanelOptions};
pub use panel::ScrollPanel;
pub use snap::{SnapMachine, nearest};
pub use state::PanelState;
pub use types::{
    Axis, ItemSizeMode, RotationAxis, ScaleAxis, ScrollPhase, Vec2, Vec3, Viewport,
};
pub use warning::{ConfigWarning, MIN_INFINITE_ITEMS};
pub use wrap::InfiniteWrap;
