use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::emitter::{ItemCenterListener, ItemInitListener, Listeners, WarningListener};
use crate::{Axis, ConfigWarning, Item, ItemSizeMode, Vec2};

/// How the panel's items come into existence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemInit {
    /// Pre-existing items with their current content-local offsets, in index order.
    Static(Vec<Vec2>),
    /// `count` items created by the host, all starting at the content origin.
    Dynamic { count: usize },
}

impl ItemInit {
    pub fn count(&self) -> usize {
        match self {
            Self::Static(offsets) => offsets.len(),
            Self::Dynamic { count } => *count,
        }
    }

    pub(crate) fn build(&self) -> Vec<Item> {
        match self {
            Self::Static(offsets) => offsets
                .iter()
                .enumerate()
                .map(|(i, &off)| Item::new(i, off))
                .collect(),
            Self::Dynamic { count } => (0..*count).map(|i| Item::new(i, Vec2::ZERO)).collect(),
        }
    }
}

impl Default for ItemInit {
    fn default() -> Self {
        Self::Static(Vec::new())
    }
}

/// Configuration for [`crate::ScrollPanel`], set once at construction.
///
/// Listeners are stored in `Arc`s, so cloning options is cheap.
#[derive(Clone, Debug)]
pub struct PanelOptions {
    pub axis: Axis,
    pub init: ItemInit,

    /// When off, item offsets and `content_size` are used exactly as provided.
    pub auto_layout: bool,
    pub item_size_mode: ItemSizeMode,
    /// Item size for [`ItemSizeMode::Custom`].
    pub item_size: Vec2,
    /// Space between adjacent items along the scroll axis.
    pub spacing: f32,
    /// Content size used for manual layout.
    pub content_size: Vec2,

    /// Recycle items to loop endlessly. Needs auto layout, an axis-aligned panel, and at least
    /// four items; otherwise it is disabled with a warning.
    pub infinite: bool,
    /// Passed through to the host scroll surface; the engine does not simulate inertia.
    pub inertia: bool,

    pub starting_index: usize,

    /// Exponential smoothing rate of the snap animation (recommended `0..=10`).
    pub snap_speed: f32,
    /// Distance under which a snap lands exactly on its target (recommended `0.01..=0.1`).
    pub snap_threshold: f32,

    pub on_item_init: Listeners<ItemInitListener>,
    pub on_item_center: Listeners<ItemCenterListener>,
    pub on_warning: Listeners<WarningListener>,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            init: ItemInit::default(),
            auto_layout: true,
            item_size_mode: ItemSizeMode::Custom,
            item_size: Vec2::new(120.0, 170.0),
            spacing: 20.0,
            content_size: Vec2::ZERO,
            infinite: false,
            inertia: false,
            starting_index: 0,
            snap_speed: 10.0,
            snap_threshold: 0.01,
            on_item_init: Listeners::new(),
            on_item_center: Listeners::new(),
            on_warning: Listeners::new(),
        }
    }
}

impl PanelOptions {
    /// Options for `count` host-created items.
    pub fn new(count: usize) -> Self {
        Self::default().with_init(ItemInit::Dynamic { count })
    }

    /// Options for pre-existing items at the given offsets.
    pub fn from_offsets(offsets: impl IntoIterator<Item = Vec2>) -> Self {
        Self::default().with_init(ItemInit::Static(offsets.into_iter().collect()))
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_init(mut self, init: ItemInit) -> Self {
        self.init = init;
        self
    }

    pub fn with_auto_layout(mut self, auto_layout: bool) -> Self {
        self.auto_layout = auto_layout;
        self
    }

    /// Uses an explicit item size ([`ItemSizeMode::Custom`]).
    pub fn with_item_size(mut self, width: f32, height: f32) -> Self {
        self.item_size_mode = ItemSizeMode::Custom;
        self.item_size = Vec2::new(width, height);
        self
    }

    pub fn with_item_size_mode(mut self, mode: ItemSizeMode) -> Self {
        self.item_size_mode = mode;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_content_size(mut self, content_size: Vec2) -> Self {
        self.content_size = content_size;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_inertia(mut self, inertia: bool) -> Self {
        self.inertia = inertia;
        self
    }

    pub fn with_starting_index(mut self, index: usize) -> Self {
        self.starting_index = index;
        self
    }

    pub fn with_snap(mut self, speed: f32, threshold: f32) -> Self {
        self.snap_speed = speed;
        self.snap_threshold = threshold;
        self
    }

    pub fn with_on_item_init(mut self, f: impl Fn(&Item) + Send + Sync + 'static) -> Self {
        self.on_item_init.push(Arc::new(f) as Arc<ItemInitListener>);
        self
    }

    pub fn with_on_item_center(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_item_center.push(Arc::new(f) as Arc<ItemCenterListener>);
        self
    }

    pub fn with_on_warning(
        mut self,
        f: impl Fn(&ConfigWarning) + Send + Sync + 'static,
    ) -> Self {
        self.on_warning.push(Arc::new(f) as Arc<WarningListener>);
        self
    }
}
