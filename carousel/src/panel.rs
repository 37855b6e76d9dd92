use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::emitter::ItemCenterListener;
use crate::layout::{LayoutParams, layout};
use crate::snap::{SnapMachine, nearest};
use crate::warning::MIN_INFINITE_ITEMS;
use crate::{
    Axis, ConfigWarning, InfiniteWrap, Item, ItemSizeMode, ItemSource, PanelOptions, PanelState,
    ScrollPhase, Vec2, Viewport,
};

/// A headless carousel panel.
///
/// The panel owns item offsets and the content offset. It holds no UI objects:
/// - the host reports viewport geometry and pointer input
/// - the host calls [`ScrollPanel::tick`] once per frame with the elapsed time
/// - the host reads back offsets (and, through an [`crate::EffectEngine`], effect values) and
///   applies them to its own drawables
///
/// Dragging itself is integrated by the host scroll surface: it reports the resulting content
/// offset through [`ScrollPanel::on_drag`], and the panel only corrects items for wraparound.
#[derive(Clone, Debug)]
pub struct ScrollPanel {
    options: PanelOptions,
    viewport: Viewport,
    item_size: Vec2,
    items: Vec<Item>,
    content_offset: Vec2,
    content_size: Vec2,
    wrap: Option<InfiniteWrap>,
    snap: SnapMachine,
    warnings: Vec<ConfigWarning>,
}

/// Geometry needed to place items in world space, detached from the item storage so it can be
/// used while items are borrowed mutably.
#[derive(Clone, Copy, Debug)]
struct Frame {
    axis: Axis,
    viewport: Viewport,
    content_offset: Vec2,
    center: Vec2,
}

impl Frame {
    fn world_position(&self, item_offset: Vec2) -> Vec2 {
        let local = self.content_offset + item_offset - self.center;
        self.viewport.world_center + local.scale(self.viewport.content_scale)
    }

    fn distance_from_center(&self, point: Vec2) -> f32 {
        let rel = point - self.viewport.world_center;
        let scale = self.viewport.ancestor_scale;
        match self.axis {
            Axis::Horizontal => rel.x / scale.x,
            Axis::Vertical => rel.y / scale.y,
            Axis::Free => rel.length() / scale.x,
        }
    }

    fn item_distance(&self, item_offset: Vec2) -> f32 {
        self.distance_from_center(self.world_position(item_offset))
    }
}

impl ScrollPanel {
    /// Creates the items, lays them out, and centers the starting item.
    ///
    /// `on_item_init` listeners fire once per item (in index order), then `on_item_center`
    /// fires for the starting index. The panel starts in [`ScrollPhase::Snapping`] and settles
    /// on the first tick.
    ///
    /// # Panics
    ///
    /// If there is at least one item and `starting_index` is out of range.
    pub fn new(options: PanelOptions, viewport: Viewport) -> Self {
        let mut panel = Self::unstarted(options, viewport);
        panel.start();
        panel
    }

    /// Creates and lays out the items without centering the starting item.
    ///
    /// `on_item_init` listeners have fired; `on_item_center` has not. The content offset is
    /// zero and the panel is [`ScrollPhase::Idle`] until [`ScrollPanel::start`] is called.
    /// Hosts that initialize their own drawables per item use this so that their setup runs
    /// before the first centering notification.
    pub fn unstarted(options: PanelOptions, viewport: Viewport) -> Self {
        let item_size = match options.item_size_mode {
            ItemSizeMode::Custom => options.item_size,
            ItemSizeMode::Fit => viewport.size,
        };
        let items = options.init.build();
        cdebug!(
            axis = ?options.axis,
            count = items.len(),
            infinite = options.infinite,
            auto_layout = options.auto_layout,
            "ScrollPanel::new"
        );

        let mut panel = Self {
            viewport,
            item_size,
            items,
            content_offset: Vec2::ZERO,
            content_size: options.content_size,
            wrap: None,
            snap: SnapMachine::new(options.starting_index),
            warnings: Vec::new(),
            options,
        };

        panel.layout_items();
        for item in &panel.items {
            for listener in panel.options.on_item_init.iter() {
                listener(item);
            }
        }
        panel.setup_infinite();
        panel
    }

    /// Jumps the content to the starting item and snaps to it (firing `on_item_center`).
    ///
    /// Does nothing when there are no items.
    ///
    /// # Panics
    ///
    /// If `starting_index` is out of range.
    pub fn start(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let start = self.options.starting_index;
        assert!(
            start < self.items.len(),
            "ScrollPanel: starting index {start} out of range (count {})",
            self.items.len()
        );
        self.content_offset = self.center_offset() - self.items[start].offset();
        self.snap_to(start);
    }

    fn layout_items(&mut self) {
        if self.options.auto_layout && self.options.axis == Axis::Free {
            self.warn(ConfigWarning::AutoLayoutIgnoredOnFreeAxis);
        }
        let params = LayoutParams {
            axis: self.options.axis,
            item_size: self.item_size,
            spacing: self.options.spacing,
            auto_layout: self.options.auto_layout,
        };
        if let Some(size) = layout(&mut self.items, &params) {
            self.content_size = size;
        }
    }

    fn setup_infinite(&mut self) {
        if !self.options.infinite {
            return;
        }
        let count = self.items.len();
        let refused = if self.options.axis == Axis::Free {
            Some(ConfigWarning::InfiniteUnsupportedOnFreeAxis)
        } else if !self.options.auto_layout {
            Some(ConfigWarning::InfiniteRequiresAutoLayout)
        } else if count < MIN_INFINITE_ITEMS {
            Some(ConfigWarning::InfiniteTooFewItems { count })
        } else {
            None
        };
        if let Some(warning) = refused {
            self.warn(warning);
            return;
        }
        self.wrap = InfiniteWrap::from_content(
            self.options.axis,
            self.content_size,
            self.scaled_content_size(),
            self.options.spacing,
        );
    }

    fn warn(&mut self, warning: ConfigWarning) {
        cwarn!(warning = %warning, "ScrollPanel: configuration warning");
        for listener in self.options.on_warning.iter() {
            listener(&warning);
        }
        self.warnings.push(warning);
    }

    fn frame(&self) -> Frame {
        Frame {
            axis: self.options.axis,
            viewport: self.viewport,
            content_offset: self.content_offset,
            center: self.center_offset(),
        }
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates viewport geometry (e.g. after a resize or a scale change).
    ///
    /// Item sizes resolved with [`ItemSizeMode::Fit`] are not re-laid out.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.wrap.is_some() {
            self.wrap = InfiniteWrap::from_content(
                self.options.axis,
                self.content_size,
                self.scaled_content_size(),
                self.options.spacing,
            );
        }
    }

    /// The viewport center in content-anchor space; the content offset that centers an item is
    /// `center_offset() - item.offset()`.
    pub fn center_offset(&self) -> Vec2 {
        self.viewport.center_offset(self.options.axis)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The resolved per-item size.
    pub fn item_size(&self) -> Vec2 {
        self.item_size
    }

    pub fn content_offset(&self) -> Vec2 {
        self.content_offset
    }

    /// Overrides the content offset, e.g. when the host scroll surface moves content on its own
    /// (inertia). Does not change the scroll phase.
    pub fn set_content_offset(&mut self, offset: Vec2) {
        self.content_offset = offset;
    }

    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    /// Content size in distance-from-center units.
    pub fn scaled_content_size(&self) -> Vec2 {
        self.content_size
            .scale(self.viewport.content_scale)
            .unscale(self.viewport.ancestor_scale)
    }

    /// Whether infinite wrap is active (it may have been refused at construction).
    pub fn is_infinite(&self) -> bool {
        self.wrap.is_some()
    }

    pub fn wrap(&self) -> Option<&InfiniteWrap> {
        self.wrap.as_ref()
    }

    /// Whether the host scroll surface should apply inertia.
    pub fn inertia(&self) -> bool {
        self.options.inertia
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn center_index(&self) -> usize {
        self.snap.center_index()
    }

    pub fn target_offset(&self) -> Vec2 {
        self.snap.target()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.snap.phase()
    }

    pub fn is_pressing(&self) -> bool {
        self.snap.is_pressing()
    }

    pub fn is_dragging(&self) -> bool {
        self.snap.is_dragging()
    }

    pub fn is_snapping(&self) -> bool {
        self.snap.is_snapping()
    }

    /// World position of item `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn item_world_position(&self, index: usize) -> Vec2 {
        self.frame().world_position(self.items[index].offset())
    }

    /// Distance of a world-space point from the viewport center.
    ///
    /// Horizontal/vertical panels return the signed axial offset; free panels the Euclidean
    /// distance. Both are divided by the ancestor scale.
    pub fn distance_from_center(&self, point: Vec2) -> f32 {
        self.frame().distance_from_center(point)
    }

    /// Distance of item `index` from the viewport center.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn item_distance(&self, index: usize) -> f32 {
        self.frame().item_distance(self.items[index].offset())
    }

    pub fn add_on_item_center(&mut self, f: impl Fn(usize) + Send + Sync + 'static) {
        self.options
            .on_item_center
            .push(Arc::new(f) as Arc<ItemCenterListener>);
    }

    pub fn on_pointer_down(&mut self) {
        self.snap.pointer_down();
    }

    pub fn on_pointer_up(&mut self) {
        self.snap.pointer_up();
    }

    /// Starts a drag. Cancels any in-flight snap.
    pub fn on_drag_begin(&mut self) {
        self.snap.drag_begin();
    }

    /// Applies the content offset produced by the host's drag handling and recycles items.
    pub fn on_drag(&mut self, content_offset: Vec2) {
        self.content_offset = content_offset;
        self.wrap_items();
    }

    /// Ends a drag and snaps to the nearest item.
    pub fn on_drag_end(&mut self) {
        self.snap.drag_end();
        self.snap_to_nearest();
    }

    /// Snaps to the item closest to the viewport center (lowest index on ties).
    ///
    /// Returns the chosen index, or `None` when there are no items.
    pub fn snap_to_nearest(&mut self) -> Option<usize> {
        let frame = self.frame();
        let index = nearest(self.items.iter().map(|it| frame.item_distance(it.offset())))?;
        self.snap_to(index);
        Some(index)
    }

    /// Makes `index` the center item and starts animating toward it.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn snap_to(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "ScrollPanel::snap_to: index {index} out of range (count {})",
            self.items.len()
        );
        let target = self.center_offset() - self.items[index].offset();
        ctrace!(index, target_x = target.x, target_y = target.y, "ScrollPanel::snap_to");
        self.snap.snap(index, target);
        for listener in self.options.on_item_center.iter() {
            listener(index);
        }
    }

    /// Runs one wrap correction pass. Returns how many items moved.
    pub fn wrap_items(&mut self) -> usize {
        let Some(wrap) = self.wrap else {
            return 0;
        };
        let frame = self.frame();
        wrap.apply(&mut self.items, |item| frame.item_distance(item.offset()))
    }

    /// Advances the snap animation by `dt` seconds.
    ///
    /// Only animates while snapping with no press or drag in progress. Returns the new content
    /// offset when it was updated.
    pub fn tick(&mut self, dt: f32) -> Option<Vec2> {
        if self.items.is_empty() || !self.snap.should_animate() {
            return None;
        }
        self.wrap_items();
        self.content_offset = self.snap.step(
            self.content_offset,
            dt,
            self.options.snap_speed,
            self.options.snap_threshold,
        );
        Some(self.content_offset)
    }

    /// Returns a snapshot of the scroll position.
    pub fn state(&self) -> PanelState {
        PanelState {
            content_offset: self.content_offset,
            target_offset: self.snap.target(),
            center_index: self.snap.center_index(),
            snapping: self.snap.is_snapping(),
            item_offsets: self.items.iter().map(Item::offset).collect(),
        }
    }

    /// Restores a snapshot taken from a panel with the same items.
    ///
    /// Pointer and drag flags are not part of the snapshot and are left as they are.
    ///
    /// # Panics
    ///
    /// If the snapshot's item count differs from the panel's, or its center index is out of
    /// range for a non-empty panel.
    pub fn restore_state(&mut self, state: &PanelState) {
        assert_eq!(
            state.item_offsets.len(),
            self.items.len(),
            "ScrollPanel::restore_state: item count mismatch"
        );
        assert!(
            self.items.is_empty() || state.center_index < self.items.len(),
            "ScrollPanel::restore_state: center index {} out of range",
            state.center_index
        );
        for (item, &offset) in self.items.iter_mut().zip(&state.item_offsets) {
            item.set_offset(offset);
        }
        self.content_offset = state.content_offset;
        self.snap
            .restore(state.center_index, state.target_offset, state.snapping);
    }
}

impl ItemSource for ScrollPanel {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_world_position(&self, index: usize) -> Vec2 {
        ScrollPanel::item_world_position(self, index)
    }

    fn distance_from_center(&self, point: Vec2) -> f32 {
        ScrollPanel::distance_from_center(self, point)
    }
}

