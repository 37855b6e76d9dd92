use alloc::vec::Vec;
use core::fmt;

use carousel::{EffectEngine, PanelOptions, ScrollPanel, ScrollPhase, Vec2};

use crate::host::Handles;
use crate::{InitMode, ItemHandle, ScrollHost};

/// A framework-neutral controller that wraps a `carousel::ScrollPanel` and an
/// `carousel::EffectEngine` and keeps a host scene in sync with them.
///
/// Adapters drive it by calling:
/// - the pointer entry points (`on_pointer_down`, `on_drag_begin`, `on_drag`, ...) as UI events
///   arrive
/// - `tick(dt)` once per frame
///
/// After every call that can move items, the controller writes item offsets to the handles and
/// the content offset to the host.
pub struct Controller<H: ScrollHost> {
    panel: ScrollPanel,
    effects: EffectEngine,
    host: H,
    items: Vec<H::Item>,
}

impl<H: ScrollHost> Controller<H> {
    pub fn new(
        host: H,
        options: PanelOptions,
        init: InitMode<H::Prefab>,
        effects: EffectEngine,
    ) -> Self {
        Self::with_item_init(host, options, init, effects, |_, _| {})
    }

    /// Like [`Controller::new`], calling `on_item_init(handle, index)` once per item after it
    /// has been laid out and before the panel snaps to its starting item.
    pub fn with_item_init(
        mut host: H,
        mut options: PanelOptions,
        init: InitMode<H::Prefab>,
        effects: EffectEngine,
        mut on_item_init: impl FnMut(&mut H::Item, usize),
    ) -> Self {
        let mut items = match init {
            InitMode::Static => host.take_children(),
            InitMode::Dynamic { prefab, count } => (0..count)
                .map(|i| host.instantiate(&prefab, i))
                .collect(),
        };
        options.init = carousel::ItemInit::Static(items.iter().map(ItemHandle::offset).collect());

        // Handles are set up before the starting item is announced as centered.
        let mut panel = ScrollPanel::unstarted(options, host.viewport());
        for (item, state) in items.iter_mut().zip(panel.items()) {
            item.set_offset(state.offset());
            on_item_init(item, state.index());
        }
        panel.start();
        host.set_content_offset(panel.content_offset());

        Self {
            panel,
            effects,
            host,
            items,
        }
    }

    pub fn panel(&self) -> &ScrollPanel {
        &self.panel
    }

    pub fn effects(&self) -> &EffectEngine {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut EffectEngine {
        &mut self.effects
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn items(&self) -> &[H::Item] {
        &self.items
    }

    pub fn into_parts(self) -> (ScrollPanel, EffectEngine, H, Vec<H::Item>) {
        (self.panel, self.effects, self.host, self.items)
    }

    pub fn center_index(&self) -> usize {
        self.panel.center_index()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.panel.phase()
    }

    /// Re-reads viewport geometry from the host (call after resizes or scale changes).
    pub fn refresh_viewport(&mut self) {
        self.panel.set_viewport(self.host.viewport());
    }

    pub fn on_pointer_down(&mut self) {
        self.panel.on_pointer_down();
    }

    pub fn on_pointer_up(&mut self) {
        self.panel.on_pointer_up();
    }

    pub fn on_drag_begin(&mut self) {
        self.panel.on_drag_begin();
    }

    /// Call this with the content offset the host scroll surface produced for a drag step.
    pub fn on_drag(&mut self, content_offset: Vec2) {
        self.panel.on_drag(content_offset);
        self.sync_items();
    }

    pub fn on_drag_end(&mut self) {
        self.panel.on_drag_end();
    }

    /// Starts snapping to `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn snap_to(&mut self, index: usize) {
        self.panel.snap_to(index);
    }

    /// Advances the snap animation, then pushes offsets and effect values to the host.
    ///
    /// Returns the new content offset when the snap animation moved it.
    pub fn tick(&mut self, dt: f32) -> Option<Vec2> {
        let moved = self.panel.tick(dt);
        self.sync_items();
        if let Some(offset) = moved {
            self.host.set_content_offset(offset);
        }
        self.apply_effects();
        moved
    }

    /// Runs one effect pass against the handles without advancing the animation.
    pub fn apply_effects(&mut self) {
        self.effects
            .apply(&self.panel, &mut Handles(&mut self.items[..]));
    }

    fn sync_items(&mut self) {
        for (item, state) in self.items.iter_mut().zip(self.panel.items()) {
            item.set_offset(state.offset());
        }
    }
}

impl<H: ScrollHost> fmt::Debug for Controller<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("panel", &self.panel)
            .field("effects", &self.effects)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}
