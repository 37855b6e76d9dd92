use crate::{ScrollPhase, Vec2};

/// The drag/snap state machine.
///
/// Holds the input flags and the snap target; the content offset itself lives with the caller
/// and is threaded through [`SnapMachine::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SnapMachine {
    pressing: bool,
    dragging: bool,
    snapping: bool,
    target: Vec2,
    center_index: usize,
}

impl SnapMachine {
    pub fn new(center_index: usize) -> Self {
        Self {
            center_index,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        if self.dragging {
            ScrollPhase::Dragging
        } else if self.pressing {
            ScrollPhase::Pressing
        } else if self.snapping {
            ScrollPhase::Snapping
        } else {
            ScrollPhase::Idle
        }
    }

    pub fn is_pressing(&self) -> bool {
        self.pressing
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_snapping(&self) -> bool {
        self.snapping
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn center_index(&self) -> usize {
        self.center_index
    }

    pub fn pointer_down(&mut self) {
        self.pressing = true;
    }

    pub fn pointer_up(&mut self) {
        self.pressing = false;
    }

    /// Starts a drag. Cancels any in-flight snap.
    pub fn drag_begin(&mut self) {
        self.snapping = false;
        self.dragging = true;
    }

    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// Retargets the machine at `index`, whose content offset is `target`.
    pub fn snap(&mut self, index: usize, target: Vec2) {
        self.center_index = index;
        self.target = target;
        self.snapping = true;
    }

    pub(crate) fn restore(&mut self, center_index: usize, target: Vec2, snapping: bool) {
        self.center_index = center_index;
        self.target = target;
        self.snapping = snapping;
    }

    /// Whether a tick should animate: snapping with no press or drag in progress.
    pub fn should_animate(&self) -> bool {
        self.snapping && !self.pressing && !self.dragging
    }

    /// Advances `offset` toward the target by exponential smoothing.
    ///
    /// `offset <- lerp(offset, target, dt * speed)`; once within `threshold` the offset lands
    /// exactly on the target and snapping ends. Does nothing unless [`Self::should_animate`].
    pub fn step(&mut self, offset: Vec2, dt: f32, speed: f32, threshold: f32) -> Vec2 {
        if !self.should_animate() {
            return offset;
        }
        let next = offset.lerp(self.target, dt * speed);
        if next.distance(self.target) < threshold {
            ctrace!(index = self.center_index, "SnapMachine: settled");
            self.snapping = false;
            return self.target;
        }
        next
    }
}

/// Index of the smallest absolute distance. Ties keep the lowest index.
///
/// Returns `None` for an empty input.
pub fn nearest(distances: impl IntoIterator<Item = f32>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, d) in distances.into_iter().enumerate() {
        let d = crate::math::abs(d);
        match best {
            Some((_, min)) if d >= min => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
