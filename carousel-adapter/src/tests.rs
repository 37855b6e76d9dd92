use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;
use carousel::{
    Curve, Effect, EffectEngine, EffectKind, PanelOptions, RotationAxis, ScaleAxis, ScrollPhase,
    Vec2, Vec3, Viewport,
};

#[derive(Clone, Debug, Default, PartialEq)]
struct Node {
    tag: u32,
    offset: Vec2,
    rotation: Vec3,
    scale: Vec3,
    depth: f32,
}

impl Node {
    fn at(tag: u32, x: f32, y: f32) -> Self {
        Self {
            tag,
            offset: Vec2::new(x, y),
            scale: Vec3::ONE,
            ..Self::default()
        }
    }
}

impl ItemHandle for Node {
    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn set_local_rotation_axis(&mut self, axis: RotationAxis, degrees: f32) {
        match axis {
            RotationAxis::X => self.rotation.x = degrees,
            RotationAxis::Y => self.rotation.y = degrees,
            RotationAxis::Z => self.rotation.z = degrees,
        }
    }

    fn set_local_scale_axis(&mut self, axis: ScaleAxis, value: f32) {
        match axis {
            ScaleAxis::X => self.scale.x = value,
            ScaleAxis::Y => self.scale.y = value,
        }
    }

    fn set_local_depth(&mut self, depth: f32) {
        self.depth = depth;
    }
}

#[derive(Debug, Default)]
struct Scene {
    viewport: Option<Viewport>,
    children: Vec<Node>,
    instantiated: Vec<(u32, usize)>,
    content_offset: Vec2,
    content_writes: usize,
}

impl Scene {
    fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Some(Viewport::new(width, height)),
            ..Self::default()
        }
    }
}

impl ScrollHost for Scene {
    type Item = Node;
    type Prefab = u32;

    fn viewport(&self) -> Viewport {
        self.viewport.unwrap_or_default()
    }

    fn take_children(&mut self) -> Vec<Node> {
        core::mem::take(&mut self.children)
    }

    fn instantiate(&mut self, prefab: &u32, index: usize) -> Node {
        self.instantiated.push((*prefab, index));
        Node::at(*prefab, 0.0, 0.0)
    }

    fn set_content_offset(&mut self, offset: Vec2) {
        self.content_offset = offset;
        self.content_writes += 1;
    }
}

fn five_items() -> PanelOptions {
    PanelOptions::default()
        .with_item_size(100.0, 150.0)
        .with_spacing(20.0)
}

#[test]
fn static_children_keep_manual_offsets() {
    let mut scene = Scene::new(200.0, 100.0);
    scene.children = vec![
        Node::at(1, -50.0, 0.0),
        Node::at(2, 5.0, 0.0),
        Node::at(3, 60.0, 0.0),
    ];

    let c = Controller::new(
        scene,
        PanelOptions::default().with_auto_layout(false),
        InitMode::Static,
        EffectEngine::new(),
    );

    assert_eq!(c.panel().item_count(), 3);
    let xs: Vec<f32> = c.items().iter().map(|n| n.offset.x).collect();
    assert_eq!(xs, vec![-50.0, 5.0, 60.0]);
    // Starting index 0 is centered: center(100) - offset(-50).
    assert_eq!(c.host().content_offset, Vec2::new(150.0, 0.0));
    assert!(c.host().children.is_empty());
}

#[test]
fn static_children_are_auto_laid_out() {
    let mut scene = Scene::new(300.0, 200.0);
    scene.children = (0..5).map(|i| Node::at(i, 999.0, 999.0)).collect();

    let c = Controller::new(scene, five_items(), InitMode::Static, EffectEngine::new());
    let offsets: Vec<Vec2> = c.items().iter().map(|n| n.offset).collect();
    assert_eq!(
        offsets,
        vec![
            Vec2::new(50.0, 0.0),
            Vec2::new(170.0, 0.0),
            Vec2::new(290.0, 0.0),
            Vec2::new(410.0, 0.0),
            Vec2::new(530.0, 0.0),
        ]
    );
    let tags: Vec<u32> = c.items().iter().map(|n| n.tag).collect();
    assert_eq!(tags, vec![0, 1, 2, 3, 4]);
}

#[test]
fn dynamic_mode_instantiates_and_initializes_each_item() {
    let mut inits = Vec::new();
    let c = Controller::with_item_init(
        Scene::new(300.0, 200.0),
        five_items(),
        InitMode::Dynamic {
            prefab: 7,
            count: 4,
        },
        EffectEngine::new(),
        |node: &mut Node, index| {
            node.depth = index as f32;
            inits.push((index, node.offset.x));
        },
    );

    assert_eq!(c.host().instantiated, vec![(7, 0), (7, 1), (7, 2), (7, 3)]);
    assert_eq!(inits, vec![(0, 50.0), (1, 170.0), (2, 290.0), (3, 410.0)]);
    assert_eq!(c.items()[3].depth, 3.0);
    assert!(c.items().iter().all(|n| n.tag == 7));
}

#[test]
fn handle_init_runs_before_the_starting_item_is_centered() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let centers = Arc::clone(&events);
    let options = five_items()
        .with_starting_index(2)
        .with_on_item_center(move |i| centers.lock().unwrap().push(("center", i)));

    let c = Controller::with_item_init(
        Scene::new(300.0, 200.0),
        options,
        InitMode::Dynamic {
            prefab: 0,
            count: 5,
        },
        EffectEngine::new(),
        |node: &mut Node, index| {
            // Handles see their laid-out offset, but the content has not been moved yet.
            assert_eq!(node.offset.x, 50.0 + 120.0 * index as f32);
            events.lock().unwrap().push(("init", index));
        },
    );

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            ("init", 0),
            ("init", 1),
            ("init", 2),
            ("init", 3),
            ("init", 4),
            ("center", 2),
        ]
    );
    assert_eq!(c.center_index(), 2);
    assert_eq!(c.phase(), ScrollPhase::Snapping);
    assert_eq!(c.host().content_offset, Vec2::new(150.0 - 290.0, 0.0));
    assert_eq!(c.host().content_writes, 1);
}

#[test]
fn tick_settles_and_pushes_effects_to_handles() {
    let effects = EffectEngine::new()
        .with_effect(
            Effect::new(EffectKind::ScaleY)
                .with_curve(Some(Curve::linear([(-240.0, 0.5), (0.0, 1.0), (240.0, 0.5)]))),
        )
        .with_effect(
            Effect::new(EffectKind::RotationZ)
                .with_curve(Some(Curve::linear([(-120.0, 10.0), (120.0, -10.0)]))),
        )
        .with_effect(Effect::new(EffectKind::Depth).with_curve(Some(Curve::constant(-4.0))));

    let mut c = Controller::new(
        Scene::new(300.0, 200.0),
        five_items().with_starting_index(1),
        InitMode::Dynamic {
            prefab: 0,
            count: 5,
        },
        effects,
    );
    assert_eq!(c.phase(), ScrollPhase::Snapping);
    assert!(c.tick(1.0 / 60.0).is_some());
    assert_eq!(c.phase(), ScrollPhase::Idle);
    assert_eq!(c.host().content_offset, Vec2::new(150.0 - 170.0, 0.0));

    // Distances from center are [-120, 0, 120, 240, 360].
    let items = c.items();
    assert_eq!(items[1].scale, Vec3::new(1.0, 1.0, 1.0));
    assert!((items[0].scale.y - 0.75).abs() < 1e-3);
    assert!((items[3].scale.y - 0.5).abs() < 1e-3);
    assert_eq!(items[4].scale.y, 0.5);
    assert_eq!(items[0].rotation.z, 10.0);
    assert_eq!(items[2].rotation.z, -10.0);
    assert!(items.iter().all(|n| n.depth == -4.0));

    // Settled: further ticks do not touch the content offset.
    let writes = c.host().content_writes;
    assert_eq!(c.tick(1.0 / 60.0), None);
    assert_eq!(c.host().content_writes, writes);
}

#[test]
fn drag_pushes_wrapped_offsets_and_snaps() {
    let mut c = Controller::new(
        Scene::new(300.0, 200.0),
        five_items().with_infinite(true),
        InitMode::Dynamic {
            prefab: 0,
            count: 5,
        },
        EffectEngine::new(),
    );
    assert!(c.panel().is_infinite());

    c.on_pointer_down();
    c.on_drag_begin();
    let start = c.panel().content_offset();
    // Dragging right by 250 moves items 1 through 4 past the trailing half of the content.
    c.on_drag(start + Vec2::new(250.0, 0.0));
    let xs: Vec<f32> = c.items().iter().map(|n| n.offset.x).collect();
    // Distances were [250, 370, 490, 610, 730]; everything beyond 290 wraps back by 600.
    assert_eq!(xs, vec![50.0, -430.0, -310.0, -190.0, -70.0]);

    c.on_drag_end();
    c.on_pointer_up();
    // Item 3 now sits 10 units right of center.
    assert_eq!(c.center_index(), 3);
    assert_eq!(c.phase(), ScrollPhase::Snapping);

    let mut ticks = 0;
    while c.phase() != ScrollPhase::Idle {
        c.tick(1.0 / 60.0);
        ticks += 1;
        assert!(ticks < 10_000);
    }
    assert_eq!(c.host().content_offset, Vec2::new(340.0, 0.0));
    assert_eq!(c.panel().item_distance(3), 0.0);
    assert_eq!(c.items()[3].offset, Vec2::new(-190.0, 0.0));
}

#[test]
fn refresh_viewport_reads_the_host() {
    let mut c = Controller::new(
        Scene::new(300.0, 200.0),
        five_items(),
        InitMode::Dynamic {
            prefab: 0,
            count: 5,
        },
        EffectEngine::new(),
    );
    c.host_mut().viewport =
        Some(Viewport::new(300.0, 200.0).with_world_center(Vec2::new(40.0, 0.0)));
    c.refresh_viewport();
    assert_eq!(c.panel().viewport().world_center, Vec2::new(40.0, 0.0));
    assert_eq!(c.panel().item_world_position(0), Vec2::new(40.0, 0.0));
}
