use carousel::{
    Curve, Effect, EffectEngine, EffectKind, PanelOptions, RotationAxis, ScaleAxis, Vec2,
    Viewport,
};
use carousel_adapter::{Controller, InitMode, ItemHandle, ScrollHost};

#[derive(Debug, Default)]
struct Card {
    label: String,
    offset: Vec2,
    tilt: f32,
    scale_y: f32,
}

impl ItemHandle for Card {
    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn set_local_rotation_axis(&mut self, axis: RotationAxis, degrees: f32) {
        if axis == RotationAxis::Y {
            self.tilt = degrees;
        }
    }

    fn set_local_scale_axis(&mut self, axis: ScaleAxis, value: f32) {
        if axis == ScaleAxis::Y {
            self.scale_y = value;
        }
    }

    fn set_local_depth(&mut self, _depth: f32) {}
}

struct Stage {
    width: f32,
    content_offset: Vec2,
}

impl ScrollHost for Stage {
    type Item = Card;
    type Prefab = &'static str;

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, 240.0)
    }

    fn take_children(&mut self) -> Vec<Card> {
        Vec::new()
    }

    fn instantiate(&mut self, prefab: &&'static str, index: usize) -> Card {
        Card {
            label: format!("{prefab}-{index}"),
            scale_y: 1.0,
            ..Card::default()
        }
    }

    fn set_content_offset(&mut self, offset: Vec2) {
        self.content_offset = offset;
    }
}

fn main() {
    // Example: a host scene (cards on a stage) driven by the adapter controller.
    //
    // The host:
    // - integrates pointer motion into a content offset and reports it via `on_drag`
    // - calls `tick(dt)` every frame
    // - reads card offsets and transforms back (here: prints them)
    let effects = EffectEngine::new()
        .with_effect(
            Effect::new(EffectKind::ScaleY)
                .with_curve(Some(Curve::smooth([(-300.0, 0.8), (0.0, 1.0), (300.0, 0.8)]))),
        )
        .with_effect(
            Effect::new(EffectKind::RotationY)
                .with_curve(Some(Curve::linear([(-300.0, 25.0), (300.0, -25.0)]))),
        );

    let mut c = Controller::with_item_init(
        Stage {
            width: 600.0,
            content_offset: Vec2::ZERO,
        },
        PanelOptions::default()
            .with_infinite(true)
            .with_starting_index(2),
        InitMode::Dynamic {
            prefab: "card",
            count: 6,
        },
        effects,
        |card: &mut Card, index| {
            println!("init {} at {:?} (index {index})", card.label, card.offset);
        },
    );

    c.on_pointer_down();
    c.on_drag_begin();
    for _ in 0..20 {
        let next = c.panel().content_offset() + Vec2::new(18.0, 0.0);
        c.on_drag(next);
    }
    c.on_drag_end();
    c.on_pointer_up();
    println!("released: snapping to {}", c.center_index());

    let mut frames = 0u32;
    while c.panel().is_snapping() {
        c.tick(1.0 / 60.0);
        frames += 1;
    }

    println!(
        "settled after {frames} frames: stage offset={:?}",
        c.host().content_offset
    );
    for card in c.items() {
        println!(
            "{:>7} x={:>8.2} tilt={:>6.2} scale_y={:.3}",
            card.label, card.offset.x, card.tilt, card.scale_y
        );
    }
}
