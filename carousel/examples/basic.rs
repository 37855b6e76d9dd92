// Example: an infinite horizontal carousel driven by a simulated drag, then snapped.
use carousel::{
    Curve, Effect, EffectEngine, EffectKind, ItemTransform, PanelOptions, ScrollPanel, Vec2,
    Viewport,
};

fn main() {
    let opts = PanelOptions::new(8)
        .with_item_size(120.0, 170.0)
        .with_spacing(20.0)
        .with_infinite(true)
        .with_on_item_center(|i| println!("centered: {i}"));
    let mut panel = ScrollPanel::new(opts, Viewport::new(480.0, 240.0));

    let effects = EffectEngine::new()
        .with_effect(
            Effect::new(EffectKind::ScaleX)
                .with_curve(Some(Curve::smooth([(-280.0, 0.7), (0.0, 1.0), (280.0, 0.7)]))),
        )
        .with_effect(
            Effect::new(EffectKind::RotationY)
                .with_curve(Some(Curve::linear([(-280.0, 30.0), (280.0, -30.0)]))),
        );
    let mut transforms = vec![ItemTransform::default(); panel.item_count()];

    // Simulate a host scroll surface: 30 frames of a leftward drag.
    panel.on_pointer_down();
    panel.on_drag_begin();
    for _ in 0..30 {
        let next = panel.content_offset() - Vec2::new(25.0, 0.0);
        panel.on_drag(next);
    }
    panel.on_drag_end();
    panel.on_pointer_up();

    let mut frame = 0u32;
    while panel.is_snapping() {
        let dt = 1.0 / 60.0;
        panel.tick(dt);
        effects.apply(&panel, &mut transforms[..]);
        frame += 1;
        if frame % 10 == 0 {
            let c = panel.center_index();
            println!(
                "frame={frame} offset={:.2} center={c} scale_x={:.3} rot_y={:.2}",
                panel.content_offset().x,
                transforms[c].scale.x,
                transforms[c].rotation.y,
            );
        }
    }

    println!(
        "settled: center={} offset={:?} phase={:?}",
        panel.center_index(),
        panel.content_offset(),
        panel.phase()
    );
}
