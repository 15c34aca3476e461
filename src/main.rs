//! Headless drag and drop session.
//!
//! Builds a small scene with two world zones and one overlay slot, then plays a
//! scripted pointer session through the router and the frame tick, logging
//! every step. Pass a JSON config path as the first argument to override the
//! defaults; `RUST_LOG` controls verbosity.

use anyhow::{Context, Result};
use dragdrop::{
    Camera, DragBehavior, DragConfig, DragContext, Draggable, DropZone, OverlayRect, Placement,
    PointerEvent, PointerRouter, RawPointer, Scene,
};
use glam::{Vec2, Vec3};
use tracing::info;

/// Seconds per simulated frame
const FRAME: f32 = 1.0 / 60.0;

struct Crate;

impl DragBehavior for Crate {
    fn tap(&mut self) {
        info!("crate tapped");
    }

    fn double_tap(&mut self) {
        info!("crate double tapped");
    }

    fn start_drag(&mut self) {
        info!("crate picked up");
    }

    fn end_drag(&mut self) {
        info!("crate let go");
    }

    fn drop_on_drop_zone(&mut self, zone: &DropZone) {
        info!(zone = %zone.name, "crate placed");
    }
}

fn main() -> Result<()> {
    dragdrop::logging::init("info");

    let config = match std::env::args().nth(1) {
        Some(path) => DragConfig::load(&path).with_context(|| format!("loading config from {path}"))?,
        None => DragConfig::default(),
    };
    info!(?config, "Starting drag and drop session");

    // 100x100 px viewport over a 100x100 world window, world = screen - 50
    let camera = Camera::orthographic(Vec3::new(0.0, 0.0, 10.0), 50.0, Vec2::new(100.0, 100.0));
    let mut scene = Scene::new(camera).with_canvas(OverlayRect::new(Vec2::ZERO, Vec2::new(100.0, 100.0)));
    let shelf = scene.add_zone_2d("shelf", Vec3::new(20.0, 20.0, 0.0), Vec2::splat(5.0));
    let _bin = scene.add_zone_3d("bin", Vec3::new(-20.0, 20.0, 0.0), Vec3::splat(5.0));
    let slot = scene.add_overlay_zone("slot", Vec2::new(80.0, 80.0), Vec2::splat(8.0), 0);

    let mut item = Draggable::new("crate", Placement::World(Vec3::ZERO), config, Crate);
    let mut router = PointerRouter::from_config(&config);

    let ctx = scene.context();

    info!("-- tap");
    run(&mut router, &mut item, &ctx, &[(50.0, 50.0)]);
    settle(&mut item, &ctx, config.tap_window + FRAME);

    info!("-- drag onto the shelf");
    run(&mut router, &mut item, &ctx, &[(50.0, 50.0), (60.0, 60.0), (70.0, 70.0)]);
    settle(&mut item, &ctx, config.settle_duration + FRAME);
    info!(position = ?item.position(), current = ?item.current_drop_zone(), "After shelf drop");

    info!("-- drag onto the bin");
    run(&mut router, &mut item, &ctx, &[(70.0, 70.0), (50.0, 70.0), (30.0, 70.0)]);
    settle(&mut item, &ctx, config.settle_duration + FRAME);
    info!(
        current = ?item.current_drop_zone(),
        previous = ?item.previous_drop_zone(),
        "After bin drop"
    );

    info!("-- release over nothing");
    run(&mut router, &mut item, &ctx, &[(30.0, 70.0), (30.0, 40.0), (50.0, 10.0)]);
    settle(&mut item, &ctx, config.settle_duration + FRAME);
    info!(position = ?item.position(), current = ?item.current_drop_zone(), "Returned");
    anyhow::ensure!(
        item.current_drop_zone() == Some(shelf),
        "expected the crate back on the shelf"
    );

    info!("-- overlay card into the slot");
    let mut card = Draggable::new(
        "card",
        Placement::Overlay {
            position: Vec2::new(20.0, 20.0),
            canvas: scene.canvas(),
        },
        config,
        (),
    );
    run(&mut router, &mut card, &ctx, &[(20.0, 20.0), (50.0, 50.0), (80.0, 80.0)]);
    settle(&mut card, &ctx, config.settle_duration + FRAME);
    info!(position = ?card.position(), current = ?card.current_drop_zone(), "Card placed");
    anyhow::ensure!(card.current_drop_zone() == Some(slot), "expected the card in the slot");

    info!("Session finished");
    Ok(())
}

/// Press at the first point, move through the rest, release at the last.
fn run<B: DragBehavior>(
    router: &mut PointerRouter,
    target: &mut Draggable<B>,
    ctx: &DragContext<'_>,
    path: &[(f32, f32)],
) {
    let Some((&(x, y), rest)) = path.split_first() else {
        return;
    };
    router.feed(&RawPointer::Pressed(PointerEvent::at(x, y)), target, ctx);
    target.tick(FRAME, ctx);
    let mut last = (x, y);
    for &(x, y) in rest {
        router.feed(&RawPointer::Moved(PointerEvent::at(x, y)), target, ctx);
        target.tick(FRAME, ctx);
        last = (x, y);
    }
    router.feed(&RawPointer::Released(PointerEvent::at(last.0, last.1)), target, ctx);
}

/// Tick until `seconds` of frames have passed.
fn settle<B: DragBehavior>(target: &mut Draggable<B>, ctx: &DragContext<'_>, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        target.tick(FRAME, ctx);
    }
}
