//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestSceneBuilder` - Builder pattern for scenes with zones
//! - `RecordingBehavior` - Counts every hook the engine fires
//! - Pointer-session helpers like `drag_path()` and `tick_for()`

#![allow(dead_code)]

use dragdrop::{
    Camera, DragBehavior, DragConfig, DragContext, Draggable, DropZone, OverlayRect, Placement,
    PointerEvent, Scene, ZoneId,
};
use glam::{Vec2, Vec3};

/// Seconds per simulated frame
pub const FRAME: f32 = 1.0 / 60.0;

// ============================================================================
// TestSceneBuilder
// ============================================================================

/// Builder for scenes with named zones.
///
/// The default camera is orthographic with one pixel per world unit and the
/// viewport centered on the origin, so world = screen - 50.
///
/// # Example
/// ```ignore
/// let (scene, ids) = TestSceneBuilder::new()
///     .with_zone_2d("A", (20.0, 20.0))
///     .with_zone_2d("B", (-20.0, 20.0))
///     .build();
/// ```
pub struct TestSceneBuilder {
    camera: Camera,
    canvas: Option<OverlayRect>,
    zones: Vec<ZoneSpec>,
}

enum ZoneSpec {
    Flat(String, Vec3, Vec2),
    Volume(String, Vec3, Vec3),
    Overlay(String, Vec2, Vec2, i32),
}

impl Default for TestSceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSceneBuilder {
    pub fn new() -> Self {
        Self {
            camera: pixel_camera(),
            canvas: None,
            zones: Vec::new(),
        }
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_canvas(mut self, canvas: OverlayRect) -> Self {
        self.canvas = Some(canvas);
        self
    }

    /// 2D zone with a 10x10 collider centered on `pos`.
    pub fn with_zone_2d(mut self, name: &str, pos: (f32, f32)) -> Self {
        self.zones.push(ZoneSpec::Flat(
            name.to_string(),
            Vec3::new(pos.0, pos.1, 0.0),
            Vec2::splat(5.0),
        ));
        self
    }

    /// 3D zone with a 10x10x10 box centered on `pos`.
    pub fn with_zone_3d(mut self, name: &str, pos: (f32, f32, f32)) -> Self {
        self.zones.push(ZoneSpec::Volume(
            name.to_string(),
            Vec3::new(pos.0, pos.1, pos.2),
            Vec3::splat(5.0),
        ));
        self
    }

    /// Overlay zone with a 10x10 rect at canvas-local `pos`.
    pub fn with_overlay_zone(mut self, name: &str, pos: (f32, f32), order: i32) -> Self {
        self.zones.push(ZoneSpec::Overlay(
            name.to_string(),
            Vec2::new(pos.0, pos.1),
            Vec2::splat(5.0),
            order,
        ));
        self
    }

    /// Build the scene. Zone ids come back in insertion order.
    pub fn build(self) -> (Scene, Vec<ZoneId>) {
        let mut scene = Scene::new(self.camera);
        if let Some(canvas) = self.canvas {
            scene = scene.with_canvas(canvas);
        }
        let ids = self
            .zones
            .into_iter()
            .map(|spec| match spec {
                ZoneSpec::Flat(name, pos, half) => scene.add_zone_2d(&name, pos, half),
                ZoneSpec::Volume(name, pos, half) => scene.add_zone_3d(&name, pos, half),
                ZoneSpec::Overlay(name, pos, half, order) => {
                    scene.add_overlay_zone(&name, pos, half, order)
                }
            })
            .collect();
        (scene, ids)
    }
}

pub fn pixel_camera() -> Camera {
    Camera::orthographic(Vec3::new(0.0, 0.0, 10.0), 50.0, Vec2::new(100.0, 100.0))
}

/// Screen point above world `(x, y)` for [`pixel_camera`].
pub fn screen_of(x: f32, y: f32) -> PointerEvent {
    PointerEvent::at(x + 50.0, y + 50.0)
}

// ============================================================================
// RecordingBehavior
// ============================================================================

/// Counts hook invocations and remembers the zones dropped on.
#[derive(Debug, Default)]
pub struct RecordingBehavior {
    pub taps: usize,
    pub double_taps: usize,
    pub start_drags: usize,
    pub end_drags: usize,
    pub drops: Vec<String>,
}

impl DragBehavior for RecordingBehavior {
    fn tap(&mut self) {
        self.taps += 1;
    }

    fn double_tap(&mut self) {
        self.double_taps += 1;
    }

    fn start_drag(&mut self) {
        self.start_drags += 1;
    }

    fn end_drag(&mut self) {
        self.end_drags += 1;
    }

    fn drop_on_drop_zone(&mut self, zone: &DropZone) {
        self.drops.push(zone.name.clone());
    }
}

pub fn world_draggable(x: f32, y: f32) -> Draggable<RecordingBehavior> {
    Draggable::new(
        "obj",
        Placement::World(Vec3::new(x, y, 0.0)),
        DragConfig::default(),
        RecordingBehavior::default(),
    )
}

// ============================================================================
// Pointer sessions
// ============================================================================

/// Down at the first world point, drag through the rest, release at the last.
pub fn drag_path<B: DragBehavior>(obj: &mut Draggable<B>, ctx: &DragContext<'_>, path: &[(f32, f32)]) {
    let Some((&(x, y), rest)) = path.split_first() else {
        return;
    };
    let down = screen_of(x, y);
    obj.pointer_down(&down, ctx);
    obj.begin_drag(&down);
    let mut last = down;
    for &(x, y) in rest {
        last = screen_of(x, y);
        obj.drag(&last, ctx);
    }
    obj.end_drag(&last);
    obj.release(&last, ctx);
}

/// Press and release in place.
pub fn tap_at<B: DragBehavior>(obj: &mut Draggable<B>, ctx: &DragContext<'_>, x: f32, y: f32) {
    let event = screen_of(x, y);
    obj.pointer_down(&event, ctx);
    obj.release(&event, ctx);
}

/// Tick frames until `seconds` have passed.
pub fn tick_for<B: DragBehavior>(obj: &mut Draggable<B>, ctx: &DragContext<'_>, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        obj.tick(FRAME, ctx);
    }
}

/// Tick until the settle animation finishes.
pub fn settle<B: DragBehavior>(obj: &mut Draggable<B>, ctx: &DragContext<'_>) {
    for _ in 0..600 {
        if !obj.is_settling() {
            return;
        }
        obj.tick(FRAME, ctx);
    }
    panic!("settle animation did not finish");
}

pub fn assert_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-4,
        "expected {expected:?}, got {actual:?}"
    );
}
