//! Drop resolution: accepted zones, no-ops, fallbacks and scripted placement.

use crate::helpers::{
    TestSceneBuilder, assert_near, drag_path, screen_of, settle, world_draggable,
};
use dragdrop::{DragState, DropOutcome, FallbackTarget, ZoneRef};
use glam::Vec3;

fn two_zones() -> (dragdrop::Scene, dragdrop::ZoneId, dragdrop::ZoneId) {
    let (scene, ids) = TestSceneBuilder::new()
        .with_zone_2d("A", (20.0, 20.0))
        .with_zone_2d("B", (-20.0, 20.0))
        .build();
    (scene, ids[0], ids[1])
}

#[test]
fn test_release_over_nothing_returns_to_anchor() {
    let (scene, _, _) = two_zones();
    let ctx = scene.context();
    let mut obj = world_draggable(0.0, 0.0);

    drag_path(&mut obj, &ctx, &[(0.0, 0.0), (0.0, -15.0), (0.0, -30.0)]);
    assert_eq!(obj.state(), DragState::Dropped);
    assert!(obj.is_settling());

    settle(&mut obj, &ctx);
    assert_eq!(obj.position(), Vec3::ZERO);
    assert_eq!(obj.state(), DragState::Waiting);
    assert_eq!(obj.current_drop_zone(), None);
    assert!(obj.behavior().drops.is_empty());
}

#[test]
fn test_drop_sequence_tracks_previous_zone() {
    let (scene, a, b) = two_zones();
    let ctx = scene.context();
    let mut obj = world_draggable(0.0, 0.0);

    // Onto A
    drag_path(&mut obj, &ctx, &[(0.0, 0.0), (10.0, 10.0), (20.0, 20.0)]);
    assert_eq!(obj.current_drop_zone(), Some(a));
    assert_eq!(obj.previous_drop_zone(), None);
    assert_eq!(obj.behavior().drops, ["A"]);
    settle(&mut obj, &ctx);
    assert_eq!(obj.position(), Vec3::new(20.0, 20.0, 0.0));
    assert_eq!(obj.anchor_position(), Vec3::new(20.0, 20.0, 0.0));
    assert_eq!(obj.state(), DragState::Waiting);

    // Onto B
    drag_path(&mut obj, &ctx, &[(20.0, 20.0), (0.0, 20.0), (-20.0, 20.0)]);
    assert_eq!(obj.current_drop_zone(), Some(b));
    assert_eq!(obj.previous_drop_zone(), Some(a));
    settle(&mut obj, &ctx);
    assert_eq!(obj.position(), Vec3::new(-20.0, 20.0, 0.0));

    // Over nothing: back to A, not to the spawn point
    drag_path(&mut obj, &ctx, &[(-20.0, 20.0), (0.0, -30.0)]);
    assert_eq!(obj.settle_target(), Some(Vec3::new(20.0, 20.0, 0.0)));
    settle(&mut obj, &ctx);
    assert_eq!(obj.position(), Vec3::new(20.0, 20.0, 0.0));
    assert_eq!(obj.state(), DragState::Waiting);

    // Arrival makes A current again
    assert_eq!(obj.current_drop_zone(), Some(a));
    assert_eq!(obj.previous_drop_zone(), Some(b));
    assert_eq!(obj.behavior().drops, ["A", "B", "A"]);
}

#[test]
fn test_drop_on_current_zone_is_noop() {
    let (scene, a, _) = two_zones();
    let ctx = scene.context();
    let mut obj = world_draggable(0.0, 0.0);

    drag_path(&mut obj, &ctx, &[(0.0, 0.0), (20.0, 20.0)]);
    settle(&mut obj, &ctx);

    let down = screen_of(20.0, 20.0);
    let up = screen_of(22.0, 22.0);
    obj.pointer_down(&down, &ctx);
    obj.begin_drag(&down);
    obj.drag(&up, &ctx);
    obj.end_drag(&up);
    let outcome = obj.release(&up, &ctx);

    assert_eq!(outcome, Some(DropOutcome::Unchanged(a)));
    assert!(!obj.is_settling());
    assert_eq!(obj.state(), DragState::Waiting);
    assert_eq!(obj.current_drop_zone(), Some(a));
    assert_eq!(obj.previous_drop_zone(), None);
    assert_eq!(obj.behavior().drops, ["A"]);
}

#[test]
fn test_disallowed_zone_behaves_like_nothing() {
    let (scene, a, b) = two_zones();
    let ctx = scene.context();
    let mut obj = world_draggable(0.0, 0.0);
    obj.set_allowed_zones([a]);

    drag_path(&mut obj, &ctx, &[(0.0, 0.0), (-20.0, 20.0)]);
    assert_eq!(obj.current_drop_zone(), None);
    assert_eq!(obj.settle_target(), Some(Vec3::ZERO));
    settle(&mut obj, &ctx);
    assert_eq!(obj.position(), Vec3::ZERO);
    assert!(obj.behavior().drops.is_empty());

    obj.allow_any_zone();
    drag_path(&mut obj, &ctx, &[(0.0, 0.0), (-20.0, 20.0)]);
    assert_eq!(obj.current_drop_zone(), Some(b));
}

#[test]
fn test_disallowed_zone_falls_back_to_previous() {
    let (scene, ids) = TestSceneBuilder::new()
        .with_zone_2d("A", (20.0, 20.0))
        .with_zone_2d("B", (-20.0, 20.0))
        .with_zone_2d("C", (0.0, -30.0))
        .build();
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    let ctx = scene.context();
    let mut obj = world_draggable(0.0, 0.0);
    obj.set_allowed_zones([a, b]);

    drag_path(&mut obj, &ctx, &[(0.0, 0.0), (20.0, 20.0)]);
    settle(&mut obj, &ctx);
    drag_path(&mut obj, &ctx, &[(20.0, 20.0), (-20.0, 20.0)]);
    settle(&mut obj, &ctx);

    let down = screen_of(-20.0, 20.0);
    let up = screen_of(0.0, -30.0);
    obj.pointer_down(&down, &ctx);
    obj.begin_drag(&down);
    obj.drag(&up, &ctx);
    let outcome = obj.release(&up, &ctx);

    assert_eq!(outcome, Some(DropOutcome::Fallback(FallbackTarget::PreviousZone(a))));
    assert!(!obj.allowed_zones().contains(&c));
    settle(&mut obj, &ctx);
    assert_eq!(obj.position(), Vec3::new(20.0, 20.0, 0.0));
    assert_eq!(obj.current_drop_zone(), Some(a));
}

#[test]
fn test_removed_previous_zone_falls_back_to_anchor() {
    let (mut scene, a, b) = two_zones();
    let mut obj = world_draggable(0.0, 0.0);
    {
        let ctx = scene.context();
        drag_path(&mut obj, &ctx, &[(0.0, 0.0), (20.0, 20.0)]);
        settle(&mut obj, &ctx);
        drag_path(&mut obj, &ctx, &[(20.0, 20.0), (-20.0, 20.0)]);
        settle(&mut obj, &ctx);
    }
    assert_eq!(obj.previous_drop_zone(), Some(a));

    scene.remove_zone(a);
    let ctx = scene.context();

    let down = screen_of(-20.0, 20.0);
    let up = screen_of(0.0, -30.0);
    obj.pointer_down(&down, &ctx);
    obj.begin_drag(&down);
    obj.drag(&up, &ctx);
    let outcome = obj.release(&up, &ctx);

    let anchor = Vec3::new(-20.0, 20.0, 0.0);
    assert_eq!(outcome, Some(DropOutcome::Fallback(FallbackTarget::Anchor(anchor))));
    settle(&mut obj, &ctx);
    assert_eq!(obj.position(), anchor);
    assert_eq!(obj.current_drop_zone(), Some(b));
}

#[test]
fn test_tap_on_current_zone_does_not_move() {
    let (scene, a, _) = two_zones();
    let ctx = scene.context();
    let mut obj = world_draggable(0.0, 0.0);
    drag_path(&mut obj, &ctx, &[(0.0, 0.0), (20.0, 20.0)]);
    settle(&mut obj, &ctx);

    let event = screen_of(20.0, 20.0);
    obj.pointer_down(&event, &ctx);
    assert_eq!(obj.release(&event, &ctx), Some(DropOutcome::Unchanged(a)));
    assert_eq!(obj.state(), DragState::Waiting);
    assert!(!obj.is_settling());
}

// ============================================================================
// Scripted placement
// ============================================================================

#[test]
fn test_move_to_drop_zone_by_name_and_id() {
    let (scene, a, b) = two_zones();
    let ctx = scene.context();
    let mut obj = world_draggable(0.0, 0.0);

    assert_eq!(obj.move_to_drop_zone(Some("B".into()), &ctx), DropOutcome::Accepted(b));
    settle(&mut obj, &ctx);
    assert_eq!(obj.position(), Vec3::new(-20.0, 20.0, 0.0));
    assert_eq!(obj.state(), DragState::Waiting);

    assert_eq!(obj.move_to_drop_zone(Some(a.into()), &ctx), DropOutcome::Accepted(a));
    settle(&mut obj, &ctx);
    assert_eq!(obj.current_drop_zone(), Some(a));
    assert_eq!(obj.previous_drop_zone(), Some(b));
    assert_eq!(obj.behavior().drops, ["B", "A"]);

    // Same zone again changes nothing
    assert_eq!(obj.move_to_drop_zone(Some(ZoneRef::Id(a)), &ctx), DropOutcome::Unchanged(a));
    assert!(!obj.is_settling());
    assert_eq!(obj.behavior().drops.len(), 2);
}

#[test]
fn test_move_to_missing_target_is_drop_on_nothing() {
    let (scene, _, b) = two_zones();
    let ctx = scene.context();
    let mut obj = world_draggable(5.0, 5.0);

    let anchor = Vec3::new(5.0, 5.0, 0.0);
    assert_eq!(
        obj.move_to_drop_zone(None, &ctx),
        DropOutcome::Fallback(FallbackTarget::Anchor(anchor))
    );
    assert_eq!(
        obj.move_to_drop_zone(Some("nowhere".into()), &ctx),
        DropOutcome::Fallback(FallbackTarget::Anchor(anchor))
    );
    settle(&mut obj, &ctx);
    assert_near(obj.position(), anchor);

    obj.set_allowed_zones([]);
    assert!(obj.is_zone_allowed(b));
}

#[test]
fn test_move_to_disallowed_zone_is_rejected() {
    let (scene, a, b) = two_zones();
    let ctx = scene.context();
    let mut obj = world_draggable(0.0, 0.0);
    obj.set_allowed_zones([a]);

    assert!(matches!(
        obj.move_to_drop_zone(Some(b.into()), &ctx),
        DropOutcome::Fallback(_)
    ));
    assert_eq!(obj.current_drop_zone(), None);
}
