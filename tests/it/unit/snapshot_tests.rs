//! Snapshot tests using the insta crate.
//!
//! Serialized records are pinned inline so a format change shows up as a diff
//! in review.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use dragdrop::{DragConfig, Layer, ZoneRegistry};
use glam::Vec3;

// ============================================================================
// DragConfig Serialization Tests
// ============================================================================

#[test]
fn snapshot_default_config() {
    let json = serde_json::to_string_pretty(&DragConfig::default()).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "tap_window": 0.25,
      "settle_duration": 0.1,
      "max_depth_offset": 1.0,
      "drag_threshold": 10.0
    }
    "#);
}

#[test]
fn snapshot_custom_config() {
    let config = DragConfig {
        tap_window: 0.5,
        settle_duration: 0.25,
        max_depth_offset: 2.0,
        drag_threshold: 4.0,
    };
    let json = serde_json::to_string_pretty(&config).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "tap_window": 0.5,
      "settle_duration": 0.25,
      "max_depth_offset": 2.0,
      "drag_threshold": 4.0
    }
    "#);
}

// ============================================================================
// DropZone Serialization Tests
// ============================================================================

#[test]
fn snapshot_drop_zone() {
    let mut zones = ZoneRegistry::new();
    let id = zones.insert("shelf", Vec3::new(20.0, -4.5, 0.0));
    let zone = zones.get(id).unwrap();

    assert_eq!(zone.layer, Layer::DROP_ZONE);
    let json = serde_json::to_string_pretty(zone).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "id": 1,
      "name": "shelf",
      "position": [
        20.0,
        -4.5,
        0.0
      ],
      "layer": 9
    }
    "#);
}
