//! Collaborators the drag engine consumes but does not implement.
//!
//! A host wires its own hit testing and camera math in through
//! [`SpatialQuery`] and [`Projection`]. Both are read-only: the engine calls
//! them every frame and expects no side effects. [`crate::scene::Scene`] is a
//! self-contained implementation of both.

use crate::math::{Plane, Ray};
use crate::zone::{Layer, LayerMask, ZoneId, ZoneRegistry};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// One element under the pointer in the UI ray cast.
#[derive(Debug, Clone, PartialEq)]
pub struct UiHit {
    pub name: String,
    pub layer: Layer,
    /// Set when the element is a drop zone.
    pub zone: Option<ZoneId>,
}

/// Result of a 2D or 3D physics query.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderHit {
    pub name: String,
    pub zone: Option<ZoneId>,
    pub point: Vec3,
    pub distance: f32,
}

/// Screen-space rectangle of an overlay canvas.
///
/// Canvas-local point `p` sits at screen position `origin + p * scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayRect {
    pub origin: Vec2,
    pub size: Vec2,
    pub scale: f32,
}

impl OverlayRect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            origin,
            size,
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// World and UI hit testing.
pub trait SpatialQuery {
    /// All UI elements under `screen`, front to back.
    fn query_ui_at(&self, screen: Vec2) -> Vec<UiHit>;

    /// Topmost 2D collider containing `world` on a layer in `mask`.
    fn query_physics_2d_at(&self, world: Vec2, mask: LayerMask) -> Option<ColliderHit>;

    /// Nearest 3D collider along `ray` on a layer in `mask`.
    fn query_physics_3d_along(&self, ray: &Ray, mask: LayerMask) -> Option<ColliderHit>;
}

/// Screen to overlay / world conversion.
pub trait Projection {
    /// Canvas-local point under `screen`, `None` when the rect is degenerate.
    fn screen_to_overlay_point(&self, screen: Vec2, reference: &OverlayRect) -> Option<Vec2>;

    /// Camera ray through `screen`.
    fn screen_ray(&self, screen: Vec2) -> Option<Ray>;

    /// World point at the camera near plane under `screen`.
    fn screen_to_world_point(&self, screen: Vec2) -> Option<Vec3>;

    fn camera_forward(&self) -> Vec3;

    fn screen_to_world_on_plane(&self, ray: &Ray, plane: &Plane) -> Option<Vec3> {
        plane.intersect(ray)
    }
}

/// Everything a draggable needs from the outside world for one call.
#[derive(Clone, Copy)]
pub struct DragContext<'a> {
    pub zones: &'a ZoneRegistry,
    pub query: &'a dyn SpatialQuery,
    pub projection: &'a dyn Projection,
}

impl<'a> DragContext<'a> {
    pub fn new(
        zones: &'a ZoneRegistry,
        query: &'a dyn SpatialQuery,
        projection: &'a dyn Projection,
    ) -> Self {
        Self {
            zones,
            query,
            projection,
        }
    }
}
