//! Coordinate spaces for dragging.
//!
//! A draggable lives either in world space or in an overlay canvas. The
//! strategy is picked once at construction and everything that depends on it
//! (grab offset, per-frame position, drop-target lookup, settle positions)
//! goes through [`CoordinateSpace`], so the state machine never branches on
//! the space itself.

use crate::error::DragError;
use crate::math::Plane;
use crate::services::{DragContext, OverlayRect};
use crate::zone::{Layer, ZoneId};
use glam::{Vec2, Vec3};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    World,
    Overlay,
}

/// Captured at pointer-down and kept for the whole drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Grab {
    /// Object-to-pointer offset; meaning depends on the space
    pub offset: Vec3,
    /// Object depth when grabbed (world space)
    pub depth: f32,
}

pub trait CoordinateSpace: fmt::Debug {
    fn space(&self) -> Space;

    /// Offset between the object and the pointer at pointer-down.
    fn grab(&self, screen: Vec2, position: Vec3, ctx: &DragContext<'_>) -> Result<Grab, DragError>;

    /// Object position for the current pointer location.
    fn drag_position(
        &self,
        screen: Vec2,
        position: Vec3,
        grab: &Grab,
        ctx: &DragContext<'_>,
    ) -> Result<Vec3, DragError>;

    /// Drop zone under the release point, if any.
    fn drop_candidate(&self, screen: Vec2, ctx: &DragContext<'_>) -> Option<ZoneId>;

    /// Position in this space's native representation.
    fn native(&self, position: Vec3) -> Vec3 {
        position
    }
}

// ============================================================================
// World space
// ============================================================================

/// Drags on a camera-facing plane through the object.
#[derive(Debug, Clone)]
pub struct WorldSpace {
    max_depth_offset: f32,
}

impl WorldSpace {
    pub fn new(max_depth_offset: f32) -> Self {
        Self { max_depth_offset }
    }

    fn plane_hit(&self, screen: Vec2, through: Vec3, ctx: &DragContext<'_>) -> Result<Vec3, DragError> {
        let projection = ctx.projection;
        let ray = projection
            .screen_ray(screen)
            .ok_or(DragError::DegenerateProjection)?;
        let plane = Plane::from_point_normal(through, -projection.camera_forward())
            .ok_or(DragError::DegenerateProjection)?;
        projection
            .screen_to_world_on_plane(&ray, &plane)
            .ok_or(DragError::DegenerateProjection)
    }
}

impl CoordinateSpace for WorldSpace {
    fn space(&self) -> Space {
        Space::World
    }

    fn grab(&self, screen: Vec2, position: Vec3, ctx: &DragContext<'_>) -> Result<Grab, DragError> {
        let hit = self.plane_hit(screen, position, ctx)?;
        Ok(Grab {
            offset: position - hit,
            depth: position.z,
        })
    }

    fn drag_position(
        &self,
        screen: Vec2,
        position: Vec3,
        grab: &Grab,
        ctx: &DragContext<'_>,
    ) -> Result<Vec3, DragError> {
        let mut candidate = self.plane_hit(screen, position, ctx)? + grab.offset;
        candidate.z = candidate.z.clamp(
            grab.depth - self.max_depth_offset,
            grab.depth + self.max_depth_offset,
        );
        Ok(candidate)
    }

    fn drop_candidate(&self, screen: Vec2, ctx: &DragContext<'_>) -> Option<ZoneId> {
        let mask = Layer::DROP_ZONE.mask();

        // 2D colliders take precedence over 3D ones
        if let Some(point) = ctx.projection.screen_to_world_point(screen) {
            if let Some(hit) = ctx.query.query_physics_2d_at(point.truncate(), mask) {
                debug!(object = %hit.name, "2D object hit");
                return hit.zone;
            }
        }

        let ray = ctx.projection.screen_ray(screen)?;
        let hit = ctx.query.query_physics_3d_along(&ray, mask)?;
        debug!(object = %hit.name, distance = hit.distance, "3D object hit");
        hit.zone
    }
}

// ============================================================================
// Overlay space
// ============================================================================

/// Drags in canvas-local coordinates of an overlay rectangle.
#[derive(Debug, Clone)]
pub struct OverlaySpace {
    owner: String,
    canvas: Option<OverlayRect>,
}

impl OverlaySpace {
    pub fn new(owner: impl Into<String>, canvas: Option<OverlayRect>) -> Self {
        Self {
            owner: owner.into(),
            canvas,
        }
    }

    fn project(&self, screen: Vec2, ctx: &DragContext<'_>) -> Result<Vec2, DragError> {
        let canvas = self
            .canvas
            .as_ref()
            .ok_or_else(|| DragError::MissingOverlayContainer(self.owner.clone()))?;
        ctx.projection
            .screen_to_overlay_point(screen, canvas)
            .ok_or(DragError::DegenerateProjection)
    }
}

impl CoordinateSpace for OverlaySpace {
    fn space(&self) -> Space {
        Space::Overlay
    }

    fn grab(&self, screen: Vec2, position: Vec3, ctx: &DragContext<'_>) -> Result<Grab, DragError> {
        let local = self.project(screen, ctx)?;
        Ok(Grab {
            offset: (local - position.truncate()).extend(0.0),
            depth: 0.0,
        })
    }

    fn drag_position(
        &self,
        screen: Vec2,
        _position: Vec3,
        grab: &Grab,
        ctx: &DragContext<'_>,
    ) -> Result<Vec3, DragError> {
        let local = self.project(screen, ctx)?;
        Ok((local - grab.offset.truncate()).extend(0.0))
    }

    fn drop_candidate(&self, screen: Vec2, ctx: &DragContext<'_>) -> Option<ZoneId> {
        let hit = ctx
            .query
            .query_ui_at(screen)
            .into_iter()
            .find(|hit| hit.layer == Layer::DROP_ZONE)?;
        debug!(object = %hit.name, "Canvas object hit");
        hit.zone
    }

    fn native(&self, position: Vec3) -> Vec3 {
        position.truncate().extend(0.0)
    }
}
