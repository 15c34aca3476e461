//! Reference [`Projection`] implementation.
//!
//! Screen coordinates are pixels with the origin at the bottom-left corner of
//! the viewport and y pointing up. The camera looks down its local -Z axis.

use crate::math::Ray;
use crate::services::{OverlayRect, Projection};
use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraKind {
    /// Parallel projection; `half_height` world units above and below center.
    Orthographic { half_height: f32 },
    /// Vertical field of view in radians, near plane distance.
    Perspective { fov_y: f32, near: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Quat,
    /// Viewport size in pixels
    pub viewport: Vec2,
    pub kind: CameraKind,
}

impl Camera {
    pub fn orthographic(position: Vec3, half_height: f32, viewport: Vec2) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            viewport,
            kind: CameraKind::Orthographic { half_height },
        }
    }

    pub fn perspective(position: Vec3, fov_y: f32, viewport: Vec2) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            viewport,
            kind: CameraKind::Perspective { fov_y, near: 0.1 },
        }
    }

    /// Rotate so the camera faces `target`.
    pub fn looking_at(mut self, target: Vec3) -> Self {
        if let Some(dir) = (target - self.position).try_normalize() {
            self.rotation = Quat::from_rotation_arc(Vec3::NEG_Z, dir);
        }
        self
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    #[inline]
    fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    #[inline]
    fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y
    }

    /// Screen pixels to normalized device coordinates in [-1, 1].
    fn ndc(&self, screen: Vec2) -> Option<Vec2> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }
        Some(screen / self.viewport * 2.0 - Vec2::ONE)
    }
}

impl Projection for Camera {
    fn screen_to_overlay_point(&self, screen: Vec2, reference: &OverlayRect) -> Option<Vec2> {
        if !reference.scale.is_finite() || reference.scale.abs() < f32::EPSILON {
            return None;
        }
        Some((screen - reference.origin) / reference.scale)
    }

    fn screen_ray(&self, screen: Vec2) -> Option<Ray> {
        let ndc = self.ndc(screen)?;
        match self.kind {
            CameraKind::Orthographic { half_height } => {
                let half_width = half_height * self.aspect();
                let origin = self.position
                    + self.right() * ndc.x * half_width
                    + self.up() * ndc.y * half_height;
                Ray::new(origin, self.forward())
            }
            CameraKind::Perspective { fov_y, .. } => {
                let tan = (fov_y * 0.5).tan();
                let dir = self.forward()
                    + self.right() * ndc.x * tan * self.aspect()
                    + self.up() * ndc.y * tan;
                Ray::new(self.position, dir)
            }
        }
    }

    fn screen_to_world_point(&self, screen: Vec2) -> Option<Vec3> {
        let ray = self.screen_ray(screen)?;
        match self.kind {
            CameraKind::Orthographic { .. } => Some(ray.origin),
            CameraKind::Perspective { near, .. } => {
                let along = ray.direction.dot(self.forward());
                (along > f32::EPSILON).then(|| ray.point_at(near / along))
            }
        }
    }

    fn camera_forward(&self) -> Vec3 {
        self.forward()
    }
}
