//! Spatial Index Module
//!
//! R-tree backed [`SpatialQuery`] implementation. Three trees are kept:
//! UI rectangles in canvas-local coordinates, 2D colliders in the world x/y
//! plane and 3D boxes. Point queries are O(log n); the 3D ray query narrows
//! candidates to the ray segment inside the tree bounds before running a slab
//! test on each.

use crate::math::{Aabb3, Ray};
use crate::services::{ColliderHit, OverlayRect, SpatialQuery, UiHit};
use crate::zone::{Layer, LayerMask, ZoneId};
use glam::{Vec2, Vec3};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Handle returned on insertion, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u64);

/// Shared metadata for every indexed object.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInfo {
    pub name: String,
    pub layer: Layer,
    pub zone: Option<ZoneId>,
}

impl EntryInfo {
    pub fn new(name: impl Into<String>, layer: Layer) -> Self {
        Self {
            name: name.into(),
            layer,
            zone: None,
        }
    }

    pub fn zone(name: impl Into<String>, zone: ZoneId) -> Self {
        Self {
            name: name.into(),
            layer: Layer::DROP_ZONE,
            zone: Some(zone),
        }
    }
}

/// A rectangle in a 2D tree (UI element or 2D collider).
#[derive(Debug, Clone)]
struct FlatEntry {
    id: EntryId,
    info: EntryInfo,
    /// Render / sorting order, higher is in front
    order: i32,
    min: Vec2,
    max: Vec2,
}

impl FlatEntry {
    #[inline]
    fn contains_point(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Front-to-back sort key: higher order first, later insertion first on ties.
    fn depth_key(&self) -> (i32, u64) {
        (self.order, self.id.0)
    }
}

impl RTreeObject for FlatEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min.to_array(), self.max.to_array())
    }
}

impl PartialEq for FlatEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// A box in the 3D tree.
#[derive(Debug, Clone)]
struct VolumeEntry {
    id: EntryId,
    info: EntryInfo,
    bounds: Aabb3,
}

impl RTreeObject for VolumeEntry {
    type Envelope = AABB<[f32; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bounds.min.to_array(), self.bounds.max.to_array())
    }
}

impl PartialEq for VolumeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Copy of an inserted entry and the tree that holds it.
#[derive(Debug, Clone)]
enum Indexed {
    Ui(FlatEntry),
    Collider2d(FlatEntry),
    Collider3d(VolumeEntry),
}

impl Indexed {
    fn zone(&self) -> Option<ZoneId> {
        match self {
            Indexed::Ui(e) | Indexed::Collider2d(e) => e.info.zone,
            Indexed::Collider3d(e) => e.info.zone,
        }
    }
}

/// Hit-testing index for UI elements and world colliders.
pub struct SpatialIndex {
    /// Maps screen points into canvas-local UI coordinates
    canvas: Option<OverlayRect>,
    ui: RTree<FlatEntry>,
    colliders_2d: RTree<FlatEntry>,
    colliders_3d: RTree<VolumeEntry>,
    entries: HashMap<EntryId, Indexed>,
    next_id: u64,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            canvas: None,
            ui: RTree::new(),
            colliders_2d: RTree::new(),
            colliders_3d: RTree::new(),
            entries: HashMap::new(),
            next_id: 0,
        }
    }

    /// UI queries convert screen points through this canvas rect.
    pub fn set_canvas(&mut self, canvas: Option<OverlayRect>) {
        self.canvas = canvas;
    }

    fn allocate(&mut self) -> EntryId {
        self.next_id += 1;
        EntryId(self.next_id)
    }

    /// Insert a UI rectangle given in canvas-local coordinates.
    pub fn insert_ui(&mut self, info: EntryInfo, center: Vec2, half_size: Vec2, order: i32) -> EntryId {
        let id = self.allocate();
        let half = half_size.abs();
        let entry = FlatEntry {
            id,
            info,
            order,
            min: center - half,
            max: center + half,
        };
        self.ui.insert(entry.clone());
        self.entries.insert(id, Indexed::Ui(entry));
        id
    }

    /// Insert a 2D collider in the world x/y plane.
    pub fn insert_2d(&mut self, info: EntryInfo, center: Vec2, half_size: Vec2, order: i32) -> EntryId {
        let id = self.allocate();
        let half = half_size.abs();
        let entry = FlatEntry {
            id,
            info,
            order,
            min: center - half,
            max: center + half,
        };
        self.colliders_2d.insert(entry.clone());
        self.entries.insert(id, Indexed::Collider2d(entry));
        id
    }

    pub fn insert_3d(&mut self, info: EntryInfo, center: Vec3, half_extents: Vec3) -> EntryId {
        let id = self.allocate();
        let entry = VolumeEntry {
            id,
            info,
            bounds: Aabb3::from_center_half_extents(center, half_extents),
        };
        self.colliders_3d.insert(entry.clone());
        self.entries.insert(id, Indexed::Collider3d(entry));
        id
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.entries.remove(&id) {
            Some(Indexed::Ui(entry)) => self.ui.remove(&entry).is_some(),
            Some(Indexed::Collider2d(entry)) => self.colliders_2d.remove(&entry).is_some(),
            Some(Indexed::Collider3d(entry)) => self.colliders_3d.remove(&entry).is_some(),
            None => false,
        }
    }

    /// Remove every entry that refers to `zone`. Returns how many were removed.
    pub fn remove_zone(&mut self, zone: ZoneId) -> usize {
        let ids: Vec<EntryId> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.zone() == Some(zone))
            .map(|(id, _)| *id)
            .collect();
        ids.into_iter().filter(|id| self.remove(*id)).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flat_hits_at<'a>(tree: &'a RTree<FlatEntry>, p: Vec2) -> Vec<&'a FlatEntry> {
        let point_envelope = AABB::from_point(p.to_array());
        let mut hits: Vec<&FlatEntry> = tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(p))
            .collect();
        hits.sort_by(|a, b| b.depth_key().cmp(&a.depth_key()));
        hits
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialQuery for SpatialIndex {
    fn query_ui_at(&self, screen: Vec2) -> Vec<UiHit> {
        let local = match self.canvas {
            Some(canvas) if canvas.scale.abs() > f32::EPSILON => (screen - canvas.origin) / canvas.scale,
            Some(_) => return Vec::new(),
            None => screen,
        };

        Self::flat_hits_at(&self.ui, local)
            .into_iter()
            .map(|entry| UiHit {
                name: entry.info.name.clone(),
                layer: entry.info.layer,
                zone: entry.info.zone,
            })
            .collect()
    }

    fn query_physics_2d_at(&self, world: Vec2, mask: LayerMask) -> Option<ColliderHit> {
        Self::flat_hits_at(&self.colliders_2d, world)
            .into_iter()
            .find(|entry| mask.contains(entry.info.layer))
            .map(|entry| ColliderHit {
                name: entry.info.name.clone(),
                zone: entry.info.zone,
                point: world.extend(0.0),
                distance: 0.0,
            })
    }

    fn query_physics_3d_along(&self, ray: &Ray, mask: LayerMask) -> Option<ColliderHit> {
        if self.colliders_3d.size() == 0 {
            return None;
        }

        // Clip the ray to the tree bounds so the envelope query stays finite
        let root = self.colliders_3d.root().envelope();
        let bounds = Aabb3 {
            min: Vec3::from_array(root.lower()),
            max: Vec3::from_array(root.upper()),
        };
        let (t0, t1) = bounds.ray_interval(ray)?;
        let (a, b) = (ray.point_at(t0), ray.point_at(t1));
        let segment = AABB::from_corners(a.min(b).to_array(), a.max(b).to_array());

        self.colliders_3d
            .locate_in_envelope_intersecting(&segment)
            .filter(|entry| mask.contains(entry.info.layer))
            .filter_map(|entry| entry.bounds.ray_interval(ray).map(|(enter, _)| (entry, enter)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(entry, distance)| ColliderHit {
                name: entry.info.name.clone(),
                zone: entry.info.zone,
                point: ray.point_at(distance),
                distance,
            })
    }
}
