//! In-memory scene: zone registry, hit-testing index and camera in one place.
//!
//! Hosts with their own engine implement [`SpatialQuery`] and [`Projection`]
//! directly. `Scene` is what the demo binary and the tests drive.

use crate::camera::Camera;
use crate::services::{DragContext, OverlayRect};
use crate::spatial_index::{EntryId, EntryInfo, SpatialIndex};
use crate::zone::{DropZone, Layer, ZoneId, ZoneRegistry};
use glam::{Vec2, Vec3};

pub struct Scene {
    pub camera: Camera,
    zones: ZoneRegistry,
    index: SpatialIndex,
    canvas: Option<OverlayRect>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            zones: ZoneRegistry::new(),
            index: SpatialIndex::new(),
            canvas: None,
        }
    }

    /// Attach the overlay canvas used by UI zones and overlay draggables.
    pub fn with_canvas(mut self, canvas: OverlayRect) -> Self {
        self.canvas = Some(canvas);
        self.index.set_canvas(Some(canvas));
        self
    }

    pub fn canvas(&self) -> Option<OverlayRect> {
        self.canvas
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    pub fn zone(&self, id: ZoneId) -> Option<&DropZone> {
        self.zones.get(id)
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// World zone with a flat collider in the x/y plane.
    pub fn add_zone_2d(&mut self, name: &str, position: Vec3, half_size: Vec2) -> ZoneId {
        let id = self.zones.insert(name, position);
        self.index
            .insert_2d(EntryInfo::zone(name, id), position.truncate(), half_size, 0);
        id
    }

    /// World zone with a box collider.
    pub fn add_zone_3d(&mut self, name: &str, position: Vec3, half_extents: Vec3) -> ZoneId {
        let id = self.zones.insert(name, position);
        self.index
            .insert_3d(EntryInfo::zone(name, id), position, half_extents);
        id
    }

    /// Overlay zone at a canvas-local position.
    pub fn add_overlay_zone(&mut self, name: &str, position: Vec2, half_size: Vec2, order: i32) -> ZoneId {
        let id = self.zones.insert(name, position.extend(0.0));
        self.index
            .insert_ui(EntryInfo::zone(name, id), position, half_size, order);
        id
    }

    /// Non-zone UI element, e.g. the visual of an overlay draggable.
    pub fn add_ui_element(&mut self, name: &str, layer: Layer, center: Vec2, half_size: Vec2, order: i32) -> EntryId {
        self.index
            .insert_ui(EntryInfo::new(name, layer), center, half_size, order)
    }

    pub fn add_collider_2d(&mut self, name: &str, layer: Layer, center: Vec2, half_size: Vec2, order: i32) -> EntryId {
        self.index
            .insert_2d(EntryInfo::new(name, layer), center, half_size, order)
    }

    pub fn add_collider_3d(&mut self, name: &str, layer: Layer, center: Vec3, half_extents: Vec3) -> EntryId {
        self.index
            .insert_3d(EntryInfo::new(name, layer), center, half_extents)
    }

    /// Destroy a zone. Draggables still pointing at it resolve it as "no candidate".
    pub fn remove_zone(&mut self, id: ZoneId) -> Option<DropZone> {
        self.index.remove_zone(id);
        self.zones.remove(id)
    }

    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        self.index.remove(id)
    }

    pub fn context(&self) -> DragContext<'_> {
        DragContext::new(&self.zones, &self.index, &self.camera)
    }
}
